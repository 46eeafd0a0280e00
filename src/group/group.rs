// src/group/group.rs
use crate::group::Members;
use crate::security::SecurityContext;
use crate::status::{HttpCodeStatusMapper, StatusAggregator};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// When per-check detail may be disclosed to a caller.
///
/// A closed enumeration: an unrecognized value in configuration is
/// rejected at parse time, so `include_details` never has to handle one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowDetails {
    #[default]
    Never,
    Always,
    WhenAuthorized,
}

/// A named subset of health checks sharing one disclosure policy and one
/// status-aggregation/code-mapping configuration.
///
/// Immutable after construction; reconfiguration means building a new
/// group. All methods take `&self` with no interior mutability, so
/// concurrent callers need no synchronization.
pub struct HealthGroup {
    members: Members,
    status_aggregator: Arc<dyn StatusAggregator>,
    http_code_mapper: Arc<dyn HttpCodeStatusMapper>,
    show_details: ShowDetails,
    roles: HashSet<String>,
}

impl HealthGroup {
    /// An absent role set is normalized to empty here, making the two
    /// indistinguishable from this point on.
    pub fn new(
        members: Members,
        status_aggregator: Arc<dyn StatusAggregator>,
        http_code_mapper: Arc<dyn HttpCodeStatusMapper>,
        show_details: ShowDetails,
        roles: Option<Vec<String>>,
    ) -> Self {
        Self {
            members,
            status_aggregator,
            http_code_mapper,
            show_details,
            roles: roles.unwrap_or_default().into_iter().collect(),
        }
    }

    pub fn is_member(&self, name: &str) -> bool {
        self.members.test(name)
    }

    /// Whether per-check detail may be returned to this caller, as opposed
    /// to just the aggregate status.
    pub fn include_details(&self, security_context: &SecurityContext) -> bool {
        match self.show_details {
            ShowDetails::Never => false,
            ShowDetails::Always => true,
            ShowDetails::WhenAuthorized => self.is_authorized(security_context),
        }
    }

    fn is_authorized(&self, security_context: &SecurityContext) -> bool {
        if security_context.principal().is_none() {
            return false;
        }
        // Empty role set: any authenticated caller qualifies.
        self.roles.is_empty()
            || self
                .roles
                .iter()
                .any(|role| security_context.is_user_in_role(role))
    }

    pub fn show_details(&self) -> ShowDetails {
        self.show_details
    }

    /// The aggregator this group was constructed with. Groups sharing one
    /// aggregator hand back the same instance, so callers observe
    /// consistent ordering across groups.
    pub fn status_aggregator(&self) -> &Arc<dyn StatusAggregator> {
        &self.status_aggregator
    }

    pub fn http_code_mapper(&self) -> &Arc<dyn HttpCodeStatusMapper> {
        &self.http_code_mapper
    }
}
