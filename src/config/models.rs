// src/config/models.rs
use crate::group::ShowDetails;
use crate::status::Status;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Status order must not be empty")]
    EmptyStatusOrder,

    #[error("Status {0} appears more than once in the order")]
    DuplicateStatus(Status),

    #[error("Invalid HTTP code {code} for status {status}")]
    InvalidHttpCode { status: Status, code: u16 },

    #[error("Group '{0}' has no include entries")]
    EmptyGroup(String),
}

/// Top-level health configuration: the primary group's settings plus any
/// named groups. Built once at process start and handed to
/// `HealthGroups::from_config`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub show_details: ShowDetails,

    #[serde(default)]
    pub roles: Vec<String>,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub groups: HashMap<String, GroupConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusConfig {
    /// Severity order, most severe first.
    #[serde(default = "default_order")]
    pub order: Vec<Status>,

    /// Status -> HTTP code; statuses not listed map to 200.
    #[serde(default = "default_http_mapping")]
    pub http_mapping: HashMap<Status, u16>,
}

fn default_order() -> Vec<Status> {
    vec![
        Status::Down,
        Status::OutOfService,
        Status::Up,
        Status::Unknown,
    ]
}

fn default_http_mapping() -> HashMap<Status, u16> {
    HashMap::from([(Status::Down, 503), (Status::OutOfService, 503)])
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            http_mapping: default_http_mapping(),
        }
    }
}

/// A named group. Fields left out fall back to the top-level settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    pub show_details: Option<ShowDetails>,

    pub roles: Option<Vec<String>>,

    /// When set, this group gets its own aggregator/mapper instead of
    /// sharing the primary group's.
    pub status: Option<StatusConfig>,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.status.validate()?;
        for (name, group) in &self.groups {
            if group.include.is_empty() {
                return Err(ConfigError::EmptyGroup(name.clone()));
            }
            if let Some(status) = &group.status {
                status.validate()?;
            }
        }
        Ok(())
    }
}

impl StatusConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.order.is_empty() {
            return Err(ConfigError::EmptyStatusOrder);
        }
        for (index, status) in self.order.iter().enumerate() {
            if self.order[..index].contains(status) {
                return Err(ConfigError::DuplicateStatus(*status));
            }
        }
        for (status, code) in &self.http_mapping {
            if !(100..=599).contains(code) {
                return Err(ConfigError::InvalidHttpCode {
                    status: *status,
                    code: *code,
                });
            }
        }
        Ok(())
    }
}
