// src/registry/mod.rs
use crate::config::{Config, StatusConfig};
use crate::group::{HealthGroup, Members};
use crate::status::{
    HttpCodeStatusMapper, SimpleHttpCodeStatusMapper, SimpleStatusAggregator, StatusAggregator,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// All health groups of the process: a primary group covering every check
/// plus the named groups from configuration.
///
/// Named groups without their own status settings share the primary
/// group's aggregator and mapper instances, so a severity ordering is
/// observed consistently across groups.
pub struct HealthGroups {
    primary: Arc<HealthGroup>,
    groups: HashMap<String, Arc<HealthGroup>>,
}

impl HealthGroups {
    pub fn from_config(config: &Config) -> Self {
        let (aggregator, mapper) = build_status_pair(&config.status);

        let primary = Arc::new(HealthGroup::new(
            Members::all(),
            aggregator.clone(),
            mapper.clone(),
            config.show_details,
            Some(config.roles.clone()),
        ));

        let mut groups = HashMap::new();
        for (name, group_config) in &config.groups {
            let (group_aggregator, group_mapper) = match &group_config.status {
                Some(status) => build_status_pair(status),
                None => (aggregator.clone(), mapper.clone()),
            };
            let group = HealthGroup::new(
                Members::include_exclude(
                    group_config.include.clone(),
                    group_config.exclude.clone(),
                ),
                group_aggregator,
                group_mapper,
                group_config.show_details.unwrap_or(config.show_details),
                Some(
                    group_config
                        .roles
                        .clone()
                        .unwrap_or_else(|| config.roles.clone()),
                ),
            );
            debug!(
                group = %name,
                show_details = ?group.show_details(),
                "Configured health group"
            );
            groups.insert(name.clone(), Arc::new(group));
        }

        Self { primary, groups }
    }

    pub fn primary(&self) -> &Arc<HealthGroup> {
        &self.primary
    }

    pub fn get(&self, name: &str) -> Option<&Arc<HealthGroup>> {
        self.groups.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

fn build_status_pair(
    status: &StatusConfig,
) -> (Arc<dyn StatusAggregator>, Arc<dyn HttpCodeStatusMapper>) {
    (
        Arc::new(SimpleStatusAggregator::new(status.order.clone())),
        Arc::new(SimpleHttpCodeStatusMapper::new(status.http_mapping.clone())),
    )
}
