// src/main.rs
use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::info;

mod config;
mod group;
mod registry;
mod security;
mod status;

use crate::{
    group::HealthGroup,
    registry::HealthGroups,
    security::SecurityContext,
    status::Status,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("health_groups=debug".parse()?),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let statuses_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "statuses.json".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;
    let groups = HealthGroups::from_config(&config);

    // One status per check name, as an indicator layer would report them.
    let contents = tokio::fs::read_to_string(&statuses_path)
        .await
        .context("Failed to read statuses file")?;
    let statuses: HashMap<String, Status> =
        serde_json::from_str(&contents).context("Failed to parse statuses file")?;

    report("primary", groups.primary(), &statuses);
    for name in groups.names() {
        if let Some(group) = groups.get(name) {
            report(name, group, &statuses);
        }
    }

    Ok(())
}

fn report(name: &str, group: &HealthGroup, statuses: &HashMap<String, Status>) {
    let member_statuses: Vec<Status> = statuses
        .iter()
        .filter(|(check, _)| group.is_member(check))
        .map(|(_, status)| *status)
        .collect();

    let overall = group.status_aggregator().aggregate(&member_statuses);
    let http_code = group.http_code_mapper().status_code(overall);
    let details_for_anonymous = group.include_details(&SecurityContext::anonymous());

    info!(
        group = %name,
        members = member_statuses.len(),
        status = %overall,
        http_code,
        details_for_anonymous,
        "Evaluated health group"
    );
}
