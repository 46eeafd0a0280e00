// src/status/aggregator.rs
use crate::status::Status;

/// Reduces the statuses of many checks to one overall status.
pub trait StatusAggregator: Send + Sync {
    fn aggregate(&self, statuses: &[Status]) -> Status;
}

/// Aggregator driven by a severity order, most severe first.
///
/// The overall status is the earliest entry of the order that appears in
/// the input. Statuses missing from the order are ignored; if nothing
/// matches (including empty input) the result is `Unknown`.
#[derive(Debug, Clone)]
pub struct SimpleStatusAggregator {
    order: Vec<Status>,
}

impl SimpleStatusAggregator {
    pub fn new(order: Vec<Status>) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &[Status] {
        &self.order
    }
}

impl Default for SimpleStatusAggregator {
    fn default() -> Self {
        Self::new(vec![
            Status::Down,
            Status::OutOfService,
            Status::Up,
            Status::Unknown,
        ])
    }
}

impl StatusAggregator for SimpleStatusAggregator {
    fn aggregate(&self, statuses: &[Status]) -> Status {
        self.order
            .iter()
            .copied()
            .find(|candidate| statuses.contains(candidate))
            .unwrap_or(Status::Unknown)
    }
}
