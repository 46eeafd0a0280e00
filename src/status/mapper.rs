// src/status/mapper.rs
use crate::status::Status;
use std::collections::HashMap;

/// Maps an aggregated status to an HTTP response code.
pub trait HttpCodeStatusMapper: Send + Sync {
    fn status_code(&self, status: Status) -> u16;
}

/// Table-driven mapper. Statuses without an entry map to 200.
#[derive(Debug, Clone)]
pub struct SimpleHttpCodeStatusMapper {
    mappings: HashMap<Status, u16>,
}

impl SimpleHttpCodeStatusMapper {
    pub fn new(mappings: HashMap<Status, u16>) -> Self {
        Self { mappings }
    }
}

impl Default for SimpleHttpCodeStatusMapper {
    fn default() -> Self {
        let mut mappings = HashMap::new();
        mappings.insert(Status::Down, 503);
        mappings.insert(Status::OutOfService, 503);
        Self::new(mappings)
    }
}

impl HttpCodeStatusMapper for SimpleHttpCodeStatusMapper {
    fn status_code(&self, status: Status) -> u16 {
        self.mappings.get(&status).copied().unwrap_or(200)
    }
}
