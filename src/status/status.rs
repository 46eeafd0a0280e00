// src/status/status.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single health check, or of a whole group after aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Up,           // Check passed
    Unknown,      // No result available
    OutOfService, // Deliberately taken out of rotation
    Down,         // Check failed
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Up => "UP",
            Status::Unknown => "UNKNOWN",
            Status::OutOfService => "OUT_OF_SERVICE",
            Status::Down => "DOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
