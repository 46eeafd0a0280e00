// src/group/mod.rs
mod group;
mod members;

pub use group::{HealthGroup, ShowDetails};
pub use members::Members;
