// src/status/mod.rs
mod aggregator;
mod mapper;
mod status;

pub use aggregator::{SimpleStatusAggregator, StatusAggregator};
pub use mapper::{HttpCodeStatusMapper, SimpleHttpCodeStatusMapper};
pub use status::Status;
