// src/lib.rs
pub mod config;
pub mod group;
pub mod registry;
pub mod security;
pub mod status;
