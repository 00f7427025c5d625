// ModSieve - platform/mod.rs
//
// Platform integration: filesystem access and configuration loading.

pub mod config;
pub mod fs;
