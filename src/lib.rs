// ModSieve - lib.rs
//
// Library entry point, exposing all modules for integration testing and
// programmatic use (the segmenter is reusable by any reporting or
// orchestration caller).

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
