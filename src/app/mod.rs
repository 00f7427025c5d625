// ModSieve - app/mod.rs
//
// Application layer: owns all I/O around the core segmenter.

pub mod pipeline;
