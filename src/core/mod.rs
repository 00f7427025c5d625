// ModSieve - core/mod.rs
//
// Core layer: segmentation, data model, report rendering, export.
// Pure logic over in-memory content; never touches the filesystem.

pub mod export;
pub mod model;
pub mod report;
pub mod segmenter;
