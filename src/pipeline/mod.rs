//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the
//! [MergePipeline], which assembles per-corpus tables and unions them
//! into one labeled dataset.
mod merge;
#[allow(clippy::module_inception)]
mod pipeline;

pub use merge::{CorpusSpec, ErrorPolicy, Format, MergePipeline};
pub use pipeline::Pipeline;
