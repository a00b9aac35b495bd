pub mod config;
pub mod document;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod scoring;
pub mod telemetry;

pub use pipeline::{ReportArtifacts, ReportPipeline};
