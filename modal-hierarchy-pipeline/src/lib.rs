pub mod app;
pub mod config;
pub mod io;
mod pipeline_error;

pub use pipeline_error::PipelineError;
