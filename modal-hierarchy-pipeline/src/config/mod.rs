mod column_names;
mod config_format;
mod pipeline_configuration;

pub use column_names::ColumnNames;
pub use config_format::{read_config_file, ConfigFormat};
pub use pipeline_configuration::PipelineConfiguration;
