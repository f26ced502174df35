use modal_hierarchy::driver::DriverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("file '{file}' is missing required column '{column}'")]
    MissingColumn { file: String, column: String },
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading or writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure running dataset: {source}")]
    DatasetError {
        #[from]
        source: DriverError,
    },
}
