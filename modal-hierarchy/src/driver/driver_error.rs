#[derive(thiserror::Error, Debug)]
pub enum DriverError {
    #[error("failed to build worker thread pool: {source}")]
    ThreadPoolError {
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
    #[error("parallelism must be at least 1")]
    InvalidParallelism,
}
