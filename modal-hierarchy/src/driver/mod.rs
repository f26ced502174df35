//! applies the per-row pipeline (parse, simplify, split, extract transitions) to every
//! row of a dataset and reduces the results into an [`crate::aggregate::AggregateCounts`].
//! a failing row is recorded and excluded, it never stops the run.
mod dataset_accumulator;
mod dataset_driver;
mod dataset_report;
mod driver_error;
mod failure_summary;
mod processing_config;
mod row_failure;
mod row_outcome;
pub mod row_ops;
mod trip_row;

pub use dataset_accumulator::DatasetAccumulator;
pub use dataset_driver::{try_map_rows, DatasetDriver};
pub use dataset_report::DatasetReport;
pub use driver_error::DriverError;
pub use failure_summary::FailureSummary;
pub use processing_config::ProcessingConfig;
pub use row_failure::RowFailure;
pub use row_outcome::RowOutcome;
pub use trip_row::TripRow;
