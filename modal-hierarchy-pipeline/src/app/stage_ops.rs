//! the dataset stages. each reads a CSV, applies the per-row pipeline through the
//! driver, writes rows that succeeded, and reports the rows that failed.
use crate::{
    config::PipelineConfiguration,
    io::{output_ops, InputTable},
    PipelineError,
};
use csv::StringRecord;
use modal_hierarchy::{
    aggregate::AggregateCounts,
    driver::{self, row_ops, DatasetDriver, FailureSummary},
};

/// appends the simplified itinerary and its total duration to every row that parses.
pub fn simplify_stage(
    input_file: &str,
    output_file: &str,
    failures_file: Option<&String>,
    conf: &PipelineConfiguration,
) -> Result<(), PipelineError> {
    let processing = conf.processing_config()?;
    let table = InputTable::read(input_file)?;
    let rows = table.trip_rows(&conf.columns.route_column)?;

    log::info!("simplifying trip routes...");
    let (simplified, failures) = driver::try_map_rows(&rows, conf.parallelism, |row| {
        row_ops::simplify_itinerary(&row.itinerary, &processing)
    })?;

    let headers = extend_headers(
        &table.headers,
        &[
            &conf.columns.simplified_column,
            &conf.columns.total_duration_column,
        ],
    );
    let records = simplified
        .into_iter()
        .map(|(row_id, route)| {
            let text = processing.codec.format_route(&route);
            let total = route.total_duration().to_string();
            extend_record(&table.records[row_id], &[&text, &total])
        })
        .collect();
    output_ops::write_records(output_file, &headers, records)?;
    let summary = FailureSummary::new(table.len(), &failures);
    output_ops::report_failures(failures_file, &failures, &summary)
}

/// appends the ascending and descending phase itineraries to every row that parses.
pub fn split_stage(
    input_file: &str,
    output_file: &str,
    failures_file: Option<&String>,
    conf: &PipelineConfiguration,
) -> Result<(), PipelineError> {
    let processing = conf.processing_config()?;
    let table = InputTable::read(input_file)?;
    let rows = table.trip_rows(&conf.columns.simplified_column)?;

    log::info!("splitting routes into ascending and descending segments...");
    let (phases, failures) = driver::try_map_rows(&rows, conf.parallelism, |row| {
        row_ops::split_itinerary(&row.itinerary, &processing)
    })?;

    let headers = extend_headers(
        &table.headers,
        &[&conf.columns.ascending_column, &conf.columns.descending_column],
    );
    let records = phases
        .into_iter()
        .map(|(row_id, (ascending, descending))| {
            let asc = processing.codec.format_phase(&ascending);
            let desc = processing.codec.format_phase(&descending);
            extend_record(&table.records[row_id], &[&asc, &desc])
        })
        .collect();
    output_ops::write_records(output_file, &headers, records)?;
    let summary = FailureSummary::new(table.len(), &failures);
    output_ops::report_failures(failures_file, &failures, &summary)
}

/// counts transitions per phase from the ascending and descending columns.
pub fn count_stage(
    input_file: &str,
    output_file: &str,
    failures_file: Option<&String>,
    conf: &PipelineConfiguration,
) -> Result<(), PipelineError> {
    let processing = conf.processing_config()?;
    let table = InputTable::read(input_file)?;
    let rows = table.trip_rows(&conf.columns.ascending_column)?;
    let descending_idx = table.column_index(&conf.columns.descending_column)?;
    let descending: Vec<&str> = table
        .records
        .iter()
        .map(|r| r.get(descending_idx).unwrap_or_default())
        .collect();

    log::info!("extracting transitions from ascending and descending routes...");
    let (per_row, failures) = driver::try_map_rows(&rows, conf.parallelism, |row| {
        let desc = descending.get(row.row_id).copied().unwrap_or_default();
        row_ops::phase_text_transitions(&row.itinerary, desc, &processing)
    })?;

    let mut counts = AggregateCounts::new();
    for (_, phases) in per_row {
        for (phase, transitions) in phases {
            counts.add_all(transitions, phase);
        }
    }
    output_ops::write_transitions(output_file, &counts)?;
    let summary = FailureSummary::new(table.len(), &failures);
    output_ops::report_failures(failures_file, &failures, &summary)
}

/// runs the whole chain in one pass through [`DatasetDriver`].
pub fn run_all(
    input_file: &str,
    trips_output: &str,
    transitions_output: &str,
    failures_file: Option<&String>,
    conf: &PipelineConfiguration,
) -> Result<(), PipelineError> {
    let processing = conf.processing_config()?;
    let table = InputTable::read(input_file)?;
    let rows = table.trip_rows(&conf.columns.route_column)?;

    let driver = DatasetDriver::new(processing, conf.parallelism);
    let report = driver.run(&rows)?;
    let codec = &driver.config.codec;

    let headers = extend_headers(
        &table.headers,
        &[
            &conf.columns.simplified_column,
            &conf.columns.total_duration_column,
            &conf.columns.ascending_column,
            &conf.columns.descending_column,
        ],
    );
    let records = report
        .outcomes
        .iter()
        .map(|outcome| {
            let simplified = codec.format_route(&outcome.simplified);
            let total = outcome.total_duration.to_string();
            let asc = codec.format_phase(&outcome.ascending);
            let desc = codec.format_phase(&outcome.descending);
            extend_record(
                &table.records[outcome.row_id],
                &[&simplified, &total, &asc, &desc],
            )
        })
        .collect();
    output_ops::write_records(trips_output, &headers, records)?;
    output_ops::write_transitions(transitions_output, &report.counts)?;
    output_ops::report_failures(failures_file, &report.failures, &report.summary)
}

fn extend_headers(headers: &StringRecord, columns: &[&String]) -> StringRecord {
    let mut out = headers.clone();
    for column in columns {
        out.push_field(column);
    }
    out
}

fn extend_record(record: &StringRecord, values: &[&String]) -> StringRecord {
    let mut out = record.clone();
    for value in values {
        out.push_field(value);
    }
    out
}
