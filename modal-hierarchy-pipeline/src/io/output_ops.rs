//! writers for stage outputs, the transition table and the failed-row report.
use crate::PipelineError;
use csv::StringRecord;
use itertools::Itertools;
use kdam::tqdm;
use modal_hierarchy::{
    aggregate::{AggregateCounts, TransitionCountRow},
    driver::{FailureSummary, RowFailure},
    model::Phase,
};
use std::path::Path;

const FAILURE_HEADERS: [&str; 3] = ["row_id", "kind", "message"];

/// writes a table with the given header, one record per row.
pub fn write_records(
    filename: &str,
    headers: &StringRecord,
    records: Vec<StringRecord>,
) -> Result<(), PipelineError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(Path::new(filename))?;
    writer.write_record(headers)?;
    let n_rows = records.len();
    let write_iter = tqdm!(
        records.into_iter(),
        desc = format!("writing {filename}"),
        total = n_rows
    );
    for record in write_iter {
        writer.write_record(&record)?;
    }
    eprintln!();
    writer.flush()?;
    log::info!("saved {n_rows} records to {filename}");
    Ok(())
}

/// writes the `Transition,Count,Type` table and logs the most frequent transitions.
pub fn write_transitions(filename: &str, counts: &AggregateCounts) -> Result<(), PipelineError> {
    let rows = counts.to_rows();
    log::info!(
        "counted {} ascending and {} descending transitions",
        counts.total(Phase::Ascending),
        counts.total(Phase::Descending)
    );
    log_top_transitions(&rows, 10);
    let mut writer = csv::Writer::from_path(Path::new(filename))?;
    for row in rows.iter() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::info!("saved {} transition records to {filename}", rows.len());
    Ok(())
}

/// writes failed rows as `row_id,kind,message` when a destination is given, and
/// reports the failure summary.
pub fn report_failures(
    filename: Option<&String>,
    failures: &[RowFailure],
    summary: &FailureSummary,
) -> Result<(), PipelineError> {
    if summary.is_empty() {
        log::info!("{summary}");
    } else {
        log::warn!("{summary}");
    }
    if let Some(f) = filename {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(Path::new(f))?;
        writer.write_record(FAILURE_HEADERS)?;
        for failure in failures.iter() {
            writer.serialize(failure)?;
        }
        writer.flush()?;
        log::info!("saved {} failed rows to {f}", failures.len());
    }
    Ok(())
}

fn log_top_transitions(rows: &[TransitionCountRow], n: usize) {
    let top = rows
        .iter()
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .take(n)
        .collect_vec();
    log::info!("top {} transitions (all types):", top.len());
    for row in top {
        log::info!("  {}: {} ({})", row.transition, row.count, row.phase);
    }
}
