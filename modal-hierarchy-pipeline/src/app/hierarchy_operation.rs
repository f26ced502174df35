use super::stage_ops;
use crate::{config::PipelineConfiguration, PipelineError};
use clap::Subcommand;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum HierarchyOperation {
    /// simplify raw itineraries, appending the simplified itinerary and total duration columns
    Simplify {
        /// CSV file with a raw itinerary column
        input_file: String,
        /// CSV file to write
        output_file: String,
        /// optional CSV file listing rows that failed
        #[arg(long)]
        failures_file: Option<String>,
    },
    /// split simplified itineraries into ascending and descending phases at their midpoint
    Split {
        /// CSV file with a simplified itinerary column
        input_file: String,
        /// CSV file to write
        output_file: String,
        /// optional CSV file listing rows that failed
        #[arg(long)]
        failures_file: Option<String>,
    },
    /// count mode transitions of the ascending and descending phase columns
    Count {
        /// CSV file with ascending and descending itinerary columns
        input_file: String,
        /// CSV file to write the Transition,Count,Type table
        output_file: String,
        /// optional CSV file listing rows that failed
        #[arg(long)]
        failures_file: Option<String>,
    },
    /// run simplify, split and count over raw itineraries in a single pass
    Run {
        /// CSV file with a raw itinerary column
        input_file: String,
        /// CSV file to write each trip with its simplified, ascending and descending itineraries
        #[arg(long)]
        trips_output: String,
        /// CSV file to write the Transition,Count,Type table
        #[arg(long)]
        transitions_output: String,
        /// optional CSV file listing rows that failed
        #[arg(long)]
        failures_file: Option<String>,
    },
}

impl HierarchyOperation {
    pub fn run(&self, conf: &PipelineConfiguration) -> Result<(), PipelineError> {
        match self {
            HierarchyOperation::Simplify {
                input_file,
                output_file,
                failures_file,
            } => stage_ops::simplify_stage(input_file, output_file, failures_file.as_ref(), conf),
            HierarchyOperation::Split {
                input_file,
                output_file,
                failures_file,
            } => stage_ops::split_stage(input_file, output_file, failures_file.as_ref(), conf),
            HierarchyOperation::Count {
                input_file,
                output_file,
                failures_file,
            } => stage_ops::count_stage(input_file, output_file, failures_file.as_ref(), conf),
            HierarchyOperation::Run {
                input_file,
                trips_output,
                transitions_output,
                failures_file,
            } => stage_ops::run_all(
                input_file,
                trips_output,
                transitions_output,
                failures_file.as_ref(),
                conf,
            ),
        }
    }
}
