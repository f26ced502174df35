use super::HierarchyOperation;
use crate::{config::PipelineConfiguration, PipelineError};
use clap::Parser;

/// command line tool for simplifying trip itineraries, splitting them into ascending
/// and descending phases, and counting mode transitions per phase
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct HierarchyApp {
    #[command(subcommand)]
    pub op: HierarchyOperation,
    /// path to a .toml or .json file with pipeline parameters
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// number of worker threads, overrides the configuration file
    #[arg(long)]
    pub parallelism: Option<usize>,
}

impl HierarchyApp {
    pub fn run(&self) -> Result<(), PipelineError> {
        let mut conf = match &self.configuration_file {
            None => PipelineConfiguration::default(),
            Some(f) => {
                log::info!("reading pipeline configuration from {f}");
                PipelineConfiguration::try_from(f)?
            }
        };
        if let Some(parallelism) = self.parallelism {
            conf.parallelism = parallelism;
        }
        self.op.run(&conf)
    }
}
