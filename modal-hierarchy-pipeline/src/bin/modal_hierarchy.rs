//! reads a CSV of trip itineraries and writes simplified itineraries, their ascending
//! and descending phases, and per-phase mode transition counts.
use clap::Parser;
use modal_hierarchy_pipeline::app::HierarchyApp;

fn main() {
    env_logger::init();
    let args = HierarchyApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
