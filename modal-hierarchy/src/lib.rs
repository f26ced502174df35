//! converts multimodal trip itineraries into a simplified canonical form, splits
//! each itinerary into an ascending and a descending phase at its temporal midpoint,
//! and counts mode-to-mode transitions per phase across a dataset of trips.
//!
//! data flows [`codec`] -> [`algorithm::simplify_ops`] -> [`algorithm::midpoint_ops`]
//! -> [`algorithm::transition_ops`] per trip row, and [`driver`] reduces the per-row
//! results into an [`aggregate::AggregateCounts`].
pub mod aggregate;
pub mod algorithm;
pub mod codec;
pub mod driver;
pub mod model;
