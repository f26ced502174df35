mod aggregate_counts;
mod transition_count_row;

pub use aggregate_counts::AggregateCounts;
pub use transition_count_row::TransitionCountRow;
