pub mod midpoint_ops;
pub mod simplify_ops;
pub mod transition_ops;
