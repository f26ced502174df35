mod hierarchy_app;
mod hierarchy_operation;
pub mod stage_ops;

pub use hierarchy_app::HierarchyApp;
pub use hierarchy_operation::HierarchyOperation;
