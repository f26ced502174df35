mod input_table;
pub mod output_ops;

pub use input_table::InputTable;
