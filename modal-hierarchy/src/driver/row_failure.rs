use crate::model::{RouteError, RouteErrorKind};
use serde::{Deserialize, Serialize};

/// a row excluded from the aggregate, kept for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    pub row_id: usize,
    pub kind: RouteErrorKind,
    pub message: String,
}

impl RowFailure {
    pub fn new(row_id: usize, error: &RouteError) -> RowFailure {
        RowFailure {
            row_id,
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
