use crate::model::Phase;
use serde::{Deserialize, Serialize};

/// one row of the final transition table, `Transition,Count,Type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionCountRow {
    #[serde(rename = "Transition")]
    pub transition: String,
    #[serde(rename = "Count")]
    pub count: u64,
    #[serde(rename = "Type")]
    pub phase: Phase,
}
