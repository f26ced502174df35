use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// first half (by duration) or second half of a trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    Ascending,
    Descending,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Ascending => write!(f, "Ascending"),
            Phase::Descending => write!(f, "Descending"),
        }
    }
}
