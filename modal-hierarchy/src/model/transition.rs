use super::{ModeLabel, RouteError};
use serde::Serialize;
use std::fmt::Display;

/// an ordered change of mode between two temporally adjacent segments.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Transition {
    from: ModeLabel,
    to: ModeLabel,
}

impl Transition {
    /// fails with [`RouteError::SelfTransition`] when both modes are the same.
    pub fn new(from: ModeLabel, to: ModeLabel) -> Result<Transition, RouteError> {
        if from == to {
            Err(RouteError::SelfTransition {
                mode: from.to_string(),
            })
        } else {
            Ok(Transition { from, to })
        }
    }
}

/// formatted as "modeA -> modeB"
impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
