use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// row-level failures of the itinerary pipeline. none of these are fatal to a
/// dataset run; the driver records them and skips the row.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("itinerary has no segments")]
    EmptyRoute,
    #[error("malformed segment {index} at byte {offset}: '{text}'")]
    MalformedSegment {
        text: String,
        index: usize,
        offset: usize,
    },
    #[error("segment '{mode}' has non-positive duration {duration}")]
    NonPositiveDuration { mode: String, duration: f64 },
    #[error("interior walking segment at index {index} has no preceding segment to absorb into")]
    UnabsorbableWalkingSegment { index: usize },
    #[error("simplification changed total duration from {expected} to {observed}")]
    SimplificationInvariantViolation { expected: f64, observed: f64 },
    #[error("adjacent segments share mode '{mode}', cannot form a transition")]
    SelfTransition { mode: String },
}

/// the kind of a [`RouteError`], used as a key when summarizing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RouteErrorKind {
    EmptyRoute,
    MalformedSegment,
    NonPositiveDuration,
    UnabsorbableWalkingSegment,
    SimplificationInvariantViolation,
    SelfTransition,
}

impl RouteError {
    pub fn kind(&self) -> RouteErrorKind {
        match self {
            RouteError::EmptyRoute => RouteErrorKind::EmptyRoute,
            RouteError::MalformedSegment { .. } => RouteErrorKind::MalformedSegment,
            RouteError::NonPositiveDuration { .. } => RouteErrorKind::NonPositiveDuration,
            RouteError::UnabsorbableWalkingSegment { .. } => {
                RouteErrorKind::UnabsorbableWalkingSegment
            }
            RouteError::SimplificationInvariantViolation { .. } => {
                RouteErrorKind::SimplificationInvariantViolation
            }
            RouteError::SelfTransition { .. } => RouteErrorKind::SelfTransition,
        }
    }
}

impl Display for RouteErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RouteErrorKind::EmptyRoute => "EmptyRoute",
            RouteErrorKind::MalformedSegment => "MalformedSegment",
            RouteErrorKind::NonPositiveDuration => "NonPositiveDuration",
            RouteErrorKind::UnabsorbableWalkingSegment => "UnabsorbableWalkingSegment",
            RouteErrorKind::SimplificationInvariantViolation => {
                "SimplificationInvariantViolation"
            }
            RouteErrorKind::SelfTransition => "SelfTransition",
        };
        write!(f, "{s}")
    }
}
