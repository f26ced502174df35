use super::{ModeLabel, RouteError};
use serde::Serialize;

/// one leg of a trip: a travel mode and a positive duration in minutes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    mode: ModeLabel,
    duration: f64,
}

impl Segment {
    /// creates a segment, failing with [`RouteError::NonPositiveDuration`] when the
    /// duration is zero, negative, or not a finite number.
    pub fn new(mode: ModeLabel, duration: f64) -> Result<Segment, RouteError> {
        if duration.is_finite() && duration > 0.0 {
            Ok(Segment { mode, duration })
        } else {
            Err(RouteError::NonPositiveDuration {
                mode: mode.to_string(),
                duration,
            })
        }
    }

    pub fn mode(&self) -> &ModeLabel {
        &self.mode
    }

    /// duration in minutes
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// same mode, with `additional` minutes added to the duration.
    pub fn extended(&self, additional: f64) -> Result<Segment, RouteError> {
        Segment::new(self.mode.clone(), self.duration + additional)
    }
}
