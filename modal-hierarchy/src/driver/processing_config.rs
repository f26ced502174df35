use crate::codec::ItineraryCodec;
use crate::model::ModeLabel;

/// settings shared by every row of a run.
#[derive(Clone, Debug)]
pub struct ProcessingConfig {
    pub codec: ItineraryCodec,
    /// the non-transit mode absorbed by the simplifier
    pub walking_mode: ModeLabel,
    /// relative tolerance for duration comparisons, scaled by the durations compared
    pub tolerance: f64,
}

impl ProcessingConfig {
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;

    pub fn new(codec: ItineraryCodec, walking_mode: ModeLabel, tolerance: f64) -> Self {
        Self {
            codec,
            walking_mode,
            tolerance,
        }
    }
}
