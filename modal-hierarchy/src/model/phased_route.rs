use super::{Phase, Segment};
use serde::Serialize;

/// the segments of one [`Phase`] of a route. unlike a [`super::Route`] this may be
/// empty when it was read back from phase text holding the empty-phase marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhasedRoute {
    pub phase: Phase,
    pub segments: Vec<Segment>,
}

impl PhasedRoute {
    pub fn new(phase: Phase, segments: Vec<Segment>) -> PhasedRoute {
        PhasedRoute { phase, segments }
    }

    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(Segment::duration).sum()
    }
}
