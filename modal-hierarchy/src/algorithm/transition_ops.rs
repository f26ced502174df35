use crate::model::{PhasedRoute, RouteError, Segment, Transition};

/// lists the transitions between each pair of temporally adjacent segments, in order.
/// fewer than two segments yields no transitions. two adjacent segments with the same
/// mode fail with [`RouteError::SelfTransition`].
pub fn transitions(segments: &[Segment]) -> Result<Vec<Transition>, RouteError> {
    segments
        .windows(2)
        .map(|pair| Transition::new(pair[0].mode().clone(), pair[1].mode().clone()))
        .collect()
}

/// transitions of one phase of a route.
pub fn phase_transitions(phased: &PhasedRoute) -> Result<Vec<Transition>, RouteError> {
    transitions(&phased.segments)
}
