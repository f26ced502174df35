//! collapses redundant same-mode hops and folds interior walking connectors into
//! the preceding ride. walking legs at the original first and last positions are
//! first/last-mile access and are kept.
use crate::model::{self, ModeLabel, Route, RouteError, Segment};

/// simplifies a route in a single left-to-right pass.
///
/// for each input segment at original index `i`:
///   - if the last output segment has the same mode, the durations are merged
///   - else if the segment is walking and `i` is neither the first nor the last
///     original index, its duration is absorbed into the last output segment
///   - otherwise the segment is appended
///
/// the first/last test uses the original index, not the output position, so a
/// segment that only becomes first or last after merging is not misclassified.
///
/// # Arguments
///
/// * `route` - route to simplify
/// * `walking_mode` - the designated non-transit mode
/// * `tolerance` - allowed drift in total duration before the result is rejected
///
/// # Returns
///
/// a route where no two adjacent segments share a mode and walking appears only
/// as the first and/or last segment.
pub fn simplify(
    route: &Route,
    walking_mode: &ModeLabel,
    tolerance: f64,
) -> Result<Route, RouteError> {
    let last_index = route.len() - 1;
    let mut output: Vec<Segment> = Vec::with_capacity(route.len());
    for (index, segment) in route.segments().iter().enumerate() {
        let same_mode_as_last = output.last().map(|last| last.mode() == segment.mode());
        match same_mode_as_last {
            Some(true) => absorb_into_last(&mut output, segment, index)?,
            _ if segment.mode() == walking_mode && index != 0 && index != last_index => {
                absorb_into_last(&mut output, segment, index)?
            }
            _ => output.push(segment.clone()),
        }
    }

    let expected = route.total_duration();
    let simplified = Route::new(output)?;
    let observed = simplified.total_duration();
    if !model::approx_eq(expected, observed, tolerance) {
        return Err(RouteError::SimplificationInvariantViolation { expected, observed });
    }
    Ok(simplified)
}

/// adds the segment's duration to the last output segment, keeping that segment's mode.
fn absorb_into_last(
    output: &mut [Segment],
    segment: &Segment,
    index: usize,
) -> Result<(), RouteError> {
    let last = output
        .last_mut()
        .ok_or(RouteError::UnabsorbableWalkingSegment { index })?;
    *last = last.extended(segment.duration())?;
    Ok(())
}
