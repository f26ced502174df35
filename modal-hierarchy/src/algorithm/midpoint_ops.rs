//! divides a simplified route into its ascending (first half) and descending
//! (second half) phases at 50% of the total duration.
use crate::model::{Phase, PhasedRoute, Route, RouteError, Segment};

/// splits a route at the temporal midpoint `T/2`.
///
/// segments that end at or before the midpoint go to the ascending phase, segments
/// that start at or after it go to the descending phase, and the one segment that
/// straddles it is cut into two parts of the same mode. when the midpoint lands on a
/// segment boundary, the segment before the boundary belongs wholly to the ascending
/// phase, so a zero-length part is never created. boundaries are matched within
/// `tolerance` as a fraction of the route total, so short routes split the same way
/// long ones do.
///
/// # Arguments
///
/// * `route` - a (simplified) route, total duration is always positive
/// * `tolerance` - boundary matching tolerance relative to the total duration
///
/// # Returns
///
/// the ascending and descending phases. their durations sum to the route total.
pub fn split_at_midpoint(
    route: &Route,
    tolerance: f64,
) -> Result<(PhasedRoute, PhasedRoute), RouteError> {
    let total = route.total_duration();
    let half = total / 2.0;
    let boundary_tolerance = tolerance * total;
    let mut ascending: Vec<Segment> = vec![];
    let mut descending: Vec<Segment> = vec![];
    let mut accumulated = 0.0;
    let mut half_reached = false;

    for segment in route.segments() {
        if half_reached {
            descending.push(segment.clone());
            continue;
        }
        let end = accumulated + segment.duration();
        if end <= half + boundary_tolerance {
            ascending.push(segment.clone());
            accumulated = end;
            half_reached = (half - accumulated).abs() <= boundary_tolerance;
        } else {
            let ascending_part = half - accumulated;
            let descending_part = segment.duration() - ascending_part;
            ascending.push(Segment::new(segment.mode().clone(), ascending_part)?);
            descending.push(Segment::new(segment.mode().clone(), descending_part)?);
            half_reached = true;
        }
    }

    Ok((
        PhasedRoute::new(Phase::Ascending, ascending),
        PhasedRoute::new(Phase::Descending, descending),
    ))
}

#[cfg(test)]
mod test {
    use super::split_at_midpoint;
    use crate::algorithm::simplify_ops::simplify;
    use crate::algorithm::test_util::{legs, route};
    use crate::model::{ModeLabel, Phase, Route, Segment};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const TOL: f64 = 1e-9;

    fn owned(expected: &[(&str, f64)]) -> Vec<(String, f64)> {
        expected.iter().map(|(m, d)| (m.to_string(), *d)).collect()
    }

    #[test]
    fn test_straddling_segment_split() {
        let input = route(&[("walking", 7.0), ("subway", 6.0), ("walking", 6.0)]);
        let (asc, desc) = split_at_midpoint(&input, TOL).expect("split should succeed");
        assert_eq!(asc.phase, Phase::Ascending);
        assert_eq!(desc.phase, Phase::Descending);
        assert_eq!(
            legs(&asc.segments),
            owned(&[("walking", 7.0), ("subway", 2.5)])
        );
        assert_eq!(
            legs(&desc.segments),
            owned(&[("subway", 3.5), ("walking", 6.0)])
        );
        assert_eq!(asc.total_duration(), 9.5);
        assert_eq!(desc.total_duration(), 9.5);
    }

    #[test]
    fn test_single_segment_halved() {
        let input = route(&[("subway", 10.0)]);
        let (asc, desc) = split_at_midpoint(&input, TOL).expect("split should succeed");
        assert_eq!(legs(&asc.segments), owned(&[("subway", 5.0)]));
        assert_eq!(legs(&desc.segments), owned(&[("subway", 5.0)]));
    }

    #[test]
    fn test_exact_boundary_goes_to_ascending() {
        let input = route(&[("walking", 4.0), ("bus", 6.0), ("subway", 10.0)]);
        let (asc, desc) = split_at_midpoint(&input, TOL).expect("split should succeed");
        assert_eq!(legs(&asc.segments), owned(&[("walking", 4.0), ("bus", 6.0)]));
        assert_eq!(legs(&desc.segments), owned(&[("subway", 10.0)]));
    }

    #[test]
    fn test_tiny_routes_split_into_two_phases() {
        for duration in [1e-9, 2e-9, 1e-12] {
            let input = route(&[("subway", duration)]);
            let (asc, desc) = split_at_midpoint(&input, TOL).expect("split should succeed");
            assert_eq!(asc.segments.len(), 1);
            assert_eq!(desc.segments.len(), 1);
            assert_eq!(asc.total_duration() + desc.total_duration(), duration);
        }
        let input = route(&[("walking", 2e-10), ("bus", 3e-10), ("subway", 5e-10)]);
        let (asc, desc) = split_at_midpoint(&input, TOL).expect("split should succeed");
        assert_eq!(
            legs(&asc.segments),
            owned(&[("walking", 2e-10), ("bus", 3e-10)])
        );
        assert_eq!(legs(&desc.segments), owned(&[("subway", 5e-10)]));
    }

    #[test]
    fn test_first_segment_straddles() {
        let input = route(&[("subway", 30.0), ("walking", 2.0)]);
        let (asc, desc) = split_at_midpoint(&input, TOL).expect("split should succeed");
        assert_eq!(legs(&asc.segments), owned(&[("subway", 16.0)]));
        assert_eq!(
            legs(&desc.segments),
            owned(&[("subway", 14.0), ("walking", 2.0)])
        );
    }

    #[test]
    fn test_random_routes_split_conserves_duration() {
        const MODES: [&str; 4] = ["walking", "bus", "subway", "tram"];
        let mut rng = StdRng::seed_from_u64(2024);
        let walking = ModeLabel::walking();
        for _ in 0..500 {
            let n = rng.random_range(1..=8);
            let segments = (0..n)
                .map(|_| {
                    let mode = ModeLabel::try_from(MODES[rng.random_range(0..MODES.len())])
                        .expect("test invariant failed");
                    Segment::new(mode, rng.random_range(1..=600) as f64 / 10.0)
                        .expect("test invariant failed")
                })
                .collect();
            let raw = Route::new(segments).expect("test invariant failed");
            let simplified = simplify(&raw, &walking, TOL).expect("simplify should succeed");
            let total = simplified.total_duration();
            let (asc, desc) =
                split_at_midpoint(&simplified, TOL).expect("split should succeed");

            assert!(!asc.segments.is_empty());
            assert!(!desc.segments.is_empty());
            assert!((asc.total_duration() + desc.total_duration() - total).abs() < 1e-6);
            assert!((asc.total_duration() - total / 2.0).abs() < 1e-6);
            for phase in [&asc, &desc] {
                for pair in phase.segments.windows(2) {
                    assert_ne!(pair[0].mode(), pair[1].mode());
                }
            }
        }
    }
}
