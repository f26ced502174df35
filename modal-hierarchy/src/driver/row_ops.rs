//! the per-row pipeline. every function here is pure and may run on any worker.
use super::{ProcessingConfig, RowOutcome};
use crate::algorithm::{midpoint_ops, simplify_ops, transition_ops};
use crate::model::{Phase, PhasedRoute, Route, RouteError, Transition};

/// parses and simplifies an itinerary.
pub fn simplify_itinerary(
    itinerary: &str,
    config: &ProcessingConfig,
) -> Result<Route, RouteError> {
    let route = config.codec.parse_route(itinerary)?;
    simplify_ops::simplify(&route, &config.walking_mode, config.tolerance)
}

/// parses an already simplified itinerary and splits it at its midpoint. the text is
/// simplified again first, which leaves simplified input unchanged.
pub fn split_itinerary(
    itinerary: &str,
    config: &ProcessingConfig,
) -> Result<(PhasedRoute, PhasedRoute), RouteError> {
    let simplified = simplify_itinerary(itinerary, config)?;
    midpoint_ops::split_at_midpoint(&simplified, config.tolerance)
}

/// parses both phase texts of a row and returns their transitions.
pub fn phase_text_transitions(
    ascending: &str,
    descending: &str,
    config: &ProcessingConfig,
) -> Result<Vec<(Phase, Vec<Transition>)>, RouteError> {
    [(Phase::Ascending, ascending), (Phase::Descending, descending)]
        .into_iter()
        .map(|(phase, text)| -> Result<(Phase, Vec<Transition>), RouteError> {
            let phased = config.codec.parse_phase(text, phase)?;
            Ok((phase, transition_ops::phase_transitions(&phased)?))
        })
        .collect()
}

/// runs the full chain for one row: parse, simplify, split, extract transitions.
pub fn process_row(
    row_id: usize,
    itinerary: &str,
    config: &ProcessingConfig,
) -> Result<RowOutcome, RouteError> {
    let simplified = simplify_itinerary(itinerary, config)?;
    let (ascending, descending) = midpoint_ops::split_at_midpoint(&simplified, config.tolerance)?;
    let ascending_transitions = transition_ops::phase_transitions(&ascending)?;
    let descending_transitions = transition_ops::phase_transitions(&descending)?;
    Ok(RowOutcome {
        row_id,
        total_duration: simplified.total_duration(),
        simplified,
        ascending,
        descending,
        ascending_transitions,
        descending_transitions,
    })
}

#[cfg(test)]
mod test {
    use super::{phase_text_transitions, process_row, simplify_itinerary, split_itinerary};
    use crate::driver::test_util::default_config;
    use crate::model::{Phase, RouteErrorKind};

    #[test]
    fn test_simplify_itinerary_text() {
        let config = default_config();
        let simplified = simplify_itinerary(
            "walking(5분) -> bus(15분) -> walking(3분) -> subway(20분) -> walking(2분)",
            &config,
        )
        .expect("test invariant failed");
        assert_eq!(
            config.codec.format_route(&simplified),
            "walking(5분) -> bus(18분) -> subway(20분) -> walking(2분)"
        );
        assert_eq!(simplified.total_duration(), 45.0);
    }

    #[test]
    fn test_split_itinerary_text() {
        let config = default_config();
        let (asc, desc) = split_itinerary("walking(7분) -> subway(6분) -> walking(6분)", &config)
            .expect("test invariant failed");
        assert_eq!(config.codec.format_phase(&asc), "walking(7분) -> subway(2.5분)");
        assert_eq!(config.codec.format_phase(&desc), "subway(3.5분) -> walking(6분)");
    }

    #[test]
    fn test_single_segment_row() {
        let config = default_config();
        let outcome = process_row(0, "subway(10분)", &config).expect("test invariant failed");
        assert_eq!(config.codec.format_phase(&outcome.ascending), "subway(5분)");
        assert_eq!(config.codec.format_phase(&outcome.descending), "subway(5분)");
        assert!(outcome.ascending_transitions.is_empty());
        assert!(outcome.descending_transitions.is_empty());
    }

    #[test]
    fn test_tiny_single_segment_row() {
        let config = default_config();
        let outcome =
            process_row(0, "subway(0.000000001분)", &config).expect("test invariant failed");
        assert_eq!(outcome.ascending.segments.len(), 1);
        assert_eq!(outcome.descending.segments.len(), 1);
        assert_ne!(config.codec.format_phase(&outcome.descending), "N/A");
    }

    #[test]
    fn test_malformed_row() {
        let config = default_config();
        let err = process_row(3, "bus(15", &config).expect_err("row should fail");
        assert_eq!(err.kind(), RouteErrorKind::MalformedSegment);
    }

    #[test]
    fn test_phase_text_with_marker() {
        let config = default_config();
        let result = phase_text_transitions("walking(2분) -> bus(3분)", "N/A", &config)
            .expect("test invariant failed");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, Phase::Ascending);
        assert_eq!(result[0].1.len(), 1);
        assert_eq!(result[1].0, Phase::Descending);
        assert!(result[1].1.is_empty());
    }
}
