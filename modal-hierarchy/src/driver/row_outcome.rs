use crate::model::{PhasedRoute, Route, Transition};

/// everything derived from one successfully processed row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowOutcome {
    pub row_id: usize,
    pub simplified: Route,
    pub total_duration: f64,
    pub ascending: PhasedRoute,
    pub descending: PhasedRoute,
    pub ascending_transitions: Vec<Transition>,
    pub descending_transitions: Vec<Transition>,
}
