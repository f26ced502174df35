use super::{RouteError, Segment};
use serde::Serialize;

/// a non-empty, temporally ordered sequence of [`Segment`]s describing one trip
/// from origin to destination.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    segments: Vec<Segment>,
}

impl Route {
    pub fn new(segments: Vec<Segment>) -> Result<Route, RouteError> {
        if segments.is_empty() {
            Err(RouteError::EmptyRoute)
        } else {
            Ok(Route { segments })
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// always false for a constructed route, provided for completeness with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// sum of segment durations in minutes
    pub fn total_duration(&self) -> f64 {
        self.segments.iter().map(Segment::duration).sum()
    }
}
