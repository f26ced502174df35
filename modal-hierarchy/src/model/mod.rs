mod mode_label;
mod phase;
mod phased_route;
mod route;
mod route_error;
mod segment;
mod transition;

pub use mode_label::ModeLabel;
pub use phase::Phase;
pub use phased_route::PhasedRoute;
pub use route::Route;
pub use route_error::{RouteError, RouteErrorKind};
pub use segment::Segment;
pub use transition::Transition;

/// compares two durations (minutes) with a tolerance that scales with their magnitude
/// once they exceed one minute.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}
