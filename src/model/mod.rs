pub mod aircraft;
pub mod leg;
pub mod performance;
pub mod plan;
pub mod waypoint;

#[cfg(test)]
pub(crate) mod test_utils;

pub use aircraft::{Aircraft, PerformanceCurves, PerformanceProfile};
pub use leg::{EvaluatedLeg, RawLeg, SegmentKind};
pub use performance::SegmentPerformance;
pub use plan::FlightPlan;
pub use waypoint::Waypoint;
