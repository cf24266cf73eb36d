//! Dead-reckoning nav log and performance figures for a multi leg VFR flight
//! plan: wind triangle, heading chain, time, distance and fuel per leg, plus
//! chart based climb and descent figures.

pub mod earth;
pub mod error;
pub mod hangar;
pub mod model;
pub mod preference;
pub mod util;

pub use error::{PerformanceError, Result};
pub use model::{Aircraft, EvaluatedLeg, FlightPlan, RawLeg, SegmentKind, SegmentPerformance, Waypoint};
