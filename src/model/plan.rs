use std::sync::Arc;

use log::{info, warn};

use crate::error::{PerformanceError, Result};

use super::aircraft::Aircraft;
use super::leg::{EvaluatedLeg, RawLeg, SegmentKind};
use super::performance::SegmentPerformance;

pub const MIN_LEGS: usize = 2;

pub struct FlightPlan {
    legs: Vec<RawLeg>,
    aircraft: Arc<Aircraft>,
    evaluated: Vec<EvaluatedLeg>,
    total: SegmentPerformance,
}

impl FlightPlan {
    pub fn new(legs: Vec<RawLeg>, aircraft: Arc<Aircraft>) -> Result<Self> {
        if legs.len() < MIN_LEGS {
            return Err(PerformanceError::Structure(format!(
                "The flight plan must have at least {} legs, found {}",
                MIN_LEGS,
                legs.len()
            )));
        }
        Ok(Self {
            legs,
            aircraft,
            evaluated: Vec::new(),
            total: SegmentPerformance::default(),
        })
    }

    pub fn get_legs(&self) -> &[RawLeg] {
        &self.legs
    }

    pub fn get_aircraft(&self) -> &Arc<Aircraft> {
        &self.aircraft
    }

    /// Evaluated legs, empty until [`FlightPlan::evaluate`] has succeeded.
    pub fn get_evaluated_legs(&self) -> &[EvaluatedLeg] {
        &self.evaluated
    }

    pub fn is_evaluated(&self) -> bool {
        !self.evaluated.is_empty()
    }

    pub fn get_total(&self) -> &SegmentPerformance {
        &self.total
    }

    pub fn get_total_time(&self) -> f64 {
        self.total.time_min
    }

    pub fn get_total_distance(&self) -> f64 {
        self.total.distance_nm
    }

    pub fn get_total_fuel(&self) -> f64 {
        self.total.fuel_gal
    }

    /// Work out every leg, the plan totals and the figures remaining after
    /// each leg.
    ///
    /// Totals only include the legs' own figures, the climb and descent chart
    /// figures are kept on the legs. On error the previous results are kept.
    pub fn evaluate(&mut self) -> Result<()> {
        let fuel_rate = self.aircraft.get_fuel_rate();
        let mut evaluated = Vec::with_capacity(self.legs.len());
        let mut total = SegmentPerformance::default();

        for leg in &self.legs {
            let mag_dev = self.aircraft.compute_mag_dev(leg.true_course);
            let mut result = leg.evaluate(mag_dev, fuel_rate);
            total += result.performance;

            result.altitude_change = match leg.kind {
                SegmentKind::Climb => Some(self.aircraft.compute_climb(
                    leg.start_altitude,
                    leg.end_altitude,
                    leg.temperature,
                )?),
                SegmentKind::Descend => Some(self.aircraft.compute_descent(
                    leg.start_altitude,
                    leg.end_altitude,
                    leg.temperature,
                )?),
                SegmentKind::Cruise => None,
            };
            evaluated.push(result);
        }

        let mut remaining = SegmentPerformance::default();
        for result in evaluated.iter_mut().rev() {
            result.remaining = remaining;
            remaining += result.performance;
        }

        info!(
            "Plan with {} legs: {:.1} min, {:.1} nm, {:.1} gal",
            evaluated.len(),
            total.time_min,
            total.distance_nm,
            total.fuel_gal
        );
        if total.fuel_gal > self.aircraft.get_profile().fuel_capacity_gal {
            warn!(
                "Plan needs {:.1} gal, more than the {:.1} gal {} can carry",
                total.fuel_gal,
                self.aircraft.get_profile().fuel_capacity_gal,
                self.aircraft.get_callsign()
            );
        }

        self.evaluated = evaluated;
        self.total = total;
        Ok(())
    }
}
