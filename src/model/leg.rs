use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::{debug, warn};

use crate::earth::wind::{compute_gs, compute_wca};

use super::performance::SegmentPerformance;
use super::waypoint::Waypoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Climb,
    Cruise,
    Descend,
}

impl Display for SegmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SegmentKind::Climb => "CLIMB",
            SegmentKind::Cruise => "CRUISE",
            SegmentKind::Descend => "DESCEND",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SegmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CLIMB" => Ok(SegmentKind::Climb),
            "CRUISE" => Ok(SegmentKind::Cruise),
            "DESCEND" | "DESCENT" => Ok(SegmentKind::Descend),
            _ => Err(format!("Unknown leg kind {}", s)),
        }
    }
}

/// One leg of a plan as entered by the pilot.
///
/// Angles are in degrees, speeds in knots, altitudes in feet (pressure
/// altitude) and the temperature in Fahrenheit.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLeg {
    pub kind: SegmentKind,
    pub from_waypoint: Waypoint,
    pub to_waypoint: Waypoint,
    pub distance_nm: f64,
    pub true_course: f64,
    pub true_airspeed: f64,
    pub start_altitude: f64,
    pub end_altitude: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
    pub temperature: f64,
    pub mag_var: f64,
}

impl RawLeg {
    pub fn climb(
        from_waypoint: Waypoint,
        to_waypoint: Waypoint,
        distance_nm: f64,
        true_course: f64,
        true_airspeed: f64,
        start_altitude: f64,
        end_altitude: f64,
        wind: (f64, f64),
        temperature: f64,
        mag_var: f64,
    ) -> Self {
        Self {
            kind: SegmentKind::Climb,
            from_waypoint,
            to_waypoint,
            distance_nm,
            true_course,
            true_airspeed,
            start_altitude,
            end_altitude,
            wind_direction: wind.0,
            wind_speed: wind.1,
            temperature,
            mag_var,
        }
    }

    pub fn cruise(
        from_waypoint: Waypoint,
        to_waypoint: Waypoint,
        distance_nm: f64,
        true_course: f64,
        true_airspeed: f64,
        altitude: f64,
        wind: (f64, f64),
        temperature: f64,
        mag_var: f64,
    ) -> Self {
        Self {
            kind: SegmentKind::Cruise,
            from_waypoint,
            to_waypoint,
            distance_nm,
            true_course,
            true_airspeed,
            start_altitude: altitude,
            end_altitude: altitude,
            wind_direction: wind.0,
            wind_speed: wind.1,
            temperature,
            mag_var,
        }
    }

    pub fn descend(
        from_waypoint: Waypoint,
        to_waypoint: Waypoint,
        distance_nm: f64,
        true_course: f64,
        true_airspeed: f64,
        start_altitude: f64,
        end_altitude: f64,
        wind: (f64, f64),
        temperature: f64,
        mag_var: f64,
    ) -> Self {
        Self {
            kind: SegmentKind::Descend,
            ..Self::climb(
                from_waypoint,
                to_waypoint,
                distance_nm,
                true_course,
                true_airspeed,
                start_altitude,
                end_altitude,
                wind,
                temperature,
                mag_var,
            )
        }
    }

    pub fn get_name(&self) -> String {
        format!("{} -> {}", self.from_waypoint, self.to_waypoint)
    }

    /// Work out the heading chain and the time, distance and fuel for this leg.
    ///
    /// Headings are not reduced to 0-360. Altitude change figures are left
    /// for the plan to fill in.
    pub fn evaluate(&self, mag_dev: f64, fuel_rate_gph: f64) -> EvaluatedLeg {
        let tc = self.true_course;
        let wca = compute_wca(tc, self.true_airspeed, self.wind_direction, self.wind_speed);
        let th = tc + wca;
        let mh = th + self.mag_var;
        let ch = mh + mag_dev;

        let gs = compute_gs(tc, self.true_airspeed, self.wind_direction, self.wind_speed);
        if gs <= 0.0 {
            warn!("Leg {} has no ground speed, the leg time is unbounded", self.get_name());
        }
        let time_min = self.distance_nm / gs * 60.0;
        let fuel_gal = fuel_rate_gph / 60.0 * time_min;

        debug!(
            "Leg {}: WCA {:.1} CH {:.1} GS {:.1} time {:.1}",
            self.get_name(),
            wca,
            ch,
            gs,
            time_min
        );

        EvaluatedLeg {
            leg: self.clone(),
            mag_dev,
            wca,
            tc,
            th,
            mh,
            ch,
            gs,
            performance: SegmentPerformance::new(time_min, self.distance_nm, fuel_gal),
            altitude_change: None,
            remaining: SegmentPerformance::default(),
        }
    }
}

/// A leg with everything worked out.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedLeg {
    pub leg: RawLeg,
    pub mag_dev: f64,
    pub wca: f64,
    pub tc: f64,
    pub th: f64,
    pub mh: f64,
    pub ch: f64,
    pub gs: f64,
    /// Figures for flying the leg's distance at its ground speed.
    pub performance: SegmentPerformance,
    /// Chart figures for the whole altitude change of a climb or descent
    /// leg. Not reconciled with `performance`.
    pub altitude_change: Option<SegmentPerformance>,
    /// Everything still to fly after this leg.
    pub remaining: SegmentPerformance,
}

impl EvaluatedLeg {
    pub fn get_kind(&self) -> SegmentKind {
        self.leg.kind
    }

    pub fn get_climb(&self) -> Option<&SegmentPerformance> {
        match self.leg.kind {
            SegmentKind::Climb => self.altitude_change.as_ref(),
            _ => None,
        }
    }

    pub fn get_descent(&self) -> Option<&SegmentPerformance> {
        match self.leg.kind {
            SegmentKind::Descend => self.altitude_change.as_ref(),
            _ => None,
        }
    }
}
