use std::fmt::Write;

use crate::error::{PerformanceError, Result};
use crate::model::leg::{EvaluatedLeg, SegmentKind};
use crate::model::plan::FlightPlan;

use super::distance_format::DistanceFormat;
use super::speed_format::SpeedFormat;
use super::time_format::TimeFormat;

const LINE_WIDTH: usize = 80;

/// Render an evaluated plan as a pilot's nav log.
///
/// `units` is one of the distance units understood by [`DistanceFormat`].
pub fn nav_log(plan: &FlightPlan, units: &str) -> Result<String> {
    if !plan.is_evaluated() {
        return Err(PerformanceError::NotEvaluated);
    }
    let distance_format = DistanceFormat::new(units);
    let speed_format = SpeedFormat::new(units);
    let time_format = TimeFormat::new();

    let mut out = String::new();
    let aircraft = plan.get_aircraft();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{} ({}) - fuel rate {:.1} gph",
        aircraft.get_callsign(),
        aircraft.get_type(),
        aircraft.get_fuel_rate()
    );

    for (i, leg) in plan.get_evaluated_legs().iter().enumerate() {
        write_leg(&mut out, i + 1, leg, &distance_format, &speed_format, &time_format);
    }

    let total = plan.get_total();
    let _ = writeln!(out, "{}", "=".repeat(LINE_WIDTH));
    let _ = writeln!(
        out,
        "\tTotal Time: {},  Total Distance: {},  Total Fuel: {:.1} gal",
        time_format.format(&total.time_min),
        distance_format.format(&total.distance_nm),
        total.fuel_gal
    );
    Ok(out)
}

fn write_leg(
    out: &mut String,
    number: usize,
    leg: &EvaluatedLeg,
    distance_format: &DistanceFormat,
    speed_format: &SpeedFormat,
    time_format: &TimeFormat,
) {
    let heading = format!("{}) -- {} ", number, leg.leg.get_name());
    let _ = writeln!(
        out,
        "{}{}",
        heading,
        "-".repeat(LINE_WIDTH.saturating_sub(heading.len()))
    );
    let _ = writeln!(
        out,
        "\t TC: {:.1}, TH: {:.1}, MH: {:.1}, CH: {:.1},  GS: {}",
        leg.tc,
        leg.th,
        leg.mh,
        leg.ch,
        speed_format.format(leg.gs)
    );
    match leg.get_kind() {
        SegmentKind::Cruise => {
            let _ = writeln!(out, "\t Altitude: {} ft", leg.leg.start_altitude);
        }
        SegmentKind::Climb | SegmentKind::Descend => {
            let _ = writeln!(
                out,
                "\t Start Altitude: {} ft,  End Altitude: {} ft",
                leg.leg.start_altitude, leg.leg.end_altitude
            );
        }
    }
    let _ = writeln!(
        out,
        "\t Time: {},  Distance: {},  Fuel: {:.1} gal",
        time_format.format(&leg.performance.time_min),
        distance_format.format(&leg.performance.distance_nm),
        leg.performance.fuel_gal
    );
    if let Some(climb) = leg.get_climb() {
        let _ = writeln!(
            out,
            "\t Climb Time: {:.1} min,  Climb Distance: {},  Climb Fuel: {:.1} gal",
            climb.time_min,
            distance_format.format(&climb.distance_nm),
            climb.fuel_gal
        );
    }
    if let Some(descent) = leg.get_descent() {
        let _ = writeln!(
            out,
            "\t Descent Time: {:.1} min,  Descent Distance: {},  Descent Fuel: {:.1} gal",
            descent.time_min,
            distance_format.format(&descent.distance_nm),
            descent.fuel_gal
        );
    }
    let _ = writeln!(
        out,
        "\t Rem Time: {},  Rem Distance: {},  Rem Fuel: {:.1} gal",
        time_format.format(&leg.remaining.time_min),
        distance_format.format(&leg.remaining.distance_nm),
        leg.remaining.fuel_gal
    );
}
