/*
 * Copyright (c) 2003-2003-2023. Trevor Campbell and others.
 *
 * This file is part of Kelpie Flight Planner.
 *
 * Kelpie Flight Planner is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Kelpie Flight Planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Kelpie Flight Planner; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use xmltree::Element;

use crate::error::{PerformanceError, Result};
use crate::model::leg::{RawLeg, SegmentKind};
use crate::model::waypoint::Waypoint;
use crate::util::units::celsius_to_fahrenheit;

/// The legs of a plan file and the aircraft it was written for.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDocument {
    pub aircraft: Option<String>,
    pub legs: Vec<RawLeg>,
}

pub fn read_plan(file_path: &Path) -> Result<PlanDocument> {
    let file = File::open(file_path)?;
    let plan = parse_plan(file)?;
    info!("Read {} legs from {}", plan.legs.len(), file_path.display());
    Ok(plan)
}

pub fn read_plan_from_str(contents: &str) -> Result<PlanDocument> {
    parse_plan(contents.as_bytes())
}

fn parse_plan<R: Read>(reader: R) -> Result<PlanDocument> {
    let doc = Element::parse(reader)?;

    if doc.name != "plan" {
        return Err(PerformanceError::Configuration(format!(
            "Expected a <plan> document, found <{}>",
            doc.name
        )));
    }

    let aircraft = doc.attributes.get("aircraft").cloned();

    let mut legs = Vec::new();
    for node in &doc.children {
        let Some(e) = node.as_element() else {
            continue;
        };
        if e.name != "leg" {
            continue;
        }
        legs.push(read_leg(e, legs.len() + 1)?);
    }

    Ok(PlanDocument { aircraft, legs })
}

fn read_leg(e: &Element, number: usize) -> Result<RawLeg> {
    let kind = get_attribute(e, number, "kind")?
        .parse::<SegmentKind>()
        .map_err(|msg| PerformanceError::Configuration(format!("Leg {}: {}", number, msg)))?;

    let (start_altitude, end_altitude) = match kind {
        SegmentKind::Cruise => {
            let altitude = get_number(e, number, "altitude")?;
            (altitude, altitude)
        }
        SegmentKind::Climb | SegmentKind::Descend => (
            get_number(e, number, "start-altitude")?,
            get_number(e, number, "end-altitude")?,
        ),
    };

    let temperature = get_number(e, number, "temperature")?;
    let temperature = match e.attributes.get("temperature-unit").map(|s| s.as_str()) {
        None | Some("F") | Some("f") => temperature,
        Some("C") | Some("c") => celsius_to_fahrenheit(temperature),
        Some(unit) => {
            return Err(PerformanceError::Configuration(format!(
                "Leg {}: unknown temperature unit {}",
                number, unit
            )));
        }
    };

    Ok(RawLeg {
        kind,
        from_waypoint: Waypoint::new(get_attribute(e, number, "from")?),
        to_waypoint: Waypoint::new(get_attribute(e, number, "to")?),
        distance_nm: get_number(e, number, "distance")?,
        true_course: get_number(e, number, "true-course")?,
        true_airspeed: get_number(e, number, "true-airspeed")?,
        start_altitude,
        end_altitude,
        wind_direction: get_number(e, number, "wind-direction")?,
        wind_speed: get_number(e, number, "wind-speed")?,
        temperature,
        mag_var: get_number(e, number, "mag-var")?,
    })
}

fn get_attribute<'a>(e: &'a Element, number: usize, name: &str) -> Result<&'a str> {
    e.attributes
        .get(name)
        .map(|s| s.as_str())
        .ok_or_else(|| {
            PerformanceError::Configuration(format!("Leg {} is missing the {} attribute", number, name))
        })
}

fn get_number(e: &Element, number: usize, name: &str) -> Result<f64> {
    let value = get_attribute(e, number, name)?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            PerformanceError::Configuration(format!(
                "Leg {}: {} '{}' is not a number",
                number, name, value
            ))
        })
}
