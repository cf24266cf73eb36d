/*
 * Copyright (c) 2003-2025. Trevor Campbell and others.
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

//! Performance index lookup for the PA-28-181 climb and descent charts
//! (Cherokee Archer II POH, figure 5-11).
//!
//! Each 1000 ft pressure altitude band carries a quadratic fit of the chart's
//! y-axis against outside air temperature. Altitudes between bands are
//! linearly interpolated.

use crate::error::{PerformanceError, Result};
use crate::util::polyval;

pub const MIN_TEMPERATURE: f64 = -20.0;
pub const MAX_TEMPERATURE: f64 = 100.0;
pub const MIN_PRESSURE_ALT: f64 = 0.0;
pub const MAX_PRESSURE_ALT: f64 = 14000.0;
pub const BAND_STEP: f64 = 1000.0;

// Indexed by pressure altitude / 1000, highest degree first.
const ATMOSPHERE: [[f64; 3]; 15] = [
    [-4.77789030473128e-05, 0.131506514026525, -7.59524602258745],
    [-0.000168903847283149, 0.147291357282320, -5.73114592306456],
    [-0.000200409786342505, 0.149400044755393, -3.08570618254692],
    [-0.000100544244567627, 0.139505165115918, -0.662380862929779],
    [-0.000146650458153391, 0.144739802376415, 1.75708697204559],
    [-9.42032264657786e-05, 0.139334845060707, 4.38481284445414],
    [-0.000113887586662117, 0.139711191546429, 6.96477970840780],
    [-0.000133990847596815, 0.140358772051931, 9.43321069866182],
    [-0.000127035370571325, 0.140177981168579, 11.9550501756149],
    [-0.000101368580681147, 0.137425118639429, 14.3901002923885],
    [-0.000137241816574115, 0.139303160945327, 16.9023276004411],
    [-9.46370417100963e-05, 0.134978469704705, 19.4369137861611],
    [-7.26786923577127e-05, 0.135406864214044, 21.9018721893922],
    [-0.000249597756546181, 0.136858875985431, 24.4818863403171],
    [-0.000177501407124483, 0.139735658894387, 26.9913719349442],
];

/// Performance index at a tabulated pressure altitude band.
///
/// The altitude must be one of 0, 1000, ... 14000 ft. Use
/// [`atmospheric_model`] for anything in between.
pub fn evaluate_band(temperature: f64, pressure_alt: f64) -> Result<f64> {
    check_pressure_alt(pressure_alt)?;
    if pressure_alt % BAND_STEP != 0.0 {
        return Err(PerformanceError::Domain {
            quantity: "Tabulated pressure altitude",
            value: pressure_alt,
            min: MIN_PRESSURE_ALT,
            max: MAX_PRESSURE_ALT,
        });
    }
    let band = (pressure_alt / BAND_STEP) as usize;
    Ok(polyval(&ATMOSPHERE[band], temperature))
}

/// Performance index for an outside air temperature (F) and pressure altitude (ft).
pub fn atmospheric_model(temperature: f64, pressure_alt: f64) -> Result<f64> {
    check_temperature(temperature)?;
    check_pressure_alt(pressure_alt)?;

    if pressure_alt % BAND_STEP == 0.0 {
        return evaluate_band(temperature, pressure_alt);
    }

    let lower_alt = (pressure_alt / BAND_STEP).floor() * BAND_STEP;
    let upper_alt = (pressure_alt / BAND_STEP).ceil() * BAND_STEP;
    let lower = evaluate_band(temperature, lower_alt)?;
    let upper = evaluate_band(temperature, upper_alt)?;

    let fraction = (pressure_alt - lower_alt) / (upper_alt - lower_alt);
    Ok(lower + (upper - lower) * fraction)
}

fn check_temperature(temperature: f64) -> Result<()> {
    if (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        Ok(())
    } else {
        Err(PerformanceError::Domain {
            quantity: "Temperature",
            value: temperature,
            min: MIN_TEMPERATURE,
            max: MAX_TEMPERATURE,
        })
    }
}

fn check_pressure_alt(pressure_alt: f64) -> Result<()> {
    if (MIN_PRESSURE_ALT..=MAX_PRESSURE_ALT).contains(&pressure_alt) {
        Ok(())
    } else {
        Err(PerformanceError::Domain {
            quantity: "Pressure altitude",
            value: pressure_alt,
            min: MIN_PRESSURE_ALT,
            max: MAX_PRESSURE_ALT,
        })
    }
}
