use std::collections::BTreeMap;

use log::debug;

use crate::earth::atmosphere::atmospheric_model;
use crate::error::{PerformanceError, Result};
use crate::util::polyval;

use super::performance::SegmentPerformance;

/// Number of coefficients in each climb/descent curve fit (degree 5).
pub const CURVE_COEFFICIENTS: usize = 6;

type Curve = [f64; CURVE_COEFFICIENTS];

/// Book figures for an aircraft plus its compass card.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceProfile {
    pub climb_speed_kts: f64,
    pub cruise_speed_kts: f64,
    pub descend_speed_kts: f64,
    pub fuel_capacity_gal: f64,
    pub fuel_rate_gph: f64,
    /// True heading (degrees) to compass deviation (degrees).
    pub mag_dev_lookup: BTreeMap<i32, f64>,
}

/// Raw polynomial coefficients, highest degree first, fit against the
/// atmospheric performance index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceCurves {
    pub time_to_climb: Vec<f64>,
    pub distance_to_climb: Vec<f64>,
    pub fuel_to_climb: Vec<f64>,
    pub time_to_descend: Vec<f64>,
    pub distance_to_descend: Vec<f64>,
    pub fuel_to_descend: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
struct SegmentModel {
    time: Curve,
    distance: Curve,
    fuel: Curve,
}

impl SegmentModel {
    fn new(name: &str, time: &[f64], distance: &[f64], fuel: &[f64]) -> Result<Self> {
        Ok(Self {
            time: to_curve(&format!("time to {}", name), time)?,
            distance: to_curve(&format!("distance to {}", name), distance)?,
            fuel: to_curve(&format!("fuel to {}", name), fuel)?,
        })
    }

    // Cumulative figures from the chart's reference point to this index.
    fn evaluate(&self, performance: f64) -> SegmentPerformance {
        SegmentPerformance::new(
            polyval(&self.time, performance),
            polyval(&self.distance, performance),
            polyval(&self.fuel, performance),
        )
    }
}

fn to_curve(name: &str, coefficients: &[f64]) -> Result<Curve> {
    let curve = Curve::try_from(coefficients).map_err(|_| {
        PerformanceError::Configuration(format!(
            "The {} model must have {} coefficients, found {}",
            name,
            CURVE_COEFFICIENTS,
            coefficients.len()
        ))
    })?;
    if curve.iter().any(|c| !c.is_finite()) {
        return Err(PerformanceError::Configuration(format!(
            "The {} model has a non-finite coefficient",
            name
        )));
    }
    Ok(curve)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    callsign: String,
    aircraft_type: String,
    category: String,
    class: String,
    is_default: bool,
    profile: PerformanceProfile,
    climb: SegmentModel,
    descend: SegmentModel,
}

impl Aircraft {
    pub fn new(
        callsign: String,
        aircraft_type: String,
        category: String,
        class: String,
        is_default: bool,
        profile: PerformanceProfile,
        curves: PerformanceCurves,
    ) -> Result<Self> {
        check_profile(&callsign, &profile)?;
        let climb = SegmentModel::new(
            "climb",
            &curves.time_to_climb,
            &curves.distance_to_climb,
            &curves.fuel_to_climb,
        )?;
        let descend = SegmentModel::new(
            "descend",
            &curves.time_to_descend,
            &curves.distance_to_descend,
            &curves.fuel_to_descend,
        )?;
        Ok(Aircraft {
            callsign,
            aircraft_type,
            category,
            class,
            is_default,
            profile,
            climb,
            descend,
        })
    }

    pub fn get_callsign(&self) -> &str {
        &self.callsign
    }

    pub fn get_type(&self) -> &str {
        &self.aircraft_type
    }

    pub fn get_category(&self) -> &str {
        &self.category
    }

    pub fn get_class(&self) -> &str {
        &self.class
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }

    pub fn get_profile(&self) -> &PerformanceProfile {
        &self.profile
    }

    pub fn get_fuel_rate(&self) -> f64 {
        self.profile.fuel_rate_gph
    }

    /// Compass deviation for a heading, taken from the nearest entry of the
    /// deviation card.
    ///
    /// Distance between headings is the plain numeric difference, so 350
    /// matches 330 rather than 0. Ties go to the lower heading.
    pub fn compute_mag_dev(&self, heading: f64) -> f64 {
        let mut closest: Option<(f64, f64)> = None;
        for (card_heading, correction) in &self.profile.mag_dev_lookup {
            let distance = (*card_heading as f64 - heading).abs();
            match closest {
                Some((best, _)) if distance >= best => {}
                _ => closest = Some((distance, *correction)),
            }
        }
        // The card is never empty, construction rejects that.
        closest.map(|(_, correction)| correction).unwrap_or(0.0)
    }

    /// Time, distance and fuel to climb between two pressure altitudes at an
    /// outside air temperature (F).
    pub fn compute_climb(
        &self,
        from_altitude: f64,
        to_altitude: f64,
        temperature: f64,
    ) -> Result<SegmentPerformance> {
        if !(from_altitude < to_altitude) {
            return Err(PerformanceError::Precondition(format!(
                "Climb from {} ft must end above it, not at {} ft. Use compute_descent() instead",
                from_altitude, to_altitude
            )));
        }
        let performance = atmospheric_model(temperature, to_altitude)?;
        let reference = atmospheric_model(temperature, from_altitude)?;

        let result = self.climb.evaluate(performance) - self.climb.evaluate(reference);
        debug!(
            "{} climb {} -> {} ft at {}F: {:?}",
            self.callsign, from_altitude, to_altitude, temperature, result
        );
        Ok(result)
    }

    /// Time, distance and fuel to descend between two pressure altitudes at an
    /// outside air temperature (F).
    pub fn compute_descent(
        &self,
        from_altitude: f64,
        to_altitude: f64,
        temperature: f64,
    ) -> Result<SegmentPerformance> {
        if !(from_altitude > to_altitude) {
            return Err(PerformanceError::Precondition(format!(
                "Descent from {} ft must end below it, not at {} ft. Use compute_climb() instead",
                from_altitude, to_altitude
            )));
        }
        let performance = atmospheric_model(temperature, to_altitude)?;
        let reference = atmospheric_model(temperature, from_altitude)?;

        // Descent charts accumulate from altitude down to the reference.
        let result = self.descend.evaluate(reference) - self.descend.evaluate(performance);
        debug!(
            "{} descent {} -> {} ft at {}F: {:?}",
            self.callsign, from_altitude, to_altitude, temperature, result
        );
        Ok(result)
    }
}

fn check_profile(callsign: &str, profile: &PerformanceProfile) -> Result<()> {
    if profile.mag_dev_lookup.is_empty() {
        return Err(PerformanceError::Configuration(format!(
            "{} is missing its magnetic deviation table",
            callsign
        )));
    }
    if let Some(heading) = profile
        .mag_dev_lookup
        .keys()
        .find(|h| !(0..360).contains(*h))
    {
        return Err(PerformanceError::Configuration(format!(
            "{} has a magnetic deviation entry for heading {}, headings must be within 0-359",
            callsign, heading
        )));
    }
    if profile.mag_dev_lookup.values().any(|c| !c.is_finite()) {
        return Err(PerformanceError::Configuration(format!(
            "{} has a non-finite magnetic deviation",
            callsign
        )));
    }
    let speeds = [
        ("climb speed", profile.climb_speed_kts),
        ("cruise speed", profile.cruise_speed_kts),
        ("descend speed", profile.descend_speed_kts),
        ("fuel capacity", profile.fuel_capacity_gal),
        ("fuel rate", profile.fuel_rate_gph),
    ];
    for (name, value) in speeds {
        if !value.is_finite() || value <= 0.0 {
            return Err(PerformanceError::Configuration(format!(
                "{} has an invalid {}: {}",
                callsign, name, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use approx::assert_abs_diff_eq;

    use crate::error::PerformanceError;
    use crate::model::test_utils::{make_aircraft, make_curves, make_profile};

    use super::Aircraft;

    const FUEL_TOLERANCE_GAL: f64 = 0.25;
    const DISTANCE_TOLERANCE_NM: f64 = 1.0;
    const TIME_TOLERANCE_MIN: f64 = 1.0;

    #[test]
    fn test_climb_model() {
        let aircraft = make_aircraft();
        let result = aircraft.compute_climb(1000.0, 5500.0, 70.0).unwrap();
        assert_abs_diff_eq!(result.time_min, 11.5, epsilon = TIME_TOLERANCE_MIN);
        assert_abs_diff_eq!(result.distance_nm, 16.0, epsilon = DISTANCE_TOLERANCE_NM);
        assert_abs_diff_eq!(result.fuel_gal, 2.5, epsilon = FUEL_TOLERANCE_GAL);
    }

    #[test]
    fn test_descent_model() {
        let aircraft = make_aircraft();
        let result = aircraft.compute_descent(5500.0, 1000.0, 73.4).unwrap();
        assert_abs_diff_eq!(result.time_min, 11.0, epsilon = TIME_TOLERANCE_MIN);
        assert_abs_diff_eq!(result.distance_nm, 23.5, epsilon = DISTANCE_TOLERANCE_NM);
        assert_abs_diff_eq!(result.fuel_gal, 1.25, epsilon = FUEL_TOLERANCE_GAL);
    }

    #[test]
    fn test_climb_is_additive() {
        let aircraft = make_aircraft();
        let first = aircraft.compute_climb(1000.0, 3000.0, 70.0).unwrap();
        let second = aircraft.compute_climb(3000.0, 5500.0, 70.0).unwrap();
        let whole = aircraft.compute_climb(1000.0, 5500.0, 70.0).unwrap();
        let joined = first + second;
        assert_abs_diff_eq!(joined.time_min, whole.time_min, epsilon = 1e-9);
        assert_abs_diff_eq!(joined.distance_nm, whole.distance_nm, epsilon = 1e-9);
        assert_abs_diff_eq!(joined.fuel_gal, whole.fuel_gal, epsilon = 1e-9);
    }

    #[test]
    fn test_descent_is_additive() {
        let aircraft = make_aircraft();
        let first = aircraft.compute_descent(8500.0, 4200.0, 50.0).unwrap();
        let second = aircraft.compute_descent(4200.0, 500.0, 50.0).unwrap();
        let whole = aircraft.compute_descent(8500.0, 500.0, 50.0).unwrap();
        assert_abs_diff_eq!((first + second).time_min, whole.time_min, epsilon = 1e-9);
        assert_abs_diff_eq!((first + second).fuel_gal, whole.fuel_gal, epsilon = 1e-9);
    }

    #[test]
    fn test_altitude_order_is_enforced() {
        let aircraft = make_aircraft();
        assert!(matches!(
            aircraft.compute_climb(5500.0, 1000.0, 70.0),
            Err(PerformanceError::Precondition(_))
        ));
        assert!(matches!(
            aircraft.compute_climb(3000.0, 3000.0, 70.0),
            Err(PerformanceError::Precondition(_))
        ));
        assert!(matches!(
            aircraft.compute_descent(1000.0, 5500.0, 70.0),
            Err(PerformanceError::Precondition(_))
        ));
    }

    #[test]
    fn test_atmosphere_errors_propagate() {
        let aircraft = make_aircraft();
        assert!(matches!(
            aircraft.compute_climb(1000.0, 15000.0, 70.0),
            Err(PerformanceError::Domain { .. })
        ));
        assert!(matches!(
            aircraft.compute_descent(5500.0, 1000.0, 120.0),
            Err(PerformanceError::Domain { .. })
        ));
    }

    #[test]
    fn test_mag_dev() {
        let aircraft = make_aircraft();
        assert_eq!(aircraft.compute_mag_dev(0.0), -1.0);
        assert_eq!(aircraft.compute_mag_dev(151.0), 2.0);
        assert_eq!(aircraft.compute_mag_dev(16.0), 0.0);
        // Equidistant from 0 and 30
        assert_eq!(aircraft.compute_mag_dev(15.0), -1.0);
        assert_eq!(aircraft.compute_mag_dev(-20.0), -1.0);
        assert_eq!(aircraft.compute_mag_dev(400.0), -1.0);
    }

    #[test]
    fn test_mag_dev_does_not_wrap() {
        let mut profile = make_profile();
        profile.mag_dev_lookup = BTreeMap::from([(0, 5.0), (330, -5.0)]);
        let aircraft = Aircraft::new(
            "TEST".to_string(),
            "PA-28-181".to_string(),
            "Airplane".to_string(),
            "SEL".to_string(),
            false,
            profile,
            make_curves(),
        )
        .unwrap();
        assert_eq!(aircraft.compute_mag_dev(350.0), -5.0);
        assert_eq!(aircraft.compute_mag_dev(10.0), 5.0);
    }

    #[test]
    fn test_bad_configuration() {
        let build = |profile, curves| {
            Aircraft::new(
                "TEST".to_string(),
                "PA-28-181".to_string(),
                "Airplane".to_string(),
                "SEL".to_string(),
                false,
                profile,
                curves,
            )
        };

        let mut profile = make_profile();
        profile.mag_dev_lookup.clear();
        assert!(matches!(
            build(profile, make_curves()),
            Err(PerformanceError::Configuration(_))
        ));

        let mut profile = make_profile();
        profile.mag_dev_lookup.insert(360, 1.0);
        assert!(matches!(
            build(profile, make_curves()),
            Err(PerformanceError::Configuration(_))
        ));

        let mut profile = make_profile();
        profile.fuel_rate_gph = 0.0;
        assert!(matches!(
            build(profile, make_curves()),
            Err(PerformanceError::Configuration(_))
        ));

        let mut curves = make_curves();
        curves.fuel_to_descend.pop();
        assert!(matches!(
            build(make_profile(), curves),
            Err(PerformanceError::Configuration(_))
        ));

        let mut curves = make_curves();
        curves.time_to_climb[2] = f64::NAN;
        assert!(matches!(
            build(make_profile(), curves),
            Err(PerformanceError::Configuration(_))
        ));
    }
}
