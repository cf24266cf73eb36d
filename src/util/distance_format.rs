/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */
use super::units::{KM_PER_NM, SM_PER_NM};

pub struct DistanceFormat {
    conversion_factor: f64,
    distance_unit: String,
}

impl DistanceFormat {
    pub fn new(unit: &str) -> Self {
        let (conversion_factor, distance_unit) = match unit {
            "Mi" => (SM_PER_NM, "Mi"),
            "Km" => (KM_PER_NM, "Km"),
            _ => (1.0, "Nm"),
        };
        Self {
            conversion_factor,
            distance_unit: distance_unit.to_string(),
        }
    }

    pub fn format(&self, distance_nm: &f64) -> String {
        let converted_distance = distance_nm * self.conversion_factor;
        format!("{:.1}{}", converted_distance, self.distance_unit)
    }
}
