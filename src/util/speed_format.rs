use super::units::{KM_PER_NM, SM_PER_NM};

pub struct SpeedFormat {
    conversion_factor: f64,
    speed_unit: String,
}

impl SpeedFormat {
    pub fn new(unit: &str) -> Self {
        let (conversion_factor, speed_unit) = match unit {
            "Mi" => (SM_PER_NM, "Mph"),
            "Km" => (KM_PER_NM, "Kph"),
            _ => (1.0, "Kts"),
        };
        SpeedFormat {
            conversion_factor,
            speed_unit: speed_unit.to_string(),
        }
    }

    pub fn format(&self, speed_kts: f64) -> String {
        let converted_speed = speed_kts * self.conversion_factor;

        format!("{:.0}{}", converted_speed, self.speed_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::SpeedFormat;

    #[test]
    fn test_fmt_speed() {
        assert_eq!(SpeedFormat::new("Nm").format(34.0), "34Kts");
        assert_eq!(SpeedFormat::new("Nm").format(34.9), "35Kts");
        assert_eq!(SpeedFormat::new("Mi").format(34.5), "40Mph");
        assert_eq!(SpeedFormat::new("Km").format(34.5), "64Kph");
    }
}
