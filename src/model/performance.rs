use std::ops::{Add, AddAssign, Sub};

/// Time (min), distance (nm) and fuel (gal) for a piece of the flight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmentPerformance {
    pub time_min: f64,
    pub distance_nm: f64,
    pub fuel_gal: f64,
}

impl SegmentPerformance {
    pub fn new(time_min: f64, distance_nm: f64, fuel_gal: f64) -> Self {
        Self {
            time_min,
            distance_nm,
            fuel_gal,
        }
    }
}

impl Add for SegmentPerformance {
    type Output = SegmentPerformance;

    fn add(self, rhs: Self) -> Self::Output {
        SegmentPerformance::new(
            self.time_min + rhs.time_min,
            self.distance_nm + rhs.distance_nm,
            self.fuel_gal + rhs.fuel_gal,
        )
    }
}

impl AddAssign for SegmentPerformance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for SegmentPerformance {
    type Output = SegmentPerformance;

    fn sub(self, rhs: Self) -> Self::Output {
        SegmentPerformance::new(
            self.time_min - rhs.time_min,
            self.distance_nm - rhs.distance_nm,
            self.fuel_gal - rhs.fuel_gal,
        )
    }
}
