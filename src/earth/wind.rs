/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */

//! Wind triangle. All angles in degrees, speeds in knots.

/// Wind correction angle for a true course, true airspeed and the wind
/// (direction it blows from, speed).
pub fn compute_wca(true_course: f64, true_airspeed: f64, wind_direction: f64, wind_speed: f64) -> f64 {
    let acute_wind_angle = (wind_direction - true_course).rem_euclid(360.0);
    (wind_speed * acute_wind_angle.to_radians().sin())
        .atan2(true_airspeed)
        .to_degrees()
}

/// Ground speed resulting from flying the corrected heading.
pub fn compute_gs(true_course: f64, true_airspeed: f64, wind_direction: f64, wind_speed: f64) -> f64 {
    let tc = true_course.to_radians();
    let wd = wind_direction.to_radians();
    let wca = compute_wca(true_course, true_airspeed, wind_direction, wind_speed).to_radians();

    (true_airspeed.powi(2) + wind_speed.powi(2)
        - 2.0 * true_airspeed * wind_speed * (tc - wd + wca).cos())
    .sqrt()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{compute_gs, compute_wca};

    #[test]
    fn test_calm() {
        for tc in [0.0, 45.0, 183.0, 359.0] {
            assert_abs_diff_eq!(compute_wca(tc, 110.0, tc, 0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(compute_gs(tc, 110.0, tc, 0.0), 110.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_headwind_and_tailwind() {
        // Wind from the nose
        assert_abs_diff_eq!(compute_gs(90.0, 120.0, 90.0, 20.0), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(compute_wca(90.0, 120.0, 90.0, 20.0), 0.0, epsilon = 1e-9);
        // Wind from behind
        assert_abs_diff_eq!(compute_gs(90.0, 120.0, 270.0, 20.0), 140.0, epsilon = 1e-9);
        assert_abs_diff_eq!(compute_gs(10.0, 95.0, 190.0, 15.0), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_crosswind() {
        // Wind from the right pushes the nose right.
        let wca = compute_wca(0.0, 100.0, 90.0, 20.0);
        assert_abs_diff_eq!(wca, (20.0_f64).atan2(100.0).to_degrees(), epsilon = 1e-9);
        assert!(wca > 0.0);

        let wca = compute_wca(0.0, 100.0, 270.0, 20.0);
        assert!(wca < 0.0);
    }

    #[test]
    fn test_wind_angle_wraps() {
        // 10 - 350 is negative before reduction
        let a = compute_wca(350.0, 100.0, 10.0, 15.0);
        let b = compute_wca(0.0, 100.0, 20.0, 15.0);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn test_strong_wind_is_finite() {
        let wca = compute_wca(0.0, 50.0, 90.0, 80.0);
        let gs = compute_gs(0.0, 50.0, 90.0, 80.0);
        assert!(wca.is_finite());
        assert!(gs.is_finite());
    }

    #[test]
    fn test_worked_example() {
        let wca = compute_wca(90.0, 120.0, 289.0, 21.0);
        let gs = compute_gs(90.0, 120.0, 289.0, 21.0);
        assert_abs_diff_eq!(wca, -3.26, epsilon = 0.05);
        assert_abs_diff_eq!(gs, 139.66, epsilon = 0.05);
    }
}
