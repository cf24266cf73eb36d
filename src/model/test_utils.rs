use std::collections::BTreeMap;
use std::sync::Arc;

use super::aircraft::{Aircraft, PerformanceCurves, PerformanceProfile};
use super::leg::RawLeg;
use super::waypoint::Waypoint;

pub fn make_profile() -> PerformanceProfile {
    PerformanceProfile {
        climb_speed_kts: 76.0,
        cruise_speed_kts: 115.0,
        descend_speed_kts: 122.0,
        fuel_capacity_gal: 48.0,
        fuel_rate_gph: 7.6,
        mag_dev_lookup: BTreeMap::from([
            (0, -1.0),
            (30, 0.0),
            (60, 0.0),
            (90, 1.0),
            (120, 1.0),
            (150, 2.0),
            (180, 1.0),
            (210, 1.0),
            (240, 0.0),
            (270, 1.0),
            (300, -1.0),
            (330, -1.0),
        ]),
    }
}

pub fn make_curves() -> PerformanceCurves {
    PerformanceCurves {
        time_to_climb: vec![
            2.87877650796108e-06,
            -0.000144802420551403,
            0.00342898366361228,
            -0.0107917301934256,
            0.634422192936824,
            -0.0186154940652254,
        ],
        distance_to_climb: vec![
            4.42959545765142e-06,
            -0.000163476059542869,
            0.00231669831047607,
            0.0252978983345908,
            0.678065767832256,
            -0.0732483197801467,
        ],
        fuel_to_climb: vec![
            -1.94926996262817e-06,
            0.000145480319823401,
            -0.00369494915915234,
            0.0429170270715064,
            -0.0192274749207769,
            -0.0198608173346909,
        ],
        time_to_descend: vec![
            -1.58341002886778e-06,
            0.000108753346616133,
            -0.00206982222787217,
            -0.0214951101376967,
            1.68166975233790,
            -0.00660865289312827,
        ],
        distance_to_descend: vec![
            -1.29865755740527e-06,
            5.78201345323594e-05,
            0.00120320011417074,
            -0.121296457837932,
            3.87191245881648,
            0.181102740447271,
        ],
        fuel_to_descend: vec![
            1.19726058053013e-07,
            -1.36088862232907e-06,
            -0.000200535974443365,
            0.00344771825995696,
            0.0981893803146724,
            0.0140448819097330,
        ],
    }
}

pub fn make_aircraft() -> Arc<Aircraft> {
    let aircraft = Aircraft::new(
        "N8273V".to_string(),
        "PA-28-181".to_string(),
        "Airplane".to_string(),
        "SEL".to_string(),
        true,
        make_profile(),
        make_curves(),
    )
    .unwrap();
    Arc::new(aircraft)
}

pub fn make_cruise(
    from: &str,
    to: &str,
    distance: f64,
    true_course: f64,
    true_airspeed: f64,
    wind: (f64, f64),
) -> RawLeg {
    RawLeg::cruise(
        Waypoint::new(from),
        Waypoint::new(to),
        distance,
        true_course,
        true_airspeed,
        5500.0,
        wind,
        60.0,
        -11.0,
    )
}

/// Climb out, cruise and descend into the destination.
pub fn make_legs() -> Vec<RawLeg> {
    vec![
        RawLeg::climb(
            Waypoint::new("KCGS"),
            Waypoint::new("Bay Bridge"),
            12.0,
            100.0,
            76.0,
            200.0,
            5500.0,
            (270.0, 10.0),
            70.0,
            -11.0,
        ),
        make_cruise("Bay Bridge", "Easton", 45.0, 95.0, 115.0, (280.0, 15.0)),
        RawLeg::descend(
            Waypoint::new("Easton"),
            Waypoint::new("KESN"),
            18.0,
            120.0,
            122.0,
            5500.0,
            500.0,
            (290.0, 12.0),
            66.0,
            -11.0,
        ),
    ]
}
