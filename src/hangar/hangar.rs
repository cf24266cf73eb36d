/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};
use yaml_rust::yaml::Hash;
use yaml_rust::{Yaml, YamlLoader};

use crate::error::{PerformanceError, Result};
use crate::model::aircraft::{Aircraft, PerformanceCurves, PerformanceProfile};
use crate::preference::{APP_INFO, HANGAR_PATH};

// The Piper Cherokee Archer II the charts were fitted for.
pub static DEFAULT_AIRCRAFT: &str = "---
- callsign: N8273V
  type: PA-28-181
  category: Airplane
  class: SEL
  is-default: true
  climb-speed: 76
  cruise-speed: 115
  descend-speed: 122
  fuel-capacity: 48
  fuel-rate: 7.6
  mag-dev:
    0: -1
    30: 0
    60: 0
    90: 1
    120: 1
    150: 2
    180: 1
    210: 1
    240: 0
    270: 1
    300: -1
    330: -1
  time-to-climb: [2.87877650796108e-06, -0.000144802420551403, 0.00342898366361228, -0.0107917301934256, 0.634422192936824, -0.0186154940652254]
  distance-to-climb: [4.42959545765142e-06, -0.000163476059542869, 0.00231669831047607, 0.0252978983345908, 0.678065767832256, -0.0732483197801467]
  fuel-to-climb: [-1.94926996262817e-06, 0.000145480319823401, -0.00369494915915234, 0.0429170270715064, -0.0192274749207769, -0.0198608173346909]
  time-to-descend: [-1.58341002886778e-06, 0.000108753346616133, -0.00206982222787217, -0.0214951101376967, 1.68166975233790, -0.00660865289312827]
  distance-to-descend: [-1.29865755740527e-06, 5.78201345323594e-05, 0.00120320011417074, -0.121296457837932, 3.87191245881648, 0.181102740447271]
  fuel-to-descend: [1.19726058053013e-07, -1.36088862232907e-06, -0.000200535974443365, 0.00344771825995696, 0.0981893803146724, 0.0140448819097330]
";

const KEY_CALLSIGN: &str = "callsign";
const KEY_TYPE: &str = "type";
const KEY_CATEGORY: &str = "category";
const KEY_CLASS: &str = "class";
const KEY_IS_DEFAULT: &str = "is-default";
const KEY_CLIMB_SPEED: &str = "climb-speed";
const KEY_CRUISE_SPEED: &str = "cruise-speed";
const KEY_DESCEND_SPEED: &str = "descend-speed";
const KEY_FUEL_CAPACITY: &str = "fuel-capacity";
const KEY_FUEL_RATE: &str = "fuel-rate";
const KEY_MAG_DEV: &str = "mag-dev";
const KEY_TIME_TO_CLIMB: &str = "time-to-climb";
const KEY_DISTANCE_TO_CLIMB: &str = "distance-to-climb";
const KEY_FUEL_TO_CLIMB: &str = "fuel-to-climb";
const KEY_TIME_TO_DESCEND: &str = "time-to-descend";
const KEY_DISTANCE_TO_DESCEND: &str = "distance-to-descend";
const KEY_FUEL_TO_DESCEND: &str = "fuel-to-descend";

// This is where all the planes live.
#[derive(Debug, Default)]
pub struct Hangar {
    aircraft: Vec<Arc<Aircraft>>,
}

impl Hangar {
    pub fn new(aircraft: Vec<Arc<Aircraft>>) -> Self {
        Self { aircraft }
    }

    pub fn get_default_aircraft(&self) -> Option<Arc<Aircraft>> {
        self.aircraft
            .iter()
            .find(|a| a.is_default())
            .or_else(|| self.aircraft.first())
            .cloned()
    }

    pub fn get_all(&self) -> &[Arc<Aircraft>] {
        &self.aircraft
    }

    pub fn get(&self, callsign: &str) -> Option<Arc<Aircraft>> {
        self.aircraft
            .iter()
            .find(|a| a.get_callsign().eq_ignore_ascii_case(callsign))
            .cloned()
    }
}

/// Load aircraft from a yaml file, or the built in aircraft if there is no
/// such file.
pub fn load_hangar(path: &Path) -> Result<Hangar> {
    let contents = if path.exists() {
        info!("Loading aircraft from {}", path.display());
        fs::read_to_string(path)?
    } else {
        warn!("No aircraft file at {}, using the built in aircraft", path.display());
        DEFAULT_AIRCRAFT.to_string()
    };
    load_hangar_from_str(&contents)
}

pub fn load_hangar_from_str(contents: &str) -> Result<Hangar> {
    let mut hangar: Vec<Arc<Aircraft>> = Vec::new();

    let docs = YamlLoader::load_from_str(contents)?;
    for doc in docs {
        let all = doc.as_vec().ok_or_else(|| {
            PerformanceError::Configuration("The aircraft file must be a list of aircraft".to_string())
        })?;
        for each in all {
            let map = each.as_hash().ok_or_else(|| {
                PerformanceError::Configuration("Each aircraft must be a map of settings".to_string())
            })?;
            hangar.push(Arc::new(read_aircraft(map)?));
        }
    }
    info!("{} aircraft in the hangar", hangar.len());
    Ok(Hangar::new(hangar))
}

fn read_aircraft(map: &Hash) -> Result<Aircraft> {
    let callsign = get_string(map, KEY_CALLSIGN)?;
    let profile = PerformanceProfile {
        climb_speed_kts: get_f64(map, KEY_CLIMB_SPEED)?,
        cruise_speed_kts: get_f64(map, KEY_CRUISE_SPEED)?,
        descend_speed_kts: get_f64(map, KEY_DESCEND_SPEED)?,
        fuel_capacity_gal: get_f64(map, KEY_FUEL_CAPACITY)?,
        fuel_rate_gph: get_f64(map, KEY_FUEL_RATE)?,
        mag_dev_lookup: get_mag_dev(map)?,
    };
    let curves = PerformanceCurves {
        time_to_climb: get_f64_vec(map, KEY_TIME_TO_CLIMB)?,
        distance_to_climb: get_f64_vec(map, KEY_DISTANCE_TO_CLIMB)?,
        fuel_to_climb: get_f64_vec(map, KEY_FUEL_TO_CLIMB)?,
        time_to_descend: get_f64_vec(map, KEY_TIME_TO_DESCEND)?,
        distance_to_descend: get_f64_vec(map, KEY_DISTANCE_TO_DESCEND)?,
        fuel_to_descend: get_f64_vec(map, KEY_FUEL_TO_DESCEND)?,
    };
    Aircraft::new(
        callsign,
        get_string(map, KEY_TYPE).unwrap_or_default(),
        get_string(map, KEY_CATEGORY).unwrap_or_default(),
        get_string(map, KEY_CLASS).unwrap_or_default(),
        get_bool(map, KEY_IS_DEFAULT),
        profile,
        curves,
    )
}

fn get_value<'a>(map: &'a Hash, key: &str) -> Result<&'a Yaml> {
    map.get(&Yaml::String(key.to_string())).ok_or_else(|| {
        PerformanceError::Configuration(format!("Missing aircraft setting '{}'", key))
    })
}

fn as_number(value: &Yaml) -> Option<f64> {
    match value {
        Yaml::Integer(i) => Some(*i as f64),
        Yaml::Real(_) => value.as_f64(),
        _ => None,
    }
}

fn get_bool(map: &Hash, key: &str) -> bool {
    map.get(&Yaml::String(key.to_string()))
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn get_f64(map: &Hash, key: &str) -> Result<f64> {
    as_number(get_value(map, key)?).ok_or_else(|| {
        PerformanceError::Configuration(format!("Aircraft setting '{}' must be a number", key))
    })
}

fn get_f64_vec(map: &Hash, key: &str) -> Result<Vec<f64>> {
    let values = get_value(map, key)?.as_vec().ok_or_else(|| {
        PerformanceError::Configuration(format!("Aircraft setting '{}' must be a list", key))
    })?;
    values
        .iter()
        .map(|v| {
            as_number(v).ok_or_else(|| {
                PerformanceError::Configuration(format!("Aircraft setting '{}' must only hold numbers", key))
            })
        })
        .collect()
}

fn get_mag_dev(map: &Hash) -> Result<BTreeMap<i32, f64>> {
    let table = get_value(map, KEY_MAG_DEV)?.as_hash().ok_or_else(|| {
        PerformanceError::Configuration(format!(
            "Aircraft setting '{}' must map headings to deviations",
            KEY_MAG_DEV
        ))
    })?;
    let mut lookup = BTreeMap::new();
    for (heading, deviation) in table {
        let heading = heading.as_i64().ok_or_else(|| {
            PerformanceError::Configuration(format!("Deviation card heading {:?} is not a whole number", heading))
        })?;
        let deviation = as_number(deviation).ok_or_else(|| {
            PerformanceError::Configuration(format!("Deviation for heading {} is not a number", heading))
        })?;
        lookup.insert(heading as i32, deviation);
    }
    Ok(lookup)
}

fn get_string(map: &Hash, key: &str) -> Result<String> {
    get_value(map, key)?
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| PerformanceError::Configuration(format!("Aircraft setting '{}' must be text", key)))
}

pub fn get_hangar_path() -> PathBuf {
    let pref = crate::preference::manager();
    if let Some(path) = pref.get::<String>(HANGAR_PATH) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .map(|dir| dir.join(APP_INFO.name))
        .unwrap_or_default()
        .join("aircraft.yaml")
}
