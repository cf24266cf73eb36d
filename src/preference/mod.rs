use std::{
    str::FromStr,
    sync::{Arc, RwLock},
};

use lazy_static::lazy_static;
use log::warn;
use preferences::{AppInfo, Preferences, PreferencesMap};

const PREFS_PATH: &str = "nav-planner";
pub const APP_INFO: AppInfo = AppInfo {
    name: "kelpie-nav-planner",
    author: "shartrec.com",
};

// Preference constants
pub const UNITS: &str = "Units";
pub const HANGAR_PATH: &str = "Hangar.path";
pub const AIRCRAFT_CALLSIGN: &str = "Aircraft.callsign";
pub const LOG_LEVEL: &str = "Log.level";

lazy_static! {
    static ref MANAGER: PreferenceManager = PreferenceManager {
        preferences: {
            match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
                Ok(map) => Arc::new(RwLock::new(map)),
                Err(e) => {
                    warn!("Unable to open preferences, using defaults: {}", e);
                    Arc::new(RwLock::new(PreferencesMap::new()))
                }
            }
        },
        path: PREFS_PATH,
    };
}

pub struct PreferenceManager {
    preferences: Arc<RwLock<PreferencesMap>>,
    path: &'static str,
}

impl PreferenceManager {
    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        let prefs = self.preferences.read().unwrap_or_else(|e| e.into_inner());
        prefs.get(key).and_then(|s| s.parse::<T>().ok())
    }

    pub fn put<T: ToString>(&self, key: &str, value: T) {
        {
            let mut prefs = self.preferences.write().unwrap_or_else(|e| e.into_inner());
            prefs.insert(key.to_string(), value.to_string());
        }
        self.store();
    }

    pub fn remove(&self, key: &str) {
        {
            let mut prefs = self.preferences.write().unwrap_or_else(|e| e.into_inner());
            let _e = prefs.remove(key);
        }
        self.store();
    }

    pub fn clear(&self) {
        {
            let mut prefs = self.preferences.write().unwrap_or_else(|e| e.into_inner());
            prefs.clear();
        }
        self.store();
    }

    fn store(&self) {
        let prefs = self.preferences.read().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = prefs.save(&APP_INFO, self.path) {
            warn!("Unable to save preferences: {}", e);
        }
    }
}

pub fn manager() -> &'static PreferenceManager {
    &MANAGER
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use log::LevelFilter;
    use preferences::PreferencesMap;

    use crate::preference;

    #[test]
    fn test_save_restore() {
        let manager = preference::PreferenceManager {
            preferences: Arc::new(RwLock::new(PreferencesMap::new())),
            path: "kelpie-nav-unit-test",
        };

        manager.put(preference::UNITS, "Km");
        manager.put(preference::LOG_LEVEL, LevelFilter::Debug);
        manager.put("Test_KEY 3", 24.66 as f64);

        assert_eq!(manager.get::<String>(preference::UNITS), Some("Km".to_string()));
        assert_eq!(manager.get::<LevelFilter>(preference::LOG_LEVEL), Some(LevelFilter::Debug));
        assert_eq!(manager.get::<f64>("Test_KEY 3"), Some(24.66));
        assert_eq!(manager.get::<f64>(preference::UNITS), None);

        manager.remove("Test_KEY 3");
        assert_eq!(manager.get::<f64>("Test_KEY 3"), None);
        manager.clear();
        assert_eq!(manager.get::<String>(preference::UNITS), None);
    }
}
