/// Formats a duration given in minutes as `H:MM`.
pub struct TimeFormat {}

impl TimeFormat {
    pub fn new() -> Self {
        TimeFormat {}
    }

    pub fn format(&self, minutes: &f64) -> String {
        let total = minutes.round().max(0.0) as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::new()
    }
}
