use std::fmt::{Display, Formatter};

/// A named point on the sectional chart that a leg starts or ends at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Waypoint {
    name: String,
}

impl Waypoint {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Display for Waypoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
