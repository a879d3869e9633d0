use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub azimuth: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventThreshold {
    pub altitude_deg: f64,
    pub morning: &'static str,
    pub evening: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTime {
    pub name: &'static str,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarEvents {
    pub solar_noon: Option<DateTime<Utc>>,
    pub nadir: Option<DateTime<Utc>>,
    pub times: Vec<EventTime>,
}

impl SolarEvents {
    pub fn time(&self, name: &str) -> Option<DateTime<Utc>> {
        self.times.iter().find(|t| t.name == name).and_then(|t| t.time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiseSet {
    pub rise: DateTime<Utc>,
    pub set: DateTime<Utc>,
}
