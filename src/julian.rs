use chrono::{DateTime, TimeZone, Utc};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

// Julian Day Number of the Unix epoch, 1970-01-01T00:00:00Z.
pub const JULIAN_UNIX_EPOCH: f64 = 2_440_588.0;

// Julian Day Number of the J2000 epoch, 2000-01-01T12:00:00Z.
pub const JULIAN_2000: f64 = 2_451_545.0;

pub fn to_julian_day(timestamp_secs: f64) -> f64 {
    // Julian days begin at noon, hence the half-day shift.
    timestamp_secs / SECONDS_PER_DAY - 0.5 + JULIAN_UNIX_EPOCH
}

pub fn from_julian_day(julian_day: f64) -> f64 {
    (julian_day + 0.5 - JULIAN_UNIX_EPOCH) * SECONDS_PER_DAY
}

pub fn days_since_2000(timestamp_secs: f64) -> f64 {
    to_julian_day(timestamp_secs) - JULIAN_2000
}

pub fn julian_day<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    to_julian_day(date.timestamp_millis() as f64 / 1000.0)
}

pub fn date_from_julian_day(julian_day: f64) -> Option<DateTime<Utc>> {
    let secs = from_julian_day(julian_day);
    if !secs.is_finite() {
        return None;
    }
    Utc.timestamp_millis_opt((secs * 1000.0).round() as i64).single()
}
