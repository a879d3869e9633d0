use std::f64::consts::PI;

use chrono::{DateTime, TimeZone, Utc};

use crate::angles::{deg_to_rad, EARTH_OBLIQUITY};
use crate::julian::{julian_day, JULIAN_2000};
use crate::types::{SunCoordinates, SunPosition};

// Formulas from https://www.aa.quae.nl/en/reken/zonpositie.html
// All angles are radians; `days` is days since the J2000 epoch.

pub fn solar_mean_anomaly(days: f64) -> f64 {
    deg_to_rad(357.5291 + 0.98560028 * days)
}

pub fn equation_of_center(anomaly: f64) -> f64 {
    deg_to_rad(
        1.9148 * anomaly.sin() + 0.02 * (2.0 * anomaly).sin() + 0.0003 * (3.0 * anomaly).sin(),
    )
}

pub fn ecliptic_longitude(anomaly: f64) -> f64 {
    let perihelion = deg_to_rad(102.9372);
    anomaly + equation_of_center(anomaly) + perihelion + PI
}

pub fn declination(ecliptic_lon: f64, ecliptic_lat: f64) -> f64 {
    (ecliptic_lat.sin() * EARTH_OBLIQUITY.cos()
        + ecliptic_lat.cos() * ecliptic_lon.sin() * EARTH_OBLIQUITY.sin())
    .asin()
}

pub fn right_ascension(ecliptic_lon: f64, ecliptic_lat: f64) -> f64 {
    let y = ecliptic_lon.sin() * EARTH_OBLIQUITY.cos() - ecliptic_lat.tan() * EARTH_OBLIQUITY.sin();
    y.atan2(ecliptic_lon.cos())
}

// `west_longitude` is the observer longitude in radians, west-positive.
pub fn sidereal_time(days: f64, west_longitude: f64) -> f64 {
    deg_to_rad(280.16 + 360.9856235 * days) - west_longitude
}

// Azimuth is measured from south, positive toward west.
pub fn azimuth(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    hour_angle
        .sin()
        .atan2(hour_angle.cos() * latitude.sin() - declination.tan() * latitude.cos())
}

pub fn altitude(hour_angle: f64, latitude: f64, declination: f64) -> f64 {
    (latitude.sin() * declination.sin() + latitude.cos() * declination.cos() * hour_angle.cos())
        .asin()
}

// Atmospheric refraction at the given altitude. The approximation is only
// valid at or above the horizon; negative altitudes are clamped to 0.
pub fn refraction(altitude: f64) -> f64 {
    let h = altitude.max(0.0);
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}

pub fn sun_coordinates<Tz: TimeZone>(date: &DateTime<Tz>) -> SunCoordinates {
    let days = julian_day(date) - JULIAN_2000;
    let l = ecliptic_longitude(solar_mean_anomaly(days));
    SunCoordinates {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}

pub fn sun_coordinates_now() -> SunCoordinates {
    sun_coordinates(&Utc::now())
}

// Latitude and longitude in degrees, longitude east-positive.
pub fn sun_position<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    let lw = -deg_to_rad(longitude);
    let phi = deg_to_rad(latitude);
    let days = julian_day(date) - JULIAN_2000;
    let coords = sun_coordinates(date);
    let h = sidereal_time(days, lw) - coords.right_ascension;
    SunPosition {
        azimuth: azimuth(h, phi, coords.declination),
        altitude: altitude(h, phi, coords.declination),
    }
}

pub fn sun_position_now(latitude: f64, longitude: f64) -> SunPosition {
    sun_position(&Utc::now(), latitude, longitude)
}
