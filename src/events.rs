use std::f64::consts::TAU;

use chrono::{DateTime, TimeZone, Utc};

use crate::angles::deg_to_rad;
use crate::julian::{date_from_julian_day, julian_day, JULIAN_2000};
use crate::solar::{declination, ecliptic_longitude, solar_mean_anomaly};
use crate::types::{EventThreshold, EventTime, RiseSet, SolarEvents};

// Small correction to the epoch of the mean solar transit.
pub const JULIAN_0: f64 = 0.0009;

// Sun altitude thresholds, in degrees, and the event names crossing them in
// the morning and in the evening.
pub const EVENT_TABLE: [EventThreshold; 6] = [
    EventThreshold {
        altitude_deg: -0.833,
        morning: "sunrise",
        evening: "sunset",
    },
    EventThreshold {
        altitude_deg: -0.3,
        morning: "sunriseEnd",
        evening: "sunsetStart",
    },
    EventThreshold {
        altitude_deg: -6.0,
        morning: "dawn",
        evening: "dusk",
    },
    EventThreshold {
        altitude_deg: -12.0,
        morning: "nauticalDawn",
        evening: "nauticalDusk",
    },
    EventThreshold {
        altitude_deg: -18.0,
        morning: "nightEnd",
        evening: "night",
    },
    EventThreshold {
        altitude_deg: 6.0,
        morning: "goldenHourEnd",
        evening: "goldenHour",
    },
];

pub fn julian_cycle(days: f64, west_longitude: f64) -> f64 {
    (days - JULIAN_0 - west_longitude / TAU).round()
}

pub fn approx_transit(hour_angle: f64, west_longitude: f64, cycle: f64) -> f64 {
    JULIAN_0 + (hour_angle + west_longitude) / TAU + cycle
}

pub fn solar_transit_jd(approx: f64, anomaly: f64, ecliptic_lon: f64) -> f64 {
    JULIAN_2000 + approx + 0.0053 * anomaly.sin() - 0.0069 * (2.0 * ecliptic_lon).sin()
}

// Hour angle at which the sun reaches `target_altitude`. None when it never
// does on the given day (polar day or polar night); a NaN argument is treated
// the same way rather than surfacing NaN angles.
pub fn event_hour_angle(target_altitude: f64, latitude: f64, declination: f64) -> Option<f64> {
    let cos_h = (target_altitude.sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());
    (-1.0..=1.0).contains(&cos_h).then(|| cos_h.acos())
}

struct TransitDay {
    west_longitude: f64,
    latitude: f64,
    cycle: f64,
    anomaly: f64,
    ecliptic_lon: f64,
    declination: f64,
    noon_jd: f64,
}

impl TransitDay {
    // Latitude and longitude in degrees, longitude east-positive.
    fn new<Tz: TimeZone>(date: &DateTime<Tz>, latitude: f64, longitude: f64) -> Self {
        let lw = -deg_to_rad(longitude);
        let days = julian_day(date) - JULIAN_2000;
        let cycle = julian_cycle(days, lw);
        let ds = approx_transit(0.0, lw, cycle);
        let anomaly = solar_mean_anomaly(ds);
        let ecliptic_lon = ecliptic_longitude(anomaly);
        TransitDay {
            west_longitude: lw,
            latitude: deg_to_rad(latitude),
            cycle,
            anomaly,
            ecliptic_lon,
            declination: declination(ecliptic_lon, 0.0),
            noon_jd: solar_transit_jd(ds, anomaly, ecliptic_lon),
        }
    }

    // Julian days of the morning and evening crossings of `altitude_deg`.
    fn crossings(&self, altitude_deg: f64) -> Option<(f64, f64)> {
        let w = event_hour_angle(deg_to_rad(altitude_deg), self.latitude, self.declination)?;
        let set_jd = solar_transit_jd(
            approx_transit(w, self.west_longitude, self.cycle),
            self.anomaly,
            self.ecliptic_lon,
        );
        Some((self.noon_jd - (set_jd - self.noon_jd), set_jd))
    }
}

pub fn solar_events<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> SolarEvents {
    let day = TransitDay::new(date, latitude, longitude);

    let mut times = Vec::with_capacity(2 * EVENT_TABLE.len());
    for event in &EVENT_TABLE {
        let (rise, set) = match day.crossings(event.altitude_deg) {
            Some((rise_jd, set_jd)) => (date_from_julian_day(rise_jd), date_from_julian_day(set_jd)),
            None => (None, None),
        };
        times.push(EventTime {
            name: event.morning,
            time: rise,
        });
        times.push(EventTime {
            name: event.evening,
            time: set,
        });
    }

    SolarEvents {
        solar_noon: date_from_julian_day(day.noon_jd),
        nadir: date_from_julian_day(day.noon_jd - 0.5),
        times,
    }
}

pub fn solar_events_now(latitude: f64, longitude: f64) -> SolarEvents {
    solar_events(&Utc::now(), latitude, longitude)
}

// Rise and set times for an arbitrary sun altitude threshold in degrees.
pub fn rise_set_at_altitude<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    altitude_deg: f64,
) -> Option<RiseSet> {
    let day = TransitDay::new(date, latitude, longitude);
    let (rise_jd, set_jd) = day.crossings(altitude_deg)?;
    Some(RiseSet {
        rise: date_from_julian_day(rise_jd)?,
        set: date_from_julian_day(set_jd)?,
    })
}
