pub mod angles;
pub mod events;
pub mod julian;
pub mod solar;
pub mod types;

pub use angles::{deg_to_rad, rad_to_deg, EARTH_OBLIQUITY, RADIANS_PER_DEGREE};

pub use julian::{
    date_from_julian_day, days_since_2000, from_julian_day, julian_day, to_julian_day, JULIAN_2000,
    JULIAN_UNIX_EPOCH, SECONDS_PER_DAY,
};

pub use solar::{
    altitude, azimuth, declination, ecliptic_longitude, equation_of_center, refraction,
    right_ascension, sidereal_time, solar_mean_anomaly, sun_coordinates, sun_coordinates_now,
    sun_position, sun_position_now,
};

pub use events::{
    approx_transit, event_hour_angle, julian_cycle, rise_set_at_altitude, solar_events,
    solar_events_now, solar_transit_jd, EVENT_TABLE, JULIAN_0,
};

pub use types::{EventThreshold, EventTime, RiseSet, SolarEvents, SunCoordinates, SunPosition};
