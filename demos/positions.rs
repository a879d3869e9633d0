use chrono::TimeZone;
use chrono_tz::Europe::London;

use sun_times::angles::rad_to_deg;
use sun_times::events::solar_events;
use sun_times::solar::{refraction, sun_position};

fn main() {
    let latitude = 51.5;
    let longitude = -0.13;

    let dt = London.with_ymd_and_hms(2026, 3, 20, 12, 0, 0).unwrap();

    let pos = sun_position(&dt, latitude, longitude);
    let ev = solar_events(&dt, latitude, longitude);

    println!("=== Sun Position and Event Times ===");
    println!(
        "Location: London ({:.2}°N, {:.2}°W)",
        latitude, -longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Position ---");
    println!("Azimuth: {:.2}° (0°=S, positive toward W)", rad_to_deg(pos.azimuth));
    println!("Altitude: {:.2}°", rad_to_deg(pos.altitude));
    println!(
        "Refraction-corrected altitude: {:.2}°",
        rad_to_deg(pos.altitude + refraction(pos.altitude))
    );
    println!();
    println!("--- Event Times (UTC) ---");
    match ev.solar_noon {
        Some(t) => println!("solarNoon: {}", t),
        None => println!("solarNoon: -"),
    }
    match ev.nadir {
        Some(t) => println!("nadir: {}", t),
        None => println!("nadir: -"),
    }
    for entry in &ev.times {
        match entry.time {
            Some(t) => println!("{}: {}", entry.name, t),
            None => println!("{}: does not occur", entry.name),
        }
    }
}
