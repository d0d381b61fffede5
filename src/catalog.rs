//! Compiled-in bright-star catalog.
//!
//! Twenty naked-eye stars bright enough to survive urban light pollution.
//! RA/Dec are fixed J2000-era constants for the session; the catalog is
//! read-only and there is no loading path for external catalogs.

use crate::api::SkywatchError;
use serde::Serialize;

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StarRecord {
    /// Proper name.
    pub name: &'static str,
    /// Right ascension in hours, 0-24.
    pub ra_hours: f64,
    /// Declination in degrees, -90 to 90.
    pub dec_deg: f64,
    /// Host constellation.
    pub constellation: &'static str,
    /// Apparent magnitude; lower is brighter.
    pub magnitude: f64,
}

/// The full bright-star catalog, ordered roughly by brightness.
pub const BRIGHT_STARS: &[StarRecord] = &[
    star("Sirius", 6.7523, -16.7161, "Canis Major", -1.46),
    star("Canopus", 6.3992, -52.6956, "Carina", -0.74),
    star("Arcturus", 14.2610, 19.1824, "Boötes", -0.05),
    star("Vega", 18.6156, 38.7837, "Lyra", 0.03),
    star("Capella", 5.2781, 45.9980, "Auriga", 0.08),
    star("Rigel", 5.6794, -1.2017, "Orion", 0.13),
    star("Procyon", 7.6553, 5.2250, "Canis Minor", 0.34),
    star("Betelgeuse", 5.9195, 7.4069, "Orion", 0.50),
    star("Achernar", 1.6287, -57.2367, "Eridanus", 0.46),
    star("Altair", 19.8464, 8.8683, "Aquila", 0.77),
    star("Acrux", 12.4379, -63.0990, "Crux", 0.77),
    star("Aldebaran", 4.5987, 16.5093, "Taurus", 0.85),
    star("Antares", 16.4901, -26.4319, "Scorpius", 1.09),
    star("Spica", 13.4200, -11.1614, "Virgo", 0.97),
    star("Polaris", 2.5301, 89.2641, "Ursa Minor", 1.98),
    star("Deneb", 20.3704, 40.2566, "Cygnus", 1.25),
    star("Regulus", 10.1395, 11.9672, "Leo", 1.35),
    star("Pollux", 7.5755, 31.8883, "Gemini", 1.14),
    star("Kochab", 14.8460, 74.1553, "Ursa Minor", 1.86),
    star("Adhara", 7.4035, -8.6539, "Canis Major", 1.50),
];

const fn star(
    name: &'static str,
    ra_hours: f64,
    dec_deg: f64,
    constellation: &'static str,
    magnitude: f64,
) -> StarRecord {
    StarRecord {
        name,
        ra_hours,
        dec_deg,
        constellation,
        magnitude,
    }
}

/// Look up a catalog star by name (case-insensitive).
pub fn find_star(name: &str) -> Result<&'static StarRecord, SkywatchError> {
    BRIGHT_STARS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SkywatchError::UnknownStar(name.to_string()))
}
