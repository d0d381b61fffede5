//! Observer site configuration and environment variable handling.

use crate::models::Observer;
use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// Default deployment site: Taipei.
pub const DEFAULT_SITE_NAME: &str = "Taipei";
pub const DEFAULT_LATITUDE_DEG: f64 = 25.03;
pub const DEFAULT_LONGITUDE_DEG: f64 = 121.56;
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

/// Observer site configuration loaded once at startup. The observer is a
/// process-wide constant after that; changing sites means restarting.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Human-readable site name
    pub site_name: String,
    /// Observer latitude/longitude in degrees
    pub observer: Observer,
    /// Civil UTC offset in whole hours, used for clock-time labels and the
    /// nightly scan window
    pub utc_offset_hours: i32,
}

impl SiteConfig {
    /// Create a site configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `OBSERVER_SITE` (optional, default: Taipei): site name
    /// - `OBSERVER_LAT` (optional, default: 25.03): latitude in degrees
    /// - `OBSERVER_LON` (optional, default: 121.56): longitude in degrees, east positive
    /// - `OBSERVER_UTC_OFFSET` (optional, default: 8): civil UTC offset in whole hours
    ///
    /// # Errors
    /// Returns an error if a variable is set but unparseable or out of range.
    pub fn from_env() -> Result<Self, String> {
        let site_name = env::var("OBSERVER_SITE").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string());

        let latitude_deg = parse_var("OBSERVER_LAT", DEFAULT_LATITUDE_DEG)?;
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err("OBSERVER_LAT must be between -90 and 90".to_string());
        }

        let longitude_deg = parse_var("OBSERVER_LON", DEFAULT_LONGITUDE_DEG)?;
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err("OBSERVER_LON must be between -180 and 180".to_string());
        }

        let utc_offset_hours: i32 = parse_var("OBSERVER_UTC_OFFSET", DEFAULT_UTC_OFFSET_HOURS)?;
        if !(-12..=14).contains(&utc_offset_hours) {
            return Err("OBSERVER_UTC_OFFSET must be between -12 and 14".to_string());
        }

        Ok(Self {
            site_name,
            observer: Observer::new(latitude_deg, longitude_deg),
            utc_offset_hours,
        })
    }

    /// The default Taipei deployment, independent of the environment.
    pub fn taipei() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            observer: Observer::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG),
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }

    /// The site's civil UTC offset as a chrono offset.
    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| format!("{} is set but not a valid value: {}", name, raw)),
        Err(_) => Ok(default),
    }
}
