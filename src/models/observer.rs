use serde::{Deserialize, Serialize};

/// Ground observer location, a process-wide constant for one deployment.
///
/// Latitude and longitude in degrees, east positive. Not user-mutable within
/// a session; moving the observer means restarting the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Observer {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}
