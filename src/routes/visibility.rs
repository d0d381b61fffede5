use crate::models::Moment;
use serde::{Deserialize, Serialize};

// =========================================================
// Visible-star list types
// =========================================================

/// Compass direction label, 8 sectors of 45 degrees centered on the
/// cardinal and intercardinal points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompassDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassDirection {
    /// Sector for an azimuth in degrees (0 = north, clockwise).
    pub fn from_azimuth(azimuth_deg: f64) -> Self {
        let az = azimuth_deg.rem_euclid(360.0);
        if !(22.5..337.5).contains(&az) {
            CompassDirection::North
        } else if az < 67.5 {
            CompassDirection::Northeast
        } else if az < 112.5 {
            CompassDirection::East
        } else if az < 157.5 {
            CompassDirection::Southeast
        } else if az < 202.5 {
            CompassDirection::South
        } else if az < 247.5 {
            CompassDirection::Southwest
        } else if az < 292.5 {
            CompassDirection::West
        } else {
            CompassDirection::Northwest
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompassDirection::North => "north",
            CompassDirection::Northeast => "northeast",
            CompassDirection::East => "east",
            CompassDirection::Southeast => "southeast",
            CompassDirection::South => "south",
            CompassDirection::Southwest => "southwest",
            CompassDirection::West => "west",
            CompassDirection::Northwest => "northwest",
        }
    }
}

/// Coarse brightness band derived from apparent magnitude. The same bands
/// drive both the list label and the sky-map color, so the two surfaces
/// always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrightnessBand {
    /// Magnitude below 0.
    Brilliant,
    /// Magnitude 0 to 1.
    VeryBright,
    /// Magnitude 1 to 2.
    Bright,
    /// Magnitude 2 and up.
    Visible,
}

impl BrightnessBand {
    pub fn from_magnitude(magnitude: f64) -> Self {
        if magnitude < 0.0 {
            BrightnessBand::Brilliant
        } else if magnitude < 1.0 {
            BrightnessBand::VeryBright
        } else if magnitude < 2.0 {
            BrightnessBand::Bright
        } else {
            BrightnessBand::Visible
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BrightnessBand::Brilliant => "brilliant",
            BrightnessBand::VeryBright => "very bright",
            BrightnessBand::Bright => "bright",
            BrightnessBand::Visible => "visible",
        }
    }

    /// Marker color for the sky chart.
    pub fn color(&self) -> &'static str {
        match self {
            BrightnessBand::Brilliant => "#ffffff",
            BrightnessBand::VeryBright => "#e8f4f8",
            BrightnessBand::Bright => "#ffeaa7",
            BrightnessBand::Visible => "#ddd",
        }
    }
}

/// One catalog star above the visibility floor at the queried moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibleStar {
    pub name: String,
    pub constellation: String,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    pub direction: CompassDirection,
    pub magnitude: f64,
    pub brightness: BrightnessBand,
}

/// Everything visible at one moment, brightest first.
///
/// An empty `stars` list is a normal result ("nothing visible"), never an
/// error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityReport {
    pub moment: Moment,
    pub stars: Vec<VisibleStar>,
    /// Size of the catalog the filter ran over.
    pub catalog_size: usize,
}

/// Route function name constant for the visible-star list
pub const GET_VISIBILITY: &str = "get_visibility";
