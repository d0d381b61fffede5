use crate::models::Moment;
use crate::routes::visibility::BrightnessBand;
use serde::{Deserialize, Serialize};

// =========================================================
// Sky map (polar chart) types
// =========================================================

/// One star positioned on the unit-disk sky chart.
///
/// Geometry only; rasterization belongs to the rendering collaborator.
/// The disk center is the zenith, the edge is the horizon, and north maps
/// "up" in screen coordinates (positive x east, positive y down).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyMarker {
    pub name: String,
    /// Horizontal chart coordinate in [-1, 1].
    pub x: f64,
    /// Vertical chart coordinate in [-1, 1].
    pub y: f64,
    /// Marker diameter in chart points, floored so dim stars stay visible.
    pub size: f64,
    /// Hex fill color, consistent with the brightness band.
    pub color: String,
    pub brightness: BrightnessBand,
    /// Whether the chart should print the star's name next to the marker.
    pub show_label: bool,
    pub magnitude: f64,
}

/// Sky map visualization data for one moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkyMapData {
    pub moment: Moment,
    pub markers: Vec<SkyMarker>,
}

/// Route function name constant for the sky map
pub const GET_SKY_MAP: &str = "get_sky_map";
