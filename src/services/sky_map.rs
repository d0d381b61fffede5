//! Polar sky-chart projection.
//!
//! Maps a visibility report onto a unit disk: center = zenith, edge =
//! horizon, radial distance linear in (90 - altitude) / 90. Emits geometry
//! and visual parameters only; drawing belongs to the rendering side.

use crate::routes::skymap::{SkyMapData, SkyMarker};
use crate::routes::visibility::VisibilityReport;

/// How many stars the chart plots; the report is already brightest-first.
pub const MAX_CHART_MARKERS: usize = 10;

/// Floor on marker size so the dimmest plotted star stays a visible dot.
pub const MIN_MARKER_SIZE: f64 = 2.0;

/// Only stars brighter than this get a printed name on the chart.
const LABEL_MAGNITUDE_LIMIT: f64 = 1.5;

/// Project a visibility report onto unit-disk chart coordinates.
///
/// Azimuth is rotated by -90 degrees so north points up in a screen
/// coordinate system whose positive x-axis is east (azimuth 90).
pub fn project_sky_map(report: &VisibilityReport) -> SkyMapData {
    let markers = report
        .stars
        .iter()
        .take(MAX_CHART_MARKERS)
        .map(|star| {
            let radius = (90.0 - star.altitude_deg) / 90.0;
            let angle = (star.azimuth_deg - 90.0).to_radians();
            SkyMarker {
                name: star.name.clone(),
                x: radius * angle.cos(),
                y: radius * angle.sin(),
                size: marker_size(star.magnitude),
                color: star.brightness.color().to_string(),
                brightness: star.brightness,
                show_label: star.magnitude < LABEL_MAGNITUDE_LIMIT,
                magnitude: star.magnitude,
            }
        })
        .collect();

    SkyMapData {
        moment: report.moment,
        markers,
    }
}

/// Marker size shrinks linearly as magnitude grows (dimmer), floored.
fn marker_size(magnitude: f64) -> f64 {
    (8.0 - magnitude * 2.0).max(MIN_MARKER_SIZE)
}
