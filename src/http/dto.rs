//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The visualization DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Best window
    BestWindow,
    // Sky map
    SkyMapData,
    SkyMarker,
    // Visibility
    BrightnessBand,
    CompassDirection,
    VisibilityReport,
    VisibleStar,
};

/// Query parameters shared by the time-dependent endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkyQuery {
    /// Whole-hour offset from "now" for time scrubbing (may be negative)
    #[serde(default)]
    pub hour_offset: Option<i64>,
    /// Truncate the visible-star list to the N brightest
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One catalog entry as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStarDto {
    pub name: String,
    pub ra_hours: f64,
    pub dec_deg: f64,
    pub constellation: String,
    pub magnitude: f64,
}

impl From<&crate::catalog::StarRecord> for CatalogStarDto {
    fn from(star: &crate::catalog::StarRecord) -> Self {
        Self {
            name: star.name.to_string(),
            ra_hours: star.ra_hours,
            dec_deg: star.dec_deg,
            constellation: star.constellation.to_string(),
            magnitude: star.magnitude,
        }
    }
}

/// Response for the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub stars: Vec<CatalogStarDto>,
    pub total: usize,
}

/// Response for the best-window lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestWindowResponse {
    /// Star the window was computed for
    pub star: String,
    /// Whether the star clears the best-window altitude bar tonight
    pub observable: bool,
    /// The window itself, absent when not observable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<BestWindow>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Configured observer site
    pub site: String,
}
