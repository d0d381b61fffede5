//! Public API surface for the skywatch core.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::bestwindow::BestWindow;
pub use crate::routes::skymap::SkyMapData;
pub use crate::routes::skymap::SkyMarker;
pub use crate::routes::visibility::BrightnessBand;
pub use crate::routes::visibility::CompassDirection;
pub use crate::routes::visibility::VisibilityReport;
pub use crate::routes::visibility::VisibleStar;

use thiserror::Error;

/// Errors surfaced by the skywatch library.
///
/// The computational core itself is infallible; the only failure mode is a
/// lookup against the compiled-in catalog.
#[derive(Debug, Error)]
pub enum SkywatchError {
    /// The requested star is not in the compiled-in catalog.
    #[error("unknown star: {0}")]
    UnknownStar(String),
}
