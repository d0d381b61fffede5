//! Visibility filtering and brightness ranking.
//!
//! Runs the coordinate transform across the whole catalog for one moment,
//! keeps the stars above the visibility floor, and ranks them brightest
//! first. Deterministic and order-stable: identical inputs always yield the
//! identical ordered report.

use crate::catalog::StarRecord;
use crate::models::{Moment, Observer, SiderealBasis};
use crate::routes::visibility::{BrightnessBand, CompassDirection, VisibilityReport, VisibleStar};
use crate::services::star_position::{horizontal_position, VISIBILITY_FLOOR_DEG};
use log::debug;

/// Whether an altitude clears the visibility floor. Strict: a star sitting
/// exactly on the floor is excluded.
pub fn clears_visibility_floor(altitude_deg: f64) -> bool {
    altitude_deg > VISIBILITY_FLOOR_DEG
}

/// Compute the visibility report for a catalog, observer and moment.
///
/// An empty catalog, or a moment where nothing clears the floor, yields an
/// empty report; callers render that as "nothing visible", not as an error.
pub fn compute_visibility_report(
    catalog: &[StarRecord],
    observer: &Observer,
    moment: Moment,
) -> VisibilityReport {
    let basis = SiderealBasis::at(moment, observer.longitude_deg);

    let mut stars: Vec<VisibleStar> = catalog
        .iter()
        .filter_map(|star| {
            let position = horizontal_position(
                star.ra_hours,
                star.dec_deg,
                observer.latitude_deg,
                basis.lst_deg,
            );
            if clears_visibility_floor(position.altitude_deg) {
                Some(VisibleStar {
                    name: star.name.to_string(),
                    constellation: star.constellation.to_string(),
                    altitude_deg: position.altitude_deg,
                    azimuth_deg: position.azimuth_deg,
                    direction: CompassDirection::from_azimuth(position.azimuth_deg),
                    magnitude: star.magnitude,
                    brightness: BrightnessBand::from_magnitude(star.magnitude),
                })
            } else {
                None
            }
        })
        .collect();

    // Magnitude is an inverted scale, so ascending numeric order is correct
    // brightness order. The sort is stable, preserving catalog order on ties.
    stars.sort_by(|a, b| {
        a.magnitude
            .partial_cmp(&b.magnitude)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        "{} of {} catalog stars above {} deg at lst {:.3}",
        stars.len(),
        catalog.len(),
        VISIBILITY_FLOOR_DEG,
        basis.lst_deg
    );

    VisibilityReport {
        moment,
        stars,
        catalog_size: catalog.len(),
    }
}
