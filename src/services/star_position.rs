//! Equatorial to horizontal coordinate transformation.
//!
//! The primitive every visibility decision and every sky-map marker derives
//! from: (RA, Dec, latitude, LST) -> (altitude, azimuth). Pure and
//! deterministic.

use crate::catalog::StarRecord;
use crate::models::{Moment, Observer, SiderealBasis};
use serde::{Deserialize, Serialize};

/// Minimum altitude for a star to count as visible at all. Below this,
/// atmospheric extinction near the horizon washes naked-eye stars out.
pub const VISIBILITY_FLOOR_DEG: f64 = 5.0;

/// Minimum altitude for a sample to count toward the best observation
/// window. Stricter than the visibility floor: "best" viewing needs real
/// elevation above the horizon haze.
pub const BEST_WINDOW_FLOOR_DEG: f64 = 20.0;

/// Below this, cos(lat)*cos(alt) is treated as zero and azimuth is undefined.
const AZIMUTH_DENOM_EPSILON: f64 = 1e-9;

/// Horizontal coordinates of one star for one (observer, moment) pair.
///
/// A pure function of its inputs; no identity beyond its values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// Angle above the horizon in degrees, [-90, 90].
    pub altitude_deg: f64,
    /// Compass bearing in degrees, [0, 360), 0 = north, clockwise.
    pub azimuth_deg: f64,
}

/// Transform equatorial coordinates to horizontal coordinates.
///
/// `ra_hours` in hours (0-24), `dec_deg` and `latitude_deg` in degrees,
/// `lst_deg` local sidereal time in degrees. The result is invariant under
/// reduction of `lst_deg` modulo 360.
pub fn horizontal_position(
    ra_hours: f64,
    dec_deg: f64,
    latitude_deg: f64,
    lst_deg: f64,
) -> HorizontalPosition {
    let ha = (lst_deg - ra_hours * 15.0).rem_euclid(360.0).to_radians();
    let dec = dec_deg.to_radians();
    let lat = latitude_deg.to_radians();

    let sin_alt = (dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos()).clamp(-1.0, 1.0);
    let alt = sin_alt.asin();

    let denom = lat.cos() * alt.cos();
    let azimuth_deg = if denom.abs() < AZIMUTH_DENOM_EPSILON {
        // Observer at a pole or star at zenith/nadir: azimuth is undefined,
        // report north rather than propagating NaN.
        0.0
    } else {
        let cos_az = ((dec.sin() - lat.sin() * sin_alt) / denom).clamp(-1.0, 1.0);
        let mut az = cos_az.acos().to_degrees();
        // acos alone cannot distinguish east from west; a star past its
        // meridian crossing (sin HA > 0) lies in the western half of the sky.
        if ha.sin() > 0.0 {
            az = 360.0 - az;
        }
        az.rem_euclid(360.0)
    };

    HorizontalPosition {
        altitude_deg: alt.to_degrees(),
        azimuth_deg,
    }
}

/// Horizontal position of a catalog star at a given moment.
pub fn star_position(star: &StarRecord, observer: &Observer, moment: Moment) -> HorizontalPosition {
    let basis = SiderealBasis::at(moment, observer.longitude_deg);
    horizontal_position(
        star.ra_hours,
        star.dec_deg,
        observer.latitude_deg,
        basis.lst_deg,
    )
}
