//! Best observation window search.
//!
//! Samples one star hourly across the 20:00-04:00 night window, keeps the
//! samples above the best-window altitude bar, and picks the highest. The
//! scan runs in hour order, so the strict comparison keeps the earliest
//! sample on an altitude tie.

use crate::catalog::StarRecord;
use crate::models::{Moment, Observer};
use crate::routes::bestwindow::BestWindow;
use crate::services::star_position::{star_position, BEST_WINDOW_FLOOR_DEG};
use log::debug;

/// First sampled civil hour of the scan window (20:00).
pub const SCAN_START_HOUR: u32 = 20;
/// Last sampled civil hour; 28 is 04:00 on the following day.
pub const SCAN_END_HOUR: u32 = 28;

struct Sample {
    /// Raw scan hour, 20..=28 (not wrapped).
    hour: u32,
    moment: Moment,
    altitude_deg: f64,
}

/// Find the best viewing moment for `star` during the night of
/// `reference`'s date, or `None` if the star never clears the bar.
pub fn compute_best_window(
    star: &StarRecord,
    observer: &Observer,
    reference: Moment,
) -> Option<BestWindow> {
    let mut surviving: Vec<Sample> = Vec::new();
    for hour in SCAN_START_HOUR..=SCAN_END_HOUR {
        let moment = reference.at_civil_hour(hour);
        let position = star_position(star, observer, moment);
        if position.altitude_deg > BEST_WINDOW_FLOOR_DEG {
            surviving.push(Sample {
                hour,
                moment,
                altitude_deg: position.altitude_deg,
            });
        }
    }

    if surviving.is_empty() {
        debug!(
            "{} never clears {} deg in tonight's scan window",
            star.name, BEST_WINDOW_FLOOR_DEG
        );
        return None;
    }

    let mut best = &surviving[0];
    for sample in &surviving[1..] {
        if sample.altitude_deg > best.altitude_deg {
            best = sample;
        }
    }

    Some(BestWindow {
        clock_time: best.moment.datetime().format("%H:%M").to_string(),
        altitude_deg: best.altitude_deg,
        period: period_label(&surviving),
    })
}

/// Coarse time-of-night label from the span of surviving scan hours.
///
/// All-evening spans read "evening 20-23", all-predawn spans "predawn 1-4".
/// A span crossing midnight reads "evening H-predawn H", or
/// "evening H-midnight" when it ends exactly at hour 0.
fn period_label(surviving: &[Sample]) -> String {
    let first = surviving.iter().map(|s| s.hour).min().unwrap_or(0);
    let last = surviving.iter().map(|s| s.hour).max().unwrap_or(0);

    if last < 24 {
        format!("evening {}-{}", first, last)
    } else if first >= 24 {
        format!("predawn {}-{}", first - 24, last - 24)
    } else if last == 24 {
        format!("evening {}-midnight", first)
    } else {
        format!("evening {}-predawn {}", first, last - 24)
    }
}
