use serde::{Deserialize, Serialize};

// =========================================================
// Best observation window types
// =========================================================

/// Best viewing moment for one star over the nightly scan window.
///
/// Absence (the star never clears the altitude bar) is expressed by the
/// caller as `Option<BestWindow>`, distinct from a window at zero altitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestWindow {
    /// Civil clock time of the best sample, "HH:MM".
    pub clock_time: String,
    /// Altitude at that sample in degrees.
    pub altitude_deg: f64,
    /// Coarse time-of-night label, e.g. "evening 20-23" or "predawn 1-4".
    pub period: String,
}

/// Route function name constant for the best-window lookup
pub const GET_BEST_WINDOW: &str = "get_best_window";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_window_serde_roundtrip() {
        let window = BestWindow {
            clock_time: "23:00".to_string(),
            altitude_deg: 62.5,
            period: "evening 21-predawn 2".to_string(),
        };
        let json = serde_json::to_string(&window).unwrap();
        let back: BestWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(back.clock_time, "23:00");
        assert_eq!(back.altitude_deg, 62.5);
        assert_eq!(back.period, "evening 21-predawn 2");
    }

    #[test]
    fn test_best_window_debug() {
        let window = BestWindow {
            clock_time: "20:00".to_string(),
            altitude_deg: 30.0,
            period: "evening 20-22".to_string(),
        };
        assert!(format!("{:?}", window).contains("BestWindow"));
    }
}
