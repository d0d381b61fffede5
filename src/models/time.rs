use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Offset, Utc};
use serde::*;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00).
pub const JD_J2000: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Civil timestamp at which a sky query is evaluated.
///
/// Wraps an offset-aware `chrono` datetime so that repeated queries with the
/// same `Moment` are exactly reproducible, and so the sky map can be scrubbed
/// to arbitrary past or future hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Moment(DateTime<FixedOffset>);

impl Moment {
    /// Create a new moment from an offset-aware datetime.
    pub fn new(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// The current instant, expressed in the given UTC offset.
    pub fn now_in(offset: FixedOffset) -> Self {
        Self(Utc::now().with_timezone(&offset))
    }

    /// The current instant in UTC.
    pub fn now() -> Self {
        Self::now_in(Utc.fix())
    }

    /// The underlying datetime.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Julian Date, fractional day included.
    ///
    /// Derived from the UTC instant; the civil offset only matters for
    /// clock-hour arithmetic, never for the time basis itself.
    pub fn julian_date(&self) -> f64 {
        self.0.timestamp_millis() as f64 / 86_400_000.0 + JD_UNIX_EPOCH
    }

    /// This moment shifted by a whole number of hours (may be negative).
    pub fn with_hour_offset(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// The moment at civil hour `hour` on this moment's date, in this
    /// moment's offset. Hours 24 and above roll over into the following day,
    /// so a 20..=28 scan covers 20:00 tonight through 04:00 tomorrow.
    pub fn at_civil_hour(&self, hour: u32) -> Self {
        let offset = *self.0.offset();
        let date = self.0.date_naive() + chrono::Days::new(u64::from(hour / 24));
        let time = NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or_default();
        Self(
            date.and_time(time)
                .and_local_timezone(offset)
                .single()
                .unwrap_or(self.0),
        )
    }
}

impl From<DateTime<FixedOffset>> for Moment {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Moment::new(dt)
    }
}

impl From<DateTime<Utc>> for Moment {
    fn from(dt: DateTime<Utc>) -> Self {
        Moment::new(dt.fixed_offset())
    }
}

/// Sidereal time basis for one (moment, longitude) pair.
///
/// Recomputed on every query and never cached; recomputation is cheap and
/// staleness must never occur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealBasis {
    /// Julian Date of the moment.
    pub julian_date: f64,
    /// Greenwich mean sidereal time in degrees, [0, 360).
    pub gmst_deg: f64,
    /// Local sidereal time in degrees, [0, 360).
    pub lst_deg: f64,
}

impl SiderealBasis {
    /// Compute the sidereal basis for a moment and an observer longitude
    /// (degrees, east positive).
    ///
    /// GMST uses the standard linear polynomial in days since J2000. No
    /// leap-second or nutation correction is applied; the error stays within
    /// a few arc-minutes over the supported range, which is well inside what
    /// naked-eye visibility decisions need.
    pub fn at(moment: Moment, longitude_deg: f64) -> Self {
        let julian_date = moment.julian_date();
        let gmst_deg =
            (280.46061837 + 360.98564736629 * (julian_date - JD_J2000)).rem_euclid(360.0);
        let lst_deg = (gmst_deg + longitude_deg).rem_euclid(360.0);
        Self {
            julian_date,
            gmst_deg,
            lst_deg,
        }
    }
}
