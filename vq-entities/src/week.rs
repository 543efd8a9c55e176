use std::fmt;

use time::OffsetDateTime;

use crate::time::Timestamp;

/// An ISO 8601 week (Monday-aligned) used for bucketing vote quotas.
///
/// The ISO year of a date near the turn of the year may differ from
/// its calendar year, so both components are kept together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u8,
}

impl IsoWeek {
    pub fn containing(ts: Timestamp) -> Self {
        let dt = OffsetDateTime::from_unix_timestamp(ts.as_secs())
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let (year, week, _weekday) = dt.date().to_iso_week_date();
        Self { year, week }
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}
