//! Weekly coverage check over timestamped observations.

use std::collections::BTreeMap;

use jiff::civil::{time, Time};
use tracing::{debug, instrument, Level};

use crate::models::day::day_index;
use crate::models::{LocationId, TimestampRecord};

const DAY_START: Time = time(0, 0, 0, 0);
const DAY_END: Time = time(23, 59, 59, 0);

#[derive(Debug)]
struct PairCoverage {
    days: [bool; 7],
    earliest: Time,
    latest: Time,
}

impl PairCoverage {
    fn new(record: &TimestampRecord) -> Self {
        Self {
            days: [false; 7],
            earliest: record.start_time,
            latest: record.end_time,
        }
    }

    fn add(&mut self, record: &TimestampRecord) {
        self.days[day_index(record.start_day)] = true;
        self.earliest = self.earliest.min(record.start_time);
        self.latest = self.latest.max(record.end_time);
    }

    fn is_complete(&self) -> bool {
        self.days.iter().all(|&d| d) && self.earliest == DAY_START && self.latest == DAY_END
    }
}

/// Checks, for every `(id, id_2)` pair, whether its records span all seven
/// weekdays and the full day from 00:00:00 to 23:59:59.
///
/// # Examples
///
/// ```
/// use jiff::civil::time;
/// use u_tolling::coverage::time_check;
/// use u_tolling::models::day::WEEK;
/// use u_tolling::models::TimestampRecord;
///
/// let records: Vec<_> = WEEK
///     .iter()
///     .map(|&day| TimestampRecord {
///         id: 1,
///         id_2: 2,
///         start_day: day,
///         start_time: time(0, 0, 0, 0),
///         end_day: day,
///         end_time: time(23, 59, 59, 0),
///     })
///     .collect();
/// assert_eq!(time_check(&records)[&(1, 2)], true);
/// assert_eq!(time_check(&records[..6])[&(1, 2)], false);
/// ```
#[instrument(skip_all, level = Level::DEBUG, fields(records = records.len()))]
pub fn time_check(records: &[TimestampRecord]) -> BTreeMap<(LocationId, LocationId), bool> {
    let mut pairs: BTreeMap<(LocationId, LocationId), PairCoverage> = BTreeMap::new();
    for record in records {
        pairs
            .entry(record.pair())
            .or_insert_with(|| PairCoverage::new(record))
            .add(record);
    }

    let result: BTreeMap<_, _> = pairs
        .into_iter()
        .map(|(pair, cov)| (pair, cov.is_complete()))
        .collect();
    debug!(
        pairs = result.len(),
        complete = result.values().filter(|&&c| c).count(),
        "coverage checked"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::day::WEEK;
    use jiff::civil::Weekday;

    fn record(id: LocationId, day: Weekday, start: Time, end: Time) -> TimestampRecord {
        TimestampRecord {
            id,
            id_2: id + 1,
            start_day: day,
            start_time: start,
            end_day: day,
            end_time: end,
        }
    }

    fn full_week(id: LocationId) -> Vec<TimestampRecord> {
        WEEK.iter()
            .map(|&d| record(id, d, DAY_START, DAY_END))
            .collect()
    }

    #[test]
    fn test_full_week_complete() {
        let result = time_check(&full_week(1));
        assert_eq!(result.len(), 1);
        assert!(result[&(1, 2)]);
    }

    #[test]
    fn test_missing_day() {
        let records: Vec<_> = full_week(1)
            .into_iter()
            .filter(|r| r.start_day != Weekday::Wednesday)
            .collect();
        assert!(!time_check(&records)[&(1, 2)]);
    }

    #[test]
    fn test_short_day_span() {
        let mut records = full_week(1);
        for r in &mut records {
            r.end_time = time(18, 0, 0, 0);
        }
        assert!(!time_check(&records)[&(1, 2)]);
    }

    #[test]
    fn test_span_from_separate_records() {
        let mut records = Vec::new();
        for &d in &WEEK {
            records.push(record(1, d, time(5, 0, 0, 0), time(12, 0, 0, 0)));
        }
        records.push(record(1, Weekday::Monday, DAY_START, time(1, 0, 0, 0)));
        records.push(record(1, Weekday::Friday, time(20, 0, 0, 0), DAY_END));
        assert!(time_check(&records)[&(1, 2)]);
    }

    #[test]
    fn test_pairs_independent() {
        let mut records = full_week(1);
        records.push(record(10, Weekday::Monday, DAY_START, DAY_END));
        let result = time_check(&records);
        assert_eq!(result.keys().copied().collect::<Vec<_>>(), vec![(1, 2), (10, 11)]);
        assert!(result[&(1, 2)]);
        assert!(!result[&(10, 11)]);
    }

    #[test]
    fn test_empty() {
        assert!(time_check(&[]).is_empty());
    }
}
