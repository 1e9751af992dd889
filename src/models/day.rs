//! Day-of-week helpers on top of [`jiff::civil::Weekday`].

use jiff::civil::Weekday;

/// The canonical week order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// Position of `day` in [`WEEK`] (Monday = 0).
pub fn day_index(day: Weekday) -> usize {
    day.to_monday_zero_offset() as usize
}

/// Returns `true` for Saturday and Sunday.
pub fn is_weekend(day: Weekday) -> bool {
    matches!(day, Weekday::Saturday | Weekday::Sunday)
}

/// English day name, as it appears in source tables.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Parses an English day name (case-insensitive).
pub fn parse_day(name: &str) -> Option<Weekday> {
    WEEK.iter()
        .copied()
        .find(|&d| day_name(d).eq_ignore_ascii_case(name.trim()))
}

/// Serde adapter writing weekdays by name.
pub(crate) mod serde_weekday {
    use jiff::civil::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(super::day_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Weekday, D::Error> {
        let name = String::deserialize(d)?;
        super::parse_day(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown day `{name}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_order() {
        for (i, &d) in WEEK.iter().enumerate() {
            assert_eq!(day_index(d), i);
        }
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(Weekday::Saturday));
        assert!(is_weekend(Weekday::Sunday));
        assert!(!is_weekend(Weekday::Friday));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("Monday"), Some(Weekday::Monday));
        assert_eq!(parse_day(" sunday "), Some(Weekday::Sunday));
        assert_eq!(parse_day("Funday"), None);
    }
}
