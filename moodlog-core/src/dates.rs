use chrono::{Datelike, Duration, NaiveDate};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Window of history a view covers, relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DateRange {
    #[strum(to_string = "last-7-days", serialize = "week")]
    Last7Days,
    #[strum(to_string = "last-30-days", serialize = "month")]
    Last30Days,
    ThisMonth,
    #[default]
    AllTime,
}

impl DateRange {
    /// First day inside the range, or `None` for [`DateRange::AllTime`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use moodlog_core::dates::DateRange;
    /// let today = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
    ///
    /// assert_eq!(DateRange::Last7Days.start(today), NaiveDate::from_ymd_opt(2025, 8, 8));
    /// assert_eq!(DateRange::ThisMonth.start(today), NaiveDate::from_ymd_opt(2025, 8, 1));
    /// assert_eq!(DateRange::AllTime.start(today), None);
    /// ```
    pub fn start(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateRange::Last7Days => Some(today - Duration::days(7)),
            DateRange::Last30Days => Some(today - Duration::days(30)),
            DateRange::ThisMonth => today.with_day(1),
            DateRange::AllTime => None,
        }
    }

    /// Whether an entry dated `date` belongs to this range.
    ///
    /// Undated entries only belong to [`DateRange::AllTime`]. Future dates are kept.
    pub fn contains(self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        match (self.start(today), date) {
            (None, _) => true,
            (Some(start), Some(date)) => date >= start,
            (Some(_), None) => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7Days => "last 7 days",
            DateRange::Last30Days => "last 30 days",
            DateRange::ThisMonth => "this month",
            DateRange::AllTime => "all time",
        }
    }
}

/// Generates a vector of `NaiveDate`s, inclusive of the start and end dates.
/// If `start` is after `end`, the resulting vector will be empty.
pub fn get_dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn last_7_days_excludes_eight_days_ago() {
        let today = d(2025, 8, 15);
        assert!(DateRange::Last7Days.contains(Some(today), today));
        assert!(DateRange::Last7Days.contains(Some(d(2025, 8, 8)), today));
        assert!(!DateRange::Last7Days.contains(Some(d(2025, 8, 7)), today));
    }

    #[test]
    fn this_month_starts_on_the_first() {
        let today = d(2025, 3, 2);
        assert!(DateRange::ThisMonth.contains(Some(d(2025, 3, 1)), today));
        assert!(!DateRange::ThisMonth.contains(Some(d(2025, 2, 28)), today));
    }

    #[test]
    fn undated_only_in_all_time() {
        let today = d(2025, 8, 15);
        assert!(DateRange::AllTime.contains(None, today));
        assert!(!DateRange::Last30Days.contains(None, today));
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!(DateRange::from_str("last-7-days").unwrap(), DateRange::Last7Days);
        assert_eq!(DateRange::from_str("week").unwrap(), DateRange::Last7Days);
        assert_eq!(DateRange::from_str("This-Month").unwrap(), DateRange::ThisMonth);
        assert_eq!(DateRange::from_str("all-time").unwrap(), DateRange::AllTime);
        assert!(DateRange::from_str("fortnight").is_err());
    }

    #[test]
    fn dates_in_range_are_inclusive() {
        let dates = get_dates_in_range(d(2025, 8, 30), d(2025, 9, 1));
        assert_eq!(dates, vec![d(2025, 8, 30), d(2025, 8, 31), d(2025, 9, 1)]);
        assert!(get_dates_in_range(d(2025, 9, 2), d(2025, 9, 1)).is_empty());
    }
}
