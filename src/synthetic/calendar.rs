use chrono::{Duration, NaiveDate, Utc};

/// Current UTC calendar date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `count` consecutive days ending at `end` (inclusive), ascending
pub fn trailing_dates(count: usize, end: NaiveDate) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| end - Duration::days((count - i - 1) as i64))
        .collect()
}

/// `count` consecutive days starting the day after `after`, ascending
pub fn following_dates(count: usize, after: NaiveDate) -> Vec<NaiveDate> {
    (1..=count)
        .map(|i| after + Duration::days(i as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trailing_dates_end_on_anchor() {
        let dates = trailing_dates(7, date(2024, 3, 3));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], date(2024, 2, 26));
        assert_eq!(dates[6], date(2024, 3, 3));
    }

    #[test]
    fn test_trailing_dates_cross_leap_day() {
        let dates = trailing_dates(3, date(2024, 3, 1));
        assert_eq!(dates, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn test_dates_are_consecutive() {
        let dates = trailing_dates(250, date(2025, 1, 15));
        for pair in dates.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 1);
        }
    }

    #[test]
    fn test_following_dates_start_next_day() {
        let dates = following_dates(3, date(2024, 12, 30));
        assert_eq!(dates, vec![date(2024, 12, 31), date(2025, 1, 1), date(2025, 1, 2)]);
        assert!(following_dates(0, date(2024, 1, 1)).is_empty());
    }
}
