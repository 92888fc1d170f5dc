//! Calendar arithmetic for the solar model.
//!
//! Day-of-year, day-of-week and the United States daylight saving predicate.
//! Everything here is a pure function of its arguments; nothing is validated,
//! so an impossible date such as April 31 is simply counted through.
//!
//! The weekday is counted from Sunday, January 2, 1977 with one leap day every
//! four years. That matches the real calendar from 1977 through 2099 and drifts
//! after the 2100 century exception.

use crate::constants::*;

/// Gregorian leap year rule, applied proleptically.
///
/// # Examples
/// ```
/// use sunclock::calendar::is_leap_year;
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, or 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Day number within the year, January 1 being day 1.
///
/// Sums the lengths of every month strictly before `month` and adds `day`.
/// A month of 1 or less sums nothing; months past December only count the
/// twelve real months.
///
/// # Examples
/// ```
/// use sunclock::calendar::day_of_year;
/// assert_eq!(day_of_year(2015, 1, 1), 1);
/// assert_eq!(day_of_year(2000, 3, 1), 61);
/// assert_eq!(day_of_year(1900, 3, 1), 60);
/// ```
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    (1..month.min(13))
        .map(|m| days_in_month(year, m))
        .sum::<i32>()
        + day
}

/// Day of the week, 1 = Sunday through 7 = Saturday.
///
/// # Examples
/// ```
/// use sunclock::calendar::day_of_week;
/// assert_eq!(day_of_week(1977, 1, 2), 1); // anchor Sunday
/// assert_eq!(day_of_week(2015, 6, 21), 1);
/// assert_eq!(day_of_week(2024, 1, 1), 2); // Monday
/// ```
pub fn day_of_week(year: i32, month: i32, day: i32) -> i32 {
    // i64 so that any i32 year stays in range
    let years = i64::from(year) - i64::from(WEEKDAY_REFERENCE_YEAR);
    let leap_days = years / 4;
    let days = years * 365 + i64::from(day_of_year(year, month, day)) + leap_days
        - i64::from(WEEKDAY_REFERENCE_DAY_OF_YEAR);
    days.rem_euclid(7) as i32 + 1
}

/// Simplified United States daylight saving rule (2007 onwards).
///
/// DST runs from the second Sunday of March until the first Sunday of
/// November. `dow` must be the [`day_of_week`] of `day` itself.
///
/// # Arguments
/// * `day` - Day of the month
/// * `month` - Month number 1..=12
/// * `dow` - Day of the week of that date, 1 = Sunday
pub fn is_us_dst(day: i32, month: i32, dow: i32) -> bool {
    if !(DST_START_MONTH..=DST_END_MONTH).contains(&month) {
        return false;
    }

    if month > DST_START_MONTH && month < DST_END_MONTH {
        return true;
    }

    // Date of the most recent Sunday on or before `day`; may be zero or negative
    let last_sunday = day - (dow - 1);

    if month == DST_START_MONTH {
        last_sunday >= DST_SECOND_SUNDAY_EARLIEST_DAY
    } else {
        last_sunday <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(1996));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2400));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2015));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2015, 1), 31);
        assert_eq!(days_in_month(2015, 2), 28);
        assert_eq!(days_in_month(2016, 2), 29);
        assert_eq!(days_in_month(2015, 4), 30);
        assert_eq!(days_in_month(2015, 12), 31);
        assert_eq!(days_in_month(2015, 0), 0);
        assert_eq!(days_in_month(2015, 13), 0);
    }

    #[test]
    fn test_days_in_month_sum_to_year_length() {
        let total: i32 = (1..=12).map(|m| days_in_month(2015, m)).sum();
        assert_eq!(total, 365);
        let total: i32 = (1..=12).map(|m| days_in_month(2016, m)).sum();
        assert_eq!(total, 366);
    }

    #[test]
    fn test_day_of_year_first_day() {
        for year in [1900, 1977, 2000, 2015, 2024] {
            assert_eq!(day_of_year(year, 1, 1), 1);
        }
    }

    #[test]
    fn test_day_of_year_march_first() {
        assert_eq!(day_of_year(2000, 3, 1), 61);
        assert_eq!(day_of_year(1900, 3, 1), 60);
        assert_eq!(day_of_year(2015, 3, 1), 60);
    }

    #[test]
    fn test_day_of_year_end_of_year() {
        assert_eq!(day_of_year(2015, 12, 31), 365);
        assert_eq!(day_of_year(2016, 12, 31), 366);
    }

    #[test]
    fn test_day_of_year_unvalidated_dates() {
        // April 31 is counted as May 1
        assert_eq!(day_of_year(2015, 4, 31), day_of_year(2015, 5, 1));
        assert_eq!(day_of_year(2015, 0, 5), 5);
        assert_eq!(day_of_year(2015, 13, 1), 366);
    }

    #[test]
    fn test_day_of_week_anchor() {
        assert_eq!(day_of_week(1977, 1, 2), 1);
        assert_eq!(day_of_week(1977, 1, 1), 7);
        assert_eq!(day_of_week(1977, 1, 8), 7);
    }

    #[test]
    fn test_day_of_week_known_dates() {
        assert_eq!(day_of_week(2015, 6, 21), 1); // Sunday
        assert_eq!(day_of_week(2000, 1, 1), 7); // Saturday
        assert_eq!(day_of_week(2024, 2, 29), 5); // Thursday
        assert_eq!(day_of_week(2015, 3, 8), 1); // Sunday
    }

    #[test]
    fn test_day_of_week_before_anchor_in_range() {
        for (y, m, d) in [(1970, 1, 1), (1900, 6, 15), (1, 1, 1)] {
            let dow = day_of_week(y, m, d);
            assert!((1..=7).contains(&dow), "{y}-{m}-{d} gave {dow}");
        }
    }

    #[test]
    fn test_day_of_week_far_years() {
        for year in [6_000_000, -6_000_000, i32::MAX, i32::MIN] {
            let dow = day_of_week(year, 6, 21);
            assert!((1..=7).contains(&dow), "{year} gave {dow}");
        }
        for year in [6_000_000, -6_000_000] {
            assert_eq!(day_of_week(year, 1, 8), day_of_week(year, 1, 1));
        }
    }

    #[test]
    fn test_dst_outside_season() {
        assert!(!is_us_dst(15, 1, day_of_week(2015, 1, 15)));
        assert!(!is_us_dst(28, 2, day_of_week(2015, 2, 28)));
        assert!(!is_us_dst(21, 12, day_of_week(2015, 12, 21)));
    }

    #[test]
    fn test_dst_inside_season() {
        for month in 4..=10 {
            assert!(is_us_dst(15, month, day_of_week(2015, month, 15)));
        }
    }

    #[test]
    fn test_dst_march_start_on_eighth() {
        // 2015: second Sunday of March is the 8th
        assert!(!is_us_dst(7, 3, day_of_week(2015, 3, 7)));
        assert!(is_us_dst(8, 3, day_of_week(2015, 3, 8)));
        assert!(is_us_dst(9, 3, day_of_week(2015, 3, 9)));
    }

    #[test]
    fn test_dst_march_start_on_fourteenth() {
        // 2021: second Sunday of March is the 14th
        assert!(!is_us_dst(13, 3, day_of_week(2021, 3, 13)));
        assert!(is_us_dst(14, 3, day_of_week(2021, 3, 14)));
        assert!(!is_us_dst(7, 3, day_of_week(2021, 3, 7)));
    }

    #[test]
    fn test_dst_november_end() {
        // 2015: first Sunday of November is the 1st
        assert!(!is_us_dst(1, 11, day_of_week(2015, 11, 1)));
        assert!(is_us_dst(31, 10, day_of_week(2015, 10, 31)));
        // 2014: first Sunday of November is the 2nd
        assert!(is_us_dst(1, 11, day_of_week(2014, 11, 1)));
        assert!(!is_us_dst(2, 11, day_of_week(2014, 11, 2)));
        assert!(!is_us_dst(30, 11, day_of_week(2014, 11, 30)));
    }
}
