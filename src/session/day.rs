// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Day index derivation.
//!
//! The day index is the only seed of a session, so it depends on the
//! calendar date alone (UTC).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days subtracted from the Unix day count
pub const DAY_OFFSET: i64 = 20_000;

/// Lowest day index with a representable date
pub const MIN_DAY: i64 = -100_000_000;

/// Highest day index with a representable date
pub const MAX_DAY: i64 = 100_000_000;

/// Whole seconds since the epoch, floored for times before it
fn epoch_seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs() as i64,
        Err(e) => {
            let before = e.duration();
            -(before.as_secs() as i64) - i64::from(before.subsec_nanos() > 0)
        }
    }
}

/// `floor(epoch_seconds / 86400) - 20000`
pub fn day_index(time: SystemTime) -> i64 {
    epoch_seconds(time).div_euclid(SECONDS_PER_DAY) - DAY_OFFSET
}

/// Day index of the current date
pub fn today() -> i64 {
    day_index(SystemTime::now())
}

/// UTC midnight starting the given day.
///
/// Panics when `day` is outside [`MIN_DAY`]..=[`MAX_DAY`].
pub fn date_for_day(day: i64) -> SystemTime {
    assert!(
        (MIN_DAY..=MAX_DAY).contains(&day),
        "day index {} out of range",
        day
    );
    let seconds = (day + DAY_OFFSET) * SECONDS_PER_DAY;
    if seconds >= 0 {
        UNIX_EPOCH + Duration::from_secs(seconds as u64)
    } else {
        UNIX_EPOCH - Duration::from_secs(seconds.unsigned_abs())
    }
}

/// Proleptic Gregorian (year, month, day) of a day index, in UTC
pub fn calendar_date(day: i64) -> (i64, u32, u32) {
    let days = i128::from(day) + i128::from(DAY_OFFSET) + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day_of_month = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let month = month as u32;
    let year = year_of_era + era * 400 + i128::from(month <= 2);
    (year as i64, month, day_of_month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_negative_offset() {
        assert_eq!(day_index(UNIX_EPOCH), -DAY_OFFSET);
    }

    #[test]
    fn test_day_boundaries() {
        let midnight = date_for_day(745);
        assert_eq!(day_index(midnight), 745);
        assert_eq!(day_index(midnight + Duration::from_secs(86_399)), 745);
        assert_eq!(day_index(midnight + Duration::from_secs(86_400)), 746);
        assert_eq!(day_index(midnight - Duration::from_millis(1)), 744);
    }

    #[test]
    fn test_before_epoch_floors() {
        assert_eq!(day_index(UNIX_EPOCH - Duration::from_millis(1)), -DAY_OFFSET - 1);
        assert_eq!(day_index(date_for_day(-DAY_OFFSET - 3)), -DAY_OFFSET - 3);
    }

    #[test]
    fn test_known_date() {
        // 2026-10-19T12:00:00Z
        let noon = UNIX_EPOCH + Duration::from_secs(1_792_411_200);
        assert_eq!(day_index(noon), 745);
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(calendar_date(745), (2026, 10, 19));
        assert_eq!(calendar_date(-DAY_OFFSET), (1970, 1, 1));
        assert_eq!(calendar_date(-DAY_OFFSET - 1), (1969, 12, 31));
        // 2024-02-29 is epoch day 19782
        assert_eq!(calendar_date(19_782 - DAY_OFFSET), (2024, 2, 29));
    }

    #[test]
    fn test_extreme_days() {
        assert_eq!(day_index(date_for_day(MAX_DAY)), MAX_DAY);
        assert_eq!(day_index(date_for_day(MIN_DAY)), MIN_DAY);

        let (year, month, _) = calendar_date(i64::MAX);
        assert!(year > 1_000_000_000);
        assert!((1..=12).contains(&month));
        let (year, _, _) = calendar_date(i64::MIN);
        assert!(year < -1_000_000_000);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_date_for_day_rejects_overflow() {
        date_for_day(i64::MAX);
    }
}
