//! Calendar month windows.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::error::FinancialError;

/// Inclusive instant range covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First instant of the month.
    pub start: DateTime<Utc>,
    /// Last instant of the month (23:59:59.999 local).
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    /// Builds the window for `month`/`year` as seen in `tz`.
    ///
    /// The last day is the day before the first of the following month, so
    /// 28/29/30/31-day months and leap years need no special casing.
    pub fn month(year: i32, month: u32, tz: Tz) -> Result<Self, FinancialError> {
        if !(1..=12).contains(&month) {
            return Err(FinancialError::InvalidMonth(month));
        }
        if year < 1 {
            return Err(FinancialError::InvalidYear(year));
        }

        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(FinancialError::InvalidYear(year))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(FinancialError::InvalidYear(year))?;

        let start = first_day
            .and_hms_opt(0, 0, 0)
            .ok_or(FinancialError::InvalidYear(year))?;
        let end = last_day
            .and_hms_milli_opt(23, 59, 59, 999)
            .ok_or(FinancialError::InvalidYear(year))?;

        Ok(Self {
            start: resolve_local(tz, start, false),
            end: resolve_local(tz, end, true),
        })
    }

    /// Returns true if `instant` falls inside the window (both ends inclusive).
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Maps a local wall-clock time to an instant.
///
/// Ambiguous times (DST fall-back) resolve to the earliest or latest
/// candidate; skipped times (DST spring-forward) use the offset in effect
/// at the same UTC reading.
fn resolve_local(tz: Tz, local: NaiveDateTime, latest: bool) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, last) => {
            let picked = if latest { last } else { earliest };
            picked.with_timezone(&Utc)
        }
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&local).fix();
            let shifted = local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            Utc.from_utc_datetime(&shifted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use proptest::prelude::*;
    use rstest::rstest;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_milli_opt(h, min, s, ms)
                .unwrap(),
        )
    }

    #[rstest]
    #[case(2024, 2, 29)]
    #[case(2023, 2, 28)]
    #[case(1900, 2, 28)]
    #[case(2000, 2, 29)]
    #[case(2024, 4, 30)]
    #[case(2024, 12, 31)]
    #[case(2024, 1, 31)]
    fn test_last_day_of_month(#[case] year: i32, #[case] month: u32, #[case] last: u32) {
        let window = PeriodWindow::month(year, month, Tz::UTC).unwrap();
        assert_eq!(window.start, utc(year, month, 1, 0, 0, 0, 0));
        assert_eq!(window.end, utc(year, month, last, 23, 59, 59, 999));
    }

    #[test]
    fn test_leap_february_includes_29th_and_excludes_march() {
        let window = PeriodWindow::month(2024, 2, Tz::UTC).unwrap();
        assert!(window.contains(utc(2024, 2, 29, 23, 59, 59, 999)));
        assert!(!window.contains(utc(2024, 3, 1, 0, 0, 0, 0)));
        assert!(!window.contains(utc(2024, 1, 31, 23, 59, 59, 999)));
    }

    #[test]
    fn test_non_leap_february_ends_on_28th() {
        let window = PeriodWindow::month(2023, 2, Tz::UTC).unwrap();
        assert_eq!(window.end.day(), 28);
        assert!(!window.contains(utc(2023, 3, 1, 0, 0, 0, 0)));
    }

    #[test]
    fn test_window_in_configured_timezone() {
        // Sao Paulo has no DST since 2019 and sits at UTC-3.
        let window = PeriodWindow::month(2024, 3, chrono_tz::America::Sao_Paulo).unwrap();
        assert_eq!(window.start, utc(2024, 3, 1, 3, 0, 0, 0));
        assert_eq!(window.end, utc(2024, 4, 1, 2, 59, 59, 999));
    }

    #[test]
    fn test_resolve_local_skipped_time() {
        // Sao Paulo skipped 2018-11-04 00:00 local (clocks jumped to 01:00).
        let local = NaiveDate::from_ymd_opt(2018, 11, 4)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let resolved = resolve_local(chrono_tz::America::Sao_Paulo, local, false);
        assert_eq!(resolved, utc(2018, 11, 4, 3, 0, 0, 0));
    }

    #[test]
    fn test_resolve_local_repeated_time() {
        // 2019-02-16 23:30 happened twice in Sao Paulo (-02 then -03).
        let local = NaiveDate::from_ymd_opt(2019, 2, 16)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let tz = chrono_tz::America::Sao_Paulo;
        assert_eq!(resolve_local(tz, local, false), utc(2019, 2, 17, 1, 30, 0, 0));
        assert_eq!(resolve_local(tz, local, true), utc(2019, 2, 17, 2, 30, 0, 0));
    }

    #[rstest]
    #[case(0)]
    #[case(13)]
    fn test_invalid_month(#[case] month: u32) {
        assert!(matches!(
            PeriodWindow::month(2024, month, Tz::UTC),
            Err(FinancialError::InvalidMonth(m)) if m == month
        ));
    }

    #[rstest]
    #[case(0)]
    #[case(-5)]
    #[case(i32::MAX)]
    fn test_invalid_year(#[case] year: i32) {
        assert!(matches!(
            PeriodWindow::month(year, 1, Tz::UTC),
            Err(FinancialError::InvalidYear(_))
        ));
    }

    proptest! {
        /// Consecutive months tile the timeline with exactly one millisecond between them.
        #[test]
        fn test_consecutive_windows_are_adjacent(year in 1i32..9000, month in 1u32..=12) {
            let window = PeriodWindow::month(year, month, Tz::UTC).unwrap();
            let (ny, nm) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
            let next = PeriodWindow::month(ny, nm, Tz::UTC).unwrap();

            prop_assert_eq!(next.start - window.end, TimeDelta::milliseconds(1));
            prop_assert_eq!(window.end.month(), month);
            prop_assert_eq!(window.end.hour(), 23);
            prop_assert!(window.start < window.end);
        }
    }
}
