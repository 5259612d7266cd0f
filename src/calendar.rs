//! Gregorian calendar rules and a rule based holiday calendar.
//!
//! Holidays are described with [`Holiday`] rules and expanded for a range of
//! years into a [`HolidayCalendar`], which answers the single question the
//! grid layout asks: is this date a holiday?

use crate::error::CalendarError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// First column of every week row.
pub const WEEK_START: Weekday = Weekday::Mon;

/// Specifies the nth week of a month
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum NthWeek {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

/// Rules describing the days that are public holidays
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Holiday {
    /// Every occurrence of a weekday, e.g. `Sun`.
    WeekDay(Weekday),
    /// The same date every year. `first` and `last` are the first and last year
    /// this day is a holiday (inclusively).
    YearlyDay {
        month: u32,
        day: u32,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// A single holiday which is valid only once in time.
    SingularDay(NaiveDate),
    /// A holiday that is defined in relative days (e.g. -2 for Good Friday) to Easter (Sunday).
    EasterOffset {
        offset: i32,
        first: Option<i32>,
        last: Option<i32>,
    },
    /// A holiday that falls on the nth (or last) weekday of a specific month, e.g. the first Monday in May.
    /// `first` and `last` are the first and last year this day is a holiday (inclusively).
    MonthWeekday {
        month: u32,
        weekday: Weekday,
        nth: NthWeek,
        first: Option<i32>,
        last: Option<i32>,
    },
}

/// Answers whether a date is a holiday.
///
/// The grid layout only ever needs this predicate, so any locale can be
/// plugged in without touching the layout.
pub trait HolidaySource {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidaySource for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// A holiday source without any holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidaySource for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// Calendar for arbitrary complex holiday rules
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    holidays: BTreeSet<NaiveDate>,
    weekdays: Vec<Weekday>,
}

impl HolidayCalendar {
    /// Calculate all holidays for a given range of years from `start` to `end`
    /// (inclusively). The calculation is performed on the basis of a slice of
    /// holiday rules.
    ///
    /// Yearly dates that do not exist in a given year (February 29 outside leap
    /// years) are skipped for that year.
    pub fn calc_calendar(
        holiday_rules: &[Holiday],
        start: i32,
        end: i32,
    ) -> Result<HolidayCalendar, CalendarError> {
        let mut holidays = BTreeSet::new();
        let mut weekdays = Vec::new();

        for rule in holiday_rules {
            match rule {
                Holiday::SingularDay(date) => {
                    let year = date.year();
                    if year >= start && year <= end {
                        holidays.insert(*date);
                    }
                }
                Holiday::WeekDay(weekday) => {
                    if !weekdays.contains(weekday) {
                        weekdays.push(*weekday);
                    }
                }
                Holiday::YearlyDay {
                    month,
                    day,
                    first,
                    last,
                } => {
                    check_month(*month)?;
                    let (first, last) = Self::calc_first_and_last(start, end, first, last);
                    for year in first..last + 1 {
                        if let Some(date) = NaiveDate::from_ymd_opt(year, *month, *day) {
                            holidays.insert(date);
                        }
                    }
                }
                Holiday::EasterOffset {
                    offset,
                    first,
                    last,
                } => {
                    let (first, last) = Self::calc_first_and_last(start, end, first, last);
                    for year in first..last + 1 {
                        let easter = easter_sunday(year)?;
                        let date = easter
                            .checked_add_signed(Duration::days(*offset as i64))
                            .ok_or(CalendarError::InvalidYear { year })?;
                        holidays.insert(date);
                    }
                }
                Holiday::MonthWeekday {
                    month,
                    weekday,
                    nth,
                    first,
                    last,
                } => {
                    let (first, last) = Self::calc_first_and_last(start, end, first, last);
                    for year in first..last + 1 {
                        holidays.insert(nth_weekday_of_month(year, *month, *weekday, nth)?);
                    }
                }
            }
        }
        Ok(HolidayCalendar { holidays, weekdays })
    }

    fn calc_first_and_last(
        start: i32,
        end: i32,
        first: &Option<i32>,
        last: &Option<i32>,
    ) -> (i32, i32) {
        let first = match first {
            Some(year) => std::cmp::max(start, *year),
            _ => start,
        };
        let last = match last {
            Some(year) => std::cmp::min(end, *year),
            _ => end,
        };
        (first, last)
    }

    /// Returns true if the date falls on one of the weekday rules
    pub fn is_holiday_weekday(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
    }

    /// Returns true if the specified day is a holiday, by date or by weekday
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date) || self.is_holiday_weekday(date)
    }

    /// Dated holidays in ascending order; weekday rules are not expanded.
    pub fn holidays(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.iter().copied()
    }

    /// Every holiday of `year`, weekday rules included, in ascending order.
    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<NaiveDate>, CalendarError> {
        let mut date = from_ymd(year, 1, 1)?;
        let end = from_ymd(year, 12, 31)?;
        let mut found = Vec::new();
        while date <= end {
            if self.is_holiday(date) {
                found.push(date);
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        Ok(found)
    }
}

impl HolidaySource for HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        HolidayCalendar::is_holiday(self, date)
    }
}

/// Build a date, reporting the year as invalid when chrono cannot represent it.
pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidYear { year })
}

fn check_month(month: u32) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Years `computus` accepts.
const COMPUTUS_YEARS: std::ops::RangeInclusive<i32> = 1583..=9999;

/// Western Easter Sunday of `year`.
///
/// Years outside the range `computus` handles use the anonymous Gregorian
/// algorithm on the proleptic calendar.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    if !COMPUTUS_YEARS.contains(&year) {
        let (month, day) = anonymous_gregorian_easter(year);
        return from_ymd(year, month, day);
    }
    let easter = computus::gregorian(year).map_err(|e| CalendarError::Easter {
        year,
        reason: e.to_string(),
    })?;
    from_ymd(easter.year, easter.month, easter.day)
}

/// Meeus/Jones/Butcher, with euclidean division so negative years work.
fn anonymous_gregorian_easter(year: i32) -> (u32, u32) {
    let y = i64::from(year);
    let a = y.rem_euclid(19);
    let (b, c) = (y.div_euclid(100), y.rem_euclid(100));
    let (d, e) = (b.div_euclid(4), b.rem_euclid(4));
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let (i, k) = (c / 4, c % 4);
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Returns true if the specified year is a Gregorian leap year
pub fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Number of days in a given month of a given year
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let days = match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    };
    // rejects bad months and years chrono cannot represent
    from_ymd(year, month, days)?;
    Ok(days)
}

/// Column of `date` in a week row, 0 being [`WEEK_START`].
pub fn weekday_index(date: NaiveDate) -> usize {
    let day = date.weekday().num_days_from_monday();
    let start = WEEK_START.num_days_from_monday();
    ((day + 7 - start) % 7) as usize
}

/// Number of week rows a standalone month calendar needs, counting the
/// leading blank days of its first week.
pub fn weeks_in_month(year: i32, month: u32) -> Result<usize, CalendarError> {
    let leading = weekday_index(from_ymd(year, month, 1)?);
    let days = days_in_month(year, month)? as usize;
    Ok((leading + days + 6) / 7)
}

fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    nth: &NthWeek,
) -> Result<NaiveDate, CalendarError> {
    let day = match nth {
        NthWeek::First => 1,
        NthWeek::Second => 8,
        NthWeek::Third => 15,
        NthWeek::Fourth => 22,
        NthWeek::Last => days_in_month(year, month)?,
    };
    let mut date = from_ymd(year, month, day)?;
    while date.weekday() != weekday {
        let next = match nth {
            NthWeek::Last => date.pred_opt(),
            _ => date.succ_opt(),
        };
        date = next.ok_or(CalendarError::InvalidYear { year })?;
    }
    Ok(date)
}
