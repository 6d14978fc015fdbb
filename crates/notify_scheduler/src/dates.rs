//! Date and range helpers for the scheduler calendar.
//!
//! Everything here works on local calendar days (`NaiveDate`); there is no
//! timezone arithmetic.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::state::CalendarState;
use crate::{Error, Result};

const YEAR_MONTH_DAY: &str = "%Y-%m-%d";

/// True if `day` may not be focused or selected: it is in the past or
/// outside the availability window.
pub fn is_blocked_day(day: NaiveDate, state: &CalendarState) -> bool {
    day < state.today || day < state.first_available_date || day > state.last_available_date
}

/// Long form used for screen readers, e.g. `Wednesday January 01 2020`.
pub fn formatted_day(day: NaiveDate) -> String {
    day.format("%A %B %d %Y").to_string()
}

/// Canonical `YYYY-MM-DD` key.
pub fn year_month_day(day: NaiveDate) -> String {
    day.format(YEAR_MONTH_DAY).to_string()
}

pub fn parse_year_month_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), YEAR_MONTH_DAY).map_err(|source| Error::InvalidDate {
        input: input.to_owned(),
        source,
    })
}

pub fn get_first_day(_date: NaiveDate) -> u32 {
    1
}

/// Number of days in `date`'s month.
pub fn get_last_day(date: NaiveDate) -> u32 {
    match start_of_month(date).checked_add_months(Months::new(1)) {
        Some(next_month) => (next_month - Days::new(1)).day(),
        // only December of chrono's last representable year gets here
        None => 31,
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// First day of the month `months` away from `date`'s month.
///
/// `None` when the result falls outside chrono's date range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let start = start_of_month(date);
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        start.checked_add_months(delta)
    } else {
        start.checked_sub_months(delta)
    }
}

/// Builds the month grid for `date`: whole weeks beginning on `week_start`,
/// including the spillover days from the neighbouring months.
pub fn get_dates(date: NaiveDate, week_start: Weekday) -> Vec<[NaiveDate; 7]> {
    let first = start_of_month(date);
    let last = first + Days::new(u64::from(get_last_day(first) - 1));

    let grid_start = first.week(week_start).first_day();
    let grid_end = last.week(week_start).last_day();

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = grid_start;
    while cursor <= grid_end {
        let row_start = cursor;
        weeks.push(std::array::from_fn(|col| row_start + Days::new(col as u64)));
        cursor = row_start + Days::new(7);
    }

    weeks
}

/// Everything the grid needs to draw a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for spillover days from the previous/next month.
    pub in_month: bool,
    pub blocked: bool,
    pub selected: bool,
    pub today: bool,
    pub focused: bool,
}

pub fn classify_day(day: NaiveDate, state: &CalendarState) -> DayCell {
    let in_month = day.year() == state.date.year() && day.month() == state.date.month();

    DayCell {
        date: day,
        in_month,
        blocked: is_blocked_day(day, state),
        selected: state.selected.contains(&day),
        today: day == state.today,
        focused: in_month && state.focused_date() == Some(day),
    }
}
