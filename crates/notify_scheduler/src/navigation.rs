//! Arrow key navigation across the month grid.
//!
//! The reducer asks for the day `focused ± 1` or `focused ± 7`; this module
//! decides whether that lands in the displayed month or rolls the calendar
//! over to the neighbouring month, and refuses to leave the availability
//! window.

use chrono::NaiveDate;
use tracing::debug;

use crate::dates::{add_months, get_last_day, start_of_month};
use crate::state::{CalendarState, UpdateMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Day offset a key press in this direction applies to the focus.
    pub fn offset(&self) -> i32 {
        match self {
            Self::Up => -7,
            Self::Down => 7,
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Partial state produced by a navigation step.
///
/// `update_message` is always written. `date` and `focused_day_num` are only
/// present when they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavUpdate {
    pub update_message: UpdateMessage,
    pub date: Option<NaiveDate>,
    pub focused_day_num: Option<i32>,
}

impl NavUpdate {
    fn message(update_message: UpdateMessage) -> Self {
        Self {
            update_message,
            date: None,
            focused_day_num: None,
        }
    }

    fn focus(day: i32) -> Self {
        Self {
            update_message: UpdateMessage::None,
            date: None,
            focused_day_num: Some(day),
        }
    }

    fn rollover(date: NaiveDate, day: i32) -> Self {
        Self {
            update_message: UpdateMessage::None,
            date: Some(date),
            focused_day_num: Some(day),
        }
    }
}

/// Works out where focus goes when the user asks for day `day` of the
/// displayed month.
///
/// Stepping back from day 1 moves to the last day of the previous month and
/// stepping past the last day moves to day 1 of the next month, unless that
/// month lies outside the availability window. Moving `Left` never rolls
/// forward.
pub fn get_next_day(day: i32, state: &CalendarState, direction: Direction) -> NavUpdate {
    if day <= 0 {
        if state.focused_day_num != 1 {
            // land on the 1st first, the next press rolls over
            return NavUpdate::focus(1);
        }
        return previous_month(state);
    }

    if day > state.last_day as i32 && direction != Direction::Left {
        return next_month(state);
    }

    NavUpdate::focus(day)
}

fn previous_month(state: &CalendarState) -> NavUpdate {
    let earliest = start_of_month(state.first_available_date);
    match add_months(state.date, -1) {
        Some(month) if month >= earliest => {
            debug!("rolling back to {month}");
            NavUpdate::rollover(month, get_last_day(month) as i32)
        }
        _ => NavUpdate::message(UpdateMessage::AtStartOfCalendar),
    }
}

fn next_month(state: &CalendarState) -> NavUpdate {
    let latest = start_of_month(state.last_available_date);
    match add_months(state.date, 1) {
        Some(month) if month <= latest => {
            debug!("rolling forward to {month}");
            NavUpdate::rollover(month, 1)
        }
        _ => NavUpdate::message(UpdateMessage::AtEndOfCalendar),
    }
}
