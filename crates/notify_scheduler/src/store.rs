//! Per-widget state and dispatch.
//!
//! Every calendar on a page owns one `CalendarStore`. Readers hold on to
//! `Arc<CalendarState>` snapshots; a dispatch always swaps in a fresh `Arc`,
//! so `Arc::ptr_eq` tells a renderer whether anything was dispatched since
//! it last looked.

use std::sync::Arc;

use chrono::{Local, NaiveDate, Weekday};

use crate::action::{Action, TaggedAction};
use crate::clock::{hour_options, HourOption};
use crate::dates::{classify_day, get_dates, DayCell};
use crate::reducer::reduce;
use crate::settings::CalendarSettings;
use crate::state::CalendarState;
use crate::Result;

pub struct CalendarStore {
    state: Arc<CalendarState>,
    week_start: Weekday,
}

impl CalendarStore {
    pub fn new(state: CalendarState, week_start: Weekday) -> Self {
        Self {
            state: Arc::new(state),
            week_start,
        }
    }

    /// Mounts a calendar for `today` using `settings`.
    pub fn with_settings(today: NaiveDate, settings: &CalendarSettings) -> Result<Self> {
        let state = CalendarState::from_settings(today, settings)?;
        Ok(Self::new(state, settings.week_start.weekday()))
    }

    /// Mounts a calendar for the local current day.
    pub fn mount(settings: &CalendarSettings) -> Result<Self> {
        Self::with_settings(Local::now().date_naive(), settings)
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn snapshot(&self) -> Arc<CalendarState> {
        self.state.clone()
    }

    pub fn dispatch(&mut self, action: Action) -> Arc<CalendarState> {
        self.state = Arc::new(reduce(&self.state, action));
        self.state.clone()
    }

    /// Decodes a `{type, payload}` record and dispatches it.
    ///
    /// A malformed payload leaves the store untouched.
    pub fn dispatch_tagged(&mut self, tagged: TaggedAction) -> Result<Arc<CalendarState>> {
        let action = Action::try_from(tagged)?;
        Ok(self.dispatch(action))
    }

    /// The displayed month as rows of classified days.
    pub fn grid(&self) -> Vec<[DayCell; 7]> {
        get_dates(self.state.date, self.week_start)
            .into_iter()
            .map(|week| week.map(|day| classify_day(day, &self.state)))
            .collect()
    }

    pub fn hour_options(&self) -> Vec<HourOption> {
        hour_options(self.state.time_format)
    }
}
