//! The calendar snapshot that every dispatched action replaces.
//!
//! Field names serialize the way the presentation layer reads them
//! (`focusedDayNum`, `_24hr`, ...), with dates as `YYYY-MM-DD` strings.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use tracing::debug;

use crate::dates::{get_first_day, get_last_day, is_blocked_day, start_of_month};
use crate::navigation::NavUpdate;
use crate::settings::CalendarSettings;
use crate::{Error, Result};

/// Whether the time selector shows 24 hour times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "off")]
    TwelveHour,
    #[serde(rename = "on")]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn toggled(self) -> Self {
        match self {
            Self::TwelveHour => Self::TwentyFourHour,
            Self::TwentyFourHour => Self::TwelveHour,
        }
    }

    /// The `_24hr` value: `"on"` or `"off"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwelveHour => "off",
            Self::TwentyFourHour => "on",
        }
    }
}

impl std::fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of the last action, for the live-region announcer.
///
/// These are tags, not user facing text. Anything delivered through
/// `CALENDAR_UPDATES` that isn't a known tag is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UpdateMessage {
    #[default]
    None,
    AtStartOfCalendar,
    AtEndOfCalendar,
    TimeFormatChanged(TimeFormat),
    Custom(String),
}

impl UpdateMessage {
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::AtStartOfCalendar => "at_start_of_calendar",
            Self::AtEndOfCalendar => "at_end_of_calendar",
            Self::TimeFormatChanged(TimeFormat::TwentyFourHour) => "time_24hr_on",
            Self::TimeFormatChanged(TimeFormat::TwelveHour) => "time_24hr_off",
            Self::Custom(msg) => msg,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<String> for UpdateMessage {
    fn from(msg: String) -> Self {
        match msg.as_str() {
            "" => Self::None,
            "at_start_of_calendar" => Self::AtStartOfCalendar,
            "at_end_of_calendar" => Self::AtEndOfCalendar,
            "time_24hr_on" => Self::TimeFormatChanged(TimeFormat::TwentyFourHour),
            "time_24hr_off" => Self::TimeFormatChanged(TimeFormat::TwelveHour),
            _ => Self::Custom(msg),
        }
    }
}

impl From<&str> for UpdateMessage {
    fn from(msg: &str) -> Self {
        Self::from(msg.to_owned())
    }
}

impl From<UpdateMessage> for String {
    fn from(msg: UpdateMessage) -> Self {
        match msg {
            UpdateMessage::Custom(msg) => msg,
            other => other.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for UpdateMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable snapshot of a scheduler calendar.
///
/// Fields are readable by the view. Invariants (ordered window, unique and
/// available selections, derived bounds) hold for states built by [`new`],
/// the `with_*` builders, deserialization and [`reduce`].
///
/// [`new`]: CalendarState::new
/// [`reduce`]: crate::reduce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SnapshotFields")]
pub struct CalendarState {
    /// Session day, fixed when the widget mounts.
    pub today: NaiveDate,

    /// First day that may be focused or selected (inclusive).
    pub first_available_date: NaiveDate,

    /// Last day that may be focused or selected (inclusive).
    pub last_available_date: NaiveDate,

    /// Displayed month, always held as its first day.
    pub date: NaiveDate,

    /// Chosen days, in the order they were picked. Never contains duplicates.
    pub selected: Vec<NaiveDate>,

    /// Day of month with keyboard focus (1-based).
    pub focused_day_num: i32,

    /// Derived from `date`, always 1.
    pub first_day: u32,

    /// Derived from `date`, days in the displayed month.
    pub last_day: u32,

    pub update_message: UpdateMessage,

    #[serde(rename = "_24hr")]
    pub time_format: TimeFormat,
}

impl CalendarState {
    /// Creates the mount-time state: `today`'s month is displayed and
    /// focused on `today`.
    ///
    /// Fails if the availability window is inverted.
    pub fn new(
        today: NaiveDate,
        first_available_date: NaiveDate,
        last_available_date: NaiveDate,
    ) -> Result<Self> {
        if first_available_date > last_available_date {
            return Err(Error::InvalidAvailability {
                first: first_available_date,
                last: last_available_date,
            });
        }

        let date = start_of_month(today);
        Ok(Self {
            today,
            first_available_date,
            last_available_date,
            date,
            selected: Vec::new(),
            focused_day_num: today.day() as i32,
            first_day: get_first_day(date),
            last_day: get_last_day(date),
            update_message: UpdateMessage::None,
            time_format: TimeFormat::default(),
        })
    }

    /// Window opens on `today` and stays open for `availability_days`.
    pub fn from_settings(today: NaiveDate, settings: &CalendarSettings) -> Result<Self> {
        let last = today
            .checked_add_days(Days::new(u64::from(settings.availability_days)))
            .unwrap_or(NaiveDate::MAX);

        let mut state = Self::new(today, today, last)?;
        state.time_format = settings.time_format;
        Ok(state)
    }

    /// Displays the month containing `date`.
    pub fn with_displayed_month(mut self, date: NaiveDate) -> Self {
        self.show_month(date);
        self
    }

    pub fn with_focus(mut self, focused_day_num: i32) -> Self {
        self.focused_day_num = focused_day_num;
        self
    }

    /// Replaces the selection, dropping blocked days and repeats.
    pub fn with_selected(mut self, selected: Vec<NaiveDate>) -> Self {
        self.selected.clear();
        for date in selected {
            if is_blocked_day(date, &self) || self.selected.contains(&date) {
                debug!("dropping unavailable or repeated selection {date}");
                continue;
            }
            self.selected.push(date);
        }
        self
    }

    /// Switches the displayed month, pulling focus back inside it.
    pub(crate) fn show_month(&mut self, date: NaiveDate) {
        self.date = start_of_month(date);
        self.refresh_bounds();
        self.focused_day_num = self.focused_day_num.clamp(1, self.last_day as i32);
    }

    /// Recomputes `first_day`/`last_day` from `date`.
    pub(crate) fn refresh_bounds(&mut self) {
        self.first_day = get_first_day(self.date);
        self.last_day = get_last_day(self.date);
    }

    pub(crate) fn merge(&mut self, update: NavUpdate) {
        self.update_message = update.update_message;
        if let Some(date) = update.date {
            self.show_month(date);
        }
        if let Some(focused) = update.focused_day_num {
            self.focused_day_num = focused;
        }
    }

    /// The focused day as a date in the displayed month, if the focus is valid.
    pub fn focused_date(&self) -> Option<NaiveDate> {
        let day = u32::try_from(self.focused_day_num).ok()?;
        self.date.with_day(day)
    }
}

/// Wire shape of a snapshot, checked before it becomes a `CalendarState`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotFields {
    today: NaiveDate,
    first_available_date: NaiveDate,
    last_available_date: NaiveDate,
    date: NaiveDate,
    #[serde(default)]
    selected: Vec<NaiveDate>,
    focused_day_num: i32,
    #[serde(default)]
    update_message: UpdateMessage,
    #[serde(rename = "_24hr", default)]
    time_format: TimeFormat,
}

impl TryFrom<SnapshotFields> for CalendarState {
    type Error = Error;

    fn try_from(fields: SnapshotFields) -> Result<Self> {
        let mut state = Self::new(
            fields.today,
            fields.first_available_date,
            fields.last_available_date,
        )?;

        state.date = start_of_month(fields.date);
        state.refresh_bounds();
        state.focused_day_num = fields.focused_day_num;
        state.update_message = fields.update_message;
        state.time_format = fields.time_format;

        for date in fields.selected {
            if is_blocked_day(date, &state) {
                return Err(Error::InvalidSelection {
                    date,
                    reason: "outside the availability window",
                });
            }
            if state.selected.contains(&date) {
                return Err(Error::InvalidSelection {
                    date,
                    reason: "selected twice",
                });
            }
            state.selected.push(date);
        }

        Ok(state)
    }
}
