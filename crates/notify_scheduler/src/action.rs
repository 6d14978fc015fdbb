//! Actions understood by the calendar reducer.
//!
//! The presentation layer speaks in tagged records (`{"type": "KEY_UP"}`);
//! those are decoded once at the edge into the closed [`Action`] enum.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::dates::parse_year_month_day;
use crate::state::UpdateMessage;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip between 12 and 24 hour time.
    AmPm,
    /// Replace the announcer message.
    CalendarUpdates(UpdateMessage),
    SelectDate {
        date: NaiveDate,
        multi: bool,
    },
    /// Show the next month.
    SelectNext,
    /// Show the previous month.
    SelectPrevious,
    /// Move focus to a day of the displayed month. Not range checked.
    FocusDay(i32),
    KeyUp,
    KeyDown,
    KeyRight,
    KeyLeft,
    /// A tag this build doesn't know about; reduces to a no-op.
    Unknown(String),
}

impl Action {
    pub fn select(date: NaiveDate) -> Self {
        Self::SelectDate { date, multi: false }
    }

    pub fn select_multi(date: NaiveDate) -> Self {
        Self::SelectDate { date, multi: true }
    }

    pub fn tag(&self) -> Option<ActionTag> {
        Some(match self {
            Self::AmPm => ActionTag::AmPm,
            Self::CalendarUpdates(_) => ActionTag::CalendarUpdates,
            Self::SelectDate { .. } => ActionTag::SelectDate,
            Self::SelectNext => ActionTag::SelectNext,
            Self::SelectPrevious => ActionTag::SelectPrevious,
            Self::FocusDay(_) => ActionTag::FocusDay,
            Self::KeyUp => ActionTag::KeyUp,
            Self::KeyDown => ActionTag::KeyDown,
            Self::KeyRight => ActionTag::KeyRight,
            Self::KeyLeft => ActionTag::KeyLeft,
            Self::Unknown(_) => return None,
        })
    }
}

/// Wire names of the actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ActionTag {
    AmPm,
    CalendarUpdates,
    SelectDate,
    SelectNext,
    SelectPrevious,
    FocusDay,
    KeyUp,
    KeyDown,
    KeyRight,
    KeyLeft,
}

impl ActionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmPm => "AM_PM",
            Self::CalendarUpdates => "CALENDAR_UPDATES",
            Self::SelectDate => "SELECT_DATE",
            Self::SelectNext => "SELECT_NEXT",
            Self::SelectPrevious => "SELECT_PREVIOUS",
            Self::FocusDay => "FOCUS_DAY",
            Self::KeyUp => "KEY_UP",
            Self::KeyDown => "KEY_DOWN",
            Self::KeyRight => "KEY_RIGHT",
            Self::KeyLeft => "KEY_LEFT",
        }
    }
}

impl std::fmt::Display for ActionTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for parsing an action tag from string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseActionTagError;

impl std::fmt::Display for ParseActionTagError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown action tag")
    }
}

impl std::error::Error for ParseActionTagError {}

impl FromStr for ActionTag {
    type Err = ParseActionTagError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|tag| tag.as_str() == s)
            .ok_or(ParseActionTagError)
    }
}

/// The `{type, payload}` record dispatched by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedAction {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl TaggedAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// `SELECT_DATE` accepts a bare date or `{date, multi}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SelectDatePayload {
    Date(String),
    Record {
        date: String,
        #[serde(default)]
        multi: bool,
    },
}

#[derive(Deserialize)]
struct FocusDayPayload {
    focused: i32,
}

fn required_payload<T: DeserializeOwned>(
    tag: ActionTag,
    payload: Option<serde_json::Value>,
) -> Result<T> {
    let payload = payload.ok_or_else(|| Error::invalid_payload(tag.as_str(), "missing payload"))?;
    serde_json::from_value(payload)
        .map_err(|err| Error::invalid_payload(tag.as_str(), err.to_string()))
}

impl TryFrom<TaggedAction> for Action {
    type Error = Error;

    fn try_from(tagged: TaggedAction) -> Result<Self> {
        let Ok(tag) = tagged.kind.parse::<ActionTag>() else {
            return Ok(Action::Unknown(tagged.kind));
        };

        Ok(match tag {
            ActionTag::AmPm => Action::AmPm,
            ActionTag::CalendarUpdates => {
                let msg: String = required_payload(tag, tagged.payload)?;
                Action::CalendarUpdates(msg.into())
            }
            ActionTag::SelectDate => {
                let (date, multi) = match required_payload(tag, tagged.payload)? {
                    SelectDatePayload::Date(date) => (date, false),
                    SelectDatePayload::Record { date, multi } => (date, multi),
                };
                Action::SelectDate {
                    date: parse_year_month_day(&date)?,
                    multi,
                }
            }
            ActionTag::SelectNext => Action::SelectNext,
            ActionTag::SelectPrevious => Action::SelectPrevious,
            ActionTag::FocusDay => {
                let payload: FocusDayPayload = required_payload(tag, tagged.payload)?;
                Action::FocusDay(payload.focused)
            }
            ActionTag::KeyUp => Action::KeyUp,
            ActionTag::KeyDown => Action::KeyDown,
            ActionTag::KeyRight => Action::KeyRight,
            ActionTag::KeyLeft => Action::KeyLeft,
        })
    }
}
