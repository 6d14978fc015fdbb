//! Date selection state machine for the message scheduler calendar.
//!
//! The presentation layer dispatches [`Action`]s into a [`CalendarStore`]
//! and redraws from the [`CalendarState`] snapshot it gets back. All date
//! logic lives here; nothing in this crate knows about the DOM or rendering.
//!
//! ```ignore
//! use notify_scheduler::{Action, CalendarSettings, CalendarStore};
//!
//! let mut store = CalendarStore::mount(&CalendarSettings::default())?;
//! let state = store.dispatch(Action::KeyDown);
//! println!("focus on day {}", state.focused_day_num);
//! ```

pub mod action;
pub mod clock;
pub mod dates;
mod error;
pub mod navigation;
pub mod reducer;
pub mod selection;
pub mod settings;
pub mod state;
pub mod store;

pub use action::{Action, ActionTag, TaggedAction};
pub use dates::DayCell;
pub use error::{Error, Result};
pub use navigation::{get_next_day, Direction, NavUpdate};
pub use reducer::reduce;
pub use settings::{CalendarSettings, WeekStart};
pub use state::{CalendarState, TimeFormat, UpdateMessage};
pub use store::CalendarStore;
