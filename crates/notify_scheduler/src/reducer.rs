use chrono::Datelike;
use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::dates::{add_months, is_blocked_day, start_of_month};
use crate::navigation::{get_next_day, Direction};
use crate::selection::set_selected;
use crate::state::{CalendarState, UpdateMessage};

/// Applies `action` to `state`, producing the next snapshot.
///
/// Never fails: rejected selections and unknown actions produce a copy with
/// the same values. `first_day`/`last_day` are refreshed on every call.
pub fn reduce(state: &CalendarState, action: Action) -> CalendarState {
    trace!(
        "reducing {}",
        action.tag().map_or("unknown action", |tag| tag.as_str())
    );

    let mut next = state.clone();

    match action {
        Action::AmPm => {
            next.time_format = state.time_format.toggled();
            next.update_message = UpdateMessage::TimeFormatChanged(next.time_format);
        }

        Action::CalendarUpdates(msg) => next.update_message = msg,

        Action::SelectDate { date, multi } => {
            if is_blocked_day(date, state) {
                debug!("ignoring selection of blocked day {date}");
            } else {
                next.selected = set_selected(&state.selected, date, multi);
                if start_of_month(date) != next.date {
                    // spillover cell from a neighbouring month
                    next.show_month(date);
                }
                next.focused_day_num = date.day() as i32;
            }
        }

        Action::SelectNext => step_month(&mut next, 1),
        Action::SelectPrevious => step_month(&mut next, -1),

        Action::FocusDay(focused) => next.focused_day_num = focused,

        Action::KeyUp => key(&mut next, state, Direction::Up),
        Action::KeyDown => key(&mut next, state, Direction::Down),
        Action::KeyRight => key(&mut next, state, Direction::Right),
        Action::KeyLeft => key(&mut next, state, Direction::Left),

        Action::Unknown(tag) => debug!("ignoring unknown action '{tag}'"),
    }

    next.refresh_bounds();
    next
}

fn key(next: &mut CalendarState, state: &CalendarState, direction: Direction) {
    let day = state.focused_day_num.saturating_add(direction.offset());
    next.merge(get_next_day(day, state, direction));
}

fn step_month(next: &mut CalendarState, months: i32) {
    match add_months(next.date, months) {
        Some(month) => next.show_month(month),
        None => warn!("cannot move {months} months from {}", next.date),
    }
}
