//! Drives a calendar store through key sequences the way the presentation
//! layer would, checking focus and month changes end to end.

use chrono::NaiveDate;
use notify_scheduler::dates::get_last_day;
use notify_scheduler::{
    Action, CalendarSettings, CalendarState, CalendarStore, TaggedAction, UpdateMessage,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("notify_scheduler=debug".parse().unwrap()),
            )
            .with_test_writer()
            .init();
    });
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Mounted on 2020-01-14 with the default 60 day window (through 2020-03-14).
fn store() -> CalendarStore {
    init_tracing();
    CalendarStore::with_settings(ymd(2020, 1, 14), &CalendarSettings::default()).unwrap()
}

fn press(store: &mut CalendarStore, action: Action, times: usize) {
    for _ in 0..times {
        store.dispatch(action.clone());
    }
}

fn assert_settled(state: &CalendarState) {
    assert_eq!(state.first_day, 1);
    assert_eq!(state.last_day, get_last_day(state.date));
    assert!(
        (1..=state.last_day as i32).contains(&state.focused_day_num),
        "focus {} outside {}",
        state.focused_day_num,
        state.date
    );
}

#[test]
fn walk_right_into_february() {
    let mut store = store();

    // 14 -> 31 is 17 presses, one more crosses the month
    press(&mut store, Action::KeyRight, 18);

    let state = store.state();
    assert_eq!(state.date, ymd(2020, 2, 1));
    assert_eq!(state.focused_day_num, 1);
    assert!(state.update_message.is_none());
}

#[test]
fn walk_down_stops_at_end_of_window() {
    let mut store = store();

    press(&mut store, Action::KeyDown, 20);

    let state = store.state();
    assert_eq!(state.date, ymd(2020, 3, 1));
    assert_eq!(state.update_message, UpdateMessage::AtEndOfCalendar);
    assert_settled(state);
}

#[test]
fn walk_up_stops_at_start_of_window() {
    let mut store = store();

    // 14 -> 7 -> first press below day one lands on the 1st
    press(&mut store, Action::KeyUp, 2);
    assert_eq!(store.state().focused_day_num, 1);

    store.dispatch(Action::KeyUp);
    let state = store.state();
    assert_eq!(state.update_message, UpdateMessage::AtStartOfCalendar);
    assert_eq!(state.date, ymd(2020, 1, 1));
    assert_eq!(state.focused_day_num, 1);
}

#[test]
fn round_trip_across_leap_february() {
    let mut store = store();

    press(&mut store, Action::KeyDown, 3);
    assert_eq!(store.state().date, ymd(2020, 2, 1));
    assert_eq!(store.state().focused_day_num, 1);

    store.dispatch(Action::KeyLeft);
    assert_eq!(store.state().date, ymd(2020, 1, 1));
    assert_eq!(store.state().focused_day_num, 31);

    store.dispatch(Action::SelectNext);
    assert_eq!(store.state().date, ymd(2020, 2, 1));
    assert_eq!(store.state().focused_day_num, 29);

    store.dispatch(Action::SelectNext);
    store.dispatch(Action::KeyLeft);
    assert_eq!(store.state().date, ymd(2020, 3, 1));
    assert_eq!(store.state().focused_day_num, 28);
}

#[test]
fn focus_stays_settled_under_any_key_sequence() {
    let mut store = store();
    let keys = [
        Action::KeyUp,
        Action::KeyRight,
        Action::KeyDown,
        Action::KeyDown,
        Action::KeyLeft,
        Action::SelectNext,
        Action::KeyDown,
        Action::KeyUp,
        Action::SelectPrevious,
        Action::KeyLeft,
    ];

    for step in 0..200 {
        let action = keys[(step * 7 + step / 3) % keys.len()].clone();
        store.dispatch(action);
        assert_settled(store.state());
    }
}

#[test]
fn selecting_a_spillover_cell_follows_it() {
    let mut store = store();
    store.dispatch(Action::SelectNext);

    // February 2020 starts on a Saturday, so the first row opens in January
    let cell = store.grid()[0][5];
    assert_eq!(cell.date, ymd(2020, 1, 31));
    assert!(!cell.in_month && !cell.blocked);

    let state = store.dispatch(Action::select(cell.date));
    assert_settled(&state);
    assert_eq!(state.date, ymd(2020, 1, 1));
    assert_eq!(state.focused_day_num, 31);
    assert_eq!(state.selected, vec![ymd(2020, 1, 31)]);
}

#[test]
fn extreme_focus_from_tagged_actions_does_not_panic() {
    let mut store = store();

    store
        .dispatch_tagged(
            TaggedAction::new("FOCUS_DAY").with_payload(json!({"focused": i32::MAX})),
        )
        .unwrap();
    let state = store.dispatch(Action::KeyDown);
    assert_settled(&state);
    assert_eq!(state.date, ymd(2020, 2, 1));

    store.dispatch(Action::FocusDay(i32::MIN));
    let state = store.dispatch(Action::KeyUp);
    assert_settled(&state);
    assert_eq!(state.focused_day_num, 1);
}

#[test]
fn multi_select_through_tagged_actions() {
    let mut store = store();

    for day in ["2020-01-20", "2020-01-22", "2020-01-20"] {
        store
            .dispatch_tagged(
                TaggedAction::new("SELECT_DATE").with_payload(json!({"date": day, "multi": true})),
            )
            .unwrap();
    }

    let state = store.state();
    assert_eq!(state.selected, vec![ymd(2020, 1, 22)]);
    assert_eq!(state.focused_day_num, 20);
}

#[test]
fn past_day_cannot_be_selected() {
    let mut store = store();
    store.dispatch(Action::select(ymd(2020, 1, 15)));

    let state = store.dispatch(Action::select_multi(ymd(2020, 1, 13)));
    assert_eq!(state.selected, vec![ymd(2020, 1, 15)]);
    assert_eq!(state.focused_day_num, 15);
}

#[test]
fn snapshot_serializes_for_the_view() {
    let mut store = store();
    store.dispatch(Action::select(ymd(2020, 1, 15)));
    let state = store.dispatch(Action::AmPm);

    let json = serde_json::to_value(&*state).unwrap();
    assert_eq!(
        json,
        json!({
            "today": "2020-01-14",
            "firstAvailableDate": "2020-01-14",
            "lastAvailableDate": "2020-03-14",
            "date": "2020-01-01",
            "selected": ["2020-01-15"],
            "focusedDayNum": 15,
            "firstDay": 1,
            "lastDay": 31,
            "updateMessage": "time_24hr_on",
            "_24hr": "on"
        })
    );

    let back: CalendarState = serde_json::from_value(json).unwrap();
    assert_eq!(back, *state);
}
