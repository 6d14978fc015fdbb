//! Hour choices for the time selector that sits beside the calendar.

use chrono::NaiveTime;

use crate::state::TimeFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourOption {
    /// 0-23
    pub hour: u32,
    pub label: String,
}

/// `13:00` in 24 hour mode, `1:00 PM` otherwise.
pub fn format_hour(hour: u32, format: TimeFormat) -> String {
    let Some(time) = NaiveTime::from_hms_opt(hour % 24, 0, 0) else {
        return String::new();
    };

    match format {
        TimeFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        TimeFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
    }
}

pub fn hour_options(format: TimeFormat) -> Vec<HourOption> {
    (0..24)
        .map(|hour| HourOption {
            hour,
            label: format_hour(hour, format),
        })
        .collect()
}
