use std::io::ErrorKind;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::state::TimeFormat;
use crate::Result;

const DEFAULT_AVAILABILITY_DAYS: u32 = 60;

/// First column of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarSettings {
    #[serde(default)]
    pub week_start: WeekStart,

    /// How many days after today may still be scheduled.
    #[serde(default = "default_availability_days")]
    pub availability_days: u32,

    /// Initial `_24hr` mode.
    #[serde(default)]
    pub time_format: TimeFormat,
}

fn default_availability_days() -> u32 {
    DEFAULT_AVAILABILITY_DAYS
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            availability_days: default_availability_days(),
            time_format: TimeFormat::default(),
        }
    }
}

impl CalendarSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from `path`, falling back to defaults when the file
    /// doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let settings = Self::from_json(&contents)?;
                debug!("loaded calendar settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "{} not found, using default calendar settings",
                    path.display()
                );
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!("saved calendar settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(
            CalendarSettings::from_json("{}").unwrap(),
            CalendarSettings::default()
        );
    }

    #[test]
    fn test_partial_settings() {
        let settings =
            CalendarSettings::from_json(r#"{"week_start": "monday", "time_format": "on"}"#)
                .unwrap();

        assert_eq!(settings.week_start.weekday(), Weekday::Mon);
        assert_eq!(settings.time_format, TimeFormat::TwentyFourHour);
        assert_eq!(settings.availability_days, DEFAULT_AVAILABILITY_DAYS);
    }

    #[test]
    fn test_malformed_settings_rejected() {
        assert!(CalendarSettings::from_json(r#"{"week_start": "friday"}"#).is_err());
        assert!(CalendarSettings::from_json("not json").is_err());
    }
}
