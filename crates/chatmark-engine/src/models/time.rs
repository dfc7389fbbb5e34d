use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A validated wall-clock time of day, rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Result<Self, ModelError> {
        if hour > 23 || minute > 59 {
            return Err(ModelError::InvalidTime {
                value: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = ModelError;

    /// Accepts exactly `HH:MM` with hours `00`-`23` and minutes `00`-`59`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
        let time_regex = TIME_REGEX.get_or_init(|| {
            Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").expect("Invalid time regex")
        });

        let invalid = || ModelError::InvalidTime {
            value: s.to_string(),
        };
        let caps = time_regex.captures(s).ok_or_else(invalid)?;
        let hour = caps[1].parse().map_err(|_| invalid())?;
        let minute = caps[2].parse().map_err(|_| invalid())?;
        Ok(Self { hour, minute })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
