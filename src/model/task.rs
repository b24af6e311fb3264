use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task priority tier. The document accepts any casing of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Canonical label, as stored in the task document
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a priority label, ignoring case and surrounding whitespace
    pub fn parse_label(s: &str) -> Option<Priority> {
        let s = s.trim();
        Priority::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
    }

    /// Next priority in High → Medium → Low → High order
    pub fn next(self) -> Priority {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    /// Previous priority (reverse of `next`)
    pub fn prev(self) -> Priority {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Priority::parse_label(&s).ok_or_else(|| format!("invalid priority '{}'", s))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// AM/PM half of a 12-hour clock reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn toggle(self) -> Meridiem {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }
}

/// Error returned when a time string is not `H:MM AM|PM`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time '{0}': expected H:MM AM or H:MM PM (hour 1-12, minute 00-59)")]
pub struct ClockTimeError(pub String);

/// A 12-hour clock time, rendered as `H:MM AM|PM`.
///
/// The edit form composes one from three selectors (hour, minute, meridiem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl ClockTime {
    /// Build a clock time; `None` if the hour is outside 1-12 or the minute outside 0-59.
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Option<ClockTime> {
        if (1..=12).contains(&hour) && minute < 60 {
            Some(ClockTime {
                hour,
                minute,
                meridiem,
            })
        } else {
            None
        }
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    pub fn meridiem(self) -> Meridiem {
        self.meridiem
    }

    /// Step the hour by `delta`, wrapping within 1-12
    pub fn step_hour(self, delta: i32) -> ClockTime {
        let zero_based = (self.hour as i32 - 1 + delta).rem_euclid(12);
        ClockTime {
            hour: zero_based as u8 + 1,
            ..self
        }
    }

    /// Step the minute by `delta`, wrapping within 0-59 (the hour is left alone)
    pub fn step_minute(self, delta: i32) -> ClockTime {
        ClockTime {
            minute: (self.minute as i32 + delta).rem_euclid(60) as u8,
            ..self
        }
    }

    pub fn toggle_meridiem(self) -> ClockTime {
        ClockTime {
            meridiem: self.meridiem.toggle(),
            ..self
        }
    }
}

impl Default for ClockTime {
    /// 12:00 PM, the form's reset value
    fn default() -> Self {
        ClockTime {
            hour: 12,
            minute: 0,
            meridiem: Meridiem::Pm,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem.label())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    /// Accepts `H:MM AM`, `HH:MM pm`, and the space-less `H:MMAM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ClockTimeError(s.to_string());
        let trimmed = s.trim();
        let split = trimmed
            .len()
            .checked_sub(2)
            .filter(|&i| trimmed.is_char_boundary(i))
            .ok_or_else(err)?;
        let (clock, tail) = trimmed.split_at(split);
        let meridiem = if tail.eq_ignore_ascii_case("AM") {
            Meridiem::Am
        } else if tail.eq_ignore_ascii_case("PM") {
            Meridiem::Pm
        } else {
            return Err(err());
        };

        let (hour, minute) = clock.trim_end().split_once(':').ok_or_else(err)?;
        if minute.len() != 2 {
            return Err(err());
        }
        let hour: u8 = hour.parse().map_err(|_| err())?;
        let minute: u8 = minute.parse().map_err(|_| err())?;
        ClockTime::new(hour, minute, meridiem).ok_or_else(err)
    }
}

/// A to-do item as stored in the task document.
///
/// Field order here is the field order in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub topic: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `H:MM AM|PM`
    pub time: String,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Label shown in the status column
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Complete" } else { "Pending" }
    }
}

/// A task form field, named in validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Topic,
    Description,
    Date,
    Priority,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Topic => "topic",
            Field::Description => "description",
            Field::Date => "date",
            Field::Priority => "priority",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The edit-form snapshot a create or update is built from.
///
/// Priority stays as raw text until validation so empty and unknown values
/// can be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFields {
    pub topic: String,
    pub description: String,
    pub date: String,
    pub time: ClockTime,
    pub priority: String,
}

impl Default for TaskFields {
    fn default() -> Self {
        TaskFields {
            topic: String::new(),
            description: String::new(),
            date: String::new(),
            time: ClockTime::default(),
            priority: Priority::Medium.label().to_string(),
        }
    }
}
