//! Time-of-day greeting for the dashboard.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

use chrono::Timelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingBand {
    Morning,
    Afternoon,
    Evening,
}

impl GreetingBand {
    /// Band for a local hour: [0,12) morning, [12,18) afternoon, rest evening.
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    #[must_use]
    pub fn salutation(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
        }
    }
}

/// `"<band>, <name>!"`
#[must_use]
pub fn greeting_for(hour: u32, name: &str) -> String {
    format!("{}, {name}!", GreetingBand::for_hour(hour).salutation())
}

/// Source of the local wall-clock hour.
pub trait Clock {
    fn local_hour(&self) -> u32;
}

/// Host local time via `chrono`.
pub struct LocalClock;

impl Clock for LocalClock {
    fn local_hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}
