//! Wall-clock sampling and hand-angle math
//!
//! A [`ClockReading`] is derived state: sampled from the system clock at
//! render time, never stored, recomputed every tick. [`HandAngles`] converts
//! a reading into fractional-degree rotations so hand motion is smooth
//! rather than stepped.

use chrono::{DateTime, Datelike as _, Local, Timelike};

/// A sampled wall-clock instant in 12-hour form
///
/// Invariants: `hours` in 0..=11, `minutes` in 0..=59, `seconds` in 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockReading {
    /// Sample the current local time
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Build a reading from any chrono datetime (used by tests and formatting)
    pub fn from_datetime<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            hours: dt.hour() % 12,
            minutes: dt.minute(),
            seconds: dt.second(),
        }
    }

    /// Compute the hand rotations for this reading
    pub fn angles(&self) -> HandAngles {
        let seconds = f64::from(self.seconds);
        let minutes = f64::from(self.minutes);
        let hours = f64::from(self.hours % 12);

        HandAngles {
            second_deg: (seconds / 60.0) * 360.0,
            minute_deg: ((minutes + seconds / 60.0) / 60.0) * 360.0,
            hour_deg: ((hours + minutes / 60.0) / 12.0) * 360.0,
        }
    }
}

/// Fractional-degree rotations for the three hands
///
/// Angles are measured clockwise from 12 o'clock and always fall in
/// `[0.0, 360.0)` for valid readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour_deg: f64,
    pub minute_deg: f64,
    pub second_deg: f64,
}

/// Format a datetime as the digital time readout (`HH:MM:SS`)
pub fn format_time<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M:%S").to_string()
}

/// Format a datetime as the digital date readout (weekday, month day, year)
pub fn format_date<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}, {} {:02} {}",
        dt.weekday(),
        month_abbrev(dt.month()),
        dt.day(),
        dt.year()
    )
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}
