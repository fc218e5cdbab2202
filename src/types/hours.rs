//! Opening hours of a drop-off location.
//!
//! Hours are written the way the drop-off table lists them, for
//! example `Sun-Fri: 9:00 AM - 5:00 PM`. The day range may wrap
//! around the end of the week.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Error;

const TIME_FORMAT: &str = "%I:%M %p";
const DISPLAY_TIME_FORMAT: &str = "%-I:%M %p";

/// A weekly window during which a location accepts drop-offs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OpeningHours {
    /// First day of the range, inclusive.
    pub first_day: Weekday,
    /// Last day of the range, inclusive.
    pub last_day: Weekday,
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl OpeningHours {
    /// Returns `true` if `day` falls inside the day range.
    pub fn covers(&self, day: Weekday) -> bool {
        let mut current = self.first_day;
        loop {
            if current == day {
                return true;
            }
            if current == self.last_day {
                return false;
            }
            current = current.succ();
        }
    }

    /// Returns `true` if the location is open at the given local time.
    ///
    /// The closing minute itself counts as closed.
    pub fn is_open_at(&self, local: NaiveDateTime) -> bool {
        let time = local.time();
        self.covers(local.weekday()) && self.opens <= time && time < self.closes
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

fn parse_weekday(s: &str, input: &str) -> Result<Weekday, Error> {
    Weekday::from_str(s.trim()).map_err(|_| Error::InvalidHours(input.to_string()))
}

fn parse_time(s: &str, input: &str) -> Result<NaiveTime, Error> {
    NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map_err(|_| Error::InvalidHours(input.to_string()))
}

impl FromStr for OpeningHours {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidHours(s.to_string());

        let (days, times) = s.split_once(": ").ok_or_else(invalid)?;
        let (first_day, last_day) = match days.split_once('-') {
            Some((first, last)) => (parse_weekday(first, s)?, parse_weekday(last, s)?),
            None => {
                let day = parse_weekday(days, s)?;
                (day, day)
            }
        };

        let (opens, closes) = times.split_once(" - ").ok_or_else(invalid)?;
        let opens = parse_time(opens, s)?;
        let closes = parse_time(closes, s)?;
        if closes <= opens {
            return Err(invalid());
        }

        Ok(OpeningHours {
            first_day,
            last_day,
            opens,
            closes,
        })
    }
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first_day == self.last_day {
            write!(f, "{}", day_name(self.first_day))?;
        } else {
            write!(
                f,
                "{}-{}",
                day_name(self.first_day),
                day_name(self.last_day)
            )?;
        }
        write!(
            f,
            ": {} - {}",
            self.opens.format(DISPLAY_TIME_FORMAT),
            self.closes.format(DISPLAY_TIME_FORMAT)
        )
    }
}

impl TryFrom<String> for OpeningHours {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OpeningHours> for String {
    fn from(hours: OpeningHours) -> Self {
        hours.to_string()
    }
}
