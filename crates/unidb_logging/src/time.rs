use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// UTC wall-clock time of a message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeStamp {
    pub year        : i32,
    pub month       : u8,
    pub day         : u8,
    pub hour        : u8,
    pub minute      : u8,
    pub second      : u8,
    pub millisecond : u16,
}

impl TimeStamp {
    pub fn now() -> Self {
        let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
        Self::from_unix_millis(since_epoch.as_millis() as u64)
    }

    /// Convert milliseconds since the unix epoch to a calendar time.
    pub fn from_unix_millis(millis: u64) -> Self {
        const SECS_PER_DAY : u64 = 86_400;
        const DAYS_PER_ERA : i64 = 146_097;

        let secs = millis / 1000;
        let secs_of_day = secs % SECS_PER_DAY;

        // Eras of 400 years, starting on 0000-03-01 so the leap day ends a year
        let shifted = (secs / SECS_PER_DAY) as i64 + 719_468;
        let era = shifted.div_euclid(DAYS_PER_ERA);
        let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
        let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let march_month = (5 * day_of_year + 2) / 153;
        let month = (march_month + 2) % 12 + 1;

        Self {
            year: (year_of_era + era * 400 + (month <= 2) as i64) as i32,
            month: month as u8,
            day: (day_of_year - (153 * march_month + 2) / 5 + 1) as u8,
            hour: (secs_of_day / 3600) as u8,
            minute: (secs_of_day / 60 % 60) as u8,
            second: (secs_of_day % 60) as u8,
            millisecond: (millis % 1000) as u16,
        }
    }
}

impl fmt::Display for TimeStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02} {:02}:{:02}:{:02}.{:03}", self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond)
    }
}
