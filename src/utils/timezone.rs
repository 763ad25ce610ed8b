use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::TIME_FORMAT;
use crate::error::AppError;

/// Timezone used to stamp history entries
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let trimmed = value.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Wall-clock `HH:MM:SS` of `utc` in this timezone
    pub(crate) fn clock_time(self, utc: DateTime<Utc>) -> String {
        match self {
            Timezone::Local => utc.with_timezone(&Local).format(TIME_FORMAT).to_string(),
            Timezone::Named(tz) => utc.with_timezone(&tz).format(TIME_FORMAT).to_string(),
        }
    }
}
