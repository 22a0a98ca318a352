//! Decode configuration
//!
//! Controls how wire payloads are turned into concept values. The only
//! setting today is the zone used to turn epoch-millisecond timestamps into
//! civil date-times.
//!
//! ```toml
//! datetime_zone = "utc"
//! ```

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConceptError, ConceptResult};

/// Zone used for civil date-time conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateTimeZone {
    /// Process local time zone (existing client behavior, machine dependent)
    #[default]
    Local,
    /// UTC (reproducible across machines)
    Utc,
}

impl DateTimeZone {
    /// Civil time of an instant in this zone
    ///
    /// Returns None when applying the zone offset leaves the representable
    /// date-time range.
    pub fn to_civil(self, instant: DateTime<Utc>) -> Option<NaiveDateTime> {
        let utc = instant.naive_utc();
        match self {
            DateTimeZone::Local => shift_by_offset(utc, Local.offset_from_utc_datetime(&utc)),
            DateTimeZone::Utc => Some(utc),
        }
    }

    /// Instant of a civil time in this zone
    ///
    /// Returns None for local times skipped by a zone transition. For local
    /// times repeated by a transition the earlier instant is returned.
    pub fn to_instant(self, civil: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            DateTimeZone::Local => Local
                .from_local_datetime(&civil)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc)),
            DateTimeZone::Utc => Some(Utc.from_utc_datetime(&civil)),
        }
    }
}

fn shift_by_offset(utc: NaiveDateTime, offset: FixedOffset) -> Option<NaiveDateTime> {
    utc.checked_add_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
}

/// Options applied when decoding wire payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeConfig {
    /// Zone for date-time attribute values
    pub datetime_zone: DateTimeZone,
}

impl DecodeConfig {
    /// Config that decodes date-times in UTC
    pub fn utc() -> Self {
        Self {
            datetime_zone: DateTimeZone::Utc,
        }
    }

    /// Parse from TOML text; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> ConceptResult<Self> {
        toml::from_str(s).map_err(|e| ConceptError::config(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConceptResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConceptError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}
