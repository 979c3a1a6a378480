//! The observer's instant and place.
//!
//! # Time zone convention
//!
//! Civil date/time input without an explicit offset is interpreted as **UTC**.
//! Callers holding local wall-clock time must convert it (or pass an RFC 3339
//! string carrying the offset) before building an [`ObservationMoment`];
//! otherwise the zenith will be off by 15° of right ascension per hour of
//! offset.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::{Result, ZenithError};

/// Accepted naive date-time layouts, tried in order.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// A validated observation: a UTC instant plus geographic latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ObservationMoment {
    timestamp: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl ObservationMoment {
    /// Build an observation from an already-anchored UTC instant.
    ///
    /// Fails with [`ZenithError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]` or longitude outside `[-180, 180]`, and with
    /// [`ZenithError::InvalidTimestamp`] for years the sidereal routine cannot
    /// represent.
    pub fn new(timestamp: DateTime<Utc>, latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        validate_coordinates(latitude_deg, longitude_deg)?;
        if i16::try_from(timestamp.year()).is_err() {
            return Err(ZenithError::InvalidTimestamp(format!(
                "year {} is outside the supported range",
                timestamp.year()
            )));
        }
        Ok(Self {
            timestamp,
            latitude_deg,
            longitude_deg,
        })
    }

    /// Build an observation from a naive civil date-time, taken to be UTC.
    pub fn from_naive_utc(
        naive: NaiveDateTime,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self> {
        Self::new(naive.and_utc(), latitude_deg, longitude_deg)
    }

    /// Parse a separate date (`YYYY-MM-DD`) and time (`HH:MM` or `HH:MM:SS`), taken to be UTC.
    pub fn parse_civil(date: &str, time: &str, latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| ZenithError::InvalidTimestamp(format!("date {:?}: {}", date, e)))?;
        let clock = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(time.trim(), fmt).ok())
            .ok_or_else(|| {
                ZenithError::InvalidTimestamp(format!("time {:?}: expected HH:MM or HH:MM:SS", time))
            })?;
        Self::from_naive_utc(day.and_time(clock), latitude_deg, longitude_deg)
    }

    /// Parse a single timestamp string; see [`parse_timestamp`].
    pub fn parse(timestamp: &str, latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        Self::new(parse_timestamp(timestamp)?, latitude_deg, longitude_deg)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}

/// Parse an instant.
///
/// RFC 3339 input (`2024-03-20T12:00:00-03:00`) is converted to UTC using its
/// offset. Input without an offset (`2024-03-20 15:00`, `2024-03-20T15:00:00`)
/// is taken to be UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ZenithError::InvalidTimestamp(format!("cannot parse {:?}", input)))
}

/// Check latitude ∈ [-90, 90] and longitude ∈ [-180, 180] (NaN is rejected).
pub fn validate_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<()> {
    if (-90.0..=90.0).contains(&latitude_deg) && (-180.0..=180.0).contains(&longitude_deg) {
        Ok(())
    } else {
        Err(ZenithError::InvalidCoordinate {
            latitude_deg,
            longitude_deg,
        })
    }
}
