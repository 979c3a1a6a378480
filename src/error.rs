//! Error kinds surfaced by the zenith-resolution core.
//!
//! An empty or unusable catalog is not an error: the matcher recovers by
//! substituting a fallback star and flagging the result (see
//! [`MatchResult::is_fallback`](crate::MatchResult)).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZenithError {
    /// Latitude or longitude outside its valid range (or not finite).
    #[error("invalid coordinate: latitude {latitude_deg}, longitude {longitude_deg} (expected latitude in [-90, 90] and longitude in [-180, 180])")]
    InvalidCoordinate {
        latitude_deg: f64,
        longitude_deg: f64,
    },

    /// The civil timestamp could not be interpreted as an instant.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Two catalog records share the same name.
    #[error("duplicate star name in catalog: {0}")]
    DuplicateStar(String),

    /// A catalog record has out-of-range or non-finite fields.
    #[error("invalid catalog record {name}: {reason}")]
    InvalidStar { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ZenithError>;
