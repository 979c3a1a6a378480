//! The structured result handed to presentation code.

use chrono::{DateTime, Utc};

use crate::matcher::MatchResult;
use crate::observation::ObservationMoment;
use crate::zenith::ZenithPoint;
use crate::StarRecord;

/// Everything a renderer needs about one zenith-star resolution.
///
/// Owned and immutable; serializes with serde for JSON or template engines.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ZenithStarReport {
    /// The matched star (or the fallback star, see `is_fallback`).
    pub star: StarRecord,
    pub star_color: &'static str,
    /// Separation between the star and the zenith, degrees.
    pub angular_distance_deg: f64,
    /// Set when no catalog star could be matched and a default was substituted.
    /// Presentation code should soften its wording in that case.
    pub is_fallback: bool,
    pub zenith: ZenithPoint,
    pub local_sidereal_hours: f64,
    pub timestamp: DateTime<Utc>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Combine a match with the context it was computed in.
pub fn assemble(
    matched: &MatchResult<'_>,
    zenith: &ZenithPoint,
    moment: &ObservationMoment,
) -> ZenithStarReport {
    ZenithStarReport {
        star: matched.star.clone(),
        star_color: matched.star.color_hex(),
        angular_distance_deg: matched.angular_distance_deg,
        is_fallback: matched.is_fallback,
        zenith: *zenith,
        local_sidereal_hours: zenith.local_sidereal_hours(),
        timestamp: moment.timestamp(),
        latitude_deg: moment.latitude_deg(),
        longitude_deg: moment.longitude_deg(),
    }
}
