//! Nearest-star search around the zenith.
//!
//! A linear scan over the catalog using the great-circle distance from the
//! spherical law of cosines. The scan never fails: records with non-finite
//! coordinates are skipped, and if nothing usable remains a caller-supplied
//! fallback star is returned and flagged.

use tracing::{debug, warn};

use crate::zenith::ZenithPoint;
use crate::StarRecord;

/// Great-circle separation between two equatorial positions, all in degrees.
///
/// ```text
/// cos d = sin(dec1) sin(dec2) + cos(dec1) cos(dec2) cos(ra1 - ra2)
///       = cos(dec1 - dec2) - cos(dec1) cos(dec2) (1 - cos(ra1 - ra2))
/// ```
///
/// The second form is evaluated; it is exactly 1 for identical points. The
/// cosine is clamped to `[-1, 1]` before `acos`, so rounding can never
/// produce NaN for finite inputs. The result lies in `[0, 180]`.
///
/// Near zero the cosine saturates at 1, so separations below roughly 1e-6
/// degrees come out as exactly `0.0`. That is far below anything that matters
/// when picking a star.
pub fn angular_distance_deg(ra1_deg: f64, dec1_deg: f64, ra2_deg: f64, dec2_deg: f64) -> f64 {
    let cos_ddec = (dec1_deg - dec2_deg).to_radians().cos();
    let cos_dra = (ra1_deg - ra2_deg).to_radians().cos();
    let cos_decs = dec1_deg.to_radians().cos() * dec2_deg.to_radians().cos();

    let cos_dist = cos_ddec - cos_decs * (1.0 - cos_dra);
    cos_dist.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Outcome of a nearest-star search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched star, or the fallback star when `is_fallback` is set.
    pub star: &'a StarRecord,
    /// Separation from the zenith in degrees; `0.0` for a fallback.
    pub angular_distance_deg: f64,
    /// `true` when no catalog star could be matched.
    pub is_fallback: bool,
}

/// Find the catalog star closest to `zenith`.
///
/// Ties go to the star that appears first in `catalog`. When the catalog is
/// empty, or every record has unusable coordinates, `fallback` is returned
/// with `is_fallback = true` and a distance of `0.0`.
pub fn find_nearest<'a>(
    zenith: &ZenithPoint,
    catalog: &'a [StarRecord],
    fallback: &'a StarRecord,
) -> MatchResult<'a> {
    let mut best: Option<(&StarRecord, f64)> = None;
    for star in catalog {
        let dist = angular_distance_deg(zenith.ra_deg, zenith.dec_deg, star.ra_deg, star.dec_deg);
        // NaN coordinates are treated as infinitely far
        if !dist.is_finite() {
            continue;
        }
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((star, dist)),
        }
    }

    match best {
        Some((star, dist)) => {
            debug!("Nearest star to zenith: {} at {:.3} deg", star.name, dist);
            MatchResult {
                star,
                angular_distance_deg: dist,
                is_fallback: false,
            }
        }
        None => {
            warn!(
                "No usable star among {} catalog records; falling back to {}",
                catalog.len(),
                fallback.name
            );
            MatchResult {
                star: fallback,
                angular_distance_deg: 0.0,
                is_fallback: true,
            }
        }
    }
}
