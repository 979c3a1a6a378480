//! The stars around the zenith, ranked for display.
//!
//! Every catalog star within a cone around the zenith (by default the whole
//! visible hemisphere) is scored so that stars both close to the zenith and
//! bright come first:
//!
//! ```text
//! priority = (90 - distance_to_zenith) * 10 + (6 - magnitude) * 5
//! ```

use crate::matcher::angular_distance_deg;
use crate::zenith::ZenithPoint;
use crate::StarCatalog;

/// Weight per degree of closeness to the zenith.
const PROXIMITY_WEIGHT: f64 = 10.0;
/// Weight per magnitude of brightness.
const BRIGHTNESS_WEIGHT: f64 = 5.0;
/// Naked-eye limiting magnitude used as the brightness reference.
const LIMITING_MAGNITUDE: f64 = 6.0;

/// A catalog star placed relative to the zenith.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SkyObject {
    pub name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub magnitude: f64,
    pub distance_to_zenith_deg: f64,
    pub color: &'static str,
    pub priority: f64,
}

/// Display priority of a star at `distance_deg` from the zenith.
pub fn sky_priority(distance_deg: f64, magnitude: f64) -> f64 {
    (90.0 - distance_deg) * PROXIMITY_WEIGHT + (LIMITING_MAGNITUDE - magnitude) * BRIGHTNESS_WEIGHT
}

/// Up to `limit` stars within `radius_deg` of the zenith, highest priority first.
///
/// Equal priorities keep catalog order.
pub fn nearby_stars(
    catalog: &StarCatalog,
    zenith: &ZenithPoint,
    radius_deg: f64,
    limit: usize,
) -> Vec<SkyObject> {
    let mut objects: Vec<SkyObject> = catalog
        .query_within(zenith.ra_deg, zenith.dec_deg, radius_deg)
        .into_iter()
        .map(|star| {
            let distance =
                angular_distance_deg(zenith.ra_deg, zenith.dec_deg, star.ra_deg, star.dec_deg);
            SkyObject {
                name: star.name.clone(),
                ra_deg: star.ra_deg,
                dec_deg: star.dec_deg,
                magnitude: star.magnitude,
                distance_to_zenith_deg: distance,
                color: star.color_hex(),
                priority: sky_priority(distance, star.magnitude),
            }
        })
        .collect();

    // stable sort: ties keep catalog order
    objects.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    objects.truncate(limit);
    objects
}
