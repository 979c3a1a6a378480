//! Equatorial coordinates of the local zenith.
//!
//! The zenith's declination equals the observer's geographic latitude and its
//! right ascension equals the local sidereal time:
//!
//! ```text
//! LST = GST + longitude / 15      (hours, wrapped into [0, 24))
//! RA  = LST * 15                  (degrees, in [0, 360))
//! Dec = latitude
//! ```
//!
//! No refraction or polar-motion corrections are applied.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Result;
use crate::matcher::angular_distance_deg;
use crate::observation::ObservationMoment;
use crate::sidereal::{normalize_hours, SiderealClock};

/// The point directly overhead, in equatorial coordinates (degrees).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ZenithPoint {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

impl ZenithPoint {
    /// Local sidereal time in hours, `[0, 24)`.
    pub fn local_sidereal_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }

    /// Great-circle separation from another zenith point, in degrees.
    pub fn separation_deg(&self, other: &ZenithPoint) -> f64 {
        angular_distance_deg(self.ra_deg, self.dec_deg, other.ra_deg, other.dec_deg)
    }
}

/// Compute the zenith for a validated observation.
pub fn compute_zenith<C: SiderealClock + ?Sized>(moment: &ObservationMoment, clock: &C) -> ZenithPoint {
    let gst_hours = clock.greenwich_hours(moment.timestamp());
    let lst_hours = normalize_hours(gst_hours + moment.longitude_deg() / 15.0);
    let mut ra_deg = lst_hours * 15.0;
    // lst < 24 can still round to 360.0 after scaling
    if ra_deg >= 360.0 {
        ra_deg = 0.0;
    }
    let zenith = ZenithPoint {
        ra_deg,
        dec_deg: moment.latitude_deg(),
    };
    debug!(
        "GST {:.6} h, LST {:.6} h -> zenith RA {:.4} deg, Dec {:.4} deg",
        gst_hours, lst_hours, zenith.ra_deg, zenith.dec_deg
    );
    zenith
}

/// Validate the inputs, then compute the zenith.
///
/// Fails with `InvalidCoordinate` for out-of-range latitude/longitude.
pub fn compute_zenith_at<C: SiderealClock + ?Sized>(
    timestamp: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    clock: &C,
) -> Result<ZenithPoint> {
    let moment = ObservationMoment::new(timestamp, latitude_deg, longitude_deg)?;
    Ok(compute_zenith(&moment, clock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sidereal::{ApparentSiderealTime, FixedSiderealTime};
    use crate::ZenithError;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 7, 15, 14, 30, 0).unwrap()
    }

    #[test]
    fn fixed_gst_twelve_hours() {
        let z = compute_zenith_at(instant(), 40.0, 0.0, &FixedSiderealTime(12.0)).unwrap();
        assert_eq!(z.dec_deg, 40.0);
        assert!((z.ra_deg - 180.0).abs() < 1e-12);
        assert!((z.local_sidereal_hours() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn longitude_shifts_right_ascension() {
        let clock = FixedSiderealTime(0.0);
        let east = compute_zenith_at(instant(), 0.0, 90.0, &clock).unwrap();
        let west = compute_zenith_at(instant(), 0.0, -90.0, &clock).unwrap();
        assert!((east.ra_deg - 90.0).abs() < 1e-12);
        assert!((west.ra_deg - 270.0).abs() < 1e-12);
    }

    #[test]
    fn antimeridian_neighbours_stay_close() {
        // Both with a GST that leaves RA near 0/360 and one that leaves it near 180
        for gst in [0.0, 12.0, 23.99] {
            let clock = FixedSiderealTime(gst);
            let a = compute_zenith_at(instant(), 35.0, 179.9, &clock).unwrap();
            let b = compute_zenith_at(instant(), 35.0, -179.9, &clock).unwrap();
            let sep = a.separation_deg(&b);
            let expected = 0.2 * 35.0_f64.to_radians().cos();
            assert!((sep - expected).abs() < 1e-6, "gst {gst}: sep {sep}");
        }
    }

    #[test]
    fn declination_is_latitude_exactly() {
        for lat in [-90.0, -33.8688, 0.0, 1e-7, 51.4779, 90.0] {
            let z = compute_zenith_at(instant(), lat, 10.0, &ApparentSiderealTime).unwrap();
            assert_eq!(z.dec_deg, lat);
            assert!((0.0..360.0).contains(&z.ra_deg));
        }
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let err = compute_zenith_at(instant(), 91.0, 0.0, &ApparentSiderealTime).unwrap_err();
        assert!(matches!(err, ZenithError::InvalidCoordinate { .. }));
        let err = compute_zenith_at(instant(), 0.0, -180.1, &ApparentSiderealTime).unwrap_err();
        assert!(matches!(err, ZenithError::InvalidCoordinate { .. }));
    }
}
