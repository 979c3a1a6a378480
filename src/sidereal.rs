//! Greenwich sidereal time.
//!
//! Sidereal time is delegated to the Meeus routines in the `astro` crate
//! (Astronomical Algorithms, ch. 12). The [`SiderealClock`] trait is the seam
//! through which the zenith computation obtains it, so tests and replays can
//! substitute a fixed value.
//!
//! UTC is used in place of UT1; the difference (< 0.9 s) is far below the
//! resolution that matters for picking a star.

use astro::angle::limit_to_two_PI;
use astro::time::{apprnt_sidr, julian_day, mn_sidr, CalType, Date};
use chrono::{DateTime, Datelike, Timelike, Utc};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Source of Greenwich sidereal time.
pub trait SiderealClock {
    /// Greenwich sidereal time at `instant`, in hours within `[0, 24)`.
    fn greenwich_hours(&self, instant: DateTime<Utc>) -> f64;
}

/// Which sidereal time a resolver should use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SiderealMode {
    /// Greenwich apparent sidereal time (mean time corrected for nutation).
    #[default]
    Apparent,
    /// Greenwich mean sidereal time.
    Mean,
    /// A constant, independent of the instant. Hours.
    Fixed(f64),
}

impl SiderealClock for SiderealMode {
    fn greenwich_hours(&self, instant: DateTime<Utc>) -> f64 {
        match *self {
            SiderealMode::Apparent => ApparentSiderealTime.greenwich_hours(instant),
            SiderealMode::Mean => MeanSiderealTime.greenwich_hours(instant),
            SiderealMode::Fixed(hours) => FixedSiderealTime(hours).greenwich_hours(instant),
        }
    }
}

/// Greenwich mean sidereal time (Meeus eq. 12.4).
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSiderealTime;

impl SiderealClock for MeanSiderealTime {
    fn greenwich_hours(&self, instant: DateTime<Utc>) -> f64 {
        radians_to_hours(mn_sidr(julian_day_utc(instant)))
    }
}

/// Greenwich apparent sidereal time: mean sidereal time plus the equation of
/// the equinoxes (nutation in longitude projected on the equator).
#[derive(Debug, Clone, Copy, Default)]
pub struct ApparentSiderealTime;

impl SiderealClock for ApparentSiderealTime {
    fn greenwich_hours(&self, instant: DateTime<Utc>) -> f64 {
        let jd = julian_day_utc(instant);
        let (nut_in_long, nut_in_oblq) = astro::nutation::nutation(jd);
        let true_oblq = astro::ecliptic::mn_oblq_IAU(jd) + nut_in_oblq;
        radians_to_hours(apprnt_sidr(mn_sidr(jd), nut_in_long, true_oblq))
    }
}

/// A constant sidereal time, for fixtures.
#[derive(Debug, Clone, Copy)]
pub struct FixedSiderealTime(pub f64);

impl SiderealClock for FixedSiderealTime {
    fn greenwich_hours(&self, _instant: DateTime<Utc>) -> f64 {
        normalize_hours(self.0)
    }
}

/// Julian day (UTC) of an instant, including the fraction of the day.
pub fn julian_day_utc(instant: DateTime<Utc>) -> f64 {
    let time = instant.time();
    let day_fraction = (time.num_seconds_from_midnight() as f64
        + time.nanosecond() as f64 * 1e-9)
        / SECONDS_PER_DAY;
    let date = Date {
        // Years outside i16 are rejected by `ObservationMoment::new`.
        year: instant.year().clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        month: instant.month() as u8,
        decimal_day: instant.day() as f64 + day_fraction,
        cal_type: CalType::Gregorian,
    };
    julian_day(&date)
}

/// Wrap an hour angle into `[0, 24)`.
pub fn normalize_hours(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    // rem_euclid can round up to exactly 24.0 for tiny negative inputs
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}

fn radians_to_hours(angle_rad: f64) -> f64 {
    normalize_hours(limit_to_two_PI(angle_rad).to_degrees() / 15.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hms(h: f64, m: f64, s: f64) -> f64 {
        h + m / 60.0 + s / 3600.0
    }

    #[test]
    fn julian_day_of_j2000() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((julian_day_utc(j2000) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn mean_sidereal_meeus_12b() {
        // Meeus example 12.b: 1987 April 10, 19:21:00 UT -> 8h34m57.0896s
        let t = Utc.with_ymd_and_hms(1987, 4, 10, 19, 21, 0).unwrap();
        let gmst = MeanSiderealTime.greenwich_hours(t);
        assert!((gmst - hms(8.0, 34.0, 57.0896)).abs() < 1e-5, "gmst = {}", gmst);
    }

    #[test]
    fn apparent_sidereal_meeus_12a() {
        // Meeus example 12.a: 1987 April 10, 0h UT
        // mean 13h10m46.3668s, apparent 13h10m46.1351s
        let t = Utc.with_ymd_and_hms(1987, 4, 10, 0, 0, 0).unwrap();
        let gmst = MeanSiderealTime.greenwich_hours(t);
        let gast = ApparentSiderealTime.greenwich_hours(t);
        assert!((gmst - hms(13.0, 10.0, 46.3668)).abs() < 1e-5, "gmst = {}", gmst);
        assert!((gast - hms(13.0, 10.0, 46.1351)).abs() < 1e-4, "gast = {}", gast);
        // The equation of the equinoxes is at most about a second of time
        assert!((gast - gmst).abs() < 1.2 / 3600.0);
    }

    #[test]
    fn fixed_clock_ignores_instant() {
        let clock = FixedSiderealTime(12.0);
        let a = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2050, 6, 1, 7, 30, 0).unwrap();
        assert_eq!(clock.greenwich_hours(a), 12.0);
        assert_eq!(clock.greenwich_hours(b), 12.0);
        assert_eq!(FixedSiderealTime(-1.0).greenwich_hours(a), 23.0);
        assert_eq!(SiderealMode::Fixed(36.0).greenwich_hours(a), 12.0);
    }

    #[test]
    fn hours_are_normalized() {
        assert_eq!(normalize_hours(24.0), 0.0);
        assert_eq!(normalize_hours(-6.0), 18.0);
        assert!(normalize_hours(-1e-18) < 24.0);
        for day in 1..=28 {
            let t = Utc.with_ymd_and_hms(2024, 2, day, 3, 0, 0).unwrap();
            let h = SiderealMode::Apparent.greenwich_hours(t);
            assert!((0.0..24.0).contains(&h));
        }
    }
}
