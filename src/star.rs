use rkyv::{Archive, Deserialize, Serialize};

use crate::error::{Result, ZenithError};

/// A named catalog star.
///
/// Coordinates are equatorial (J2000) in degrees. Everything below
/// `constellation` is descriptive payload: it is carried through to the
/// report untouched and never consulted by the matcher.
#[derive(
    Debug, Clone, PartialEq, Archive, Serialize, Deserialize, serde::Serialize, serde::Deserialize,
)]
pub struct StarRecord {
    pub name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    /// Apparent visual magnitude (lower is brighter).
    pub magnitude: f64,
    pub distance_ly: f64,
    pub spectral_class: String,
    pub constellation: String,
    /// Hipparcos catalog number, when known.
    pub hip: Option<u32>,
    pub age_gyr: Option<f64>,
    pub mass_solar: Option<f64>,
    pub temperature_k: Option<f64>,
    pub history: String,
    /// Bright members of the same constellation, for drawing its figure.
    pub constellation_stars: Vec<ConstellationStar>,
}

/// A lightweight neighbour entry attached to a [`StarRecord`].
#[derive(
    Debug, Clone, PartialEq, Archive, Serialize, Deserialize, serde::Serialize, serde::Deserialize,
)]
pub struct ConstellationStar {
    pub name: String,
    pub ra_deg: f64,
    pub dec_deg: f64,
    pub magnitude: f64,
}

impl StarRecord {
    /// Minimal record with only the fields the matcher needs.
    pub fn new(name: impl Into<String>, ra_deg: f64, dec_deg: f64, magnitude: f64) -> Self {
        Self {
            name: name.into(),
            ra_deg,
            dec_deg,
            magnitude,
            distance_ly: 0.0,
            spectral_class: String::new(),
            constellation: String::new(),
            hip: None,
            age_gyr: None,
            mass_solar: None,
            temperature_k: None,
            history: String::new(),
            constellation_stars: Vec::new(),
        }
    }

    /// Unit vector pointing to the star's position on the celestial sphere.
    pub fn uvec(&self) -> nalgebra::Vector3<f64> {
        radec_to_uvec(self.ra_deg, self.dec_deg)
    }

    /// Display colour for the star, keyed on the first letter of its spectral class.
    pub fn color_hex(&self) -> &'static str {
        spectral_color_hex(&self.spectral_class)
    }

    /// Check the catalog invariants for a single record.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ZenithError::InvalidStar {
            name: self.name.clone(),
            reason,
        };
        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".to_string()));
        }
        if !self.ra_deg.is_finite() || !(0.0..360.0).contains(&self.ra_deg) {
            return Err(invalid(format!("right ascension {} not in [0, 360)", self.ra_deg)));
        }
        if !self.dec_deg.is_finite() || !(-90.0..=90.0).contains(&self.dec_deg) {
            return Err(invalid(format!("declination {} not in [-90, 90]", self.dec_deg)));
        }
        if !self.magnitude.is_finite() {
            return Err(invalid("magnitude is not finite".to_string()));
        }
        if !self.distance_ly.is_finite() || self.distance_ly < 0.0 {
            return Err(invalid(format!("distance {} ly is negative", self.distance_ly)));
        }
        Ok(())
    }
}

/// Map a spectral class such as `K1.5III` to a representative star colour.
pub fn spectral_color_hex(spectral_class: &str) -> &'static str {
    match spectral_class.trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('O') => "#9bb0ff",
        Some('B') => "#aabfff",
        Some('A') => "#cad7ff",
        Some('F') => "#f8f7ff",
        Some('G') => "#fff4ea",
        Some('K') => "#ffd2a1",
        Some('M') => "#ffcc6f",
        _ => "#ffffff",
    }
}

/// Unit vector for an equatorial position given in degrees.
pub fn radec_to_uvec(ra_deg: f64, dec_deg: f64) -> nalgebra::Vector3<f64> {
    // fast cosine, sine at once:
    let (rasin, racos) = ra_deg.to_radians().sin_cos();
    let (decsin, deccos) = dec_deg.to_radians().sin_cos();
    nalgebra::Vector3::new(deccos * racos, deccos * rasin, decsin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uvec_is_unit_length() {
        let star = StarRecord::new("Vega", 279.234, 38.784, 0.03);
        assert!((star.uvec().norm() - 1.0).abs() < 1e-12);

        let pole = StarRecord::new("pole", 0.0, 90.0, 0.0);
        assert!((pole.uvec().z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn color_follows_spectral_letter() {
        assert_eq!(spectral_color_hex("A1V"), "#cad7ff");
        assert_eq!(spectral_color_hex("m1.5Iab"), "#ffcc6f");
        assert_eq!(spectral_color_hex("K1.5III"), "#ffd2a1");
        assert_eq!(spectral_color_hex(""), "#ffffff");
        assert_eq!(spectral_color_hex("WR"), "#ffffff");
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(StarRecord::new("ok", 359.99, -90.0, 1.0).validate().is_ok());

        let err = StarRecord::new("ra", 360.0, 0.0, 1.0).validate().unwrap_err();
        assert!(matches!(err, ZenithError::InvalidStar { ref name, .. } if name == "ra"));

        assert!(StarRecord::new("dec", 10.0, 90.5, 1.0).validate().is_err());
        assert!(StarRecord::new("nan", f64::NAN, 0.0, 1.0).validate().is_err());
        assert!(StarRecord::new("  ", 0.0, 0.0, 1.0).validate().is_err());

        let mut far = StarRecord::new("far", 0.0, 0.0, 1.0);
        far.distance_ly = -1.0;
        assert!(far.validate().is_err());
    }
}
