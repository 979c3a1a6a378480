//! Validated, read-only catalog of named stars.
//!
//! A `StarCatalog` is built once (from the built-in table, a CSV file or an
//! rkyv snapshot), checked for duplicate names and out-of-range coordinates,
//! and then shared immutably between requests, typically behind an `Arc`.
//!
//! The catalog is small (tens to a few thousand records), so queries are
//! linear scans in catalog order. Order is significant: the matcher breaks
//! ties in favour of the earlier record.

use std::collections::HashSet;

use nalgebra::Vector3;
use rkyv::{Archive, Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ZenithError};
use crate::star::radec_to_uvec;
use crate::StarRecord;

/// Slack on the cone boundary, in cosine units. Keeps stars whose angular
/// distance equals the radius despite rounding in the dot product.
const CONE_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Default, Archive, Serialize, Deserialize)]
pub struct StarCatalog {
    stars: Vec<StarRecord>,
}

impl StarCatalog {
    /// Build a catalog from owned records, enforcing the catalog invariants.
    pub fn new(stars: Vec<StarRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stars.len());
        for star in &stars {
            star.validate()?;
            if !seen.insert(star.name.as_str()) {
                return Err(ZenithError::DuplicateStar(star.name.clone()));
            }
        }
        Ok(Self { stars })
    }

    /// Build a catalog by cloning records from a slice.
    pub fn from_slice(stars: &[StarRecord]) -> Result<Self> {
        Self::new(stars.to_vec())
    }

    /// The built-in table of bright named stars.
    pub fn named_stars() -> Self {
        // The built-in table is known to satisfy the invariants
        // (checked by `named_stars_table_is_valid` below).
        Self {
            stars: crate::catalogs::named::named_stars(),
        }
    }

    /// Return the total number of stars in the catalog.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Return `true` when the catalog contains no stars.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Return all catalog stars, in catalog order.
    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    /// Look up a star by its exact name.
    pub fn get(&self, name: &str) -> Option<&StarRecord> {
        self.stars.iter().find(|s| s.name == name)
    }

    /// Indices of stars within `radius_deg` of a pointing direction, in catalog order.
    ///
    /// `radius_deg` is clamped to `[0, 180]`. The boundary is inclusive: a
    /// star exactly `radius_deg` away is returned.
    pub fn query_indices(&self, ra_deg: f64, dec_deg: f64, radius_deg: f64) -> Vec<usize> {
        self.query_indices_from_uvec(radec_to_uvec(ra_deg, dec_deg), radius_deg)
    }

    /// Stars within `radius_deg` of a pointing direction, in catalog order.
    pub fn query_within(&self, ra_deg: f64, dec_deg: f64, radius_deg: f64) -> Vec<&StarRecord> {
        self.query_indices(ra_deg, dec_deg, radius_deg)
            .into_iter()
            .map(|idx| &self.stars[idx])
            .collect()
    }

    /// Query stars around a (possibly non-unit) direction vector.
    ///
    /// A zero vector matches nothing.
    pub fn query_indices_from_uvec(&self, dir: Vector3<f64>, radius_deg: f64) -> Vec<usize> {
        let norm = dir.norm();
        if self.is_empty() || !norm.is_finite() || norm == 0.0 || radius_deg.is_nan() {
            return Vec::new();
        }
        let dir = dir / norm;
        let cos_radius = radius_deg.clamp(0.0, 180.0).to_radians().cos() - CONE_EPSILON;

        self.stars
            .iter()
            .enumerate()
            .filter(|(_, star)| dir.dot(&star.uvec()) >= cos_radius)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Serialize the catalog to bytes using rkyv.
    pub fn to_rkyv_bytes(&self) -> anyhow::Result<Vec<u8>> {
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map_err(|e| anyhow::anyhow!("rkyv serialization failed: {}", e))?;
        Ok(bytes.to_vec())
    }

    /// Save the catalog to a file using rkyv.
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let bytes = self.to_rkyv_bytes()?;
        std::fs::write(path, &bytes)?;
        info!("Saved star catalog to {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Load a catalog from an rkyv file, re-checking the catalog invariants.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let mut aligned = rkyv::util::AlignedVec::<16>::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);
        let catalog = rkyv::from_bytes::<Self, rkyv::rancor::Error>(&aligned)
            .map_err(|e| anyhow::anyhow!("rkyv deserialization failed: {}", e))?;
        let catalog = Self::new(catalog.stars)?;
        info!("Loaded star catalog from {}: {} stars", path.display(), catalog.len());
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(name: &str, ra_deg: f64, dec_deg: f64) -> StarRecord {
        StarRecord::new(name, ra_deg, dec_deg, 2.0)
    }

    #[test]
    fn named_stars_table_is_valid() {
        let builtin = StarCatalog::named_stars();
        assert!(!builtin.is_empty());
        let checked = StarCatalog::from_slice(builtin.stars()).expect("built-in table is invalid");
        assert_eq!(checked.len(), builtin.len());
        assert!(builtin.get("Sirius").is_some());
        assert!(builtin.get("Nonexistent").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = StarCatalog::new(vec![star("A", 1.0, 0.0), star("A", 2.0, 0.0)]).unwrap_err();
        assert_eq!(err, ZenithError::DuplicateStar("A".to_string()));
    }

    #[test]
    fn rejects_invalid_records() {
        let err = StarCatalog::new(vec![star("A", 1.0, 0.0), star("B", 1.0, -91.0)]).unwrap_err();
        assert!(matches!(err, ZenithError::InvalidStar { ref name, .. } if name == "B"));
    }

    #[test]
    fn empty_catalog_is_allowed() {
        let catalog = StarCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.query_within(0.0, 0.0, 180.0).is_empty());
    }

    #[test]
    fn cone_query_finds_nearby_stars() {
        let catalog = StarCatalog::new(vec![
            star("one", 0.0, 0.0),
            star("two", 2.0, 1.0),
            star("three", 40.0, -10.0),
        ])
        .unwrap();

        let names: Vec<&str> = catalog
            .query_within(0.5, 0.25, 3.0)
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn cone_query_handles_ra_wraparound() {
        let catalog = StarCatalog::new(vec![
            star("a", 359.0, 0.0),
            star("b", 1.0, 0.0),
            star("c", 180.0, 0.0),
        ])
        .unwrap();

        let hits = catalog.query_indices(0.0, 0.0, 3.0);
        assert_eq!(hits, vec![0, 1]);
    }

    #[test]
    fn hemisphere_query_matches_manual_filter() {
        let catalog = StarCatalog::named_stars();
        let (ra, dec) = (120.0, 30.0);
        let hits = catalog.query_indices(ra, dec, 90.0);
        let expected: Vec<usize> = catalog
            .stars()
            .iter()
            .enumerate()
            .filter(|(_, s)| {
                crate::matcher::angular_distance_deg(ra, dec, s.ra_deg, s.dec_deg) <= 90.0
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn hemisphere_boundary_is_inclusive() {
        let catalog = StarCatalog::new(vec![
            star("east", 90.0, 0.0),
            star("west", 270.0, 0.0),
            star("north", 0.0, 90.0),
            star("south", 0.0, -90.0),
            star("below", 180.0, 0.0),
            star("horizon", 180.0, 60.0),
        ])
        .unwrap();
        let hits = catalog.query_indices(0.0, 0.0, 90.0);
        assert_eq!(hits, vec![0, 1, 2, 3]);

        // Zenith at Dec 30 puts (180, 60) exactly on the horizon
        let hits = catalog.query_indices(0.0, 30.0, 90.0);
        assert!(hits.contains(&5), "{:?}", hits);
        assert!(!hits.contains(&4));
    }

    #[test]
    fn zero_direction_matches_nothing() {
        let catalog = StarCatalog::named_stars();
        assert!(catalog
            .query_indices_from_uvec(Vector3::zeros(), 180.0)
            .is_empty());
    }
}
