//! End-to-end zenith-star resolution around a shared catalog.
//!
//! A [`ZenithResolver`] owns an `Arc<StarCatalog>` plus configuration and is
//! itself immutable, so one instance can serve any number of threads.

use std::sync::Arc;

use tracing::{debug, info};

use crate::almanac::Almanac;
use crate::error::Result;
use crate::matcher::find_nearest;
use crate::observation::ObservationMoment;
use crate::report::{assemble, ZenithStarReport};
use crate::sidereal::SiderealMode;
use crate::sky::{nearby_stars, SkyObject};
use crate::zenith::{compute_zenith, ZenithPoint};
use crate::{StarCatalog, StarRecord};

// ── Configuration ───────────────────────────────────────────────────────────

/// Configuration for a [`ZenithResolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Name of the star reported when nothing in the catalog can be matched.
    /// Looked up in the catalog; the built-in Sirius record is used if absent.
    pub fallback_star: String,
    /// Sidereal time used to place the zenith.
    pub sidereal: SiderealMode,
    /// Cone radius around the zenith for [`ZenithResolver::visible_sky`] (degrees).
    pub sky_radius_deg: f64,
    /// Maximum number of entries returned by [`ZenithResolver::visible_sky`].
    pub sky_limit: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_star: "Sirius".to_string(),
            sidereal: SiderealMode::Apparent,
            sky_radius_deg: 90.0,
            sky_limit: 25,
        }
    }
}

// ── Resolver ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ZenithResolver {
    catalog: Arc<StarCatalog>,
    config: ResolverConfig,
    fallback: StarRecord,
}

impl ZenithResolver {
    pub fn new(catalog: Arc<StarCatalog>, config: ResolverConfig) -> Self {
        let fallback = match catalog.get(&config.fallback_star) {
            Some(star) => star.clone(),
            None => {
                debug!(
                    "Fallback star {:?} not in catalog; using built-in Sirius",
                    config.fallback_star
                );
                crate::catalogs::named::sirius()
            }
        };
        info!(
            "Zenith resolver ready: {} stars, {:?} sidereal time, fallback {}",
            catalog.len(),
            config.sidereal,
            fallback.name
        );
        Self {
            catalog,
            config,
            fallback,
        }
    }

    /// Resolver over the built-in named-star table with default settings.
    pub fn with_named_stars() -> Self {
        Self::new(Arc::new(StarCatalog::named_stars()), ResolverConfig::default())
    }

    pub fn catalog(&self) -> &Arc<StarCatalog> {
        &self.catalog
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// The record substituted when no catalog star can be matched.
    pub fn fallback(&self) -> &StarRecord {
        &self.fallback
    }

    /// Zenith of an observation under the configured sidereal time.
    pub fn zenith(&self, moment: &ObservationMoment) -> ZenithPoint {
        compute_zenith(moment, &self.config.sidereal)
    }

    /// Find the star nearest the zenith for a validated observation.
    ///
    /// Never fails for a validated moment; the `Result` leaves room for the
    /// same signature as [`resolve_civil`](Self::resolve_civil).
    pub fn resolve(&self, moment: &ObservationMoment) -> Result<ZenithStarReport> {
        let zenith = self.zenith(moment);
        let matched = find_nearest(&zenith, self.catalog.stars(), &self.fallback);
        let report = assemble(&matched, &zenith, moment);
        info!(
            "Zenith star at {} ({:.4}, {:.4}): {} ({:.3} deg{})",
            report.timestamp,
            report.latitude_deg,
            report.longitude_deg,
            report.star.name,
            report.angular_distance_deg,
            if report.is_fallback { ", fallback" } else { "" }
        );
        Ok(report)
    }

    /// Parse civil input (date `YYYY-MM-DD`, time `HH:MM[:SS]`, UTC) and resolve it.
    pub fn resolve_civil(
        &self,
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<ZenithStarReport> {
        let moment = ObservationMoment::parse_civil(date, time, latitude_deg, longitude_deg)?;
        self.resolve(&moment)
    }

    /// Catalog stars around the zenith, ranked for display.
    pub fn visible_sky(&self, zenith: &ZenithPoint) -> Vec<SkyObject> {
        nearby_stars(
            &self.catalog,
            zenith,
            self.config.sky_radius_deg,
            self.config.sky_limit,
        )
    }

    /// Sun sign, ascendant and lunar phase for the observation.
    pub fn almanac(&self, moment: &ObservationMoment) -> Almanac {
        Almanac::at(moment)
    }
}
