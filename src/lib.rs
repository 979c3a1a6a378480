//! # zenith-star
//!
//! Find the catalog star closest to the point directly overhead for a given
//! instant and place on Earth.
//!
//! Given a UTC timestamp and a geographic latitude/longitude, `zenith_star`
//! computes the equatorial coordinates of the local zenith (right ascension
//! from local sidereal time, declination from latitude), scans an immutable
//! star catalog for the nearest star by great-circle distance, and returns a
//! structured report ready for presentation.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use zenith_star::{ResolverConfig, StarCatalog, ZenithResolver};
//!
//! // Built-in bright-star table, or load your own
//! let catalog = Arc::new(StarCatalog::named_stars());
//! // let catalog = Arc::new(zenith_star::catalogs::csv::load_catalog_from_csv("stars.csv")?);
//!
//! let resolver = ZenithResolver::new(catalog, ResolverConfig::default());
//!
//! // Civil input is interpreted as UTC
//! let report = resolver.resolve_civil("1990-07-15", "14:30", -23.55, -46.63)?;
//! println!(
//!     "{} ({}) is {:.2} deg from the zenith",
//!     report.star.name, report.star.constellation, report.angular_distance_deg
//! );
//! # Ok::<(), zenith_star::ZenithError>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Observation** — civil date/time and coordinates are validated into an
//!    [`ObservationMoment`] (UTC)
//! 2. **Zenith** — Greenwich sidereal time (Meeus, via the `astro` crate) plus
//!    longitude gives the local sidereal time, i.e. the zenith's right ascension
//! 3. **Match** — linear scan for the smallest angular distance; ties go to the
//!    earlier catalog record, an empty catalog yields a flagged fallback star
//! 4. **Report** — the star, its display colour, the distance and the context
//!    it was computed in
//!

pub mod almanac;
pub mod catalogs;
pub mod error;
pub mod matcher;
pub mod observation;
pub mod report;
pub mod resolver;
pub mod sidereal;
pub mod sky;
pub mod star;
pub mod starcatalog;
pub mod zenith;

pub use almanac::{dominant_element, Almanac, Element, LunarPhase, Modality, SunSign};
pub use error::{Result, ZenithError};
pub use matcher::{angular_distance_deg, find_nearest, MatchResult};
pub use observation::{parse_timestamp, ObservationMoment};
pub use report::{assemble, ZenithStarReport};
pub use resolver::{ResolverConfig, ZenithResolver};
pub use sidereal::{
    ApparentSiderealTime, FixedSiderealTime, MeanSiderealTime, SiderealClock, SiderealMode,
};
pub use sky::{nearby_stars, SkyObject};
pub use star::{ConstellationStar, StarRecord};
pub use starcatalog::StarCatalog;
pub use zenith::{compute_zenith, compute_zenith_at, ZenithPoint};
