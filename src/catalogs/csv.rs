//! CSV import for star catalogs.
//!
//! The file must have a header row. Required columns (any order):
//! `name, ra_deg, dec_deg, magnitude, distance_ly, spectral_class, constellation`.
//! Optional columns: `hip, age_gyr, mass_solar, temperature_k, history`.
//! Empty optional cells are read as absent.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::{StarCatalog, StarRecord};

const REQUIRED: [&str; 7] = [
    "name",
    "ra_deg",
    "dec_deg",
    "magnitude",
    "distance_ly",
    "spectral_class",
    "constellation",
];

struct Columns {
    required: [usize; 7],
    hip: Option<usize>,
    age_gyr: Option<usize>,
    mass_solar: Option<usize>,
    temperature_k: Option<usize>,
    history: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &::csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let mut required = [0usize; 7];
        for (slot, name) in required.iter_mut().zip(REQUIRED) {
            *slot = find(name).with_context(|| format!("missing required column `{}`", name))?;
        }
        Ok(Self {
            required,
            hip: find("hip"),
            age_gyr: find("age_gyr"),
            mass_solar: find("mass_solar"),
            temperature_k: find("temperature_k"),
            history: find("history"),
        })
    }
}

fn field<'r>(record: &'r ::csv::StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

fn parse_f64(record: &::csv::StringRecord, idx: usize, column: &str) -> Result<f64> {
    let raw = field(record, idx);
    raw.parse()
        .with_context(|| format!("column `{}`: cannot parse {:?} as a number", column, raw))
}

fn parse_optional<T: std::str::FromStr>(
    record: &::csv::StringRecord,
    idx: Option<usize>,
    column: &str,
) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match idx.map(|i| field(record, i)) {
        Some(s) if !s.is_empty() => s
            .parse()
            .map(Some)
            .with_context(|| format!("column `{}`: cannot parse {:?}", column, s)),
        _ => Ok(None),
    }
}

fn parse_record(record: &::csv::StringRecord, cols: &Columns) -> Result<StarRecord> {
    let [name, ra, dec, mag, dist, spectral, constellation] = cols.required;
    Ok(StarRecord {
        name: field(record, name).to_string(),
        ra_deg: parse_f64(record, ra, "ra_deg")?,
        dec_deg: parse_f64(record, dec, "dec_deg")?,
        magnitude: parse_f64(record, mag, "magnitude")?,
        distance_ly: parse_f64(record, dist, "distance_ly")?,
        spectral_class: field(record, spectral).to_string(),
        constellation: field(record, constellation).to_string(),
        hip: parse_optional(record, cols.hip, "hip")?,
        age_gyr: parse_optional(record, cols.age_gyr, "age_gyr")?,
        mass_solar: parse_optional(record, cols.mass_solar, "mass_solar")?,
        temperature_k: parse_optional(record, cols.temperature_k, "temperature_k")?,
        history: cols
            .history
            .map(|i| field(record, i).to_string())
            .unwrap_or_default(),
        constellation_stars: Vec::new(),
    })
}

/// Read star records from any CSV source.
pub fn read_star_csv_from_reader<R: Read>(reader: R) -> Result<Vec<StarRecord>> {
    let mut rdr = ::csv::Reader::from_reader(reader);
    let cols = Columns::from_headers(rdr.headers()?)?;
    rdr.records()
        .enumerate()
        .map(|(row, result)| {
            // +2: one-based, plus the header line
            let record = result.with_context(|| format!("row {}", row + 2))?;
            parse_record(&record, &cols).with_context(|| format!("row {}", row + 2))
        })
        .collect()
}

/// Read star records from a CSV file.
pub fn read_star_csv<P: AsRef<Path>>(file: P) -> Result<Vec<StarRecord>> {
    let file = file.as_ref();
    let handle = std::fs::File::open(file)
        .with_context(|| format!("cannot open star catalog {}", file.display()))?;
    read_star_csv_from_reader(handle)
}

/// Read a CSV file and build a validated catalog from it.
pub fn load_catalog_from_csv<P: AsRef<Path>>(file: P) -> Result<StarCatalog> {
    let file = file.as_ref();
    let stars = read_star_csv(file)?;
    let catalog = StarCatalog::new(stars)
        .with_context(|| format!("invalid star catalog {}", file.display()))?;
    info!("Loaded {} stars from {}", catalog.len(), file.display());
    Ok(catalog)
}
