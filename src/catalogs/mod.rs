//! Catalog sources: the built-in named-star table and CSV import.
pub mod csv;
pub mod named;
