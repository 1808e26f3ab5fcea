//! Retrieval and filtering of OpenStreetMap extracts for exposure modelling.
//!
//! Responsibilities:
//! - Resolve and download regional extracts from the Geofabrik mirror.
//! - Derive custom sub-extracts from the planet dump via osmosis.
//! - Query local extracts for geometry layers and tag-based feature classes.
//!
//! Boundaries:
//! - Geometry parsing and spatial querying are delegated to the OGR OSM
//!   driver; this crate passes its SQL-like dialect through unmodified.
//! - Callers supply the data directory; no implicit configuration lookup.
//!
//! Invariants:
//! - Downloads never overwrite an existing destination file.
//! - A failed transfer never leaves a truncated file behind.
//! - One undecodable record never fails a whole retrieval.

#![forbid(unsafe_code)]

pub mod clip;
pub mod features;
pub mod geofabrik;
pub mod overpass;
