//! Extension point for targeted Overpass API retrieval.
//!
//! Bulk regional extracts cover current needs; querying the Overpass API for
//! targeted feature sets is declared here without behaviour so the seam is
//! visible in the public API.

use geo::Rect;
use thiserror::Error;

use crate::features::FeatureTable;

/// Errors produced by the Overpass extension point.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OverpassError {
    /// The retrieval path is declared but carries no behaviour yet.
    #[error("Overpass retrieval is not implemented")]
    Unimplemented,
}

/// Run a raw Overpass QL query. Not implemented.
pub fn query(_query: &str) -> Result<FeatureTable, OverpassError> {
    Err(OverpassError::Unimplemented)
}

/// Fetch features within `bounds` from the Overpass API. Not implemented.
pub fn fetch(_bounds: Rect<f64>) -> Result<FeatureTable, OverpassError> {
    Err(OverpassError::Unimplemented)
}
