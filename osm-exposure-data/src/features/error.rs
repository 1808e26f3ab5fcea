//! Error types produced by query building and feature retrieval.

use std::path::PathBuf;

use thiserror::Error;

use super::categories::InfrastructureCategory;
use super::query::GeometryLayer;

/// Errors produced while building queries or retrieving features.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeatureError {
    /// A query was requested without any tag columns.
    #[error("at least one tag column must be requested")]
    NoColumns,
    /// The geometry layer name is not one the OSM driver exposes.
    #[error("unknown geometry layer {value:?}")]
    UnknownLayer { value: String },
    /// The infrastructure category name is not recognised.
    #[error("unknown infrastructure category {value:?}")]
    UnknownCategory { value: String },
    /// The driver could not open the extract file.
    #[error("failed to open extract at {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: gdal::errors::GdalError,
    },
    /// The driver rejected or failed the query.
    #[error("query {query:?} failed: {source}")]
    Query {
        query: String,
        source: gdal::errors::GdalError,
    },
    /// No classification rule covers the requested category and layer.
    #[error("no classification rule for category {category} on layer {layer}")]
    UnsupportedCategory {
        category: InfrastructureCategory,
        layer: GeometryLayer,
    },
}
