//! Query construction and feature retrieval against local OSM extracts.
//!
//! The OGR OSM driver does the heavy lifting (geometry parsing, spatial
//! indexing, on-disk decoding); this module builds its SQL-like queries,
//! iterates the results into row-oriented tables, and groups retrievals into
//! infrastructure categories.
#![forbid(unsafe_code)]

mod categories;
mod driver;
mod error;
mod query;
mod retrieve;
mod table;

#[cfg(test)]
mod test_support;

pub use categories::{InfrastructureCategory, TagFilter, retrieve_clipped, tag_filters};
pub use driver::{FeatureSource, OgrFeatureSource, RawFeature, RecordOutcome, SkipReason};
pub use error::FeatureError;
pub use query::{ConstraintSet, GeometryLayer, build_query};
pub use retrieve::retrieve;
pub use table::{FeatureRow, FeatureTable};

#[cfg(test)]
mod tests;
