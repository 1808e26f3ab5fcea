//! Driver seam for executing queries against a local extract.

use std::path::{Path, PathBuf};

use gdal::Dataset;
use gdal::vector::{Feature, LayerAccess, sql::Dialect};
use geo::Geometry;
use log::debug;

use super::error::FeatureError;

/// Why an individual record was dropped from a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A requested field could not be read from the record.
    FieldAccess,
    /// The record's native geometry was absent or failed to decode.
    GeometryDecode,
}

/// Field values and decoded geometry of one driver record.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    /// Values of the requested fields, in request order.
    pub fields: Vec<Option<String>>,
    /// Decoded geometry.
    pub geometry: Geometry<f64>,
}

/// Per-record result of a driver query.
///
/// A skipped record never fails the surrounding retrieval; surfacing the
/// skip keeps the drop path observable instead of hiding it behind a
/// blanket catch.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// A fully decoded record.
    Feature(RawFeature),
    /// A record dropped for the given reason.
    Skipped(SkipReason),
}

/// Source of driver records for a query.
pub trait FeatureSource {
    /// Execute `query` and read `fields` from each resulting record.
    fn run_query(
        &self,
        query: &str,
        fields: &[String],
    ) -> Result<Vec<RecordOutcome>, FeatureError>;
}

/// [`FeatureSource`] backed by the OGR OSM driver.
///
/// The extract is opened on every query, matching the single-shot usage
/// pattern; the driver builds its own spatial index per open.
#[derive(Debug, Clone)]
pub struct OgrFeatureSource {
    path: PathBuf,
}

impl OgrFeatureSource {
    /// Address the extract file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the extract file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeatureSource for OgrFeatureSource {
    fn run_query(
        &self,
        query: &str,
        fields: &[String],
    ) -> Result<Vec<RecordOutcome>, FeatureError> {
        let dataset = Dataset::open(&self.path).map_err(|source| FeatureError::Open {
            path: self.path.clone(),
            source,
        })?;
        let result = dataset
            .execute_sql(query, None, Dialect::DEFAULT)
            .map_err(|source| FeatureError::Query {
                query: query.to_owned(),
                source,
            })?;
        let Some(mut layer) = result else {
            return Ok(Vec::new());
        };
        let mut outcomes = Vec::new();
        for feature in layer.features() {
            outcomes.push(read_record(&feature, fields));
        }
        Ok(outcomes)
    }
}

fn read_record(feature: &Feature<'_>, fields: &[String]) -> RecordOutcome {
    let mut values = Vec::with_capacity(fields.len());
    for name in fields {
        match feature.field_as_string_by_name(name) {
            Ok(value) => values.push(value),
            Err(err) => {
                debug!("skipping feature with unreadable field {name}: {err}");
                return RecordOutcome::Skipped(SkipReason::FieldAccess);
            }
        }
    }
    let Some(raw) = feature.geometry() else {
        return RecordOutcome::Skipped(SkipReason::GeometryDecode);
    };
    match raw.to_geo() {
        Ok(geometry) => RecordOutcome::Feature(RawFeature {
            fields: values,
            geometry,
        }),
        Err(err) => {
            debug!("skipping feature with undecodable geometry: {err}");
            RecordOutcome::Skipped(SkipReason::GeometryDecode)
        }
    }
}
