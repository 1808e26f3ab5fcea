//! Row-oriented output tables for retrieved features.

use geo::{Geometry, Intersects, Rect};

/// One retrieved feature: identifier, requested tag values, and geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    /// OSM identifier, as reported by the driver.
    pub osm_id: Option<String>,
    /// Values of the requested tag columns, in request order.
    pub values: Vec<Option<String>>,
    /// Decoded feature geometry (WGS84, `x = longitude`, `y = latitude`).
    pub geometry: Geometry<f64>,
}

/// Row-oriented table of retrieved features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// The empty table shape used when nothing matched.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: vec!["osm_id".to_owned(), "geometry".to_owned()],
            rows: Vec::new(),
        }
    }

    /// A table shaped `[osm_id, requested columns…, geometry]`.
    pub(crate) fn with_columns(requested: &[&str]) -> Self {
        let mut columns = Vec::with_capacity(requested.len() + 2);
        columns.push("osm_id".to_owned());
        columns.extend(requested.iter().map(|column| (*column).to_owned()));
        columns.push("geometry".to_owned());
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, row: FeatureRow) {
        self.rows.push(row);
    }

    /// Column names, in output order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The retrieved rows.
    #[must_use]
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only rows whose geometry intersects `bounds`.
    #[must_use]
    pub fn clipped(mut self, bounds: Rect<f64>) -> Self {
        self.rows.retain(|row| bounds.intersects(&row.geometry));
        self
    }
}
