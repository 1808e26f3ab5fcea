//! SQL-like query construction for the OGR OSM driver.

use std::{fmt, str::FromStr};

use super::error::FeatureError;

/// Geometry layers exposed by the OSM driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryLayer {
    /// Point features (nodes with relevant tags).
    Points,
    /// Line features (ways).
    Lines,
    /// Multi-line features (route relations).
    Multilinestrings,
    /// Polygon features (closed ways and multipolygon relations).
    Multipolygons,
    /// Relations that fit no other layer.
    OtherRelations,
}

impl GeometryLayer {
    /// Layer name as the driver spells it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Lines => "lines",
            Self::Multilinestrings => "multilinestrings",
            Self::Multipolygons => "multipolygons",
            Self::OtherRelations => "other_relations",
        }
    }
}

impl fmt::Display for GeometryLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryLayer {
    type Err = FeatureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "points" => Ok(Self::Points),
            "lines" => Ok(Self::Lines),
            "multilinestrings" => Ok(Self::Multilinestrings),
            "multipolygons" => Ok(Self::Multipolygons),
            "other_relations" => Ok(Self::OtherRelations),
            other => Err(FeatureError::UnknownLayer {
                value: other.to_owned(),
            }),
        }
    }
}

/// Ordered tag-value constraints for a query.
///
/// Each entry pairs a tag key with clause fragments that are concatenated
/// verbatim after the key name, so fragments carry their own operators and
/// connectives (e.g. `="hospital" or `). Order is significant: it directly
/// controls the boolean structure of the resulting filter expression.
///
/// # Examples
/// ```
/// # use osm_exposure_data::features::ConstraintSet;
/// let constraints = ConstraintSet::new().with("amenity", ["='school' or ", "='college'"]);
/// assert!(!constraints.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    entries: Vec<(String, Vec<String>)>,
}

impl ConstraintSet {
    /// An empty constraint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append clause fragments for `key`, preserving insertion order.
    #[must_use]
    pub fn with<I, C>(mut self, key: impl Into<String>, clauses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.entries
            .push((key.into(), clauses.into_iter().map(Into::into).collect()));
        self
    }

    /// Whether any constraints are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, clauses)| (key.as_str(), clauses.as_slice()))
    }
}

/// Build the driver query selecting `columns` from `layer`.
///
/// The query always selects the `osm_id` column, asserts the first requested
/// column is non-null, and concatenates constraint fragments verbatim. No
/// escaping happens here: the consumer is the local file driver, not a
/// network-exposed service, and callers own the fragment syntax.
///
/// # Examples
/// ```
/// # use osm_exposure_data::features::{ConstraintSet, GeometryLayer, build_query};
/// let query = build_query(GeometryLayer::Lines, &["highway"], &ConstraintSet::new())?;
/// assert_eq!(query, "SELECT osm_id,highway FROM lines WHERE highway IS NOT NULL");
/// # Ok::<(), osm_exposure_data::features::FeatureError>(())
/// ```
pub fn build_query(
    layer: GeometryLayer,
    columns: &[&str],
    constraints: &ConstraintSet,
) -> Result<String, FeatureError> {
    let Some(first) = columns.first() else {
        return Err(FeatureError::NoColumns);
    };
    let mut query = String::from("SELECT osm_id");
    for column in columns {
        query.push(',');
        query.push_str(column);
    }
    query.push_str(" FROM ");
    query.push_str(layer.as_str());
    query.push_str(" WHERE ");
    if !constraints.is_empty() {
        for (key, clauses) in constraints.iter() {
            for clause in clauses {
                query.push_str(key);
                query.push_str(clause);
            }
        }
        query.push_str(" AND ");
    }
    query.push_str(first);
    query.push_str(" IS NOT NULL");
    Ok(query)
}
