//! Infrastructure feature classes and category-level retrieval.

use std::{fmt, str::FromStr};

use geo::Rect;

use super::driver::FeatureSource;
use super::error::FeatureError;
use super::query::{ConstraintSet, GeometryLayer};
use super::retrieve::retrieve;
use super::table::FeatureTable;

/// Infrastructure categories recognised by the classification table.
///
/// `Road` and `Rail` are bare placeholders without filters; the usable line
/// retrievals are the plural `Roads` and `Rails` variants together with
/// `Power`, each with a dedicated column set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfrastructureCategory {
    /// Schools, kindergartens, colleges, universities, childcare.
    Education,
    /// Hospitals and doctors.
    Healthcare,
    /// Water works, wells, towers, and wastewater plants.
    Water,
    /// Communication towers.
    Telecom,
    /// Placeholder without filters.
    Road,
    /// Placeholder without filters.
    Rail,
    /// Aerodromes.
    Air,
    /// Fuel stations.
    Fuel,
    /// Supermarkets, greengrocers, bakeries.
    Food,
    /// Distribution power lines (line layer only).
    Power,
    /// Major road network (line layer only).
    Roads,
    /// Railway network (line layer only).
    Rails,
}

impl InfrastructureCategory {
    /// Category name as spelled in configuration and on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Water => "water",
            Self::Telecom => "telecom",
            Self::Road => "road",
            Self::Rail => "rail",
            Self::Air => "air",
            Self::Fuel => "fuel",
            Self::Food => "food",
            Self::Power => "power",
            Self::Roads => "roads",
            Self::Rails => "rails",
        }
    }
}

impl fmt::Display for InfrastructureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfrastructureCategory {
    type Err = FeatureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "education" => Ok(Self::Education),
            "healthcare" => Ok(Self::Healthcare),
            "water" => Ok(Self::Water),
            "telecom" => Ok(Self::Telecom),
            "road" => Ok(Self::Road),
            "rail" => Ok(Self::Rail),
            "air" => Ok(Self::Air),
            "fuel" => Ok(Self::Fuel),
            "food" => Ok(Self::Food),
            "power" => Ok(Self::Power),
            "roads" => Ok(Self::Roads),
            "rails" => Ok(Self::Rails),
            other => Err(FeatureError::UnknownCategory {
                value: other.to_owned(),
            }),
        }
    }
}

/// A tag key with the clause fragments that identify a feature class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagFilter {
    /// Tag key, also used as the sole requested column.
    pub key: &'static str,
    /// Clause fragments concatenated verbatim after the key.
    pub clauses: &'static [&'static str],
}

const EDUCATION: &[TagFilter] = &[
    TagFilter {
        key: "amenity",
        clauses: &[
            "='school' or ",
            "='kindergarten' or ",
            "='college' or ",
            "='university' or ",
            "='childcare'",
        ],
    },
    TagFilter {
        key: "building",
        clauses: &[
            "='school' or ",
            "='kindergarten' or ",
            "='college' or ",
            "='university' or ",
            "='childcare'",
        ],
    },
];

const HEALTHCARE: &[TagFilter] = &[
    TagFilter {
        key: "amenity",
        clauses: &["='hospital' or ", "='doctors'"],
    },
    TagFilter {
        key: "building",
        clauses: &["='hospital' or ", "='doctors'"],
    },
];

const WATER: &[TagFilter] = &[TagFilter {
    key: "man_made",
    clauses: &[
        "='water_works' or ",
        "='water_well' or ",
        "='water_tower' or ",
        "='wastewater_plant'",
    ],
}];

// OSM spells the tag tower:type; the driver column name uses an underscore.
const TELECOM: &[TagFilter] = &[
    TagFilter {
        key: "tower_type",
        clauses: &["='communication'"],
    },
    TagFilter {
        key: "man_made",
        clauses: &["='tower'"],
    },
];

const AIR: &[TagFilter] = &[TagFilter {
    key: "aeroway",
    clauses: &["='aerodrome'"],
}];

const FUEL: &[TagFilter] = &[TagFilter {
    key: "amenity",
    clauses: &["='fuel'"],
}];

const FOOD: &[TagFilter] = &[TagFilter {
    key: "shop",
    clauses: &["='supermarket' or ", "='greengrocer' or ", "='bakery'"],
}];

const HIGHWAY_CLASSES: &[&str] = &[
    "='primary' or ",
    "='trunk' or ",
    "='motorway' or ",
    "='motorway_link' or ",
    "='trunk_link' or ",
    "='primary_link' or ",
    "='secondary' or ",
    "='secondary_link' or ",
    "='tertiary' or ",
    "='tertiary_link'",
];

/// Tag filters registered for a category, in retrieval order.
///
/// Returns `None` for the placeholder and line-only categories, which are
/// handled by dedicated retrievals instead of the generic table walk.
#[must_use]
pub fn tag_filters(category: InfrastructureCategory) -> Option<&'static [TagFilter]> {
    match category {
        InfrastructureCategory::Education => Some(EDUCATION),
        InfrastructureCategory::Healthcare => Some(HEALTHCARE),
        InfrastructureCategory::Water => Some(WATER),
        InfrastructureCategory::Telecom => Some(TELECOM),
        InfrastructureCategory::Air => Some(AIR),
        InfrastructureCategory::Fuel => Some(FUEL),
        InfrastructureCategory::Food => Some(FOOD),
        InfrastructureCategory::Road
        | InfrastructureCategory::Rail
        | InfrastructureCategory::Power
        | InfrastructureCategory::Roads
        | InfrastructureCategory::Rails => None,
    }
}

/// Retrieve the tables for `category` on `layer`, clipped to `bounds`.
///
/// Table-driven categories run once per registered tag filter on the point
/// and polygon layers and yield one clipped table per filter. The
/// line-layer categories (`rails`, `roads`, `power`) each yield exactly one
/// table. Anything else has no classification rule and fails with
/// [`FeatureError::UnsupportedCategory`].
pub fn retrieve_clipped(
    source: &dyn FeatureSource,
    layer: GeometryLayer,
    category: InfrastructureCategory,
    bounds: Rect<f64>,
) -> Result<Vec<FeatureTable>, FeatureError> {
    if let Some(filters) = tag_filters(category)
        && matches!(layer, GeometryLayer::Points | GeometryLayer::Multipolygons)
    {
        let mut tables = Vec::with_capacity(filters.len());
        for filter in filters {
            let constraints = ConstraintSet::new().with(filter.key, filter.clauses.iter().copied());
            let table = retrieve(source, layer, &[filter.key], &constraints)?;
            tables.push(table.clipped(bounds));
        }
        return Ok(tables);
    }

    match (category, layer) {
        (InfrastructureCategory::Rails, GeometryLayer::Lines) => {
            let table = retrieve(source, layer, &["railway"], &ConstraintSet::new())?;
            Ok(vec![table.clipped(bounds)])
        }
        (InfrastructureCategory::Roads, GeometryLayer::Lines) => {
            let constraints =
                ConstraintSet::new().with("highway", HIGHWAY_CLASSES.iter().copied());
            let table = retrieve(
                source,
                layer,
                &["highway", "oneway", "lanes", "maxspeed"],
                &constraints,
            )?;
            Ok(vec![table.clipped(bounds)])
        }
        (InfrastructureCategory::Power, GeometryLayer::Lines) => {
            let constraints = ConstraintSet::new().with("voltage", [" IS NULL"]);
            let table = retrieve(source, layer, &["power", "voltage"], &constraints)?;
            Ok(vec![table.clipped(bounds)])
        }
        (unmatched, on_layer) => Err(FeatureError::UnsupportedCategory {
            category: unmatched,
            layer: on_layer,
        }),
    }
}
