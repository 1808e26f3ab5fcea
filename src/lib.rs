//! Facade crate for the OSM exposure toolkit.
//!
//! This crate re-exports the download, clipping, and feature-retrieval API of
//! `osm-exposure-data` so pipeline code depends on a single crate.

#![forbid(unsafe_code)]

pub use osm_exposure_data::clip::{BoundingBox, ClipError, ClipOutcome, ClipShape, extract_region};
pub use osm_exposure_data::features::{
    ConstraintSet, FeatureError, FeatureRow, FeatureSource, FeatureTable, GeometryLayer,
    InfrastructureCategory, OgrFeatureSource, RawFeature, RecordOutcome, SkipReason, TagFilter,
    build_query, retrieve, retrieve_clipped, tag_filters,
};
pub use osm_exposure_data::geofabrik::{
    CountryCode, DEFAULT_USER_AGENT, DownloadLog, DownloadReport, ExtractSource, ExtractUrl,
    FileFormat, GEOFABRIK_ROOT, GeofabrikError, HttpExtractSource, PLANET_URL, RegionPath,
    TransportError, download_country_extract, download_planet, download_url, ensure_downloaded,
    region_for,
};
pub use osm_exposure_data::overpass::{self, OverpassError};
