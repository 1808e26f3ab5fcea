use super::test_support::{StubExtract, point_record, undecodable_record};
use super::{
    ConstraintSet, FeatureError, GeometryLayer, InfrastructureCategory, build_query, retrieve,
    retrieve_clipped,
};
use geo::{Coord, Rect};
use rstest::{fixture, rstest};
use std::str::FromStr;

#[fixture]
fn unit_bounds() -> Rect<f64> {
    Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 })
}

#[rstest]
fn builds_plain_query() {
    let query = build_query(GeometryLayer::Lines, &["highway"], &ConstraintSet::new())
        .expect("columns are non-empty");
    assert_eq!(query, "SELECT osm_id,highway FROM lines WHERE highway IS NOT NULL");
}

#[rstest]
fn builds_constrained_query() {
    let constraints = ConstraintSet::new().with("amenity", ["='school' or ", "='college'"]);
    let query = build_query(GeometryLayer::Points, &["amenity"], &constraints)
        .expect("columns are non-empty");
    assert_eq!(
        query,
        "SELECT osm_id,amenity FROM points WHERE amenity='school' or amenity='college' \
         AND amenity IS NOT NULL"
    );
}

#[rstest]
fn builds_null_constraint_query() {
    let constraints = ConstraintSet::new().with("voltage", [" IS NULL"]);
    let query = build_query(GeometryLayer::Lines, &["power", "voltage"], &constraints)
        .expect("columns are non-empty");
    assert_eq!(
        query,
        "SELECT osm_id,power,voltage FROM lines WHERE voltage IS NULL AND power IS NOT NULL"
    );
}

#[rstest]
fn rejects_empty_column_list() {
    let outcome = build_query(GeometryLayer::Points, &[], &ConstraintSet::new());
    assert!(matches!(outcome, Err(FeatureError::NoColumns)));
}

#[rstest]
fn parses_layers_and_categories() {
    assert_eq!(
        GeometryLayer::from_str("multipolygons").expect("known layer"),
        GeometryLayer::Multipolygons
    );
    assert!(matches!(
        GeometryLayer::from_str("voxels"),
        Err(FeatureError::UnknownLayer { .. })
    ));
    assert_eq!(
        InfrastructureCategory::from_str("healthcare").expect("known category"),
        InfrastructureCategory::Healthcare
    );
    assert!(matches!(
        InfrastructureCategory::from_str("schools"),
        Err(FeatureError::UnknownCategory { .. })
    ));
}

#[rstest]
fn skips_records_with_undecodable_geometry() {
    let source = StubExtract::new(vec![
        point_record("1", Some("school"), 0.5, 0.5),
        undecodable_record(),
        point_record("3", Some("college"), 0.6, 0.6),
    ]);
    let table = retrieve(
        &source,
        GeometryLayer::Points,
        &["amenity"],
        &ConstraintSet::new(),
    )
    .expect("retrieval should succeed");
    assert_eq!(table.len(), 2);
}

#[rstest]
fn skips_records_with_null_first_column() {
    let source = StubExtract::new(vec![
        point_record("1", Some("school"), 0.5, 0.5),
        point_record("2", None, 0.6, 0.6),
    ]);
    let table = retrieve(
        &source,
        GeometryLayer::Points,
        &["amenity"],
        &ConstraintSet::new(),
    )
    .expect("retrieval should succeed");
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].osm_id.as_deref(), Some("1"));
}

#[rstest]
fn empty_result_collapses_to_two_columns() {
    let source = StubExtract::new(Vec::new());
    let table = retrieve(
        &source,
        GeometryLayer::Points,
        &["amenity"],
        &ConstraintSet::new(),
    )
    .expect("retrieval should succeed");
    assert!(table.is_empty());
    assert_eq!(table.columns(), ["osm_id", "geometry"]);
}

#[rstest]
fn populated_result_keeps_requested_columns() {
    let source = StubExtract::new(vec![point_record("1", Some("school"), 0.5, 0.5)]);
    let table = retrieve(
        &source,
        GeometryLayer::Points,
        &["amenity"],
        &ConstraintSet::new(),
    )
    .expect("retrieval should succeed");
    assert_eq!(table.columns(), ["osm_id", "amenity", "geometry"]);
}

#[rstest]
fn clip_keeps_only_intersecting_geometries(unit_bounds: Rect<f64>) {
    let source = StubExtract::new(vec![
        point_record("in", Some("school"), 0.5, 0.5),
        point_record("out", Some("college"), 2.5, 2.5),
    ]);
    let table = retrieve(
        &source,
        GeometryLayer::Points,
        &["amenity"],
        &ConstraintSet::new(),
    )
    .expect("retrieval should succeed")
    .clipped(unit_bounds);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0].osm_id.as_deref(), Some("in"));
}

#[rstest]
fn education_yields_one_table_per_tag_key(unit_bounds: Rect<f64>) {
    let source = StubExtract::new(vec![point_record("1", Some("school"), 0.5, 0.5)]);
    let tables = retrieve_clipped(
        &source,
        GeometryLayer::Points,
        InfrastructureCategory::Education,
        unit_bounds,
    )
    .expect("classified category should succeed");
    assert_eq!(tables.len(), 2);
    let queries = source.queries();
    assert_eq!(queries.len(), 2);
    assert!(queries[0].contains("amenity='school' or amenity='kindergarten'"));
    assert!(queries[0].ends_with("AND amenity IS NOT NULL"));
    assert!(queries[1].contains("building='school'"));
}

#[rstest]
fn rails_on_lines_yields_single_unfiltered_table(unit_bounds: Rect<f64>) {
    let source = StubExtract::new(vec![point_record("1", Some("rail"), 0.5, 0.5)]);
    let tables = retrieve_clipped(
        &source,
        GeometryLayer::Lines,
        InfrastructureCategory::Rails,
        unit_bounds,
    )
    .expect("rails on lines is classified");
    assert_eq!(tables.len(), 1);
    assert_eq!(
        source.queries(),
        ["SELECT osm_id,railway FROM lines WHERE railway IS NOT NULL"]
    );
}

#[rstest]
fn roads_on_lines_selects_major_classes(unit_bounds: Rect<f64>) {
    let source = StubExtract::new(Vec::new());
    let tables = retrieve_clipped(
        &source,
        GeometryLayer::Lines,
        InfrastructureCategory::Roads,
        unit_bounds,
    )
    .expect("roads on lines is classified");
    assert_eq!(tables.len(), 1);
    let queries = source.queries();
    assert!(queries[0].starts_with("SELECT osm_id,highway,oneway,lanes,maxspeed FROM lines"));
    assert!(queries[0].contains("highway='primary' or "));
    assert!(queries[0].contains("highway='tertiary_link'"));
    assert!(queries[0].ends_with("AND highway IS NOT NULL"));
}

#[rstest]
fn power_on_lines_requires_null_voltage(unit_bounds: Rect<f64>) {
    let source = StubExtract::new(Vec::new());
    retrieve_clipped(
        &source,
        GeometryLayer::Lines,
        InfrastructureCategory::Power,
        unit_bounds,
    )
    .expect("power on lines is classified");
    assert_eq!(
        source.queries(),
        ["SELECT osm_id,power,voltage FROM lines WHERE voltage IS NULL AND power IS NOT NULL"]
    );
}

#[rstest]
#[case(InfrastructureCategory::Water, GeometryLayer::Lines)]
#[case(InfrastructureCategory::Roads, GeometryLayer::Points)]
#[case(InfrastructureCategory::Road, GeometryLayer::Points)]
#[case(InfrastructureCategory::Rail, GeometryLayer::Multipolygons)]
fn unclassified_pairs_are_unsupported(
    #[case] category: InfrastructureCategory,
    #[case] layer: GeometryLayer,
    unit_bounds: Rect<f64>,
) {
    let source = StubExtract::new(Vec::new());
    let outcome = retrieve_clipped(&source, layer, category, unit_bounds);
    assert!(matches!(
        outcome,
        Err(FeatureError::UnsupportedCategory { .. })
    ));
    assert!(source.queries().is_empty(), "no query should have run");
}
