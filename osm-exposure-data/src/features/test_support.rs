//! Shared fixtures for query and retrieval tests.
use std::cell::RefCell;

use geo::{Geometry, Point};

use super::driver::{FeatureSource, RawFeature, RecordOutcome, SkipReason};
use super::error::FeatureError;

/// Stub [`FeatureSource`] replaying canned record outcomes.
///
/// Records every query it receives so query construction is observable from
/// category-level tests.
#[derive(Debug, Default)]
pub struct StubExtract {
    outcomes: Vec<RecordOutcome>,
    queries: RefCell<Vec<String>>,
}

impl StubExtract {
    pub fn new(outcomes: Vec<RecordOutcome>) -> Self {
        Self {
            outcomes,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Queries observed so far, in execution order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl FeatureSource for StubExtract {
    fn run_query(
        &self,
        query: &str,
        _fields: &[String],
    ) -> Result<Vec<RecordOutcome>, FeatureError> {
        self.queries.borrow_mut().push(query.to_owned());
        Ok(self.outcomes.clone())
    }
}

/// A decoded point record with an id and one tag value.
pub fn point_record(osm_id: &str, value: Option<&str>, x: f64, y: f64) -> RecordOutcome {
    RecordOutcome::Feature(RawFeature {
        fields: vec![
            Some(osm_id.to_owned()),
            value.map(std::borrow::ToOwned::to_owned),
        ],
        geometry: Geometry::Point(Point::new(x, y)),
    })
}

/// A record whose geometry failed to decode.
pub fn undecodable_record() -> RecordOutcome {
    RecordOutcome::Skipped(SkipReason::GeometryDecode)
}
