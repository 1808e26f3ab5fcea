//! Feature retrieval: query, iterate, and assemble output tables.

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use super::driver::{FeatureSource, RecordOutcome};
use super::error::FeatureError;
use super::query::{ConstraintSet, GeometryLayer, build_query};
use super::table::{FeatureRow, FeatureTable};

/// Retrieve `columns` for features on `layer` matching `constraints`.
///
/// Records whose first requested column is null are filtered out, mirroring
/// the non-null assertion the query itself carries. Records the driver
/// could not fully decode are skipped and counted; one bad record never
/// fails the whole retrieval. Zero matches yield the empty
/// `[osm_id, geometry]` table; an unopenable source is a hard error, never
/// an empty result.
pub fn retrieve(
    source: &dyn FeatureSource,
    layer: GeometryLayer,
    columns: &[&str],
    constraints: &ConstraintSet,
) -> Result<FeatureTable, FeatureError> {
    let query = build_query(layer, columns, constraints)?;
    let mut fields = Vec::with_capacity(columns.len() + 1);
    fields.push("osm_id".to_owned());
    fields.extend(columns.iter().map(|column| (*column).to_owned()));

    let outcomes = source.run_query(&query, &fields)?;

    let bar = ProgressBar::new(outcomes.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {msg:>10} [{bar:40}] {pos}/{len}")
            .expect("progress template is valid")
            .progress_chars("=> "),
    );
    bar.set_message("extract");

    let mut table = FeatureTable::with_columns(columns);
    let mut skipped = 0usize;
    for outcome in outcomes {
        bar.inc(1);
        match outcome {
            RecordOutcome::Skipped(_) => skipped += 1,
            RecordOutcome::Feature(raw) => {
                let mut raw_fields = raw.fields.into_iter();
                let osm_id = raw_fields.next().flatten();
                let values: Vec<Option<String>> = raw_fields.collect();
                if values.first().is_none_or(Option::is_none) {
                    continue;
                }
                table.push(FeatureRow {
                    osm_id,
                    values,
                    geometry: raw.geometry,
                });
            }
        }
    }
    bar.finish_and_clear();

    if skipped > 0 {
        warn!("skipped {skipped} features while reading {layer}");
    }
    if table.is_empty() {
        info!("no features matched on {layer}, returning empty table");
        return Ok(FeatureTable::empty());
    }
    Ok(table)
}
