//! Line-delimited JSON emission of [`SelectionResult`]s.

use crate::model::SelectionResult;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct ResultRecord<'a> {
    aoi: &'a str,
    possible: &'a [String],
    result: &'a [String],
    #[serde(rename = "totalPrice")]
    total_price: f64,
    #[serde(rename = "coverageRatio")]
    coverage_ratio: f64,
}

impl<'a> From<&'a SelectionResult> for ResultRecord<'a> {
    fn from(r: &'a SelectionResult) -> Self {
        Self {
            aoi: &r.aoi_id,
            possible: &r.possible,
            result: &r.chosen,
            total_price: r.total_price,
            coverage_ratio: r.coverage_ratio,
        }
    }
}

/// Serializes one result as a single line of JSON (no trailing newline).
pub fn to_json_line(result: &SelectionResult) -> serde_json::Result<String> {
    serde_json::to_string(&ResultRecord::from(result))
}

/// Writes every result to `out`, one JSON object per line.
pub fn write_jsonl<W: Write>(mut out: W, results: &[SelectionResult]) -> anyhow::Result<()> {
    for result in results {
        writeln!(out, "{}", to_json_line(result)?)?;
    }
    Ok(())
}
