//! CSV readers for scene and AOI input files.
//!
//! Malformed rows are dropped rather than aborting the whole file: a bad scene
//! shouldn't take down a query over the other thousand that parsed fine. Each drop is
//! logged at `warn` so the operator can go fix the source file.

use crate::model::{Aoi, Scene};
use crate::polygon::Polygon;
use ::csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SceneRow {
    id: String,
    price: f64,
    polygon: String,
}

#[derive(Debug, Deserialize)]
struct AoiRow {
    id: String,
    polygon: String,
    delta: Option<f64>,
}

/// Reads scenes from a CSV file with an `id, price, polygon` header.
pub fn read_scenes<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Scene>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut scenes = Vec::new();
    for (line, record) in reader.deserialize::<SceneRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                log::warn!("skipping malformed scene row {}: {}", line + 2, err);
                continue;
            }
        };
        match row.polygon.parse::<Polygon>() {
            Ok(polygon) => scenes.push(Scene {
                id: row.id,
                price: row.price,
                polygon,
            }),
            Err(err) => log::warn!("skipping scene {}: invalid polygon ({})", row.id, err),
        }
    }
    Ok(scenes)
}

/// Reads areas of interest from a CSV file with an `id, polygon, delta` header.
/// `delta` may be left empty, in which case the caller's default grid granularity
/// applies.
pub fn read_aois<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Aoi>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut aois = Vec::new();
    for (line, record) in reader.deserialize::<AoiRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                log::warn!("skipping malformed aoi row {}: {}", line + 2, err);
                continue;
            }
        };
        match row.polygon.parse::<Polygon>() {
            Ok(polygon) => aois.push(Aoi {
                id: row.id,
                polygon,
                delta: row.delta,
            }),
            Err(err) => log::warn!("skipping aoi {}: invalid polygon ({})", row.id, err),
        }
    }
    Ok(aois)
}
