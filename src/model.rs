//! The data model shared across ingestion, selection, and result emission: scenes,
//! areas of interest, and the per-query outcome record.

use crate::polygon::Polygon;

/// A priced, polygon-footprinted satellite scene.
#[derive(Debug, Clone)]
pub struct Scene {
    pub id: String,
    pub price: f64,
    pub polygon: Polygon,
}

/// A target area of interest, with an optional per-AOI override of the discretization
/// grid's cell edge length.
#[derive(Debug, Clone)]
pub struct Aoi {
    pub id: String,
    pub polygon: Polygon,
    pub delta: Option<f64>,
}

/// The result of running the selector for one AOI: which scenes were chosen, at what
/// total price, and what fraction of the AOI ended up covered.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub aoi_id: String,
    pub possible: Vec<String>,
    pub chosen: Vec<String>,
    pub total_price: f64,
    pub coverage_ratio: f64,
}

impl SelectionResult {
    /// `possible` is every scene id that overlapped the AOI at all, independent of
    /// whether the greedy loop ended up committing it.
    pub fn new(
        aoi_id: String,
        possible: Vec<String>,
        chosen: Vec<String>,
        total_price: f64,
        aoi_measure: f64,
        covered: f64,
    ) -> Self {
        let coverage_ratio = if aoi_measure > 0.0 {
            (covered / aoi_measure).min(1.0)
        } else {
            0.0
        };
        Self {
            aoi_id,
            possible,
            chosen,
            total_price,
            coverage_ratio,
        }
    }
}

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn coverage_ratio_is_clamped_to_one() {
        let result = SelectionResult::new(
            "aoi-1".into(),
            vec!["s1".into()],
            vec!["s1".into()],
            5.0,
            1.0,
            1.2,
        );
        assert_eq!(result.coverage_ratio, 1.0);
    }

    #[test]
    fn coverage_ratio_is_zero_for_a_degenerate_aoi() {
        let result = SelectionResult::new("aoi-1".into(), vec![], vec![], 0.0, 0.0, 0.0);
        assert_eq!(result.coverage_ratio, 0.0);
    }
}
