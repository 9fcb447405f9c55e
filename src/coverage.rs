//! The `CoverageState` abstraction shared by the discrete and continuous regimes.
//!
//! The two regimes differ only in the measure function and the residual-update
//! operator (see the crate's design notes, "Two regimes, one selector"); both are
//! expressed as implementations of [`CoverageState`] so [`crate::selector::select`] is
//! written once and is generic over the regime.

use crate::geometry::{clip, signed_area, Point};
use crate::grid::{CellSet, DiscretizeMode, Discretizer};
use crate::polygon::Polygon;
use crate::Result;

/// A scene's residual contribution to AOI coverage at a point in the selection loop.
pub trait CoverageState: Clone {
    /// The measure (cell count or area) of what is still uncovered.
    fn measure(&self) -> f64;

    /// True once this candidate has nothing left to contribute and should be dropped.
    fn is_spent(&self) -> bool;

    /// Removes whatever `committed` just covered from `self`.
    fn subtract(&mut self, committed: &Self) -> Result<()>;
}

/// Residual coverage as a set of grid-cell identifiers.
#[derive(Debug, Clone)]
pub struct DiscreteCoverage {
    cells: CellSet,
}

impl DiscreteCoverage {
    /// Builds the initial residual for `scene`: the scene's cells, clipped to the
    /// AOI's bounding box and discretized exclusively, intersected with the AOI's own
    /// (inclusive) cell set.
    pub fn for_scene(
        scene: &Polygon,
        aoi: &Polygon,
        aoi_cells: &CellSet,
        discretizer: &Discretizer,
    ) -> Result<Self> {
        let (min_x, min_y, max_x, max_y) = aoi.bounding_box();
        let bbox = [
            Point::new(min_x, min_y),
            Point::new(max_x, min_y),
            Point::new(max_x, max_y),
            Point::new(min_x, max_y),
        ];
        let clipped = clip::intersection(scene.vertices(), &bbox)?;
        let scene_cells = match Polygon::new(clipped) {
            Ok(poly) => discretizer.discretize(&poly, DiscretizeMode::Exclusive)?,
            Err(_) => CellSet::new(),
        };
        let cells = scene_cells.intersection(aoi_cells).copied().collect();
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &CellSet {
        &self.cells
    }
}

impl CoverageState for DiscreteCoverage {
    fn measure(&self) -> f64 {
        self.cells.len() as f64
    }

    fn is_spent(&self) -> bool {
        self.cells.is_empty()
    }

    fn subtract(&mut self, committed: &Self) -> Result<()> {
        self.cells.retain(|c| !committed.cells.contains(c));
        Ok(())
    }
}

/// Residual coverage as a list of sub-polygons clipped to the AOI.
#[derive(Debug, Clone)]
pub struct ContinuousCoverage {
    polys: Vec<Vec<Point>>,
}

const CONTINUOUS_EMPTY_THRESHOLD: f64 = 1e-3;
const CONTINUOUS_RESIDUAL_FLOOR: f64 = 1e-4;

impl ContinuousCoverage {
    /// Builds the initial residual for `scene`: its intersection with the (convex)
    /// AOI.
    pub fn for_scene(scene: &Polygon, aoi: &Polygon) -> Result<Self> {
        let inter = clip::intersection(scene.vertices(), aoi.vertices())?;
        let polys = if inter.len() >= 3 && signed_area(&inter).abs() > CONTINUOUS_RESIDUAL_FLOOR {
            vec![inter]
        } else {
            Vec::new()
        };
        Ok(Self { polys })
    }

    pub fn polys(&self) -> &[Vec<Point>] {
        &self.polys
    }
}

impl CoverageState for ContinuousCoverage {
    fn measure(&self) -> f64 {
        self.polys.iter().map(|p| signed_area(p).abs()).sum()
    }

    fn is_spent(&self) -> bool {
        self.measure() < CONTINUOUS_EMPTY_THRESHOLD
    }

    fn subtract(&mut self, committed: &Self) -> Result<()> {
        let mut residual = std::mem::take(&mut self.polys);
        for committed_piece in &committed.polys {
            let mut next = Vec::new();
            for piece in &residual {
                for d in clip::difference(piece, committed_piece)? {
                    if signed_area(&d).abs() >= CONTINUOUS_RESIDUAL_FLOOR {
                        next.push(d);
                    }
                }
            }
            residual = next;
        }
        self.polys = residual;
        Ok(())
    }
}

#[cfg(test)]
mod coverage_tests {
    use super::*;

    #[test]
    fn discrete_residual_of_fully_containing_scene_equals_aoi_cells() {
        let aoi: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let scene: Polygon = "[[-1,-1],[2,-1],[2,2],[-1,2]]".parse().unwrap();
        let d = Discretizer::new(0.5).unwrap();
        let aoi_cells = d.discretize(&aoi, DiscretizeMode::Inclusive).unwrap();
        let residual = DiscreteCoverage::for_scene(&scene, &aoi, &aoi_cells, &d).unwrap();
        assert_eq!(residual.cells(), &aoi_cells);
    }

    #[test]
    fn discrete_subtract_removes_covered_cells() {
        let aoi: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let left: Polygon = "[[0,0],[0.5,0],[0.5,1],[0,1]]".parse().unwrap();
        let whole: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let d = Discretizer::new(0.5).unwrap();
        let aoi_cells = d.discretize(&aoi, DiscretizeMode::Inclusive).unwrap();
        let mut left_state = DiscreteCoverage::for_scene(&left, &aoi, &aoi_cells, &d).unwrap();
        let whole_state = DiscreteCoverage::for_scene(&whole, &aoi, &aoi_cells, &d).unwrap();
        left_state.subtract(&whole_state).unwrap();
        assert!(left_state.is_spent());
    }

    #[test]
    fn continuous_residual_area_matches_intersection() {
        let aoi: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let left: Polygon = "[[0,0],[0.5,0],[0.5,1],[0,1]]".parse().unwrap();
        let state = ContinuousCoverage::for_scene(&left, &aoi).unwrap();
        assert!((state.measure() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn continuous_subtract_leaves_remaining_area() {
        let aoi: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let whole: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let left: Polygon = "[[0,0],[0.5,0],[0.5,1],[0,1]]".parse().unwrap();
        let mut whole_state = ContinuousCoverage::for_scene(&whole, &aoi).unwrap();
        let left_state = ContinuousCoverage::for_scene(&left, &aoi).unwrap();
        whole_state.subtract(&left_state).unwrap();
        assert!((whole_state.measure() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn disjoint_scene_has_no_continuous_residual() {
        let aoi: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let far: Polygon = "[[10,10],[11,10],[11,11],[10,11]]".parse().unwrap();
        let state = ContinuousCoverage::for_scene(&far, &aoi).unwrap();
        assert!(state.is_spent());
    }
}
