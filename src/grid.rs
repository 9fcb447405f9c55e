//! Axis-aligned grid cells and the discretizer used by the discrete coverage regime.

use crate::geometry::{clip, Point};
use crate::polygon::Polygon;
use crate::{Error, Result};
use std::collections::HashSet;

/// An axis-aligned grid cell at integer lattice position `(i, j)` with edge length
/// `delta`. Its footprint is the square `[i*delta, (i+1)*delta] x [j*delta,
/// (j+1)*delta]`. Equality and hashing are on `(i, j, delta)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub i: i64,
    pub j: i64,
    delta_bits: u64,
}

impl GridCell {
    fn new(i: i64, j: i64, delta: f64) -> Self {
        Self {
            i,
            j,
            delta_bits: delta.to_bits(),
        }
    }

    pub fn delta(&self) -> f64 {
        f64::from_bits(self.delta_bits)
    }

    /// The four corners of this cell's square footprint, CCW from the origin corner.
    pub fn footprint(&self) -> [Point; 4] {
        let d = self.delta();
        let (x0, y0) = (self.i as f64 * d, self.j as f64 * d);
        [
            Point::new(x0, y0),
            Point::new(x0 + d, y0),
            Point::new(x0 + d, y0 + d),
            Point::new(x0, y0 + d),
        ]
    }
}

/// Which cells of a polygon's bounding box are kept during discretization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscretizeMode {
    /// Any cell whose square intersects the polygon's interior.
    Inclusive,
    /// Only cells fully contained in the polygon.
    Exclusive,
}

/// A cell-id set, parameterized by a fixed `delta` bound at construction.
pub type CellSet = HashSet<GridCell>;

/// Maps polygons to grid-cell identifiers at a fixed cell edge length.
pub struct Discretizer {
    delta: f64,
}

impl Discretizer {
    pub fn new(delta: f64) -> Result<Self> {
        if !(delta > 0.0) {
            return Err(Error::InvalidDelta(delta));
        }
        Ok(Self { delta })
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Integer-lattice-aligned bounding box of `poly` at this discretizer's
    /// granularity: `(min_i, min_j, max_i, max_j)`, where `max_i`/`max_j` are
    /// exclusive (one past the last covered cell index).
    pub fn lattice_bounds(&self, poly: &Polygon) -> (i64, i64, i64, i64) {
        let (min_x, min_y, max_x, max_y) = poly.bounding_box();
        (
            (min_x / self.delta).floor() as i64,
            (min_y / self.delta).floor() as i64,
            (max_x / self.delta).ceil() as i64,
            (max_y / self.delta).ceil() as i64,
        )
    }

    /// Discretizes `poly` into a cell-id set under the given mode.
    pub fn discretize(&self, poly: &Polygon, mode: DiscretizeMode) -> Result<CellSet> {
        let (min_i, min_j, max_i, max_j) = self.lattice_bounds(poly);
        let mut cells = CellSet::new();
        for i in min_i..max_i {
            for j in min_j..max_j {
                let cell = GridCell::new(i, j, self.delta);
                let keep = match mode {
                    DiscretizeMode::Inclusive => self.cell_intersects(&cell, poly)?,
                    DiscretizeMode::Exclusive => self.cell_inside(&cell, poly)?,
                };
                if keep {
                    cells.insert(cell);
                }
            }
        }
        Ok(cells)
    }

    /// `square` is always convex, so it is used as the Sutherland-Hodgman clipper
    /// regardless of whether `poly` itself is convex.
    fn clip_to_cell(&self, cell: &GridCell, poly: &Polygon) -> Result<Vec<Point>> {
        clip::intersection(poly.vertices(), &cell.footprint())
    }

    fn cell_intersects(&self, cell: &GridCell, poly: &Polygon) -> Result<bool> {
        let clipped = self.clip_to_cell(cell, poly)?;
        Ok(!clipped.is_empty() && crate::geometry::signed_area(&clipped).abs() > 1e-12)
    }

    fn cell_inside(&self, cell: &GridCell, poly: &Polygon) -> Result<bool> {
        let clipped = self.clip_to_cell(cell, poly)?;
        if clipped.is_empty() {
            return Ok(false);
        }
        let cell_area = self.delta * self.delta;
        let clipped_area = crate::geometry::signed_area(&clipped).abs();
        Ok((clipped_area - cell_area).abs() < 1e-9)
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn unit_square_inclusive_discretization_at_half_delta() {
        let aoi: Polygon = "[[0,0],[1,0],[1,1],[0,1]]".parse().unwrap();
        let d = Discretizer::new(0.5).unwrap();
        let cells = d.discretize(&aoi, DiscretizeMode::Inclusive).unwrap();
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn rejects_non_positive_delta() {
        assert!(Discretizer::new(0.0).is_err());
        assert!(Discretizer::new(-1.0).is_err());
    }

    #[test]
    fn exclusive_mode_excludes_partial_cells() {
        // A quarter-circle-ish wedge occupying roughly the lower-left quadrant of a
        // 2x2 box: only the fully-contained cell should survive exclusive mode.
        let wedge: Polygon = "[[0,0],[2,0],[1,1],[0,1]]".parse().unwrap();
        let d = Discretizer::new(1.0).unwrap();
        let cells = d.discretize(&wedge, DiscretizeMode::Exclusive).unwrap();
        assert_eq!(cells.len(), 1);
        assert!(cells.contains(&GridCell::new(0, 0, 1.0)));
    }

    #[test]
    fn cell_identity_is_by_i_j_delta() {
        let a = GridCell::new(1, 2, 0.5);
        let b = GridCell::new(1, 2, 0.5);
        let c = GridCell::new(1, 2, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn bbox_is_seeded_from_first_vertex_not_a_sentinel() {
        // All-negative polygon: a bbox seeded at 0 would corrupt min_x/min_y.
        let poly: Polygon = "[[-5,-5],[-3,-5],[-3,-3],[-5,-3]]".parse().unwrap();
        let (min_x, min_y, max_x, max_y) = poly.bounding_box();
        assert_eq!((min_x, min_y, max_x, max_y), (-5.0, -5.0, -3.0, -3.0));
    }
}
