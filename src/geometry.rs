//! Orientation predicates, signed area and line intersection on planar points.
//!
//! Every function here is a pure, stateless predicate or computation over
//! double-precision Cartesian coordinates - no allocation beyond the occasional
//! returned [`Point`], no shared state. Polygon-level operations (clipping,
//! triangulation) live in [`crate::geometry::clip`] and
//! [`crate::geometry::triangulate`] and are built entirely out of these primitives.

pub mod clip;
pub mod triangulate;

use crate::{Error, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(c: geo::Coord<f64>) -> Self {
        Point::new(c.x, c.y)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(p: Point) -> Self {
        geo::Coord { x: p.x, y: p.y }
    }
}

/// Cross product (z-component) of two vectors given as points relative to the origin.
pub fn cross(a: Point, b: Point) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Compares two magnitudes for equality within `ulp` units in the last place, scaled
/// to the larger of the two magnitudes. Used to decide whether a point lies exactly on
/// a line despite floating-point rounding in the cross product.
fn almost_equal(a: f64, b: f64, ulp: i64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let largest = a.abs().max(b.abs());
    diff <= largest * f64::EPSILON * ulp as f64
}

/// True when `p` lies on the infinite line through `a` and `b`.
pub fn onside(p: Point, a: Point, b: Point) -> bool {
    let u = b.sub(a);
    let v = p.sub(a);
    almost_equal(u.x * v.y, u.y * v.x, 1)
}

/// True when `p` is strictly to the left of the directed line `a -> b`.
pub fn inside(p: Point, a: Point, b: Point) -> bool {
    cross(b.sub(a), p.sub(a)) > 0.0 && !onside(p, a, b)
}

/// True when `p` is strictly to the right of the directed line `a -> b`.
pub fn outside(p: Point, a: Point, b: Point) -> bool {
    cross(b.sub(a), p.sub(a)) < 0.0 && !onside(p, a, b)
}

/// True when `p` is strictly inside `poly`, assumed simple and counter-clockwise.
pub fn inside_polygon(p: Point, poly: &[Point]) -> bool {
    let mut s = *poly.last().expect("polygon must have at least one vertex");
    for &e in poly {
        if !inside(p, s, e) {
            return false;
        }
        s = e;
    }
    true
}

/// True when `p` is strictly outside `poly` (crosses at least one edge's outside
/// half-plane).
pub fn outside_polygon(p: Point, poly: &[Point]) -> bool {
    let mut s = *poly.last().expect("polygon must have at least one vertex");
    for &e in poly {
        if outside(p, s, e) {
            return true;
        }
        s = e;
    }
    false
}

/// True when segment `ab` and segment `cd` cross each other's supporting lines.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    inside(a, c, d) == outside(b, c, d) && inside(c, a, b) == outside(d, a, b)
}

/// True when no two non-adjacent edges of `poly` intersect. O(n^2).
pub fn is_simple(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 4 {
        return true;
    }
    for i in 0..n {
        let (a, b) = (poly[i], poly[(i + 1) % n]);
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue; // edges 0 and n-1 share vertex 0
            }
            let (c, d) = (poly[j], poly[(j + 1) % n]);
            if segments_intersect(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

/// True when every triple of consecutive vertices of `poly` makes a left turn.
pub fn is_convex(poly: &[Point]) -> bool {
    let n = poly.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let prev = poly[(i + n - 1) % n];
        let cur = poly[i];
        let post = poly[(i + 1) % n];
        if !inside(post, prev, cur) {
            return false;
        }
    }
    true
}

/// Signed area via the shoelace formula. Positive for counter-clockwise polygons.
pub fn signed_area(poly: &[Point]) -> f64 {
    let mut acc = 0.0;
    let mut s = *poly.last().expect("polygon must have at least one vertex");
    for &e in poly {
        acc += cross(s, e);
        s = e;
    }
    0.5 * acc
}

/// Intersects the infinite lines through `a`-`b` and `c`-`d`.
///
/// Fails with [`Error::ParallelLines`] when the lines have no unique intersection.
pub fn line_line_intersection(a: Point, b: Point, c: Point, d: Point) -> Result<Point> {
    let denominator = cross(a, c) + cross(b, d) + cross(c, b) + cross(d, a);
    if denominator == 0.0 {
        return Err(Error::ParallelLines);
    }
    let n1 = cross(a, b);
    let n2 = cross(c, d);
    Ok(Point::new(
        (n1 * (c.x - d.x) - n2 * (a.x - b.x)) / denominator,
        (n1 * (c.y - d.y) - n2 * (a.y - b.y)) / denominator,
    ))
}

#[cfg(test)]
mod geometry_tests {
    use super::*;
    use crate::EPS;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn square_is_convex_and_simple() {
        let sq = square();
        assert!(is_convex(&sq));
        assert!(is_simple(&sq));
    }

    #[test]
    fn square_area_is_one() {
        assert!((signed_area(&square()) - 1.0).abs() < EPS);
    }

    #[test]
    fn area_is_rotation_invariant() {
        let sq = square();
        for i in 0..sq.len() {
            let mut rotated = sq[i..].to_vec();
            rotated.extend_from_slice(&sq[..i]);
            assert!((signed_area(&rotated) - 1.0).abs() < EPS);
            assert!(is_convex(&rotated));
            assert!(is_simple(&rotated));
        }
    }

    #[test]
    fn center_of_square_is_inside() {
        assert!(inside_polygon(Point::new(0.5, 0.5), &square()));
        assert!(!inside_polygon(Point::new(1.5, 0.5), &square()));
    }

    #[test]
    fn parallel_lines_error() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        let d = Point::new(1.0, 1.0);
        assert_eq!(line_line_intersection(a, b, c, d), Err(Error::ParallelLines));
    }

    #[test]
    fn non_convex_l_shape_fails_convex_test() {
        let l_shape = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert!(!is_convex(&l_shape));
        assert!(is_simple(&l_shape));
    }
}
