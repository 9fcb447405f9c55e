//! `Point`, `Polygon`, `Triangle`, and the polygon text grammar:
//!
//! ```text
//! polygon := '[' point (',' point)* ']'
//! point   := '[' number ',' number ']'
//! number  := optional '-', digits, optional '.' digits
//! ```
//!
//! Whitespace is ignored; the parser is forgiving of interior whitespace but strict
//! about brackets.

pub use crate::geometry::Point;
use crate::geometry::signed_area;
use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A simple, counter-clockwise polygon with no repeated closing vertex.
///
/// Construction validates orientation and vertex count but, per the crate's
/// non-goals, does not reject self-intersecting input - callers that need that
/// guarantee should call [`Polygon::is_simple`] explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon from a CCW vertex list.
    ///
    /// Fails with [`Error::InvalidPolygon`] if fewer than 3 vertices are given or the
    /// signed area is not positive (the list is not CCW).
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::InvalidPolygon(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        if signed_area(&vertices) <= 0.0 {
            return Err(Error::InvalidPolygon(
                "polygon vertices must be counter-clockwise (positive signed area)".into(),
            ));
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Geometric area (the shoelace formula is positive for a valid CCW polygon).
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    pub fn is_convex(&self) -> bool {
        crate::geometry::is_convex(&self.vertices)
    }

    pub fn is_simple(&self) -> bool {
        crate::geometry::is_simple(&self.vertices)
    }

    pub fn contains_point(&self, p: Point) -> bool {
        crate::geometry::inside_polygon(p, &self.vertices)
    }

    /// Intersects `self` (the clippee) against `clipper`, which must be convex.
    pub fn intersection(&self, clipper: &Polygon) -> Result<Vec<Point>> {
        crate::geometry::clip::intersection(&self.vertices, &clipper.vertices)
    }

    /// Subtracts `clipper`, which must be convex, from `self`.
    pub fn difference(&self, clipper: &Polygon) -> Result<Vec<Vec<Point>>> {
        crate::geometry::clip::difference(&self.vertices, &clipper.vertices)
    }

    /// Triangulates `self` via ear-clipping.
    pub fn triangulate(&self) -> Result<Vec<Triangle>> {
        let triangles = crate::geometry::triangulate::triangulate(&self.vertices)?;
        Ok(triangles.into_iter().map(Triangle).collect())
    }

    /// Axis-aligned bounding box, seeded explicitly from the first vertex (never left
    /// at an uninitialized sentinel - see the crate's design notes on this historical
    /// bug in the reference implementation).
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let first = self.vertices[0];
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for v in &self.vertices[1..] {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        (min_x, min_y, max_x, max_y)
    }
}

/// A CCW triangle, produced by [`Polygon::triangulate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    pub fn area(&self) -> f64 {
        signed_area(&self.0)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}, {}]", v.x, v.y)?;
        }
        write!(f, "]")
    }
}

impl FromStr for Polygon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Polygon::new(parse_points(s)?)
    }
}

/// Parses the bracketed `[[x1, y1], [x2, y2], ...]` vertex-list grammar.
pub fn parse_points(s: &str) -> Result<Vec<Point>> {
    let s = s.trim();
    let invalid = |msg: &str| Error::InvalidPolygon(format!("{msg}: {s}"));

    let inner = s
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| invalid("polygon literal must be wrapped in brackets"))?;

    let mut points = Vec::new();
    let mut depth = 0i32;
    let mut start = None;
    for (i, c) in inner.char_indices() {
        match c {
            '[' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            ']' => {
                depth -= 1;
                if depth == 0 {
                    let Some(s0) = start.take() else {
                        return Err(invalid("unbalanced brackets in polygon literal"));
                    };
                    points.push(parse_point(&inner[s0..=i])?);
                }
                if depth < 0 {
                    return Err(invalid("unbalanced brackets in polygon literal"));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(invalid("unbalanced brackets in polygon literal"));
    }
    Ok(points)
}

fn parse_point(s: &str) -> Result<Point> {
    let invalid = || Error::InvalidPolygon(format!("malformed point literal: {s}"));
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let mut parts = inner.splitn(2, ',');
    let x = parts
        .next()
        .ok_or_else(invalid)?
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid())?;
    let y = parts
        .next()
        .ok_or_else(invalid)?
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod polygon_tests {
    use super::*;

    #[test]
    fn parses_unit_square() {
        let points = parse_points("[[0,0],[1,0],[1,1],[0,1]]").unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], Point::new(1.0, 1.0));
    }

    #[test]
    fn parser_is_forgiving_of_whitespace() {
        let a = parse_points("[[0,0],[1,0],[1,1],[0,1]]").unwrap();
        let b = parse_points(" [ [0, 0] , [1, 0] , [1, 1] , [0, 1] ] ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parses_negative_and_decimal_coordinates() {
        let points = parse_points("[[-1.5,2.25],[0,-0.5]]").unwrap();
        assert_eq!(points[0], Point::new(-1.5, 2.25));
        assert_eq!(points[1], Point::new(0.0, -0.5));
    }

    #[test]
    fn round_trips_through_display() {
        let original = "[[0, 0], [1, 0], [1, 1], [0, 1]]";
        let poly: Polygon = original.parse().unwrap();
        assert_eq!(poly.to_string(), original);
    }

    #[test]
    fn rejects_unbalanced_brackets() {
        assert!(parse_points("[[0,0],[1,0]").is_err());
    }

    #[test]
    fn rejects_clockwise_vertex_order() {
        let cw = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        assert!(Polygon::new(cw).is_err());
    }

    #[test]
    fn unit_square_area_is_rotation_invariant() {
        let vertices = parse_points("[[0,0],[1,0],[1,1],[0,1]]").unwrap();
        for i in 0..vertices.len() {
            let mut rotated = vertices[i..].to_vec();
            rotated.extend_from_slice(&vertices[..i]);
            let poly = Polygon::new(rotated).unwrap();
            assert!((poly.area() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn hexagon_area_matches_known_constant() {
        let s = "[[1, 0], \
                  [0.5, 0.8660254037844386], \
                  [-0.5, 0.8660254037844386], \
                  [-1, 0], \
                  [-0.5, -0.8660254037844386], \
                  [0.5, -0.8660254037844386]]";
        let vertices = parse_points(s).unwrap();
        for i in 0..vertices.len() {
            let mut rotated = vertices[i..].to_vec();
            rotated.extend_from_slice(&vertices[..i]);
            let poly = Polygon::new(rotated).unwrap();
            assert!((poly.area() - 2.598_076_211_353_316).abs() < 1e-10);
        }
    }

    #[test]
    fn triangulation_conserves_area() {
        let poly: Polygon = "[[0,0],[2,0],[2,1],[1,1],[1,2],[0,2]]".parse().unwrap();
        let expected = poly.area();
        let total: f64 = poly.triangulate().unwrap().iter().map(|t| t.area().abs()).sum();
        assert!((total - expected).abs() < 1e-9);
    }
}
