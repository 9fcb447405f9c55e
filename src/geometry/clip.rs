//! Sutherland-Hodgman polygon clipping: intersection and difference against a convex
//! clipper.
//!
//! Both routines walk the clipper edge by edge and rebuild the working vertex list
//! against each edge in turn, the way [`crate::geometry`]'s sibling module hand-rolls
//! clipping over raw coordinates rather than reaching for a general boolean-ops crate.

use super::{inside, line_line_intersection, outside, Point};
use crate::{Error, Result};

/// Clips `clippee` to the inside of convex polygon `clipper`, returning the
/// intersection polygon's vertices.
///
/// Fails with [`Error::NonConvexClipper`] if `clipper` is not convex. An empty result
/// means `clippee` and `clipper` do not overlap.
pub fn intersection(clippee: &[Point], clipper: &[Point]) -> Result<Vec<Point>> {
    if !super::is_convex(clipper) {
        return Err(Error::NonConvexClipper);
    }

    let mut output_list = clippee.to_vec();
    let mut s2 = *clipper.last().unwrap();
    for &e2 in clipper {
        let input_list = std::mem::take(&mut output_list);
        if input_list.is_empty() {
            break;
        }
        let mut s1 = *input_list.last().unwrap();
        for &e1 in &input_list {
            if inside(e1, s2, e2) {
                if outside(s1, s2, e2) {
                    output_list.push(line_line_intersection(s1, e1, s2, e2)?);
                }
                output_list.push(e1);
            } else if outside(e1, s2, e2) && inside(s1, s2, e2) {
                output_list.push(line_line_intersection(s1, e1, s2, e2)?);
            }
            s1 = e1;
        }
        s2 = e2;
    }
    Ok(output_list)
}

/// Subtracts convex polygon `clipper` from `clippee`, returning the difference as a
/// list of (generally non-convex) offcut polygons - one per clipper edge that actually
/// cuts off part of `clippee`.
///
/// Fails with [`Error::NonConvexClipper`] if `clipper` is not convex.
///
/// **Limitation, preserved from the reference implementation**: an offcut that is
/// itself non-convex is silently dropped rather than returned. When the clipper is
/// convex but cuts through a concavity of `clippee`, this can make the returned
/// difference a strict under-approximation of the true set-theoretic difference. A
/// general polygon-clipping engine would not have this limitation; this routine keeps
/// the classical Sutherland-Hodgman algorithm and its single-convex-clipper
/// assumption instead.
pub fn difference(clippee: &[Point], clipper: &[Point]) -> Result<Vec<Vec<Point>>> {
    if !super::is_convex(clipper) {
        return Err(Error::NonConvexClipper);
    }

    let mut ret = Vec::new();
    let mut output_list = clippee.to_vec();
    let mut s2 = *clipper.last().unwrap();
    for &e2 in clipper {
        let mut offcut = Vec::new();
        let input_list = std::mem::take(&mut output_list);
        let mut s1 = *input_list.last().unwrap_or(&s2);
        for &e1 in &input_list {
            if inside(e1, s2, e2) {
                if !inside(s1, s2, e2) {
                    let p = line_line_intersection(s1, e1, s2, e2)?;
                    output_list.push(p);
                    offcut.push(p);
                }
                output_list.push(e1);
            } else {
                if inside(s1, s2, e2) {
                    let p = line_line_intersection(s1, e1, s2, e2)?;
                    output_list.push(p);
                    offcut.push(p);
                }
                offcut.push(e1);
            }
            s1 = e1;
        }
        s2 = e2;
        if !offcut.is_empty() && super::is_convex(&offcut) {
            ret.push(offcut);
        }
    }
    if output_list.is_empty() {
        // clippee never intersected the clipper at all: the difference is clippee itself.
        ret.clear();
        ret.push(clippee.to_vec());
    }
    Ok(ret)
}
