//! Ear-clipping triangulation of a simple polygon.
//!
//! Vertices are tagged `Reflex`, `Convex`, or `EarTip` and held in an index-based
//! doubly-linked ring (a `Vec` of records with explicit `prev`/`next` indices) rather
//! than a pointer-linked list, per the crate's "no pointer-linked vertex lists"
//! convention. The main loop repeatedly removes an eartip, emits a triangle, and
//! reclassifies only the two freed neighbors.

use super::{cross, inside_polygon, Point};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Convex,
    Reflex,
    EarTip,
}

struct Vertex {
    p: Point,
    tag: Tag,
    prev: usize,
    next: usize,
    alive: bool,
}

/// Triangulates a simple polygon, returning CCW triangles as `[Point; 3]` whose areas
/// sum to the polygon's area.
///
/// Fails with [`Error::DegenerateTriangulation`] if no eartip can be found while more
/// than two vertices remain, which implies the input polygon is not simple.
pub fn triangulate(poly: &[Point]) -> Result<Vec<[Point; 3]>> {
    let n = poly.len();
    if n < 3 {
        return Ok(Vec::new());
    }
    if n == 3 {
        return Ok(vec![[poly[0], poly[1], poly[2]]]);
    }

    let mut vs: Vec<Vertex> = poly
        .iter()
        .enumerate()
        .map(|(i, &p)| Vertex {
            p,
            tag: Tag::Convex,
            prev: (i + n - 1) % n,
            next: (i + 1) % n,
            alive: true,
        })
        .collect();

    let is_reflex = |vs: &[Vertex], cur: usize, pre: usize, pst: usize| {
        cross(vs[cur].p.sub(vs[pre].p), vs[pst].p.sub(vs[pre].p)) < 0.0
    };

    let no_reflex_inside = |vs: &[Vertex], cur: usize, pre: usize, pst: usize| {
        let tri = [vs[pre].p, vs[cur].p, vs[pst].p];
        vs.iter()
            .all(|v| !v.alive || v.tag != Tag::Reflex || !inside_polygon(v.p, &tri))
    };

    let update_reflex = |vs: &mut [Vertex], cur: usize| {
        let (pre, pst) = (vs[cur].prev, vs[cur].next);
        if is_reflex(vs, cur, pre, pst) {
            vs[cur].tag = Tag::Reflex;
        } else if vs[cur].tag == Tag::Reflex {
            vs[cur].tag = Tag::Convex;
        }
    };

    let update_eartip = |vs: &mut [Vertex], cur: usize| {
        if vs[cur].tag != Tag::Reflex {
            let (pre, pst) = (vs[cur].prev, vs[cur].next);
            vs[cur].tag = if no_reflex_inside(vs, cur, pre, pst) {
                Tag::EarTip
            } else {
                Tag::Convex
            };
        }
    };

    for i in 0..n {
        update_reflex(&mut vs, i);
    }
    for i in 0..n {
        update_eartip(&mut vs, i);
    }

    let mut remaining = n;
    let mut triangles = Vec::with_capacity(n - 2);
    while remaining > 2 {
        let eartip = vs
            .iter()
            .position(|v| v.alive && v.tag == Tag::EarTip)
            .ok_or(Error::DegenerateTriangulation(remaining))?;

        let (pre, pst) = (vs[eartip].prev, vs[eartip].next);
        triangles.push([vs[pre].p, vs[eartip].p, vs[pst].p]);

        vs[eartip].alive = false;
        vs[pre].next = pst;
        vs[pst].prev = pre;
        remaining -= 1;

        update_reflex(&mut vs, pre);
        update_reflex(&mut vs, pst);
        update_eartip(&mut vs, pre);
        update_eartip(&mut vs, pst);
    }

    Ok(triangles)
}
