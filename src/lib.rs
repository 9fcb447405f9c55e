//!
//! # aoicover
//!
//! Area-of-Interest coverage selection: given a polygon of interest and a catalogue of
//! priced satellite scenes (each a polygon footprint), choose a minimal-cost subset of
//! scenes whose union covers the area of interest.
//!
//! The problem is an instance of weighted set cover and is NP-hard; the crate ships an
//! approximation engine based on the classical greedy weighted set-cover algorithm,
//! instantiated in two geometric regimes - a **discrete** regime that reduces coverage
//! to set cover over grid-cell identifiers, and a **continuous** regime that tracks
//! coverage as residual polygonal regions.
//!
//! ## Performance
//!
//! The geometry kernel and the discretizer are pure and stateless, so a caller may run
//! independent queries concurrently as long as each query owns its own cloned scene
//! catalogue; see [`selector::select`]. The `aoicover` binary does exactly this with
//! [rayon](https://docs.rs/rayon/latest/rayon/) when more than one AOI is loaded.
//!
//! **This crate does not attempt geodesic correction.** All geometry is planar,
//! Cartesian, and assumed simple; self-intersecting input polygons and non-convex
//! clippers are rejected rather than silently misinterpreted.

/// The computational-geometry kernel: orientation predicates, signed area,
/// Sutherland-Hodgman clipping, and ear-clipping triangulation.
pub mod geometry;

/// `Point`, `Polygon`, `Triangle` and the polygon text grammar.
pub mod polygon;

/// Axis-aligned grid cells and the discretizer used by the discrete coverage regime.
pub mod grid;

/// `AOI`, `Scene`, and the `CoverageState` abstraction shared by both regimes.
pub mod coverage;

/// The greedy weighted set-cover selection loop.
pub mod selector;

/// Input/output data model (`AOI`, `Scene`, `SelectionResult`) and CSV ingestion.
pub mod model;

/// Result assembly and line-delimited JSON emission.
pub mod result;

/// CSV ingestion for scenes and AOIs.
pub mod io;

use thiserror::Error;

/// Errors surfaced at the query boundary.
///
/// Parse errors for individual CSV rows are not represented here - those are logged
/// and the offending row is dropped, per the crate's error-handling policy. This enum
/// covers the conditions that are fatal for a whole query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A clipper polygon passed to intersection or difference failed the convexity
    /// test.
    #[error("clipper polygon is not convex")]
    NonConvexClipper,
    /// Ear-clipping could not find an eartip, which implies the input polygon is not
    /// simple.
    #[error("triangulation stuck: no eartip found in polygon with {0} vertices remaining")]
    DegenerateTriangulation(usize),
    /// Two segments passed to line-line intersection are parallel.
    #[error("parallel lines have no unique intersection")]
    ParallelLines,
    /// A polygon literal or CSV row failed to parse or validate.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),
    /// `delta` was not positive.
    #[error("delta must be positive, got {0}")]
    InvalidDelta(f64),
    /// A scene or AOI id could not be resolved against the loaded catalogue.
    #[error("unknown scene id: {0}")]
    UnknownScene(String),
}

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The coverage regime a query runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Coverage reduces to set cover over axis-aligned grid cells.
    Discrete,
    /// Coverage is tracked as exact residual polygonal regions.
    Continuous,
}

#[cfg(test)]
const EPS: f64 = 1e-9;
