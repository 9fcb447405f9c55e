//! Ingestion of scenes and areas of interest from CSV.

pub mod csv;
