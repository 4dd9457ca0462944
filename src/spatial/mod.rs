//! Spatial data structures for knot mosaics
//!
//! This module contains:
//! - The tile catalog with per-tile connection semantics
//! - The two-layer mosaic grid and its edge-wrapping adjacency

/// Two-layer mosaic grid built from a mosaic string
pub mod grid;
/// Tile types and their valid strand connections
pub mod tiles;

pub use grid::MosaicGrid;
