//! Decoder for knot mosaic strings into planar diagram (PD) codes
//!
//! A mosaic string spells out a square grid of knot tiles. Decoding builds the
//! grid together with a hidden rear layer that carries strands across the grid
//! edges, traces the single strand through every tile, and assembles the
//! crossings it meets into a PD code ready for an invariant engine.

#![forbid(unsafe_code)]

/// Strand tracing, PD assembly and the decoding pipeline
pub mod algorithm;
/// Outcome statistics for batches of mosaics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile catalog and two-layer mosaic grid
pub mod spatial;

pub use algorithm::assembler::PdCode;
pub use algorithm::decoder::{Decoding, decode};
pub use io::error::{MosaicError, Result};
