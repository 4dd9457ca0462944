//! Mosaic decoding pipeline: grid builder, strand tracer, PD assembler
//!
//! Each call works on its own grid and tracer state, so decoding is safe to
//! run concurrently on any number of mosaic strings.

use std::fmt;

use log::debug;

use crate::algorithm::assembler::{PdCode, assemble};
use crate::algorithm::tracer::{StrandTracer, Termination};
use crate::io::error::Result;
use crate::spatial::grid::MosaicGrid;

/// Classification of a well-formed mosaic
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decoding {
    /// Closed diagram with fewer than three crossings
    Unknot,
    /// Closed diagram with its PD code
    Knot(PdCode),
    /// The strand does not cover every front tile in one closed loop
    NotAKnot,
}

impl Decoding {
    /// Whether the mosaic encodes a single closed curve
    pub const fn is_closed_diagram(&self) -> bool {
        matches!(self, Self::Unknot | Self::Knot(_))
    }

    /// PD code of a knotted diagram
    pub const fn pd_code(&self) -> Option<&PdCode> {
        match self {
            Self::Knot(code) => Some(code),
            Self::Unknot | Self::NotAKnot => None,
        }
    }

    /// Short lowercase name of the classification
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknot => "unknot",
            Self::Knot(_) => "knot",
            Self::NotAKnot => "not a knot",
        }
    }
}

impl fmt::Display for Decoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Knot(code) => write!(f, "knot {code}"),
            other => write!(f, "{}", other.label()),
        }
    }
}

/// Classification together with trace statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    /// Final classification
    pub decoding: Decoding,
    /// Why the walk stopped
    pub termination: Termination,
    /// Crossing cells that became satisfied during the walk
    pub satisfied_crossings: usize,
    /// Value of the strand counter when the walk stopped
    pub strands_assigned: u32,
    /// Connections traced
    pub steps: usize,
}

/// Decode a mosaic string into its classification
///
/// # Errors
///
/// Returns a parse error for malformed strings and
/// [`MosaicError::NoStrand`](crate::MosaicError::NoStrand) for all-blank mosaics
pub fn decode(mosaic: &str) -> Result<Decoding> {
    decode_report(mosaic).map(|report| report.decoding)
}

/// Decode a mosaic string and keep the trace statistics
///
/// # Errors
///
/// Same as [`decode`]
pub fn decode_report(mosaic: &str) -> Result<DecodeReport> {
    let grid = MosaicGrid::parse(mosaic)?;
    decode_grid(&grid)
}

/// Trace an already built grid and classify it
///
/// # Errors
///
/// Returns [`MosaicError::NoStrand`](crate::MosaicError::NoStrand) if every
/// front tile is blank
pub fn decode_grid(grid: &MosaicGrid) -> Result<DecodeReport> {
    let outcome = StrandTracer::new(grid)?.run();

    let decoding = if outcome.is_closed_diagram() {
        assemble(&outcome.crossings, outcome.final_strand).map_or(Decoding::Unknot, Decoding::Knot)
    } else {
        Decoding::NotAKnot
    };
    debug!("{grid}: {decoding}");

    Ok(DecodeReport {
        decoding,
        termination: outcome.termination,
        satisfied_crossings: outcome.crossings.len(),
        strands_assigned: outcome.final_strand,
        steps: outcome.steps,
    })
}
