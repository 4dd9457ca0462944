//! Crossing records and planar diagram (PD) code assembly
//!
//! Crossing slots are indexed by face, which walks a tile's sides
//! counterclockwise starting from the right side. A PD tuple must start at the
//! incoming under-strand, so each record is rotated according to its tile's
//! handedness and the direction its under-strand was traced in.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::io::configuration::MIN_KNOTTED_CROSSINGS;
use crate::spatial::grid::Position;
use crate::spatial::tiles::{Face, TileType};

/// One PD tuple: four strand labels around a crossing
pub type PdTuple = [u32; 4];

/// Strand labels recorded at one satisfied crossing cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingRecord {
    /// Cell holding the crossing
    pub position: Position,
    /// Crossing tile type
    pub tile: TileType,
    /// Strand label per face slot
    pub strands: [u32; 4],
    /// Arrival headings traced through the cell, per face slot
    pub entries: [bool; 4],
}

impl CrossingRecord {
    /// Left rotation that brings the incoming under-strand to the front
    ///
    /// [`TileType::VerticalOver`] carries its under-strand horizontally, every
    /// other crossing vertically.
    pub fn rotation(&self) -> usize {
        let (under_heading, forward, backward) = match self.tile {
            TileType::VerticalOver => (Face::Left, 0, 2),
            _ => (Face::Down, 1, 3),
        };
        if self.entries.get(under_heading.index()).copied().unwrap_or(false) {
            forward
        } else {
            backward
        }
    }

    /// Strand labels in PD order
    pub fn oriented(&self) -> PdTuple {
        let mut tuple = self.strands;
        tuple.rotate_left(self.rotation());
        tuple
    }
}

/// Ordered planar diagram code, one tuple per crossing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PdCode(Vec<PdTuple>);

impl PdCode {
    /// Wrap explicit tuples
    pub const fn new(tuples: Vec<PdTuple>) -> Self {
        Self(tuples)
    }

    /// Tuples in crossing discovery order
    pub fn tuples(&self) -> &[PdTuple] {
        &self.0
    }

    /// Number of crossings
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the code has no crossings
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest strand label, zero for an empty code
    pub fn max_label(&self) -> u32 {
        self.0.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Number of times each label from 1 to [`Self::max_label`] occurs
    pub fn label_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.max_label() as usize];
        for &label in self.0.iter().flatten() {
            if let Some(count) = (label as usize)
                .checked_sub(1)
                .and_then(|index| counts.get_mut(index))
            {
                *count += 1;
            }
        }
        counts
    }
}

impl fmt::Display for PdCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, [a, b, c, d]) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{a}, {b}, {c}, {d}]")?;
        }
        write!(f, "]")
    }
}

/// Failure to read a PD code back from its text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePdCodeError {
    /// What was wrong with the text
    pub reason: String,
}

impl fmt::Display for ParsePdCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid PD code: {}", self.reason)
    }
}

impl std::error::Error for ParsePdCodeError {}

impl FromStr for PdCode {
    type Err = ParsePdCodeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| ParsePdCodeError {
            reason: reason.to_string(),
        };

        let inner = text
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| fail("missing outer brackets"))?
            .trim();
        if inner.is_empty() {
            return Ok(Self::default());
        }

        let mut tuples = Vec::new();
        let mut rest = inner;
        loop {
            let (body, after) = rest
                .strip_prefix('[')
                .ok_or_else(|| fail("tuple missing opening bracket"))?
                .split_once(']')
                .ok_or_else(|| fail("tuple missing closing bracket"))?;
            let labels = body
                .split(',')
                .map(|label| label.trim().parse::<u32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|error| fail(&error.to_string()))?;
            let tuple: PdTuple = labels
                .try_into()
                .map_err(|labels: Vec<u32>| {
                    fail(&format!("expected four labels, found {}", labels.len()))
                })?;
            tuples.push(tuple);

            let after = after.trim_start();
            if after.is_empty() {
                break;
            }
            rest = after
                .strip_prefix(',')
                .ok_or_else(|| fail("expected ',' between tuples"))?
                .trim_start();
        }

        Ok(Self(tuples))
    }
}

/// Assemble the PD code of a closed diagram
///
/// Returns `None` when fewer than three crossings were discovered: such a
/// diagram is the unknot and needs no tuples. Otherwise every record is
/// oriented and the last assigned label, which names the same strand as label
/// 1, is folded back to 1 in the final tuple.
pub fn assemble(crossings: &[CrossingRecord], final_strand: u32) -> Option<PdCode> {
    if crossings.len() < MIN_KNOTTED_CROSSINGS {
        debug!(
            "{} crossings discovered, diagram is trivial",
            crossings.len()
        );
        return None;
    }

    let mut tuples: Vec<PdTuple> = crossings.iter().map(CrossingRecord::oriented).collect();
    if let Some(label) = tuples
        .last_mut()
        .and_then(|tuple| tuple.iter_mut().find(|label| **label == final_strand))
    {
        *label = 1;
    }

    Some(PdCode(tuples))
}
