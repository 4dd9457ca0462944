//! Outcome tallies for batches of decoded mosaics

use std::collections::BTreeMap;
use std::fmt;

use crate::algorithm::decoder::Decoding;
use crate::io::error::MosaicError;

/// Counts of every decode outcome seen in a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Closed diagrams with fewer than three crossings
    pub unknots: usize,
    /// Closed diagrams with a PD code
    pub knots: usize,
    /// Open or multi-component diagrams
    pub not_knots: usize,
    /// Strings rejected before tracing
    pub parse_errors: usize,
    /// All-blank mosaics
    pub structural_errors: usize,
    /// Knotted diagrams keyed by PD tuple count
    pub knots_by_crossings: BTreeMap<usize, usize>,
}

impl BatchSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally one decode outcome
    pub fn record(&mut self, outcome: &Result<Decoding, MosaicError>) {
        match outcome {
            Ok(Decoding::Unknot) => self.unknots += 1,
            Ok(Decoding::Knot(code)) => {
                self.knots += 1;
                *self.knots_by_crossings.entry(code.len()).or_insert(0) += 1;
            }
            Ok(Decoding::NotAKnot) => self.not_knots += 1,
            Err(error) if error.is_structural_error() => self.structural_errors += 1,
            Err(_) => self.parse_errors += 1,
        }
    }

    /// Fold another summary into this one
    pub fn merge(&mut self, other: &Self) {
        self.unknots += other.unknots;
        self.knots += other.knots;
        self.not_knots += other.not_knots;
        self.parse_errors += other.parse_errors;
        self.structural_errors += other.structural_errors;
        for (&crossings, &count) in &other.knots_by_crossings {
            *self.knots_by_crossings.entry(crossings).or_insert(0) += count;
        }
    }

    /// Mosaics that encode a single closed curve
    pub const fn closed_diagrams(&self) -> usize {
        self.unknots + self.knots
    }

    /// Every outcome recorded
    pub const fn total(&self) -> usize {
        self.closed_diagrams() + self.not_knots + self.parse_errors + self.structural_errors
    }
}

impl<'a> FromIterator<&'a Result<Decoding, MosaicError>> for BatchSummary {
    fn from_iter<I: IntoIterator<Item = &'a Result<Decoding, MosaicError>>>(iter: I) -> Self {
        let mut summary = Self::new();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mosaics: {} knots, {} unknots, {} not knots, {} parse errors, {} structural errors",
            self.total(),
            self.knots,
            self.unknots,
            self.not_knots,
            self.parse_errors,
            self.structural_errors
        )
    }
}
