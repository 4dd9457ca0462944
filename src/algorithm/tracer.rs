//! Strand tracing over the two-layer mosaic grid
//!
//! The tracer is a finite-state walk. Its state is the current position, the
//! strand's heading, and the next strand label, plus the ledger of
//! connections already traced. Each step follows the tile's connection for the
//! current heading, records it, labels crossing slots, and advances to the
//! neighbouring cell. The walk ends when it meets a connection it has already
//! made (the loop closed) or a tile that cannot take the strand (dead end).
//!
//! Every productive step consumes a fresh `(cell, connection)` pair, so a walk
//! never exceeds [`ConnectionLedger::capacity`] steps.

use log::{debug, trace};
use ndarray::Array2;

use crate::algorithm::assembler::CrossingRecord;
use crate::algorithm::connections::ConnectionLedger;
use crate::io::error::{MosaicError, Result};
use crate::spatial::grid::{LAYERS, Layer, MosaicGrid, Position};
use crate::spatial::tiles::Face;

/// Result of a single tracer step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A new connection was traced and the walk moved on
    Advanced,
    /// The connection at the current position was already traced
    Closed,
    /// The tile at the current position has no connection for the heading
    DeadEnd,
}

/// Why a trace stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The strand returned to a connection it had already made
    Closed,
    /// The strand reached a tile it cannot pass through
    DeadEnd {
        /// Where the strand stopped
        position: Position,
        /// Heading it arrived with
        heading: Face,
    },
}

/// Everything a finished trace hands to PD assembly and classification
#[derive(Debug, Clone)]
pub struct TraceOutcome {
    /// Why the walk stopped
    pub termination: Termination,
    /// Whether every front-layer cell ended satisfied
    pub front_satisfied: bool,
    /// Satisfied crossing cells in discovery order
    pub crossings: Vec<CrossingRecord>,
    /// Value of the strand counter when the walk stopped
    pub final_strand: u32,
    /// Number of connections traced
    pub steps: usize,
}

impl TraceOutcome {
    /// Whether the walk closed with every front cell satisfied
    pub const fn is_closed_diagram(&self) -> bool {
        matches!(self.termination, Termination::Closed) && self.front_satisfied
    }
}

/// Walks the single strand of a mosaic, labelling crossing slots as it goes
#[derive(Debug, Clone)]
pub struct StrandTracer<'g> {
    grid: &'g MosaicGrid,
    ledger: ConnectionLedger,
    strands: Array2<[u32; 4]>,
    discovered: Vec<Position>,
    position: Position,
    heading: Face,
    next_strand: u32,
    steps: usize,
}

impl<'g> StrandTracer<'g> {
    /// Start a trace at the first non-blank front cell
    ///
    /// The starting heading is the entry heading of that tile's first catalog
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoStrand`] if every front tile is blank
    pub fn new(grid: &'g MosaicGrid) -> Result<Self> {
        let start = grid
            .first_strand_cell()
            .map(Position::front)
            .ok_or(MosaicError::NoStrand { size: grid.size() })?;
        let heading = grid
            .tile(start)
            .connections()
            .first()
            .map(|connection| connection.entry)
            .ok_or(MosaicError::NoStrand { size: grid.size() })?;

        Ok(Self {
            grid,
            ledger: ConnectionLedger::new(grid),
            strands: Array2::from_elem((LAYERS, grid.cell_count()), [0; 4]),
            discovered: Vec::new(),
            position: start,
            heading,
            next_strand: 1,
            steps: 0,
        })
    }

    /// Current position
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current heading
    pub const fn heading(&self) -> Face {
        self.heading
    }

    /// Label the next crossing pass will assign
    pub const fn next_strand(&self) -> u32 {
        self.next_strand
    }

    /// Connections traced so far
    pub const fn ledger(&self) -> &ConnectionLedger {
        &self.ledger
    }

    /// Crossing cells satisfied so far, in discovery order
    pub fn discovered(&self) -> &[Position] {
        &self.discovered
    }

    /// Perform one transition of the walk
    pub fn step(&mut self) -> Step {
        let position = self.position;
        let tile = self.grid.tile(position);

        let Some(connection) = tile.connection_for(self.heading) else {
            return Step::DeadEnd;
        };
        if !self.ledger.insert(position, connection) {
            return Step::Closed;
        }
        self.steps += 1;

        let became_satisfied = self.ledger.count(position) >= tile.required_connections()
            && self.ledger.mark_satisfied(position);

        if tile.is_crossing() {
            if became_satisfied {
                self.discovered.push(position);
            }
            let entry_label = self.next_strand;
            self.next_strand += 1;
            if let Some(slots) = self.strands.get_mut([position.layer.index(), position.cell]) {
                if let Some(slot) = slots.get_mut(self.heading.index()) {
                    *slot = entry_label;
                }
                if let Some(slot) = slots.get_mut(self.heading.opposite().index()) {
                    *slot = self.next_strand;
                }
            }
        }

        // Pass-through connections leave with the heading they arrived with
        let (next, heading) = self.grid.advance(position, connection.outgoing());
        trace!(
            "{tile:?} at {position:?}: {:?} -> {:?}, next {next:?} heading {heading:?}",
            connection.entry, connection.exit
        );
        self.position = next;
        self.heading = heading;
        Step::Advanced
    }

    /// Walk until the loop closes or the strand dead-ends
    pub fn run(mut self) -> TraceOutcome {
        let termination = loop {
            match self.step() {
                Step::Advanced => {}
                Step::Closed => break Termination::Closed,
                Step::DeadEnd => {
                    break Termination::DeadEnd {
                        position: self.position,
                        heading: self.heading,
                    };
                }
            }
        };

        match termination {
            Termination::Closed => debug!(
                "loop closed at {:?} after {} steps",
                self.position, self.steps
            ),
            Termination::DeadEnd { position, heading } => debug!(
                "strand dead-ends at {position:?} heading {heading:?} after {} steps",
                self.steps
            ),
        }

        self.finish(termination)
    }

    fn finish(self, termination: Termination) -> TraceOutcome {
        let crossings = self
            .discovered
            .iter()
            .map(|&position| CrossingRecord {
                position,
                tile: self.grid.tile(position),
                strands: self
                    .strands
                    .get([position.layer.index(), position.cell])
                    .copied()
                    .unwrap_or_default(),
                entries: self.ledger.entries(position),
            })
            .collect();

        TraceOutcome {
            termination,
            front_satisfied: self.ledger.layer_satisfied(Layer::Front),
            crossings,
            final_strand: self.next_strand,
            steps: self.steps,
        }
    }
}
