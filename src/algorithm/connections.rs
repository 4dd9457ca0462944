use bitvec::prelude::*;

use crate::spatial::grid::{LAYERS, Layer, MosaicGrid, Position};
use crate::spatial::tiles::{Connection, Face, TileType};

/// Per-cell record of traced connections and satisfied flags for both layers
///
/// A tile accepts at most one connection per arrival heading, so a made
/// connection is stored as one bit keyed by `(position, entry heading)`.
#[derive(Clone, Debug)]
pub struct ConnectionLedger {
    made: BitVec,
    satisfied: BitVec,
    cells: usize,
}

impl ConnectionLedger {
    /// Create a ledger for `grid` with nothing traced
    ///
    /// Blank front cells need no strand and start out satisfied.
    pub fn new(grid: &MosaicGrid) -> Self {
        let cells = grid.cell_count();
        let mut satisfied = bitvec![0; LAYERS * cells];
        for (cell, tile) in grid.layer_tiles(Layer::Front).into_iter().enumerate() {
            if tile == TileType::Blank {
                satisfied.set(cell, true);
            }
        }

        Self {
            made: bitvec![0; LAYERS * cells * Face::ALL.len()],
            satisfied,
            cells,
        }
    }

    const fn cell_slot(&self, position: Position) -> usize {
        position.layer.index() * self.cells + position.cell
    }

    const fn connection_slot(&self, position: Position, entry: Face) -> usize {
        self.cell_slot(position) * Face::ALL.len() + entry.index()
    }

    /// Record a connection, returning `false` if it was already made
    pub fn insert(&mut self, position: Position, connection: Connection) -> bool {
        let slot = self.connection_slot(position, connection.entry);
        match self.made.get_mut(slot) {
            Some(mut bit) if !*bit => {
                bit.set(true);
                true
            }
            _ => false,
        }
    }

    /// Test whether a connection has been made
    pub fn contains(&self, position: Position, connection: Connection) -> bool {
        self.entered_with(position, connection.entry)
    }

    /// Test whether any strand arrived at `position` with `heading`
    pub fn entered_with(&self, position: Position, heading: Face) -> bool {
        self.made
            .get(self.connection_slot(position, heading))
            .as_deref()
            == Some(&true)
    }

    /// Arrival headings used at `position`, indexed by face
    pub fn entries(&self, position: Position) -> [bool; 4] {
        Face::ALL.map(|face| self.entered_with(position, face))
    }

    /// Number of connections made at `position`
    pub fn count(&self, position: Position) -> usize {
        let start = self.connection_slot(position, Face::Left);
        self.made
            .get(start..start + Face::ALL.len())
            .map_or(0, BitSlice::count_ones)
    }

    /// Flag `position` as satisfied, returning `true` if it was not already
    pub fn mark_satisfied(&mut self, position: Position) -> bool {
        let slot = self.cell_slot(position);
        match self.satisfied.get_mut(slot) {
            Some(mut bit) if !*bit => {
                bit.set(true);
                true
            }
            _ => false,
        }
    }

    /// Test whether `position` is satisfied
    pub fn is_satisfied(&self, position: Position) -> bool {
        self.satisfied.get(self.cell_slot(position)).as_deref() == Some(&true)
    }

    /// Whether every cell of `layer` is satisfied
    pub fn layer_satisfied(&self, layer: Layer) -> bool {
        let start = layer.index() * self.cells;
        self.satisfied
            .get(start..start + self.cells)
            .is_some_and(BitSlice::all)
    }

    /// Number of connections made across both layers
    pub fn total_made(&self) -> usize {
        self.made.count_ones()
    }

    /// Upper bound on connections a single trace can make
    pub fn capacity(&self) -> usize {
        self.made.len()
    }
}
