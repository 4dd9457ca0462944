//! Two-layer mosaic grid built from a mosaic string
//!
//! The front layer holds the tiles spelled out by the string. The rear layer is
//! never parsed: it is derived from the front layer's left column and top row
//! so that strands leaving the front through an edge travel along the hidden
//! side and come back, giving the grid its cylindrical identification.
//!
//! Both layers live in one contiguous `2 x N²` array and every adjacency is
//! index arithmetic, so the builder never allocates per-cell structures.

use std::fmt;

use log::debug;
use ndarray::Array2;

use crate::io::configuration::{COLUMN_WRAP_OFFSET, ROW_WRAP_OFFSET};
use crate::io::error::{MosaicError, Result};
use crate::spatial::tiles::{Face, TileType};

/// Number of layers in every mosaic grid
pub const LAYERS: usize = 2;

/// Grid layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Visible tiles encoded by the mosaic string
    Front = 0,
    /// Hidden tiles derived from the front layer's boundary
    Rear = 1,
}

impl Layer {
    /// Row of this layer in the tile arena
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The other layer
    pub const fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Rear,
            Self::Rear => Self::Front,
        }
    }
}

/// Cell address on one of the two layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Layer holding the cell
    pub layer: Layer,
    /// Row-major cell index within the layer
    pub cell: usize,
}

impl Position {
    /// Create a position
    pub const fn new(layer: Layer, cell: usize) -> Self {
        Self { layer, cell }
    }

    /// Position on the front layer
    pub const fn front(cell: usize) -> Self {
        Self::new(Layer::Front, cell)
    }

    /// Position on the rear layer
    pub const fn rear(cell: usize) -> Self {
        Self::new(Layer::Rear, cell)
    }
}

/// Square knot mosaic with its derived rear layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicGrid {
    tiles: Array2<TileType>,
    size: usize,
}

impl MosaicGrid {
    /// Parse a mosaic string into a two-layer grid
    ///
    /// # Errors
    ///
    /// Returns a parse error if:
    /// - The string is empty
    /// - Its length is not a perfect square
    /// - A character is not one of `0`-`9` or `a`
    pub fn parse(mosaic: &str) -> Result<Self> {
        let length = mosaic.chars().count();
        if length == 0 {
            return Err(MosaicError::EmptyMosaic);
        }

        let size = length.isqrt();
        if size * size != length {
            return Err(MosaicError::NotSquare { length });
        }

        let front = mosaic
            .chars()
            .enumerate()
            .map(|(position, character)| {
                TileType::from_char(character).ok_or(MosaicError::InvalidTile {
                    position,
                    character,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_front_tiles(size, &front)
    }

    /// Build a grid from explicit front-layer tiles in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or the tile count is not `size²`
    pub fn from_front_tiles(size: usize, front: &[TileType]) -> Result<Self> {
        if size == 0 {
            return Err(MosaicError::EmptyMosaic);
        }
        if front.len() != size * size {
            return Err(MosaicError::NotSquare {
                length: front.len(),
            });
        }

        let mut tiles = Array2::from_elem((LAYERS, size * size), TileType::Blank);
        for (cell, &tile) in front.iter().enumerate() {
            if let Some(slot) = tiles.get_mut([Layer::Front.index(), cell]) {
                *slot = tile;
            }
        }

        let mut grid = Self { tiles, size };
        grid.derive_rear_layer();
        Ok(grid)
    }

    /// Offset rear rows and columns whose front boundary tile leaves the grid
    ///
    /// A front row whose leftmost tile reaches the left edge turns its rear row
    /// into horizontal strands. A front column whose top tile reaches the top
    /// edge turns the reflected rear column into vertical strands. Where both
    /// apply the offsets add up to a hidden crossing.
    fn derive_rear_layer(&mut self) {
        let n = self.size;
        let mut codes = vec![TileType::Blank.code(); n * n];

        for i in 0..n {
            if self.front_tile(i * n).touches_left_side() {
                for code in codes.iter_mut().skip(i * n).take(n) {
                    *code += ROW_WRAP_OFFSET;
                }
            }
            if self.front_tile(i).touches_top_side() {
                let column = n - 1 - i;
                for code in codes.iter_mut().skip(column).step_by(n) {
                    *code += COLUMN_WRAP_OFFSET;
                }
            }
        }

        for (cell, code) in codes.into_iter().enumerate() {
            if let Some(slot) = self.tiles.get_mut([Layer::Rear.index(), cell]) {
                *slot = TileType::from_code(code).unwrap_or_default();
            }
        }

        debug!(
            "derived rear layer for {n}x{n} mosaic: {}",
            self.layer_string(Layer::Rear)
        );
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in one layer
    pub const fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Tile at a position, blank when out of range
    pub fn tile(&self, position: Position) -> TileType {
        self.tiles
            .get([position.layer.index(), position.cell])
            .copied()
            .unwrap_or_default()
    }

    fn front_tile(&self, cell: usize) -> TileType {
        self.tile(Position::front(cell))
    }

    /// Tiles of one layer in row-major order
    pub fn layer_tiles(&self, layer: Layer) -> Vec<TileType> {
        self.tiles.row(layer.index()).to_vec()
    }

    /// First non-blank front cell in row-major order
    pub fn first_strand_cell(&self) -> Option<usize> {
        self.tiles
            .row(Layer::Front.index())
            .iter()
            .position(|&tile| tile != TileType::Blank)
    }

    /// Number of crossing tiles on the front layer
    pub fn crossing_count(&self) -> usize {
        self.tiles
            .row(Layer::Front.index())
            .iter()
            .filter(|tile| tile.is_crossing())
            .count()
    }

    /// Move one cell along `heading`, switching layers at the grid edge
    ///
    /// Horizontal moves off an edge wrap to the opposite end of the same row on
    /// the other layer. Vertical moves off an edge fold over it: the strand
    /// lands on the same edge row of the other layer, in the reflected column,
    /// and reverses its vertical heading.
    pub const fn advance(&self, position: Position, heading: Face) -> (Position, Face) {
        let n = self.size;
        let row = position.cell / n;
        let col = position.cell % n;
        let layer = position.layer;

        match heading {
            Face::Left if col == 0 => (Position::new(layer.flipped(), row * n + n - 1), heading),
            Face::Left => (Position::new(layer, position.cell - 1), heading),
            Face::Right if col == n - 1 => (Position::new(layer.flipped(), row * n), heading),
            Face::Right => (Position::new(layer, position.cell + 1), heading),
            Face::Down if row == n - 1 => (
                Position::new(layer.flipped(), n * n - 1 - col),
                Face::Up,
            ),
            Face::Down => (Position::new(layer, position.cell + n), heading),
            Face::Up if row == 0 => (Position::new(layer.flipped(), n - 1 - col), Face::Down),
            Face::Up => (Position::new(layer, position.cell - n), heading),
        }
    }

    /// Mosaic-string rendering of one layer
    ///
    /// Rear crossings, which have no string character, render as `#`.
    pub fn layer_string(&self, layer: Layer) -> String {
        self.tiles
            .row(layer.index())
            .iter()
            .map(|tile| tile.to_char().unwrap_or('#'))
            .collect()
    }
}

impl fmt::Display for MosaicGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layer_string(Layer::Front))
    }
}
