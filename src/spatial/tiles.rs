//! Tile catalog describing how strands pass through each mosaic tile
//!
//! Faces are travel headings: a strand heading [`Face::Right`] enters a tile
//! through its left side. A [`Connection`] pairs the heading a strand arrives
//! with and the heading whose side it leaves through, so the strand continues
//! with [`Connection::outgoing`]. Every tile accepts at most one connection per
//! arrival heading, which makes the catalog the sole source of traversal
//! legality.

use std::fmt;

/// Travel heading of a strand, doubling as the cell side it crosses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Heading left, entering through the right side
    Left = 0,
    /// Heading down, entering through the top side
    Down = 1,
    /// Heading right, entering through the left side
    Right = 2,
    /// Heading up, entering through the bottom side
    Up = 3,
}

impl Face {
    /// All faces in index order
    pub const ALL: [Self; 4] = [Self::Left, Self::Down, Self::Right, Self::Up];

    /// Slot of this face in per-face arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face for a slot, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Left,
            1 => Self::Down,
            2 => Self::Right,
            _ => Self::Up,
        }
    }

    /// Antipodal face (`face + 2 mod 4`)
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

/// Directed pass of a strand through a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    /// Heading the strand arrives with
    pub entry: Face,
    /// Heading naming the side the strand leaves through
    pub exit: Face,
}

impl Connection {
    /// Create a directed connection
    pub const fn new(entry: Face, exit: Face) -> Self {
        Self { entry, exit }
    }

    /// The same connection traversed the other way
    pub const fn reversed(self) -> Self {
        Self::new(self.exit, self.entry)
    }

    /// Heading of the strand once it has left the tile
    ///
    /// For pass-through crossing connections this equals the entry heading.
    pub const fn outgoing(self) -> Face {
        self.exit.opposite()
    }
}

const fn conn(entry: Face, exit: Face) -> Connection {
    Connection::new(entry, exit)
}

const PASS_THROUGH: [Connection; 4] = [
    conn(Face::Left, Face::Right),
    conn(Face::Down, Face::Up),
    conn(Face::Right, Face::Left),
    conn(Face::Up, Face::Down),
];

// Indexed by tile code. Order matters: the first entry of a tile seeds the
// starting heading of a trace.
static CATALOG: [&[Connection]; TileType::COUNT] = [
    &[],
    &[conn(Face::Right, Face::Up), conn(Face::Up, Face::Right)],
    &[conn(Face::Left, Face::Up), conn(Face::Up, Face::Left)],
    &[conn(Face::Left, Face::Down), conn(Face::Down, Face::Left)],
    &[conn(Face::Right, Face::Down), conn(Face::Down, Face::Right)],
    &[conn(Face::Right, Face::Left), conn(Face::Left, Face::Right)],
    &[conn(Face::Down, Face::Up), conn(Face::Up, Face::Down)],
    &[
        conn(Face::Right, Face::Up),
        conn(Face::Up, Face::Right),
        conn(Face::Down, Face::Left),
        conn(Face::Left, Face::Down),
    ],
    &[
        conn(Face::Left, Face::Up),
        conn(Face::Up, Face::Left),
        conn(Face::Right, Face::Down),
        conn(Face::Down, Face::Right),
    ],
    &PASS_THROUGH,
    &PASS_THROUGH,
    &PASS_THROUGH,
];

/// Standard knot mosaic tile shapes
///
/// Codes 0 through 10 appear in mosaic strings. Code 11 only arises on the
/// rear layer where a wrapped row and a wrapped column meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum TileType {
    /// No strand
    #[default]
    Blank = 0,
    /// Arc joining the left and bottom sides
    LeftBottom = 1,
    /// Arc joining the right and bottom sides
    RightBottom = 2,
    /// Arc joining the right and top sides
    RightTop = 3,
    /// Arc joining the left and top sides
    LeftTop = 4,
    /// Straight strand from left to right
    Horizontal = 5,
    /// Straight strand from top to bottom
    Vertical = 6,
    /// Two arcs: left-bottom and right-top
    DoubleLeftBottom = 7,
    /// Two arcs: right-bottom and left-top
    DoubleRightBottom = 8,
    /// Crossing whose horizontal strand passes under
    VerticalOver = 9,
    /// Crossing whose vertical strand passes under
    HorizontalOver = 10,
    /// Hidden crossing of a wrapped row and a wrapped column
    RearCrossing = 11,
}

impl TileType {
    /// Number of tile codes known to the catalog
    pub const COUNT: usize = 12;

    /// Tile for a numeric code
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Self::Blank,
            1 => Self::LeftBottom,
            2 => Self::RightBottom,
            3 => Self::RightTop,
            4 => Self::LeftTop,
            5 => Self::Horizontal,
            6 => Self::Vertical,
            7 => Self::DoubleLeftBottom,
            8 => Self::DoubleRightBottom,
            9 => Self::VerticalOver,
            10 => Self::HorizontalOver,
            11 => Self::RearCrossing,
            _ => return None,
        })
    }

    /// Tile for a mosaic string character (`0`-`9`, `a`)
    pub const fn from_char(character: char) -> Option<Self> {
        match character {
            '0'..='9' => Self::from_code(character as u8 - b'0'),
            'a' => Some(Self::HorizontalOver),
            _ => None,
        }
    }

    /// Numeric tile code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Mosaic string character, if the tile can appear in one
    pub const fn to_char(self) -> Option<char> {
        match self {
            Self::HorizontalOver => Some('a'),
            Self::RearCrossing => None,
            tile => Some((b'0' + tile.code()) as char),
        }
    }

    /// Valid directed connections, each present alongside its reverse
    pub fn connections(self) -> &'static [Connection] {
        CATALOG.get(self as usize).copied().unwrap_or(&[])
    }

    /// The connection a strand arriving with `heading` follows, if any
    pub fn connection_for(self, heading: Face) -> Option<Connection> {
        self.connections()
            .iter()
            .copied()
            .find(|connection| connection.entry == heading)
    }

    /// Whether a strand arriving with `heading` can pass through
    pub fn accepts(self, heading: Face) -> bool {
        self.connection_for(heading).is_some()
    }

    /// Whether two strand segments cross in this tile
    pub const fn is_crossing(self) -> bool {
        matches!(
            self,
            Self::VerticalOver | Self::HorizontalOver | Self::RearCrossing
        )
    }

    /// Number of undirected connections that must be traced to satisfy the tile
    pub const fn required_connections(self) -> usize {
        match self {
            Self::Blank => 0,
            Self::LeftBottom
            | Self::RightBottom
            | Self::RightTop
            | Self::LeftTop
            | Self::Horizontal
            | Self::Vertical => 1,
            _ => 2,
        }
    }

    /// Whether a strand leaves this tile through its left side
    pub fn touches_left_side(self) -> bool {
        self.accepts(Face::Right)
    }

    /// Whether a strand leaves this tile through its top side
    pub fn touches_top_side(self) -> bool {
        self.accepts(Face::Down)
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_char() {
            Some(character) => write!(f, "{character}"),
            None => write!(f, "<{}>", self.code()),
        }
    }
}
