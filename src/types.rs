//! Core types shared across the engine
//!
//! Pure data types with no external dependencies: field dimensions,
//! piece and rotation enums, cell coordinates, and the result types of
//! the board operations.

use std::fmt;

/// Playfield dimensions
pub const FIELD_WIDTH: u8 = 10;
pub const VISIBLE_HEIGHT: u8 = 20;

/// Hidden rows above the visible field so pieces can spawn and rotate
/// near the top without false collisions. Rendering crops to
/// `VISIBLE_HEIGHT`.
pub const BUFFER_HEIGHT: u8 = 4;

/// Full grid height, buffer included
pub const FIELD_HEIGHT: u8 = VISIBLE_HEIGHT + BUFFER_HEIGHT;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in geometry-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub(crate) fn table_index(self) -> usize {
        self as usize
    }
}

/// Rotation states (North = spawn orientation), listed in clockwise order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    pub(crate) fn table_index(self) -> usize {
        self as usize
    }
}

/// One cell position. `row` 0 is the bottom-most visible row, `col` 0 the
/// left edge. Signed so out-of-bounds candidates stay representable and
/// the collision oracle can reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// This cell shifted by the given row/column offsets.
    pub const fn offset(self, dr: i8, dc: i8) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Cell on the board (`None` = empty, `Some` = settled piece)
pub type Cell = Option<PieceKind>;

/// Failure modes of the piece operations.
///
/// `Collision` is the expected, frequent outcome of a rejected move and
/// leaves the board completely untouched; it is not a bug signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece is currently falling.
    NoActivePiece,
    /// The requested transform is geometrically inadmissible.
    Collision,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoActivePiece => write!(f, "no piece is currently falling"),
            MoveError::Collision => write!(f, "transform blocked by field bounds or settled cells"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Failure modes of `Board::spawn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// A piece is already falling; it must lock before the next spawn.
    PieceInPlay,
    /// The spawn cells are occupied; the caller treats this as game over.
    Blocked,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::PieceInPlay => write!(f, "a piece is already falling"),
            SpawnError::Blocked => write!(f, "spawn cells are occupied"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Result of a lock request.
///
/// `RowsPending` means the rows staged by the previous lock have not been
/// consumed yet; the request was refused with no state change. That is a
/// sequencing warning for the caller, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum LockOutcome {
    Locked,
    RowsPending,
}
