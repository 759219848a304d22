//! Board: the falling piece and the operations that move, rotate, drop
//! and lock it
//!
//! Every transform follows the same protocol: build the candidate cells,
//! consult the collision oracle, then commit atomically or leave the
//! board untouched. The staged-row record is a single-slot mailbox
//! between `lock` and the line sweep: a second lock is refused until the
//! first one's rows are consumed, so no row-clear information is lost.

use crate::core::pieces::{rotation_delta, spawn_cells};
use crate::core::playfield::Playfield;
use crate::types::{Coord, LockOutcome, MoveError, PieceKind, Rotation, SpawnError};

/// The active falling piece: four absolute cells plus kind and rotation
/// state.
///
/// While one is present on a board, its cells are pairwise distinct and
/// admissible against the playfield, and they always equal
/// `shape(kind, rotation)` up to translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingPiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub cells: [Coord; 4],
}

impl FallingPiece {
    /// Smallest column across the four blocks
    pub fn min_col(&self) -> i8 {
        self.cells.iter().map(|c| c.col).min().unwrap_or(0)
    }

    /// Smallest row across the four blocks
    pub fn min_row(&self) -> i8 {
        self.cells.iter().map(|c| c.row).min().unwrap_or(0)
    }
}

/// Rows touched by the most recent lock. Exactly four entries with
/// duplicates preserved; `pending` refuses the next lock until the line
/// sweep consumes the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct StagedRows {
    rows: [i8; 4],
    pending: bool,
}

/// One game session's board: settled grid, falling piece, staged rows.
///
/// Single-threaded by design; a host embedding it concurrently must
/// serialize access per board.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    playfield: Playfield,
    falling: Option<FallingPiece>,
    staged: StagedRows,
}

impl Board {
    /// Create a board with an empty playfield and no falling piece
    pub fn new() -> Self {
        Self {
            playfield: Playfield::new(),
            falling: None,
            staged: StagedRows::default(),
        }
    }

    /// Read-only grid access for rendering
    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Mutable grid access for the embedding host (scenario setup,
    /// garbage insertion). The falling piece is never stored here.
    pub fn playfield_mut(&mut self) -> &mut Playfield {
        &mut self.playfield
    }

    /// The falling piece, if any
    pub fn falling(&self) -> Option<FallingPiece> {
        self.falling
    }

    /// Establish a new falling piece at the spawn position, rotation
    /// North. Called by the queue subsystem; `Blocked` is the caller's
    /// game-over signal.
    pub fn spawn(&mut self, kind: PieceKind) -> Result<(), SpawnError> {
        if self.falling.is_some() {
            return Err(SpawnError::PieceInPlay);
        }

        let cells = spawn_cells(kind);
        if !self.playfield.is_admissible(&cells) {
            return Err(SpawnError::Blocked);
        }

        self.falling = Some(FallingPiece {
            kind,
            rotation: Rotation::North,
            cells,
        });
        Ok(())
    }

    /// Shift the falling piece one column to the left
    pub fn shift_left(&mut self) -> Result<(), MoveError> {
        self.try_shift(0, -1)
    }

    /// Shift the falling piece one column to the right
    pub fn shift_right(&mut self) -> Result<(), MoveError> {
        self.try_shift(0, 1)
    }

    /// Move the falling piece one row toward the floor.
    ///
    /// A `Collision` here is the caller's cue to consider locking; the
    /// engine never locks on a failed descent by itself.
    pub fn soft_drop(&mut self) -> Result<(), MoveError> {
        self.try_shift(-1, 0)
    }

    fn try_shift(&mut self, dr: i8, dc: i8) -> Result<(), MoveError> {
        let Some(piece) = self.falling else {
            return Err(MoveError::NoActivePiece);
        };

        let mut cells = piece.cells;
        for c in &mut cells {
            *c = c.offset(dr, dc);
        }

        if !self.playfield.is_admissible(&cells) {
            return Err(MoveError::Collision);
        }

        self.falling = Some(FallingPiece { cells, ..piece });
        Ok(())
    }

    /// Rotate the falling piece clockwise by applying the delta table of
    /// its current state
    pub fn rotate_cw(&mut self) -> Result<(), MoveError> {
        let Some(piece) = self.falling else {
            return Err(MoveError::NoActivePiece);
        };

        let delta = rotation_delta(piece.kind, piece.rotation);
        let mut cells = piece.cells;
        for (c, d) in cells.iter_mut().zip(delta) {
            *c = c.offset(d.row, d.col);
        }

        if !self.playfield.is_admissible(&cells) {
            return Err(MoveError::Collision);
        }

        self.falling = Some(FallingPiece {
            cells,
            rotation: piece.rotation.rotate_cw(),
            ..piece
        });
        Ok(())
    }

    /// Rotate the falling piece counter-clockwise: subtract the delta
    /// table of the state one step back
    pub fn rotate_ccw(&mut self) -> Result<(), MoveError> {
        let Some(piece) = self.falling else {
            return Err(MoveError::NoActivePiece);
        };

        let delta = rotation_delta(piece.kind, piece.rotation.rotate_ccw());
        let mut cells = piece.cells;
        for (c, d) in cells.iter_mut().zip(delta) {
            *c = c.offset(-d.row, -d.col);
        }

        if !self.playfield.is_admissible(&cells) {
            return Err(MoveError::Collision);
        }

        self.falling = Some(FallingPiece {
            cells,
            rotation: piece.rotation.rotate_ccw(),
            ..piece
        });
        Ok(())
    }

    /// Resting cells of the falling piece: walk a scratch copy down one
    /// row at a time and keep the last admissible configuration.
    ///
    /// Never mutates the live piece. Used for the ghost outline and as
    /// the first half of a hard drop. A piece that cannot descend at all
    /// comes back unchanged.
    pub fn project(&self) -> Result<[Coord; 4], MoveError> {
        let Some(piece) = self.falling else {
            return Err(MoveError::NoActivePiece);
        };

        let mut cells = piece.cells;
        loop {
            let mut next = cells;
            for c in &mut next {
                *c = c.offset(-1, 0);
            }
            if !self.playfield.is_admissible(&next) {
                return Ok(cells);
            }
            cells = next;
        }
    }

    /// Commit the falling piece into the grid and stage its rows for the
    /// line sweep.
    ///
    /// Refused with `RowsPending`, with no state change at all, while the
    /// previous lock's rows are unconsumed. That check comes first, so a
    /// double lock writes the grid exactly once.
    pub fn lock(&mut self) -> Result<LockOutcome, MoveError> {
        if self.staged.pending {
            return Ok(LockOutcome::RowsPending);
        }

        let Some(piece) = self.falling else {
            return Err(MoveError::NoActivePiece);
        };

        for (i, c) in piece.cells.iter().enumerate() {
            self.playfield.set(*c, Some(piece.kind));
            self.staged.rows[i] = c.row;
        }
        self.staged.pending = true;
        self.falling = None;

        Ok(LockOutcome::Locked)
    }

    /// Project, move the piece to its resting cells, then lock.
    ///
    /// The two halves are not atomic toward observers, but nothing else
    /// may touch the board in between. If the lock is refused because
    /// rows are still pending, the piece keeps its resting position.
    pub fn hard_drop(&mut self) -> Result<LockOutcome, MoveError> {
        let resting = self.project()?;
        if let Some(piece) = &mut self.falling {
            piece.cells = resting;
        }
        self.lock()
    }

    /// Rows touched by the most recent lock, while unconsumed. Exactly
    /// four entries; duplicates are kept when a piece lies flat within
    /// one row, and the consumer deduplicates.
    pub fn staged_rows(&self) -> Option<&[i8; 4]> {
        self.staged.pending.then_some(&self.staged.rows)
    }

    /// Consume the staged rows and re-enable locking
    pub fn take_staged_rows(&mut self) -> Option<[i8; 4]> {
        if !self.staged.pending {
            return None;
        }
        self.staged.pending = false;
        Some(self.staged.rows)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::{shape, SPAWN_POSITION};

    #[test]
    fn test_spawn_uses_north_shape_at_spawn_position() {
        let mut board = Board::new();
        board.spawn(PieceKind::T).unwrap();

        let piece = board.falling().unwrap();
        assert_eq!(piece.rotation, Rotation::North);
        for c in piece.cells {
            let local = Coord::new(c.row - SPAWN_POSITION.row, c.col - SPAWN_POSITION.col);
            assert!(shape(PieceKind::T, Rotation::North).contains(&local));
        }
    }

    #[test]
    fn test_shift_commit_is_atomic_on_rejection() {
        let mut board = Board::new();
        board.spawn(PieceKind::O).unwrap();
        let before = board.falling().unwrap();

        // Wall is 3 columns away for the O spawn
        for _ in 0..3 {
            board.shift_left().unwrap();
        }
        assert_eq!(board.shift_left(), Err(MoveError::Collision));

        let after = board.falling().unwrap();
        assert_eq!(after.min_col(), 0);
        assert_eq!(after.rotation, before.rotation);
    }
}
