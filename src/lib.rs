//! Falling-block puzzle rules engine.
//!
//! Owns the playfield grid and the falling piece, and applies movement,
//! rotation, drop and lock under strict collision rules. The surrounding
//! game loop drives it: input calls the shift/rotate operations, gravity
//! calls [`Board::soft_drop`], a hard drop projects and locks in one
//! step, and the line sweep consumes the rows staged by each lock.
//!
//! ```
//! use blockfall::{Board, LockOutcome, PieceKind};
//!
//! let mut board = Board::new();
//! board.spawn(PieceKind::T)?;
//! board.shift_left()?;
//! assert_eq!(board.hard_drop()?, LockOutcome::Locked);
//! let cleared = board.clear_staged_rows();
//! assert!(cleared.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod types;

pub use crate::core::{Board, FallingPiece, Playfield};
pub use crate::types::{Cell, Coord, LockOutcome, MoveError, PieceKind, Rotation, SpawnError};
