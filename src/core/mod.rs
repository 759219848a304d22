//! Core engine: geometry tables, playfield, and board operations
//!
//! Pure game rules with no I/O. Rendering, input handling, queue
//! generation, scoring, and gravity timing live with the embedding
//! application and drive the board through its public operations.

pub mod board;
pub mod lines;
pub mod pieces;
pub mod playfield;

// Re-export commonly used types
pub use board::{Board, FallingPiece};
pub use playfield::Playfield;
