//! Geometry tables: tetromino shapes and per-state rotation deltas
//!
//! Shapes are written out once, in spawn orientation. The other three
//! orientations and the clockwise delta tables are derived at compile
//! time by turning each block a quarter turn inside the piece's bounding
//! box. Two table invariants hold by construction: four clockwise steps
//! return every block to its starting offset, and the counter-clockwise
//! transform out of a state is the exact negation of the clockwise
//! transform into it.

use crate::types::{Coord, PieceKind, Rotation, VISIBLE_HEIGHT};

/// Shape of a piece: offsets of its four blocks from the piece anchor,
/// rows growing upward.
pub type PieceShape = [Coord; 4];

/// Anchor for new pieces: bottom-left corner of the bounding box, placed
/// so every spawn shape sits inside the hidden buffer rows.
pub const SPAWN_POSITION: Coord = Coord::new(VISIBLE_HEIGHT as i8, 3);

/// Bounding-box edge length per kind; blocks turn inside this box.
/// Indexed in `PieceKind::ALL` order.
const BOX_SIZES: [i8; 7] = [4, 2, 3, 3, 3, 3, 3];

/// Spawn-orientation shapes, `PieceKind::ALL` order.
const SPAWN_SHAPES: [PieceShape; 7] = [
    // I: flat, one row below the top of its 4-box
    [
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(2, 2),
        Coord::new(2, 3),
    ],
    // O: the full 2-box
    [
        Coord::new(0, 0),
        Coord::new(0, 1),
        Coord::new(1, 0),
        Coord::new(1, 1),
    ],
    // T: stem on top
    [
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 1),
    ],
    // S: upper pair on the right
    [
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(2, 1),
        Coord::new(2, 2),
    ],
    // Z: upper pair on the left
    [
        Coord::new(2, 0),
        Coord::new(2, 1),
        Coord::new(1, 1),
        Coord::new(1, 2),
    ],
    // J: corner block above the left end
    [
        Coord::new(2, 0),
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
    ],
    // L: corner block above the right end
    [
        Coord::new(1, 0),
        Coord::new(1, 1),
        Coord::new(1, 2),
        Coord::new(2, 2),
    ],
];

/// Quarter turn clockwise of one block inside an `n`-sized box.
const fn rotate_block(n: i8, c: Coord) -> Coord {
    Coord::new(n - 1 - c.col, c.row)
}

const fn rotate_shape(n: i8, shape: PieceShape) -> PieceShape {
    let mut out = shape;
    let mut i = 0;
    while i < 4 {
        out[i] = rotate_block(n, shape[i]);
        i += 1;
    }
    out
}

const fn build_shapes() -> [[PieceShape; 4]; 7] {
    let mut all = [[[Coord::new(0, 0); 4]; 4]; 7];
    let mut k = 0;
    while k < 7 {
        let n = BOX_SIZES[k];
        let mut shape = SPAWN_SHAPES[k];
        let mut r = 0;
        while r < 4 {
            all[k][r] = shape;
            shape = rotate_shape(n, shape);
            r += 1;
        }
        k += 1;
    }
    all
}

const fn build_cw_deltas() -> [[PieceShape; 4]; 7] {
    let shapes = build_shapes();
    let mut deltas = [[[Coord::new(0, 0); 4]; 4]; 7];
    let mut k = 0;
    while k < 7 {
        let mut r = 0;
        while r < 4 {
            let next = shapes[k][(r + 1) % 4];
            let cur = shapes[k][r];
            let mut i = 0;
            while i < 4 {
                deltas[k][r][i] = Coord::new(next[i].row - cur[i].row, next[i].col - cur[i].col);
                i += 1;
            }
            r += 1;
        }
        k += 1;
    }
    deltas
}

/// Block offsets for every (kind, rotation); `[kind][rotation]`.
static SHAPES: [[PieceShape; 4]; 7] = build_shapes();

/// Per-block deltas applied by a clockwise rotation out of `[kind][from]`.
static CW_DELTAS: [[PieceShape; 4]; 7] = build_cw_deltas();

/// Block offsets for a piece kind in a given rotation state.
pub fn shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.table_index()][rotation.table_index()]
}

/// Per-block deltas applied by a clockwise rotation out of `from`.
///
/// The counter-clockwise transform out of a state subtracts the clockwise
/// deltas of the state one step back.
pub fn rotation_delta(kind: PieceKind, from: Rotation) -> PieceShape {
    CW_DELTAS[kind.table_index()][from.table_index()]
}

/// Absolute cells of a freshly spawned piece (rotation North).
pub fn spawn_cells(kind: PieceKind) -> [Coord; 4] {
    let mut cells = shape(kind, Rotation::North);
    for c in &mut cells {
        *c = c.offset(SPAWN_POSITION.row, SPAWN_POSITION.col);
    }
    cells
}
