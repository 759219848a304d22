//! Playfield and collision oracle tests

use blockfall::types::{FIELD_HEIGHT, FIELD_WIDTH, VISIBLE_HEIGHT};
use blockfall::{Coord, PieceKind, Playfield};

fn square_at(row: i8, col: i8) -> [Coord; 4] {
    [
        Coord::new(row, col),
        Coord::new(row, col + 1),
        Coord::new(row + 1, col),
        Coord::new(row + 1, col + 1),
    ]
}

#[test]
fn new_field_is_empty() {
    let field = Playfield::new();
    assert_eq!(field.width(), FIELD_WIDTH);
    assert_eq!(field.height(), FIELD_HEIGHT);
    assert_eq!(field.visible_height(), VISIBLE_HEIGHT);
    assert!(field.cells().iter().all(|cell| cell.is_none()));
}

#[test]
fn get_and_set_respect_bounds() {
    let mut field = Playfield::new();

    assert!(field.set(Coord::new(5, 2), Some(PieceKind::S)));
    assert_eq!(field.get(Coord::new(5, 2)), Some(Some(PieceKind::S)));

    assert!(!field.set(Coord::new(-1, 0), Some(PieceKind::S)));
    assert!(!field.set(Coord::new(0, FIELD_WIDTH as i8), Some(PieceKind::S)));
    assert_eq!(field.get(Coord::new(FIELD_HEIGHT as i8, 0)), None);
    assert_eq!(field.get(Coord::new(0, -1)), None);
}

#[test]
fn oracle_rejects_out_of_bounds_cells_regardless_of_contents() {
    let field = Playfield::new();

    // Column 10 on a width-10 field is always rejected
    assert!(!field.is_admissible(&square_at(0, FIELD_WIDTH as i8 - 1)));
    assert!(!field.is_admissible(&square_at(0, -1)));
    assert!(!field.is_admissible(&square_at(-1, 4)));
    assert!(!field.is_admissible(&square_at(FIELD_HEIGHT as i8 - 1, 4)));
}

#[test]
fn oracle_accepts_free_cells_including_the_buffer() {
    let field = Playfield::new();
    assert!(field.is_admissible(&square_at(0, 0)));
    assert!(field.is_admissible(&square_at(VISIBLE_HEIGHT as i8, 4)));
    assert!(field.is_admissible(&square_at(FIELD_HEIGHT as i8 - 2, FIELD_WIDTH as i8 - 2)));
}

#[test]
fn oracle_rejects_candidates_touching_settled_cells() {
    let mut field = Playfield::new();
    field.set(Coord::new(4, 5), Some(PieceKind::Z));

    assert!(!field.is_admissible(&square_at(4, 4)));
    assert!(!field.is_admissible(&square_at(3, 5)));
    assert!(field.is_admissible(&square_at(3, 7)));
}

#[test]
fn oracle_never_mutates_the_grid() {
    let mut field = Playfield::new();
    field.set(Coord::new(2, 2), Some(PieceKind::L));
    let before = field.clone();

    let _ = field.is_admissible(&square_at(2, 2));
    let _ = field.is_admissible(&square_at(8, 8));

    assert_eq!(field, before);
}

#[test]
fn row_full_detection() {
    let mut field = Playfield::new();
    assert!(!field.is_row_full(3));

    for col in 0..FIELD_WIDTH as i8 {
        field.set(Coord::new(3, col), Some(PieceKind::I));
    }
    assert!(field.is_row_full(3));

    field.set(Coord::new(3, 6), None);
    assert!(!field.is_row_full(3));

    // Out of bounds rows are never full
    assert!(!field.is_row_full(-1));
    assert!(!field.is_row_full(FIELD_HEIGHT as i8));
}

#[test]
fn remove_row_collapses_everything_above() {
    let mut field = Playfield::new();
    for col in 0..FIELD_WIDTH as i8 {
        field.set(Coord::new(2, col), Some(PieceKind::O));
    }
    field.set(Coord::new(3, 1), Some(PieceKind::T));
    field.set(Coord::new(5, 8), Some(PieceKind::J));

    field.remove_row(2);

    assert_eq!(field.get(Coord::new(2, 1)), Some(Some(PieceKind::T)));
    assert_eq!(field.get(Coord::new(4, 8)), Some(Some(PieceKind::J)));
    assert_eq!(field.get(Coord::new(3, 1)), Some(None));
    assert_eq!(field.get(Coord::new(5, 8)), Some(None));
    // Top row ends up empty
    let top = field.row_cells(FIELD_HEIGHT as i8 - 1).unwrap();
    assert!(top.iter().all(|cell| cell.is_none()));
}

#[test]
fn row_cells_exposes_one_row() {
    let mut field = Playfield::new();
    field.set(Coord::new(7, 0), Some(PieceKind::S));

    let row = field.row_cells(7).unwrap();
    assert_eq!(row.len(), FIELD_WIDTH as usize);
    assert_eq!(row[0], Some(PieceKind::S));
    assert!(row[1..].iter().all(|cell| cell.is_none()));

    assert!(field.row_cells(FIELD_HEIGHT as i8).is_none());
    assert!(field.row_cells(-1).is_none());
}
