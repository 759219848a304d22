use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::{Board, PieceKind};

fn bench_shift(c: &mut Criterion) {
    let mut board = Board::new();
    board.spawn(PieceKind::T).unwrap();

    c.bench_function("shift_left_right", |b| {
        b.iter(|| {
            let _ = black_box(&mut board).shift_left();
            let _ = board.shift_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new();
    board.spawn(PieceKind::J).unwrap();

    c.bench_function("rotate_cw_ccw", |b| {
        b.iter(|| {
            let _ = black_box(&mut board).rotate_cw();
            let _ = board.rotate_ccw();
        })
    });
}

fn bench_project(c: &mut Criterion) {
    let mut board = Board::new();
    board.spawn(PieceKind::S).unwrap();

    c.bench_function("project_ghost", |b| {
        b.iter(|| black_box(&board).project())
    });
}

fn bench_hard_drop_and_sweep(c: &mut Criterion) {
    c.bench_function("hard_drop_sweep", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.spawn(black_box(PieceKind::I)).unwrap();
            let _ = board.hard_drop();
            board.clear_staged_rows()
        })
    });
}

criterion_group!(
    benches,
    bench_shift,
    bench_rotate,
    bench_project,
    bench_hard_drop_and_sweep
);
criterion_main!(benches);
