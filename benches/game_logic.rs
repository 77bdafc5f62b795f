use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_blocks::core::{get_shape, Board, GameEngine};
use falling_blocks::term::{FrameBuffer, GameView, Viewport};
use falling_blocks::types::{Cell, PieceKind};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut engine = GameEngine::new(12345);
        b.iter(|| {
            if engine.is_game_over() {
                engine = GameEngine::new(12345);
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Cell::Filled);
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::from_rows(&["#.#.#.#.#.", ".#.#.#.#.#", "####..####"])
        .unwrap_or_default();
    let shape = get_shape(PieceKind::T);

    c.bench_function("collision", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(4), black_box(16)))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(engine.spawn_piece()))
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            engine.move_left();
            engine.move_right();
        })
    });
    c.bench_function("rotate", |b| {
        b.iter(|| {
            engine.rotate();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = GameEngine::new(12345);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(&engine.render_state(), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_piece_spawn,
    bench_move_and_rotate,
    bench_render
);
criterion_main!(benches);
