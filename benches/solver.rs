use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use sudokugen::{count_solutions, fill, Board};

fn count_empty(c: &mut Criterion) {
    let board = Board::new_empty();
    c.bench_function("count empty", |b| b.iter(|| count_solutions(black_box(board))));
}

fn count_uniquely_solvable(c: &mut Criterion) {
    let board = Board::from_str("
        __4 68_ _19
        __3 __9 2_5
        _6_ ___ __4

        6__ ___ 7_2
        ___ __7 ___
        ___ 9__ __1

        8__ _5_ __7
        _41 3_8 ___
        _2_ _91 ___
    ");
    c.bench_function("count uniquely-solvable", |b| b.iter(|| count_solutions(black_box(board))));
}

fn count_not_solvable(c: &mut Criterion) {
    let board = Board::from_str("
        __4 68_ _19
        __3 __9 2_5
        _6_ ___ __4

        6__ ___ 7_2
        ___ _27 ___
        ___ 9__ __1

        8__ _5_ __7
        _41 3_8 ___
        _2_ _91 ___
    ");
    c.bench_function("count not-solvable", |b| b.iter(|| count_solutions(black_box(board))));
}

fn count_ambiguous(c: &mut Criterion) {
    let board = Board::from_str("
        __4 6__ _19
        __3 __9 2_5
        _6_ ___ __4

        6__ ___ 7_2
        ___ __7 ___
        ___ 9__ __1

        8__ _5_ __7
        _41 3_8 ___
        _2_ _91 ___
    ");
    c.bench_function("count ambiguous", |b| b.iter(|| count_solutions(black_box(board))));
}

fn fill_empty(c: &mut Criterion) {
    c.bench_function("fill empty", |b| {
        b.iter(|| {
            let mut board = Board::new_empty();
            fill(&mut board, &mut StdRng::seed_from_u64(0)).unwrap();
            board
        })
    });
}

criterion_group!(benches, count_empty, count_uniquely_solvable, count_not_solvable, count_ambiguous, fill_empty);
criterion_main!(benches);
