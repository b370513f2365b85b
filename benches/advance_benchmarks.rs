use criterion::{BenchmarkId, Criterion, SamplingMode, criterion_group, criterion_main};
use holeban::core::{Direction, GameState, GameUpdate, Level, advance, parse};
use std::hint::black_box;

use Direction::{Down, Left, Right, Up};

const PUZZLES: &[(&str, &str, &[Direction], usize, SamplingMode)] = &[
    (
        "first_push",
        r#"
    #######
    #.....#
    #.@=O.#
    #.....#
    #######
    "#,
        &[Right],
        100,
        SamplingMode::Auto,
    ),
    (
        "both_sides",
        r#"
    #########
    #.......#
    #.O=@=O.#
    #.......#
    #########
    "#,
        &[Left, Right, Right],
        100,
        SamplingMode::Auto,
    ),
    (
        "three_in_a_row",
        r#"
    ##########
    #........#
    #..OOO...#
    #..===...#
    #....@...#
    ##########
    "#,
        &[Up, Down, Left, Up, Down, Left, Up],
        100,
        SamplingMode::Auto,
    ),
    (
        "long_corridor",
        r#"
    ################
    #@.............#
    ################
    "#,
        &[
            Right, Right, Right, Right, Right, Right, Right, Right, Right, Right, Right, Right,
            Right,
        ],
        50,
        SamplingMode::Flat,
    ),
];

fn replay(level: &Level, script: &[Direction]) -> GameState {
    let mut state = level.initial_state();
    for &direction in script {
        if let GameUpdate::NextState(next, _) = advance(level, &state, direction) {
            state = next;
        }
    }
    state
}

pub fn bench_advance_scripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_scripts");

    for &(puzzle_name, puzzle, script, sample_size, sample_mode) in PUZZLES {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new("replay", puzzle_name),
            &(puzzle, script),
            |b, &(puzzle, script)| {
                b.iter_with_setup(
                    || parse(puzzle).unwrap(),
                    |level| black_box(replay(black_box(&level), black_box(script))),
                );
            },
        );
    }
    group.finish();
}

pub fn bench_parse_plans(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_plans");

    for &(puzzle_name, puzzle, _script, sample_size, sample_mode) in PUZZLES {
        group.sample_size(sample_size);
        group.sampling_mode(sample_mode);
        group.bench_with_input(
            BenchmarkId::new("parse", puzzle_name),
            &puzzle,
            |b, &puzzle| {
                b.iter(|| black_box(parse(black_box(puzzle)).unwrap()));
            },
        );
    }
    group.finish();
}

criterion_group!(advance_benches, bench_advance_scripts, bench_parse_plans);

criterion_main!(advance_benches);
