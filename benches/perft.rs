//! Benchmarks for move generation and perft.

use std::io;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_perft::board::Board;
use chess_perft::corpus::fixtures;
use chess_perft::harness::{self, RunConfig};
use chess_perft::{init_attack_tables, perft};

fn bench_perft(c: &mut Criterion) {
    init_attack_tables();
    let mut group = c.benchmark_group("perft");

    let board = Board::new();
    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| perft(&board, black_box(depth), false))
        });
    }

    let kiwipete =
        Board::try_from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| perft(&kiwipete, black_box(depth), false))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    init_attack_tables();
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.candidate_moves()))
    });

    let kiwipete =
        Board::try_from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.candidate_moves()))
    });

    group.finish();
}

fn bench_corpus(c: &mut Criterion) {
    init_attack_tables();
    let mut group = c.benchmark_group("corpus");
    group.sample_size(10);

    for depth in 1..=3 {
        let config = RunConfig::new(depth).unwrap();
        group.bench_with_input(BenchmarkId::new("verify", depth), &config, |b, config| {
            b.iter(|| harness::run(config, fixtures(), &mut io::sink()).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_corpus);
criterion_main!(benches);
