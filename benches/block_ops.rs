//! Benchmarks for block simulation and the two reconnection strategies.

use blocksim::{
    find_fast_reconnection, find_minimal_reconnection, simulate_block, Profile, SocialGraph, User,
    UserId,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// `clusters` dense groups of `size` users, chained by single bridge edges.
/// Blocking any returned bridge splits the graph in two.
fn bridged_clusters(clusters: u32, size: u32, seed: u64) -> (SocialGraph, Vec<(UserId, UserId)>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut g = SocialGraph::new();
    let n = clusters * size;
    for i in 0..n {
        g.add_user(User::new(i, format!("U{i}"), Profile::Student));
    }

    for c in 0..clusters {
        let base = c * size;
        // Spanning path keeps each cluster connected, random chords add redundancy.
        for k in 1..size {
            g.add_edge(UserId(base + k - 1), UserId(base + k), rng.random_range(1..100));
        }
        for _ in 0..size * 2 {
            let u = base + rng.random_range(0..size);
            let v = base + rng.random_range(0..size);
            g.add_edge(UserId(u), UserId(v), rng.random_range(1..100));
        }
    }

    let mut bridges = Vec::new();
    for c in 1..clusters {
        let u = UserId(c * size - 1);
        let v = UserId(c * size);
        g.add_edge(u, v, 1);
        bridges.push((u, v));
    }
    (g, bridges)
}

/// `n` users with no relationships at all: `n` components.
fn islands(n: u32) -> SocialGraph {
    let mut g = SocialGraph::new();
    for i in 0..n {
        g.add_user(User::new(i, format!("U{i}"), Profile::Student));
    }
    g
}

fn bench_simulate_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_block");
    for &clusters in &[4u32, 16, 64] {
        let (g, bridges) = bridged_clusters(clusters, 32, 42);
        let (u, v) = bridges[bridges.len() / 2];

        group.bench_with_input(BenchmarkId::new("bridge", clusters), &clusters, |b, _| {
            b.iter(|| black_box(simulate_block(black_box(&g), u, v)))
        });

        let chord = g.neighbors(UserId(1)).last().map(|n| n.user).unwrap_or(UserId(0));
        group.bench_with_input(BenchmarkId::new("intra_cluster", clusters), &clusters, |b, _| {
            b.iter(|| black_box(simulate_block(black_box(&g), UserId(1), chord)))
        });
    }
    group.finish();
}

fn bench_reconnection(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconnection");
    for &k in &[2u32, 8, 32] {
        let g = islands(k);
        group.bench_with_input(BenchmarkId::new("minimal", k), &k, |b, _| {
            b.iter(|| black_box(find_minimal_reconnection(black_box(&g))))
        });
        group.bench_with_input(BenchmarkId::new("greedy", k), &k, |b, _| {
            b.iter(|| black_box(find_fast_reconnection(black_box(&g))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simulate_block, bench_reconnection);
criterion_main!(benches);
