//! Traversal benchmarks: deep subclass chains and wide fan-outs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use owlet_core::{Edge, EdgeType, Engine, EngineConfig};

/// Engine with the result cache off, so every iteration traverses.
fn uncached_engine() -> Engine {
    let mut config = EngineConfig::default();
    config.cache.enabled = false;
    Engine::new(config).unwrap()
}

/// A subclass chain c0 -> c1 -> ... -> c{depth}.
fn chain_engine(depth: usize) -> Engine {
    let engine = uncached_engine();
    let edges: Vec<Edge> = (0..depth)
        .map(|i| {
            Edge::new(
                EdgeType::SubclassOf,
                &format!("c{i}"),
                &format!("c{}", i + 1),
            )
        })
        .collect();
    engine.add_edges(edges).unwrap();
    engine
}

/// `width` leaf classes under a shared root, each with one instance.
fn fanout_engine(width: usize) -> Engine {
    let engine = uncached_engine();
    let mut edges = Vec::with_capacity(width * 2 + 1);
    edges.push(Edge::new(EdgeType::HasAttribute, "root", "rooted"));
    for i in 0..width {
        edges.push(Edge::new(
            EdgeType::SubclassOf,
            &format!("leaf{i}"),
            "root",
        ));
        edges.push(Edge::new(
            EdgeType::InstanceOf,
            &format!("item{i}"),
            &format!("leaf{i}"),
        ));
    }
    engine.add_edges(edges).unwrap();
    engine
}

fn bench_deep_chain(c: &mut Criterion) {
    let engine = chain_engine(48);

    c.bench_function("subclass_chain_48_hops", |b| {
        b.iter(|| black_box(engine.process("is c0 a type of c48?")));
    });
}

fn bench_fanout_attribute(c: &mut Criterion) {
    let engine = fanout_engine(1000);

    c.bench_function("attribute_inherit_fanout_1000", |b| {
        b.iter(|| black_box(engine.process("is item500 considered to be rooted?")));
    });
}

fn bench_cached_repeat(c: &mut Criterion) {
    let engine = Engine::default();
    let edges: Vec<Edge> = (0..48)
        .map(|i| {
            Edge::new(
                EdgeType::SubclassOf,
                &format!("c{i}"),
                &format!("c{}", i + 1),
            )
        })
        .collect();
    engine.add_edges(edges).unwrap();
    // Warm the cache once; every iteration after is a pure cache hit.
    let _ = engine.process("is c0 a type of c48?");

    c.bench_function("subclass_chain_cache_hit", |b| {
        b.iter(|| black_box(engine.process("is c0 a type of c48?")));
    });
}

criterion_group!(
    benches,
    bench_deep_chain,
    bench_fanout_attribute,
    bench_cached_repeat
);
criterion_main!(benches);
