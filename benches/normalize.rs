use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flowgraph_normalizer::ir::{RawEdge, RawGraph, RawNode};
use flowgraph_normalizer::{LayoutConfig, normalize_graph};
use std::hint::black_box;

fn layered_graph(nodes: usize, extra_edges: usize) -> RawGraph {
    let mut graph = RawGraph::default();
    for i in 0..nodes {
        graph
            .nodes
            .push(RawNode::new(format!("v{i}"), format!("{i}. Step {i}")));
    }
    for i in 0..nodes.saturating_sub(1) {
        graph
            .edges
            .push(RawEdge::new(format!("v{i}"), format!("v{}", i + 1)));
    }
    let mut count = 0usize;
    'outer: for i in 0..nodes {
        for j in (i + 2)..nodes {
            if count >= extra_edges {
                break 'outer;
            }
            graph
                .edges
                .push(RawEdge::new(format!("v{i}"), format!("v{j}")));
            count += 1;
        }
    }
    graph
}

fn cyclic_graph(nodes: usize) -> RawGraph {
    let mut graph = layered_graph(nodes, nodes / 2);
    if nodes > 1 {
        graph
            .edges
            .push(RawEdge::new(format!("v{}", nodes - 1), "v0".to_string()));
    }
    graph
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for (name, graph) in [
        ("chain_12", layered_graph(12, 0)),
        ("dense_50", layered_graph(50, 100)),
        ("dense_200", layered_graph(200, 400)),
        ("cyclic_50", cyclic_graph(50)),
    ] {
        let config = LayoutConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(name), &graph, |b, graph| {
            b.iter(|| normalize_graph(black_box(graph), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_normalize);
criterion_main!(benches);
