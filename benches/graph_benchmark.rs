use adjgraph::{AdjacencyGraph, BreadthFirst, DepthFirst, SearchConfig, Strategy};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Binary-tree shaped graph: i -> 2i+1, 2i+2, plus a few back edges to form cycles.
fn tree_graph(size: usize) -> AdjacencyGraph<usize> {
    let mut graph = AdjacencyGraph::with_capacity(size);
    for i in 0..size {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < size {
                graph.add_edge(i, child);
            }
        }
        if i % 7 == 0 && i > 0 {
            graph.add_edge(i, i / 2);
        }
    }
    graph
}

fn bench_graph_mutation(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("adj_graph_build_chain", |b| {
        b.iter(|| {
            let mut graph = AdjacencyGraph::with_capacity(size);
            for i in 0..size - 1 {
                graph.add_edge(i, i + 1);
            }
            black_box(graph.len())
        });
    });

    c.bench_function("adj_graph_sparse_remove", |b| {
        b.iter_batched(
            || tree_graph(size),
            |mut graph| {
                // Remove the middle vertex.
                black_box(graph.remove_vertex(&(size / 2)));
                graph
            },
            criterion::BatchSize::SmallInput,
        );
    });

    c.bench_function("adj_graph_duplicate_edges", |b| {
        let mut graph = tree_graph(size);
        b.iter(|| {
            for i in 1..size {
                black_box(graph.add_edge(i, (i - 1) / 2));
            }
        });
    });
}

fn bench_graph_search(c: &mut Criterion) {
    let size = 1000;
    let graph = tree_graph(size);
    let config = SearchConfig::default();
    let target = size - 1;

    c.bench_function("adj_graph_bfs", |b| {
        b.iter(|| black_box(BreadthFirst.search(&graph, &0, &target, &config)));
    });

    c.bench_function("adj_graph_dfs", |b| {
        b.iter(|| black_box(DepthFirst.search(&graph, &0, &target, &config)));
    });

    c.bench_function("adj_graph_bfs_iter", |b| {
        b.iter(|| black_box(graph.bfs(&0).count()));
    });

    c.bench_function("adj_graph_dfs_iter", |b| {
        b.iter(|| black_box(graph.dfs(&0).count()));
    });
}

criterion_group!(benches, bench_graph_mutation, bench_graph_search);
criterion_main!(benches);
