use criterion::{criterion_group, criterion_main, Criterion};
use offnav_lib::{
    build_graph, find_route_dijkstra, plan_route, resolve, Graph, RoadNetwork, RouteRequest,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

static GRAPH: Lazy<Graph> =
    Lazy::new(|| build_graph(&RoadNetwork::delhi()).expect("builtin network is valid"));
static LONG_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("pitampura", "gurgaon"));
static AMBIGUOUS_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("delhi", "sec"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("build_delhi_graph", |b| {
        let network = RoadNetwork::delhi();
        b.iter(|| black_box(build_graph(&network).expect("valid").node_count()));
    });

    c.bench_function("resolve_ambiguous_delhi", |b| {
        b.iter(|| black_box(resolve(graph, black_box("Delhi"))));
    });

    c.bench_function("dijkstra_pitampura_gurgaon", |b| {
        let start = graph.node_id("Pitampura").expect("node exists");
        let goal = graph.node_id("Gurgaon Cyber City").expect("node exists");
        b.iter(|| {
            let path = find_route_dijkstra(graph, start, goal).expect("route exists");
            black_box(path.total_distance)
        });
    });

    c.bench_function("plan_route_pitampura_gurgaon", |b| {
        let request = &*LONG_REQUEST;
        b.iter(|| black_box(plan_route(graph, request).is_found()));
    });

    c.bench_function("plan_route_ambiguous", |b| {
        let request = &*AMBIGUOUS_REQUEST;
        b.iter(|| black_box(plan_route(graph, request).is_found()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
