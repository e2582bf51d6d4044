use itertools::Itertools;
use rand::Rng;

use crate::{algo::*, gens::*, prelude::*};

/// The six node graph used throughout the shortest-path tests.
/// Labels `A..F` are allocated in order, i.e. `A = 0, ..., F = 5`.
///
/// ```text
///      B ---5--- D
///    / |       / | \
///   4  1      8  2  6
///  /   |    /    |   \
/// A -2- C -10--- E -2- F
/// ```
pub fn example_graph() -> LabeledGraph {
    let mut graph = LabeledGraph::new();
    for label in 'A'..='F' {
        graph.add_label(label);
    }

    for (a, b, w) in [
        ('A', 'B', 4.0),
        ('A', 'C', 2.0),
        ('B', 'C', 1.0),
        ('B', 'D', 5.0),
        ('C', 'D', 8.0),
        ('C', 'E', 10.0),
        ('D', 'E', 2.0),
        ('D', 'F', 6.0),
        ('E', 'F', 2.0),
    ] {
        graph.add_edge(a, b, w);
    }

    graph
}

/// Generates a `G(n,p)` graph with weights in `[1, 10)`
pub fn random_weighted_graph<R: Rng>(rng: &mut R, n: NumNodes, density: f64) -> Graph {
    generate_random_graph(rng, n, density, 1.0, 10.0, false).unwrap()
}

/// Creates `m` random edges for nodes `0..n`; loops and parallel edges may occur
pub fn random_weighted_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
    (0..m)
        .map(|_| {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            WeightedEdge(u, v, rng.random_range(0.0..5.0))
        })
        .collect_vec()
}

/// All-pairs distances as reference for Dijkstra
pub fn floyd_warshall<G: WeightedAdjacencyList>(graph: &G) -> Vec<Vec<Option<Weight>>> {
    let n = graph.len();
    let mut dist = vec![vec![None; n]; n];

    for u in graph.vertices() {
        dist[u as usize][u as usize] = Some(0.0);
        for (v, w) in graph.weighted_neighbors_of(u) {
            let entry = &mut dist[u as usize][v as usize];
            if entry.is_none_or(|d| w < d) {
                *entry = Some(w);
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let Some(dik) = dist[i][k] else { continue };
            for j in 0..n {
                let Some(dkj) = dist[k][j] else { continue };
                if dist[i][j].is_none_or(|d| dik + dkj < d) {
                    dist[i][j] = Some(dik + dkj);
                }
            }
        }
    }

    dist
}

/// Sums the cheapest edge weights along `path`; panics if consecutive nodes are not adjacent
pub fn path_cost<G: WeightedAdjacencyList>(graph: &G, path: &[Node]) -> Weight {
    path.iter()
        .tuple_windows()
        .map(|(&u, &v)| graph.weight_between(u, v).unwrap())
        .sum()
}

/// Asserts that the distances of a Dijkstra run from `start` match `reference`
pub fn assert_distances<G: WeightedAdjacencyList>(
    graph: &G,
    start: Node,
    reference: &[Option<Weight>],
) {
    let distances = graph.shortest_distances(start).unwrap();
    assert_eq!(distances.len(), reference.len());

    for (u, (got, expected)) in distances.iter().zip(reference).enumerate() {
        match (got, expected) {
            (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "node {u}: {a} vs {b}"),
            (None, None) => {}
            _ => panic!("node {u}: {got:?} vs {expected:?}"),
        }
    }
}

/// Every representation should agree with the list of edges it was built from.
/// `$build` must map `(NumNodes, Vec<WeightedEdge>)` to the graph under test.
macro_rules! test_graph_ops {
    ($env:ident, $build:expr) => {
        mod $env {
            use crate::{
                ops::*, repr::*, testing::random_weighted_edges, NumEdges, NumNodes, Weight,
                WeightedEdge,
            };
            use itertools::Itertools;
            use rand::SeedableRng;
            use rand_pcg::Pcg64Mcg;

            #[test]
            fn weighted_adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [1 as NumNodes, 10, 20, 50] {
                    for m in [0, n, n * 3] {
                        let edges = random_weighted_edges(rng, n, m as NumEdges);
                        let graph = ($build)(n, edges.clone());

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());

                        let expected = edges
                            .iter()
                            .map(|e| e.normalized())
                            .sorted_by(|a, b| a.edge().cmp(&b.edge()).then(a.2.total_cmp(&b.2)))
                            .collect_vec();
                        assert_eq!(graph.ordered_edges(), expected);

                        let mut degrees = vec![0 as NumNodes; n as usize];
                        for &WeightedEdge(u, v, w) in &edges {
                            degrees[u as usize] += 1;
                            if u != v {
                                degrees[v as usize] += 1;
                            }

                            assert!(graph.weighted_neighbors_of(u).any(|x| x == (v, w)));
                            assert!(graph.weighted_neighbors_of(v).any(|x| x == (u, w)));
                            assert!(graph.weight_between(u, v).unwrap() <= w);
                        }
                        assert_eq!(graph.degrees().collect_vec(), degrees);
                        assert_eq!(graph.max_degree(), degrees.iter().copied().max().unwrap_or(0));

                        let total: Weight = edges.iter().map(|e| e.weight()).sum();
                        assert!((graph.total_weight() - total).abs() < 1e-9);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[test]
fn example_graph_shape() {
    let graph = example_graph();

    assert_eq!(graph.number_of_nodes(), 6);
    assert_eq!(graph.number_of_edges(), 9);
    assert_eq!(graph.labels().collect::<String>(), "ABCDEF");
    assert!(graph.is_connected());
}

#[test]
fn floyd_warshall_on_example_graph() {
    let graph = example_graph();
    let reference = floyd_warshall(&graph);

    assert_eq!(reference[0][5], Some(12.0));
    for u in graph.vertices() {
        assert_distances(&graph, u, &reference[u as usize]);
    }
}
