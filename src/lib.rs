/*!
`wgraphs` is a small library for **w**eighted undirected graphs:
- Nodes are numbered `0` to `n - 1` (or addressed by `char` labels via [`LabeledGraph`](crate::repr::LabeledGraph))
- Every edge carries an `f64` weight
- Edges are undirected; parallel edges are allowed

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
**Edges** are tuple-structs `Edge(Node, Node)` and `WeightedEdge(Node, Node, Weight)`.

See the [`repr`] module for the storage backends:

- [`Graph`](crate::repr::Graph): adjacency lists of `(neighbor, weight)` pairs
- [`LabeledGraph`](crate::repr::LabeledGraph): a `Graph` with a `char`-label to node mapping

# Design

Algorithms and generators are configurable structs that one can alter using the *Builder* /
*Setter* pattern before running them. The most commonly used functionality is also implemented
via traits on the graph itself, e.g. `graph.shortest_path(s, t)`.

Operations that take node indices or labels from the caller return [`Result`](crate::error::Result)
and report out-of-range nodes, unknown labels and invalid parameters as [`GraphError`](crate::error::GraphError).

Algorithms and generators emit [`tracing`](https://docs.rs/tracing) events at `debug`/`trace`
level; install a subscriber to see them.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, errors and both representations,
- [`algo`] includes Dijkstra's shortest paths, BFS and connected components,
- [`gens`] includes a random weighted graph generator,
- [`io`] includes readers and writers for a weighted edge list and an adjacency listing.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{algo::*, prelude::*};

let graph: LabeledGraph = [('A', 'B', 4.0), ('A', 'C', 2.0), ('B', 'C', 1.0)]
    .into_iter()
    .collect();

let path = graph.shortest_labeled_path('A', 'B').unwrap().unwrap();
assert_eq!(path.nodes, vec!['A', 'C', 'B']);
assert_eq!(path.cost, 3.0);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// the error type as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
