use std::ops::Range;

use itertools::Itertools;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Ok(())` if `u` is a node of the graph and a range error otherwise
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node: u,
                number_of_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex together with the connecting weight.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the neighbors of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns an iterator over all nodes without any neighbor
    fn isolated_nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) == 0)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all edges, each undirected edge exactly once and normalized.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| {
            self.weighted_neighbors_of(u)
                .filter(move |&(v, _)| u <= v)
                .map(move |(v, w)| WeightedEdge(u, v, w))
        })
    }

    /// Returns all edges sorted by their endpoints
    fn ordered_edges(&self) -> Vec<WeightedEdge> {
        self.edges()
            .sorted_by(|a, b| a.edge().cmp(&b.edge()).then(a.2.total_cmp(&b.2)))
            .collect_vec()
    }

    /// Returns the smallest weight of an edge between `u` and `v` if any.
    /// ** Panics if `u >= n` **
    fn weight_between(&self, u: Node, v: Node) -> Option<Weight> {
        self.weighted_neighbors_of(u)
            .filter(|&(x, _)| x == v)
            .map(|(_, w)| w)
            .min_by(Weight::total_cmp)
    }

    /// Returns the sum of all edge weights
    fn total_weight(&self) -> Weight {
        self.edges().map(|e| e.weight()).sum()
    }
}

/// Provides a constructor from a list of weighted edges
pub trait GraphFromScratch: Sized {
    /// Creates a graph with `n` nodes and the given (undirected) edges.
    ///
    /// # Errors
    /// Returns a range error if any endpoint is `>= n`.
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>;
}
