use std::fmt::Display;

use super::*;

/// Adjacency list of a single node
pub type Neighborhood = Vec<(Node, Weight)>;

/// An undirected weighted graph stored as adjacency lists.
///
/// Nodes are `0..n` and are only ever appended. Every edge `{u, v}` is stored as `(v, w)` in
/// the list of `u` and as `(u, w)` in the list of `v` (a self-loop is stored once).
/// Parallel edges are kept as inserted.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node();
/// let b = graph.add_node();
/// let c = graph.add_node();
///
/// graph.add_edge(a, b, 5.0).unwrap();
/// graph.add_edge(b, c, 2.5).unwrap();
///
/// assert_eq!(graph.neighbors(b).unwrap(), &[(a, 5.0), (c, 2.5)]);
/// assert!(graph.add_edge(a, 7, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nbs: Vec<Neighborhood>,
    num_edges: NumEdges,
}

impl Graph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` isolated nodes
    pub fn with_nodes(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Number of nodes in the graph
    pub fn size(&self) -> NumNodes {
        self.number_of_nodes()
    }

    /// Appends an isolated node and returns its index
    pub fn add_node(&mut self) -> Node {
        self.nbs.push(Vec::new());
        (self.nbs.len() - 1) as Node
    }

    /// Adds the undirected edge `{u, v}` with weight `w`.
    ///
    /// # Errors
    /// Returns a range error if `u` or `v` is not a node of the graph.
    pub fn add_edge(&mut self, u: Node, v: Node, w: Weight) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.push_edge(u, v, w);
        Ok(())
    }

    /// Returns *true* if there is at least one edge between `u` and `v`.
    ///
    /// # Errors
    /// Returns a range error if `u` or `v` is not a node of the graph.
    pub fn has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.nbs[u as usize].iter().any(|&(x, _)| x == v))
    }

    /// Returns the adjacency list of `u`.
    ///
    /// # Errors
    /// Returns a range error if `u` is not a node of the graph.
    pub fn neighbors(&self, u: Node) -> Result<&[(Node, Weight)]> {
        self.check_node(u)?;
        Ok(&self.nbs[u as usize])
    }

    /// Returns the smallest weight of an edge between `u` and `v` if such an edge exists.
    ///
    /// # Errors
    /// Returns a range error if `u` or `v` is not a node of the graph.
    pub fn edge_weight(&self, u: Node, v: Node) -> Result<Option<Weight>> {
        self.check_node(v)?;
        self.check_node(u)?;
        Ok(self.weight_between(u, v))
    }

    /// Inserts the edge without checking its endpoints
    pub(crate) fn push_edge(&mut self, u: Node, v: Node, w: Weight) {
        self.nbs[u as usize].push((v, w));
        if u != v {
            self.nbs[v as usize].push((u, w));
        }
        self.num_edges += 1;
    }
}

impl GraphNodeOrder for Graph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for Graph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedAdjacencyList for Graph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl GraphFromScratch for Graph {
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<WeightedEdge>,
    {
        let mut graph = Self::with_nodes(n);
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }
}

/// Prints one line `u: (v, w) (v, w) ` per node
impl Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (u, nbs) in self.nbs.iter().enumerate() {
            write!(f, "{u}: ")?;
            for (v, w) in nbs {
                write!(f, "({v}, {w}) ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn add_nodes_and_edges() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());

        let a = graph.add_node();
        let b = graph.add_node();
        let c = graph.add_node();
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(graph.size(), 3);

        graph.add_edge(a, b, 5.0).unwrap();
        graph.add_edge(b, c, 2.5).unwrap();
        graph.add_edge(a, c, 1.2).unwrap();

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors(b).unwrap(), &[(a, 5.0), (c, 2.5)]);
        assert_eq!(graph.neighbors(a).unwrap(), &[(b, 5.0), (c, 1.2)]);

        assert!(graph.has_edge(c, a).unwrap());
        assert_eq!(graph.edge_weight(c, b).unwrap(), Some(2.5));
        assert!((graph.total_weight() - 8.7).abs() < 1e-9);
    }

    #[test]
    fn edges_are_symmetric() {
        let graph =
            Graph::try_from_edges(5, [(0, 1, 1.0), (3, 1, 2.0), (4, 4, 3.0), (2, 3, 0.5)]).unwrap();

        for u in graph.vertices() {
            for (v, w) in graph.weighted_neighbors_of(u) {
                assert_eq!(graph.weight_between(v, u), Some(w));
            }
        }

        assert_eq!(
            graph.ordered_edges(),
            vec![
                WeightedEdge(0, 1, 1.0),
                WeightedEdge(1, 3, 2.0),
                WeightedEdge(2, 3, 0.5),
                WeightedEdge(4, 4, 3.0)
            ]
        );
        assert_eq!(graph.degree_of(4), 1);
        assert_eq!(graph.degrees().collect_vec(), vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn out_of_range_is_range_error() {
        let mut graph = Graph::with_nodes(2);

        let err = graph.add_edge(0, 2, 1.0).unwrap_err();
        assert!(err.is_range_error());
        assert_eq!(
            err,
            GraphError::NodeOutOfRange {
                node: 2,
                number_of_nodes: 2
            }
        );

        assert!(graph.has_edge(3, 0).unwrap_err().is_range_error());
        assert!(graph.neighbors(2).unwrap_err().is_range_error());
        assert!(Graph::try_from_edges(1, [(0, 1, 1.0)]).is_err());
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::with_nodes(2);
        graph.add_edge(0, 1, 3.0).unwrap();
        graph.add_edge(1, 0, 2.0).unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.edge_weight(0, 1).unwrap(), Some(2.0));
        assert_eq!(graph.edge_weight(0, 0).unwrap(), None);
    }

    #[test]
    fn display_lists_neighborhoods() {
        let graph = Graph::try_from_edges(3, [(0, 1, 4.0), (1, 2, 1.5)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "0: (1, 4) \n1: (0, 4) (2, 1.5) \n2: (1, 1.5) \n"
        );
    }
}

#[cfg(test)]
crate::testing::test_graph_ops!(test_graph_ops, |n: NumNodes, edges: Vec<WeightedEdge>| {
    Graph::try_from_edges(n, edges).unwrap()
});
