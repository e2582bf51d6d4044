use fxhash::FxHashMap;

use super::*;

/// A [`Graph`] whose nodes are addressed by `char` labels.
///
/// Labels are unique. The first use of a label (via [`LabeledGraph::add_label`] or
/// [`LabeledGraph::add_edge`]) appends a new node to the underlying graph; every further use
/// resolves to that node. Nodes can only be created through labels, so every node carries
/// exactly one label.
///
/// # Example
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = LabeledGraph::new();
/// let a = graph.add_label('A');
/// graph.add_edge('A', 'B', 5.0);
/// graph.add_edge('B', 'C', 2.5);
///
/// assert_eq!(graph.add_label('A'), a);
/// assert_eq!(graph.get_index('C').unwrap(), 2);
/// assert!(graph.get_index('Z').is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    graph: Graph,
    label_to_node: FxHashMap<char, Node>,
    node_to_label: Vec<char>,
}

impl LabeledGraph {
    /// Creates an empty labeled graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node of `label`, allocating a new node if the label is unknown
    pub fn add_label(&mut self, label: char) -> Node {
        if let Some(&u) = self.label_to_node.get(&label) {
            return u;
        }

        let u = self.graph.add_node();
        self.label_to_node.insert(label, u);
        self.node_to_label.push(label);
        u
    }

    /// Adds the undirected edge `{a, b}` with weight `w`, allocating nodes for unknown labels
    pub fn add_edge(&mut self, a: char, b: char, w: Weight) {
        let u = self.add_label(a);
        let v = self.add_label(b);
        self.graph.push_edge(u, v, w);
    }

    /// Translates a label into its node.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] if the label was never added.
    pub fn get_index(&self, label: char) -> Result<Node> {
        self.label_to_node
            .get(&label)
            .copied()
            .ok_or(GraphError::UnknownLabel(label))
    }

    /// Returns the label of `u` if `u` is a node of the graph
    pub fn label_of(&self, u: Node) -> Option<char> {
        self.node_to_label.get(u as usize).copied()
    }

    /// Returns *true* if the label was added before
    pub fn has_label(&self, label: char) -> bool {
        self.label_to_node.contains_key(&label)
    }

    /// Iterates over all labels in the order their nodes were allocated
    pub fn labels(&self) -> impl Iterator<Item = char> + '_ {
        self.node_to_label.iter().copied()
    }

    /// Returns the neighbors of `label` as `(label, weight)` pairs.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] if the label was never added.
    pub fn labeled_neighbors(
        &self,
        label: char,
    ) -> Result<impl Iterator<Item = (char, Weight)> + '_> {
        let u = self.get_index(label)?;
        Ok(self
            .graph
            .weighted_neighbors_of(u)
            .map(|(v, w)| (self.node_to_label[v as usize], w)))
    }

    /// Returns the underlying unlabeled graph
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the labeled graph and returns the underlying graph
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl GraphNodeOrder for LabeledGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

impl GraphEdgeOrder for LabeledGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.graph.number_of_edges()
    }
}

impl WeightedAdjacencyList for LabeledGraph {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.graph.weighted_neighbors_of(u)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.graph.degree_of(u)
    }
}

impl<E> FromIterator<E> for LabeledGraph
where
    E: Into<(char, char, Weight)>,
{
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (a, b, w) in iter.into_iter().map(|e| e.into()) {
            graph.add_edge(a, b, w);
        }
        graph
    }
}


#[cfg(test)]
crate::testing::test_graph_ops!(test_labeled_graph_ops, |n: NumNodes, edges: Vec<WeightedEdge>| {
    let label = |u: NumNodes| char::from_u32(0x4E00 + u).unwrap();

    let mut graph = LabeledGraph::new();
    for u in 0..n {
        graph.add_label(label(u));
    }
    for WeightedEdge(u, v, w) in edges {
        graph.add_edge(label(u), label(v), w);
    }
    graph
});
