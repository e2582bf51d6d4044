/*!
Single-source shortest paths with Dijkstra's algorithm.

The implementation deliberately keeps the textbook `O(n^2)` structure: in every iteration the
unvisited node with the smallest tentative distance is found by a linear scan over all nodes
(ties go to the smaller node index), it is marked as visited and its edges are relaxed.
For the small graphs this crate targets, this is simpler than a priority queue and gives a
deterministic visiting order.

Edge weights are expected to be non-negative; this is not checked.

The main entry points are the [`Dijkstra`] iterator (which yields every settled node as a
[`Point`]) and the [`ShortestPath`] trait implemented for all graphs.
*/

use std::{fmt::Display, ops::Add, str::FromStr};

use tracing::{debug, trace};

use super::*;

/// A node together with an accumulated distance from the start node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub node: Node,
    pub distance: Weight,
}

impl Point {
    pub fn new(node: Node, distance: Weight) -> Self {
        Self { node, distance }
    }
}

/// Keeps the node of the left operand and sums up both distances
impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.node, self.distance + other.distance)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.node, self.distance)
    }
}

/// Parses `"<node> <distance>"` (any whitespace as separator)
impl FromStr for Point {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(node), Some(distance), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(GraphError::InvalidParameter(format!(
                "expected `<node> <distance>`, got `{s}`"
            )));
        };

        let node = node
            .parse()
            .map_err(|_| GraphError::InvalidParameter(format!("invalid node `{node}`")))?;
        let distance = distance
            .parse()
            .map_err(|_| GraphError::InvalidParameter(format!("invalid distance `{distance}`")))?;

        Ok(Point::new(node, distance))
    }
}

/// A path as a sequence of nodes (or labels) from start to goal together with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<T = Node> {
    pub nodes: Vec<T>,
    pub cost: Weight,
}

impl<T: Copy> Path<T> {
    /// First node of the path
    pub fn start(&self) -> Option<T> {
        self.nodes.first().copied()
    }

    /// Last node of the path
    pub fn goal(&self) -> Option<T> {
        self.nodes.last().copied()
    }

    /// Number of edges on the path
    pub fn number_of_edges(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Translates every node of the path
    pub fn map<U, F>(self, f: F) -> Path<U>
    where
        F: FnMut(T) -> U,
    {
        Path {
            nodes: self.nodes.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }
}

/// State of a single Dijkstra run from a fixed start node.
///
/// As an iterator, each call to `next` settles one node and yields it together with its final
/// distance. The iteration ends when the goal (see [`Dijkstra::stop_at`]) was yielded or no
/// unvisited node is reachable anymore.
///
/// # Example
/// ```
/// use wgraphs::{algo::*, prelude::*};
///
/// let graph = Graph::try_from_edges(4, [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0)]).unwrap();
/// let run = Dijkstra::new(&graph, 0).unwrap().run();
///
/// assert_eq!(run.visit_order(), &[0, 2, 1]);
/// assert_eq!(run.distance_to(1), Some(2.0));
/// assert_eq!(run.distance_to(3), None);
/// assert_eq!(run.reconstruct_path(1).unwrap(), vec![0, 2, 1]);
/// assert!(run.reconstruct_path(3).unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    start: Node,
    goal: Option<Node>,
    distances: Vec<Weight>,
    visited: Vec<bool>,
    predecessors: Vec<Option<OptionalNode>>,
    order: Vec<Node>,
    finished: bool,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new run from `start`: the start node has distance `0`, all others are unreached.
    ///
    /// # Errors
    /// Returns a range error if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;

        let n = graph.len();
        let mut distances = vec![INFINITE_DISTANCE; n];
        distances[start as usize] = 0.0;

        trace!(start, nodes = n, "initialized distances");

        Ok(Self {
            graph,
            start,
            goal: None,
            distances,
            visited: vec![false; n],
            predecessors: vec![None; n],
            order: Vec::with_capacity(n),
            finished: false,
        })
    }

    /// Stops the search once `goal` was settled.
    ///
    /// # Errors
    /// Returns a range error if `goal` is not a node of the graph.
    pub fn stop_at(mut self, goal: Node) -> Result<Self> {
        self.graph.check_node(goal)?;
        self.goal = Some(goal);
        Ok(self)
    }

    /// Runs the search until it is finished and returns the final state
    pub fn run(mut self) -> Self {
        for _ in self.by_ref() {}
        self
    }

    /// The start node of the run
    pub fn start(&self) -> Node {
        self.start
    }

    /// Returns *true* if no further node will be settled
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the best known distance to `u` or `None` if `u` was not reached (yet).
    /// For visited nodes, the distance is final.
    pub fn distance_to(&self, u: Node) -> Option<Weight> {
        self.distances
            .get(u as usize)
            .copied()
            .filter(|&d| d < INFINITE_DISTANCE)
    }

    /// Tentative distances of all nodes; unreached nodes hold [`INFINITE_DISTANCE`]
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Returns *true* if `u` was settled
    pub fn is_visited(&self, u: Node) -> bool {
        self.visited.get(u as usize).copied().unwrap_or(false)
    }

    /// Returns the node preceding `u` on the best known path from the start
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        self.predecessors
            .get(u as usize)
            .copied()
            .flatten()
            .map(|p| p.get())
    }

    /// Nodes in the order they were settled
    pub fn visit_order(&self) -> &[Node] {
        &self.order
    }

    /// Walks the predecessors back from `goal` to the start node and returns the path
    /// `start, ..., goal`. If a predecessor is missing on the way, no path exists and the
    /// result is empty. For `goal == start` the path consists of the start node only.
    ///
    /// The path is a shortest path only if `goal` was settled; for other nodes it follows the
    /// tentative predecessors of an unfinished run.
    ///
    /// # Errors
    /// Returns a range error if `goal` is not a node of the graph.
    pub fn reconstruct_path(&self, goal: Node) -> Result<Vec<Node>> {
        self.graph.check_node(goal)?;

        let mut path = Vec::new();
        let mut current = goal;
        while current != self.start {
            path.push(current);
            match self.predecessor_of(current) {
                Some(p) => current = p,
                None => return Ok(Vec::new()),
            }
        }

        path.push(self.start);
        path.reverse();
        Ok(path)
    }

    /// Returns the shortest path to `goal` with its cost or `None` if `goal` was not settled,
    /// i.e. it is unreachable or the run stopped before reaching it.
    ///
    /// # Errors
    /// Returns a range error if `goal` is not a node of the graph.
    pub fn path_to(&self, goal: Node) -> Result<Option<Path>> {
        let nodes = self.reconstruct_path(goal)?;
        if nodes.is_empty() || !self.is_visited(goal) {
            return Ok(None);
        }

        Ok(Some(Path {
            nodes,
            cost: self.distances[goal as usize],
        }))
    }

    /// Finds the unvisited node with the smallest finite tentative distance
    fn minimum_node(&self) -> Option<Node> {
        let mut min_distance = INFINITE_DISTANCE;
        let mut min_node = None;

        for (u, (&d, &visited)) in self.distances.iter().zip(&self.visited).enumerate() {
            if !visited && d < min_distance {
                min_distance = d;
                min_node = Some(u as Node);
            }
        }

        min_node
    }

    /// Relaxes all edges from `u` to unvisited nodes
    fn relax(&mut self, u: Node) {
        let du = self.distances[u as usize];
        let graph = self.graph;

        for (v, w) in graph.weighted_neighbors_of(u) {
            if self.visited[v as usize] {
                continue;
            }

            let candidate = du + w;
            if candidate < self.distances[v as usize] {
                self.distances[v as usize] = candidate;
                self.predecessors[v as usize] = OptionalNode::new(u);
            }
        }
    }
}

impl<G> Iterator for Dijkstra<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(u) = self.minimum_node() else {
            self.finished = true;
            debug!(
                iterations = self.order.len(),
                "no reachable unvisited node left"
            );
            return None;
        };

        self.visited[u as usize] = true;
        self.order.push(u);

        let point = Point::new(u, self.distances[u as usize]);
        debug!(
            iteration = self.order.len(),
            node = u,
            distance = point.distance,
            "selected node"
        );

        if self.goal == Some(u) {
            self.finished = true;
            debug!(iterations = self.order.len(), "destination reached");
        } else {
            self.relax(u);
            trace!(distances = ?self.distances, "updated distances");
        }

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.visited.len() - self.order.len()))
        }
    }
}

/// Shortest-path queries that are directly callable on graphs
pub trait ShortestPath: WeightedAdjacencyList + Sized {
    /// Starts a Dijkstra run from `start`
    ///
    /// # Errors
    /// Returns a range error if `start` is not a node of the graph.
    fn dijkstra(&self, start: Node) -> Result<Dijkstra<'_, Self>> {
        Dijkstra::new(self, start)
    }

    /// Computes a minimum-cost path from `start` to `goal`.
    /// Returns `None` if `goal` is not reachable from `start`.
    ///
    /// # Errors
    /// Returns a range error if `start` or `goal` is not a node of the graph.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let graph = Graph::try_from_edges(3, [(0, 1, 2.0), (1, 2, 2.0), (0, 2, 5.0)]).unwrap();
    /// let path = graph.shortest_path(0, 2).unwrap().unwrap();
    ///
    /// assert_eq!(path.nodes, vec![0, 1, 2]);
    /// assert_eq!(path.cost, 4.0);
    /// ```
    fn shortest_path(&self, start: Node, goal: Node) -> Result<Option<Path>> {
        Dijkstra::new(self, start)?
            .stop_at(goal)?
            .run()
            .path_to(goal)
    }

    /// Computes the distances from `start` to all nodes (`None` if unreachable)
    ///
    /// # Errors
    /// Returns a range error if `start` is not a node of the graph.
    fn shortest_distances(&self, start: Node) -> Result<Vec<Option<Weight>>> {
        let run = Dijkstra::new(self, start)?.run();
        Ok(self.vertices().map(|u| run.distance_to(u)).collect())
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacencyList + Sized {}

impl LabeledGraph {
    /// Computes a minimum-cost path between two labels and reports it as labels.
    /// Returns `None` if `goal` is not reachable from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownLabel`] if one of the labels does not exist.
    pub fn shortest_labeled_path(&self, start: char, goal: char) -> Result<Option<Path<char>>> {
        let s = self.get_index(start)?;
        let t = self.get_index(goal)?;

        Ok(self.shortest_path(s, t)?.and_then(|path| {
            let nodes = path
                .nodes
                .iter()
                .map(|&u| self.label_of(u))
                .collect::<Option<Vec<char>>>()?;
            Some(Path {
                nodes,
                cost: path.cost,
            })
        }))
    }
}
