/*!
Breadth-first traversal of weighted graphs.

Weights are ignored; the traversal only follows adjacency. The iterator yields every node
reachable from the start node exactly once, the start node first.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// # Errors
    /// Returns a range error if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;

        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;

        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        })
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get(u as usize).copied().unwrap_or(false)
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.visited.iter().position(|&x| !x) {
            None => false,
            Some(u) => {
                self.visited[u] = true;
                self.queue.push_back(u as Node);
                true
            }
        }
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: WeightedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let undiscovered = self.visited.iter().filter(|&&x| !x).count();
        (
            self.queue.len(),
            Some(self.queue.len() + undiscovered),
        )
    }
}

/// Traversal algorithms that are directly callable on graphs
pub trait Traversal: WeightedAdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first-search order
    ///
    /// # Errors
    /// Returns a range error if `start` is not a node of the graph.
    fn bfs(&self, start: Node) -> Result<BFS<'_, Self>> {
        BFS::new(self, start)
    }

    /// Returns `reachable` with `reachable[v] == true` iff there is a path from `start` to `v`
    ///
    /// # Errors
    /// Returns a range error if `start` is not a node of the graph.
    fn reachable_from(&self, start: Node) -> Result<Vec<bool>> {
        let mut bfs = self.bfs(start)?;
        for _ in bfs.by_ref() {}
        Ok(bfs.visited)
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::try_from_edges(
            6,
            [(1, 2, 1.0), (1, 0, 1.0), (4, 3, 1.0), (0, 5, 1.0), (2, 4, 1.0), (5, 4, 1.0)],
        )
        .unwrap();

        let order = graph.bfs(1).unwrap().collect_vec();
        assert_eq!(order.len(), 6);

        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);
    }

    #[test]
    fn bfs_stays_in_component() {
        let graph = Graph::try_from_edges(5, [(0, 1, 2.0), (3, 4, 1.0)]).unwrap();

        assert_eq!(graph.bfs(3).unwrap().collect_vec(), vec![3, 4]);
        assert_eq!(
            graph.reachable_from(0).unwrap(),
            vec![true, true, false, false, false]
        );
        assert!(graph.bfs(5).is_err());
    }

    #[test]
    fn restart_covers_all_nodes() {
        let graph = Graph::try_from_edges(5, [(0, 1, 2.0), (3, 4, 1.0)]).unwrap();
        let mut bfs = graph.bfs(0).unwrap();

        let mut seen = bfs.by_ref().collect_vec();
        while bfs.try_restart_at_unvisited() {
            seen.extend(bfs.by_ref());
        }

        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(bfs.did_visit_node(2));
    }
}
