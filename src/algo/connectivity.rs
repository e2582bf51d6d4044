use itertools::Itertools;

use super::*;

pub trait Connectivity: Traversal {
    /// Returns the connected components of the graph, each as a list of nodes in BFS order.
    /// Components are ordered by their smallest node.
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let Ok(mut bfs) = self.bfs(0) else {
            return Vec::new();
        };

        let mut components = vec![bfs.by_ref().collect_vec()];
        while bfs.try_restart_at_unvisited() {
            components.push(bfs.by_ref().collect_vec());
        }

        components
    }

    /// Returns the number of connected components (isolated nodes count as components)
    fn number_of_connected_components(&self) -> usize {
        self.connected_components().len()
    }

    /// Returns *true* if every node can reach every other node.
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        match self.reachable_from(0) {
            Ok(reachable) => reachable.into_iter().all(|x| x),
            Err(_) => self.is_empty(),
        }
    }
}

impl<G> Connectivity for G where G: Traversal {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_of_forest() {
        let graph = Graph::try_from_edges(6, [(0, 3, 1.0), (3, 5, 1.0), (1, 4, 2.0)]).unwrap();

        assert_eq!(
            graph.connected_components(),
            vec![vec![0, 3, 5], vec![1, 4], vec![2]]
        );
        assert_eq!(graph.number_of_connected_components(), 3);
        assert!(!graph.is_connected());
    }

    #[test]
    fn components_cover_every_node_once() {
        assert!(Graph::new().connected_components().is_empty());
        assert_eq!(Graph::with_nodes(3).number_of_connected_components(), 3);

        let graph = Graph::try_from_edges(7, [(6, 2, 1.0), (2, 4, 1.0), (5, 1, 3.0)]).unwrap();
        let components = graph.connected_components();

        assert_eq!(components.len(), 4);
        assert!(components.iter().all(|c| !c.is_empty()));
        assert_eq!(components.iter().map(|c| c[0]).collect_vec(), vec![0, 1, 2, 3]);

        let mut nodes = components.concat();
        nodes.sort_unstable();
        assert_eq!(nodes, (0..7).collect_vec());
    }

    #[test]
    fn connected_graphs() {
        assert!(Graph::new().is_connected());
        assert!(Graph::with_nodes(1).is_connected());
        assert!(!Graph::with_nodes(2).is_connected());

        let path = Graph::try_from_edges(4, [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
        assert!(path.is_connected());
    }
}
