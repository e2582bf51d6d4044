/*!
# Graph Generators

Random weighted graphs for experiments and tests.

Generators follow a builder pattern:

1. Create a generator instance (e.g., `WeightedGnp::new()`).
2. Set parameters (e.g., `.nodes(n).density(p).weights(1.0, 10.0)`).
3. Generate edges via `stream()` or a whole [`Graph`] via `generate()`.

All randomness is drawn from a caller-provided [`Rng`] so that a seeded generator reproduces
the same graph.

Supported models:
- G(n,p) with uniform edge weights ([`WeightedGnp`]), optionally post-processed so that no node
  is left isolated.
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod weighted_gnp;

pub use weighted_gnp::*;

/// Trait for generators that allow setting the number of nodes.
///
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// General trait for a configurable random graph generator.
pub trait GraphGenerator {
    /// Generates a random graph.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the configured parameters do not describe a valid
    /// random graph model.
    fn generate<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng;
}

/// Generates a random `G(n,p)` graph with `n` nodes, where every unordered pair of distinct nodes
/// is connected with probability `density` and weights are drawn uniformly from `[w_min, w_max)`.
///
/// If `ensure_connected` is set, every node that ends up without neighbors is attached to a
/// uniformly random other node.
///
/// # Errors
/// Returns an invalid-argument error if `density` is not in `[0, 1]`, if `w_min > w_max` or if
/// one of the weight bounds is not finite. With `ensure_connected`, a single node (`n == 1`) is
/// rejected as well since it cannot be attached to another node.
///
/// # Example
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wgraphs::{gens::*, prelude::*};
///
/// let rng = &mut StdRng::seed_from_u64(42);
/// let graph = generate_random_graph(rng, 20, 0.1, 1.0, 10.0, true).unwrap();
///
/// assert_eq!(graph.number_of_nodes(), 20);
/// assert_eq!(graph.isolated_nodes().count(), 0);
/// assert!(generate_random_graph(rng, 20, 1.5, 1.0, 10.0, true).is_err());
/// ```
pub fn generate_random_graph<R>(
    rng: &mut R,
    n: NumNodes,
    density: f64,
    w_min: Weight,
    w_max: Weight,
    ensure_connected: bool,
) -> Result<Graph>
where
    R: Rng,
{
    WeightedGnp::new()
        .nodes(n)
        .density(density)
        .weights(w_min, w_max)
        .ensure_connected(ensure_connected)
        .generate(rng)
}
