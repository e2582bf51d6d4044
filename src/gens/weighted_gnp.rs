use rand::distr::{Distribution, Uniform};
use tracing::{debug, trace};

use super::*;
use crate::utils::{GeometricJumper, Probability};

/// Distribution of edge weights: uniform over `[low, high)` or constant if `low == high`.
#[derive(Debug, Clone)]
pub enum WeightDistribution {
    /// Every edge gets the same weight
    Constant(Weight),
    /// Uniform over a half-open interval
    Uniform(Uniform<Weight>),
}

impl WeightDistribution {
    /// Creates the distribution for the interval `[low, high)`.
    ///
    /// # Errors
    /// Returns an invalid-argument error if a bound is not finite or `low > high`.
    pub fn new(low: Weight, high: Weight) -> Result<Self> {
        invalid_unless!(
            low.is_finite() && high.is_finite(),
            "weight bounds must be finite, got [{low}, {high})"
        );
        invalid_unless!(low <= high, "w_min = {low} exceeds w_max = {high}");

        if low == high {
            return Ok(Self::Constant(low));
        }

        Uniform::new(low, high)
            .map(Self::Uniform)
            .map_err(|e| GraphError::InvalidParameter(format!("weight range [{low}, {high}): {e}")))
    }
}

impl Distribution<Weight> for WeightDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        match self {
            WeightDistribution::Constant(w) => *w,
            WeightDistribution::Uniform(distr) => distr.sample(rng),
        }
    }
}

/// `G(n,p)` graphs with weighted edges: every unordered pair `{u, v}` with `u != v` is connected
/// with probability `p` (the *density*) independently from all other pairs. Weights are drawn
/// uniformly from `[w_min, w_max)`.
///
/// Self-loops and parallel edges are never generated.
///
/// If [`WeightedGnp::ensure_connected`] is set, [`GraphGenerator::generate`] additionally
/// attaches every node without neighbors to a uniformly random other node. This guarantees
/// that no node is isolated, not that the graph has a single component. A single node has no
/// other node to attach to, so `n == 1` is rejected in this mode.
///
/// # Example
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use wgraphs::{gens::*, prelude::*};
///
/// let rng = &mut StdRng::seed_from_u64(1);
/// let graph = WeightedGnp::new()
///     .nodes(10)
///     .density(1.0)
///     .weights(2.0, 2.0)
///     .generate(rng)
///     .unwrap();
///
/// assert_eq!(graph.number_of_edges(), 45);
/// assert!(graph.edges().all(|e| e.weight() == 2.0));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct WeightedGnp {
    n: NumNodes,
    density: Option<f64>,
    weights: (Weight, Weight),
    ensure_connected: bool,
}

impl Default for WeightedGnp {
    /// No nodes, no density and unit weights
    fn default() -> Self {
        Self {
            n: 0,
            density: None,
            weights: (1.0, 1.0),
            ensure_connected: false,
        }
    }
}

impl WeightedGnp {
    /// Creates a new empty generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the edge probability
    pub fn density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// Updates the weight range `[w_min, w_max)`
    pub fn weights(mut self, w_min: Weight, w_max: Weight) -> Self {
        self.weights = (w_min, w_max);
        self
    }

    /// Attach isolated nodes after sampling
    pub fn ensure_connected(mut self, ensure_connected: bool) -> Self {
        self.ensure_connected = ensure_connected;
        self
    }

    fn checked_density(&self) -> Result<f64> {
        let density = self
            .density
            .ok_or_else(|| GraphError::InvalidParameter("density was not set".into()))?;
        invalid_unless!(
            density.is_valid_probility(),
            "density must be in [0, 1], got {density}"
        );
        Ok(density)
    }

    /// Creates a streaming generator over the random `G(n,p)` edges.
    /// Edges are normalized. The post-processing of [`WeightedGnp::ensure_connected`] is not
    /// part of the stream.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the density is unset or invalid or if the weight
    /// range is invalid.
    pub fn stream<'a, R>(&self, rng: &'a mut R) -> Result<WeightedGnpEdges<'a, R>>
    where
        R: Rng,
    {
        let density = self.checked_density()?;
        let weights = WeightDistribution::new(self.weights.0, self.weights.1)?;

        let n = self.n as u64;
        // Number of unordered pairs of distinct nodes
        let pairs = if n < 2 { 0 } else { n * (n - 1) / 2 };

        Ok(WeightedGnpEdges {
            rng,
            jumper: GeometricJumper::new(density).stop_at(pairs),
            n,
            weights,
        })
    }
}

impl NumNodesGen for WeightedGnp {
    fn set_nodes(&mut self, n: NumNodes) {
        self.n = n;
    }
}

impl GraphGenerator for WeightedGnp {
    fn generate<R>(&self, rng: &mut R) -> Result<Graph>
    where
        R: Rng,
    {
        invalid_unless!(
            !(self.ensure_connected && self.n == 1),
            "a single node cannot be connected to another node"
        );

        let mut graph = Graph::with_nodes(self.n);
        for WeightedEdge(u, v, w) in self.stream(rng)? {
            graph.push_edge(u, v, w);
        }

        let sampled = graph.number_of_edges();
        let attached = if self.ensure_connected {
            let weights = WeightDistribution::new(self.weights.0, self.weights.1)?;
            attach_isolated_nodes(&mut graph, rng, &weights)
        } else {
            0
        };

        debug!(
            nodes = self.n,
            density = ?self.density,
            sampled,
            attached,
            "generated random weighted graph"
        );

        Ok(graph)
    }
}

/// Connects every node without neighbors to a uniformly random other node.
/// Nodes are processed in increasing order, so an attachment may also serve a later node.
/// Returns the number of added edges.
fn attach_isolated_nodes<R>(graph: &mut Graph, rng: &mut R, weights: &WeightDistribution) -> NumEdges
where
    R: Rng,
{
    let n = graph.number_of_nodes();
    if n < 2 {
        return 0;
    }

    let mut attached = 0;
    for u in 0..n {
        if graph.degree_of(u) > 0 {
            continue;
        }

        // Uniform over all nodes except `u`
        let mut v = rng.random_range(0..n - 1);
        if v >= u {
            v += 1;
        }

        let w = weights.sample(rng);
        trace!(node = u, neighbor = v, weight = w, "attached isolated node");
        graph.push_edge(u, v, w);
        attached += 1;
    }

    attached
}

/// Streaming iterator over the weighted edges of a `G(n,p)` graph
#[derive(Debug)]
pub struct WeightedGnpEdges<'a, R>
where
    R: Rng,
{
    rng: &'a mut R,
    jumper: GeometricJumper,
    n: u64,
    weights: WeightDistribution,
}

impl<R> Iterator for WeightedGnpEdges<'_, R>
where
    R: Rng,
{
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.jumper.jump(&mut *self.rng)?;
        let w = self.weights.sample(&mut *self.rng);
        Some(Edge::from_u64_undir(x, self.n).with_weight(w))
    }
}
