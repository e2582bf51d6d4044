/*!
# Representations

Two storage backends are provided:

- [`Graph`]: an adjacency-list of `(neighbor, weight)` pairs per node; every undirected edge is
  stored once at each endpoint.
- [`LabeledGraph`]: a [`Graph`] whose nodes are addressed by `char` labels; the first use of a
  label allocates a fresh node.

Both implement the traits in [`ops`](crate::ops) and can thus be fed to every algorithm in
[`algo`](crate::algo).
*/

use crate::{error::*, ops::*, *};

mod graph;
mod labeled;

pub use graph::*;
pub use labeled::*;
