//! # Adjacency
//!
//! Human readable listing of all neighborhoods: one line `u: (v, w) (v, w) ` per node with
//! 0-indexed nodes, in insertion order of the adjacency lists. Write-only.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::*;

/// A writer for the adjacency listing
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyWriter {
    skip_isolated: bool,
}

impl AdjacencyWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit lines of nodes without neighbors
    pub fn skip_isolated(mut self, skip: bool) -> Self {
        self.skip_isolated = skip;
        self
    }
}

impl<G: WeightedAdjacencyList> GraphWriter<G> for AdjacencyWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for u in graph.vertices() {
            if self.skip_isolated && graph.degree_of(u) == 0 {
                continue;
            }

            write!(writer, "{u}: ")?;
            for (v, w) in graph.weighted_neighbors_of(u) {
                write!(writer, "({v}, {w}) ")?;
            }
            writeln!(writer)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph as adjacency listing.
/// Shorthand for default settings.
pub trait AdjacencyWrite {
    /// Tries to write the graph to a writer
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_adjacency_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_adjacency(writer)
    }
}

impl<G: WeightedAdjacencyList> AdjacencyWrite for G {
    fn try_write_adjacency<W: Write>(&self, writer: W) -> Result<()> {
        AdjacencyWriter::default().try_write_graph(self, writer)
    }
}
