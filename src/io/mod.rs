/*!
# IO

Utilities for reading and writing weighted graphs from and to text.

## Formats

- **EdgeList**: a header line `p wg {n} {m}` followed by `m` lines `u v w`, where nodes are
  1-indexed and `w` is the weight of the undirected edge `{u - 1, v - 1}`. Lines starting with
  `c` are comments. Supports reading and writing.
- **Adjacency**: one line per node listing its neighborhood as `u: (v, w) (v, w) `.
  Meant for humans; writing only.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod adjacency;
pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use adjacency::*;
pub use edge_list::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Weighted edge list with header
    EdgeList,
    /// Human readable neighborhood listing
    Adjacency,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" => Ok(FileFormat::EdgeList),
            "adjacency" | "adj" => Ok(FileFormat::Adjacency),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading graphs when only a [`FileFormat`] is known.
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the format is unsupported for reading
    /// or if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input
    /// is invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: EdgeListRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::EdgeList => Self::try_read_edge_list(reader),
            FileFormat::Adjacency => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("{format:?} does not support GraphRead")
            )),
        }
    }
}

/// Trait for writing graphs when only a [`FileFormat`] is known.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: EdgeListWrite + AdjacencyWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => self.try_write_edge_list(writer),
            FileFormat::Adjacency => self.try_write_adjacency(writer),
        }
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value `{next}` found. Cannot parse {}.", $name)
                ))
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::example_graph;

    #[test]
    fn file_format_from_str() {
        assert_eq!("EdgeList".parse::<FileFormat>().unwrap(), FileFormat::EdgeList);
        assert_eq!("adj".parse::<FileFormat>().unwrap(), FileFormat::Adjacency);
        assert!("metis".parse::<FileFormat>().is_err());
    }

    #[test]
    fn dispatch_by_format() {
        let graph = example_graph().into_graph();

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::EdgeList)
            .unwrap();
        let read = Graph::try_from_reader(buffer.as_slice(), FileFormat::EdgeList).unwrap();
        assert_eq!(read.ordered_edges(), graph.ordered_edges());

        let mut buffer = Vec::new();
        graph
            .try_write_to_writer(&mut buffer, FileFormat::Adjacency)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), graph.to_string());

        let err = Graph::try_from_reader("".as_bytes(), FileFormat::Adjacency).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn file_roundtrip() {
        let graph = example_graph().into_graph();
        let path = std::env::temp_dir().join(format!("wgraphs-io-{}.el", std::process::id()));

        graph.try_write_to_file(&path, FileFormat::EdgeList).unwrap();
        let read = Graph::try_from_file(&path, FileFormat::EdgeList).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read.number_of_nodes(), graph.number_of_nodes());
        assert_eq!(read.ordered_edges(), graph.ordered_edges());
    }
}
