//! # EdgeList
//!
//! The weighted EdgeList-Format consists of a header `p wg {n} {m}`, followed by `m`
//! non-comment-lines `u v w` representing the undirected edge `{u - 1, v - 1}` with weight `w`.
//!
//! ```text
//! c a triangle with one heavy edge
//! p wg 3 3
//! 1 2 1.5
//! 2 3 1
//! 1 3 10
//! ```

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Lines, Write},
    path::Path,
};

use super::*;

/// A GraphReader for the weighted EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Second token of the header
    problem_identifier: String,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            problem_identifier: "wg".to_string(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the expected problem identifier of the header
    pub fn problem_identifier<S: Into<String>>(mut self, p: S) -> EdgeListReader {
        self.problem_identifier = p.into();
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Parses `p {problem} {n} {m}`
    fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            format!("Header `{line}` does not start with `p`")
        );
        raise_error_unless!(
            parts.next() == Some(self.problem_identifier.as_str()),
            ErrorKind::InvalidData,
            format!(
                "Header `{line}` does not match problem `{}`",
                self.problem_identifier
            )
        );

        let n: NumNodes = parse_next_value!(parts, "number of nodes");
        let m: NumEdges = parse_next_value!(parts, "number of edges");

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Trailing tokens in header `{line}`")
        );

        Ok((n, m))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = EdgeListLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (n, m) = self.parse_header(&header)?;

        let mut edges = Vec::with_capacity(m as usize);
        while let Some(line) = lines.next_non_comment_line()? {
            edges.push(parse_edge_line(&line, n)?);
        }

        raise_error_unless!(
            edges.len() == m as usize,
            ErrorKind::InvalidData,
            format!("Header announced {m} edges, found {}", edges.len())
        );

        G::try_from_edges(n, edges).map_err(|e| io_error!(ErrorKind::InvalidData, e))
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Lines of the input without comments and blank lines
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> EdgeListLines<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.starts_with(self.comment_identifier) || line.trim().is_empty() =>
                {
                    continue
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Parses `u v w` with 1-indexed nodes
fn parse_edge_line(line: &str, n: NumNodes) -> Result<WeightedEdge> {
    let mut parts = line.split_whitespace();

    let from: Node = parse_next_value!(parts, "source node");
    let dest: Node = parse_next_value!(parts, "target node");
    let weight: Weight = parse_next_value!(parts, "edge weight");

    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        format!("Trailing tokens in edge line `{line}`")
    );
    raise_error_unless!(
        (1..=n).contains(&from) && (1..=n).contains(&dest),
        ErrorKind::InvalidData,
        format!("Edge `{line}` references a node outside of 1..={n}")
    );

    Ok(WeightedEdge(from - 1, dest - 1, weight))
}

/// A writer for the weighted EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    problem_identifier: String,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            problem_identifier: "wg".to_string(),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem identifier written into the header
    pub fn problem_identifier<S: Into<String>>(mut self, p: S) -> EdgeListWriter {
        self.problem_identifier = p.into();
        self
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "p {} {} {}",
            self.problem_identifier,
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for WeightedEdge(u, v, w) in graph.edges() {
            writeln!(writer, "{} {} {}", u + 1, v + 1, w)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the weighted EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
