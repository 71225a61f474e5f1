/*!
# IO

Utilities for reading and writing weighted graphs from and to different file
formats.

## Input Formats

Currently supported input formats:
- **EdgeList**: Represents the graph as a header line followed by one
  `u v w` line per edge.

## Output Formats

For writing graphs, in addition to the above, the following is supported:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of
  [GraphViz](https://graphviz.org/), with edge weights emitted as labels.

The DOT format is write-only and requires vertex labels to follow DOT's
naming conventions (no spaces, hyphens, or other special characters).

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers
  for a specific format.
- [`EdgeListRead`], [`EdgeListWrite`] and [`DotWrite`] are shorthands using
  the default settings of the respective format.
*/

pub mod dot;
pub mod edge_list;

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use smallvec::SmallVec;

use crate::{
    edge::NumEdges,
    ops::AdjacencyList,
    vertex::{NumVertices, VertexId},
};

pub use dot::*;
pub use edge_list::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// DOT language of GraphViz (write-only)
    Dot,
    /// Edge list format
    EdgeList,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" => Ok(FileFormat::Dot),
            "edgelist" => Ok(FileFormat::EdgeList),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// Generic over the vertex type `V` (which must be parseable from its
/// written form) and the produced graph type `G`.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<V, G> {
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
    /// Internally wraps the file in a buffered reader.
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
///
/// Generic over the vertex type `V` (which must render to a parseable
/// token) and the written graph type `G`.
pub trait GraphWriter<V, G> {
    /// Writes the graph to the given writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait to write a graph in a given [`FileFormat`] using the default
/// settings of the corresponding writer.
pub trait GraphWrite<V: VertexId + Display>: AdjacencyList<V> {
    /// Writes the graph in the requested format.
    ///
    /// # Errors
    /// Returns an error if writing fails or a vertex label cannot be
    /// represented in the format.
    fn try_write<W: Write>(&self, writer: W, format: FileFormat) -> Result<()> {
        match format {
            FileFormat::Dot => self.try_write_dot(writer),
            FileFormat::EdgeList => self.try_write_edge_list(writer),
        }
    }
}

impl<V: VertexId + Display, G: AdjacencyList<V>> GraphWrite<V> for G {}

/// The header line `p <problem> <n> <m>` preceding the payload of line-based
/// formats, carrying the vertex and edge counts.
#[derive(Debug, Clone)]
pub struct Header {
    problem: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            problem: "wgraph".to_string(),
        }
    }
}

impl Header {
    /// Updates the expected problem identifier
    pub fn problem<S: Into<String>>(mut self, problem: S) -> Self {
        self.problem = problem.into();
        self
    }

    /// Parses a header line and returns the announced `(n, m)` counts.
    ///
    /// # Errors
    /// Returns an error if the line does not match `p <problem> <n> <m>`.
    pub fn parse_header<S: AsRef<str>>(&self, line: S) -> Result<(NumVertices, NumEdges)> {
        let tokens: SmallVec<[&str; 4]> = line.as_ref().split_whitespace().collect();

        raise_error_unless!(
            tokens.len() == 4 && tokens[0] == "p",
            ErrorKind::InvalidData,
            "Invalid header found"
        );
        raise_error_unless!(
            tokens[1] == self.problem,
            ErrorKind::InvalidData,
            format!("Expected problem {:?}", self.problem)
        );

        let mut values = tokens[2..].iter().copied();
        let n = parse_next_value!(values, "number of vertices");
        let m = parse_next_value!(values, "number of edges");
        Ok((n, m))
    }

    /// Writes the header line for the given counts
    pub fn write_header<W>(&self, writer: &mut W, n: NumVertices, m: NumEdges) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "p {} {n} {m}", self.problem)
    }
}

/// Formats a vertex label for line-based output, rejecting labels that the
/// reader could not tokenize back.
pub(crate) fn format_label<V: Display>(label: &V) -> Result<String> {
    let formatted = label.to_string();
    raise_error_unless!(
        !formatted.is_empty() && !formatted.contains(char::is_whitespace),
        ErrorKind::InvalidData,
        format!("Vertex label {formatted:?} is empty or contains whitespace")
    );
    Ok(formatted)
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
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse().ok();
        raise_error_unless!(
            parsed.is_some(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
