//! # EdgeList
//!
//! The EdgeList-Format consists of a header `p wgraph <n> <m>`, followed by
//! `m` non-comment-lines `u v w` representing the undirected edge `{u, v}`
//! of weight `w`. Lines starting with the comment identifier (default `c`)
//! are skipped.
//!
//! The header's vertex count is informational: vertices are materialized
//! from the edge lines, so isolated vertices are not representable in this
//! format (use programmatic construction for those).

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Write},
    path::Path,
};

use super::*;
use crate::{edge::WeightedEdge, ops::*, vertex::*};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Expected header format
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// A line is a comment iff its first token equals the identifier, so
    /// labels merely starting with it are not swallowed
    fn is_payload(&self, line: &str) -> bool {
        match line.split_whitespace().next() {
            None => false,
            Some(first) => first != self.comment_identifier,
        }
    }
}

impl<V, G> GraphReader<V, G> for EdgeListReader
where
    V: VertexId + std::str::FromStr,
    G: GraphFromEdges<V>,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = reader.lines();

        let header_line = loop {
            match lines.next().transpose()? {
                None => return Err(io_error!(ErrorKind::NotFound, "Header not found")),
                Some(line) if self.is_payload(&line) => break line,
                Some(_) => {}
            }
        };
        let (_, m) = self.header.parse_header(header_line)?;

        let mut edges: Vec<WeightedEdge<V>> = Vec::with_capacity(m);
        for line in lines {
            let line = line?;
            if !self.is_payload(&line) {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let u: V = parse_next_value!(tokens, "source vertex");
            let v: V = parse_next_value!(tokens, "target vertex");
            let w: Weight = parse_next_value!(tokens, "edge weight");
            raise_error_unless!(
                tokens.next().is_none(),
                ErrorKind::InvalidData,
                "Trailing tokens after edge line"
            );

            edges.push(WeightedEdge::new(u, v, w));
        }

        raise_error_unless!(
            edges.len() == m,
            ErrorKind::InvalidData,
            format!("Header announced {m} edges but {} were found", edges.len())
        );

        Ok(G::from_edges(edges))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead<V: VertexId + std::str::FromStr>: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<V, G> EdgeListRead<V> for G
where
    V: VertexId + std::str::FromStr,
    G: GraphFromEdges<V>,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A GraphWriter for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Header format to emit
    header: Header,
}

impl EdgeListWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListWriter {
        self.header = format;
        self
    }
}

impl<V, G> GraphWriter<V, G> for EdgeListWriter
where
    V: VertexId + Display,
    G: AdjacencyList<V>,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header.write_header(
            &mut writer,
            graph.number_of_vertices(),
            graph.number_of_edges(),
        )?;

        for edge in graph.sorted_edges() {
            writeln!(
                writer,
                "{} {} {}",
                format_label(&edge.u)?,
                format_label(&edge.v)?,
                edge.weight
            )?;
        }
        Ok(())
    }
}

/// Trait for writing graphs with default EdgeListWriter settings
pub trait EdgeListWrite<V: VertexId + Display>: AdjacencyList<V> {
    /// Tries to write the graph to a given writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }

    /// Tries to write the graph to a given file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_edge_list(BufWriter::new(File::create(path)?))
    }
}

impl<V: VertexId + Display, G: AdjacencyList<V>> EdgeListWrite<V> for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::AdjMap;

    fn example() -> AdjMap<String> {
        AdjMap::from_edges(
            [("A", "B", 4.0), ("B", "C", 3.5), ("A", "C", 2.0)]
                .map(|(u, v, w)| (u.to_string(), v.to_string(), w)),
        )
    }

    #[test]
    fn writes_header_and_sorted_edges() {
        let mut buffer = Vec::new();
        example().try_write_edge_list(&mut buffer).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, "p wgraph 3 3\nA C 2\nB C 3.5\nA B 4\n");
    }

    #[test]
    fn round_trip() {
        let graph = example();

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();
        let reread = AdjMap::<String>::try_read_edge_list(&buffer[..]).unwrap();

        assert_eq!(reread.number_of_vertices(), graph.number_of_vertices());
        assert_eq!(reread.number_of_edges(), graph.number_of_edges());
        for edge in graph.edges() {
            assert_eq!(reread.weight_of(&edge.u, &edge.v), Some(edge.weight));
        }
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "c weighted demo graph\n\np wgraph 2 1\nc payload follows\nA B 2.5\n";
        let graph = AdjMap::<String>::try_read_edge_list(input.as_bytes()).unwrap();

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_of(&"A".into(), &"B".into()), Some(2.5));
    }

    #[test]
    fn rejects_malformed_input() {
        // missing header
        assert!(AdjMap::<String>::try_read_edge_list("A B 1\n".as_bytes()).is_err());

        // header announces more edges than present
        assert!(AdjMap::<String>::try_read_edge_list("p wgraph 2 2\nA B 1\n".as_bytes()).is_err());

        // weight is not a number
        assert!(
            AdjMap::<String>::try_read_edge_list("p wgraph 2 1\nA B heavy\n".as_bytes()).is_err()
        );

        // trailing garbage on an edge line
        assert!(
            AdjMap::<String>::try_read_edge_list("p wgraph 2 1\nA B 1 extra\n".as_bytes()).is_err()
        );
    }

    #[test]
    fn rejects_unwritable_labels() {
        let graph: AdjMap<&str> = AdjMap::from_edges([("two words", "B", 1.0)]);
        let mut buffer = Vec::new();
        assert!(graph.try_write_edge_list(&mut buffer).is_err());
    }
}
