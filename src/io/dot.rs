//! # Dot
//!
//! The Dot-Format is a very extensive format used by
//! [GraphViz](https://graphviz.org/) to allow for detailed visualizations.
//! We only use basic functionality to draw vertices and weighted edges.
//!
//! For example, drawing a graph with edge weights as labels can be achieved
//! via
//! ```ignore
//! let dot_writer = DotWriter::default();
//! dot_writer.try_write_graph(&graph, &mut writer)?;
//! ```
//!
//! The format is write-only: there is no corresponding reader. Vertex labels
//! must follow DOT's naming conventions (no spaces, hyphens, or other
//! special characters).

use std::io::Write;

use super::*;
use crate::{ops::*, vertex::VertexId};

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Emit edge weights as `[label=...]` attributes
    weight_labels: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            weight_labels: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *false*, edges are drawn without their weight
    pub fn weight_labels(mut self, weight_labels: bool) -> Self {
        self.weight_labels = weight_labels;
        self
    }

    /// Writes the opening bracket of an undirected graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "graph {{")
    }

    /// Writes a standalone vertex statement (needed for isolated vertices)
    pub fn write_vertex<W, V>(&self, writer: &mut W, u: &V) -> Result<()>
    where
        W: Write,
        V: VertexId + Display,
    {
        writeln!(writer, "  {};", format_label(u)?)
    }

    /// Writes an iterator of weighted edges to `writer`
    pub fn write_edges<W, V, I>(&self, writer: &mut W, edges: I) -> Result<()>
    where
        W: Write,
        V: VertexId + Display,
        I: IntoIterator<Item = crate::edge::WeightedEdge<V>>,
    {
        for edge in edges {
            let (u, v) = (format_label(&edge.u)?, format_label(&edge.v)?);
            if self.weight_labels {
                writeln!(writer, "  {u} -- {v} [label={}];", edge.weight)?;
            } else {
                writeln!(writer, "  {u} -- {v};")?;
            }
        }
        Ok(())
    }

    /// Writes the closing bracket of the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<V, G> GraphWriter<V, G> for DotWriter
where
    V: VertexId + Display,
    G: AdjacencyList<V>,
{
    /// Writes the whole graph: isolated vertices first, then all edges
    /// sorted by endpoints for reproducible output.
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.start_graph(&mut writer)?;

        for u in graph.sorted_vertices() {
            if graph.degree_of(&u) == 0 {
                self.write_vertex(&mut writer, &u)?;
            }
        }

        let mut edges = graph.edges().collect::<Vec<_>>();
        edges.sort_by(|a, b| (&a.u, &a.v).cmp(&(&b.u, &b.v)));
        self.write_edges(&mut writer, edges)?;

        self.finish_graph(&mut writer)
    }
}

/// Trait for writing graphs with default DotWriter settings
pub trait DotWrite<V: VertexId + Display>: AdjacencyList<V> {
    /// Tries to write the graph to a given writer
    fn try_write_dot<W: Write>(&self, writer: W) -> Result<()> {
        DotWriter::default().try_write_graph(self, writer)
    }

    /// Tries to write the graph to a given file
    fn try_write_dot_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        self.try_write_dot(BufWriter::new(File::create(path)?))
    }
}

impl<V: VertexId + Display, G: AdjacencyList<V>> DotWrite<V> for G {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repr::AdjMap;

    #[test]
    fn renders_edges_with_weight_labels() {
        let mut graph: AdjMap<&str> = AdjMap::from_edges([("A", "B", 4.0), ("B", "C", 1.5)]);
        graph.add_vertex("Z");

        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(
            written,
            "graph {\n  Z;\n  A -- B [label=4];\n  B -- C [label=1.5];\n}\n"
        );
    }

    #[test]
    fn format_dispatch_matches_direct_writers() {
        let graph: AdjMap<&str> = AdjMap::from_edges([("A", "B", 4.0)]);

        for format in ["dot", "edgelist"] {
            let format: FileFormat = format.parse().unwrap();

            let mut dispatched = Vec::new();
            graph.try_write(&mut dispatched, format).unwrap();

            let mut direct = Vec::new();
            match format {
                FileFormat::Dot => graph.try_write_dot(&mut direct).unwrap(),
                FileFormat::EdgeList => graph.try_write_edge_list(&mut direct).unwrap(),
            }
            assert_eq!(dispatched, direct);
        }

        assert!("adjacency-matrix".parse::<FileFormat>().is_err());
    }

    #[test]
    fn weight_labels_can_be_disabled() {
        let graph = AdjMap::from_edges([(1u32, 2, 4.0)]);

        let mut buffer = Vec::new();
        DotWriter::new()
            .weight_labels(false)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "graph {\n  1 -- 2;\n}\n");
    }
}
