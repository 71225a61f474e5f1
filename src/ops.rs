use itertools::Itertools;

use crate::{edge::*, error::GraphError, vertex::*};

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphOrder<V: VertexId> {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in unspecified order.
    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a
    where
        V: 'a;

    /// Returns *true* if `u` is a vertex of the graph
    fn contains_vertex(&self, u: &V) -> bool;

    /// Returns all vertices sorted by their label order.
    ///
    /// The backing store iterates in hash order; algorithms that promise a
    /// deterministic result seed themselves from this order instead.
    fn sorted_vertices(&self) -> Vec<V> {
        let mut vertices = self.vertices().cloned().collect_vec();
        vertices.sort_unstable();
        vertices
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder<V: VertexId>: GraphOrder<V> {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList<V: VertexId>: GraphEdgeOrder<V> + Sized {
    /// Returns the (open) neighborhood of a given vertex as `(neighbor, weight)`
    /// pairs, or the empty slice if `u` is not a vertex of the graph.
    fn neighbors_of(&self, u: &V) -> &[(V, Weight)];

    /// Returns the number of neighbors of `u` (0 if `u` is absent)
    fn degree_of(&self, u: &V) -> NumVertices {
        self.neighbors_of(u).len()
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a
    where
        V: 'a,
    {
        self.vertices().filter(|u| self.degree_of(u) > 0)
    }

    /// Returns *true* if `u` is a vertex with no incident edges
    fn is_isolated(&self, u: &V) -> bool {
        self.contains_vertex(u) && self.degree_of(u) == 0
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumVertices {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns an iterator over all undirected edges, each reported exactly
    /// once in normalized form (smaller endpoint first). Self-loops are
    /// reported once.
    fn edges<'a>(&'a self) -> impl Iterator<Item = WeightedEdge<V>> + 'a
    where
        V: 'a,
    {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .iter()
                .filter(move |(v, _)| u <= v)
                .map(move |(v, w)| WeightedEdge::new(u.clone(), v.clone(), *w))
        })
    }

    /// Returns an iterator over both directed half-entries of every edge,
    /// i.e. each undirected edge `{u, v}` is reported as `(u, v)` and `(v, u)`.
    /// Self-loops are reported once.
    fn half_edges<'a>(&'a self) -> impl Iterator<Item = WeightedEdge<V>> + 'a
    where
        V: 'a,
    {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .iter()
                .map(move |(v, w)| WeightedEdge::new(u.clone(), v.clone(), *w))
        })
    }

    /// Returns all edges sorted by `(weight, u, v)`.
    ///
    /// Ties on equal weights break by endpoint labels, so the order is total
    /// and reproducible across runs.
    fn sorted_edges(&self) -> Vec<WeightedEdge<V>> {
        let mut edges = self.edges().collect_vec();
        edges.sort_unstable_by(|a, b| {
            a.weight
                .partial_cmp(&b.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| (&a.u, &a.v).cmp(&(&b.u, &b.v)))
        });
        edges
    }
}

/// Trait to test existence and weight of single edges in a graph.
pub trait AdjacencyTest<V: VertexId>: GraphOrder<V> {
    /// Returns the weight of the edge `{u, v}` if it exists
    fn weight_of(&self, u: &V, v: &V) -> Option<Weight>;

    /// Returns *true* if the edge `{u, v}` exists in the graph
    fn has_edge(&self, u: &V, v: &V) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns *true* if a self-loop `{u, u}` exists
    fn has_self_loop(&self, u: &V) -> bool {
        self.has_edge(u, u)
    }
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEdgeEditing<V: VertexId>: Default {
    /// Creates an empty graph with no vertices
    fn new() -> Self {
        Self::default()
    }

    /// Adds the vertex `u` to the graph. Idempotent: adding an existing
    /// vertex leaves the graph unchanged.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, u: V) -> bool;

    /// Adds the edge `{u, v}` with the given weight to the graph, creating
    /// absent endpoints on the fly. If the edge already exists, its weight is
    /// overwritten on both adjacency lists rather than duplicated.
    fn add_edge(&mut self, u: V, v: V, weight: Weight) {
        self.try_add_edge(u, v, weight);
    }

    /// Adds the edge `{u, v}` to the graph.
    /// Returns *true* exactly if the edge was not present previously
    /// (an overwrite of an existing weight returns *false*).
    fn try_add_edge(&mut self, u: V, v: V, weight: Weight) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge<V>>>) {
        for edge in edges {
            let WeightedEdge { u, v, weight } = edge.into();
            self.add_edge(u, v, weight);
        }
    }

    /// Removes the vertex `u` and purges it from every neighbor list.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] (and leaves the graph
    /// unchanged) if `u` is not a vertex of the graph.
    fn remove_vertex(&mut self, u: &V) -> Result<(), GraphError<V>>;

    /// Removes the edge `{u, v}` from both adjacency lists.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is absent
    /// and [`GraphError::EdgeNotFound`] if both exist but are not adjacent.
    fn remove_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError<V>>;

    /// Removes all vertices and edges
    fn clear(&mut self);
}

/// A super trait for creating a graph from scratch from a set of edges
pub trait GraphFromEdges<V: VertexId>: GraphEdgeEditing<V> {
    /// Create a graph from an iterator over weighted edges
    fn from_edges(edges: impl IntoIterator<Item = impl Into<WeightedEdge<V>>>) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }
}

impl<V: VertexId, G: GraphEdgeEditing<V>> GraphFromEdges<V> for G {}
