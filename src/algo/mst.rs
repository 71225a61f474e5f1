/*!
Minimum spanning trees and forests.

Two interchangeable constructions:

- **Kruskal**: scans all edges in ascending weight order and accepts an edge
  whenever a [`DisjointSet`] union joins two distinct sets. On a disconnected
  graph this yields a minimum spanning **forest**, one tree per component.
- **Prim**: grows a single tree from a start vertex by repeatedly taking the
  cheapest frontier edge. On a disconnected graph only the start vertex's
  component is spanned — a known asymmetry with Kruskal that callers must
  work around by invoking Prim once per component (or using Kruskal).

Both report the same total weight on connected graphs; the edge sets may
differ when several spanning trees of equal weight exist.
*/

use std::{cmp::Ordering, collections::BinaryHeap};

use fxhash::FxHashSet;

use super::*;

/// A spanning tree/forest: the accepted edges (normalized) and their summed
/// weight. For a connected graph the edge count is `|V| - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<V: VertexId> {
    pub edges: Vec<WeightedEdge<V>>,
    pub total_weight: Weight,
}

impl<V: VertexId> MstResult<V> {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    /// Number of accepted edges
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }
}

/// Selector for the spanning-tree algorithm to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

/// Configurable spanning-tree builder.
///
/// ```ignore
/// let forest = Mst::new(MstAlgorithm::Prim).root("A").run(&graph);
/// ```
#[derive(Debug, Clone)]
pub struct Mst<V: VertexId> {
    algorithm: MstAlgorithm,
    root: Option<V>,
}

impl<V: VertexId> Mst<V> {
    pub fn new(algorithm: MstAlgorithm) -> Self {
        Self {
            algorithm,
            root: None,
        }
    }

    /// Sets the start vertex for Prim's algorithm (ignored by Kruskal).
    /// Without a root, Prim starts at the smallest vertex label.
    pub fn set_root(&mut self, root: V) {
        self.root = Some(root);
    }

    /// Sets the start vertex for Prim's algorithm (ignored by Kruskal).
    /// Without a root, Prim starts at the smallest vertex label.
    pub fn root(mut self, root: V) -> Self {
        self.set_root(root);
        self
    }

    /// Runs the configured algorithm.
    ///
    /// # Panics
    /// Panics if a root was set that is not a vertex of the graph.
    pub fn run<G>(&self, graph: &G) -> MstResult<V>
    where
        G: AdjacencyList<V>,
    {
        match self.algorithm {
            MstAlgorithm::Kruskal => kruskal_core(graph),
            MstAlgorithm::Prim => prim_core(graph, self.root.as_ref()),
        }
    }
}

/// Provides spanning-tree construction directly on graph data structures.
pub trait MinimumSpanningTree<V: VertexId>: AdjacencyList<V> {
    /// Runs the selected algorithm (Prim starts at the smallest label)
    fn minimum_spanning_tree(&self, algorithm: MstAlgorithm) -> MstResult<V> {
        Mst::new(algorithm).run(self)
    }

    /// Sorted-edge scan gated by a disjoint-set forest; spans every
    /// component of a disconnected graph
    fn kruskal(&self) -> MstResult<V> {
        kruskal_core(self)
    }

    /// Cheapest-frontier-edge growth from `root` (or the smallest vertex
    /// label if `None`).
    ///
    /// Only the component containing the start vertex is spanned; other
    /// components contribute neither edges nor weight.
    ///
    /// # Panics
    /// Panics if `root` is given but absent from the graph.
    fn prim(&self, root: Option<&V>) -> MstResult<V> {
        prim_core(self, root)
    }
}

impl<V: VertexId, G: AdjacencyList<V>> MinimumSpanningTree<V> for G {}

fn kruskal_core<G, V>(graph: &G) -> MstResult<V>
where
    G: AdjacencyList<V>,
    V: VertexId,
{
    let mut result = MstResult::empty();
    if graph.is_empty() {
        return result;
    }

    let accept_limit = graph.number_of_vertices() - 1;
    let mut dsu = DisjointSet::new(graph.vertices().cloned());

    for edge in graph.sorted_edges() {
        if dsu.union(&edge.u, &edge.v) {
            result.total_weight += edge.weight;
            result.edges.push(edge.normalized());

            if result.edges.len() == accept_limit {
                break;
            }
        }
    }

    result
}

/// Frontier entry: the cheapest edge `(source, candidate)` leading out of
/// the grown tree. Reverse-ordered for the max-heap, ties break on labels.
struct FrontierEdge<V: VertexId> {
    weight: Weight,
    candidate: V,
    source: V,
}

impl<V: VertexId> PartialEq for FrontierEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
            && self.candidate == other.candidate
            && self.source == other.source
    }
}

impl<V: VertexId> Eq for FrontierEdge<V> {}

impl<V: VertexId> Ord for FrontierEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| (&self.candidate, &self.source).cmp(&(&other.candidate, &other.source)))
    }
}

impl<V: VertexId> PartialOrd for FrontierEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn prim_core<G, V>(graph: &G, root: Option<&V>) -> MstResult<V>
where
    G: AdjacencyList<V>,
    V: VertexId,
{
    let mut result = MstResult::empty();
    if graph.is_empty() {
        return result;
    }

    let start = match root {
        Some(root) => {
            assert!(
                graph.contains_vertex(root),
                "Prim root {root:?} is not a vertex of the graph"
            );
            root.clone()
        }
        None => graph.sorted_vertices().swap_remove(0),
    };

    let mut visited: FxHashSet<V> = FxHashSet::default();
    let mut frontier = BinaryHeap::new();

    visited.insert(start.clone());
    for (neighbor, weight) in graph.neighbors_of(&start) {
        frontier.push(FrontierEdge {
            weight: *weight,
            candidate: neighbor.clone(),
            source: start.clone(),
        });
    }

    while let Some(FrontierEdge {
        weight,
        candidate,
        source,
    }) = frontier.pop()
    {
        if !visited.insert(candidate.clone()) {
            continue;
        }

        result.total_weight += weight;
        result
            .edges
            .push(WeightedEdge::new(source, candidate.clone(), weight).normalized());

        for (neighbor, weight) in graph.neighbors_of(&candidate) {
            if !visited.contains(neighbor) {
                frontier.push(FrontierEdge {
                    weight: *weight,
                    candidate: neighbor.clone(),
                    source: candidate.clone(),
                });
            }
        }
    }

    result
}
