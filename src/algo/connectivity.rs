use std::collections::VecDeque;

use itertools::Itertools;

use super::*;

/// Iterator over the connected components of a graph, one `Vec` of vertices
/// per component.
///
/// Seeds are taken in sorted label order; for every yet-unvisited seed a full
/// traversal over its reachable set is run and collected into one component.
/// The frontier type `S` selects the traversal flavor (queue = BFS,
/// stack = DFS); both flavors produce the same partition, they only differ in
/// the order vertices appear within a component.
///
/// An empty graph yields no components; an isolated vertex yields a
/// singleton component.
pub struct ConnectedComponents<'a, G, S, V>
where
    G: AdjacencyList<V>,
    S: VertexSequencer<VisitStep<V>>,
    V: VertexId,
{
    search: TraversalSearch<'a, G, S, V>,
    seeds: std::vec::IntoIter<V>,
}

/// Connected components discovered breadth-first
pub type ConnectedComponentsBfs<'a, G, V> = ConnectedComponents<'a, G, VecDeque<VisitStep<V>>, V>;

/// Connected components discovered depth-first
pub type ConnectedComponentsDfs<'a, G, V> = ConnectedComponents<'a, G, Vec<VisitStep<V>>, V>;

impl<'a, G, S, V> ConnectedComponents<'a, G, S, V>
where
    G: AdjacencyList<V>,
    S: VertexSequencer<VisitStep<V>>,
    V: VertexId,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            search: TraversalSearch::empty(graph),
            seeds: graph.sorted_vertices().into_iter(),
        }
    }
}

impl<G, S, V> Iterator for ConnectedComponents<'_, G, S, V>
where
    G: AdjacencyList<V>,
    S: VertexSequencer<VisitStep<V>>,
    V: VertexId,
{
    type Item = Vec<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let component = self.search.by_ref().map(|step| step.vertex).collect_vec();
            if !component.is_empty() {
                return Some(component);
            }

            loop {
                let seed = self.seeds.next()?;
                if self.search.try_restart_at(&seed) {
                    break;
                }
            }
        }
    }
}

/// Provides connectivity queries directly on graph data structures.
///
/// Two interchangeable component algorithms are exposed: traversal-based
/// (BFS/DFS) and union-find-based. They agree on the produced partition for
/// every graph; use [`sort_components`] to compare their outputs.
pub trait Connectivity<V: VertexId>: AdjacencyList<V> {
    /// Returns an iterator over the connected components, discovered by BFS
    fn connected_components(&self) -> ConnectedComponentsBfs<'_, Self, V> {
        ConnectedComponents::new(self)
    }

    /// Returns an iterator over the connected components, discovered by DFS
    fn connected_components_dfs(&self) -> ConnectedComponentsDfs<'_, Self, V> {
        ConnectedComponents::new(self)
    }

    /// Computes the connected components with a disjoint-set forest: every
    /// vertex starts as a singleton, the endpoints of every edge are
    /// unioned, and the final sets are the components.
    fn union_find_components(&self) -> Vec<Vec<V>> {
        let mut dsu = DisjointSet::new(self.vertices().cloned());
        for edge in self.edges() {
            dsu.union(&edge.u, &edge.v);
        }
        dsu.into_sets()
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> usize {
        self.connected_components().count()
    }

    /// Returns *true* if the graph has at most one connected component.
    /// The empty graph counts as connected.
    fn is_connected(&self) -> bool {
        self.number_of_components() <= 1
    }
}

impl<V: VertexId, G: AdjacencyList<V>> Connectivity<V> for G {}

/// Sorts the vertices in each component and then the components themselves
/// lexicographically, normalizing a partition for comparisons.
pub fn sort_components<V: VertexId>(mut components: Vec<Vec<V>>) -> Vec<Vec<V>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort();
    components
}
