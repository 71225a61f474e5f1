/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A generic traversal iterator ([`TraversalSearch`]) whose frontier data
  structure determines the visiting order: a queue yields **BFS**, a stack
  yields **DFS**.
- Discovery metadata: every yielded [`VisitStep`] carries the vertex together
  with the neighbor it was discovered from, so spanning-tree structure
  (parent maps, path reconstruction) falls out of plain iteration.
- A high-level [`Traversal`] trait that exposes the traversals directly as
  methods on graph data structures.

Traversals read edge weights but ignore them; the weighted solvers live in
the shortest-path module of [`crate::algo`].
*/

use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};

use super::*;

/// One step of a traversal: the visited vertex and its discovery predecessor.
///
/// Seed vertices (traversal starts and restarts) have no predecessor.
#[derive(Debug, Clone)]
pub struct VisitStep<V> {
    pub predecessor: Option<V>,
    pub vertex: V,
}

impl<V> VisitStep<V> {
    fn seed(vertex: V) -> Self {
        Self {
            predecessor: None,
            vertex,
        }
    }

    fn discovered(predecessor: V, vertex: V) -> Self {
        Self {
            predecessor: Some(predecessor),
            vertex,
        }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `VertexSequencer` stores the "to be visited" steps during a traversal.
/// Different implementations determine the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait VertexSequencer<I>: Default {
    /// Pushes an item into the frontier.
    fn push(&mut self, item: I);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<I>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<I> VertexSequencer<I> for VecDeque<I> {
    fn push(&mut self, item: I) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<I> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<I> VertexSequencer<I> for Vec<I> {
    fn push(&mut self, item: I) {
        Vec::push(self, item)
    }
    fn pop(&mut self) -> Option<I> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of steps to visit and a
/// set of already-discovered vertices. The graph is never mutated.
pub struct TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList<V>,
    S: VertexSequencer<VisitStep<V>>,
    V: VertexId,
{
    graph: &'a G,
    visited: FxHashSet<V>,
    sequencer: S,
    stop_at: Option<V>,
}

/// A BFS traversal iterator over the graph, visiting vertices in
/// breadth-first order from a given starting vertex.
pub type Bfs<'a, G, V> = TraversalSearch<'a, G, VecDeque<VisitStep<V>>, V>;

/// A DFS traversal iterator over the graph, visiting vertices in
/// depth-first order from a given starting vertex.
pub type Dfs<'a, G, V> = TraversalSearch<'a, G, Vec<VisitStep<V>>, V>;

impl<'a, G, S, V> TraversalSearch<'a, G, S, V>
where
    G: AdjacencyList<V>,
    S: VertexSequencer<VisitStep<V>>,
    V: VertexId,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// # Panics
    /// Panics if `start` is not a vertex of the graph.
    pub fn new(graph: &'a G, start: &V) -> Self {
        assert!(
            graph.contains_vertex(start),
            "traversal start {start:?} is not a vertex of the graph"
        );
        let mut search = Self::empty(graph);
        search.try_restart_at(start);
        search
    }

    /// Creates an exhausted traversal over `graph` that can be (re)started
    /// with [`TraversalSearch::try_restart_at`].
    pub fn empty(graph: &'a G) -> Self {
        Self {
            graph,
            visited: FxHashSet::default(),
            sequencer: S::default(),
            stop_at: None,
        }
    }

    /// Seeds the search at a yet unvisited vertex and returns *true* iff
    /// successful. Requires that the search came to a hold earlier, i.e.
    /// `self.next()` returned `None`.
    pub fn try_restart_at(&mut self, seed: &V) -> bool {
        debug_assert_eq!(self.sequencer.cardinality(), 0);
        if self.visited.insert(seed.clone()) {
            self.sequencer.push(VisitStep::seed(seed.clone()));
            true
        } else {
            false
        }
    }

    /// Sets a stopper vertex. If it is reached, the iterator returns it and
    /// afterwards only `None`.
    pub fn set_stop_at(&mut self, stopper: V) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If it is reached, the iterator returns it and
    /// afterwards only `None`.
    pub fn stop_at(mut self, stopper: V) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search: it is treated as if it was already
    /// visited, i.e. no edges to or from it are taken.
    ///
    /// # Warning
    /// Has no effect on vertices that are already on the frontier; call this
    /// directly after the constructor.
    pub fn exclude_vertex(&mut self, u: &V) {
        self.visited.insert(u.clone());
    }

    /// Excludes multiple vertices from the search, as by repeated
    /// [`TraversalSearch::exclude_vertex`].
    pub fn exclude_vertices<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = V>,
    {
        for u in us {
            self.visited.insert(u);
        }
    }

    /// Returns *true* if `u` has already been discovered by this search
    pub fn did_visit(&self, u: &V) -> bool {
        self.visited.contains(u)
    }

    /// Shorthand dropping the predecessor information from every step
    pub fn into_vertices(self) -> impl Iterator<Item = V> {
        self.map(|step| step.vertex)
    }

    /// Consumes the traversal and returns the discovery tree as a map from
    /// each reached non-seed vertex to its predecessor.
    pub fn into_parent_map(self) -> FxHashMap<V, V> {
        let mut parents = FxHashMap::default();
        for step in self {
            if let Some(p) = step.predecessor {
                parents.insert(step.vertex, p);
            }
        }
        parents
    }
}

impl<G, S, V> Iterator for TraversalSearch<'_, G, S, V>
where
    G: AdjacencyList<V>,
    S: VertexSequencer<VisitStep<V>>,
    V: VertexId,
{
    type Item = VisitStep<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.sequencer.pop()?;

        if self.stop_at.as_ref() == Some(&step.vertex) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for (v, _) in self.graph.neighbors_of(&step.vertex) {
                if self.visited.insert(v.clone()) {
                    self.sequencer
                        .push(VisitStep::discovered(step.vertex.clone(), v.clone()));
                }
            }
        }

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(
                self.graph.len().saturating_sub(self.visited.len())
                    + self.sequencer.cardinality(),
            ),
        )
    }
}

/// Provides convenient traversal methods directly on graph data structures.
pub trait Traversal<V: VertexId>: AdjacencyList<V> {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Panics
    /// Panics if `start` is not a vertex of the graph.
    fn bfs(&self, start: &V) -> Bfs<'_, Self, V> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Panics
    /// Panics if `start` is not a vertex of the graph.
    fn dfs(&self, start: &V) -> Dfs<'_, Self, V> {
        Dfs::new(self, start)
    }

    /// Computes a path from `start` to `end` with the fewest **edges**,
    /// ignoring weights, using BFS with predecessor tracking.
    ///
    /// Returns the full vertex sequence including both endpoints, or `None`
    /// if either vertex is absent or no path exists. `start == end` yields
    /// the single-vertex path.
    fn hop_path(&self, start: &V, end: &V) -> Option<Vec<V>> {
        if !self.contains_vertex(start) || !self.contains_vertex(end) {
            return None;
        }
        if start == end {
            return Some(vec![start.clone()]);
        }

        let mut parents: FxHashMap<V, V> = FxHashMap::default();
        for step in self.bfs(start) {
            if let Some(p) = step.predecessor {
                parents.insert(step.vertex.clone(), p);
            }
            if step.vertex == *end {
                return Some(shortest_path::reconstruct_path(&parents, start, end));
            }
        }

        None
    }
}

impl<V: VertexId, G: AdjacencyList<V>> Traversal<V> for G {}

#[cfg(test)]
pub mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::repr::AdjMap;

    fn example_graph() -> AdjMap<u32> {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        AdjMap::from_edges([
            (1u32, 2, 1.0),
            (1, 0, 1.0),
            (4, 3, 1.0),
            (0, 5, 1.0),
            (2, 4, 1.0),
            (5, 4, 1.0),
        ])
    }

    #[test]
    fn bfs_order() {
        let graph = example_graph();

        let order = graph.bfs(&1).into_vertices().collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
        assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
        assert_eq!(order[5], 3);

        let order = graph.bfs(&5).into_vertices().collect_vec();
        assert_eq!(order.len(), 6); // 5 reaches everything
        assert_eq!(order[0], 5);
    }

    #[test]
    fn bfs_discovery_tree() {
        let graph = example_graph();

        let mut edges = graph
            .bfs(&1)
            .map(|step| (step.predecessor, step.vertex))
            .collect_vec();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjMap::from_edges([
            (1u32, 2, 1.0),
            (1, 0, 1.0),
            (4, 3, 1.0),
            (0, 5, 1.0),
            (5, 4, 1.0),
        ]);

        let order = graph.dfs(&1).into_vertices().collect_vec();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);

        // whichever neighbor of 1 is expanded last comes next; the chain
        // 0 - 5 - 4 - 3 must appear in this relative order
        let position = |u: u32| order.iter().position(|&v| v == u).unwrap();
        assert!(position(0) < position(5));
        assert!(position(5) < position(4));
        assert!(position(4) < position(3));
    }

    #[test]
    fn stopper_cuts_iteration() {
        let graph = AdjMap::from_edges([(0u32, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);

        assert_eq!(graph.bfs(&0).into_vertices().collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(
            graph.bfs(&0).stop_at(1).into_vertices().collect_vec(),
            vec![0, 1]
        );
    }

    #[test]
    fn excluded_vertices_block_paths() {
        let graph = AdjMap::from_edges([(0u32, 1, 1.0), (1, 2, 1.0), (0, 3, 1.0)]);

        let mut search = Bfs::new(&graph, &0);
        search.exclude_vertex(&1);
        let order = search.into_vertices().collect_vec();
        assert_eq!(order, vec![0, 3]);
    }

    #[test]
    fn parent_map_spans_reachable_set() {
        let graph = example_graph();
        let parents = graph.bfs(&1).into_parent_map();

        assert_eq!(parents.len(), 5); // everything except the seed
        assert!(!parents.contains_key(&1));
        assert_eq!(parents[&0], 1);
    }

    #[test]
    fn hop_path_endpoints() {
        let graph = AdjMap::from_edges([(0u32, 1, 9.0), (1, 2, 9.0), (3, 4, 9.0)]);

        assert_eq!(graph.hop_path(&0, &2), Some(vec![0, 1, 2]));
        assert_eq!(graph.hop_path(&0, &0), Some(vec![0]));
        assert_eq!(graph.hop_path(&0, &4), None); // different component
        assert_eq!(graph.hop_path(&0, &9), None); // absent vertex
    }

    #[test]
    #[should_panic]
    fn bfs_panics_on_absent_start() {
        let graph = AdjMap::from_edges([(0u32, 1, 1.0)]);
        let _ = graph.bfs(&7);
    }
}
