use fxhash::FxHashMap;

use crate::{edge::*, error::GraphError, ops::*, vertex::*};

/// An undirected weighted graph stored as adjacency lists keyed by label.
///
/// Every edge `{u, v}` is present in both endpoint lists (a self-loop only in
/// its single list). At most one edge exists per unordered vertex pair;
/// re-adding an existing pair overwrites its weight on both sides.
#[derive(Clone)]
pub struct AdjMap<V: VertexId> {
    adj: FxHashMap<V, Vec<(V, Weight)>>,
    num_edges: NumEdges,
}

impl<V: VertexId> Default for AdjMap<V> {
    fn default() -> Self {
        Self {
            adj: FxHashMap::default(),
            num_edges: 0,
        }
    }
}

impl<V: VertexId> AdjMap<V> {
    /// Position of `v` in `u`'s adjacency list, if adjacent
    fn neighbor_index(&self, u: &V, v: &V) -> Option<usize> {
        self.adj.get(u)?.iter().position(|(w, _)| w == v)
    }
}

impl<V: VertexId> GraphOrder<V> for AdjMap<V> {
    fn number_of_vertices(&self) -> NumVertices {
        self.adj.len()
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V> + 'a
    where
        V: 'a,
    {
        self.adj.keys()
    }

    fn contains_vertex(&self, u: &V) -> bool {
        self.adj.contains_key(u)
    }
}

impl<V: VertexId> GraphEdgeOrder<V> for AdjMap<V> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<V: VertexId> AdjacencyList<V> for AdjMap<V> {
    fn neighbors_of(&self, u: &V) -> &[(V, Weight)] {
        self.adj.get(u).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<V: VertexId> AdjacencyTest<V> for AdjMap<V> {
    fn weight_of(&self, u: &V, v: &V) -> Option<Weight> {
        let (_, weight) = self.adj.get(u)?.iter().find(|(w, _)| w == v)?;
        Some(*weight)
    }
}

impl<V: VertexId> GraphEdgeEditing<V> for AdjMap<V> {
    fn add_vertex(&mut self, u: V) -> bool {
        match self.adj.entry(u) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    fn try_add_edge(&mut self, u: V, v: V, weight: Weight) -> bool {
        debug_assert!(weight.is_finite(), "edge weights must be finite");

        self.add_vertex(u.clone());
        self.add_vertex(v.clone());

        let list = self.adj.get_mut(&u).unwrap();
        if let Some(idx) = list.iter().position(|(w, _)| *w == v) {
            list[idx].1 = weight;
            if u != v {
                let back = self.adj.get_mut(&v).unwrap();
                let idx = back.iter().position(|(w, _)| *w == u).unwrap();
                back[idx].1 = weight;
            }
            return false;
        }

        list.push((v.clone(), weight));
        if u != v {
            self.adj.get_mut(&v).unwrap().push((u, weight));
        }
        self.num_edges += 1;
        true
    }

    fn remove_vertex(&mut self, u: &V) -> Result<(), GraphError<V>> {
        let neighbors = self
            .adj
            .remove(u)
            .ok_or_else(|| GraphError::VertexNotFound(u.clone()))?;

        self.num_edges -= neighbors.len();
        for (v, _) in neighbors {
            if v != *u {
                self.adj.get_mut(&v).unwrap().retain(|(w, _)| w != u);
            }
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError<V>> {
        for endpoint in [u, v] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::VertexNotFound(endpoint.clone()));
            }
        }

        let idx = self
            .neighbor_index(u, v)
            .ok_or_else(|| GraphError::EdgeNotFound(u.clone(), v.clone()))?;

        self.adj.get_mut(u).unwrap().swap_remove(idx);
        if u != v {
            let idx = self.neighbor_index(v, u).unwrap();
            self.adj.get_mut(v).unwrap().swap_remove(idx);
        }
        self.num_edges -= 1;
        Ok(())
    }

    fn clear(&mut self) {
        self.adj.clear();
        self.num_edges = 0;
    }
}

impl<V: VertexId> std::fmt::Debug for AdjMap<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjMap")
            .field("vertices", &self.sorted_vertices())
            .field("edges", &{
                let mut edges = self.edges().collect::<Vec<_>>();
                edges.sort_by(|a, b| (&a.u, &a.v).cmp(&(&b.u, &b.v)));
                edges
            })
            .finish()
    }
}

impl<V: VertexId, E: Into<WeightedEdge<V>>> FromIterator<E> for AdjMap<V> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn graph_from(edges: &[(&str, &str, Weight)]) -> AdjMap<String> {
        AdjMap::from_edges(
            edges
                .iter()
                .map(|&(u, v, w)| (u.to_string(), v.to_string(), w)),
        )
    }

    /// Every adjacency entry must have a mirrored entry of equal weight
    fn assert_symmetric(graph: &AdjMap<String>) {
        for u in graph.vertices() {
            for (v, w) in graph.neighbors_of(u) {
                assert_eq!(graph.weight_of(v, u), Some(*w), "asymmetry at {u:?}-{v:?}");
            }
        }
    }

    #[test]
    fn empty_graph() {
        let graph = AdjMap::<String>::new();
        assert!(graph.is_empty());
        assert!(graph.has_no_edges());
        assert_eq!(graph.number_of_vertices(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = AdjMap::new();
        assert!(graph.add_vertex("A".to_string()));
        assert!(!graph.add_vertex("A".to_string()));
        assert_eq!(graph.number_of_vertices(), 1);
        assert!(graph.is_isolated(&"A".to_string()));
    }

    #[test]
    fn add_edge_creates_endpoints_and_is_symmetric() {
        let graph = graph_from(&[("A", "B", 4.0), ("B", "C", 3.0)]);

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.weight_of(&"A".into(), &"B".into()), Some(4.0));
        assert_eq!(graph.weight_of(&"B".into(), &"A".into()), Some(4.0));
        assert!(!graph.has_edge(&"A".into(), &"C".into()));
        assert_symmetric(&graph);
    }

    #[test]
    fn add_edge_overwrites_instead_of_duplicating() {
        let mut graph = graph_from(&[("A", "B", 4.0)]);
        let before = graph.number_of_edges();

        assert!(!graph.try_add_edge("A".to_string(), "B".to_string(), 7.0));
        assert_eq!(graph.number_of_edges(), before);
        assert_eq!(graph.degree_of(&"A".into()), 1);
        assert_eq!(graph.weight_of(&"B".into(), &"A".into()), Some(7.0));

        // adding the reversed orientation is the same edge
        assert!(!graph.try_add_edge("B".to_string(), "A".to_string(), 9.0));
        assert_eq!(graph.weight_of(&"A".into(), &"B".into()), Some(9.0));
        assert_symmetric(&graph);
    }

    #[test]
    fn add_edge_twice_identical_to_once() {
        let once = graph_from(&[("A", "B", 4.0)]);
        let mut twice = graph_from(&[("A", "B", 4.0)]);
        twice.add_edge("A".to_string(), "B".to_string(), 4.0);

        assert_eq!(once.number_of_edges(), twice.number_of_edges());
        assert_eq!(
            once.neighbors_of(&"A".into()),
            twice.neighbors_of(&"A".into())
        );
        assert_eq!(
            once.neighbors_of(&"B".into()),
            twice.neighbors_of(&"B".into())
        );
    }

    #[test]
    fn remove_edge_round_trip() {
        let mut graph = graph_from(&[("A", "B", 4.0), ("B", "C", 3.0)]);

        graph.add_edge("A".to_string(), "C".to_string(), 2.0);
        graph.remove_edge(&"A".into(), &"C".into()).unwrap();

        assert_eq!(graph.number_of_edges(), 2);
        assert!(!graph.has_edge(&"A".into(), &"C".into()));
        assert_eq!(
            graph.neighbors_of(&"A".into()),
            &[("B".to_string(), 4.0)][..]
        );
        assert_symmetric(&graph);
    }

    #[test]
    fn remove_edge_failures() {
        let mut graph = graph_from(&[("A", "B", 4.0)]);

        assert_eq!(
            graph.remove_edge(&"A".into(), &"X".into()),
            Err(GraphError::VertexNotFound("X".to_string()))
        );

        graph.add_vertex("C".to_string());
        assert_eq!(
            graph.remove_edge(&"A".into(), &"C".into()),
            Err(GraphError::EdgeNotFound("A".to_string(), "C".to_string()))
        );
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn remove_vertex_purges_neighbor_lists() {
        let mut graph = graph_from(&[("A", "B", 4.0), ("A", "C", 2.0), ("B", "C", 3.0)]);

        graph.remove_vertex(&"A".into()).unwrap();

        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(!graph.contains_vertex(&"A".into()));
        assert!(graph.vertices().all(|u| {
            graph
                .neighbors_of(u)
                .iter()
                .all(|(v, _)| *v != "A".to_string())
        }));
        assert_symmetric(&graph);
    }

    #[test]
    fn remove_vertex_not_found() {
        let mut graph = graph_from(&[("A", "B", 4.0)]);
        assert_eq!(
            graph.remove_vertex(&"X".into()),
            Err(GraphError::VertexNotFound("X".to_string()))
        );
        assert_eq!(graph.number_of_vertices(), 2);
    }

    #[test]
    fn edges_are_deduplicated_and_normalized() {
        let graph = graph_from(&[("B", "A", 4.0), ("C", "B", 3.0), ("A", "C", 2.0)]);

        let edges = graph
            .edges()
            .map(|e| (e.u, e.v, e.weight))
            .sorted_by(|a, b| a.partial_cmp(b).unwrap())
            .collect_vec();
        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string(), 4.0),
                ("A".to_string(), "C".to_string(), 2.0),
                ("B".to_string(), "C".to_string(), 3.0),
            ]
        );

        assert_eq!(graph.half_edges().count(), 6);
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = AdjMap::new();
        graph.add_edge("A".to_string(), "A".to_string(), 1.5);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degree_of(&"A".into()), 1);
        assert!(graph.has_self_loop(&"A".into()));
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.half_edges().count(), 1);

        graph.remove_edge(&"A".into(), &"A".into()).unwrap();
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn clear_empties_the_structure() {
        let mut graph = graph_from(&[("A", "B", 4.0), ("B", "C", 3.0)]);
        graph.clear();

        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.neighbors_of(&"A".into()), &[]);
    }

    #[test]
    fn sorted_edges_order() {
        let graph = graph_from(&[("A", "B", 4.0), ("B", "C", 3.0), ("A", "C", 3.0)]);
        let sorted = graph.sorted_edges();

        assert_eq!(sorted[0].weight, 3.0);
        assert_eq!((&sorted[0].u[..], &sorted[0].v[..]), ("A", "C"));
        assert_eq!((&sorted[1].u[..], &sorted[1].v[..]), ("B", "C"));
        assert_eq!(sorted[2].weight, 4.0);
    }
}
