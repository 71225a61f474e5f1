/*!
# Disjoint-Set Forests (Union-Find)

Tracks a partition of a fixed vertex universe into disjoint sets with
amortized near-constant `find`/`union`. Used by Kruskal's algorithm as the
cycle gate and by the union-find flavor of connected components.

The forest stores parent pointers in a hash map keyed by label. `find`
performs **full path compression** (iteratively, so deep forests cannot blow
the call stack); `union` attaches by rank, breaking rank ties in favor of the
first argument's root.
*/

use fxhash::FxHashMap;

use crate::vertex::VertexId;

/// A disjoint-set forest over an explicit universe of vertices.
///
/// Elements outside the universe are never adopted implicitly: `find` returns
/// `None` and `union` reports "not joined" for them.
#[derive(Debug, Clone)]
pub struct DisjointSet<V: VertexId> {
    parent: FxHashMap<V, V>,
    rank: FxHashMap<V, u32>,
}

impl<V: VertexId> DisjointSet<V> {
    /// Creates a forest where every vertex of the universe is its own
    /// singleton set of rank 0.
    pub fn new<I>(universe: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let parent: FxHashMap<V, V> = universe.into_iter().map(|v| (v.clone(), v)).collect();
        let rank = parent.keys().map(|v| (v.clone(), 0)).collect();
        Self { parent, rank }
    }

    /// Returns *true* if `u` belongs to the universe
    pub fn contains(&self, u: &V) -> bool {
        self.parent.contains_key(u)
    }

    /// Returns the number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if the universe is empty
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the root representative of `u`'s set, or `None` if `u` is not
    /// in the universe.
    ///
    /// Compresses the walked path: afterwards every vertex on it points
    /// directly at the root.
    pub fn find(&mut self, u: &V) -> Option<V> {
        if !self.parent.contains_key(u) {
            return None;
        }

        let mut root = u.clone();
        while self.parent[&root] != root {
            root = self.parent[&root].clone();
        }

        let mut current = u.clone();
        while current != root {
            let next = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = next;
        }

        Some(root)
    }

    /// Merges the sets containing `u` and `v`.
    ///
    /// Returns *true* exactly if two distinct sets were joined; *false* if
    /// the vertices were already in the same set or either is outside the
    /// universe.
    pub fn union(&mut self, u: &V, v: &V) -> bool {
        let Some(root_u) = self.find(u) else {
            return false;
        };
        let Some(root_v) = self.find(v) else {
            return false;
        };

        if root_u == root_v {
            return false;
        }

        let rank_u = self.rank[&root_u];
        let rank_v = self.rank[&root_v];

        if rank_u < rank_v {
            self.parent.insert(root_u, root_v);
        } else {
            // on equal ranks the first argument's root wins and grows
            self.parent.insert(root_v, root_u.clone());
            if rank_u == rank_v {
                self.rank.insert(root_u, rank_u + 1);
            }
        }
        true
    }

    /// Returns *true* if both vertices are in the universe and share a root
    pub fn same_set(&mut self, u: &V, v: &V) -> bool {
        match (self.find(u), self.find(v)) {
            (Some(root_u), Some(root_v)) => root_u == root_v,
            _ => false,
        }
    }

    /// Returns the number of disjoint sets in the forest
    pub fn number_of_sets(&mut self) -> usize {
        let elements: Vec<V> = self.parent.keys().cloned().collect();
        let mut roots: Vec<V> = elements
            .iter()
            .map(|u| self.find(u).unwrap())
            .collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }

    /// Consumes the forest and groups the universe by root, one `Vec` per set.
    ///
    /// Set and member ordering are unspecified.
    pub fn into_sets(mut self) -> Vec<Vec<V>> {
        let elements: Vec<V> = self.parent.keys().cloned().collect();

        let mut grouped: FxHashMap<V, Vec<V>> = FxHashMap::default();
        for u in elements {
            let root = self.find(&u).unwrap();
            grouped.entry(root).or_default().push(u);
        }
        grouped.into_values().collect()
    }
}
