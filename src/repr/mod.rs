/*!
# Graph Representations

The crate ships a single storage backend, [`AdjMap`]: a hash map from vertex
label to its adjacency list of `(neighbor, weight)` pairs. It trades the cache
friendliness of index-based arrays for fully dynamic vertex sets with opaque
labels, which is the shape every algorithm in [`crate::algo`] consumes.

The adjacency relation is kept **symmetric** at all times: whenever `v`
appears as a neighbor of `u` with weight `w`, then `u` appears as a neighbor
of `v` with the same weight. All mutation goes through the
[`GraphEdgeEditing`](crate::ops::GraphEdgeEditing) operations, which restore
this invariant before returning.
*/

mod adj_map;

pub use adj_map::*;
