/*!
# Vertex Representation

Vertices are **opaque labels** supplied by the caller: city names, string
identifiers, integers, anything that is cheap enough to clone and can be
hashed and ordered. We capture this as the [`VertexId`] trait alias instead of
fixing a concrete node type, so the same graph and algorithms work for
`&str`-labelled demo graphs and `u32`-labelled generated ones alike.

The `Ord` bound is not incidental: it gives every graph a canonical vertex
order, which we use to normalize edges and to make algorithm output
deterministic where the underlying hash maps are not.
*/

use std::{fmt::Debug, hash::Hash};

/// Trait alias for everything a vertex label must support.
///
/// Blanket-implemented; never implement this manually.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> VertexId for T {}

/// Number of vertices in a graph
pub type NumVertices = usize;

/// Edge weights are unified to `f64` for all algorithms.
///
/// Weights must be finite; negative weights are legal (only Bellman-Ford
/// produces meaningful results on them).
pub type Weight = f64;
