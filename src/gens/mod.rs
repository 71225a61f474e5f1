/*!
# Graph Generators

This module provides builder-style generators for random weighted graphs,
mainly as fuel for randomized tests and benchmarks.

The typical usage workflow is:

1. Create a generator instance (e.g., `Gnw::new()`).
2. Set parameters using the builder traits (e.g., `.vertices(n).prob(p)`).
3. Generate an edge list via `generate()` or a ready graph via
   `generate_graph()`.

Generated graphs are labelled `0..n` with `u32` vertices; any vertex left
without sampled edges is still present in the generated graph as an isolated
vertex.
*/

use rand::Rng;

use crate::{edge::WeightedEdge, ops::GraphEdgeEditing, repr::AdjMap, vertex::Weight};

mod gnw;

pub use gnw::*;

/// Trait for generators that allow setting the number of vertices.
pub trait NumVerticesGen {
    /// Sets the number of vertices in the graph generator.
    fn vertices(self, n: u32) -> Self;
}

/// Trait for generators that allow setting an edge probability.
pub trait EdgeProbabilityGen {
    /// Sets the independent per-pair edge probability.
    fn prob(self, p: f64) -> Self;
}

/// Trait for generators that allow setting the sampled weight range.
pub trait WeightRangeGen {
    /// Sets the half-open range edge weights are drawn from uniformly.
    fn weights(self, range: std::ops::Range<Weight>) -> Self;
}

/// General trait for a configurable random weighted-edge generator.
pub trait WeightedGraphGenerator {
    /// Number of vertices the generator is configured for
    fn number_of_vertices(&self) -> u32;

    /// Generates a list of random weighted edges over vertices `0..n`
    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<u32>>
    where
        R: Rng;

    /// Generates a graph containing all `n` vertices and the sampled edges
    fn generate_graph<R>(&self, rng: &mut R) -> AdjMap<u32>
    where
        R: Rng,
    {
        let mut graph = AdjMap::new();
        for u in 0..self.number_of_vertices() {
            graph.add_vertex(u);
        }
        graph.add_edges(self.generate(rng));
        graph
    }
}
