use rand_distr::{Distribution, Uniform};

use super::*;
use crate::utils::Probability;

/// `G(n,w)` generator: every unordered pair of distinct vertices becomes an
/// edge with probability `p`, independent from each other, and every sampled
/// edge draws its weight uniformly from the configured range.
///
/// Self-loops are never generated; the emitted edges are normalized and
/// pairwise distinct, so feeding them into a graph never triggers the
/// overwrite path of `add_edge`.
#[derive(Debug, Clone)]
pub struct Gnw {
    n: u32,
    p: f64,
    weights: std::ops::Range<Weight>,
}

impl Default for Gnw {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.0,
            weights: 1.0..10.0,
        }
    }
}

impl Gnw {
    /// Creates a new empty `G(n,w)` generator
    pub fn new() -> Self {
        Self::default()
    }
}

impl NumVerticesGen for Gnw {
    /// Updates `n`
    fn vertices(mut self, n: u32) -> Self {
        self.n = n;
        self
    }
}

impl EdgeProbabilityGen for Gnw {
    /// Updates `p`
    fn prob(mut self, p: f64) -> Self {
        assert!(p.is_valid_probility());
        self.p = p;
        self
    }
}

impl WeightRangeGen for Gnw {
    /// Updates the weight range
    fn weights(mut self, range: std::ops::Range<Weight>) -> Self {
        assert!(range.start < range.end && range.start.is_finite() && range.end.is_finite());
        self.weights = range;
        self
    }
}

impl WeightedGraphGenerator for Gnw {
    fn number_of_vertices(&self) -> u32 {
        self.n
    }

    fn generate<R>(&self, rng: &mut R) -> Vec<WeightedEdge<u32>>
    where
        R: Rng,
    {
        let weight_gen = Uniform::new(self.weights.start, self.weights.end).unwrap();

        let mut edges = Vec::new();
        for u in 0..self.n {
            for v in (u + 1)..self.n {
                if rng.random_bool(self.p) {
                    edges.push(WeightedEdge::new(u, v, weight_gen.sample(rng)));
                }
            }
        }
        edges
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::ops::*;

    #[test]
    fn respects_probability_extremes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        let none = Gnw::new().vertices(20).prob(0.0).generate(rng);
        assert!(none.is_empty());

        let all = Gnw::new().vertices(20).prob(1.0).generate(rng);
        assert_eq!(all.len(), 20 * 19 / 2);
    }

    #[test]
    fn weights_stay_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let edges = Gnw::new()
            .vertices(30)
            .prob(0.5)
            .weights(2.0..3.5)
            .generate(rng);

        assert!(!edges.is_empty());
        for edge in &edges {
            assert!((2.0..3.5).contains(&edge.weight));
            assert!(!edge.is_loop());
            assert!(edge.is_normalized());
        }
    }

    #[test]
    fn generated_graph_contains_isolated_vertices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        let graph = Gnw::new().vertices(50).prob(0.01).generate_graph(rng);
        assert_eq!(graph.number_of_vertices(), 50);
        assert_eq!(graph.number_of_edges(), graph.edges().count());
    }
}
