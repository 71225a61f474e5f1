/*!
Single-pair shortest paths over weighted graphs.

Four interchangeable algorithms solve the same query with different
complexity/correctness trade-offs:

- **Dijkstra**: priority-queue search with lazy deletion, stops as soon as
  the destination is settled. Requires non-negative weights.
- **Bellman-Ford**: edge relaxation rounds, the only solver that detects
  negative cycles. `O(V * E)`.
- **Floyd-Warshall**: computes *all-pairs* distance and next-hop matrices and
  answers the single pair from them. `O(V^3)` regardless of query count.
- **A\***: Dijkstra with a pluggable lower-bound heuristic added to the
  priority key; with the zero heuristic it behaves exactly like Dijkstra.

All four share the endpoint checks, the trivial `start == end` answer, and
the predecessor-map path reconstruction. On graphs with non-negative weights
they agree on the reported cost; the vertex sequence may differ when several
paths tie.
*/

use std::{cmp::Ordering, collections::BinaryHeap, marker::PhantomData};

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;
use crate::error::GraphError;

/// The cost of a path query, with explicit sentinels instead of magic values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cost {
    /// Total weight of the reported path
    Finite(Weight),
    /// The endpoints are valid but no path connects them
    Unreachable,
    /// A reachable negative cycle makes "shortest" ill-posed
    /// (reported by Bellman-Ford only)
    NegativeCycle,
}

impl Cost {
    /// Maps the sentinels onto the extended real line:
    /// `Unreachable` becomes `f64::INFINITY`, `NegativeCycle` becomes
    /// `f64::NEG_INFINITY`.
    pub fn as_weight(&self) -> Weight {
        match self {
            Cost::Finite(w) => *w,
            Cost::Unreachable => Weight::INFINITY,
            Cost::NegativeCycle => Weight::NEG_INFINITY,
        }
    }

    /// Returns the weight if the path exists and is well-defined
    pub fn finite(&self) -> Option<Weight> {
        match self {
            Cost::Finite(w) => Some(*w),
            _ => None,
        }
    }

    /// Returns *true* if the path exists and is well-defined
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }
}

/// A shortest-path answer: the vertex sequence from start to destination
/// (inclusive; empty when no well-defined path exists) and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<V: VertexId> {
    pub path: Vec<V>,
    pub cost: Cost,
}

impl<V: VertexId> PathResult<V> {
    fn trivial(vertex: &V) -> Self {
        Self {
            path: vec![vertex.clone()],
            cost: Cost::Finite(0.0),
        }
    }

    fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: Cost::Unreachable,
        }
    }

    fn negative_cycle() -> Self {
        Self {
            path: Vec::new(),
            cost: Cost::NegativeCycle,
        }
    }

    /// Returns *true* if a path was found
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Selector for the shortest-path algorithm to run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PathAlgorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    AStar,
}

/// The heuristic that turns A* into Dijkstra
pub fn zero_heuristic<V>(_: &V, _: &V) -> Weight {
    0.0
}

/// Configurable single-pair shortest-path solver.
///
/// Constructed with an algorithm selector; A* additionally takes a heuristic
/// estimating the remaining cost to the goal (a lower bound for correctness):
///
/// ```ignore
/// let result = ShortestPath::new(PathAlgorithm::AStar)
///     .heuristic(|u, goal| straight_line_distance(u, goal))
///     .run(&graph, &start, &end)?;
/// ```
pub struct ShortestPath<V: VertexId, H = fn(&V, &V) -> Weight> {
    algorithm: PathAlgorithm,
    heuristic: H,
    _vertices: PhantomData<V>,
}

impl<V: VertexId> ShortestPath<V> {
    /// Creates a solver for the given algorithm with the zero heuristic
    pub fn new(algorithm: PathAlgorithm) -> Self {
        Self {
            algorithm,
            heuristic: zero_heuristic::<V>,
            _vertices: PhantomData,
        }
    }
}

impl<V, H> ShortestPath<V, H>
where
    V: VertexId,
    H: Fn(&V, &V) -> Weight,
{
    /// Replaces the heuristic (only consulted by A*)
    pub fn heuristic<H2>(self, heuristic: H2) -> ShortestPath<V, H2>
    where
        H2: Fn(&V, &V) -> Weight,
    {
        ShortestPath {
            algorithm: self.algorithm,
            heuristic,
            _vertices: PhantomData,
        }
    }

    /// Runs the configured algorithm for a single vertex pair.
    ///
    /// `start == end` short-circuits to the single-vertex path of cost zero
    /// without running any search.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is absent.
    pub fn run<G>(&self, graph: &G, start: &V, end: &V) -> Result<PathResult<V>, GraphError<V>>
    where
        G: AdjacencyList<V>,
    {
        for endpoint in [start, end] {
            if !graph.contains_vertex(endpoint) {
                return Err(GraphError::VertexNotFound(endpoint.clone()));
            }
        }

        if start == end {
            return Ok(PathResult::trivial(start));
        }

        Ok(match self.algorithm {
            PathAlgorithm::Dijkstra => dijkstra_core(graph, start, end),
            PathAlgorithm::BellmanFord => bellman_ford_core(graph, start, end),
            PathAlgorithm::FloydWarshall => floyd_warshall_core(graph, start, end),
            PathAlgorithm::AStar => astar_core(graph, start, end, &self.heuristic),
        })
    }
}

/// Provides single-pair shortest-path queries directly on graph data
/// structures; see [`ShortestPath`] for the underlying solver.
pub trait ShortestPaths<V: VertexId>: AdjacencyList<V> {
    /// Runs the selected algorithm (with the zero heuristic in case of A*)
    fn shortest_path(
        &self,
        algorithm: PathAlgorithm,
        start: &V,
        end: &V,
    ) -> Result<PathResult<V>, GraphError<V>> {
        ShortestPath::new(algorithm).run(self, start, end)
    }

    /// Priority-queue search; requires non-negative weights (not validated)
    fn dijkstra(&self, start: &V, end: &V) -> Result<PathResult<V>, GraphError<V>> {
        self.shortest_path(PathAlgorithm::Dijkstra, start, end)
    }

    /// Relaxation rounds; tolerates negative weights and reports
    /// [`Cost::NegativeCycle`] when one is reachable
    fn bellman_ford(&self, start: &V, end: &V) -> Result<PathResult<V>, GraphError<V>> {
        self.shortest_path(PathAlgorithm::BellmanFord, start, end)
    }

    /// All-pairs matrices answering a single pair; `O(V^3)`
    fn floyd_warshall(&self, start: &V, end: &V) -> Result<PathResult<V>, GraphError<V>> {
        self.shortest_path(PathAlgorithm::FloydWarshall, start, end)
    }

    /// Heuristic-guided search; `heuristic` must not overestimate the true
    /// remaining cost or the answer may be non-optimal
    fn astar<H>(&self, start: &V, end: &V, heuristic: H) -> Result<PathResult<V>, GraphError<V>>
    where
        H: Fn(&V, &V) -> Weight,
    {
        ShortestPath::new(PathAlgorithm::AStar)
            .heuristic(heuristic)
            .run(self, start, end)
    }
}

impl<V: VertexId, G: AdjacencyList<V>> ShortestPaths<V> for G {}

/// Entry of the search queues. `BinaryHeap` is a max-heap, so the ordering
/// is reversed on the cost; ties break on the vertex label to keep pop order
/// independent of insertion order.
struct MinState<V: VertexId> {
    cost: Weight,
    vertex: V,
}

impl<V: VertexId> PartialEq for MinState<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.vertex == other.vertex
    }
}

impl<V: VertexId> Eq for MinState<V> {}

impl<V: VertexId> Ord for MinState<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl<V: VertexId> PartialOrd for MinState<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tentative distance of `v`, infinite while undiscovered
fn distance<V: VertexId>(distances: &FxHashMap<V, Weight>, v: &V) -> Weight {
    distances.get(v).copied().unwrap_or(Weight::INFINITY)
}

/// Follows the predecessor map from `end` back to `start` and reverses.
/// Every vertex on the walk except `start` must have a predecessor entry.
pub(crate) fn reconstruct_path<V: VertexId>(
    predecessors: &FxHashMap<V, V>,
    start: &V,
    end: &V,
) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while current != start {
        current = &predecessors[current];
        path.push(current.clone());
    }
    path.reverse();
    path
}

fn dijkstra_core<G, V>(graph: &G, start: &V, end: &V) -> PathResult<V>
where
    G: AdjacencyList<V>,
    V: VertexId,
{
    let mut distances: FxHashMap<V, Weight> = FxHashMap::default();
    let mut predecessors: FxHashMap<V, V> = FxHashMap::default();
    let mut queue = BinaryHeap::new();

    distances.insert(start.clone(), 0.0);
    queue.push(MinState {
        cost: 0.0,
        vertex: start.clone(),
    });

    while let Some(MinState { cost, vertex }) = queue.pop() {
        // lazily dropped entry superseded by a later relaxation
        if cost > distance(&distances, &vertex) {
            continue;
        }

        if vertex == *end {
            break;
        }

        for (neighbor, weight) in graph.neighbors_of(&vertex) {
            let through = cost + weight;
            if through < distance(&distances, neighbor) {
                distances.insert(neighbor.clone(), through);
                predecessors.insert(neighbor.clone(), vertex.clone());
                queue.push(MinState {
                    cost: through,
                    vertex: neighbor.clone(),
                });
            }
        }
    }

    match distances.get(end) {
        Some(&cost) => PathResult {
            path: reconstruct_path(&predecessors, start, end),
            cost: Cost::Finite(cost),
        },
        None => PathResult::unreachable(),
    }
}

fn bellman_ford_core<G, V>(graph: &G, start: &V, end: &V) -> PathResult<V>
where
    G: AdjacencyList<V>,
    V: VertexId,
{
    // every undirected edge relaxes in both directions
    let half_edges = graph.half_edges().collect_vec();
    let rounds = graph.number_of_vertices().saturating_sub(1);

    let mut distances: FxHashMap<V, Weight> = FxHashMap::default();
    let mut predecessors: FxHashMap<V, V> = FxHashMap::default();
    distances.insert(start.clone(), 0.0);

    for _ in 0..rounds {
        let mut relaxed = false;
        for edge in &half_edges {
            let dist_u = distance(&distances, &edge.u);
            if dist_u.is_finite() && dist_u + edge.weight < distance(&distances, &edge.v) {
                distances.insert(edge.v.clone(), dist_u + edge.weight);
                predecessors.insert(edge.v.clone(), edge.u.clone());
                relaxed = true;
            }
        }
        if !relaxed {
            break;
        }
    }

    // an edge that still relaxes witnesses a reachable negative cycle
    for edge in &half_edges {
        let dist_u = distance(&distances, &edge.u);
        if dist_u.is_finite() && dist_u + edge.weight < distance(&distances, &edge.v) {
            return PathResult::negative_cycle();
        }
    }

    match distances.get(end) {
        Some(&cost) => PathResult {
            path: reconstruct_path(&predecessors, start, end),
            cost: Cost::Finite(cost),
        },
        None => PathResult::unreachable(),
    }
}

fn floyd_warshall_core<G, V>(graph: &G, start: &V, end: &V) -> PathResult<V>
where
    G: AdjacencyList<V>,
    V: VertexId,
{
    let vertices = graph.sorted_vertices();
    let n = vertices.len();
    let index: FxHashMap<V, usize> = vertices
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();

    let mut dist = vec![vec![Weight::INFINITY; n]; n];
    let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = 0.0;
        next[i][i] = Some(i);
    }
    for edge in graph.half_edges() {
        if edge.is_loop() {
            continue;
        }
        let (i, j) = (index[&edge.u], index[&edge.v]);
        dist[i][j] = edge.weight;
        next[i][j] = Some(j);
    }

    for k in 0..n {
        for i in 0..n {
            if !dist[i][k].is_finite() {
                continue;
            }
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                    next[i][j] = next[i][k];
                }
            }
        }
    }

    let (s, e) = (index[start], index[end]);
    if !dist[s][e].is_finite() {
        return PathResult::unreachable();
    }

    let mut path = vec![vertices[s].clone()];
    let mut current = s;
    while current != e {
        // a well-posed next-hop chain visits every vertex at most once; the
        // bound keeps corrupt matrices (negative weights) from looping
        let Some(hop) = next[current][e].filter(|_| path.len() <= n) else {
            return PathResult::unreachable();
        };
        current = hop;
        path.push(vertices[current].clone());
    }

    PathResult {
        path,
        cost: Cost::Finite(dist[s][e]),
    }
}

fn astar_core<G, V, H>(graph: &G, start: &V, end: &V, heuristic: &H) -> PathResult<V>
where
    G: AdjacencyList<V>,
    V: VertexId,
    H: Fn(&V, &V) -> Weight,
{
    let mut g_costs: FxHashMap<V, Weight> = FxHashMap::default();
    let mut predecessors: FxHashMap<V, V> = FxHashMap::default();
    let mut open_set = BinaryHeap::new();

    g_costs.insert(start.clone(), 0.0);
    open_set.push(MinState {
        cost: heuristic(start, end),
        vertex: start.clone(),
    });

    while let Some(MinState { cost, vertex }) = open_set.pop() {
        // stale entry: a cheaper route to this vertex was found after pushing
        if cost > distance(&g_costs, &vertex) + heuristic(&vertex, end) {
            continue;
        }

        if vertex == *end {
            break;
        }

        let g = distance(&g_costs, &vertex);
        for (neighbor, weight) in graph.neighbors_of(&vertex) {
            let through = g + weight;
            if through < distance(&g_costs, neighbor) {
                g_costs.insert(neighbor.clone(), through);
                predecessors.insert(neighbor.clone(), vertex.clone());
                open_set.push(MinState {
                    cost: through + heuristic(neighbor, end),
                    vertex: neighbor.clone(),
                });
            }
        }
    }

    match g_costs.get(end) {
        Some(&cost) => PathResult {
            path: reconstruct_path(&predecessors, start, end),
            cost: Cost::Finite(cost),
        },
        None => PathResult::unreachable(),
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::{gens::*, repr::AdjMap};

    const ALGORITHMS: [PathAlgorithm; 4] = [
        PathAlgorithm::Dijkstra,
        PathAlgorithm::BellmanFord,
        PathAlgorithm::FloydWarshall,
        PathAlgorithm::AStar,
    ];

    fn diamond() -> AdjMap<&'static str> {
        AdjMap::from_edges([
            ("A", "B", 4.0),
            ("B", "C", 3.0),
            ("B", "D", 2.0),
            ("D", "A", 1.0),
            ("A", "C", 2.0),
        ])
    }

    /// The reported path must walk existing edges and sum to the cost
    fn assert_path_consistent(graph: &AdjMap<&str>, result: &PathResult<&str>) {
        let total: Weight = result
            .path
            .windows(2)
            .map(|pair| graph.weight_of(&pair[0], &pair[1]).unwrap())
            .sum();
        assert_eq!(result.cost, Cost::Finite(total));
    }

    #[test]
    fn diamond_min_cost_path() {
        let graph = diamond();

        for algorithm in ALGORITHMS {
            let result = graph.shortest_path(algorithm, &"A", &"B").unwrap();
            assert_eq!(result.cost, Cost::Finite(3.0), "{algorithm:?}");
            assert_eq!(result.path, vec!["A", "D", "B"], "{algorithm:?}");
            assert_path_consistent(&graph, &result);
        }
    }

    #[test]
    fn start_equals_end_skips_the_search() {
        let graph = diamond();
        for algorithm in ALGORITHMS {
            let result = graph.shortest_path(algorithm, &"C", &"C").unwrap();
            assert_eq!(result.path, vec!["C"]);
            assert_eq!(result.cost, Cost::Finite(0.0));
        }
    }

    #[test]
    fn absent_endpoint_is_an_error() {
        let graph = diamond();
        for algorithm in ALGORITHMS {
            assert_eq!(
                graph.shortest_path(algorithm, &"A", &"Z"),
                Err(GraphError::VertexNotFound("Z"))
            );
            assert_eq!(
                graph.shortest_path(algorithm, &"Z", &"A"),
                Err(GraphError::VertexNotFound("Z"))
            );
        }
    }

    #[test]
    fn unreachable_destination_is_a_sentinel_not_an_error() {
        let graph: AdjMap<&str> =
            AdjMap::from_edges([("A", "B", 4.0), ("B", "C", 3.0), ("D", "E", 5.0)]);

        for algorithm in ALGORITHMS {
            let result = graph.shortest_path(algorithm, &"A", &"D").unwrap();
            assert_eq!(result.cost, Cost::Unreachable);
            assert!(result.path.is_empty());
            assert!(!result.is_reachable());
            assert_eq!(result.cost.as_weight(), Weight::INFINITY);
        }
    }

    #[test]
    fn bellman_ford_reports_negative_cycles() {
        // the undirected edge {B, C} of weight -2 can be traversed back and
        // forth, so any walk through it loops at net negative cost
        let graph: AdjMap<&str> =
            AdjMap::from_edges([("A", "B", 1.0), ("B", "C", -2.0), ("C", "D", 1.0)]);

        let result = graph.bellman_ford(&"A", &"D").unwrap();
        assert_eq!(result.cost, Cost::NegativeCycle);
        assert!(result.path.is_empty());
        assert_eq!(result.cost.as_weight(), Weight::NEG_INFINITY);
    }

    #[test]
    fn bellman_ford_accepts_safe_negative_weights() {
        // negative edge in a component the search never reaches
        let graph: AdjMap<&str> = AdjMap::from_edges([("A", "B", 2.0), ("X", "Y", -5.0)]);

        let result = graph.bellman_ford(&"A", &"B").unwrap();
        assert_eq!(result.cost, Cost::Finite(2.0));
        assert_eq!(result.path, vec!["A", "B"]);
    }

    #[test]
    fn astar_with_zero_heuristic_matches_dijkstra_exactly() {
        let rng = &mut Pcg64::seed_from_u64(7);

        for _ in 0..20 {
            let graph: AdjMap<u32> = Gnw::new()
                .vertices(40)
                .prob(0.1)
                .weights(1.0..10.0)
                .generate_graph(rng);

            let dijkstra = graph.dijkstra(&0, &39).unwrap();
            let astar = graph.astar(&0, &39, zero_heuristic).unwrap();

            assert_eq!(dijkstra.cost, astar.cost);
            assert_eq!(dijkstra.path, astar.path);
        }
    }

    #[test]
    fn astar_obeys_an_admissible_heuristic() {
        // line graph 0 - 1 - ... - 9; |u - goal| is a lower bound on the
        // remaining cost since every edge has weight 1
        let graph = AdjMap::from_edges((0u32..9).map(|u| (u, u + 1, 1.0)));

        let result = graph
            .astar(&0, &9, |u, goal| (*goal as Weight) - (*u as Weight))
            .unwrap();
        assert_eq!(result.cost, Cost::Finite(9.0));
        assert_eq!(result.path, (0..=9).collect_vec());
    }

    #[test]
    fn all_algorithms_agree_on_random_graphs() {
        let rng = &mut Pcg64::seed_from_u64(31415);

        for round in 0..10 {
            let graph: AdjMap<u32> = Gnw::new()
                .vertices(30)
                .prob(0.12)
                .weights(1.0..5.0)
                .generate_graph(rng);

            for (start, end) in [(0u32, 29), (5, 17), (3, 3)] {
                let costs = ALGORITHMS
                    .iter()
                    .map(|&algorithm| {
                        graph
                            .shortest_path(algorithm, &start, &end)
                            .unwrap()
                            .cost
                            .as_weight()
                    })
                    .collect_vec();

                for pair in costs.windows(2) {
                    let agree = if pair[0].is_finite() {
                        (pair[0] - pair[1]).abs() < 1e-9
                    } else {
                        pair[0] == pair[1]
                    };
                    assert!(agree, "round {round}: costs diverge: {costs:?}");
                }
            }
        }
    }

    #[test]
    fn dijkstra_between_isolated_vertices() {
        let mut graph = AdjMap::new();
        graph.add_vertex("A");
        graph.add_vertex("B");

        let result = graph.dijkstra(&"A", &"B").unwrap();
        assert_eq!(result.cost, Cost::Unreachable);
    }
}
