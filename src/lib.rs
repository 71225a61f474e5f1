/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : Every edge carries an `f64` weight
- labelled : Vertices are opaque caller-chosen labels (strings, integers, ...)
- undirected : An edge `{u, v}` is the same edge as `{v, u}`

# Representation

We represent **vertices** as any type implementing the [`VertexId`](crate::vertex::VertexId)
trait alias (`Clone + Eq + Hash + Ord + Debug`); string labels and small integers are the
common choices. **Edges** are the struct [`WeightedEdge`](crate::edge::WeightedEdge) holding
both endpoints and the weight.

The single storage backend is [`AdjMap`](crate::repr::AdjMap): a hash map from each vertex
to its adjacency list of `(neighbor, weight)` pairs, kept symmetric on every mutation. At
most one edge exists per unordered vertex pair; re-adding an edge overwrites its weight.
Vertices may exist without edges.

# Design

All algorithms are provided as configurable structs that one can alter to their needs using
the *Builder* / *Setter* pattern before calling the configured algorithm on a provided
graph. Alternatively, the most important and commonly used functionalities are implemented
via traits on the graph itself, making them usable without configuring the algorithm
beforehand. Algorithms never mutate the graph they read and report failures through
result types, never by aborting.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations,
  and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS/DFS
  traversal (`graph.bfs(&start)`), a Connected Component iterator (with a union-find
  alternative), single-pair shortest paths (Dijkstra, Bellman-Ford, Floyd-Warshall, A*),
  and minimum spanning trees (Kruskal, Prim),
- [`gens`] includes a random weighted graph generator for test inputs,
- [`io`] includes handlers for reading/writing weighted edge lists and writing GraphViz
  DOT files,
- [`utils`] includes supporting structures, most notably the
  [`DisjointSet`](crate::utils::DisjointSet) union-find forest.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let mut graph = AdjMap::new();
graph.add_edges([("A", "B", 4.0), ("B", "D", 2.0), ("D", "A", 1.0)]);

let result = graph.dijkstra(&"A", &"B").unwrap();
assert_eq!(result.cost, Cost::Finite(3.0));
```

# When to use

You should only use this library if the following apply:
- Your graphs are undirected with a single weighted edge per vertex pair
- You want opaque vertex labels instead of dense integer ids
- You require only classic graph functionality

In all other cases, it might make sense for you to check out
[petgraph](https://crates.io/crates/petgraph) who provide a more extensive library for
general graphs in *Rust*.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub mod utils;
pub mod vertex;

/// `wgraphs::prelude` includes definitions for vertices, edges and errors, all basic
/// graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
