/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the
weighted graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, connectivity, shortest-path, and spanning-tree
routines. If possible, algorithms are provided as **iterators**, making it
easy to consume results lazily; every algorithm reads the graph without
mutating it, so several queries may inspect the same graph in sequence.
*/

mod connectivity;
mod mst;
mod shortest_path;
mod traversal;

use crate::{edge::*, ops::*, utils::*, vertex::*};

pub use connectivity::*;
pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
