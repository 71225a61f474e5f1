use thiserror::Error;

use crate::vertex::VertexId;

/// Failures reported by graph mutation and query operations.
///
/// All error conditions are surfaced through return values; no operation
/// aborts the process. Unreachable destinations and negative cycles are *not*
/// errors — they are encoded in
/// [`Cost`](crate::algo::Cost) sentinels instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<V: VertexId> {
    /// A referenced vertex is absent from the graph
    #[error("vertex {0:?} not found")]
    VertexNotFound(V),

    /// Both endpoints exist but no edge connects them
    #[error("edge {{{0:?}, {1:?}}} not found")]
    EdgeNotFound(V, V),
}
