use crate::core::models::graph::MolecularGraph;
use crate::core::models::ids::VertexId;
use crate::engine::error::GraphError;
use crate::engine::path::EdgePath;
use tracing::{debug, instrument, trace, warn};

/// Slots taken by one `(from, to)` pair in the edge buffer.
const SLOTS_PER_EDGE: usize = 2;

/// Breadth-first traversal from `start` that reports edges instead of levels.
///
/// Vertices are expanded in breadth-first order. A vertex counts as visited once it has
/// been expanded, and expanding it records an edge to every neighbor that has not been
/// expanded yet. Each bond of the component reachable from `start` is therefore reported
/// once, from whichever end was expanded first (a parallel bond once per copy), and the
/// first edge reaching each vertex is its breadth-first tree edge.
///
/// The edges are written to a buffer of fixed size, as many slots as
/// [`edge_slot_capacity`](crate::engine::config::TraversalConfig::edge_slot_capacity)
/// grants the graph, two slots per edge with the first pair reserved for the root.
/// The buffer never grows: a truncated edge list would misrepresent connectivity, so
/// running out of room fails the whole call.
///
/// On return each reached vertex holds its breadth-first depth and the vertex its tree
/// edge comes from.
///
/// # Errors
///
/// - [`GraphError::InvalidVertexId`] if `start` does not name a vertex.
/// - [`GraphError::OutOfCapacity`] if the edges do not fit in the buffer.
#[instrument(skip_all, name = "edge_list_task", fields(start = %start))]
pub fn run<P>(graph: &mut MolecularGraph<P>, start: VertexId) -> Result<EdgePath, GraphError> {
    graph.check_vertex(start)?;
    graph.reset_traversal_state();

    let capacity = graph.config().edge_slot_capacity(graph.vertex_count());
    ensure_room(capacity, SLOTS_PER_EDGE)?;

    // Pending expansions in discovery order: (vertex, reached from, depth).
    // Entry 0 is the root seed; entry k > 0 mirrors edges[k - 1].
    let mut pending: Vec<(VertexId, Option<VertexId>, u32)> = vec![(start, None, 0)];
    let mut edges: Vec<(VertexId, VertexId)> = Vec::new();
    let mut cursor = 0;

    while cursor < pending.len() {
        let (origin, from, depth) = pending[cursor];
        cursor += 1;
        if graph.node(origin).is_visited() {
            continue;
        }

        let node = graph.node_mut(origin);
        node.distance = Some(depth);
        node.predecessor = from;

        for slot in 0..graph.node(origin).degree() {
            let next = graph.node(origin).neighbors()[slot];
            if graph.node(next).is_visited() {
                continue;
            }

            let required = (pending.len() + 1) * SLOTS_PER_EDGE;
            if let Err(err) = ensure_room(capacity, required) {
                warn!(
                    capacity,
                    required,
                    vertices = graph.vertex_count(),
                    "Edge path buffer exhausted; discarding partial result."
                );
                return Err(err);
            }

            edges.push((origin, next));
            pending.push((next, Some(origin), depth + 1));
            trace!(from = %origin, to = %next, "Recorded edge.");
        }
    }

    debug!(edges = edges.len(), "Edge-list traversal complete.");
    Ok(EdgePath { root: start, edges })
}

fn ensure_room(capacity: usize, required: usize) -> Result<(), GraphError> {
    if required > capacity {
        Err(GraphError::OutOfCapacity { capacity, required })
    } else {
        Ok(())
    }
}
