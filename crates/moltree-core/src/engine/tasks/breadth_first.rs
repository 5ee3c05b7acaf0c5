use crate::core::encoding::PackedEntry;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::ids::VertexId;
use crate::engine::error::GraphError;
use crate::engine::path::{BreadthFirstPath, Visit};
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

/// Breadth-first traversal from `start` in compact form.
///
/// Every vertex reachable from `start` is discovered exactly once, at its shortest-path
/// depth, and contributes one packed entry and one [`Visit::Vertex`] record. Neighbors are
/// expanded in adjacency order, so sorting the adjacency beforehand makes the output
/// reproducible.
///
/// When an already visited neighbor is met, the edge is ignored if it is the tree edge
/// between the current vertex and its predecessor. Otherwise, if the neighbor sits exactly
/// one level below the current vertex, the edge closes a ring and a
/// [`Visit::RingClosure`] marker is appended to the visit list (never to the packed
/// entries). Revisits at any other depth produce no marker, so rings of odd size, whose
/// closing edge joins two vertices of the same level, are not reported.
///
/// On return each reached vertex holds its depth, predecessor and path position;
/// unreachable vertices remain unvisited.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertexId`] if `start` does not name a vertex.
#[instrument(skip_all, name = "breadth_first_task", fields(start = %start))]
pub fn run<P>(
    graph: &mut MolecularGraph<P>,
    start: VertexId,
) -> Result<BreadthFirstPath, GraphError> {
    graph.check_vertex(start)?;
    graph.reset_traversal_state();

    let vertex_count = graph.vertex_count();
    let mut entries = Vec::with_capacity(vertex_count);
    let mut visits = Vec::with_capacity(vertex_count);
    let mut frontier: VecDeque<(VertexId, u32)> = VecDeque::with_capacity(vertex_count);

    let root = graph.node_mut(start);
    root.distance = Some(0);
    root.path_position = Some(0);
    entries.push(PackedEntry::encode(0, start));
    visits.push(Visit::Vertex(start));
    frontier.push_back((start, 0));

    while let Some((current, depth)) = frontier.pop_front() {
        let parent = graph.node(current).predecessor;
        let child_depth = depth + 1;

        for slot in 0..graph.node(current).degree() {
            let next = graph.node(current).neighbors()[slot];
            let (neighbor_distance, neighbor_parent) = {
                let neighbor = graph.node(next);
                (neighbor.distance, neighbor.predecessor)
            };

            match neighbor_distance {
                None => {
                    let position = entries.len();
                    let node = graph.node_mut(next);
                    node.distance = Some(child_depth);
                    node.predecessor = Some(current);
                    node.path_position = Some(position);

                    entries.push(PackedEntry::encode(child_depth, next));
                    visits.push(Visit::Vertex(next));
                    frontier.push_back((next, child_depth));
                    trace!(
                        vertex = %next,
                        depth = child_depth,
                        from = %current,
                        "Discovered vertex."
                    );
                }
                // The edge that discovered `current`, seen from either end.
                Some(_) if neighbor_parent == Some(current) || parent == Some(next) => {}
                Some(neighbor_depth) if neighbor_depth == child_depth => {
                    visits.push(Visit::RingClosure {
                        of_vertex: next,
                        predecessor: current,
                        depth: neighbor_depth,
                        path_position: entries.len() - 1,
                    });
                    trace!(vertex = %next, from = %current, "Ring closure.");
                }
                Some(_) => {}
            }
        }
    }

    let path = BreadthFirstPath {
        root: start,
        entries,
        visits,
    };
    debug!(
        visited = path.entries.len(),
        ring_closures = path.ring_closure_count(),
        "Breadth-first traversal complete."
    );
    Ok(path)
}
