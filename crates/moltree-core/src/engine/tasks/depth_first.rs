use crate::core::encoding::PackedEntry;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::ids::VertexId;
use crate::core::models::payload::RotationSite;
use crate::engine::error::GraphError;
use crate::engine::path::DepthFirstPath;
use tracing::{debug, instrument, trace};

/// Pre-order depth-first traversal from `start` with rotatable-chain tracking.
///
/// Neighbors are descended into in adjacency order. Besides depth, predecessor and path
/// position, every reached vertex receives:
///
/// - a rotatable chain head: the nearest vertex on the path from the root, itself
///   included, whose payload is rotatable (`None` if there is none yet). The structure
///   builder uses it to cut the tree into rigid segments separated by rotatable torsions.
/// - the deepest subtree depth: the largest depth reached among the vertices discovered
///   below it, or `0` for a vertex with no newly discovered descendants.
///
/// The returned [`DepthFirstPath`] carries the visit order, packed `(depth, id)` entries
/// in the same order, and the deepest depth reached overall.
///
/// # Errors
///
/// Returns [`GraphError::InvalidVertexId`] if `start` does not name a vertex.
#[instrument(skip_all, name = "depth_first_task", fields(start = %start))]
pub fn run<P: RotationSite>(
    graph: &mut MolecularGraph<P>,
    start: VertexId,
) -> Result<DepthFirstPath, GraphError> {
    graph.check_vertex(start)?;
    graph.reset_traversal_state();

    graph.node_mut(start).path_position = Some(0);

    let mut visited: Vec<(VertexId, u32)> = Vec::with_capacity(graph.vertex_count());
    visited.push((start, 0));
    let max_depth = walk(graph, start, &mut visited);

    let (order, entries) = visited
        .into_iter()
        .map(|(id, depth)| (id, PackedEntry::encode(depth, id)))
        .unzip();
    let path = DepthFirstPath {
        order,
        entries,
        max_depth,
    };
    debug!(
        visited = path.order.len(),
        max_depth, "Depth-first traversal complete."
    );
    Ok(path)
}

/// A vertex whose neighbors are still being descended into.
struct Frame {
    vertex: VertexId,
    depth: u32,
    /// Next adjacency slot to look at.
    next_slot: usize,
    /// Head handed to children: the vertex itself if rotatable, else the inherited head.
    chain_head: Option<VertexId>,
    /// Deepest depth found below the vertex so far.
    deepest: u32,
}

/// Marks `vertex` as reached at `depth`, stamps its chain head and opens its frame.
fn enter<P: RotationSite>(
    graph: &mut MolecularGraph<P>,
    vertex: VertexId,
    depth: u32,
    inherited_head: Option<VertexId>,
) -> Frame {
    let node = graph.node_mut(vertex);
    node.distance = Some(depth);
    // A rotatable vertex heads its own segment and every segment below it.
    let chain_head = if node.is_rotatable() {
        Some(vertex)
    } else {
        inherited_head
    };
    node.rotatable_chain_head = chain_head;

    Frame {
        vertex,
        depth,
        next_slot: 0,
        chain_head,
        deepest: 0,
    }
}

/// Walks the tree below `start` in pre-order and returns the deepest depth reached.
///
/// The walk keeps its own stack of frames, so long chains cost heap rather than thread
/// stack. Chain heads only travel from a frame to the frames it opens, so siblings never
/// see heads found in each other's subtrees. A finished frame folds its depth and its
/// deepest descendant into its parent.
fn walk<P: RotationSite>(
    graph: &mut MolecularGraph<P>,
    start: VertexId,
    visited: &mut Vec<(VertexId, u32)>,
) -> u32 {
    let mut stack = vec![enter(graph, start, 0, None)];
    let mut max_depth = 0;

    while let Some(frame) = stack.last_mut() {
        let current = frame.vertex;
        let neighbors = graph.node(current).neighbors();

        let mut child = None;
        while frame.next_slot < neighbors.len() {
            let next = neighbors[frame.next_slot];
            frame.next_slot += 1;
            if !graph.node(next).is_visited() {
                child = Some(next);
                break;
            }
        }

        match child {
            Some(next) => {
                let child_depth = frame.depth + 1;
                let chain_head = frame.chain_head;

                let child_frame = enter(graph, next, child_depth, chain_head);
                let node = graph.node_mut(next);
                node.predecessor = Some(current);
                node.path_position = Some(visited.len());
                visited.push((next, child_depth));
                trace!(vertex = %next, depth = child_depth, from = %current, "Descending.");

                stack.push(child_frame);
            }
            None => {
                let depth = frame.depth;
                let deepest = frame.deepest;
                stack.pop();
                graph.node_mut(current).deepest_subtree_depth = deepest;

                match stack.last_mut() {
                    Some(parent) => parent.deepest = parent.deepest.max(depth).max(deepest),
                    None => max_depth = deepest,
                }
            }
        }
    }

    max_depth
}
