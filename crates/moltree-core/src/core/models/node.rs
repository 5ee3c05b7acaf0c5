use super::ids::VertexId;
use super::payload::RotationSite;
use std::cmp::Ordering;

/// A vertex of a molecular graph: identity, adjacency and transient traversal state.
///
/// The record holds no algorithm. Every traversal in [`crate::engine`] resets the transient
/// fields before it runs and leaves its results in them afterwards, so the state always
/// reflects the most recent traversal only.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode<P> {
    id: VertexId,
    payload: Option<P>,
    neighbors: Vec<VertexId>,
    /// Depth ("shell") from the current traversal root; `None` while unvisited.
    pub(crate) distance: Option<u32>,
    /// Vertex this one was first reached from; `None` for the root and unvisited vertices.
    pub(crate) predecessor: Option<VertexId>,
    /// Index of the first appearance in the current traversal output.
    pub(crate) path_position: Option<usize>,
    /// Always `false` for arena vertices: traversals report ring closures as
    /// [`crate::engine::path::Visit::RingClosure`] entries and never store them as vertices.
    /// Cleared on every reset so the field cannot go stale.
    pub(crate) is_ring_closure: bool,
    /// Deepest depth reached below this vertex during depth-first traversal.
    pub(crate) deepest_subtree_depth: u32,
    /// Nearest rotatable ancestor-or-self on the depth-first path from the root.
    pub(crate) rotatable_chain_head: Option<VertexId>,
}

impl<P> GraphNode<P> {
    /// Creates a vertex with empty adjacency and all traversal state unvisited.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            payload: None,
            neighbors: Vec::new(),
            distance: None,
            predecessor: None,
            path_position: None,
            is_ring_closure: false,
            deepest_subtree_depth: 0,
            rotatable_chain_head: None,
        }
    }

    pub fn with_payload(id: VertexId, payload: P) -> Self {
        let mut node = Self::new(id);
        node.payload = Some(payload);
        node
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub(crate) fn replace_payload(&mut self, payload: P) -> Option<P> {
        self.payload.replace(payload)
    }

    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    pub fn is_visited(&self) -> bool {
        self.distance.is_some()
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn path_position(&self) -> Option<usize> {
        self.path_position
    }

    /// Whether this record stands for a ring-closure marker rather than an atom.
    ///
    /// Vertices stored in a [`crate::core::models::graph::MolecularGraph`] never are; look for
    /// [`crate::engine::path::Visit::RingClosure`] in a traversal result instead.
    pub fn is_ring_closure(&self) -> bool {
        self.is_ring_closure
    }

    pub fn deepest_subtree_depth(&self) -> u32 {
        self.deepest_subtree_depth
    }

    pub fn rotatable_chain_head(&self) -> Option<VertexId> {
        self.rotatable_chain_head
    }

    /// Appends `other` to the adjacency list.
    ///
    /// No duplicate detection is done; connecting twice yields a parallel edge.
    pub(crate) fn push_neighbor(&mut self, other: VertexId) {
        self.neighbors.push(other);
    }

    /// Reorders the adjacency list in place. Topology is unchanged; only the enumeration
    /// order seen by later traversals moves.
    pub fn sort_neighbors_by<F>(&mut self, compare: F)
    where
        F: FnMut(&VertexId, &VertexId) -> Ordering,
    {
        self.neighbors.sort_by(compare);
    }

    /// Swaps in a reordering of the adjacency list computed by the owning graph.
    pub(crate) fn replace_neighbors(&mut self, neighbors: Vec<VertexId>) {
        debug_assert_eq!(neighbors.len(), self.neighbors.len());
        self.neighbors = neighbors;
    }

    /// Restores every transient traversal field to its unvisited value.
    pub fn reset_traversal_state(&mut self) {
        self.distance = None;
        self.predecessor = None;
        self.path_position = None;
        self.is_ring_closure = false;
        self.deepest_subtree_depth = 0;
        self.rotatable_chain_head = None;
    }
}

impl<P: RotationSite> GraphNode<P> {
    /// A vertex without payload is never rotatable.
    pub fn is_rotatable(&self) -> bool {
        self.payload.as_ref().is_some_and(RotationSite::is_rotatable)
    }
}
