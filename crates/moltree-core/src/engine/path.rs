use crate::core::encoding::PackedEntry;
use crate::core::models::graph::MolecularGraph;
use crate::core::models::ids::VertexId;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// One record of a breadth-first visit list.
///
/// Ring closures are reported as their own variant instead of as phantom vertices, so the
/// graph's id space is never touched. A marker borrows the identity (and therefore the
/// payload) of the real vertex whose revisit closed the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visit {
    Vertex(VertexId),
    RingClosure {
        /// The already visited vertex the closing edge points at.
        of_vertex: VertexId,
        /// The vertex being expanded when the closing edge was found.
        predecessor: VertexId,
        /// Depth of `of_vertex` in the breadth-first tree.
        depth: u32,
        /// Index of the most recent entry in the packed path when the closure was found.
        path_position: usize,
    },
}

impl Visit {
    /// The real vertex this record refers to.
    pub fn vertex(&self) -> VertexId {
        match *self {
            Visit::Vertex(id) => id,
            Visit::RingClosure { of_vertex, .. } => of_vertex,
        }
    }

    pub fn is_ring_closure(&self) -> bool {
        matches!(self, Visit::RingClosure { .. })
    }
}

/// Output of the compact breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadthFirstPath {
    pub(crate) root: VertexId,
    pub(crate) entries: Vec<PackedEntry>,
    pub(crate) visits: Vec<Visit>,
}

impl BreadthFirstPath {
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// One packed `(depth, id)` entry per tree vertex, in discovery order.
    pub fn entries(&self) -> &[PackedEntry] {
        &self.entries
    }

    /// Tree vertices interleaved with ring-closure markers, in discovery order.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Tree vertices only, with full (untruncated) ids.
    pub fn vertex_order(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visits.iter().filter_map(|visit| match visit {
            Visit::Vertex(id) => Some(*id),
            Visit::RingClosure { .. } => None,
        })
    }

    pub fn ring_closures(&self) -> impl Iterator<Item = &Visit> + '_ {
        self.visits.iter().filter(|visit| visit.is_ring_closure())
    }

    pub fn ring_closure_count(&self) -> usize {
        self.ring_closures().count()
    }
}

impl fmt::Display for BreadthFirstPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join(" "))
    }
}

/// Output of the edge-list breadth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgePath {
    pub(crate) root: VertexId,
    pub(crate) edges: Vec<(VertexId, VertexId)>,
}

impl EdgePath {
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// `(from, to)` pairs in discovery order, excluding the root seed.
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (VertexId, VertexId)> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgePath {
    type Item = &'a (VertexId, VertexId);
    type IntoIter = std::slice::Iter<'a, (VertexId, VertexId)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl fmt::Display for EdgePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.edges
                .iter()
                .map(|(from, to)| format!("{from}-{to}"))
                .join(" ")
        )
    }
}

/// Output of the depth-first traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthFirstPath {
    pub(crate) order: Vec<VertexId>,
    pub(crate) entries: Vec<PackedEntry>,
    pub(crate) max_depth: u32,
}

/// A run of vertices that move together because they share the same nearest rotatable
/// ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RigidSegment {
    /// `None` for the segment anchored at the root, before any rotatable vertex.
    pub head: Option<VertexId>,
    pub members: Vec<VertexId>,
}

impl DepthFirstPath {
    pub fn root(&self) -> VertexId {
        self.order[0]
    }

    /// Vertices in pre-order, starting with the root.
    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    /// Packed `(depth, id)` entries matching [`order`](Self::order).
    pub fn entries(&self) -> &[PackedEntry] {
        &self.entries
    }

    /// Deepest depth reached anywhere below the root.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Partitions the traversal into rigid segments keyed by chain head.
    ///
    /// Segments appear in the order their first member was visited and members keep
    /// traversal order. The graph must be the one this path was computed on, with no
    /// traversal run on it since.
    pub fn rigid_segments<P>(&self, graph: &MolecularGraph<P>) -> Vec<RigidSegment> {
        let mut segments: Vec<RigidSegment> = Vec::new();
        for &id in &self.order {
            let head = graph.vertex(id).and_then(|node| node.rotatable_chain_head());
            match segments.iter_mut().find(|segment| segment.head == head) {
                Some(segment) => segment.members.push(id),
                None => segments.push(RigidSegment {
                    head,
                    members: vec![id],
                }),
            }
        }
        segments
    }
}

impl fmt::Display for DepthFirstPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.iter().join(" "))
    }
}
