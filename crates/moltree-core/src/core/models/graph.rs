use super::ids::VertexId;
use super::node::GraphNode;
use super::payload::RotationSite;
use crate::engine::config::TraversalConfig;
use crate::engine::error::GraphError;
use crate::engine::path::{BreadthFirstPath, DepthFirstPath, EdgePath};
use crate::engine::tasks::{breadth_first, depth_first, edge_list};
use std::cmp::Ordering;

/// An append-only molecular connectivity graph.
///
/// Vertices live in an arena indexed by their dense [`VertexId`]; adjacency and every
/// back-reference (predecessor, chain head) are ids into that arena. The chemistry layer
/// builds the graph once and then runs any number of traversals over it. Each traversal
/// needs `&mut self`, so only one can be in flight per graph and the adjacency cannot
/// change underneath it.
#[derive(Debug, Clone)]
pub struct MolecularGraph<P> {
    /// Vertex arena, indexed by `VertexId`.
    vertices: Vec<GraphNode<P>>,
    config: TraversalConfig,
}

impl<P> Default for MolecularGraph<P> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            config: TraversalConfig::default(),
        }
    }
}

impl<P> MolecularGraph<P> {
    /// Creates an empty graph with the default traversal configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose traversals use `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated traversal settings, such as the edge-list capacity factor.
    pub fn with_config(config: TraversalConfig) -> Self {
        Self {
            vertices: Vec::new(),
            config,
        }
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices before the arena
    /// reallocates. Uses the default traversal configuration.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            config: TraversalConfig::default(),
        }
    }

    /// Traversal settings this graph was created with.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Number of vertices. Valid ids are `0..vertex_count()`.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex has been added yet.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of adjacency entries across all vertices.
    ///
    /// This is not a bond count: a symmetric edge contributes one entry to each endpoint
    /// and so counts twice, an asymmetric edge counts once, and each parallel copy counts
    /// separately.
    pub fn adjacency_entry_count(&self) -> usize {
        self.vertices.iter().map(GraphNode::degree).sum()
    }

    /// Looks up a vertex record.
    ///
    /// # Return
    ///
    /// The vertex, or `None` if `id` is out of range.
    pub fn vertex(&self, id: VertexId) -> Option<&GraphNode<P>> {
        self.vertices.get(id.index())
    }

    /// All vertices in id order.
    pub fn vertices(&self) -> &[GraphNode<P>] {
        &self.vertices
    }

    /// Adjacency list of `id` in its current enumeration order, or `None` if `id` is out
    /// of range.
    pub fn neighbors(&self, id: VertexId) -> Option<&[VertexId]> {
        self.vertex(id).map(GraphNode::neighbors)
    }

    /// Payload attached to `id`. `None` if the id is out of range or no payload is set.
    pub fn payload(&self, id: VertexId) -> Option<&P> {
        self.vertex(id).and_then(GraphNode::payload)
    }

    /// Adds a vertex without payload and returns its id, which equals the previous
    /// vertex count.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(GraphNode::new(id));
        id
    }

    /// Adds a vertex carrying `payload`.
    ///
    /// # Arguments
    ///
    /// * `payload` - Chemistry-layer data for the vertex; for depth-first traversal it
    ///   decides whether the vertex is rotatable.
    ///
    /// # Return
    ///
    /// The new vertex's id, equal to the previous vertex count.
    pub fn add_vertex_with_payload(&mut self, payload: P) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(GraphNode::with_payload(id, payload));
        id
    }

    /// Attaches `payload` to an existing vertex.
    ///
    /// # Return
    ///
    /// The payload previously attached, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertexId`] if `id` does not name a vertex.
    pub fn set_payload(&mut self, id: VertexId, payload: P) -> Result<Option<P>, GraphError> {
        self.check_vertex(id)?;
        Ok(self.vertices[id.index()].replace_payload(payload))
    }

    /// Adds a bond traversable in both directions.
    pub fn add_edge(&mut self, i: VertexId, j: VertexId) -> Result<(), GraphError> {
        self.add_edge_with_symmetry(i, j, true)
    }

    /// Adds an edge from `i` to `j`, and from `j` back to `i` when `symmetric` is set.
    ///
    /// Parallel edges are not detected; adding the same edge twice creates two adjacency
    /// entries. A self-loop is allowed and appears in the adjacency list like any other
    /// neighbor.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertexId`] if either endpoint does not name a vertex.
    /// The graph is left untouched in that case.
    pub fn add_edge_with_symmetry(
        &mut self,
        i: VertexId,
        j: VertexId,
        symmetric: bool,
    ) -> Result<(), GraphError> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        self.vertices[i.index()].push_neighbor(j);
        if symmetric {
            self.vertices[j.index()].push_neighbor(i);
        }
        Ok(())
    }

    /// Reorders the adjacency of one vertex. `compare` receives the two neighbor vertices.
    pub fn sort_neighbors_by<F>(&mut self, id: VertexId, mut compare: F) -> Result<(), GraphError>
    where
        F: FnMut(&GraphNode<P>, &GraphNode<P>) -> Ordering,
    {
        self.check_vertex(id)?;
        self.sort_adjacency_of(id.index(), &mut compare);
        Ok(())
    }

    /// Reorders every adjacency list with a caller-supplied ordering on neighbor vertices.
    ///
    /// Meant to be called once the graph is fully built so that traversal output no longer
    /// depends on the order in which bonds were declared.
    pub fn sort_all_adjacency_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&GraphNode<P>, &GraphNode<P>) -> Ordering,
    {
        for index in 0..self.vertices.len() {
            self.sort_adjacency_of(index, &mut compare);
        }
    }

    /// Sorts every adjacency list by ascending neighbor id.
    pub fn sort_all_adjacency(&mut self) {
        for node in &mut self.vertices {
            node.sort_neighbors_by(|a, b| a.cmp(b));
        }
    }

    fn sort_adjacency_of<F>(&mut self, index: usize, compare: &mut F)
    where
        F: FnMut(&GraphNode<P>, &GraphNode<P>) -> Ordering,
    {
        // Sort a copy so a self-loop still compares against the vertex's full adjacency.
        let mut neighbors = self.vertices[index].neighbors().to_vec();
        let vertices = &self.vertices;
        neighbors.sort_by(|a, b| compare(&vertices[a.index()], &vertices[b.index()]));
        self.vertices[index].replace_neighbors(neighbors);
    }

    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        if id.index() < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertexId {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }

    pub(crate) fn node(&self, id: VertexId) -> &GraphNode<P> {
        &self.vertices[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: VertexId) -> &mut GraphNode<P> {
        &mut self.vertices[id.index()]
    }

    /// Restores the transient traversal state of every vertex.
    pub fn reset_traversal_state(&mut self) {
        for node in &mut self.vertices {
            node.reset_traversal_state();
        }
    }

    /// Breadth-first traversal producing packed `(depth, id)` entries and a visit list
    /// with ring-closure markers. See [`breadth_first::run`].
    pub fn broad_path(&mut self, start: VertexId) -> Result<BreadthFirstPath, GraphError> {
        breadth_first::run(self, start)
    }

    /// Breadth-first traversal producing `(from, to)` edges in discovery order. See
    /// [`edge_list::run`].
    pub fn broad_path_edges(&mut self, start: VertexId) -> Result<EdgePath, GraphError> {
        edge_list::run(self, start)
    }
}

impl<P: RotationSite> MolecularGraph<P> {
    /// Depth-first traversal with rotatable-chain tracking. See [`depth_first::run`].
    pub fn depth_first_path(&mut self, start: VertexId) -> Result<DepthFirstPath, GraphError> {
        depth_first::run(self, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::payload::RotationFlags;

    fn graph_with_vertices(count: usize) -> (MolecularGraph<RotationFlags>, Vec<VertexId>) {
        let mut graph = MolecularGraph::new();
        let ids = (0..count).map(|_| graph.add_vertex()).collect();
        (graph, ids)
    }

    mod construction {
        use super::*;

        #[test]
        fn add_vertex_assigns_dense_sequential_ids() {
            let (graph, ids) = graph_with_vertices(4);

            assert_eq!(
                ids,
                (0..4).map(VertexId::new).collect::<Vec<_>>(),
                "ids should be 0..N-1 in insertion order"
            );
            assert_eq!(graph.vertex_count(), 4);
            for (index, node) in graph.vertices().iter().enumerate() {
                assert_eq!(node.id().index(), index);
            }
        }

        #[test]
        fn new_graph_is_empty() {
            let graph: MolecularGraph<RotationFlags> = MolecularGraph::new();
            assert!(graph.is_empty());
            assert_eq!(graph.adjacency_entry_count(), 0);
            assert!(graph.vertex(VertexId::new(0)).is_none());
        }

        #[test]
        fn symmetric_edge_is_recorded_on_both_endpoints() {
            let (mut graph, ids) = graph_with_vertices(2);
            graph.add_edge(ids[0], ids[1]).unwrap();

            assert_eq!(graph.neighbors(ids[0]).unwrap(), &[ids[1]]);
            assert_eq!(graph.neighbors(ids[1]).unwrap(), &[ids[0]]);
            assert_eq!(graph.adjacency_entry_count(), 2);
        }

        #[test]
        fn asymmetric_edge_is_recorded_on_source_only() {
            let (mut graph, ids) = graph_with_vertices(2);
            graph.add_edge_with_symmetry(ids[0], ids[1], false).unwrap();

            assert_eq!(graph.neighbors(ids[0]).unwrap(), &[ids[1]]);
            assert!(graph.neighbors(ids[1]).unwrap().is_empty());
            assert_eq!(graph.adjacency_entry_count(), 1);
        }

        #[test]
        fn repeated_edge_creates_parallel_entries() {
            let (mut graph, ids) = graph_with_vertices(2);
            graph.add_edge(ids[0], ids[1]).unwrap();
            graph.add_edge(ids[0], ids[1]).unwrap();

            assert_eq!(graph.neighbors(ids[0]).unwrap(), &[ids[1], ids[1]]);
            assert_eq!(graph.neighbors(ids[1]).unwrap(), &[ids[0], ids[0]]);
        }

        #[test]
        fn add_edge_rejects_unknown_vertices_and_leaves_graph_untouched() {
            let (mut graph, ids) = graph_with_vertices(2);

            let err = graph.add_edge(ids[0], VertexId::new(2)).unwrap_err();
            assert_eq!(
                err,
                GraphError::InvalidVertexId {
                    id: VertexId::new(2),
                    vertex_count: 2,
                }
            );
            assert!(graph.add_edge(VertexId::new(7), ids[1]).is_err());
            assert_eq!(graph.adjacency_entry_count(), 0);
        }

        #[test]
        fn payloads_can_be_attached_and_replaced() {
            let mut graph = MolecularGraph::new();
            let a = graph.add_vertex_with_payload(RotationFlags::rotatable(1));
            let b = graph.add_vertex();

            assert_eq!(graph.payload(a), Some(&RotationFlags::rotatable(1)));
            assert_eq!(graph.payload(b), None);

            let previous = graph.set_payload(b, RotationFlags::fixed()).unwrap();
            assert_eq!(previous, None);
            let previous = graph.set_payload(a, RotationFlags::fixed()).unwrap();
            assert_eq!(previous, Some(RotationFlags::rotatable(1)));

            assert!(graph.set_payload(VertexId::new(5), RotationFlags::fixed()).is_err());
        }

        #[test]
        fn with_config_keeps_supplied_configuration() {
            let config = TraversalConfig::builder()
                .edge_capacity_factor(2)
                .build()
                .unwrap();
            let graph: MolecularGraph<RotationFlags> = MolecularGraph::with_config(config);
            assert_eq!(graph.config().edge_capacity_factor(), 2);

            let graph: MolecularGraph<RotationFlags> = MolecularGraph::with_capacity(16);
            assert_eq!(graph.config(), &TraversalConfig::default());
        }
    }

    mod adjacency_sorting {
        use super::*;

        fn star_declared_out_of_order() -> (MolecularGraph<RotationFlags>, Vec<VertexId>) {
            let (mut graph, ids) = graph_with_vertices(4);
            graph.add_edge(ids[0], ids[3]).unwrap();
            graph.add_edge(ids[0], ids[1]).unwrap();
            graph.add_edge(ids[0], ids[2]).unwrap();
            (graph, ids)
        }

        #[test]
        fn sort_all_adjacency_orders_by_id() {
            let (mut graph, ids) = star_declared_out_of_order();
            graph.sort_all_adjacency();
            assert_eq!(graph.neighbors(ids[0]).unwrap(), &[ids[1], ids[2], ids[3]]);
        }

        #[test]
        fn sort_all_adjacency_by_sees_neighbor_payloads() {
            let mut graph = MolecularGraph::new();
            let center = graph.add_vertex_with_payload(RotationFlags::fixed());
            let low = graph.add_vertex_with_payload(RotationFlags::rotatable(1));
            let high = graph.add_vertex_with_payload(RotationFlags::rotatable(9));
            let mid = graph.add_vertex_with_payload(RotationFlags::rotatable(5));
            for leaf in [low, high, mid] {
                graph.add_edge(center, leaf).unwrap();
            }

            graph.sort_all_adjacency_by(|a, b| {
                let ka = a.payload().map_or(0, |p| p.rotation_index);
                let kb = b.payload().map_or(0, |p| p.rotation_index);
                kb.cmp(&ka)
            });

            assert_eq!(graph.neighbors(center).unwrap(), &[high, mid, low]);
        }

        #[test]
        fn sort_neighbors_by_touches_only_the_requested_vertex() {
            let (mut graph, ids) = star_declared_out_of_order();
            graph.add_edge(ids[3], ids[2]).unwrap();

            graph
                .sort_neighbors_by(ids[3], |a, b| b.id().cmp(&a.id()))
                .unwrap();

            assert_eq!(graph.neighbors(ids[3]).unwrap(), &[ids[2], ids[0]]);
            assert_eq!(graph.neighbors(ids[0]).unwrap(), &[ids[3], ids[1], ids[2]]);
            assert!(graph.sort_neighbors_by(VertexId::new(10), |_, _| Ordering::Equal).is_err());
        }

        #[test]
        fn self_loop_compares_against_the_full_adjacency() {
            let (mut graph, ids) = graph_with_vertices(3);
            graph.add_edge(ids[0], ids[1]).unwrap();
            graph.add_edge(ids[0], ids[0]).unwrap();
            graph.add_edge(ids[0], ids[2]).unwrap();
            assert_eq!(
                graph.neighbors(ids[0]).unwrap(),
                &[ids[1], ids[0], ids[0], ids[2]]
            );

            let mut seen_degrees = Vec::new();
            graph.sort_all_adjacency_by(|a, b| {
                seen_degrees.push((a.id(), a.degree()));
                seen_degrees.push((b.id(), b.degree()));
                b.degree().cmp(&a.degree())
            });

            assert_eq!(
                graph.neighbors(ids[0]).unwrap(),
                &[ids[0], ids[0], ids[1], ids[2]]
            );
            assert!(
                seen_degrees
                    .iter()
                    .filter(|(id, _)| *id == ids[0])
                    .all(|&(_, degree)| degree == 4),
                "a self-loop must see its vertex with the full adjacency"
            );
        }

        #[test]
        fn sort_neighbors_by_keeps_self_loops_in_place_of_their_key() {
            let (mut graph, ids) = graph_with_vertices(3);
            graph.add_edge(ids[0], ids[0]).unwrap();
            graph.add_edge(ids[0], ids[1]).unwrap();
            graph.add_edge(ids[1], ids[2]).unwrap();

            graph
                .sort_neighbors_by(ids[0], |a, b| a.degree().cmp(&b.degree()))
                .unwrap();

            assert_eq!(graph.neighbors(ids[0]).unwrap(), &[ids[1], ids[0], ids[0]]);
            assert_eq!(graph.adjacency_entry_count(), 6);
        }

        #[test]
        fn sorting_preserves_adjacency_entry_count() {
            let (mut graph, _) = star_declared_out_of_order();
            let before = graph.adjacency_entry_count();
            graph.sort_all_adjacency();
            assert_eq!(graph.adjacency_entry_count(), before);
        }
    }
}
