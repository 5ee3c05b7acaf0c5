use serde::Serialize;
use std::fmt;

/// Dense identifier of a vertex within a [`MolecularGraph`](super::graph::MolecularGraph).
///
/// Identifiers are assigned sequentially from zero as vertices are added and are never
/// reused, so a `VertexId` doubles as an index into the graph's vertex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_round_trips_through_usize() {
        let id = VertexId::from(42);
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(VertexId::new(42), id);
    }

    #[test]
    fn vertex_ids_order_by_index() {
        let mut ids = vec![VertexId::new(3), VertexId::new(0), VertexId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![VertexId::new(0), VertexId::new(3), VertexId::new(7)]);
    }

    #[test]
    fn vertex_id_displays_as_plain_index() {
        assert_eq!(VertexId::new(12).to_string(), "12");
    }
}
