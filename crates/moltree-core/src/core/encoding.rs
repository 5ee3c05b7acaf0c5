//! Packed `(depth, id)` path entries.
//!
//! Each entry stores a traversal depth and a vertex id in one integer as
//! `(depth << 8) | (id & 0xFF)`. Consumers recover both halves by shift and mask. Only the
//! low eight bits of the id survive, so ids of 256 and above wrap; this is a hard limit of
//! the representation, not an error. The traversals themselves track full ids, and the
//! visit lists they return carry them unchanged.

use super::models::ids::VertexId;
use serde::Serialize;
use std::fmt;

pub const ID_BITS: u32 = 8;
pub const ID_MASK: u32 = (1 << ID_BITS) - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackedEntry(u32);

impl PackedEntry {
    pub fn encode(depth: u32, id: VertexId) -> Self {
        let id_bits = (id.index() as u32) & ID_MASK;
        Self(depth.wrapping_shl(ID_BITS) | id_bits)
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn depth(self) -> u32 {
        self.0 >> ID_BITS
    }

    /// The id as stored, i.e. the full vertex id modulo 256.
    pub const fn id(self) -> VertexId {
        VertexId::new((self.0 & ID_MASK) as usize)
    }

    pub const fn decode(self) -> (u32, VertexId) {
        (self.depth(), self.id())
    }
}

impl fmt::Display for PackedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id(), self.depth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_matches_shift_and_mask_layout() {
        let entry = PackedEntry::encode(3, VertexId::new(17));
        assert_eq!(entry.raw(), (3 << 8) | 17);
        assert_eq!(entry.decode(), (3, VertexId::new(17)));
    }

    #[test]
    fn ids_at_or_above_256_wrap() {
        assert_eq!(PackedEntry::encode(1, VertexId::new(255)).id(), VertexId::new(255));
        assert_eq!(PackedEntry::encode(1, VertexId::new(256)).id(), VertexId::new(0));
        assert_eq!(PackedEntry::encode(1, VertexId::new(300)).id(), VertexId::new(44));
        assert_eq!(PackedEntry::encode(1, VertexId::new(300)).depth(), 1);
    }

    #[test]
    fn from_raw_accepts_values_produced_elsewhere() {
        let entry = PackedEntry::from_raw((12 << 8) + 200);
        assert_eq!(entry.depth(), 12);
        assert_eq!(entry.id(), VertexId::new(200));
        assert_eq!(entry.to_string(), "200@12");
    }
}
