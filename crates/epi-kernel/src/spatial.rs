//! Per-frame spatial neighbor index.
//!
//! Built once per [`infect`][crate::infect] call over whichever side of the
//! population the chosen strategy iterates *against* (susceptibles for the
//! sparse-infected strategy, the infectious snapshot for the dense one), so
//! both strategies share one neighbor-query abstraction.

use epi_core::{AgentId, Point};
use rstar::{AABB, RTree, RTreeObject};

/// Entry stored in the R-tree: an agent's position at frame start.
#[derive(Clone)]
struct AgentEntry {
    point: [f32; 2],
    id: AgentId,
}

impl RTreeObject for AgentEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// An R-tree over a set of agent positions, answering strict Chebyshev-box
/// queries.
pub struct FrameIndex {
    tree: RTree<AgentEntry>,
}

impl FrameIndex {
    /// Bulk-load an index from `(id, position)` pairs.
    pub fn build(entries: impl IntoIterator<Item = (AgentId, Point)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(id, p)| AgentEntry { point: [p.x, p.y], id })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Ids of all indexed agents strictly inside the square of half-width
    /// `half_width` centered on `center`.
    ///
    /// The AABB lookup is inclusive; the strict open-boundary semantics come
    /// from the `in_box` post-filter.
    pub fn in_box(&self, center: Point, half_width: f32) -> impl Iterator<Item = AgentId> + '_ {
        let envelope = AABB::from_corners(
            [center.x - half_width, center.y - half_width],
            [center.x + half_width, center.y + half_width],
        );
        self.tree
            .locate_in_envelope(&envelope)
            .filter(move |e| Point::new(e.point[0], e.point[1]).in_box(center, half_width))
            .map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
