use serde::{Deserialize, Serialize};

use crate::ir::{NodeData, Position};

/// A placed output node. Ids are the canonical `n1..nK` sequence; the
/// label carries a matching `"<k>. "` prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
}

/// An output edge. The id is regenerated as `"<source>-><target>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLayout {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl EdgeLayout {
    pub(super) fn between(source: &str, target: &str) -> Self {
        Self {
            id: format!("{source}->{target}"),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// The normalized, strictly-layered graph. Serializes to the same wire
/// shape as [`crate::ir::RawGraph`], so a layout can be fed back through
/// the engine unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<NodeLayout>,
    pub edges: Vec<EdgeLayout>,
}

/// Counts of everything the engine silently degraded. The functional
/// output never reflects these; they exist so callers and tests can
/// observe how much of the input survived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Edges referencing an unknown node id.
    pub dangling_edges_dropped: usize,
    /// Nodes not forward-reachable from the selected root.
    pub unreachable_nodes_dropped: usize,
    /// Nodes ordered by the deterministic append fallback after a cycle
    /// stalled the topological sort.
    pub cycle_fallback_nodes: usize,
    /// Valid reachable edges discarded for not spanning adjacent buckets.
    pub non_adjacent_edges_dropped: usize,
    /// Edges added to merge extra sinks into the canonical terminal.
    pub synthetic_terminal_edges: usize,
}

/// Result of one normalization call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalized {
    pub layout: Layout,
    pub diagnostics: Diagnostics,
}
