//! The normalization and layout engine.
//!
//! A single pure pass over an untrusted candidate graph:
//! index, pick a root, scan reachability, order topologically, assign and
//! quantize layers, renumber and place, then filter edges and unify
//! sinks. Each stage consumes the previous stage's output and nothing
//! else; the same input and config always produce the same output, byte
//! for byte once serialized.
//!
//! Malformed input never fails. Dangling edges, disconnected components,
//! cycles, and surplus sinks all degrade to a smaller but still-valid
//! layered graph, with every degradation counted in [`Diagnostics`].

mod edges;
mod index;
mod layers;
mod positions;
mod ranking;
pub(crate) mod types;

pub use types::{Diagnostics, EdgeLayout, Layout, NodeLayout, Normalized};

use crate::config::LayoutConfig;
use crate::ir::RawGraph;

use edges::{filter_edges, merge_terminals};
use index::GraphIndex;
use layers::{assign_layers, quantize_layers};
use positions::assign_positions;
use ranking::{scan_reachable, select_root, topo_order};

/// Normalize a candidate graph into a strictly-layered, renumbered,
/// positioned DAG.
///
/// Empty input produces an empty layout; this is not an error condition.
pub fn normalize_graph(raw: &RawGraph, config: &LayoutConfig) -> Normalized {
    let mut diagnostics = Diagnostics::default();

    let index = GraphIndex::build(raw);
    diagnostics.dangling_edges_dropped = index.dangling_edges;
    if index.is_empty() {
        return Normalized {
            layout: Layout::default(),
            diagnostics,
        };
    }

    let root_id = select_root(&index);
    let reachable = scan_reachable(&index, &root_id);
    diagnostics.unreachable_nodes_dropped = index.ids.len() - reachable.order.len();

    let (topo, cycle_fallback) = topo_order(&index, &reachable);
    diagnostics.cycle_fallback_nodes = cycle_fallback;

    let layer_of = assign_layers(&index, &reachable, &root_id);
    let remap = quantize_layers(&layer_of, config.max_buckets());

    let placement = assign_positions(&index, &topo, &layer_of, &remap, config);

    let (mut edges, non_adjacent) =
        filter_edges(&index, &reachable, &layer_of, &remap, &placement);
    diagnostics.non_adjacent_edges_dropped = non_adjacent;
    diagnostics.synthetic_terminal_edges = merge_terminals(&placement, &mut edges);

    Normalized {
        layout: Layout {
            nodes: placement.nodes,
            edges,
        },
        diagnostics,
    }
}
