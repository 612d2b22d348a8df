use std::collections::HashMap;

use super::index::GraphIndex;
use super::positions::{Placement, bucket_of};
use super::ranking::Reachable;
use super::types::EdgeLayout;

/// Keep only valid reachable edges spanning adjacent buckets, rewritten
/// onto the canonical ids. Same-bucket, skip-bucket, and back edges —
/// including whatever a cycle left behind — are dropped and counted.
pub(super) fn filter_edges(
    index: &GraphIndex,
    reachable: &Reachable,
    layer_of: &HashMap<String, usize>,
    remap: &HashMap<usize, usize>,
    placement: &Placement,
) -> (Vec<EdgeLayout>, usize) {
    let mut edges: Vec<EdgeLayout> = Vec::new();
    let mut dropped = 0usize;
    for edge in &index.edges {
        if !reachable.contains(&edge.source) || !reachable.contains(&edge.target) {
            continue;
        }
        let source_bucket = bucket_of(layer_of, remap, &edge.source);
        let target_bucket = bucket_of(layer_of, remap, &edge.target);
        if target_bucket != source_bucket + 1 {
            dropped += 1;
            continue;
        }
        edges.push(EdgeLayout::between(
            &placement.new_ids[&edge.source],
            &placement.new_ids[&edge.target],
        ));
    }
    (edges, dropped)
}

/// Unify multiple sinks. Out-degree-0 nodes in emission order are the
/// terminal candidates; the last one emitted is canonical. Every earlier
/// candidate sitting strictly above it (smaller y) gets a synthetic edge
/// into it. Candidates at or below the canonical terminal stay
/// unconnected — the documented partial behavior, observable through the
/// returned count.
pub(super) fn merge_terminals(placement: &Placement, edges: &mut Vec<EdgeLayout>) -> usize {
    let mut out_degree: HashMap<&str, usize> = placement
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), 0))
        .collect();
    for edge in edges.iter() {
        *out_degree.entry(edge.source.as_str()).or_insert(0) += 1;
    }
    let terminals: Vec<usize> = placement
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| out_degree.get(node.id.as_str()).copied().unwrap_or(0) == 0)
        .map(|(slot, _)| slot)
        .collect();
    let Some((last, rest)) = terminals.split_last() else {
        return 0;
    };
    if rest.is_empty() {
        return 0;
    }

    let canonical = &placement.nodes[*last];
    let mut added = 0usize;
    for slot in rest {
        let candidate = &placement.nodes[*slot];
        if candidate.position.y >= canonical.position.y {
            continue;
        }
        edges.push(EdgeLayout::between(&candidate.id, &canonical.id));
        added += 1;
    }
    added
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::ir::{NodeData, Position};
    use crate::normalize::types::NodeLayout;

    fn placed(nodes: &[(&str, f32)]) -> Placement {
        Placement {
            nodes: nodes
                .iter()
                .map(|(id, y)| NodeLayout {
                    id: id.to_string(),
                    position: Position::new(400.0, *y),
                    data: NodeData { label: id.to_string() },
                })
                .collect(),
            new_ids: HashMap::new(),
        }
    }

    #[test]
    fn lower_sink_is_merged_into_deeper_terminal() {
        let placement = placed(&[("n1", 40.0), ("n2", 140.0), ("n3", 260.0)]);
        let mut edges = vec![EdgeLayout::between("n1", "n2"), EdgeLayout::between("n1", "n3")];
        let added = merge_terminals(&placement, &mut edges);
        assert_eq!(added, 1);
        let merged = edges.last().unwrap();
        assert_eq!(merged.source, "n2");
        assert_eq!(merged.target, "n3");
        assert_eq!(merged.id, "n2->n3");
    }

    #[test]
    fn equal_y_sinks_stay_unmerged() {
        // Both sinks sit on the same tier; neither is strictly above the
        // canonical (last-emitted) one, so no merge edge is added.
        let placement = placed(&[("n1", 40.0), ("n2", 140.0), ("n3", 140.0)]);
        let mut edges = vec![EdgeLayout::between("n1", "n2"), EdgeLayout::between("n1", "n3")];
        let added = merge_terminals(&placement, &mut edges);
        assert_eq!(added, 0);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn single_sink_is_left_alone() {
        let placement = placed(&[("n1", 40.0), ("n2", 140.0)]);
        let mut edges = vec![EdgeLayout::between("n1", "n2")];
        assert_eq!(merge_terminals(&placement, &mut edges), 0);
        assert_eq!(edges.len(), 1);
    }
}
