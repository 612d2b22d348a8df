use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::LayoutConfig;
use crate::ir::{NodeData, Position};

use super::index::GraphIndex;
use super::types::NodeLayout;

static NUMERIC_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// `"3. foo"` + rank 1 becomes `"1. foo"`; an unprefixed label simply
/// gains its rank. The upstream generator numbers labels itself and those
/// numbers rarely survive renumbering, so stale prefixes are stripped.
pub(super) fn sanitize_label(rank_one_based: usize, label: &str) -> String {
    let trimmed = label.trim();
    let base = NUMERIC_PREFIX_RE.replace(trimmed, "");
    format!("{rank_one_based}. {base}")
}

/// Bucket for an old node id. Missing entries fall through to bucket 0;
/// unreachable in practice but mirrors the engine's never-fail posture.
pub(super) fn bucket_of(
    layer_of: &HashMap<String, usize>,
    remap: &HashMap<usize, usize>,
    id: &str,
) -> usize {
    let layer = layer_of.get(id).copied().unwrap_or(0);
    remap.get(&layer).copied().unwrap_or(0)
}

/// The renumbered, placed nodes plus the old-id to new-id mapping the
/// edge stage rewrites endpoints with.
#[derive(Debug)]
pub(super) struct Placement {
    pub nodes: Vec<NodeLayout>,
    pub new_ids: HashMap<String, String>,
}

/// Reassign canonical ids `n1..nK` in topological order and lay buckets
/// out top-to-bottom, left-to-right.
///
/// Emission order is bucket-major (ascending bucket, topo order within a
/// bucket); label ranks follow emission order. A lone node in a bucket is
/// centered; multiple nodes spread evenly across `[min_x, max_x]` with x
/// rounded to the nearest integer.
pub(super) fn assign_positions(
    index: &GraphIndex,
    topo: &[String],
    layer_of: &HashMap<String, usize>,
    remap: &HashMap<usize, usize>,
    config: &LayoutConfig,
) -> Placement {
    let mut buckets: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for id in topo {
        buckets
            .entry(bucket_of(layer_of, remap, id))
            .or_default()
            .push(id.as_str());
    }

    let mut new_ids: HashMap<String, String> = HashMap::with_capacity(topo.len());
    for (position, id) in topo.iter().enumerate() {
        new_ids.insert(id.clone(), format!("n{}", position + 1));
    }

    let mut nodes: Vec<NodeLayout> = Vec::with_capacity(topo.len());
    for (bucket, ids) in &buckets {
        let y = config.slot_y(*bucket);
        let count = ids.len();
        for (slot, id) in ids.iter().enumerate() {
            let x = if count == 1 {
                config.center_x()
            } else {
                let step = (config.max_x - config.min_x) / (count - 1) as f32;
                (config.min_x + step * slot as f32).round()
            };
            let label = sanitize_label(nodes.len() + 1, &index.nodes[*id].data.label);
            nodes.push(NodeLayout {
                id: new_ids[*id].clone(),
                position: Position::new(x, y),
                data: NodeData { label },
            });
        }
    }

    Placement { nodes, new_ids }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_existing_prefix() {
        assert_eq!(sanitize_label(2, "7. Immutability basics"), "2. Immutability basics");
        assert_eq!(sanitize_label(1, "  Overview & goals "), "1. Overview & goals");
        assert_eq!(sanitize_label(3, "12.no space"), "3. no space");
    }

    #[test]
    fn sanitize_leaves_interior_numbers_alone() {
        assert_eq!(sanitize_label(4, "Review chapter 3. again"), "4. Review chapter 3. again");
    }

    #[test]
    fn sanitize_empty_label() {
        assert_eq!(sanitize_label(5, ""), "5. ");
    }
}
