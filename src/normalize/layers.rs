use std::collections::{HashMap, VecDeque};

use super::index::GraphIndex;
use super::ranking::Reachable;

const UNREACHED: usize = usize::MAX;

/// Shortest-path layers from the root, by edge count. BFS with a min
/// relaxation (`layer[v] = min(layer[v], layer[u] + 1)`), so a node with
/// both a short and a long path from the root sits on the short one.
/// Every reachable node ends up with a finite layer.
pub(super) fn assign_layers(
    index: &GraphIndex,
    reachable: &Reachable,
    root_id: &str,
) -> HashMap<String, usize> {
    let mut layer_of: HashMap<String, usize> = reachable
        .order
        .iter()
        .map(|id| (id.clone(), UNREACHED))
        .collect();
    layer_of.insert(root_id.to_string(), 0);

    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(root_id.to_string());
    while let Some(current) = queue.pop_front() {
        let current_layer = layer_of[&current];
        for next in index.successors(&current) {
            if !reachable.contains(next) {
                continue;
            }
            let entry = layer_of.entry(next.clone()).or_insert(UNREACHED);
            if *entry > current_layer + 1 {
                *entry = current_layer + 1;
                queue.push_back(next.clone());
            }
        }
    }
    layer_of
}

/// Compress raw layer values into at most `max_buckets` buckets.
///
/// When the distinct layers fit, each maps 1:1 onto its rank (capped at
/// the last bucket). When they do not, each rank is projected onto
/// `0..max_buckets` by exact integer arithmetic, so adjacent raw layers
/// collapse into shared buckets. The rendering surface has a fixed number
/// of vertical slots; arbitrarily deep graphs are deliberately flattened
/// to fit.
pub(super) fn quantize_layers(
    layer_of: &HashMap<String, usize>,
    max_buckets: usize,
) -> HashMap<usize, usize> {
    let mut used: Vec<usize> = layer_of
        .values()
        .copied()
        .filter(|layer| *layer != UNREACHED)
        .collect();
    used.sort_unstable();
    used.dedup();

    let mut remap: HashMap<usize, usize> = HashMap::with_capacity(used.len());
    if used.len() <= max_buckets {
        for (rank, layer) in used.iter().enumerate() {
            remap.insert(*layer, rank.min(max_buckets - 1));
        }
    } else {
        let last_rank = used.len() - 1;
        for (rank, layer) in used.iter().enumerate() {
            remap.insert(*layer, rank * (max_buckets - 1) / last_rank);
        }
    }
    remap
}
