use std::collections::{HashMap, HashSet, VecDeque};

use super::index::GraphIndex;

/// Pick the root: the node with the strictly smallest in-degree, scanning
/// in input order. The comparison is `<`, never `<=`, so ties keep the
/// earliest candidate. A pure cycle still yields a root (minimum nonzero
/// in-degree) — this is a heuristic, not a guarantee of true root status.
pub(super) fn select_root(index: &GraphIndex) -> String {
    let mut root_id = index.ids[0].clone();
    let mut min_in_degree = usize::MAX;
    for id in &index.ids {
        let in_degree = index.in_degree(id);
        if in_degree < min_in_degree {
            min_in_degree = in_degree;
            root_id = id.clone();
        }
    }
    root_id
}

/// Nodes forward-reachable from the root, in BFS discovery order.
/// Discovery order is itself part of the determinism contract: it seeds
/// the topological tie-break and the cycle fallback.
#[derive(Debug)]
pub(super) struct Reachable {
    pub order: Vec<String>,
    pub set: HashSet<String>,
}

impl Reachable {
    pub(super) fn contains(&self, id: &str) -> bool {
        self.set.contains(id)
    }
}

pub(super) fn scan_reachable(index: &GraphIndex, root_id: &str) -> Reachable {
    let mut order: Vec<String> = vec![root_id.to_string()];
    let mut set: HashSet<String> = HashSet::new();
    set.insert(root_id.to_string());
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(root_id.to_string());
    while let Some(current) = queue.pop_front() {
        for next in index.successors(&current) {
            if set.insert(next.clone()) {
                order.push(next.clone());
                queue.push_back(next.clone());
            }
        }
    }
    Reachable { order, set }
}

/// Kahn's-algorithm total order over the reachable subgraph, FIFO among
/// simultaneous zero-in-degree nodes. In-degrees are counted per edge, so
/// multi-edges and self-loops each contribute; the counter is signed so a
/// decrement past zero on adversarial multigraphs can never re-enqueue a
/// node. If a cycle stalls the sort, the remaining nodes are appended in
/// discovery order — deterministic, not topologically meaningful; the
/// layer filter downstream discards the edges such nodes violate.
///
/// Returns the order plus the count of fallback-appended nodes.
pub(super) fn topo_order(index: &GraphIndex, reachable: &Reachable) -> (Vec<String>, usize) {
    let mut in_degree: HashMap<&str, i64> = HashMap::with_capacity(reachable.order.len());
    for id in &reachable.order {
        in_degree.insert(id.as_str(), 0);
    }
    for edge in &index.edges {
        if !reachable.contains(&edge.source) || !reachable.contains(&edge.target) {
            continue;
        }
        *in_degree.entry(edge.target.as_str()).or_insert(0) += 1;
    }

    let mut topo: Vec<String> = Vec::with_capacity(reachable.order.len());
    let mut queue: VecDeque<&str> = reachable
        .order
        .iter()
        .map(|id| id.as_str())
        .filter(|id| in_degree.get(id).copied().unwrap_or(0) == 0)
        .collect();
    while let Some(current) = queue.pop_front() {
        topo.push(current.to_string());
        for next in index.successors(current) {
            if !reachable.contains(next) {
                continue;
            }
            let entry = in_degree.entry(next.as_str()).or_insert(0);
            *entry -= 1;
            if *entry == 0 {
                queue.push_back(next.as_str());
            }
        }
    }

    let mut fallback = 0usize;
    if topo.len() < reachable.order.len() {
        let emitted: HashSet<&str> = topo.iter().map(|id| id.as_str()).collect();
        let remaining: Vec<String> = reachable
            .order
            .iter()
            .filter(|id| !emitted.contains(id.as_str()))
            .cloned()
            .collect();
        fallback = remaining.len();
        topo.extend(remaining);
    }
    (topo, fallback)
}
