use std::collections::HashMap;

use crate::ir::{RawEdge, RawGraph, RawNode};

/// Indexed working copy of the input graph.
///
/// `ids` keeps first-occurrence insertion order — the ordering contract
/// every later stage ties back to — while `nodes` resolves lookups (a
/// duplicated id keeps its original position, the later payload wins).
/// Only edges whose endpoints both resolve survive into `edges` and the
/// adjacency maps; within each adjacency list, input edge order is
/// preserved.
#[derive(Debug)]
pub(super) struct GraphIndex {
    pub ids: Vec<String>,
    pub nodes: HashMap<String, RawNode>,
    pub edges: Vec<RawEdge>,
    pub out_adj: HashMap<String, Vec<String>>,
    pub in_adj: HashMap<String, Vec<String>>,
    pub dangling_edges: usize,
}

impl GraphIndex {
    pub(super) fn build(raw: &RawGraph) -> Self {
        let mut ids: Vec<String> = Vec::with_capacity(raw.nodes.len());
        let mut nodes: HashMap<String, RawNode> = HashMap::with_capacity(raw.nodes.len());
        for node in &raw.nodes {
            if !nodes.contains_key(&node.id) {
                ids.push(node.id.clone());
            }
            nodes.insert(node.id.clone(), node.clone());
        }

        let mut edges: Vec<RawEdge> = Vec::with_capacity(raw.edges.len());
        let mut out_adj: HashMap<String, Vec<String>> = HashMap::new();
        let mut in_adj: HashMap<String, Vec<String>> = HashMap::new();
        let mut dangling_edges = 0usize;
        for edge in &raw.edges {
            if !nodes.contains_key(&edge.source) || !nodes.contains_key(&edge.target) {
                dangling_edges += 1;
                continue;
            }
            out_adj
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            in_adj
                .entry(edge.target.clone())
                .or_default()
                .push(edge.source.clone());
            edges.push(edge.clone());
        }

        Self {
            ids,
            nodes,
            edges,
            out_adj,
            in_adj,
            dangling_edges,
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub(super) fn in_degree(&self, id: &str) -> usize {
        self.in_adj.get(id).map(|list| list.len()).unwrap_or(0)
    }

    pub(super) fn successors(&self, id: &str) -> &[String] {
        self.out_adj.get(id).map(|list| list.as_slice()).unwrap_or(&[])
    }
}
