use crate::ir::RawGraph;
use anyhow::Result;

/// Parse a candidate graph from generator output.
///
/// Tries strict JSON first, then falls back to JSON5: model output
/// frequently arrives with trailing commas or unquoted keys. Absent
/// `nodes`/`edges` deserialize as empty sequences rather than failing;
/// schema enforcement beyond shape is the caller's concern.
pub fn parse_raw_graph(input: &str) -> Result<RawGraph> {
    if let Ok(graph) = serde_json::from_str::<RawGraph>(input) {
        return Ok(graph);
    }
    let graph = json5::from_str::<RawGraph>(input)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strict_json() {
        let input = r#"{
            "nodes": [
                {"id": "a", "position": {"x": 1, "y": 2}, "data": {"label": "Start"}},
                {"id": "b", "data": {"label": "End"}}
            ],
            "edges": [{"id": "e1", "source": "a", "target": "b"}]
        }"#;
        let graph = parse_raw_graph(input).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.nodes[0].data.label, "Start");
        assert_eq!(graph.nodes[1].position.x, 0.0);
    }

    #[test]
    fn parse_json5_fallback() {
        let input = "{ nodes: [{id: 'a', data: {label: 'Solo'}},], edges: [], }";
        let graph = parse_raw_graph(input).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].data.label, "Solo");
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let graph = parse_raw_graph("{}").unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());

        let graph = parse_raw_graph(r#"{"nodes": [{"id": "a"}]}"#).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].data.label, "");
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse_raw_graph("not a graph").is_err());
    }
}
