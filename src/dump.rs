use crate::normalize::Layout;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serialize a layout to the documented output contract
/// (`{ nodes: [{id, position, data}], edges: [{id, source, target}] }`).
pub fn graph_json(layout: &Layout) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

pub fn write_graph_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, layout)?;
    Ok(())
}
