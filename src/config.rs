use serde::{Deserialize, Serialize};
use std::path::Path;

/// Geometry of the rendering surface the normalized graph targets.
///
/// `layer_y` fixes one vertical slot per bucket; its length is the bucket
/// cap for layer quantization. The x range brackets horizontal spreading
/// within a bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub layer_y: Vec<f32>,
    pub min_x: f32,
    pub max_x: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            layer_y: vec![40.0, 140.0, 260.0, 380.0, 500.0],
            min_x: 40.0,
            max_x: 760.0,
        }
    }
}

impl LayoutConfig {
    /// Maximum number of layer buckets, one per vertical slot.
    pub fn max_buckets(&self) -> usize {
        self.layer_y.len().max(1)
    }

    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Vertical slot for a bucket; buckets past the last slot clamp onto
    /// it. An empty `layer_y` (the fields are public) yields 0.0 rather
    /// than panicking.
    pub fn slot_y(&self, bucket: usize) -> f32 {
        let last = self.layer_y.len().saturating_sub(1);
        self.layer_y.get(bucket.min(last)).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layer_y: Option<Vec<f32>>,
    min_x: Option<f32>,
    max_x: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let mut config = LayoutConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(layer_y) = parsed.layer_y
        && !layer_y.is_empty()
    {
        config.layer_y = layer_y;
    }
    if let Some(min_x) = parsed.min_x {
        config.min_x = min_x;
    }
    if let Some(max_x) = parsed.max_x {
        config.max_x = max_x;
    }
    Ok(config)
}
