pub mod config;
pub mod dump;
pub mod ir;
pub mod normalize;
pub mod parser;

pub use config::{LayoutConfig, load_config};
pub use normalize::{Diagnostics, EdgeLayout, Layout, NodeLayout, Normalized, normalize_graph};
pub use parser::parse_raw_graph;
