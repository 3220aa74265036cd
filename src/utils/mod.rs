//! Utilities shared by the command-line tool: dataset loading and result
//! rendering.

pub mod dataset;
pub mod render;

pub use dataset::{load_trie, parse_pairs};
pub use render::Renderer;
