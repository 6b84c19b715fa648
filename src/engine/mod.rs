pub mod config;
pub mod frequency;
pub mod huffman;
pub mod tree_codec;
pub mod progress;
pub mod compressor;
pub mod decompressor;

pub use compressor::*;
pub use decompressor::*;
pub use config::EngineConfig;
pub use progress::{NoProgress, Progress};
