//! # huffpack
//!
//! Static Huffman compression of byte buffers into a self-describing container.
//!
//! ```
//! let container = huffpack::compress(b"Hello, World! ")?;
//! assert_eq!(huffpack::decompress(&container)?, b"Hello, World! ");
//! # Ok::<(), huffpack::CodecError>(())
//! ```
//!
//! Container layout (integers big-endian, bits MSB-first):
//!
//! | field | size |
//! |---|---|
//! | tree bit length | 4 bytes |
//! | serialized tree | ceil(tree bits / 8) bytes |
//! | payload padding | 1 byte |
//! | payload | rest |

pub mod config;
pub mod engine;
pub mod format;
pub mod report;
pub mod utils;
pub mod worker;

pub use engine::{
    compress, compress_with_progress, decompress, decompress_with_progress, NoProgress, Progress,
};
pub use format::error::CodecError;
