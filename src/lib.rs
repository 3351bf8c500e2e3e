//! A generic Huffman coding engine.
//!
//! Builds an optimal prefix-free binary code for any ordered symbol type,
//! packs a symbol sequence into a bit stream and recovers it bit-exactly.
//! Symbols are not limited to bytes; anything `Ord + Clone` works, from pixel
//! intensities to RGB triples.
//!
//! The pipeline is a straight line: tally frequencies, build the tree, derive
//! the code table, encode. Decoding walks the tree, so the stream must travel
//! together with the frequency table (or the tree) and the original symbol
//! count.
//!
//! ```
//! use huffcode::{CodeTable, FrequencyTable, HuffmanTree};
//!
//! let data = b"abracadabra".to_vec();
//! let freq = FrequencyTable::count(&data);
//! let tree = HuffmanTree::build(&freq)?;
//! let codes = CodeTable::from_tree(&tree);
//!
//! let stream = huffcode::encode(&data, &codes)?;
//! let decoded = huffcode::decode(&stream, &tree, data.len())?;
//! assert_eq!(decoded, data);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![no_std]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod code_table;
pub mod decoding;
pub mod encoding;
pub mod frequency;
pub mod stream;
pub mod tree;

#[cfg(feature = "std")]
pub mod stats;

#[cfg(test)]
mod tests;

/// Drive the whole pipeline over `data` and assert byte-for-byte recovery.
///
/// Shared by the unit tests and the fuzz targets.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let freq = FrequencyTable::count(data);
    let tree = match HuffmanTree::build(&freq) {
        Ok(tree) => tree,
        // only the empty input has no tree, and nothing to check
        Err(TreeBuildError::EmptyInput) => {
            assert!(data.is_empty());
            return;
        }
    };
    let codes = CodeTable::from_tree(&tree);
    let stream = encoding::encode(data, &codes).unwrap();
    let decoded = decoding::decode(&stream, &tree, data.len()).unwrap();
    assert_eq!(decoded, data);
}

pub use code_table::{CodeTable, Codeword};
pub use decoding::{decode, DecodeError};
pub use encoding::{encode, EncodeError};
pub use frequency::FrequencyTable;
pub use stream::EncodedStream;
pub use tree::{ConstructionStep, HuffmanTree, Node, NodeId, TreeBuildError};

#[cfg(feature = "std")]
pub use stats::{stats, CodingStats};
