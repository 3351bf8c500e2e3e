use alloc::vec::Vec;

use crate::decoding::bit_reader::BitReader;
use crate::stream::EncodedStream;
use crate::tree::{HuffmanTree, Node};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("decoded {got} symbols but expected {expected}; stream, tree and count do not belong together")]
    LengthMismatch { expected: usize, got: usize },
    #[error("stream ended in the middle of a codeword after {decoded} complete symbols")]
    TruncatedStream { decoded: usize },
}

/// Walk `tree` over every bit of `stream` and rebuild the symbol sequence.
///
/// The cursor starts at the root, descends left on 0 and right on 1, emits a
/// symbol whenever it reaches a leaf and resets to the root. A tree whose
/// root is itself a leaf is the single-symbol degenerate case: there is
/// nothing to descend, every bit stands for the one symbol.
///
/// The stream must end exactly on a codeword boundary
/// ([`DecodeError::TruncatedStream`]) and yield exactly `expected_count`
/// symbols ([`DecodeError::LengthMismatch`]). Both checks are what makes
/// trailing padding bits detectable, since the stream itself carries no
/// framing.
pub fn decode<T: Ord + Clone>(
    stream: &EncodedStream,
    tree: &HuffmanTree<T>,
    expected_count: usize,
) -> Result<Vec<T>, DecodeError> {
    // every codeword is at least one bit, so the stream length bounds the
    // output regardless of what the caller claims to expect
    let mut out = Vec::with_capacity(expected_count.min(stream.len()));
    let mut reader = BitReader::new(stream);
    let mut cursor = tree.root();

    while reader.bits_left() > 0 {
        let bit = reader.read_bit();
        if let Node::Internal { left, right, .. } = tree.node(cursor) {
            cursor = if bit { *right } else { *left };
        }
        if let Node::Leaf { symbol, .. } = tree.node(cursor) {
            out.push(symbol.clone());
            cursor = tree.root();
        }
    }

    if cursor != tree.root() {
        return Err(DecodeError::TruncatedStream {
            decoded: out.len(),
        });
    }
    if out.len() != expected_count {
        return Err(DecodeError::LengthMismatch {
            expected: expected_count,
            got: out.len(),
        });
    }
    Ok(out)
}
