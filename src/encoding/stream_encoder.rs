use crate::code_table::CodeTable;
use crate::encoding::bit_writer::BitWriter;
use crate::stream::EncodedStream;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("symbol at input position {index} has no codeword; the code table was built from a different input")]
    UnknownSymbol { index: usize },
}

/// Concatenate the codeword of every symbol in `symbols`, in input order.
///
/// No separators, no framing: the stream's bit length is the sum of the
/// individual codeword lengths, and decoding it requires the tree and the
/// original symbol count. Fails with [`EncodeError::UnknownSymbol`] on the
/// first symbol missing from `codes`.
pub fn encode<T: Ord + Clone>(
    symbols: &[T],
    codes: &CodeTable<T>,
) -> Result<EncodedStream, EncodeError> {
    let mut writer = BitWriter::new();
    for (index, symbol) in symbols.iter().enumerate() {
        let word = codes
            .get(symbol)
            .ok_or(EncodeError::UnknownSymbol { index })?;
        writer.write_bits(word.as_bytes(), word.len());
    }
    Ok(writer.finish())
}
