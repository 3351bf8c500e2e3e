use crate::stream::EncodedStream;

/// Forward single-bit reader over an encoded stream.
pub(crate) struct BitReader<'s> {
    /// index counts bits already read
    idx: usize,
    source: &'s [u8],
    bit_len: usize,
}

impl<'s> BitReader<'s> {
    pub fn new(stream: &'s EncodedStream) -> BitReader<'s> {
        BitReader {
            idx: 0,
            source: stream.as_bytes(),
            bit_len: stream.len(),
        }
    }

    pub fn bits_left(&self) -> usize {
        self.bit_len - self.idx
    }

    /// Read the next bit. Callers must check `bits_left` first.
    pub fn read_bit(&mut self) -> bool {
        debug_assert!(self.idx < self.bit_len);
        let bit = self.source[self.idx / 8] >> (7 - self.idx % 8) & 1 == 1;
        self.idx += 1;
        bit
    }
}

#[cfg(test)]
mod tests {
    use super::BitReader;
    use crate::stream::EncodedStream;
    use alloc::vec;

    #[test]
    fn reads_bits_msb_first() {
        let stream = EncodedStream::from_parts(vec![0b1011_0000, 0b0100_0000], 10);
        let mut reader = BitReader::new(&stream);
        let mut bits = vec![];
        while reader.bits_left() > 0 {
            bits.push(reader.read_bit());
        }
        assert_eq!(
            bits,
            [true, false, true, true, false, false, false, false, false, true]
        );
    }

    #[test]
    fn respects_bit_length_over_byte_length() {
        let stream = EncodedStream::from_parts(vec![0xFF], 3);
        let mut reader = BitReader::new(&stream);
        assert_eq!(reader.bits_left(), 3);
        reader.read_bit();
        reader.read_bit();
        reader.read_bit();
        assert_eq!(reader.bits_left(), 0);
    }
}
