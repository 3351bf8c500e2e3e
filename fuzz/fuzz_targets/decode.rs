#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate huffcode;

use huffcode::{decode, EncodedStream, FrequencyTable, HuffmanTree};

// Arbitrary bit streams against a fixed tree must either decode or fail with
// a proper error, never panic.
fuzz_target!(|data: &[u8]| {
    let freq = FrequencyTable::count(b"abracadabra".as_slice());
    let tree = HuffmanTree::build(&freq).unwrap();

    for spare_bits in 0..8 {
        if data.len() * 8 < spare_bits {
            break;
        }
        let stream = EncodedStream::from_parts(data.to_vec(), data.len() * 8 - spare_bits);
        let _ = decode(&stream, &tree, data.len());
    }
});
