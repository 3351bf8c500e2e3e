use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{decode, encode, round_trip, CodeTable, FrequencyTable, HuffmanTree};

#[test]
fn empty_sequence() {
    round_trip(&[]);
}

#[test]
fn single_occurrence() {
    round_trip(&[42]);
}

#[test]
fn single_symbol_repeated() {
    round_trip(&[5, 5, 5]);
}

#[test]
fn two_symbols() {
    round_trip(&[0, 1, 0, 0, 1]);
}

#[test]
fn text() {
    round_trip(b"abracadabra");
    round_trip(b"the quick brown fox jumps over the lazy dog");
}

#[test]
fn all_byte_values() {
    let data: Vec<u8> = (0..=255).collect();
    round_trip(&data);
}

#[test]
fn random_streams() {
    let mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
    for len in [1usize, 2, 3, 63, 64, 65, 1000, 4096] {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        round_trip(&data);
    }
}

#[test]
fn random_small_alphabets() {
    // few distinct symbols produce short codes and long runs of equal bits
    let mut rng = SmallRng::seed_from_u64(42);
    for alphabet in [1u8, 2, 3, 5] {
        let data: Vec<u8> = (0..2000).map(|_| rng.gen_range(0..alphabet)).collect();
        round_trip(&data);
    }
}

#[test]
fn rgb_triples_as_symbols() {
    // symbols need not be bytes; a flattened color channel triple works too
    let pixels = [
        (255u8, 0u8, 0u8),
        (0, 255, 0),
        (255, 0, 0),
        (0, 0, 255),
        (255, 0, 0),
        (0, 255, 0),
    ];
    let freq = FrequencyTable::count(&pixels);
    let tree = HuffmanTree::build(&freq).unwrap();
    let codes = CodeTable::from_tree(&tree);
    let stream = encode(&pixels, &codes).unwrap();
    let decoded = decode(&stream, &tree, pixels.len()).unwrap();
    assert_eq!(decoded, pixels);
}

#[test]
fn decoding_with_a_rebuilt_tree() {
    // persisting the frequency table is enough: rebuilding the tree from it
    // reproduces the exact shape, so a stored stream decodes bit-exactly
    let data = b"mississippi river";
    let freq = FrequencyTable::count(data.as_slice());
    let tree = HuffmanTree::build(&freq).unwrap();
    let codes = CodeTable::from_tree(&tree);
    let stream = encode(data.as_slice(), &codes).unwrap();

    let persisted: Vec<(u8, u64)> = freq.iter().map(|(s, c)| (*s, c)).collect();
    let rebuilt_freq: FrequencyTable<u8> = persisted.into_iter().collect();
    let rebuilt_tree = HuffmanTree::build(&rebuilt_freq).unwrap();
    assert_eq!(tree, rebuilt_tree);

    let decoded = decode(&stream, &rebuilt_tree, data.len()).unwrap();
    assert_eq!(decoded, data);
}
