#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate huffcode;

fuzz_target!(|data: &[u8]| {
    huffcode::round_trip(data);
});
