#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);

    // Parsing arbitrary input must never panic; errors are fine.
    let _ = bimcheck::parse_model(&s);
});
