#![no_main]

use libfuzzer_sys::fuzz_target;
use spellwav_backend_audio::wav::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic; anything it accepts must survive a re-encode.
    if let Ok(clip) = decode(data) {
        if let Ok(bytes) = encode(&clip) {
            assert_eq!(decode(&bytes).as_ref(), Ok(&clip));
        }
    }
});
