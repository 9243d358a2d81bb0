#![no_main]

use libfuzzer_sys::fuzz_target;
use spellwav_spec::{validate_options, RenderOptions};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(options) = RenderOptions::from_json(s) {
            let _ = validate_options(&options);
        }
    }
});
