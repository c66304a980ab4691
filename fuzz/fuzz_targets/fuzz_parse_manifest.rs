#![no_main]
use libfuzzer_sys::fuzz_target;
use package_json::summary::{Lookup, SummaryOptions, summarize};
use std::path::PathBuf;

fuzz_target!(|data: &[u8]| {
    // Never panic: decoding is Ok or a clean Err, and whatever decodes must render.
    if let Ok(manifest) = package_json::manifest::parse_manifest(data) {
        let lookup = Lookup::Loaded {
            dir: PathBuf::from("/fuzz"),
            manifest,
        };
        let _ = summarize(&lookup, SummaryOptions { extended: true });
    }
});
