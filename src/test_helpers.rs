//! Shared test utilities.
//!
//! Shorthand for building profiles and for pulling values back out of a
//! generated document without a full TOML parse.
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let doc = generate_config(&profile(8, "mid", "balanced")).document;
//! assert_eq!(key_value(&doc, "cpuLoad"), Some("\"MEDIUM\""));
//! ```

use crate::profile::HardwareProfile;

/// Every key the document must carry, in document order.
pub const DOCUMENT_KEYS: [&str; 9] = [
    "lodChunkRenderDistanceRadius",
    "verticalQuality",
    "horizontalScale",
    "quality",
    "dropoffQuality",
    "enableCaveRendering",
    "numberOfLodBuilderThreads",
    "cpuLoad",
    "gpuUploadPercentage",
];

/// Build a profile from literals, panicking on invalid input.
pub fn profile(cpu_threads: u32, gpu_level: &str, target: &str) -> HardwareProfile {
    HardwareProfile::new(cpu_threads, gpu_level, target)
        .unwrap_or_else(|e| panic!("bad test profile: {e}"))
}

/// Raw right-hand side of `key = value` in a document, if the key is present.
pub fn key_value<'a>(document: &'a str, key: &str) -> Option<&'a str> {
    document.lines().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (!line.trim_start().starts_with('#') && k.trim() == key).then(|| v.trim())
    })
}
