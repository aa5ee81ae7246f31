//! # dh-guide
//!
//! Settings generator for the [Distant Horizons](https://modrinth.com/mod/distanthorizons)
//! Minecraft mod. Pick a CPU thread tier, a GPU tier and an optimization
//! target, and get back a ready-to-use `distant_horizons.toml` plus a short
//! list of advice.
//!
//! # Architecture: Lookup, Merge, Render
//!
//! ```text
//! 1. Validate   raw selections        →  HardwareProfile   (closed enums)
//! 2. Lookup     GPU table, thread table →  ConfigValues      (merged, disjoint fields)
//! 3. Render     ConfigValues          →  document + advisories
//! ```
//!
//! Generation is a pure function of the profile. Everything with side effects
//! (reading `dh-guide.toml`, printing, writing the calculator page) lives
//! outside [`engine`] and only consumes its output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`profile`] | `CpuThreads`, `GpuLevel`, `Target`, `HardwareProfile`; validation of raw input; choice labels |
//! | [`tables`] | The two static lookup tables and the tier enums they hold |
//! | [`engine`] | `generate_config`: lookup, merge, document rendering, advisories |
//! | [`config`] | `dh-guide.toml` loading, merging, validation, and the commented stock file |
//! | [`output`] | CLI output formatting |
//! | [`page`] | Static calculator result page rendered with Maud |
//!
//! # Design Decisions
//!
//! ## Closed Enums, Exhaustive Tables
//!
//! Each profile field is a Rust enum and each table is a `match` over a pair
//! of them. Adding a GPU tier without filling in its row is a compile error,
//! not a missing-key surprise at runtime. Untyped input is validated once at
//! the edge and rejected outright when out of range; it is never rounded to
//! the nearest tier, since that would hand the user a config for hardware
//! they did not pick.
//!
//! ## Fixed-Shape Document
//!
//! The document always carries every section, key and comment, whatever the
//! values. Users diff it against their existing file, and a key that only
//! sometimes appears makes that diff misleading.

pub mod config;
pub mod engine;
pub mod output;
pub mod page;
pub mod profile;
pub mod tables;

pub use engine::{ConfigValues, GeneratedConfig, generate_config, generate_config_raw};
pub use profile::{CpuThreads, GpuLevel, HardwareProfile, ProfileError, RawProfile, Target};

#[cfg(test)]
pub(crate) mod test_helpers;
