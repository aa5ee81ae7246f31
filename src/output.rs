//! CLI output formatting.
//!
//! The generated document itself is printed verbatim; everything around it
//! (profile summary, advisories, the profile matrix, written files) goes
//! through this module so it reads the same across commands.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Profile
//!     CPU: 8 Threads (Mid-range)
//!     GPU: Mid-Range (RTX 3060 / RX 6600 tier)
//!     Target: Balanced (Best of both worlds)
//!
//! Advisories
//! 001 📦 Set your RAM to -Xmx6G in your launcher's JVM arguments.
//! 002 🔧 Set your vanilla render distance to 12 chunks — DH handles the rest.
//! ```
//!
//! ## JSON
//!
//! `generate --json` prints the profile, the resolved settings and the
//! generator output in one object:
//!
//! ```text
//! {
//!   "profile": { "cpu_threads": 8, "gpu_level": "mid", "target": "balanced" },
//!   "values": { "lod_chunk_render_distance": 384, ..., "ram_suggestion": "6G" },
//!   "document": "# ═══...",
//!   "advisories": [ ... ]
//! }
//! ```
//!
//! ## Matrix
//!
//! ```text
//! GPU    TARGET       CPU  RADIUS  THREADS  LOAD    UPLOAD  HEAP
//! entry  performance    4     128        1  LOW        30%  4G
//! ...
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::engine::{ConfigValues, GeneratedConfig};
use crate::profile::HardwareProfile;
use serde::Serialize;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Profile summary with the human labels of each selection.
pub fn format_profile(profile: &HardwareProfile) -> Vec<String> {
    let cpu = profile.cpu_threads.choice();
    let gpu = profile.gpu_level.choice();
    let target = profile.target.choice();
    vec![
        "Profile".to_string(),
        format!("{}CPU: {} ({})", indent(1), cpu.label, cpu.description),
        format!("{}GPU: {} ({})", indent(1), gpu.label, gpu.description),
        format!("{}Target: {} ({})", indent(1), target.label, target.description),
    ]
}

/// Numbered advisory list. Empty input yields no lines at all.
pub fn format_advisories(advisories: &[String]) -> Vec<String> {
    if advisories.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Advisories".to_string()];
    lines.extend(
        advisories
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{} {}", format_index(i + 1), a)),
    );
    lines
}

/// Derived values as an indented key list.
pub fn format_values(values: &ConfigValues) -> Vec<String> {
    let rows = [
        ("Render distance", format!("{} chunks", values.lod_chunk_render_distance)),
        ("Vertical quality", values.vertical_quality.to_string()),
        ("Horizontal scale", values.horizontal_scale.to_string()),
        ("LOD quality", values.lod_quality.to_string()),
        ("Dropoff", values.dropoff.to_string()),
        ("Cave rendering", values.enable_cave_rendering.to_string()),
        ("Builder threads", values.number_of_threads.to_string()),
        ("CPU load", values.cpu_load.to_string()),
        ("GPU upload", format!("{}%", values.gpu_upload_percentage)),
        ("Heap", format!("-Xmx{}", values.ram_suggestion)),
        (
            "Vanilla render distance",
            format!("{} chunks", values.vanilla_render_distance),
        ),
    ];
    let mut lines = vec!["Settings".to_string()];
    lines.extend(
        rows.iter()
            .map(|(k, v)| format!("{}{}: {}", indent(1), k, v)),
    );
    lines
}

/// Everything `generate --json` reports for one profile.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub profile: &'a HardwareProfile,
    pub values: ConfigValues,
    #[serde(flatten)]
    pub generated: &'a GeneratedConfig,
}

/// Pretty-printed [`JsonReport`].
pub fn format_json(
    profile: &HardwareProfile,
    generated: &GeneratedConfig,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        profile,
        values: ConfigValues::resolve(profile),
        generated,
    })
}

/// One row per profile, as a fixed-width table.
pub fn format_matrix<'a>(
    rows: impl IntoIterator<Item = (&'a HardwareProfile, &'a ConfigValues)>,
) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<6} {:<12} {:>3}  {:>6}  {:>7}  {:<6}  {:>6}  {}",
        "GPU", "TARGET", "CPU", "RADIUS", "THREADS", "LOAD", "UPLOAD", "HEAP"
    )];
    for (p, v) in rows {
        lines.push(format!(
            "{:<6} {:<12} {:>3}  {:>6}  {:>7}  {:<6}  {:>6}  {}",
            p.gpu_level.as_str(),
            p.target.as_str(),
            p.cpu_threads.count(),
            v.lod_chunk_render_distance,
            v.number_of_threads,
            v.cpu_load.as_str(),
            format!("{}%", v.gpu_upload_percentage),
            v.ram_suggestion,
        ));
    }
    lines
}

/// `Wrote <path>` for each file written.
pub fn format_written(paths: &[impl AsRef<Path>]) -> Vec<String> {
    paths
        .iter()
        .map(|p| format!("Wrote {}", p.as_ref().display()))
        .collect()
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

/// Print the generator result: document, blank line, summary, advisories.
pub fn print_generated(profile: &HardwareProfile, generated: &GeneratedConfig) {
    println!("{}", generated.document);
    println!();
    print_lines(format_profile(profile));
    let advisories = format_advisories(&generated.advisories);
    if !advisories.is_empty() {
        println!();
        print_lines(advisories);
    }
}

pub fn print_values(values: &ConfigValues) {
    print_lines(format_values(values));
}

pub fn print_matrix<'a>(rows: impl IntoIterator<Item = (&'a HardwareProfile, &'a ConfigValues)>) {
    print_lines(format_matrix(rows));
}

pub fn print_written(paths: &[impl AsRef<Path>]) {
    print_lines(format_written(paths));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_config;
    use crate::test_helpers::*;
    use std::path::PathBuf;

    #[test]
    fn profile_summary_uses_choice_labels() {
        let lines = format_profile(&profile(16, "ultra", "visuals"));
        assert_eq!(
            lines,
            vec![
                "Profile",
                "    CPU: 16+ Threads (Enthusiast)",
                "    GPU: Ultra (RTX 4090 / RX 7900 XTX tier)",
                "    Target: Ultra Visuals (Maximum eye candy)",
            ]
        );
    }

    #[test]
    fn advisories_are_numbered_in_order() {
        let out = generate_config(&profile(4, "entry", "performance"));
        let lines = format_advisories(&out.advisories);
        assert_eq!(lines[0], "Advisories");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("001 💡 Consider installing Sodium"));
        assert!(lines[5].starts_with("005 🔧"));
    }

    #[test]
    fn empty_advisories_print_nothing() {
        assert!(format_advisories(&[]).is_empty());
    }

    #[test]
    fn values_list_every_setting() {
        let v = ConfigValues::resolve(&profile(8, "mid", "balanced"));
        let lines = format_values(&v);
        assert_eq!(lines.len(), 12);
        assert!(lines.contains(&"    Render distance: 384 chunks".to_string()));
        assert!(lines.contains(&"    Heap: -Xmx6G".to_string()));
        assert!(lines.contains(&"    GPU upload: 50%".to_string()));
    }

    #[test]
    fn matrix_has_header_plus_one_row_per_profile() {
        let profiles: Vec<_> = HardwareProfile::all().collect();
        let values: Vec<_> = profiles.iter().map(ConfigValues::resolve).collect();
        let lines = format_matrix(profiles.iter().zip(values.iter()));
        assert_eq!(lines.len(), 49);
        assert!(lines[0].starts_with("GPU"));
        assert!(lines[1].starts_with("entry  performance    4     128"));
    }

    #[test]
    fn json_report_carries_values_and_output() {
        let p = profile(8, "mid", "balanced");
        let generated = generate_config(&p);
        let json: serde_json::Value =
            serde_json::from_str(&format_json(&p, &generated).unwrap()).unwrap();

        assert_eq!(json["profile"]["gpu_level"], "mid");
        assert_eq!(json["values"]["lod_chunk_render_distance"], 384);
        assert_eq!(json["values"]["vertical_quality"], "HIGH");
        assert_eq!(json["values"]["cpu_load"], "MEDIUM");
        assert_eq!(json["values"]["ram_suggestion"], "6G");
        assert_eq!(json["values"]["enable_cave_rendering"], true);
        assert_eq!(json["document"], generated.document.as_str());
        assert_eq!(json["advisories"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn written_lines() {
        let paths = vec![PathBuf::from("dist/index.html")];
        assert_eq!(format_written(&paths), vec!["Wrote dist/index.html"]);
    }
}
