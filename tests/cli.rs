//! End-to-end checks against the built `dh-guide` binary.
//!
//! Each test runs in its own temp directory so a stray `dh-guide.toml` in the
//! working tree cannot leak into the results.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn dh_guide(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dh-guide"))
        .arg("--config-dir")
        .arg(dir)
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn generate_prints_document_and_advisories() {
    let tmp = TempDir::new().unwrap();
    let out = dh_guide(
        tmp.path(),
        &["generate", "--cpu", "8", "--gpu", "mid", "--target", "balanced"],
    );
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("lodChunkRenderDistanceRadius = 384"));
    assert!(text.contains("Advisories"));
    assert!(text.contains("001 📦 Set your RAM to -Xmx6G"));
}

#[test]
fn generate_uses_config_file_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("dh-guide.toml"),
        "[profile]\ncpu_threads = 16\ngpu_level = \"ultra\"\ntarget = \"visuals\"\n",
    )
    .unwrap();
    let out = dh_guide(tmp.path(), &["generate"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("# Profile: ULTRA GPU | 16 CPU Threads | VISUALS"));
}

#[test]
fn flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("dh-guide.toml"),
        "[profile]\ngpu_level = \"ultra\"\n",
    )
    .unwrap();
    let out = dh_guide(tmp.path(), &["generate", "--gpu", "entry"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("# Profile: ENTRY GPU | 8 CPU Threads | BALANCED"));
}

#[test]
fn generate_json() {
    let tmp = TempDir::new().unwrap();
    let out = dh_guide(
        tmp.path(),
        &["generate", "--json", "--cpu", "4", "--gpu", "entry", "--target", "performance"],
    );
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["advisories"].as_array().unwrap().len(), 5);
    assert_eq!(json["values"]["lod_chunk_render_distance"], 128);
    assert_eq!(json["values"]["ram_suggestion"], "4G");
    assert_eq!(json["profile"]["cpu_threads"], 4);
}

#[test]
fn generate_writes_config_file() {
    let tmp = TempDir::new().unwrap();
    let dest = tmp.path().join("out");
    let out = dh_guide(
        tmp.path(),
        &["generate", "--out", dest.to_str().unwrap()],
    );
    assert!(out.status.success());
    let written = fs::read_to_string(dest.join("distant_horizons.toml")).unwrap();
    assert!(written.contains("[performance]"));
    assert!(stdout(&out).contains("Wrote "));
}

#[test]
fn invalid_profile_fails_without_document() {
    let tmp = TempDir::new().unwrap();
    let out = dh_guide(tmp.path(), &["generate", "--cpu", "6"]);
    assert!(!out.status.success());
    assert!(!stdout(&out).contains("[general]"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("InvalidProfile"));
}

#[test]
fn out_of_range_cpu_flags_fail_as_invalid_profile() {
    let tmp = TempDir::new().unwrap();
    for flag in ["--cpu=-4", "--cpu=99999999999"] {
        let out = dh_guide(tmp.path(), &["generate", flag]);
        assert!(!out.status.success(), "{flag}");
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("InvalidProfile"), "{flag}: {stderr}");
        assert!(stderr.contains("cpu_threads"), "{flag}: {stderr}");
    }
}

#[test]
fn matrix_lists_every_profile() {
    let tmp = TempDir::new().unwrap();
    let out = dh_guide(tmp.path(), &["matrix"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out).lines().count(), 49);
}

#[test]
fn page_writes_html_and_config() {
    let tmp = TempDir::new().unwrap();
    let dist = tmp.path().join("dist");
    let out = dh_guide(
        tmp.path(),
        &["page", "--target", "visuals", "--output", dist.to_str().unwrap()],
    );
    assert!(out.status.success());
    let html = fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("Max Beauty"));
    assert!(dist.join("distant_horizons.toml").exists());
}

#[test]
fn gen_config_output_is_loadable() {
    let tmp = TempDir::new().unwrap();
    let out = dh_guide(tmp.path(), &["gen-config"]);
    assert!(out.status.success());
    fs::write(tmp.path().join("dh-guide.toml"), &out.stdout).unwrap();
    let out = dh_guide(tmp.path(), &["generate"]);
    assert!(out.status.success());
}
