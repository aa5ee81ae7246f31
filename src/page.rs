//! Static calculator result page.
//!
//! Renders the generator output as a single self-contained HTML page: the
//! three selections, a preview card for the chosen target, the highlighted
//! config document, the advisories, and a download link to the config file
//! written next to it.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html               # Calculator result page
//! └── distant_horizons.toml    # The generated config (download target)
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! every interpolated value is escaped.

use crate::engine::GeneratedConfig;
use crate::profile::{Choice, CpuThreads, GpuLevel, HardwareProfile, Target};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

// ============================================================================
// Document highlighting
// ============================================================================

/// How a single line of the config document is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Comment(&'a str),
    Section(&'a str),
    /// Split at the first `=`; both halves keep their surrounding spaces.
    KeyValue { key: &'a str, value: &'a str },
    Plain(&'a str),
}

/// Classify one document line for highlighting.
pub fn classify_line(line: &str) -> Line<'_> {
    if line.trim().starts_with('#') {
        return Line::Comment(line);
    }
    if let Some((key, value)) = line.split_once('=') {
        return Line::KeyValue { key, value };
    }
    if line.starts_with('[') {
        return Line::Section(line);
    }
    Line::Plain(line)
}

fn render_line(line: Line<'_>) -> Markup {
    html! {
        @match line {
            Line::Comment(text) => {
                div.toml-comment { (text) }
            },
            Line::Section(text) => {
                div.toml-section { (text) }
            },
            Line::KeyValue { key, value } => {
                div {
                    span.toml-key { (key) }
                    span.toml-eq { "=" }
                    span.toml-value { (value) }
                }
            },
            // Keep blank lines visible inside the block
            Line::Plain(text) => {
                div.toml-plain {
                    @if text.is_empty() { "\u{a0}" } @else { (text) }
                }
            },
        }
    }
}

// ============================================================================
// Preview card
// ============================================================================

/// Rough at-a-glance summary of what a target looks like in game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub icon: &'static str,
    pub label: &'static str,
    pub chunks: &'static str,
    pub detail: &'static str,
}

pub const fn preview(target: Target) -> Preview {
    match target {
        Target::Performance => Preview {
            icon: "⚡",
            label: "FPS +50%",
            chunks: "128",
            detail: "Low",
        },
        Target::Balanced => Preview {
            icon: "⚖️",
            label: "Best Balance",
            chunks: "256",
            detail: "Medium",
        },
        Target::Visuals => Preview {
            icon: "✨",
            label: "Max Beauty",
            chunks: "512+",
            detail: "Ultra",
        },
    }
}

fn preview_card(target: Target) -> Markup {
    let p = preview(target);
    html! {
        div class={ "preview preview-" (target.as_str()) } {
            div.preview-summary {
                div.preview-icon { (p.icon) }
                div.preview-label { (p.label) }
                div.preview-detail { "~" (p.chunks) " chunks • LOD Quality: " (p.detail) }
            }
            div.preview-view {
                div.preview-caption { "Estimated View" }
                div.preview-chunks { (p.chunks) }
                div.preview-unit { "chunks" }
            }
        }
    }
}

// ============================================================================
// Page
// ============================================================================

fn choice_group<T: PartialEq + Copy>(
    title: &str,
    options: &[T],
    selected: T,
    choice: impl Fn(T) -> Choice,
) -> Markup {
    html! {
        section.choice-group {
            h3 { (title) }
            ul.choices {
                @for &opt in options {
                    @let c = choice(opt);
                    li class=[(opt == selected).then_some("selected")] {
                        div.choice-label { (c.label) }
                        div.choice-desc { (c.description) }
                    }
                }
            }
        }
    }
}

/// Render the full calculator result page.
pub fn render_calculator_page(
    profile: &HardwareProfile,
    generated: &GeneratedConfig,
    filename: &str,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Distant Horizons Best Settings Calculator" }
                meta name="description" content="Optimized Distant Horizons settings for your hardware: a ready-to-use distant_horizons.toml.";
                style { (PreEscaped(CSS)) }
            }
            body {
                main.calculator {
                    header.calculator-header {
                        h1 { "Distant Horizons Best Settings Generator" }
                    }
                    div.calculator-grid {
                        div.controls {
                            (choice_group("CPU Threads", &CpuThreads::ALL, profile.cpu_threads, CpuThreads::choice))
                            (choice_group("GPU Level", &GpuLevel::ALL, profile.gpu_level, GpuLevel::choice))
                            (choice_group("Optimization Target", &Target::ALL, profile.target, Target::choice))
                            (preview_card(profile.target))
                        }
                        div.result {
                            div.result-header {
                                h3 { "Generated Config" }
                                a.download href=(filename) download=(filename) { "Download .toml" }
                            }
                            pre.toml-block {
                                @for line in generated.document.lines() {
                                    (render_line(classify_line(line)))
                                }
                            }
                            @if !generated.advisories.is_empty() {
                                section.suggestions {
                                    h4 { "💡 Suggestions" }
                                    ul {
                                        @for advisory in &generated.advisories {
                                            li { (advisory) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Write `index.html` and the config file into `output_dir`.
///
/// Returns the written paths, page first.
pub fn write_calculator_page(
    output_dir: &Path,
    profile: &HardwareProfile,
    generated: &GeneratedConfig,
    filename: &str,
) -> Result<Vec<PathBuf>, PageError> {
    fs::create_dir_all(output_dir)?;

    let page_path = output_dir.join("index.html");
    let page = render_calculator_page(profile, generated, filename);
    fs::write(&page_path, page.into_string())?;

    let config_path = output_dir.join(filename);
    fs::write(&config_path, &generated.document)?;

    Ok(vec![page_path, config_path])
}
