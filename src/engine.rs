//! The config generator.
//!
//! [`generate_config`] turns a [`HardwareProfile`] into a ready-to-use
//! `distant_horizons.toml` document plus a list of advisories:
//!
//! ```text
//! profile ──┬─ gpu_profile(gpu, target) ────┐
//!           └─ thread_profile(cpu, target) ─┴─ ConfigValues ─┬─ render_document ─→ document
//!                                                            └─ advisories ──────→ advisories
//! ```
//!
//! Generation is a pure function of the profile: no clock, no environment,
//! no I/O. The same profile always yields byte-identical output, so callers
//! are free to cache results or call from any thread.

use crate::profile::{CpuThreads, GpuLevel, HardwareProfile, ProfileError, RawProfile, Target};
use crate::tables::{self, CpuLoad, Dropoff, HeapSize, HorizontalScale, QualityTier};
use serde::Serialize;

/// Render distance (in chunks) at or above which first-time generation is slow.
pub const LONG_GENERATION_RADIUS: u32 = 512;

/// Fully resolved settings for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigValues {
    pub lod_chunk_render_distance: u32,
    pub vertical_quality: QualityTier,
    pub horizontal_scale: HorizontalScale,
    pub number_of_threads: u8,
    pub cpu_load: CpuLoad,
    pub gpu_upload_percentage: u8,
    pub dropoff: Dropoff,
    pub lod_quality: QualityTier,
    pub enable_cave_rendering: bool,
    pub vanilla_render_distance: u8,
    pub ram_suggestion: HeapSize,
}

impl ConfigValues {
    /// Look up both tables and merge the cells.
    pub fn resolve(profile: &HardwareProfile) -> Self {
        let gpu = tables::gpu_profile(profile.gpu_level, profile.target);
        let cpu = tables::thread_profile(profile.cpu_threads, profile.target);
        Self {
            lod_chunk_render_distance: gpu.lod_chunk_render_distance,
            vertical_quality: gpu.vertical_quality,
            horizontal_scale: gpu.horizontal_scale,
            number_of_threads: cpu.number_of_threads,
            cpu_load: cpu.cpu_load,
            gpu_upload_percentage: gpu.gpu_upload_percentage,
            dropoff: gpu.dropoff,
            lod_quality: gpu.lod_quality,
            enable_cave_rendering: gpu.enable_cave_rendering,
            vanilla_render_distance: gpu.vanilla_render_distance,
            ram_suggestion: gpu.ram_suggestion,
        }
    }
}

/// Generator output: the config file text and the advisories to show with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConfig {
    pub document: String,
    pub advisories: Vec<String>,
}

/// Generate the config document and advisories for a profile.
pub fn generate_config(profile: &HardwareProfile) -> GeneratedConfig {
    let values = ConfigValues::resolve(profile);
    GeneratedConfig {
        document: render_document(profile, &values),
        advisories: advisories(profile, &values),
    }
}

/// Validate an untyped profile, then generate.
///
/// Any field outside its enumeration fails with
/// [`ProfileError::InvalidProfile`]; nothing is generated in that case.
pub fn generate_config_raw(raw: &RawProfile) -> Result<GeneratedConfig, ProfileError> {
    let profile = HardwareProfile::try_from(raw.clone())?;
    Ok(generate_config(&profile))
}

const RULE: &str = "# ═══════════════════════════════════════════════════";

/// Render the fixed-shape config document.
///
/// Every key is always present; the only variation is the substituted values.
pub fn render_document(profile: &HardwareProfile, values: &ConfigValues) -> String {
    format!(
        r#"{RULE}
# Distant Horizons — Optimized Configuration
# Generated by DistantHorizonsGuide.com
# Profile: {gpu} GPU | {threads} CPU Threads | {target}
{RULE}

[general]
# Maximum distance LODs will render (in chunks)
lodChunkRenderDistanceRadius = {radius}

[graphics]
# Quality of LOD vertical detail
verticalQuality = "{vertical}"

# Horizontal resolution scale
horizontalScale = "{horizontal}"

# Overall LOD quality level
quality = "{quality}"

# Distance dropoff curve — how LOD detail fades
dropoffQuality = "{dropoff}"

# Enable cave LOD rendering
enableCaveRendering = {caves}

[performance]
# Number of CPU threads for LOD building
numberOfLodBuilderThreads = {builder_threads}

# CPU load target
cpuLoad = "{cpu_load}"

# GPU upload budget (percentage of frame time)
gpuUploadPercentage = {upload}

{RULE}
# LAUNCHER SETTINGS (apply outside Minecraft)
{RULE}
# Recommended JVM arguments:
#   -Xmx{heap}
# Suggested vanilla render distance: {vanilla} chunks"#,
        gpu = profile.gpu_level.as_str().to_ascii_uppercase(),
        threads = profile.cpu_threads.count(),
        target = profile.target.as_str().to_ascii_uppercase(),
        radius = values.lod_chunk_render_distance,
        vertical = values.vertical_quality,
        horizontal = values.horizontal_scale,
        quality = values.lod_quality,
        dropoff = values.dropoff,
        caves = values.enable_cave_rendering,
        builder_threads = values.number_of_threads,
        cpu_load = values.cpu_load,
        upload = values.gpu_upload_percentage,
        heap = values.ram_suggestion,
        vanilla = values.vanilla_render_distance,
    )
}

/// Advisories for a profile, in display order.
///
/// Each rule is checked independently against the same inputs; the last two
/// always apply.
pub fn advisories(profile: &HardwareProfile, values: &ConfigValues) -> Vec<String> {
    let mut out = Vec::new();

    if profile.gpu_level == GpuLevel::Entry {
        out.push(
            "💡 Consider installing Sodium (Fabric) or Embeddium (NeoForge) for significantly better frame rates."
                .to_string(),
        );
        out.push(
            "💡 Avoid using shaders if your GPU is low-end. DH alone provides a massive visual upgrade."
                .to_string(),
        );
    }

    if profile.target == Target::Visuals && profile.gpu_level != GpuLevel::Ultra {
        out.push(
            "🎮 For even better visuals, consider upgrading your GPU. A mid-range GPU like the RTX 4060 handles DH + shaders beautifully."
                .to_string(),
        );
    }

    if values.lod_chunk_render_distance >= LONG_GENERATION_RADIUS {
        out.push(format!(
            "⚡ With {} chunks, initial LOD generation may take 10-15 minutes of exploration. Be patient!",
            values.lod_chunk_render_distance
        ));
    }

    if profile.cpu_threads <= CpuThreads::Four {
        out.push(
            "⚠️ With only 4 threads, avoid running heavy background tasks while DH is generating LODs."
                .to_string(),
        );
    }

    out.push(format!(
        "📦 Set your RAM to -Xmx{} in your launcher's JVM arguments.",
        values.ram_suggestion
    ));
    out.push(format!(
        "🔧 Set your vanilla render distance to {} chunks — DH handles the rest.",
        values.vanilla_render_distance
    ));

    out
}
