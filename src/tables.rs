//! Static lookup tables behind the config generator.
//!
//! Two tables, both keyed by a pair of profile enums:
//!
//! | Table | Key | Yields |
//! |-------|-----|--------|
//! | [`gpu_profile`] | GPU level × target | render distance, quality tiers, upload budget, caves, launcher hints |
//! | [`thread_profile`] | CPU threads × target | LOD builder thread count, CPU load tier |
//!
//! Both are exhaustive `match` expressions over the key pair and every cell is
//! a full struct literal, so a missing cell or a missing field does not
//! compile. The fields of the two tables are disjoint; merging them never
//! has to resolve a conflict.

use crate::profile::{CpuThreads, GpuLevel, Target};
use serde::Serialize;
use std::fmt;

/// Detail tier used for both vertical quality and overall LOD quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QualityTier {
    Low,
    Medium,
    High,
    Ultra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HorizontalScale {
    Half,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CpuLoad {
    Low,
    Medium,
    High,
}

/// How quickly LOD detail falls off with distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dropoff {
    Aggressive,
    Moderate,
    Smooth,
    Gentle,
}

impl QualityTier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Ultra => "ULTRA",
        }
    }
}

impl HorizontalScale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Half => "HALF",
            Self::Full => "FULL",
        }
    }
}

impl CpuLoad {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl Dropoff {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggressive => "AGGRESSIVE",
            Self::Moderate => "MODERATE",
            Self::Smooth => "SMOOTH",
            Self::Gentle => "GENTLE",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(QualityTier, HorizontalScale, CpuLoad, Dropoff);

/// JVM heap size suggestion in gigabytes, rendered as `-Xmx` takes it (`8G`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HeapSize(pub u8);

impl fmt::Display for HeapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}G", self.0)
    }
}

impl Serialize for HeapSize {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One cell of the GPU table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuProfile {
    pub lod_chunk_render_distance: u32,
    pub vertical_quality: QualityTier,
    pub horizontal_scale: HorizontalScale,
    pub gpu_upload_percentage: u8,
    pub dropoff: Dropoff,
    pub lod_quality: QualityTier,
    pub enable_cave_rendering: bool,
    pub vanilla_render_distance: u8,
    pub ram_suggestion: HeapSize,
}

/// One cell of the thread table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadProfile {
    pub number_of_threads: u8,
    pub cpu_load: CpuLoad,
}

#[allow(clippy::too_many_arguments)]
const fn gpu(
    lod_chunk_render_distance: u32,
    vertical_quality: QualityTier,
    horizontal_scale: HorizontalScale,
    gpu_upload_percentage: u8,
    dropoff: Dropoff,
    lod_quality: QualityTier,
    enable_cave_rendering: bool,
    vanilla_render_distance: u8,
    ram_gb: u8,
) -> GpuProfile {
    GpuProfile {
        lod_chunk_render_distance,
        vertical_quality,
        horizontal_scale,
        gpu_upload_percentage,
        dropoff,
        lod_quality,
        enable_cave_rendering,
        vanilla_render_distance,
        ram_suggestion: HeapSize(ram_gb),
    }
}

/// GPU table lookup.
pub const fn gpu_profile(level: GpuLevel, target: Target) -> GpuProfile {
    use Dropoff::*;
    use GpuLevel as G;
    use HorizontalScale::*;
    use QualityTier::*;
    use Target as T;

    //                                 radius vertical   horiz  upload dropoff      quality caves  vanilla heap
    match (level, target) {
        (G::Entry, T::Performance) => gpu(128, Low, Half, 30, Aggressive, Low, false, 6, 4),
        (G::Entry, T::Balanced) => gpu(192, Medium, Half, 40, Moderate, Low, false, 8, 4),
        (G::Entry, T::Visuals) => gpu(256, Medium, Full, 50, Moderate, Medium, false, 8, 6),
        (G::Mid, T::Performance) => gpu(256, Medium, Half, 40, Moderate, Medium, false, 10, 6),
        (G::Mid, T::Balanced) => gpu(384, High, Full, 50, Smooth, Medium, true, 12, 6),
        (G::Mid, T::Visuals) => gpu(512, High, Full, 60, Smooth, High, true, 12, 8),
        (G::High, T::Performance) => gpu(384, High, Full, 50, Smooth, High, true, 12, 8),
        (G::High, T::Balanced) => gpu(512, High, Full, 60, Smooth, High, true, 16, 8),
        (G::High, T::Visuals) => gpu(768, Ultra, Full, 70, Gentle, Ultra, true, 16, 10),
        (G::Ultra, T::Performance) => gpu(512, High, Full, 60, Smooth, High, true, 16, 10),
        (G::Ultra, T::Balanced) => gpu(768, Ultra, Full, 70, Gentle, Ultra, true, 20, 12),
        (G::Ultra, T::Visuals) => gpu(1024, Ultra, Full, 80, Gentle, Ultra, true, 24, 16),
    }
}

/// Thread table lookup.
pub const fn thread_profile(threads: CpuThreads, target: Target) -> ThreadProfile {
    use CpuLoad::*;
    use CpuThreads as C;
    use Target as T;

    let (number_of_threads, cpu_load) = match (threads, target) {
        (C::Four, T::Performance) => (1, Low),
        (C::Four, T::Balanced) => (2, Medium),
        (C::Four, T::Visuals) => (2, Medium),
        (C::Eight, T::Performance) => (2, Low),
        (C::Eight, T::Balanced) => (3, Medium),
        (C::Eight, T::Visuals) => (4, High),
        (C::Twelve, T::Performance) => (3, Low),
        (C::Twelve, T::Balanced) => (4, Medium),
        (C::Twelve, T::Visuals) => (6, High),
        (C::Sixteen, T::Performance) => (4, Low),
        (C::Sixteen, T::Balanced) => (6, Medium),
        (C::Sixteen, T::Visuals) => (8, High),
    };
    ThreadProfile {
        number_of_threads,
        cpu_load,
    }
}
