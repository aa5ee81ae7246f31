//! Hardware profile: the three selections that drive config generation.
//!
//! A profile is a CPU thread tier, a GPU tier, and an optimization target.
//! Each is a closed enum, so a constructed [`HardwareProfile`] is always
//! valid. Untyped input (CLI flags, `dh-guide.toml`, JSON) goes through
//! [`RawProfile`] and is validated on conversion:
//!
//! ```text
//! RawProfile { cpu_threads: 8, gpu_level: "mid", target: "balanced" }
//!     → HardwareProfile { Eight, Mid, Balanced }
//!
//! RawProfile { cpu_threads: 6, .. }
//!     → Err(InvalidProfile { field: "cpu_threads", value: "6", .. })
//! ```
//!
//! Names are matched exactly (lowercase). There is no nearest-value
//! fallback: `6` threads is not rounded to `4` or `8`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("invalid profile: {field} must be one of {expected}, got {value:?}")]
    InvalidProfile {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ProfileError {
    fn invalid(field: &'static str, value: impl fmt::Display, expected: &'static str) -> Self {
        ProfileError::InvalidProfile {
            field,
            value: value.to_string(),
            expected,
        }
    }
}

/// Display label and short description of a selectable choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub description: &'static str,
}

const fn choice(label: &'static str, description: &'static str) -> Choice {
    Choice { label, description }
}

// ============================================================================
// CPU threads
// ============================================================================

/// Hardware thread count tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CpuThreads {
    Four,
    Eight,
    Twelve,
    Sixteen,
}

impl CpuThreads {
    pub const ALL: [CpuThreads; 4] = [Self::Four, Self::Eight, Self::Twelve, Self::Sixteen];
    const EXPECTED: &'static str = "4, 8, 12, 16";

    pub const fn count(self) -> u32 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Twelve => 12,
            Self::Sixteen => 16,
        }
    }

    pub const fn choice(self) -> Choice {
        match self {
            Self::Four => choice("4 Threads", "Budget"),
            Self::Eight => choice("8 Threads", "Mid-range"),
            Self::Twelve => choice("12 Threads", "High-end"),
            Self::Sixteen => choice("16+ Threads", "Enthusiast"),
        }
    }
}

impl TryFrom<u32> for CpuThreads {
    type Error = ProfileError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|t| t.count() == n)
            .ok_or_else(|| ProfileError::invalid("cpu_threads", n, Self::EXPECTED))
    }
}

impl FromStr for CpuThreads {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map_err(|_| ProfileError::invalid("cpu_threads", s, Self::EXPECTED))
            .and_then(Self::try_from)
    }
}

impl fmt::Display for CpuThreads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

// ============================================================================
// GPU level
// ============================================================================

/// Graphics card tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GpuLevel {
    Entry,
    Mid,
    High,
    Ultra,
}

impl GpuLevel {
    pub const ALL: [GpuLevel; 4] = [Self::Entry, Self::Mid, Self::High, Self::Ultra];
    const EXPECTED: &'static str = "entry, mid, high, ultra";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::High => "high",
            Self::Ultra => "ultra",
        }
    }

    pub const fn choice(self) -> Choice {
        match self {
            Self::Entry => choice("Entry", "GTX 1050 / RX 570 tier"),
            Self::Mid => choice("Mid-Range", "RTX 3060 / RX 6600 tier"),
            Self::High => choice("High-End", "RTX 4070 / RX 7800 tier"),
            Self::Ultra => choice("Ultra", "RTX 4090 / RX 7900 XTX tier"),
        }
    }
}

impl FromStr for GpuLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| ProfileError::invalid("gpu_level", s, Self::EXPECTED))
    }
}

impl fmt::Display for GpuLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Optimization target
// ============================================================================

/// What the user wants to optimize for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Performance,
    Balanced,
    Visuals,
}

impl Target {
    pub const ALL: [Target; 3] = [Self::Performance, Self::Balanced, Self::Visuals];
    const EXPECTED: &'static str = "performance, balanced, visuals";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Performance => "performance",
            Self::Balanced => "balanced",
            Self::Visuals => "visuals",
        }
    }

    pub const fn choice(self) -> Choice {
        match self {
            Self::Performance => choice("Max FPS", "Prioritize frame rate"),
            Self::Balanced => choice("Balanced", "Best of both worlds"),
            Self::Visuals => choice("Ultra Visuals", "Maximum eye candy"),
        }
    }
}

impl FromStr for Target {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ProfileError::invalid("target", s, Self::EXPECTED))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// A validated hardware profile.
///
/// Serializes as its [`RawProfile`] form, and deserializing validates every
/// field, so a `HardwareProfile` read from TOML or JSON is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProfile", into = "RawProfile")]
pub struct HardwareProfile {
    pub cpu_threads: CpuThreads,
    pub gpu_level: GpuLevel,
    pub target: Target,
}

impl HardwareProfile {
    /// Validate untyped values into a profile.
    pub fn new(cpu_threads: u32, gpu_level: &str, target: &str) -> Result<Self, ProfileError> {
        Ok(Self {
            cpu_threads: CpuThreads::try_from(cpu_threads)?,
            gpu_level: gpu_level.parse()?,
            target: target.parse()?,
        })
    }

    /// All 48 valid profiles: GPU-major, then target, then CPU threads.
    pub fn all() -> impl Iterator<Item = HardwareProfile> {
        GpuLevel::ALL.into_iter().flat_map(|gpu_level| {
            Target::ALL.into_iter().flat_map(move |target| {
                CpuThreads::ALL.into_iter().map(move |cpu_threads| HardwareProfile {
                    cpu_threads,
                    gpu_level,
                    target,
                })
            })
        })
    }
}

impl Default for HardwareProfile {
    /// The calculator's initial selection.
    fn default() -> Self {
        Self {
            cpu_threads: CpuThreads::Eight,
            gpu_level: GpuLevel::Mid,
            target: Target::Balanced,
        }
    }
}

/// Unvalidated profile as it arrives from outside.
///
/// Every field is required. Sparse input (a partial `dh-guide.toml`) is filled
/// in by merging over the stock defaults before it gets here, never by
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProfile {
    pub cpu_threads: u32,
    pub gpu_level: String,
    pub target: String,
}

impl TryFrom<RawProfile> for HardwareProfile {
    type Error = ProfileError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        HardwareProfile::new(raw.cpu_threads, &raw.gpu_level, &raw.target)
    }
}

impl From<HardwareProfile> for RawProfile {
    fn from(p: HardwareProfile) -> Self {
        Self {
            cpu_threads: p.cpu_threads.count(),
            gpu_level: p.gpu_level.as_str().to_string(),
            target: p.target.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_every_enumerated_value() {
        for n in [4, 8, 12, 16] {
            for gpu in ["entry", "mid", "high", "ultra"] {
                for target in ["performance", "balanced", "visuals"] {
                    assert!(HardwareProfile::new(n, gpu, target).is_ok());
                }
            }
        }
    }

    #[test]
    fn new_rejects_unlisted_thread_count() {
        let err = HardwareProfile::new(6, "mid", "balanced").unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidProfile {
                field: "cpu_threads",
                value: "6".to_string(),
                expected: "4, 8, 12, 16",
            }
        );
    }

    #[test]
    fn new_rejects_unknown_gpu_level() {
        let err = HardwareProfile::new(8, "low", "balanced").unwrap_err();
        assert!(matches!(
            err,
            ProfileError::InvalidProfile { field: "gpu_level", .. }
        ));
    }

    #[test]
    fn new_rejects_unknown_target() {
        let err = HardwareProfile::new(8, "mid", "fast").unwrap_err();
        assert!(err.to_string().contains("target"));
        assert!(err.to_string().contains("\"fast\""));
    }

    #[test]
    fn names_are_case_sensitive() {
        assert!("MID".parse::<GpuLevel>().is_err());
        assert!("Balanced".parse::<Target>().is_err());
    }

    #[test]
    fn cpu_threads_parses_from_string() {
        assert_eq!("12".parse::<CpuThreads>().unwrap(), CpuThreads::Twelve);
        assert!("twelve".parse::<CpuThreads>().is_err());
        assert!("0".parse::<CpuThreads>().is_err());
    }

    #[test]
    fn all_enumerates_48_distinct_profiles() {
        let all: Vec<_> = HardwareProfile::all().collect();
        assert_eq!(all.len(), 48);
        let unique: std::collections::HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), 48);
    }

    #[test]
    fn default_is_mid_balanced_eight_threads() {
        let p = HardwareProfile::default();
        assert_eq!(p.cpu_threads, CpuThreads::Eight);
        assert_eq!(p.gpu_level, GpuLevel::Mid);
        assert_eq!(p.target, Target::Balanced);
    }

    #[test]
    fn deserialize_validates() {
        let ok: HardwareProfile =
            serde_json::from_str(r#"{"cpu_threads":16,"gpu_level":"ultra","target":"visuals"}"#)
                .unwrap();
        assert_eq!(ok.gpu_level, GpuLevel::Ultra);

        let bad: Result<HardwareProfile, _> =
            serde_json::from_str(r#"{"cpu_threads":6,"gpu_level":"ultra","target":"visuals"}"#);
        assert!(bad.unwrap_err().to_string().contains("invalid profile"));
    }

    #[test]
    fn deserialize_requires_every_field() {
        let partial: Result<HardwareProfile, _> = serde_json::from_str(r#"{"gpu_level":"ultra"}"#);
        assert!(partial.unwrap_err().to_string().contains("missing field"));

        let empty: Result<HardwareProfile, _> = serde_json::from_str("{}");
        assert!(empty.is_err());

        let partial_toml: Result<HardwareProfile, _> = toml::from_str("target = \"visuals\"");
        assert!(partial_toml.is_err());
    }

    #[test]
    fn serialize_uses_raw_form() {
        let json = serde_json::to_string(&HardwareProfile::default()).unwrap();
        assert_eq!(
            json,
            r#"{"cpu_threads":8,"gpu_level":"mid","target":"balanced"}"#
        );
    }

    #[test]
    fn choices_carry_calculator_labels() {
        assert_eq!(CpuThreads::Sixteen.choice().label, "16+ Threads");
        assert_eq!(GpuLevel::Ultra.choice().description, "RTX 4090 / RX 7900 XTX tier");
        assert_eq!(Target::Performance.choice().label, "Max FPS");
    }
}
