//! Compression levels and their profiles.
//!
//! A compression level is one of a closed set of labels that callers pass as
//! plain strings. Each label maps to exactly one [`LevelProfile`], so the
//! target ratio and the sentence-range phrasing quoted in prompts can never
//! drift apart.

use std::str::FromStr;

use crate::errors::AdaptationError;

/// All recognised level labels, in canonical order.
pub const VALID_LABELS: [&str; 4] = ["brief", "short", "medium", "long"];

// ---------------------------------------------------------------------------
// Compression level
// ---------------------------------------------------------------------------

/// How aggressively the adapted text should be compressed.
///
/// Parsed from the caller-supplied label with [`str::parse`]; matching is
/// exact, so `"Brief"` and `"BRIEF"` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionLevel {
    /// Compress to roughly a quarter of the original length.
    Brief,
    /// Compress to roughly half of the original length.
    Short,
    /// Compress to roughly three quarters of the original length.
    Medium,
    /// Keep most of the original length.
    Long,
}

impl CompressionLevel {
    /// Returns the canonical lowercase label for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }

    /// Returns the profile recorded for this level.
    pub fn profile(self) -> LevelProfile {
        match self {
            Self::Brief => LevelProfile {
                ratio: 0.25,
                sentence_range: "1-2 sentences",
            },
            Self::Short => LevelProfile {
                ratio: 0.5,
                sentence_range: "2-4 sentences",
            },
            Self::Medium => LevelProfile {
                ratio: 0.75,
                sentence_range: "4-10 sentences",
            },
            Self::Long => LevelProfile {
                ratio: 0.9,
                sentence_range: "10-15 sentences",
            },
        }
    }
}

impl FromStr for CompressionLevel {
    type Err = AdaptationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brief" => Ok(Self::Brief),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(AdaptationError::InvalidCompressionLevel {
                given: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Level profile
// ---------------------------------------------------------------------------

/// The two facts recorded for each compression level.
///
/// `ratio` is the approximate fraction of the original length the adapted
/// text should keep. Nothing computes with it; it is carried in debug events
/// so the intent behind each label stays visible. `sentence_range` is quoted
/// verbatim in the prompt sent to the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProfile {
    /// Approximate fraction of the original length to keep.
    pub ratio: f64,
    /// Target length phrased for the model (e.g. `"1-2 sentences"`).
    pub sentence_range: &'static str,
}
