//! Skill proficiency rank.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::common::coerce_i64;

/// Skill proficiency tier.
///
/// Persisted as the bare integers 0, 1 and 2. Out-of-range stored values are
/// clamped into range rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillRank {
    /// Rank 0 - rolls the bare die
    #[default]
    Untrained,
    /// Rank 1
    Trained,
    /// Rank 2 - not available to health-gated skills
    Expert,
}

impl SkillRank {
    /// Clamp any integer into a rank.
    pub fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Self::Untrained,
            1 => Self::Trained,
            _ => Self::Expert,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Self::Untrained => 0,
            Self::Trained => 1,
            Self::Expert => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Untrained => "Untrained",
            Self::Trained => "Trained",
            Self::Expert => "Expert",
        }
    }

    /// One-character marker used on the rank selector.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Untrained => "-",
            Self::Trained => "T",
            Self::Expert => "E",
        }
    }

    /// Highest rank a health-gated skill may hold.
    pub fn capped_for_health_gate(self) -> Self {
        self.min(Self::Trained)
    }
}

impl fmt::Display for SkillRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for SkillRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for SkillRank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_level(coerce_i64(&value)))
    }
}
