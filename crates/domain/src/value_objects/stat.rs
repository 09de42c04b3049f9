//! Stat value object - the six primary attributes of a trainer card.
//!
//! Provides type safety for stat references instead of the raw storage keys
//! ("saude", "ataque", ...) used by the persisted document.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Primary attribute keys.
///
/// Serialized with the storage keys of the persisted document so that skill
/// entries (`"attr": "velocidade"`) keep their existing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    /// Health - drives the HP ceiling; skills on it are health-gated
    #[serde(rename = "saude")]
    Health,
    /// Attack - physical offence
    #[serde(rename = "ataque")]
    Attack,
    /// Defense - physical evasion
    #[serde(rename = "defesa")]
    Defense,
    /// Special attack - special offence
    #[serde(rename = "atqEspecial")]
    SpecialAttack,
    /// Special defense - special evasion
    #[serde(rename = "defEspecial")]
    SpecialDefense,
    /// Speed - speed evasion and every movement value
    #[serde(rename = "velocidade")]
    Speed,
}

impl Stat {
    /// Returns the storage key of this stat (e.g., "saude", "atqEspecial").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "saude",
            Self::Attack => "ataque",
            Self::Defense => "defesa",
            Self::SpecialAttack => "atqEspecial",
            Self::SpecialDefense => "defEspecial",
            Self::Speed => "velocidade",
        }
    }

    /// Returns the label shown on the sheet.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Health => "Saúde",
            Self::Attack => "Ataque",
            Self::Defense => "Defesa",
            Self::SpecialAttack => "Atq. Esp",
            Self::SpecialDefense => "Def. Esp",
            Self::Speed => "Velocidade",
        }
    }

    /// Returns the unabbreviated name (used in nature descriptions).
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Health => "Saúde",
            Self::Attack => "Ataque",
            Self::Defense => "Defesa",
            Self::SpecialAttack => "Ataque Especial",
            Self::SpecialDefense => "Defesa Especial",
            Self::Speed => "Velocidade",
        }
    }

    /// Whether skills governed by this stat are possessed/not-possessed only.
    pub fn is_health_gated(&self) -> bool {
        matches!(self, Self::Health)
    }

    /// Returns all six stats in sheet order.
    pub fn all() -> [Stat; 6] {
        [
            Self::Health,
            Self::Attack,
            Self::Defense,
            Self::SpecialAttack,
            Self::SpecialDefense,
            Self::Speed,
        ]
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "saude" | "saúde" | "health" | "hp" => Ok(Self::Health),
            "ataque" | "attack" | "atk" => Ok(Self::Attack),
            "defesa" | "defense" | "def" => Ok(Self::Defense),
            "atqespecial" | "special-attack" | "spatk" => Ok(Self::SpecialAttack),
            "defespecial" | "special-defense" | "spdef" => Ok(Self::SpecialDefense),
            "velocidade" | "speed" | "spd" => Ok(Self::Speed),
            other => Err(DomainError::parse(format!("Unknown stat: {}", other))),
        }
    }
}
