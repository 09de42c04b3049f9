//! Fixed lookup tables for stored creatures.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Stat;
use crate::value_objects::Stat::{Attack, Defense, Health, SpecialAttack, SpecialDefense, Speed};

/// A tabulated creature capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    Force,
    Intelligence,
    Jump,
}

impl CapabilityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Force => "force",
            Self::Intelligence => "intelligence",
            Self::Jump => "jump",
        }
    }

    /// Fixed description for a capability value, if the table covers it.
    pub fn description(&self, value: i64) -> Option<&'static str> {
        let table: &[&str] = match self {
            Self::Force => &FORCE_DESCRIPTIONS,
            Self::Intelligence => &INTELLIGENCE_DESCRIPTIONS,
            Self::Jump => &JUMP_DESCRIPTIONS,
        };
        let index = usize::try_from(value).ok()?.checked_sub(1)?;
        table.get(index).copied()
    }
}

impl FromStr for CapabilityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "force" | "forca" | "força" => Ok(Self::Force),
            "intelligence" | "intel" => Ok(Self::Intelligence),
            "jump" | "salto" => Ok(Self::Jump),
            _ => Err(DomainError::parse(format!("Unknown capability: {s}"))),
        }
    }
}

const FORCE_DESCRIPTIONS: [&str; 10] = [
    "Capaz de Levantar 5 KG",
    "Capaz de Levantar 23 KG",
    "Capaz de Levantar 45 KG",
    "Capaz de Levantar 90 KG",
    "Capaz de Levantar 158 KG",
    "Capaz de Levantar 227 KG",
    "Capaz de Levantar 340 KG",
    "Capaz de Levantar 455 KG",
    "Capaz de Levantar 1135 KG",
    "Capaz de Levantar 1815 KG",
];

const JUMP_DESCRIPTIONS: [&str; 10] = [
    "Capaz de Saltar 1 M",
    "Capaz de Saltar 2 M",
    "Capaz de Saltar 3 M",
    "Capaz de Saltar 4.5 M",
    "Capaz de Saltar 6 M",
    "Capaz de Saltar 7.6 M",
    "Capaz de Saltar 10.6 M",
    "Capaz de Saltar 15.2 M",
    "Capaz de Saltar 21 M",
    "Capaz de Saltar 30 M",
];

const INTELLIGENCE_DESCRIPTIONS: [&str; 7] = [
    "Vegetal",
    "Animal",
    "Animal Inteligente",
    "Deficiente",
    "Humano",
    "Superior",
    "Gênio",
];

/// A creature nature: one raised and one lowered attribute, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nature {
    pub name: &'static str,
    pub raised: Option<Stat>,
    pub lowered: Option<Stat>,
}

impl Nature {
    const fn shifted(name: &'static str, raised: Stat, lowered: Stat) -> Self {
        Self {
            name,
            raised: Some(raised),
            lowered: Some(lowered),
        }
    }

    const fn neutral(name: &'static str) -> Self {
        Self {
            name,
            raised: None,
            lowered: None,
        }
    }

    /// Feature text written to the creature sheet, empty for neutral natures.
    pub fn features(&self) -> String {
        match (self.raised, self.lowered) {
            (Some(raised), Some(lowered)) => {
                format!("-{}\n+{}", lowered.full_name(), raised.full_name())
            }
            _ => String::new(),
        }
    }
}

pub const NATURES: [Nature; 35] = [
    Nature::shifted("Ousada", Health, Attack),
    Nature::shifted("Dócil", Health, Defense),
    Nature::shifted("Orgulhosa", Health, SpecialAttack),
    Nature::shifted("Excêntrica", Health, SpecialDefense),
    Nature::shifted("Preguiçosa", Health, Speed),
    Nature::shifted("Desesperada", Attack, Health),
    Nature::shifted("Solitária", Attack, Defense),
    Nature::shifted("Firme", Attack, SpecialAttack),
    Nature::shifted("Travessa", Attack, SpecialDefense),
    Nature::shifted("Brava", Attack, Speed),
    Nature::shifted("Rígida", Defense, Health),
    Nature::shifted("Arrojada", Defense, Attack),
    Nature::shifted("Endiabrada", Defense, SpecialAttack),
    Nature::shifted("Negligente", Defense, SpecialDefense),
    Nature::shifted("Relaxada", Defense, Speed),
    Nature::shifted("Tímida", SpecialAttack, Health),
    Nature::shifted("Modesta", SpecialAttack, Attack),
    Nature::shifted("Amável", SpecialAttack, Defense),
    Nature::shifted("Imprudente", SpecialAttack, SpecialDefense),
    Nature::shifted("Quieta", SpecialAttack, Speed),
    Nature::shifted("Enjoada", SpecialDefense, Health),
    Nature::shifted("Calma", SpecialDefense, Attack),
    Nature::shifted("Gentil", SpecialDefense, Defense),
    Nature::shifted("Meticulosa", SpecialDefense, SpecialAttack),
    Nature::shifted("Atrevida", SpecialDefense, Speed),
    Nature::shifted("Séria", Speed, Health),
    Nature::shifted("Medrosa", Speed, Attack),
    Nature::shifted("Apressada", Speed, Defense),
    Nature::shifted("Alegre", Speed, SpecialAttack),
    Nature::shifted("Ingênua", Speed, SpecialDefense),
    Nature::neutral("Comedida"),
    Nature::neutral("Chata"),
    Nature::neutral("Paciente"),
    Nature::neutral("Sensata"),
    Nature::neutral("Estoica"),
];

/// Look up a nature by exact name.
pub fn nature(name: &str) -> Option<&'static Nature> {
    NATURES.iter().find(|nature| nature.name == name)
}

/// Feature text for a nature name; unknown names yield an empty text.
pub fn nature_features(name: &str) -> String {
    nature(name).map(Nature::features).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_tables_cover_their_ranges() {
        assert_eq!(CapabilityKind::Force.description(1), Some("Capaz de Levantar 5 KG"));
        assert_eq!(CapabilityKind::Force.description(10), Some("Capaz de Levantar 1815 KG"));
        assert_eq!(CapabilityKind::Jump.description(4), Some("Capaz de Saltar 4.5 M"));
        assert_eq!(CapabilityKind::Intelligence.description(7), Some("Gênio"));
    }

    #[test]
    fn capability_values_outside_tables_have_no_description() {
        assert_eq!(CapabilityKind::Force.description(0), None);
        assert_eq!(CapabilityKind::Force.description(11), None);
        assert_eq!(CapabilityKind::Intelligence.description(8), None);
        assert_eq!(CapabilityKind::Jump.description(-1), None);
    }

    #[test]
    fn thirty_shifted_and_five_neutral_natures() {
        let shifted = NATURES.iter().filter(|n| n.raised.is_some()).count();
        assert_eq!(shifted, 30);
        assert_eq!(NATURES.len() - shifted, 5);
        for nature in NATURES.iter().filter(|n| n.raised.is_some()) {
            assert_ne!(nature.raised, nature.lowered, "{}", nature.name);
        }
    }

    #[test]
    fn nature_features_text() {
        assert_eq!(nature_features("Modesta"), "-Ataque\n+Ataque Especial");
        assert_eq!(nature_features("Séria"), "-Saúde\n+Velocidade");
        assert_eq!(nature_features("Estoica"), "");
        assert_eq!(nature_features("Hardy"), "");
    }

    #[test]
    fn capability_kind_from_str() {
        assert_eq!("Força".parse::<CapabilityKind>().unwrap(), CapabilityKind::Force);
        assert_eq!("jump".parse::<CapabilityKind>().unwrap(), CapabilityKind::Jump);
        assert!("strength".parse::<CapabilityKind>().is_err());
    }
}
