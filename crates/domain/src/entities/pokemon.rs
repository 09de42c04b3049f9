//! Stored creature - the contents of a PC box slot
//!
//! Creature sheets are edited wholesale and carry their own cached totals
//! (stat totals, max HP). The setters here keep those caches in step with the
//! components they are computed from.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::common::{lenient, non_blank};
use crate::error::DomainError;
use crate::game_systems::{nature_features, CalculationEngine, CapabilityKind, TrainerCardSystem};
use crate::ids::PokemonId;
use crate::value_objects::{Stat, Stats};

/// Maximum number of moves on a creature sheet.
pub const MAX_MOVES: usize = 8;

const UNKNOWN: &str = "Unknown";
const DEFAULT_BALL: &str = "Poke Ball";
const DEFAULT_NATURE: &str = "Hardy";
const DEFAULT_BASE_STAT: u32 = 10;
const DEFAULT_LAND_MOVEMENT: i64 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureGender {
    M,
    F,
    #[default]
    #[serde(other)]
    U,
}

impl CreatureGender {
    pub fn from_input(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "M" => Self::M,
            "F" => Self::F,
            _ => Self::U,
        }
    }
}

/// `{name, description}` pair used for abilities and the capability trait.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Which column of the creature stat table an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatComponent {
    Base,
    Level,
}

/// Stat totals plus the two components they are summed from.
///
/// The totals sit at the top level of the stored object, next to `base` and
/// `lvl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    #[serde(flatten)]
    pub totals: Stats,
    #[serde(default)]
    pub base: Stats,
    #[serde(default)]
    pub lvl: Stats,
}

impl Default for CreatureStats {
    fn default() -> Self {
        Self {
            totals: Stats::uniform(DEFAULT_BASE_STAT),
            base: Stats::uniform(DEFAULT_BASE_STAT),
            lvl: Stats::default(),
        }
    }
}

impl CreatureStats {
    /// Update one component and recompute that stat's total.
    pub fn set_component(&mut self, stat: Stat, component: StatComponent, value: i64) {
        match component {
            StatComponent::Base => self.base.set_raw(stat, value),
            StatComponent::Level => self.lvl.set_raw(stat, value),
        }
        let total = self.base.get(stat).saturating_add(self.lvl.get(stat));
        self.totals.set(stat, total);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureHp {
    #[serde(default, deserialize_with = "lenient::signed")]
    pub current: i64,
    #[serde(default, deserialize_with = "lenient::signed")]
    pub max: i64,
}

impl Default for CreatureHp {
    fn default() -> Self {
        Self {
            current: 10,
            max: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureEvasions {
    #[serde(rename = "fisica", default, deserialize_with = "lenient::signed")]
    pub physical: i64,
    #[serde(rename = "especial", default, deserialize_with = "lenient::signed")]
    pub special: i64,
    #[serde(rename = "veloz", default, deserialize_with = "lenient::signed")]
    pub speed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureMovements {
    #[serde(rename = "terrestre", default, deserialize_with = "lenient::signed")]
    pub land: i64,
    #[serde(rename = "voo", default, deserialize_with = "lenient::signed")]
    pub flight: i64,
    #[serde(rename = "natacao", default, deserialize_with = "lenient::signed")]
    pub swim: i64,
    #[serde(rename = "subaquatico", default, deserialize_with = "lenient::signed")]
    pub dive: i64,
    #[serde(rename = "escavacao", default, deserialize_with = "lenient::signed")]
    pub burrow: i64,
}

impl Default for CreatureMovements {
    fn default() -> Self {
        Self {
            land: DEFAULT_LAND_MOVEMENT,
            flight: 0,
            swim: 0,
            dive: 0,
            burrow: 0,
        }
    }
}

/// A tabulated capability value with its description.
///
/// Quick-created creatures store a bare number instead of the object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capability {
    pub value: i64,
    pub description: String,
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match &value {
            Value::Object(map) => Self {
                value: map.get("value").map(lenient::coerce_i64).unwrap_or(0),
                description: map
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            other => Self {
                value: lenient::coerce_i64(other),
                description: String::new(),
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherCapability {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub force: Capability,
    #[serde(default)]
    pub intelligence: Capability,
    #[serde(default)]
    pub jump: Capability,
    #[serde(default)]
    pub other: Vec<OtherCapability>,
}

impl Capabilities {
    pub fn get(&self, kind: CapabilityKind) -> &Capability {
        match kind {
            CapabilityKind::Force => &self.force,
            CapabilityKind::Intelligence => &self.intelligence,
            CapabilityKind::Jump => &self.jump,
        }
    }

    /// Set a capability value; tabulated values replace the description,
    /// others keep the previous one.
    pub fn set(&mut self, kind: CapabilityKind, value: i64) {
        let capability = match kind {
            CapabilityKind::Force => &mut self.force,
            CapabilityKind::Intelligence => &mut self.intelligence,
            CapabilityKind::Jump => &mut self.jump,
        };
        capability.value = value;
        if let Some(description) = kind.description(value) {
            capability.description = description.to_string();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveCategory {
    #[default]
    #[serde(rename = "Físico")]
    Physical,
    #[serde(rename = "Especial")]
    Special,
    #[serde(other)]
    Status,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonMove {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: MoveCategory,
    pub frequency: String,
    pub range: String,
    pub damage: String,
    pub accuracy: String,
    pub overhead: String,
    pub descriptor: String,
    pub description: String,
    pub descriptors: Vec<String>,
}

impl PokemonMove {
    /// Blank move occupying sheet position `index`.
    pub fn blank(index: usize) -> Self {
        Self {
            id: index.to_string(),
            ..Self::default()
        }
    }
}

/// Quick-create form for a PC slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonDraft {
    pub name: String,
    pub species: String,
    pub level: u32,
    pub gender: CreatureGender,
    /// Comma separated type list as typed by the user
    pub types: String,
    pub ball: String,
}

/// A creature stored in a PC box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredPokemon {
    pub id: PokemonId,
    pub name: String,
    pub species: String,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub level: u32,
    pub gender: CreatureGender,
    pub types: Vec<String>,
    pub ball: String,
    #[serde(deserialize_with = "lenient::non_negative")]
    pub slot: u32,
    pub nature: String,
    pub nature_features: String,
    #[serde(deserialize_with = "lenient::signed")]
    pub elemental_damage_bonus: i64,
    pub capability_trait: NamedDescription,
    pub abilities: Vec<NamedDescription>,
    pub stats: CreatureStats,
    pub hp: CreatureHp,
    pub evasions: CreatureEvasions,
    pub movements: CreatureMovements,
    pub capabilities: Capabilities,
    pub moves: Vec<PokemonMove>,
}

impl Default for StoredPokemon {
    fn default() -> Self {
        Self {
            id: PokemonId::new(),
            name: UNKNOWN.to_string(),
            species: UNKNOWN.to_string(),
            level: 1,
            gender: CreatureGender::U,
            types: Vec::new(),
            ball: DEFAULT_BALL.to_string(),
            slot: 0,
            nature: DEFAULT_NATURE.to_string(),
            nature_features: String::new(),
            elemental_damage_bonus: 0,
            capability_trait: NamedDescription::default(),
            abilities: Vec::new(),
            stats: CreatureStats::default(),
            hp: CreatureHp::default(),
            evasions: CreatureEvasions::default(),
            movements: CreatureMovements::default(),
            capabilities: Capabilities::default(),
            moves: Vec::new(),
        }
    }
}

impl StoredPokemon {
    /// Build a creature from the quick-create form.
    pub fn from_draft(draft: &PokemonDraft, slot: u32) -> Self {
        Self {
            name: or_default(&draft.name, UNKNOWN),
            species: or_default(&draft.species, UNKNOWN),
            level: draft.level.max(1),
            gender: draft.gender,
            types: parse_types(&draft.types),
            ball: or_default(&draft.ball, DEFAULT_BALL),
            slot,
            ..Self::default()
        }
    }

    /// Edit one stat component; health edits also recompute max HP.
    pub fn set_stat_component(&mut self, stat: Stat, component: StatComponent, value: i64) {
        self.stats.set_component(stat, component, value);
        if stat == Stat::Health {
            self.recompute_max_hp();
        }
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
        self.recompute_max_hp();
    }

    pub fn set_capability(&mut self, kind: CapabilityKind, value: i64) {
        self.capabilities.set(kind, value);
    }

    /// Choose a nature and rewrite the features text from the nature table.
    pub fn set_nature(&mut self, name: &str) {
        self.nature = name.to_string();
        self.nature_features = nature_features(name);
    }

    /// Replace the move at `index`, padding earlier positions with blanks.
    pub fn set_move(&mut self, index: usize, mut mv: PokemonMove) -> Result<(), DomainError> {
        if index >= MAX_MOVES {
            return Err(DomainError::validation(format!(
                "Move position {index} exceeds the {MAX_MOVES} move slots"
            )));
        }
        while self.moves.len() <= index {
            self.moves.push(PokemonMove::blank(self.moves.len()));
        }
        if mv.id.is_empty() {
            mv.id = index.to_string();
        }
        self.moves[index] = mv;
        Ok(())
    }

    fn recompute_max_hp(&mut self) {
        self.hp.max = TrainerCardSystem::new().creature_max_hp(self.stats.totals.health, self.level);
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    non_blank(value).unwrap_or(fallback).to_string()
}

/// Split a comma separated type list, dropping empty entries.
pub fn parse_types(input: &str) -> Vec<String> {
    input
        .split(',')
        .filter_map(non_blank)
        .map(str::to_string)
        .collect()
}
