//! Closed set of edits accepted by a trainer card.

use crate::entities::{PokemonDraft, PokemonMove, StatComponent, StoredPokemon};
use crate::game_systems::CapabilityKind;
use crate::ids::{ItemId, TeamMemberId};
use crate::value_objects::{resolve_arithmetic_input, CountField, SkillRank, Stat, TextField};

/// Input for a hit point box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HpInput {
    /// Already-parsed value
    Value(i64),
    /// Raw arithmetic box text such as `"64-12"`
    Expression(String),
}

impl HpInput {
    /// The committed value, or `None` when the expression is malformed.
    ///
    /// Blank or non-finite expressions commit 0.
    pub fn resolve(&self) -> Option<i64> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Expression(text) => resolve_arithmetic_input(text, 0),
        }
    }
}

/// Edits to a creature sheet stored in a PC box.
#[derive(Debug, Clone, PartialEq)]
pub enum PokemonEdit {
    Rename(String),
    SetLevel(i64),
    SetStatComponent {
        stat: Stat,
        component: StatComponent,
        value: i64,
    },
    SetCapability {
        kind: CapabilityKind,
        value: i64,
    },
    SetNature(String),
    SetMove {
        index: usize,
        mv: PokemonMove,
    },
    /// Current creature HP; not clamped to the creature's max HP
    SetCurrentHp(HpInput),
}

/// Every change a user can commit to the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Raw value; negatives are stored as 0
    SetStat { stat: Stat, value: i64 },
    /// Raw value; negatives are stored as 0
    SetLevel(i64),
    /// Clamped to the HP ceiling on write
    SetCurrentHp(HpInput),
    SetText { field: TextField, value: String },
    SetCount { field: CountField, value: i64 },
    /// `slot` is 1-based, matching the four class boxes
    SetClassName { slot: u8, name: String },
    SetClassLevel { slot: u8, level: i64 },
    SetAvatar(Option<String>),
    SetNotes(String),
    SetSkillRank { skill: String, rank: SkillRank },
    SetSkillBonus { skill: String, bonus: i64 },
    AddTalent { name: String, description: String },
    RemoveTalent(usize),
    AddItem {
        name: String,
        description: String,
        quantity: u32,
    },
    AdjustItemQuantity { id: ItemId, delta: i64 },
    RemoveItem(ItemId),
    AddTeamMember {
        name: String,
        species: String,
        ball: String,
    },
    RemoveTeamMember(TeamMemberId),
    CreatePokemon {
        box_index: usize,
        slot: u32,
        draft: PokemonDraft,
    },
    /// Save a whole creature sheet into a slot, replacing the occupant
    PlacePokemon {
        box_index: usize,
        slot: u32,
        pokemon: Box<StoredPokemon>,
    },
    MovePokemon { box_index: usize, from: u32, to: u32 },
    ReleasePokemon { box_index: usize, slot: u32 },
    EditPokemon {
        box_index: usize,
        slot: u32,
        edit: PokemonEdit,
    },
}

impl Edit {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetStat { .. } => "set_stat",
            Self::SetLevel(_) => "set_level",
            Self::SetCurrentHp(_) => "set_current_hp",
            Self::SetText { .. } => "set_text",
            Self::SetCount { .. } => "set_count",
            Self::SetClassName { .. } => "set_class_name",
            Self::SetClassLevel { .. } => "set_class_level",
            Self::SetAvatar(_) => "set_avatar",
            Self::SetNotes(_) => "set_notes",
            Self::SetSkillRank { .. } => "set_skill_rank",
            Self::SetSkillBonus { .. } => "set_skill_bonus",
            Self::AddTalent { .. } => "add_talent",
            Self::RemoveTalent(_) => "remove_talent",
            Self::AddItem { .. } => "add_item",
            Self::AdjustItemQuantity { .. } => "adjust_item_quantity",
            Self::RemoveItem(_) => "remove_item",
            Self::AddTeamMember { .. } => "add_team_member",
            Self::RemoveTeamMember(_) => "remove_team_member",
            Self::CreatePokemon { .. } => "create_pokemon",
            Self::PlacePokemon { .. } => "place_pokemon",
            Self::MovePokemon { .. } => "move_pokemon",
            Self::ReleasePokemon { .. } => "release_pokemon",
            Self::EditPokemon { .. } => "edit_pokemon",
        }
    }
}

/// What an applied edit changed beyond its own target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOutcome {
    /// Current HP was lowered to the HP ceiling
    pub hp_repaired: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_expression_resolves() {
        assert_eq!(HpInput::Expression("64-12".into()).resolve(), Some(52));
        assert_eq!(HpInput::Expression("".into()).resolve(), Some(0));
        assert_eq!(HpInput::Expression("10/0".into()).resolve(), Some(0));
        assert_eq!(HpInput::Expression("(3+".into()).resolve(), None);
        assert_eq!(HpInput::Value(-4).resolve(), Some(-4));
    }
}
