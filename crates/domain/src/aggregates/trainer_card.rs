//! TrainerCard aggregate - the whole persisted character sheet
//!
//! # Invariants
//!
//! - Current HP never exceeds the HP ceiling after an edit has been applied
//! - Every stat and the level are non-negative (unsigned storage)
//! - Health-gated skills never hold the Expert rank
//!
//! Fields carrying an invariant are private and change only through
//! [`TrainerCard::apply`]; the free-form profile and list fields are public.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::edit::{Edit, EditOutcome, PokemonEdit};
use crate::common::{lenient, non_blank};
use crate::entities::{
    default_skills, InventoryItem, PcBox, Skill, StoredPokemon, Talent, TeamMember,
};
use crate::error::DomainError;
use crate::game_systems::{CalculationEngine, TrainerCardSystem};
use crate::ids::{ItemId, TeamMemberId};
use crate::value_objects::{CountField, Stats, TextField};

/// Number of career class boxes on the card.
pub const CLASS_SLOTS: u8 = 4;

/// The trainer card record.
///
/// Serialized with the keys of the stored document. Keys this type does not
/// model are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerCard {
    // Profile
    #[serde(rename = "nomePersonagem")]
    pub character_name: String,
    #[serde(rename = "jogador")]
    pub player: String,
    #[serde(rename = "conceito")]
    pub concept: String,
    #[serde(rename = "idade", deserialize_with = "lenient::non_negative")]
    pub age: u32,
    #[serde(rename = "peso")]
    pub weight: String,
    #[serde(rename = "altura")]
    pub height: String,
    #[serde(rename = "naturalidade")]
    pub hometown: String,
    #[serde(rename = "genero")]
    pub gender: String,
    #[serde(rename = "campanha")]
    pub campaign: String,
    #[serde(rename = "diasJornada", deserialize_with = "lenient::non_negative")]
    pub journey_days: u32,
    #[serde(rename = "pokedexCount", deserialize_with = "lenient::non_negative")]
    pub pokedex_count: u32,
    /// Image data URL, stored as-is
    pub avatar: Option<String>,

    // Career classes
    #[serde(rename = "classe1")]
    pub class_1: String,
    #[serde(rename = "level1", deserialize_with = "lenient::non_negative")]
    pub class_level_1: u32,
    #[serde(rename = "classe2")]
    pub class_2: String,
    #[serde(rename = "level2", deserialize_with = "lenient::non_negative")]
    pub class_level_2: u32,
    #[serde(rename = "classe3")]
    pub class_3: String,
    #[serde(rename = "level3", deserialize_with = "lenient::non_negative")]
    pub class_level_3: u32,
    #[serde(rename = "classe4")]
    pub class_4: String,
    #[serde(rename = "level4", deserialize_with = "lenient::non_negative")]
    pub class_level_4: u32,

    // Combat
    stats: Stats,
    #[serde(rename = "levelGeral", deserialize_with = "lenient::non_negative")]
    level: u32,
    #[serde(rename = "hpActual", deserialize_with = "lenient::signed")]
    hp_current: i64,
    skills: Vec<Skill>,

    // Lists
    #[serde(rename = "talentos")]
    pub talents: Vec<Talent>,
    #[serde(rename = "inventario")]
    pub inventory: Vec<InventoryItem>,
    #[serde(rename = "equipe")]
    pub team: Vec<TeamMember>,
    #[serde(rename = "pcBoxes")]
    pub pc_boxes: Vec<PcBox>,
    #[serde(rename = "anotacoes")]
    pub notes: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TrainerCard {
    /// The sample trainer every new card starts from.
    fn default() -> Self {
        Self {
            character_name: "Carlos".to_string(),
            player: "Tulio".to_string(),
            concept: "Gotta catch'em all!".to_string(),
            age: 16,
            weight: "60kg".to_string(),
            height: "1,64".to_string(),
            hometown: "Pallet Town".to_string(),
            gender: "Masculino".to_string(),
            campaign: "-".to_string(),
            journey_days: 6,
            pokedex_count: 10,
            avatar: None,
            class_1: "Captor".to_string(),
            class_level_1: 3,
            class_2: "Colecionador".to_string(),
            class_level_2: 0,
            class_3: "Pokebolista".to_string(),
            class_level_3: 0,
            class_4: "Engenheiro".to_string(),
            class_level_4: 0,
            stats: Stats::new(14, 6, 6, 12, 14, 17),
            level: 2,
            hp_current: 64,
            skills: default_skills(),
            talents: vec![
                Talent {
                    name: "No Ponto Fraco!".to_string(),
                    description: "Adiciona +1 dano em ataques críticos.".to_string(),
                },
                Talent {
                    name: "Ponto de Captura".to_string(),
                    description: "Permite capturar Pokémon com +10% de chance.".to_string(),
                },
                Talent {
                    name: "Galera, Vê Só!".to_string(),
                    description: "Concede bônus de moral para a equipe.".to_string(),
                },
            ],
            inventory: vec![
                InventoryItem {
                    id: ItemId::from("1"),
                    name: "Kit de viagens".to_string(),
                    description: "Essencial para jornadas longas.".to_string(),
                    quantity: 1,
                },
                InventoryItem {
                    id: ItemId::from("2"),
                    name: "Poke Ball".to_string(),
                    description: "+25 no teste de captura".to_string(),
                    quantity: 3,
                },
            ],
            team: vec![
                TeamMember {
                    id: TeamMemberId::from("1"),
                    name: "Sprigatito".to_string(),
                    species: "Sprigatito".to_string(),
                    ball: "Poke Ball".to_string(),
                },
                TeamMember {
                    id: TeamMemberId::from("2"),
                    name: "Zigzagoon".to_string(),
                    species: "Zigzagoon".to_string(),
                    ball: "Poke Ball".to_string(),
                },
            ],
            pc_boxes: vec![PcBox::new(1, "Box 1")],
            notes: "Cidade - Borges. Amiga Mãe: Alex. Entregar Pacote para Emilia.".to_string(),
            extra: Map::new(),
        }
    }
}

impl TrainerCard {
    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp_current(&self) -> i64 {
        self.hp_current
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    /// Class name and level of a 1-based class box.
    pub fn class(&self, slot: u8) -> Option<(&str, u32)> {
        match slot {
            1 => Some((&self.class_1, self.class_level_1)),
            2 => Some((&self.class_2, self.class_level_2)),
            3 => Some((&self.class_3, self.class_level_3)),
            4 => Some((&self.class_4, self.class_level_4)),
            _ => None,
        }
    }

    pub fn hp_ceiling(&self) -> i64 {
        TrainerCardSystem::new().hp_ceiling(self.stats.health, self.level)
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self.repair_hp();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self.repair_hp();
        self
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self.normalize_skills();
        self
    }

    // =========================================================================
    // Invariant repair
    // =========================================================================

    /// Lower current HP to the ceiling if it is above it.
    ///
    /// Returns `true` when a change was made. Negative HP is left alone.
    pub fn repair_hp(&mut self) -> bool {
        let ceiling = self.hp_ceiling();
        if self.hp_current > ceiling {
            self.hp_current = ceiling;
            true
        } else {
            false
        }
    }

    /// Re-apply the health-gate rank rule to every skill.
    pub fn normalize_skills(&mut self) {
        self.skills.iter_mut().for_each(Skill::normalize);
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Apply one edit, then repair current HP if the edit touched it or
    /// moved the ceiling.
    pub fn apply(&mut self, edit: Edit) -> Result<EditOutcome, DomainError> {
        let ceiling_before = self.hp_ceiling();
        let hp_before = self.hp_current;

        self.apply_inner(edit)?;

        let hp_repaired = if self.hp_ceiling() != ceiling_before || self.hp_current != hp_before {
            self.repair_hp()
        } else {
            false
        };
        Ok(EditOutcome { hp_repaired })
    }

    fn apply_inner(&mut self, edit: Edit) -> Result<(), DomainError> {
        match edit {
            Edit::SetStat { stat, value } => self.stats.set_raw(stat, value),
            Edit::SetLevel(level) => self.level = lenient::clamp_non_negative(level),
            Edit::SetCurrentHp(input) => {
                // A malformed expression keeps the previous value
                if let Some(value) = input.resolve() {
                    self.hp_current = value.min(self.hp_ceiling());
                }
            }
            Edit::SetText { field, value } => *self.text_field_mut(field) = value,
            Edit::SetCount { field, value } => {
                *self.count_field_mut(field) = lenient::clamp_non_negative(value)
            }
            Edit::SetClassName { slot, name } => *self.class_mut(slot)?.0 = name,
            Edit::SetClassLevel { slot, level } => {
                *self.class_mut(slot)?.1 = lenient::clamp_non_negative(level)
            }
            Edit::SetAvatar(avatar) => self.avatar = avatar,
            Edit::SetNotes(notes) => self.notes = notes,
            Edit::SetSkillRank { skill, rank } => self.skill_mut(&skill)?.set_rank(rank),
            Edit::SetSkillBonus { skill, bonus } => self.skill_mut(&skill)?.bonus = bonus,
            Edit::AddTalent { name, description } => {
                let talent = Talent::from_input(&name, &description)
                    .ok_or_else(|| DomainError::validation("Talent name cannot be empty"))?;
                self.talents.push(talent);
            }
            Edit::RemoveTalent(index) => {
                if index >= self.talents.len() {
                    return Err(DomainError::not_found("Talent", index.to_string()));
                }
                self.talents.remove(index);
            }
            Edit::AddItem {
                name,
                description,
                quantity,
            } => {
                let item = InventoryItem::from_input(&name, &description, quantity.max(1))
                    .ok_or_else(|| DomainError::validation("Item name cannot be empty"))?;
                self.inventory.push(item);
            }
            Edit::AdjustItemQuantity { id, delta } => {
                let item = self
                    .inventory
                    .iter_mut()
                    .find(|item| item.id == id)
                    .ok_or_else(|| DomainError::not_found("InventoryItem", id.as_str()))?;
                item.adjust_quantity(delta);
            }
            Edit::RemoveItem(id) => {
                let before = self.inventory.len();
                self.inventory.retain(|item| item.id != id);
                if self.inventory.len() == before {
                    return Err(DomainError::not_found("InventoryItem", id.as_str()));
                }
            }
            Edit::AddTeamMember {
                name,
                species,
                ball,
            } => {
                let name = non_blank(&name)
                    .ok_or_else(|| DomainError::validation("Team member name cannot be empty"))?;
                self.team.push(TeamMember::new(name, species, ball));
            }
            Edit::RemoveTeamMember(id) => {
                let before = self.team.len();
                self.team.retain(|member| member.id != id);
                if self.team.len() == before {
                    return Err(DomainError::not_found("TeamMember", id.as_str()));
                }
            }
            Edit::CreatePokemon {
                box_index,
                slot,
                draft,
            } => {
                let pokemon = StoredPokemon::from_draft(&draft, slot);
                self.pc_box_mut(box_index)?.place(pokemon, slot)?;
            }
            Edit::PlacePokemon {
                box_index,
                slot,
                pokemon,
            } => self.pc_box_mut(box_index)?.place(*pokemon, slot)?,
            Edit::MovePokemon {
                box_index,
                from,
                to,
            } => {
                self.pc_box_mut(box_index)?.move_pokemon(from, to)?;
            }
            Edit::ReleasePokemon { box_index, slot } => {
                self.pc_box_mut(box_index)?
                    .release(slot)
                    .ok_or_else(|| DomainError::not_found("StoredPokemon", format!("slot {slot}")))?;
            }
            Edit::EditPokemon {
                box_index,
                slot,
                edit,
            } => {
                let pokemon = self
                    .pc_box_mut(box_index)?
                    .pokemon_at_mut(slot)
                    .ok_or_else(|| DomainError::not_found("StoredPokemon", format!("slot {slot}")))?;
                apply_pokemon_edit(pokemon, edit)?;
            }
        }
        Ok(())
    }

    fn text_field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::CharacterName => &mut self.character_name,
            TextField::Player => &mut self.player,
            TextField::Concept => &mut self.concept,
            TextField::Weight => &mut self.weight,
            TextField::Height => &mut self.height,
            TextField::Hometown => &mut self.hometown,
            TextField::Gender => &mut self.gender,
            TextField::Campaign => &mut self.campaign,
        }
    }

    fn count_field_mut(&mut self, field: CountField) -> &mut u32 {
        match field {
            CountField::Age => &mut self.age,
            CountField::JourneyDays => &mut self.journey_days,
            CountField::PokedexCount => &mut self.pokedex_count,
        }
    }

    fn class_mut(&mut self, slot: u8) -> Result<(&mut String, &mut u32), DomainError> {
        match slot {
            1 => Ok((&mut self.class_1, &mut self.class_level_1)),
            2 => Ok((&mut self.class_2, &mut self.class_level_2)),
            3 => Ok((&mut self.class_3, &mut self.class_level_3)),
            4 => Ok((&mut self.class_4, &mut self.class_level_4)),
            _ => Err(DomainError::validation(format!(
                "Class slot {slot} is outside 1..={CLASS_SLOTS}"
            ))),
        }
    }

    fn skill_mut(&mut self, name: &str) -> Result<&mut Skill, DomainError> {
        self.skills
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| DomainError::not_found("Skill", name))
    }

    fn pc_box_mut(&mut self, index: usize) -> Result<&mut PcBox, DomainError> {
        self.pc_boxes
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found("PcBox", index.to_string()))
    }
}

fn apply_pokemon_edit(pokemon: &mut StoredPokemon, edit: PokemonEdit) -> Result<(), DomainError> {
    match edit {
        PokemonEdit::Rename(name) => pokemon.name = name,
        PokemonEdit::SetLevel(level) => pokemon.set_level(lenient::clamp_non_negative(level)),
        PokemonEdit::SetStatComponent {
            stat,
            component,
            value,
        } => pokemon.set_stat_component(stat, component, value),
        PokemonEdit::SetCapability { kind, value } => pokemon.set_capability(kind, value),
        PokemonEdit::SetNature(name) => pokemon.set_nature(&name),
        PokemonEdit::SetMove { index, mv } => pokemon.set_move(index, mv)?,
        PokemonEdit::SetCurrentHp(input) => {
            if let Some(value) = input.resolve() {
                pokemon.hp.current = value;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::HpInput;
    use crate::entities::{PokemonDraft, StatComponent};
    use crate::value_objects::{SkillRank, Stat};

    #[test]
    fn default_card_is_consistent() {
        let card = TrainerCard::default();
        assert_eq!(card.hp_ceiling(), 64);
        assert_eq!(card.hp_current(), 64);
        assert_eq!(card.skills().len(), 24);
        assert_eq!(card.class(1), Some(("Captor", 3)));
        assert_eq!(card.class(5), None);
    }

    #[test]
    fn lowering_health_clamps_current_hp() {
        let mut card = TrainerCard::default().with_stats(Stats::new(10, 6, 6, 12, 14, 17));
        card.hp_current = 48;
        assert_eq!(card.hp_ceiling(), 48);

        let outcome = card
            .apply(Edit::SetStat {
                stat: Stat::Health,
                value: 8,
            })
            .unwrap();
        assert!(outcome.hp_repaired);
        assert_eq!(card.hp_ceiling(), 40);
        assert_eq!(card.hp_current(), 40);
    }

    #[test]
    fn raising_health_leaves_current_hp() {
        let mut card = TrainerCard::default();
        let outcome = card
            .apply(Edit::SetStat {
                stat: Stat::Health,
                value: 20,
            })
            .unwrap();
        assert!(!outcome.hp_repaired);
        assert_eq!(card.hp_current(), 64);
    }

    #[test]
    fn unrelated_edit_never_touches_hp() {
        let mut card = TrainerCard::default();
        card.hp_current = 30;
        card.apply(Edit::SetNotes("anything".to_string())).unwrap();
        card.apply(Edit::SetStat {
            stat: Stat::Speed,
            value: 2,
        })
        .unwrap();
        assert_eq!(card.hp_current(), 30);
    }

    #[test]
    fn negative_stat_and_level_are_stored_as_zero() {
        let mut card = TrainerCard::default();
        card.apply(Edit::SetStat {
            stat: Stat::Attack,
            value: -3,
        })
        .unwrap();
        card.apply(Edit::SetLevel(-1)).unwrap();
        assert_eq!(card.stats().attack, 0);
        assert_eq!(card.level(), 0);
    }

    #[test]
    fn current_hp_is_clamped_on_write() {
        let mut card = TrainerCard::default();
        card.apply(Edit::SetCurrentHp(HpInput::Value(100))).unwrap();
        assert_eq!(card.hp_current(), 64);
        card.apply(Edit::SetCurrentHp(HpInput::Expression("64-70".into())))
            .unwrap();
        assert_eq!(card.hp_current(), -6);
        card.apply(Edit::SetCurrentHp(HpInput::Expression("2*(".into())))
            .unwrap();
        assert_eq!(card.hp_current(), -6);
    }

    #[test]
    fn health_gated_skill_rank_is_capped() {
        let mut card = TrainerCard::default();
        card.apply(Edit::SetSkillRank {
            skill: "Apneia".to_string(),
            rank: SkillRank::Expert,
        })
        .unwrap();
        assert_eq!(card.skill("Apneia").map(|s| s.rank), Some(SkillRank::Trained));
    }

    #[test]
    fn unknown_skill_is_not_found() {
        let mut card = TrainerCard::default();
        let err = card
            .apply(Edit::SetSkillBonus {
                skill: "Voo".to_string(),
                bonus: 2,
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[test]
    fn talents_are_added_and_removed_by_position() {
        let mut card = TrainerCard::default();
        card.apply(Edit::AddTalent {
            name: " Treinador ".to_string(),
            description: String::new(),
        })
        .unwrap();
        assert_eq!(card.talents.len(), 4);
        assert_eq!(card.talents[3].name, "Treinador");

        card.apply(Edit::RemoveTalent(0)).unwrap();
        assert_eq!(card.talents[0].name, "Ponto de Captura");
        assert!(card.apply(Edit::RemoveTalent(10)).is_err());
        assert!(card
            .apply(Edit::AddTalent {
                name: "  ".to_string(),
                description: String::new()
            })
            .is_err());
    }

    #[test]
    fn item_quantity_floors_at_zero() {
        let mut card = TrainerCard::default();
        card.apply(Edit::AdjustItemQuantity {
            id: ItemId::from("1"),
            delta: -5,
        })
        .unwrap();
        assert_eq!(card.inventory[0].quantity, 0);
        card.apply(Edit::RemoveItem(ItemId::from("1"))).unwrap();
        assert_eq!(card.inventory.len(), 1);
    }

    #[test]
    fn added_item_has_at_least_one_unit() {
        let mut card = TrainerCard::default();
        card.apply(Edit::AddItem {
            name: "Potion".to_string(),
            description: String::new(),
            quantity: 0,
        })
        .unwrap();
        assert_eq!(card.inventory.last().map(|i| i.quantity), Some(1));
    }

    #[test]
    fn class_slots_are_one_based() {
        let mut card = TrainerCard::default();
        card.apply(Edit::SetClassName {
            slot: 2,
            name: "Pesquisador".to_string(),
        })
        .unwrap();
        card.apply(Edit::SetClassLevel { slot: 2, level: 4 }).unwrap();
        assert_eq!(card.class(2), Some(("Pesquisador", 4)));
        assert!(card
            .apply(Edit::SetClassLevel { slot: 0, level: 1 })
            .is_err());
    }

    #[test]
    fn pc_operations_through_edits() {
        let mut card = TrainerCard::default();
        card.apply(Edit::CreatePokemon {
            box_index: 0,
            slot: 2,
            draft: PokemonDraft {
                name: "Eevee".to_string(),
                level: 5,
                ..PokemonDraft::default()
            },
        })
        .unwrap();
        card.apply(Edit::EditPokemon {
            box_index: 0,
            slot: 2,
            edit: PokemonEdit::SetStatComponent {
                stat: Stat::Health,
                component: StatComponent::Level,
                value: 2,
            },
        })
        .unwrap();
        let pokemon = card.pc_boxes[0].pokemon_at(2).cloned().unwrap();
        assert_eq!(pokemon.hp.max, 51);

        card.apply(Edit::MovePokemon {
            box_index: 0,
            from: 2,
            to: 9,
        })
        .unwrap();
        assert!(card.pc_boxes[0].pokemon_at(9).is_some());

        card.apply(Edit::ReleasePokemon {
            box_index: 0,
            slot: 9,
        })
        .unwrap();
        assert_eq!(card.pc_boxes[0].occupied(), 0);
        assert!(card
            .apply(Edit::ReleasePokemon {
                box_index: 3,
                slot: 0
            })
            .is_err());
    }

    #[test]
    fn storage_keys_and_extra_fields_round_trip() {
        let mut card = TrainerCard::default();
        card.extra.insert("hpMax".to_string(), Value::from(64));
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["nomePersonagem"], "Carlos");
        assert_eq!(value["levelGeral"], 2);
        assert_eq!(value["hpActual"], 64);
        assert_eq!(value["stats"]["velocidade"], 17);
        assert_eq!(value["hpMax"], 64);
        assert_eq!(value["avatar"], Value::Null);

        let back: TrainerCard = serde_json::from_value(value).unwrap();
        assert_eq!(back, card);
    }
}
