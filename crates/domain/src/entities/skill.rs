//! Skill entity - proficiency entries on the trainer card
//!
//! Skills are keyed by name. The built-in catalogue holds four skills per
//! primary attribute; users may also carry skills that are not in it.

use serde::{Deserialize, Serialize};

use crate::common::lenient;
use crate::value_objects::{SkillRank, Stat};

/// A skill line on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Identity key, unique within the skill list
    pub name: String,
    /// Governing attribute; health makes the skill health-gated
    pub attr: Stat,
    #[serde(rename = "ranks", default)]
    pub rank: SkillRank,
    /// Flat bonus added to trained totals
    #[serde(default, deserialize_with = "lenient::signed")]
    pub bonus: i64,
}

impl Skill {
    pub fn new(name: impl Into<String>, attr: Stat) -> Self {
        Self {
            name: name.into(),
            attr,
            rank: SkillRank::Untrained,
            bonus: 0,
        }
    }

    pub fn with_rank(mut self, rank: SkillRank) -> Self {
        self.set_rank(rank);
        self
    }

    pub fn with_bonus(mut self, bonus: i64) -> Self {
        self.bonus = bonus;
        self
    }

    /// Health-gated skills are possessed or not; they have no numeric total.
    pub fn is_health_gated(&self) -> bool {
        self.attr.is_health_gated()
    }

    /// Set the rank, clamping Expert to Trained for health-gated skills.
    pub fn set_rank(&mut self, rank: SkillRank) {
        self.rank = if self.is_health_gated() {
            rank.capped_for_health_gate()
        } else {
            rank
        };
    }

    /// Re-apply the rank rule to a value that came from storage.
    pub fn normalize(&mut self) {
        self.set_rank(self.rank);
    }
}

/// Built-in catalogue, in sheet order
const DEFAULT_SKILLS: [(&str, Stat); 24] = [
    ("Apneia", Stat::Health),
    ("Imunidade", Stat::Health),
    ("Jejum", Stat::Health),
    ("Resiliência", Stat::Health),
    ("Corrida", Stat::Attack),
    ("Força", Stat::Attack),
    ("Intimidação", Stat::Attack),
    ("Salto", Stat::Attack),
    ("Concentração", Stat::Defense),
    ("Deflexão", Stat::Defense),
    ("Incansável", Stat::Defense),
    ("Regeneração", Stat::Defense),
    ("Engenharia", Stat::SpecialAttack),
    ("História", Stat::SpecialAttack),
    ("Investigação", Stat::SpecialAttack),
    ("Programação", Stat::SpecialAttack),
    ("Empatia", Stat::SpecialDefense),
    ("Manipulação", Stat::SpecialDefense),
    ("Manha", Stat::SpecialDefense),
    ("Percepção", Stat::SpecialDefense),
    ("Acrobacia", Stat::Speed),
    ("Furtividade", Stat::Speed),
    ("Performance", Stat::Speed),
    ("Prestidigitação", Stat::Speed),
];

/// The default skill catalogue, every entry untrained with no bonus.
pub fn default_skills() -> Vec<Skill> {
    DEFAULT_SKILLS
        .iter()
        .map(|(name, attr)| Skill::new(*name, *attr))
        .collect()
}
