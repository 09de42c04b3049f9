//! Derived snapshot of a trainer card.
//!
//! Nothing here is persisted; [`derive_all`] recomputes everything from the
//! record after each committed edit.

use std::fmt;

use serde::{Serialize, Serializer};

use super::traits::CalculationEngine;
use super::trainer_card::TrainerCardSystem;
use crate::aggregates::TrainerCard;
use crate::value_objects::{SkillRank, Stat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evasions {
    pub physical: i64,
    pub special: i64,
    pub speed: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movement {
    pub land: i64,
    pub swim: i64,
    pub dive: i64,
}

/// Result of a skill check line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTotal {
    /// Rank 0: the bare die is rolled
    Untrained,
    /// Trained or expert total
    Rated(i64),
    /// Health-gated skills are either possessed or not
    Gated { possessed: bool },
}

impl fmt::Display for SkillTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untrained => write!(f, "d20"),
            Self::Rated(total) => write!(f, "{total:+}"),
            Self::Gated { possessed: true } => write!(f, "SIM"),
            Self::Gated { possessed: false } => write!(f, "-"),
        }
    }
}

impl Serialize for SkillTotal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLine {
    pub name: String,
    pub attr: Stat,
    pub rank: SkillRank,
    pub bonus: i64,
    pub total: SkillTotal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatLine {
    pub stat: Stat,
    pub value: u32,
    pub modifier: i64,
    pub over_cap: bool,
}

/// Soft limit exceeded by the current record. Never blocks an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    PointsOverBudget { spent: u64, budget: i64 },
    TalentsOverCeiling { count: usize, ceiling: i64 },
    StatOverCap { stat: Stat, value: u32, cap: i64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointsOverBudget { spent, budget } => {
                write!(f, "{spent} attribute points spent, budget is {budget}")
            }
            Self::TalentsOverCeiling { count, ceiling } => {
                write!(f, "{count} talents, ceiling is {ceiling}")
            }
            Self::StatOverCap { stat, value, cap } => {
                write!(f, "{} is {value}, cap is {cap}", stat.display_name())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub hp_ceiling: i64,
    pub evasions: Evasions,
    pub movement: Movement,
    pub point_budget: i64,
    pub spent_points: u64,
    pub talent_ceiling: i64,
    pub talent_count: usize,
    pub stat_cap: i64,
    pub stats: Vec<StatLine>,
    pub skills: Vec<SkillLine>,
}

impl DerivedStats {
    pub fn over_budget(&self) -> bool {
        i64::try_from(self.spent_points).map_or(true, |spent| spent > self.point_budget)
    }

    pub fn over_talent_ceiling(&self) -> bool {
        i64::try_from(self.talent_count).map_or(true, |count| count > self.talent_ceiling)
    }

    pub fn stats_over_cap(&self) -> Vec<Stat> {
        self.stats
            .iter()
            .filter(|line| line.over_cap)
            .map(|line| line.stat)
            .collect()
    }

    pub fn skill(&self, name: &str) -> Option<&SkillLine> {
        self.skills.iter().find(|line| line.name == name)
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();
        if self.over_budget() {
            advisories.push(Advisory::PointsOverBudget {
                spent: self.spent_points,
                budget: self.point_budget,
            });
        }
        if self.over_talent_ceiling() {
            advisories.push(Advisory::TalentsOverCeiling {
                count: self.talent_count,
                ceiling: self.talent_ceiling,
            });
        }
        advisories.extend(self.stats.iter().filter(|line| line.over_cap).map(|line| {
            Advisory::StatOverCap {
                stat: line.stat,
                value: line.value,
                cap: self.stat_cap,
            }
        }));
        advisories
    }
}

/// Derive every value of the card with the trainer card rules.
pub fn derive_all(card: &TrainerCard) -> DerivedStats {
    derive_with(&TrainerCardSystem::new(), card)
}

/// Derive every value of the card with an arbitrary rule set.
pub fn derive_with(engine: &dyn CalculationEngine, card: &TrainerCard) -> DerivedStats {
    let level = card.level();
    let stats = card.stats();
    let stat_cap = engine.stat_cap(level);

    DerivedStats {
        hp_ceiling: engine.hp_ceiling(stats.health, level),
        evasions: engine.evasions(stats),
        movement: engine.movement(stats.speed),
        point_budget: engine.point_budget(level),
        spent_points: stats.total(),
        talent_ceiling: engine.talent_ceiling(level),
        talent_count: card.talents.len(),
        stat_cap,
        stats: stats
            .iter()
            .map(|(stat, value)| StatLine {
                stat,
                value,
                modifier: engine.attribute_modifier(value),
                over_cap: i64::from(value) > stat_cap,
            })
            .collect(),
        skills: card
            .skills()
            .iter()
            .map(|skill| SkillLine {
                name: skill.name.clone(),
                attr: skill.attr,
                rank: skill.rank,
                bonus: skill.bonus,
                total: engine.skill_total(skill, stats),
            })
            .collect(),
    }
}
