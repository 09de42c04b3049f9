//! Game system traits for trainer card mechanics.
//!
//! The formulas behind every derived value sit behind [`CalculationEngine`]
//! so the derivation pass does not hard-code a rule set.

use crate::entities::Skill;
use crate::value_objects::Stats;

use super::derived::{Evasions, Movement, SkillTotal};

/// Calculation rules of a trainer card system.
///
/// Every method is a pure function of its arguments.
pub trait CalculationEngine: Send + Sync {
    /// Modifier of a primary attribute.
    ///
    /// floor((score - 10) / 2)
    fn attribute_modifier(&self, score: u32) -> i64;

    /// Maximum hit points of the trainer.
    fn hp_ceiling(&self, health: u32, level: u32) -> i64;

    /// Physical, special and speed evasion.
    fn evasions(&self, stats: &Stats) -> Evasions;

    /// Land, swim and dive movement, each derived from the previous one.
    fn movement(&self, speed: u32) -> Movement;

    /// Ceiling on the raw sum of the primary attributes.
    ///
    /// Must be non-decreasing in `level`.
    fn point_budget(&self, level: u32) -> i64;

    /// Maximum number of talents.
    ///
    /// Must be non-decreasing in `level`.
    fn talent_ceiling(&self, level: u32) -> i64;

    /// Advisory per-attribute ceiling; never enforced on write.
    fn stat_cap(&self, level: u32) -> i64;

    /// Total of a skill check given the current attributes.
    fn skill_total(&self, skill: &Skill, stats: &Stats) -> SkillTotal;

    /// Maximum hit points of a stored creature.
    fn creature_max_hp(&self, health: u32, level: u32) -> i64;
}
