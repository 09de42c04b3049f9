//! Trainer card game system implementation.
//!
//! Implements the level-indexed budgets and attribute-driven derivations of
//! the trainer card.

use super::derived::{Evasions, Movement, SkillTotal};
use super::traits::CalculationEngine;
use crate::entities::Skill;
use crate::value_objects::{SkillRank, Stats};

/// Level up to which budgets grow by one per level.
const LINEAR_LEVEL_LIMIT: u32 = 10;

/// Attribute points available at level 0.
const BASE_POINTS: i64 = 66;

/// Talents available at level 0.
const BASE_TALENTS: i64 = 2;

/// Advisory attribute ceiling at level 0.
const BASE_STAT_CAP: i64 = 14;

/// Hit points per point of health plus level.
const TRAINER_HP_FACTOR: i64 = 4;

/// Hit points per point of health plus level, for stored creatures.
const CREATURE_HP_FACTOR: i64 = 3;

/// Base land movement before speed.
const BASE_LAND_MOVEMENT: i64 = 5;

/// Budget that grows by one per level up to the linear limit, then by one
/// every two levels (on odd levels past the limit).
fn level_indexed_budget(base: i64, level: u32) -> i64 {
    if level <= LINEAR_LEVEL_LIMIT {
        base + i64::from(level)
    } else {
        base + i64::from(LINEAR_LEVEL_LIMIT) + i64::from((level - LINEAR_LEVEL_LIMIT).div_ceil(2))
    }
}

/// The trainer card rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainerCardSystem;

impl TrainerCardSystem {
    /// Create a new trainer card system instance.
    pub fn new() -> Self {
        Self
    }

    pub fn system_id(&self) -> &str {
        "trainer_card"
    }

    pub fn display_name(&self) -> &str {
        "Trainer Card"
    }
}

impl CalculationEngine for TrainerCardSystem {
    fn attribute_modifier(&self, score: u32) -> i64 {
        // Rust's / truncates toward zero; div_euclid floors for a positive divisor
        (i64::from(score) - 10).div_euclid(2)
    }

    fn hp_ceiling(&self, health: u32, level: u32) -> i64 {
        (i64::from(health) + i64::from(level)) * TRAINER_HP_FACTOR
    }

    fn evasions(&self, stats: &Stats) -> Evasions {
        Evasions {
            physical: i64::from(stats.defense / 5),
            special: i64::from(stats.special_defense / 5),
            speed: i64::from(stats.speed / 5),
        }
    }

    fn movement(&self, speed: u32) -> Movement {
        let land = BASE_LAND_MOVEMENT + i64::from(speed / 2);
        let swim = land / 2;
        let dive = swim / 2;
        Movement { land, swim, dive }
    }

    fn point_budget(&self, level: u32) -> i64 {
        level_indexed_budget(BASE_POINTS, level)
    }

    fn talent_ceiling(&self, level: u32) -> i64 {
        level_indexed_budget(BASE_TALENTS, level)
    }

    fn stat_cap(&self, level: u32) -> i64 {
        BASE_STAT_CAP + i64::from(level / 2)
    }

    fn skill_total(&self, skill: &Skill, stats: &Stats) -> SkillTotal {
        if skill.is_health_gated() {
            return SkillTotal::Gated {
                possessed: skill.rank >= SkillRank::Trained,
            };
        }

        let modifier = self.attribute_modifier(stats.get(skill.attr));
        match skill.rank {
            SkillRank::Untrained => SkillTotal::Untrained,
            SkillRank::Trained => {
                SkillTotal::Rated(modifier.saturating_add(2).saturating_add(skill.bonus))
            }
            SkillRank::Expert => SkillTotal::Rated(
                modifier
                    .saturating_mul(2)
                    .saturating_add(4)
                    .saturating_add(skill.bonus),
            ),
        }
    }

    fn creature_max_hp(&self, health: u32, level: u32) -> i64 {
        (i64::from(health) + i64::from(level)) * CREATURE_HP_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Stat;
    use proptest::prelude::*;

    #[test]
    fn attribute_modifier_calculation() {
        let system = TrainerCardSystem::new();
        assert_eq!(system.attribute_modifier(0), -5);
        assert_eq!(system.attribute_modifier(7), -2);
        assert_eq!(system.attribute_modifier(9), -1);
        assert_eq!(system.attribute_modifier(10), 0);
        assert_eq!(system.attribute_modifier(11), 0);
        assert_eq!(system.attribute_modifier(12), 1);
        assert_eq!(system.attribute_modifier(20), 5);
    }

    #[test]
    fn hp_ceiling_calculation() {
        let system = TrainerCardSystem::new();
        assert_eq!(system.hp_ceiling(14, 2), 64);
        assert_eq!(system.hp_ceiling(0, 0), 0);
    }

    #[test]
    fn evasions_divide_by_five() {
        let system = TrainerCardSystem::new();
        let stats = Stats::new(14, 6, 6, 12, 14, 17);
        assert_eq!(
            system.evasions(&stats),
            Evasions {
                physical: 1,
                special: 2,
                speed: 3
            }
        );
    }

    #[test]
    fn movement_chain() {
        let system = TrainerCardSystem::new();
        let expected = [
            (0, (5, 2, 1)),
            (1, (5, 2, 1)),
            (4, (7, 3, 1)),
            (5, (7, 3, 1)),
            (100, (55, 27, 13)),
        ];
        for (speed, (land, swim, dive)) in expected {
            assert_eq!(system.movement(speed), Movement { land, swim, dive }, "speed {speed}");
        }
    }

    #[test]
    fn point_budget_progression() {
        let system = TrainerCardSystem::new();
        for level in 0..=10 {
            assert_eq!(system.point_budget(level), 66 + i64::from(level));
        }
        assert_eq!(system.point_budget(10), 76);
        assert_eq!(system.point_budget(11), 77);
        assert_eq!(system.point_budget(12), 77);
        assert_eq!(system.point_budget(13), 78);
    }

    #[test]
    fn talent_ceiling_progression() {
        let system = TrainerCardSystem::new();
        for level in 0..=10 {
            assert_eq!(system.talent_ceiling(level), 2 + i64::from(level));
        }
        assert_eq!(system.talent_ceiling(11), 13);
        assert_eq!(system.talent_ceiling(12), 13);
        assert_eq!(system.talent_ceiling(13), 14);
    }

    #[test]
    fn stat_cap_grows_every_two_levels() {
        let system = TrainerCardSystem::new();
        assert_eq!(system.stat_cap(0), 14);
        assert_eq!(system.stat_cap(1), 14);
        assert_eq!(system.stat_cap(2), 15);
        assert_eq!(system.stat_cap(11), 19);
    }

    #[test]
    fn trained_skill_total() {
        let system = TrainerCardSystem::new();
        let stats = Stats::uniform(10);
        let skill = Skill::new("Acrobacia", Stat::Speed)
            .with_rank(SkillRank::Trained)
            .with_bonus(3);
        assert_eq!(system.skill_total(&skill, &stats), SkillTotal::Rated(5));
    }

    #[test]
    fn expert_skill_total() {
        let system = TrainerCardSystem::new();
        let stats = Stats::uniform(20);
        let skill = Skill::new("Acrobacia", Stat::Speed).with_rank(SkillRank::Expert);
        assert_eq!(system.skill_total(&skill, &stats), SkillTotal::Rated(14));
    }

    #[test]
    fn untrained_skill_has_no_total() {
        let system = TrainerCardSystem::new();
        let skill = Skill::new("Acrobacia", Stat::Speed).with_bonus(4);
        assert_eq!(system.skill_total(&skill, &Stats::uniform(20)), SkillTotal::Untrained);
    }

    #[test]
    fn health_gated_skill_is_binary() {
        let system = TrainerCardSystem::new();
        let stats = Stats::uniform(20);
        let skill = Skill::new("Apneia", Stat::Health);
        assert_eq!(
            system.skill_total(&skill, &stats),
            SkillTotal::Gated { possessed: false }
        );
        let skill = skill.with_rank(SkillRank::Trained).with_bonus(5);
        assert_eq!(
            system.skill_total(&skill, &stats),
            SkillTotal::Gated { possessed: true }
        );
    }

    #[test]
    fn extreme_bonus_saturates() {
        let system = TrainerCardSystem::new();
        let stats = Stats::uniform(20);
        let skill = Skill::new("Salto", Stat::Attack)
            .with_rank(SkillRank::Expert)
            .with_bonus(i64::MAX);
        assert_eq!(system.skill_total(&skill, &stats), SkillTotal::Rated(i64::MAX));
        let skill = skill.with_rank(SkillRank::Trained).with_bonus(i64::MIN);
        assert_eq!(system.skill_total(&skill, &Stats::uniform(0)), SkillTotal::Rated(i64::MIN));
    }

    #[test]
    fn creature_max_hp_uses_factor_three() {
        let system = TrainerCardSystem::new();
        assert_eq!(system.creature_max_hp(10, 5), 45);
    }

    proptest! {
        #[test]
        fn budgets_are_monotonic(level in 0u32..10_000) {
            let system = TrainerCardSystem::new();
            prop_assert!(system.point_budget(level + 1) >= system.point_budget(level));
            prop_assert!(system.talent_ceiling(level + 1) >= system.talent_ceiling(level));
        }

        #[test]
        fn budgets_past_the_limit_match_closed_form(level in 11u32..10_000) {
            let system = TrainerCardSystem::new();
            let extra = (i64::from(level) - 10 + 1) / 2;
            prop_assert_eq!(system.point_budget(level), 76 + extra);
            prop_assert_eq!(system.talent_ceiling(level), 12 + extra);
        }

        #[test]
        fn modifier_is_floor_of_half(score in 0u32..1_000) {
            let system = TrainerCardSystem::new();
            let expected = ((f64::from(score) - 10.0) / 2.0).floor() as i64;
            prop_assert_eq!(system.attribute_modifier(score), expected);
        }
    }
}
