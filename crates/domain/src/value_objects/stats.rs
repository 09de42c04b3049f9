//! Primary attribute block.

use serde::{Deserialize, Serialize};

use super::Stat;
use crate::common::lenient;

/// The six primary attributes.
///
/// Every field is non-negative by construction; raw edits go through
/// [`Stats::set_raw`] which clamps at 0. Stored documents are read leniently,
/// so a negative or non-numeric stored value loads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "saude", default, deserialize_with = "lenient::non_negative")]
    pub health: u32,
    #[serde(rename = "ataque", default, deserialize_with = "lenient::non_negative")]
    pub attack: u32,
    #[serde(rename = "defesa", default, deserialize_with = "lenient::non_negative")]
    pub defense: u32,
    #[serde(rename = "atqEspecial", default, deserialize_with = "lenient::non_negative")]
    pub special_attack: u32,
    #[serde(rename = "defEspecial", default, deserialize_with = "lenient::non_negative")]
    pub special_defense: u32,
    #[serde(rename = "velocidade", default, deserialize_with = "lenient::non_negative")]
    pub speed: u32,
}

impl Stats {
    pub fn new(
        health: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            health,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Same value for every stat.
    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Health => self.health,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        let slot = match stat {
            Stat::Health => &mut self.health,
            Stat::Attack => &mut self.attack,
            Stat::Defense => &mut self.defense,
            Stat::SpecialAttack => &mut self.special_attack,
            Stat::SpecialDefense => &mut self.special_defense,
            Stat::Speed => &mut self.speed,
        };
        *slot = value;
    }

    /// Store a raw signed value, clamping negatives to 0.
    pub fn set_raw(&mut self, stat: Stat, value: i64) {
        self.set(stat, lenient::clamp_non_negative(value));
    }

    /// Raw sum of all six values.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, value)| u64::from(value)).sum()
    }

    /// Iterate `(stat, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u32)> + '_ {
        Stat::all().into_iter().map(move |stat| (stat, self.get(stat)))
    }
}
