//! Trainer card game system.
//!
//! The rule formulas sit behind [`CalculationEngine`]; [`TrainerCardSystem`]
//! implements them and [`derive_all`] applies them to a whole record.
//! Creature lookup tables live in `tables`.

mod derived;
mod tables;
mod trainer_card;
mod traits;

pub use derived::{
    derive_all, derive_with, Advisory, DerivedStats, Evasions, Movement, SkillLine, SkillTotal,
    StatLine,
};
pub use tables::{nature, nature_features, CapabilityKind, Nature, NATURES};
pub use trainer_card::TrainerCardSystem;
pub use traits::CalculationEngine;
