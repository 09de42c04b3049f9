//! Aggregates - the trainer card record and the edits it accepts.

mod edit;
mod trainer_card;

pub use edit::{Edit, EditOutcome, HpInput, PokemonEdit};
pub use trainer_card::{TrainerCard, CLASS_SLOTS};
