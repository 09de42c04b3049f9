//! Entities of the trainer card record.

mod item;
mod pc_box;
mod pokemon;
mod skill;
mod talent;
mod team_member;

pub use item::InventoryItem;
pub use pc_box::{PcBox, SLOTS_PER_BOX};
pub use pokemon::{
    parse_types, Capabilities, Capability, CreatureEvasions, CreatureGender, CreatureHp,
    CreatureMovements, CreatureStats, MoveCategory, NamedDescription, OtherCapability,
    PokemonDraft, PokemonMove, StatComponent, StoredPokemon, MAX_MOVES,
};
pub use skill::{default_skills, Skill};
pub use talent::{Talent, NO_DESCRIPTION};
pub use team_member::TeamMember;
