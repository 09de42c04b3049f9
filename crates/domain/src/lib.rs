//! Trainer card domain: the record, its derivation rules and the load-time
//! migration of stored documents. No I/O happens in this crate.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod migration;
pub mod value_objects;

pub use aggregates::{Edit, EditOutcome, HpInput, PokemonEdit, TrainerCard, CLASS_SLOTS};

pub use entities::{
    default_skills, parse_types, Capabilities, Capability, CreatureEvasions, CreatureGender,
    CreatureHp, CreatureMovements, CreatureStats, InventoryItem, MoveCategory, NamedDescription,
    OtherCapability, PcBox, PokemonDraft, PokemonMove, Skill, StatComponent, StoredPokemon,
    Talent, TeamMember, MAX_MOVES, NO_DESCRIPTION, SLOTS_PER_BOX,
};

pub use error::DomainError;

pub use game_systems::{
    derive_all, derive_with, nature, nature_features, Advisory, CalculationEngine,
    CapabilityKind, DerivedStats, Evasions, Movement, Nature, SkillLine, SkillTotal, StatLine,
    TrainerCardSystem, NATURES,
};

pub use ids::{ItemId, PokemonId, TeamMemberId};

pub use migration::{migrate_document, overlay_defaults, parse_import, resolve_stored, DocumentError};

pub use value_objects::{
    evaluate_expression, parse_int_lenient, resolve_arithmetic_input, sanitize_expression,
    CountField, ExpressionError, SkillRank, Stat, Stats, TextField,
};
