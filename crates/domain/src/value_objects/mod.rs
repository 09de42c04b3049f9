//! Value objects - immutable pieces of the trainer card without identity

mod numeric_input;
mod profile_field;
mod rank;
mod stat;
mod stats;

pub use numeric_input::{
    evaluate_expression, parse_int_lenient, resolve_arithmetic_input, sanitize_expression,
    ExpressionError,
};
pub use profile_field::{CountField, TextField};
pub use rank::SkillRank;
pub use stat::Stat;
pub use stats::Stats;
