//! Talent entity - named feats with a short description

use serde::{Deserialize, Serialize};

use crate::common::non_blank;

/// Description given to talents and items entered without one.
pub const NO_DESCRIPTION: &str = "No description.";

/// A talent the trainer has acquired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
}

fn default_description() -> String {
    NO_DESCRIPTION.to_string()
}

impl Talent {
    /// Build a talent from form input.
    ///
    /// Returns `None` when the name is blank. Both fields are trimmed and a
    /// blank description becomes [`NO_DESCRIPTION`].
    pub fn from_input(name: &str, description: &str) -> Option<Self> {
        let name = non_blank(name)?;
        Some(Self {
            name: name.to_string(),
            description: non_blank(description)
                .map(str::to_string)
                .unwrap_or_else(default_description),
        })
    }

    /// Wrap a bare talent name from the older list-of-strings shape.
    pub fn from_legacy_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: default_description(),
        }
    }
}
