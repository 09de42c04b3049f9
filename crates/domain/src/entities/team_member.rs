//! Team member - a creature travelling with the trainer

use serde::{Deserialize, Serialize};

use crate::ids::TeamMemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub id: TeamMemberId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub ball: String,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, species: impl Into<String>, ball: impl Into<String>) -> Self {
        Self {
            id: TeamMemberId::new(),
            name: name.into(),
            species: species.into(),
            ball: ball.into(),
        }
    }
}
