//! Closed set of editable profile fields.
//!
//! Profile edits name their target with these enums instead of a free-form
//! key, so an edit can never address a field the record does not have.

use std::str::FromStr;

use crate::error::DomainError;

/// Free-text profile fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    CharacterName,
    Player,
    Concept,
    Weight,
    Height,
    Hometown,
    Gender,
    Campaign,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::CharacterName => "Identidade",
            Self::Player => "Jogador",
            Self::Concept => "Frase",
            Self::Weight => "Peso",
            Self::Height => "Altura",
            Self::Hometown => "Naturalidade",
            Self::Gender => "Gênero",
            Self::Campaign => "Campanha",
        }
    }
}

impl FromStr for TextField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" | "nomepersonagem" => Ok(Self::CharacterName),
            "player" | "jogador" => Ok(Self::Player),
            "concept" | "conceito" => Ok(Self::Concept),
            "weight" | "peso" => Ok(Self::Weight),
            "height" | "altura" => Ok(Self::Height),
            "hometown" | "naturalidade" => Ok(Self::Hometown),
            "gender" | "genero" => Ok(Self::Gender),
            "campaign" | "campanha" => Ok(Self::Campaign),
            other => Err(DomainError::parse(format!("Unknown text field: {}", other))),
        }
    }
}

/// Non-negative counter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountField {
    Age,
    JourneyDays,
    PokedexCount,
}

impl CountField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Idade",
            Self::JourneyDays => "Dias Jornada",
            Self::PokedexCount => "Pokedex",
        }
    }
}

impl FromStr for CountField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "age" | "idade" => Ok(Self::Age),
            "journey-days" | "diasjornada" => Ok(Self::JourneyDays),
            "pokedex" | "pokedexcount" => Ok(Self::PokedexCount),
            other => Err(DomainError::parse(format!("Unknown count field: {}", other))),
        }
    }
}
