//! PC box - a fixed grid of creature slots

use serde::{Deserialize, Serialize};

use super::StoredPokemon;
use crate::common::lenient;
use crate::error::DomainError;

/// Number of slots in every box.
pub const SLOTS_PER_BOX: u32 = 30;

/// A storage box. Creatures carry their own slot index; at most one
/// creature occupies a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcBox {
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemons: Vec<StoredPokemon>,
}

impl PcBox {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pokemons: Vec::new(),
        }
    }

    pub fn pokemon_at(&self, slot: u32) -> Option<&StoredPokemon> {
        self.pokemons.iter().find(|p| p.slot == slot)
    }

    pub fn pokemon_at_mut(&mut self, slot: u32) -> Option<&mut StoredPokemon> {
        self.pokemons.iter_mut().find(|p| p.slot == slot)
    }

    pub fn occupied(&self) -> usize {
        self.pokemons.len()
    }

    /// Put a creature in `slot`, replacing whatever was there.
    pub fn place(&mut self, mut pokemon: StoredPokemon, slot: u32) -> Result<(), DomainError> {
        check_slot(slot)?;
        pokemon.slot = slot;
        self.pokemons.retain(|p| p.slot != slot);
        self.pokemons.push(pokemon);
        Ok(())
    }

    /// Move the creature in `from` to `to`, swapping with any occupant.
    ///
    /// Returns `false` when `from` is empty.
    pub fn move_pokemon(&mut self, from: u32, to: u32) -> Result<bool, DomainError> {
        check_slot(from)?;
        check_slot(to)?;
        let Some(source) = self.pokemons.iter().position(|p| p.slot == from) else {
            return Ok(false);
        };
        if let Some(target) = self.pokemons.iter().position(|p| p.slot == to) {
            self.pokemons[target].slot = from;
        }
        self.pokemons[source].slot = to;
        Ok(true)
    }

    /// Remove the creature in `slot`, if any.
    pub fn release(&mut self, slot: u32) -> Option<StoredPokemon> {
        let index = self.pokemons.iter().position(|p| p.slot == slot)?;
        Some(self.pokemons.remove(index))
    }
}

fn check_slot(slot: u32) -> Result<(), DomainError> {
    if slot < SLOTS_PER_BOX {
        Ok(())
    } else {
        Err(DomainError::slot_out_of_range(slot, SLOTS_PER_BOX))
    }
}
