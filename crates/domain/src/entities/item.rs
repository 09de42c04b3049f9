//! Inventory item - an entry in the trainer's backpack

use serde::{Deserialize, Serialize};

use crate::common::{lenient, non_blank};
use crate::ids::ItemId;

use super::NO_DESCRIPTION;

/// A stack of items carried by the trainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::non_negative")]
    pub quantity: u32,
}

impl InventoryItem {
    /// Build an item from form input; `None` when the name is blank.
    ///
    /// The name is kept as typed (only checked for content); a blank
    /// description becomes [`NO_DESCRIPTION`].
    pub fn from_input(name: &str, description: &str, quantity: u32) -> Option<Self> {
        non_blank(name)?;
        Some(Self {
            id: ItemId::new(),
            name: name.to_string(),
            description: if description.is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                description.to_string()
            },
            quantity,
        })
    }

    /// Add `delta` to the quantity, never going below zero.
    pub fn adjust_quantity(&mut self, delta: i64) {
        self.quantity = lenient::clamp_non_negative(i64::from(self.quantity).saturating_add(delta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(InventoryItem::from_input(" ", "", 1).is_none());
    }

    #[test]
    fn empty_description_gets_placeholder() {
        let item = InventoryItem::from_input("Poke Ball", "", 3).unwrap();
        assert_eq!(item.description, NO_DESCRIPTION);
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn quantity_never_goes_negative() {
        let mut item = InventoryItem::from_input("Potion", "Heals", 1).unwrap();
        item.adjust_quantity(-1);
        assert_eq!(item.quantity, 0);
        item.adjust_quantity(-1);
        assert_eq!(item.quantity, 0);
        item.adjust_quantity(2);
        assert_eq!(item.quantity, 2);
        item.adjust_quantity(i64::MAX);
        assert_eq!(item.quantity, u32::MAX);
    }
}
