//! Editing session - owns the live trainer card
//!
//! The session is the only writer of the record. Every committed edit is
//! applied to a copy, repaired, re-derived and then persisted; storage
//! failures are logged and never undo an edit.

use thiserror::Error;
use trainercard_domain::common::file_slug;
use trainercard_domain::{
    derive_all, parse_import, resolve_stored, DerivedStats, DocumentError, DomainError, Edit,
    EditOutcome, TrainerCard,
};

use crate::ports::{storage_keys, StorageError, StorageProvider};

/// File name stem used when the character has no name.
const DEFAULT_EXPORT_NAME: &str = "trainer";

/// Why an import was rejected. The live record is unchanged.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid trainer card file: {0}")]
    Invalid(#[from] DocumentError),
}

/// A pretty-printed card ready to be written to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedSheet {
    pub file_name: String,
    pub contents: String,
}

pub struct TrainerCardSession<S: StorageProvider> {
    storage: S,
    card: TrainerCard,
    derived: DerivedStats,
}

impl<S: StorageProvider> TrainerCardSession<S> {
    /// Load the stored card, migrating older documents.
    ///
    /// Unreadable storage is treated as empty storage.
    pub fn open(storage: S) -> Self {
        let raw = match storage.load(storage_keys::TRAINER_CARD) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load trainer card, starting from defaults");
                None
            }
        };

        let mut card = resolve_stored(raw.as_deref());
        if card.repair_hp() {
            tracing::info!(hp = card.hp_current(), "Current HP lowered to the HP ceiling on load");
        }
        let derived = derive_all(&card);

        tracing::info!(name = %card.character_name, level = card.level(), "Trainer card loaded");

        let session = Self {
            storage,
            card,
            derived,
        };
        if let Some(stored) = raw.as_deref() {
            session.write_back_if_changed(stored);
        }
        session
    }

    pub fn card(&self) -> &TrainerCard {
        &self.card
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Commit one edit. A rejected edit leaves the record untouched.
    pub fn apply(&mut self, edit: Edit) -> Result<EditOutcome, DomainError> {
        let kind = edit.kind();
        let mut next = self.card.clone();
        let outcome = next.apply(edit).inspect_err(|e| {
            tracing::debug!(edit = kind, error = %e, "Edit rejected");
        })?;

        if outcome.hp_repaired {
            tracing::debug!(edit = kind, hp = next.hp_current(), "Current HP lowered to the HP ceiling");
        }

        self.replace(next);
        Ok(outcome)
    }

    /// Pretty-printed JSON of the live record and its file name.
    pub fn export(&self) -> Result<ExportedSheet, serde_json::Error> {
        let contents = serde_json::to_string_pretty(&self.card)?;
        Ok(ExportedSheet {
            file_name: export_file_name(&self.card.character_name),
            contents,
        })
    }

    /// Replace the live record with an imported document.
    ///
    /// The document is overlaid on the defaults without the load-time
    /// talent and skill migrations.
    pub fn import(&mut self, raw: &str) -> Result<(), ImportError> {
        let mut card = parse_import(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "Import rejected");
        })?;
        card.repair_hp();

        tracing::info!(name = %card.character_name, "Trainer card imported");
        self.replace(card);
        Ok(())
    }

    /// Go back to the default card and clear the stored document.
    pub fn reset(&mut self) {
        self.card = TrainerCard::default();
        self.derived = derive_all(&self.card);
        if let Err(e) = self.storage.remove(storage_keys::TRAINER_CARD) {
            tracing::error!(error = %e, "Failed to clear stored trainer card");
        }
        tracing::info!("Trainer card reset");
    }

    /// Write the live record to storage.
    pub fn save(&self) -> Result<(), StorageError> {
        let document = serde_json::to_string(&self.card)?;
        self.storage.save(storage_keys::TRAINER_CARD, &document)
    }

    /// Persist the loaded record when migration or repair changed the
    /// stored document.
    fn write_back_if_changed(&self, stored: &str) {
        match serde_json::to_string(&self.card) {
            Ok(current) if current == stored => {}
            Ok(_) => match self.save() {
                Ok(()) => tracing::debug!("Stored trainer card rewritten after load"),
                Err(e) => tracing::error!(error = %e, "Failed to persist migrated trainer card"),
            },
            Err(e) => tracing::warn!(error = %e, "Failed to encode loaded trainer card"),
        }
    }

    fn replace(&mut self, card: TrainerCard) {
        self.card = card;
        self.derived = derive_all(&self.card);
        if let Err(e) = self.save() {
            tracing::error!(error = %e, "Failed to persist trainer card");
        }
    }
}

/// `sheet_<name>.json`, with the name lower-cased and whitespace replaced.
pub fn export_file_name(character_name: &str) -> String {
    let stem = file_slug(character_name).unwrap_or_else(|| DEFAULT_EXPORT_NAME.to_string());
    format!("sheet_{stem}.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorageProvider;
    use crate::ports::MockStorageProvider;
    use mockall::predicate::eq;
    use trainercard_domain::{HpInput, SkillRank, Stat, Stats};

    fn stored(card: &TrainerCard) -> MemoryStorageProvider {
        let storage = MemoryStorageProvider::new();
        storage
            .save(storage_keys::TRAINER_CARD, &serde_json::to_string(card).unwrap())
            .unwrap();
        storage
    }

    fn stored_card(storage: &MemoryStorageProvider) -> Option<TrainerCard> {
        storage
            .load(storage_keys::TRAINER_CARD)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn open_empty_storage_uses_defaults() {
        let session = TrainerCardSession::open(MemoryStorageProvider::new());
        assert_eq!(session.card(), &TrainerCard::default());
        assert_eq!(session.derived().hp_ceiling, 64);
    }

    #[test]
    fn open_migrates_legacy_document() {
        let storage = MemoryStorageProvider::new();
        storage
            .save(storage_keys::TRAINER_CARD, r#"{"nomePersonagem":"Ash","talentos":["Tackle"]}"#)
            .unwrap();

        let session = TrainerCardSession::open(storage);
        assert_eq!(session.card().character_name, "Ash");
        assert_eq!(session.card().talents[0].name, "Tackle");
        assert_eq!(session.card().skills().len(), 24);
    }

    #[test]
    fn open_repairs_hp_above_ceiling() {
        let storage = MemoryStorageProvider::new();
        storage
            .save(storage_keys::TRAINER_CARD, r#"{"hpActual": 500}"#)
            .unwrap();
        let session = TrainerCardSession::open(storage.clone());
        assert_eq!(session.card().hp_current(), 64);
        assert_eq!(stored_card(&storage).unwrap().hp_current(), 64);
    }

    #[test]
    fn open_writes_back_migrated_document() {
        let storage = MemoryStorageProvider::new();
        storage
            .save(storage_keys::TRAINER_CARD, r#"{"talentos":["Tackle"]}"#)
            .unwrap();

        let session = TrainerCardSession::open(storage.clone());
        let raw = storage.load(storage_keys::TRAINER_CARD).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["talentos"][0]["name"], "Tackle");
        assert_eq!(value["skills"].as_array().map(Vec::len), Some(24));
        assert_eq!(stored_card(&storage).unwrap(), *session.card());
    }

    #[test]
    fn open_leaves_current_document_alone() {
        let current = serde_json::to_string(&TrainerCard::default()).unwrap();
        let mut storage = MockStorageProvider::new();
        storage
            .expect_load()
            .returning(move |_| Ok(Some(current.clone())));
        storage.expect_save().never();

        let session = TrainerCardSession::open(storage);
        assert_eq!(session.card(), &TrainerCard::default());
    }

    #[test]
    fn open_with_empty_storage_writes_nothing() {
        let mut storage = MockStorageProvider::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().never();

        let _session = TrainerCardSession::open(storage);
    }

    #[test]
    fn open_survives_storage_failure() {
        let mut storage = MockStorageProvider::new();
        storage
            .expect_load()
            .with(eq(storage_keys::TRAINER_CARD))
            .times(1)
            .returning(|_| Err(StorageError::LockPoisoned));

        let session = TrainerCardSession::open(storage);
        assert_eq!(session.card(), &TrainerCard::default());
    }

    #[test]
    fn apply_persists_and_rederives() {
        let storage = MemoryStorageProvider::new();
        let mut session = TrainerCardSession::open(storage.clone());

        session
            .apply(Edit::SetStat {
                stat: Stat::Speed,
                value: 4,
            })
            .unwrap();

        assert_eq!(session.derived().movement.land, 7);
        let persisted = stored_card(&storage).unwrap();
        assert_eq!(persisted.stats().speed, 4);
    }

    #[test]
    fn apply_keeps_edit_when_save_fails() {
        let mut storage = MockStorageProvider::new();
        storage.expect_load().returning(|_| Ok(None));
        storage
            .expect_save()
            .times(1)
            .returning(|_, _| Err(StorageError::LockPoisoned));

        let mut session = TrainerCardSession::open(storage);
        session.apply(Edit::SetLevel(5)).unwrap();
        assert_eq!(session.card().level(), 5);
    }

    #[test]
    fn rejected_edit_is_not_persisted() {
        let mut storage = MockStorageProvider::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().never();

        let mut session = TrainerCardSession::open(storage);
        let result = session.apply(Edit::SetSkillRank {
            skill: "Nope".to_string(),
            rank: SkillRank::Trained,
        });
        assert!(result.is_err());
        assert_eq!(session.card(), &TrainerCard::default());
    }

    #[test]
    fn decreasing_health_clamps_hp_through_session() {
        let card = TrainerCard::default().with_stats(Stats::new(10, 6, 6, 12, 14, 17));
        let mut session = TrainerCardSession::open(stored(&card));
        session.apply(Edit::SetCurrentHp(HpInput::Value(48))).unwrap();

        let outcome = session
            .apply(Edit::SetStat {
                stat: Stat::Health,
                value: 8,
            })
            .unwrap();
        assert!(outcome.hp_repaired);
        assert_eq!(session.card().hp_current(), 40);
        assert_eq!(session.derived().hp_ceiling, 40);
    }

    #[test]
    fn export_names_file_after_character() {
        let mut session = TrainerCardSession::open(MemoryStorageProvider::new());
        session
            .apply(Edit::SetText {
                field: trainercard_domain::TextField::CharacterName,
                value: "Ash Ketchum".to_string(),
            })
            .unwrap();

        let sheet = session.export().unwrap();
        assert_eq!(sheet.file_name, "sheet_ash_ketchum.json");
        assert!(sheet.contents.contains("\n  \"nomePersonagem\": \"Ash Ketchum\""));
    }

    #[test]
    fn export_file_name_falls_back_when_blank() {
        assert_eq!(export_file_name(""), "sheet_trainer.json");
        assert_eq!(export_file_name("   "), "sheet_trainer.json");
        assert_eq!(export_file_name("Misty"), "sheet_misty.json");
    }

    #[test]
    fn import_replaces_record_and_persists() {
        let storage = MemoryStorageProvider::new();
        let mut session = TrainerCardSession::open(storage.clone());

        session
            .import(r#"{"nomePersonagem": "Brock", "levelGeral": 4}"#)
            .unwrap();

        assert_eq!(session.card().character_name, "Brock");
        assert_eq!(session.card().level(), 4);
        assert_eq!(session.card().player, "Tulio");
        assert_eq!(session.derived().point_budget, 70);
        assert_eq!(stored_card(&storage).unwrap().character_name, "Brock");
    }

    #[test]
    fn malformed_import_leaves_record_unchanged() {
        let storage = MemoryStorageProvider::new();
        let mut session = TrainerCardSession::open(storage.clone());
        session.apply(Edit::SetLevel(7)).unwrap();
        let before = session.card().clone();

        assert!(session.import("{ definitely not json").is_err());
        assert!(session.import("[]").is_err());
        assert!(session.import(r#"{"talentos": ["Tackle"]}"#).is_err());

        assert_eq!(session.card(), &before);
        assert_eq!(stored_card(&storage).unwrap(), before);
    }

    #[test]
    fn export_then_import_restores_card() {
        let mut session = TrainerCardSession::open(MemoryStorageProvider::new());
        session.apply(Edit::SetLevel(12)).unwrap();
        let sheet = session.export().unwrap();
        let exported = session.card().clone();

        session.reset();
        session.import(&sheet.contents).unwrap();
        assert_eq!(session.card(), &exported);
    }

    #[test]
    fn reset_restores_defaults_and_clears_storage() {
        let storage = MemoryStorageProvider::new();
        let mut session = TrainerCardSession::open(storage.clone());
        session.apply(Edit::SetLevel(9)).unwrap();
        assert!(stored_card(&storage).is_some());

        session.reset();
        assert_eq!(session.card(), &TrainerCard::default());
        assert!(stored_card(&storage).is_none());
    }
}
