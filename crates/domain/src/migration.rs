//! Load-time migration of stored trainer card documents.
//!
//! Documents written by older editor versions differ from the current
//! record: talents were bare strings and the skill list was missing or
//! shorter. [`resolve_stored`] runs once per load:
//!
//! 1. parse the stored text (anything unusable yields the default card)
//! 2. turn bare-string talents into `{name, description}` objects
//! 3. merge the default skill catalogue into the stored skill list
//! 4. overlay the document on the default card, key by key
//!
//! Imports only run step 4, see [`parse_import`].

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::aggregates::TrainerCard;
use crate::entities::{default_skills, Talent};

const TALENTS_KEY: &str = "talentos";
const SKILLS_KEY: &str = "skills";

/// Why a document could not become a trainer card.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("Document does not match the trainer card shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Resolve the stored text of a card into the live record.
///
/// Never fails: a missing, unparsable or mis-shaped document yields
/// [`TrainerCard::default`].
pub fn resolve_stored(raw: Option<&str>) -> TrainerCard {
    let Some(raw) = raw else {
        tracing::debug!("No stored trainer card, starting from defaults");
        return TrainerCard::default();
    };

    match resolve_document(raw) {
        Ok(card) => card,
        Err(e) => {
            tracing::warn!(error = %e, "Stored trainer card is unusable, starting from defaults");
            TrainerCard::default()
        }
    }
}

fn resolve_document(raw: &str) -> Result<TrainerCard, DocumentError> {
    let document = parse_object(raw)?;
    overlay_defaults(migrate_document(document))
}

/// Parse an imported document: overlay on defaults, no migration.
///
/// Documents still holding bare-string talents are rejected here because
/// the talent migration only runs on load.
pub fn parse_import(raw: &str) -> Result<TrainerCard, DocumentError> {
    overlay_defaults(parse_object(raw)?)
}

fn parse_object(raw: &str) -> Result<Map<String, Value>, DocumentError> {
    match serde_json::from_str(raw).map_err(DocumentError::InvalidJson)? {
        Value::Object(map) => Ok(map),
        other => Err(DocumentError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Apply the talent and skill migrations to a raw document.
///
/// Idempotent: migrating a migrated document changes nothing.
pub fn migrate_document(mut document: Map<String, Value>) -> Map<String, Value> {
    if let Some(Value::Array(talents)) = document.get_mut(TALENTS_KEY) {
        migrate_talents(talents);
    }

    let skills = match document.remove(SKILLS_KEY) {
        Some(Value::Array(skills)) if !skills.is_empty() => merge_skills(skills),
        _ => default_skill_values(),
    };
    document.insert(SKILLS_KEY.to_string(), Value::Array(skills));
    document
}

fn migrate_talents(talents: &mut [Value]) {
    for entry in talents.iter_mut() {
        if let Value::String(name) = entry {
            let talent = Talent::from_legacy_name(std::mem::take(name));
            *entry = serde_json::json!({
                "name": talent.name,
                "description": talent.description,
            });
        }
    }
}

/// Keep stored skills (first occurrence per name wins), then append every
/// catalogue skill whose name is absent.
fn merge_skills(stored: Vec<Value>) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut merged: Vec<Value> = stored
        .into_iter()
        .filter(|entry| match skill_name(entry) {
            Some(name) => seen.insert(name.to_string()),
            None => {
                tracing::debug!(entry = %entry, "Dropping stored skill without a name");
                false
            }
        })
        .collect();

    merged.extend(
        default_skill_values()
            .into_iter()
            .filter(|entry| skill_name(entry).is_some_and(|name| !seen.contains(name))),
    );
    merged
}

fn skill_name(entry: &Value) -> Option<&str> {
    entry.get("name").and_then(Value::as_str)
}

fn default_skill_values() -> Vec<Value> {
    default_skills()
        .iter()
        .filter_map(|skill| serde_json::to_value(skill).ok())
        .collect()
}

/// Shallow overlay of a document on the default card, then typed decoding.
///
/// Keys present in the document win wholesale; nested objects are not merged.
pub fn overlay_defaults(document: Map<String, Value>) -> Result<TrainerCard, DocumentError> {
    let mut merged = match serde_json::to_value(TrainerCard::default()).map_err(DocumentError::Shape)? {
        Value::Object(map) => map,
        other => return Err(DocumentError::NotAnObject(json_kind(&other))),
    };
    merged.extend(document);

    let mut card: TrainerCard =
        serde_json::from_value(Value::Object(merged)).map_err(DocumentError::Shape)?;
    card.normalize_skills();
    Ok(card)
}
