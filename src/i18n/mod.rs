//! Localized UI strings.

use std::env;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::GenerateError;
use crate::pass::Strength;

pub const SUPPORTED: [&str; 2] = ["de", "en"];
pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &str = include_str!("en.json");
const DE: &str = include_str!("de.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Strings {
    pub title: String,
    pub segments: String,
    pub length: String,
    pub letter: String,
    pub digit: String,
    pub punctuation: String,
    pub additional: String,
    pub forbidden: String,
    pub password: String,
    pub generate: String,
    pub reset: String,
    pub copy: String,
    pub copied: String,
    pub quit: String,
    pub prompt: String,
    pub invalid: String,
    pub entropy: String,
    pub weak: String,
    pub fair: String,
    pub strong: String,
    pub very_strong: String,
    pub chars: String,
    pub empty_alphabet: String,
    pub invalid_config: String,
}

impl Strings {
    /// User-facing text for a generation failure.
    pub fn generate_error(&self, err: &GenerateError) -> &str {
        match err {
            GenerateError::EmptyAlphabet => &self.empty_alphabet,
            GenerateError::InvalidConfiguration(_) => &self.invalid_config,
        }
    }

    pub fn strength(&self, strength: Strength) -> &str {
        match strength {
            Strength::Weak => &self.weak,
            Strength::Fair => &self.fair,
            Strength::Strong => &self.strong,
            Strength::VeryStrong => &self.very_strong,
        }
    }
}

/// First supported language among `candidates`, compared on their two-letter
/// prefix. Falls back to English.
pub fn detect_language<I, S>(candidates: I) -> &'static str
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .filter_map(|c| {
            let prefix: String = c.as_ref().trim().chars().take(2).collect();
            let prefix = prefix.to_lowercase();
            SUPPORTED.iter().copied().find(|lang| *lang == prefix)
        })
        .next()
        .unwrap_or(DEFAULT_LANGUAGE)
}

/// Locale candidates from the environment, most specific first.
pub fn env_candidates() -> Vec<String> {
    let mut candidates: Vec<String> = env::var("LANGUAGE")
        .map(|v| v.split(':').map(String::from).collect())
        .unwrap_or_default();

    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(v) = env::var(var) {
            candidates.push(v);
        }
    }

    candidates.retain(|c| !c.is_empty());
    candidates
}

/// String table for `lang`. Unknown languages get English, and keys missing
/// from a table are filled from English.
pub fn load_strings(lang: &str) -> Result<Strings, serde_json::Error> {
    let mut table: Map<String, Value> = serde_json::from_str(EN)?;

    let localized = match lang {
        "de" => Some(DE),
        _ => None,
    };
    if let Some(source) = localized {
        let overrides: Map<String, Value> = serde_json::from_str(source)?;
        table.extend(overrides);
    }

    debug!(lang, "strings loaded");
    serde_json::from_value(Value::Object(table))
}
