//! Password generation settings.

pub mod store;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{GenerateError, StoreError};
pub use store::{FileStore, MemoryStore, SettingsStore};

pub const KEY_SEGMENTS: &str = "segments";
pub const KEY_LENGTH: &str = "length";
pub const KEY_LETTER: &str = "letter";
pub const KEY_DIGIT: &str = "digit";
pub const KEY_PUNCTUATION: &str = "punctuation";
pub const KEY_ADDITIONAL: &str = "additional";
pub const KEY_FORBIDDEN: &str = "forbidden";

pub const KEYS: [&str; 7] = [
    KEY_SEGMENTS,
    KEY_LENGTH,
    KEY_LETTER,
    KEY_DIGIT,
    KEY_PUNCTUATION,
    KEY_ADDITIONAL,
    KEY_FORBIDDEN,
];

/// Upper bound on segment count times segment length.
pub const MAX_PASSWORD_CHARS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub segment_count: usize,
    pub segment_length: usize,
    pub use_letters: bool,
    pub use_digits: bool,
    pub use_punctuation: bool,
    pub additional_chars: String,
    pub forbidden_chars: String,
}

impl Configuration {
    /// Default character options with the given shape, rejected if either
    /// dimension is zero.
    pub fn new(segment_count: usize, segment_length: usize) -> Result<Self, GenerateError> {
        let config = Self {
            segment_count,
            segment_length,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.segment_count == 0 {
            return Err(GenerateError::InvalidConfiguration(
                "segment count must be at least 1".into(),
            ));
        }
        if self.segment_length == 0 {
            return Err(GenerateError::InvalidConfiguration(
                "segment length must be at least 1".into(),
            ));
        }
        match self.segment_count.checked_mul(self.segment_length) {
            Some(chars) if chars <= MAX_PASSWORD_CHARS => Ok(()),
            _ => Err(GenerateError::InvalidConfiguration(format!(
                "password may have at most {MAX_PASSWORD_CHARS} characters"
            ))),
        }
    }

    /// Read the configuration from a store. Absent or malformed keys fall back
    /// to their defaults.
    pub fn load(store: &dyn SettingsStore) -> Result<Self, StoreError> {
        let values = store.get(&KEYS)?;
        let defaults = Self::default();

        let config = Self {
            segment_count: read_count(&values, KEY_SEGMENTS, defaults.segment_count),
            segment_length: read_count(&values, KEY_LENGTH, defaults.segment_length),
            use_letters: read_bool(&values, KEY_LETTER, defaults.use_letters),
            use_digits: read_bool(&values, KEY_DIGIT, defaults.use_digits),
            use_punctuation: read_bool(&values, KEY_PUNCTUATION, defaults.use_punctuation),
            additional_chars: read_string(&values, KEY_ADDITIONAL, defaults.additional_chars),
            forbidden_chars: read_string(&values, KEY_FORBIDDEN, defaults.forbidden_chars),
        };
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), StoreError> {
        let mut values = Map::new();
        values.insert(KEY_SEGMENTS.into(), self.segment_count.into());
        values.insert(KEY_LENGTH.into(), self.segment_length.into());
        values.insert(KEY_LETTER.into(), self.use_letters.into());
        values.insert(KEY_DIGIT.into(), self.use_digits.into());
        values.insert(KEY_PUNCTUATION.into(), self.use_punctuation.into());
        values.insert(KEY_ADDITIONAL.into(), self.additional_chars.clone().into());
        values.insert(KEY_FORBIDDEN.into(), self.forbidden_chars.clone().into());
        store.set(values)?;
        debug!("configuration saved");
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            segment_count: 3,
            segment_length: 6,
            use_letters: true,
            use_digits: true,
            use_punctuation: false,
            additional_chars: String::from("!§$%&?"),
            forbidden_chars: String::from("°^\\"),
        }
    }
}

// Counts may be stored as numbers or as the numeric strings a form field produces.
fn read_count(values: &Map<String, Value>, key: &str, default: usize) -> usize {
    let parsed = match values.get(key) {
        None | Some(Value::Null) => return default,
        Some(Value::Number(n)) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    };
    parsed.unwrap_or_else(|| {
        warn!(key, "malformed stored value, using default");
        default
    })
}

fn read_bool(values: &Map<String, Value>, key: &str, default: bool) -> bool {
    let parsed = match values.get(key) {
        None | Some(Value::Null) => return default,
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    };
    parsed.unwrap_or_else(|| {
        warn!(key, "malformed stored value, using default");
        default
    })
}

fn read_string(values: &Map<String, Value>, key: &str, default: String) -> String {
    match values.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            warn!(key, "malformed stored value, using default");
            default
        }
    }
}
