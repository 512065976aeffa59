//! Interactive TUI.

mod input;
mod popup;
mod text;

pub use input::*;
pub use popup::*;
pub use text::*;

use crate::i18n;
use crate::settings::{Configuration, FileStore};
use crate::terminal::print_error;

/// Run TUI interactive mode with the saved configuration.
pub fn run() -> i32 {
    crate::logging::init(false);

    let store = FileStore::open_default();
    let config = Configuration::load(&store).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default settings");
        Configuration::default()
    });

    let lang = i18n::detect_language(i18n::env_candidates());
    let strings = match i18n::load_strings(lang) {
        Ok(s) => s,
        Err(e) => {
            print_error(&format!("Failed to load UI strings: {e}"));
            return 1;
        }
    };

    Popup::new(config, Box::new(store), strings).run();
    0
}
