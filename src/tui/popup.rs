use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::i18n::Strings;
use crate::pass;
use crate::settings::{Configuration, SettingsStore};
use crate::terminal::{clear, reset_terminal};

use super::{Status, get_editable_input, get_numeric_input, print_help, print_popup};

/// Interactive settings screen. Every change regenerates the password and is
/// written back to the store.
pub struct Popup {
    config: Configuration,
    store: Box<dyn SettingsStore>,
    strings: Strings,
    password: Option<String>,
    status: Status,
}

/// Edit applied to the configuration from a menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Segments,
    Length,
    ToggleLetters,
    ToggleDigits,
    TogglePunctuation,
    Additional,
    Forbidden,
    Generate,
    Reset,
    Copy,
    Help,
    Quit,
    Invalid,
}

impl Action {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" => Action::Generate,
            "1" => Action::Segments,
            "2" => Action::Length,
            "3" => Action::ToggleLetters,
            "4" => Action::ToggleDigits,
            "5" => Action::TogglePunctuation,
            "6" => Action::Additional,
            "7" => Action::Forbidden,
            "r" | "R" => Action::Reset,
            "c" | "C" => Action::Copy,
            "h" | "?" => Action::Help,
            "q" | "Q" => Action::Quit,
            _ => Action::Invalid,
        }
    }
}

impl Popup {
    pub fn new(config: Configuration, store: Box<dyn SettingsStore>, strings: Strings) -> Self {
        Self {
            config,
            store,
            strings,
            password: None,
            status: Status::None,
        }
    }

    pub fn run(&mut self) {
        reset_terminal();
        self.regenerate();

        loop {
            print_popup(
                &self.strings,
                &self.config,
                self.password.as_deref(),
                &self.status,
            );
            self.status = Status::None;

            let input = match get_editable_input(&self.strings.prompt, "") {
                Some(s) => s,
                None => break,
            };

            match Action::parse(&input) {
                Action::Quit => break,
                Action::Help => {
                    clear();
                    print_help();
                    let _ = get_editable_input(&self.strings.prompt, "");
                }
                Action::Copy => self.copy(),
                Action::Invalid => self.status = Status::Error(self.strings.invalid.clone()),
                action => {
                    if self.edit(&action) {
                        self.regenerate();
                    }
                }
            }
        }

        self.clear_password();
        clear();
    }

    /// Apply an edit, asking for input where the field needs it. Returns
    /// false when the edit was cancelled.
    fn edit(&mut self, action: &Action) -> bool {
        let config = &mut self.config;
        match action {
            Action::Segments => {
                match get_numeric_input(&self.strings.segments, config.segment_count) {
                    Some(n) => config.segment_count = n,
                    None => return false,
                }
            }
            Action::Length => {
                match get_numeric_input(&self.strings.length, config.segment_length) {
                    Some(n) => config.segment_length = n,
                    None => return false,
                }
            }
            Action::Additional => {
                match get_editable_input(&self.strings.additional, &config.additional_chars) {
                    Some(s) => config.additional_chars = s,
                    None => return false,
                }
            }
            Action::Forbidden => {
                match get_editable_input(&self.strings.forbidden, &config.forbidden_chars) {
                    Some(s) => config.forbidden_chars = s,
                    None => return false,
                }
            }
            _ => apply(config, action),
        }
        true
    }

    fn regenerate(&mut self) {
        self.clear_password();
        match pass::generate(&self.config) {
            Ok(password) => {
                self.password = Some(password);
                if let Err(e) = self.config.save(self.store.as_mut()) {
                    warn!(error = %e, "could not save settings");
                    self.status = Status::Error(e.to_string());
                }
            }
            Err(e) => {
                debug!(error = %e, "generation rejected");
                self.status = Status::Error(self.strings.generate_error(&e).to_string());
            }
        }
    }

    fn copy(&mut self) {
        let Some(password) = self.password.clone() else {
            return;
        };
        let result = ClipboardContext::new().and_then(|mut ctx| ctx.set_contents(password));
        self.status = match result {
            Ok(()) => Status::Notice(self.strings.copied.clone()),
            Err(e) => Status::Error(format!("Clipboard error: {e}")),
        };
    }

    fn clear_password(&mut self) {
        if let Some(mut old) = self.password.take() {
            old.zeroize();
        }
    }
}

/// Edits that need no input.
pub fn apply(config: &mut Configuration, action: &Action) {
    match action {
        Action::ToggleLetters => config.use_letters = !config.use_letters,
        Action::ToggleDigits => config.use_digits = !config.use_digits,
        Action::TogglePunctuation => config.use_punctuation = !config.use_punctuation,
        Action::Reset => *config = Configuration::default(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::load_strings;
    use crate::settings::MemoryStore;

    #[test]
    fn parses_menu_choices() {
        assert_eq!(Action::parse(""), Action::Generate);
        assert_eq!(Action::parse(" 3 "), Action::ToggleLetters);
        assert_eq!(Action::parse("7"), Action::Forbidden);
        assert_eq!(Action::parse("R"), Action::Reset);
        assert_eq!(Action::parse("8"), Action::Invalid);
    }

    #[test]
    fn toggles_and_reset() {
        let mut config = Configuration::default();
        apply(&mut config, &Action::ToggleLetters);
        apply(&mut config, &Action::TogglePunctuation);
        assert!(!config.use_letters);
        assert!(config.use_punctuation);

        config.segment_count = 9;
        apply(&mut config, &Action::Reset);
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn regenerate_saves_valid_configuration_only() {
        let strings = load_strings("en").unwrap();
        let mut popup = Popup::new(
            Configuration::new(2, 3).unwrap(),
            Box::new(MemoryStore::default()),
            strings,
        );

        popup.regenerate();
        assert_eq!(popup.password.as_deref().map(|p| p.chars().count()), Some(7));
        assert_eq!(popup.status, Status::None);
        assert_eq!(
            Configuration::load(popup.store.as_ref()).unwrap().segment_length,
            3
        );

        popup.config.use_letters = false;
        popup.config.use_digits = false;
        popup.config.additional_chars.clear();
        popup.regenerate();
        assert!(popup.password.is_none());
        assert_eq!(
            popup.status,
            Status::Error(popup.strings.empty_alphabet.clone())
        );
        assert!(Configuration::load(popup.store.as_ref()).unwrap().use_letters);
    }
}
