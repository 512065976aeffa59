//! CLI context - bundles configuration, flags, strings and the settings store.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::i18n::{self, Strings};
use crate::pass;
use crate::settings::{Configuration, FileStore, MemoryStore, SettingsStore};
use crate::tui::{Popup, print_help};

/// Early exit with a process exit code.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

/// Application context for CLI mode.
pub struct Context {
    pub config: Configuration,
    pub flags: CliFlags,
    pub strings: Strings,
    store: Box<dyn SettingsStore>,
}

impl Context {
    /// Parse arguments and load the saved configuration.
    /// Returns Err with the error message if parsing fails.
    /// Also sets up the process-wide quiet mode and logging.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;
        quiet::set(flags.quiet);
        crate::logging::init(flags.quiet);
        Self::from_flags(flags, Box::new(FileStore::open_default()))
    }

    /// Like `new` with an explicit store. Leaves global state untouched.
    pub fn with_store(args: &[String], store: Box<dyn SettingsStore>) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;
        Self::from_flags(flags, store)
    }

    fn from_flags(flags: CliFlags, store: Box<dyn SettingsStore>) -> Result<Self, String> {
        let config = if flags.default || flags.reset {
            Configuration::default()
        } else {
            Configuration::load(store.as_ref()).unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Configuration::default()
            })
        };

        let lang = match flags.lang {
            Some(ref lang) => i18n::detect_language([lang]),
            None => i18n::detect_language(i18n::env_candidates()),
        };
        let strings = i18n::load_strings(lang).map_err(|e| e.to_string())?;

        Ok(Self {
            config,
            flags,
            strings,
            store,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_reset();
        self.flags.apply(&mut self.config);
        self.handle_interactive()?;

        let mut passwords = self.generate()?;
        let result = self.output(&passwords);
        passwords.zeroize();
        result?;

        self.persist();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("segpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(0));
        }
        Ok(())
    }

    /// `--default` wins over `--reset`: the saved settings stay as they are.
    fn handle_reset(&mut self) {
        if !self.flags.reset || self.flags.default {
            return;
        }
        match Configuration::default().save(self.store.as_mut()) {
            Ok(()) => prompts::settings_reset(),
            Err(e) => prompts::warn(&format!("Failed to reset settings: {}", e)),
        }
    }

    fn handle_interactive(&mut self) -> Result<(), Done> {
        if !self.flags.interactive {
            return Ok(());
        }
        let store = std::mem::replace(&mut self.store, Box::new(MemoryStore::default()));
        Popup::new(self.config.clone(), store, self.strings.clone()).run();
        Err(Done(0))
    }

    fn generate(&self) -> Result<String, Done> {
        let count = self.flags.number.unwrap_or(1).max(1);
        pass::generate_batch(&self.config, count).map_err(|e| {
            tracing::debug!(error = %e, "generation rejected");
            prompts::error(self.strings.generate_error(&e));
            Done(1)
        })
    }

    fn output(&self, passwords: &str) -> Result<(), Done> {
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(mut ctx) => {
                    return match ctx.set_contents(passwords.trim_end().to_string()) {
                        Ok(()) => {
                            prompts::clipboard_copied(&self.strings.copied);
                            Ok(())
                        }
                        Err(e) => {
                            prompts::clipboard_error(&e.to_string());
                            Err(Done(1))
                        }
                    };
                }
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Done(1));
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if out.write_all(passwords.as_bytes()).and_then(|_| out.flush()).is_err() {
            return Err(Done(1));
        }
        Ok(())
    }

    /// Write the configuration back, like every generation in the popup does.
    /// `--default` runs leave the saved settings alone.
    fn persist(&mut self) {
        if self.flags.default {
            return;
        }
        if let Err(e) = self.config.save(self.store.as_mut()) {
            prompts::warn(&format!("Failed to save settings: {}", e));
        }
    }
}
