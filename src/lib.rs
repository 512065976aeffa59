//! Segmented password generator.
//!
//! Passwords are built from selectable character classes plus extra and
//! forbidden characters, split into fixed-length segments joined by `-`
//! (e.g. `aB3dE9-x7YkQ2-m§Pq9Z`). The last configuration is remembered in a
//! small JSON settings file.

pub mod cli;
pub mod error;
pub mod exits;
pub mod i18n;
pub mod logging;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{GenerateError, ParseError, StoreError};
pub use settings::Configuration;
