//! Character classes and effective alphabet construction.

use crate::settings::Configuration;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Build the alphabet passwords are drawn from.
///
/// Enabled classes come first (letters, digits, punctuation), followed by the
/// additional characters in the order given. Each character is kept at its
/// first occurrence, then every forbidden character is removed.
pub fn build(config: &Configuration) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    let mut push_all = |source: &str| {
        for c in source.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
    };

    if config.use_letters {
        push_all(LETTERS);
    }
    if config.use_digits {
        push_all(DIGITS);
    }
    if config.use_punctuation {
        push_all(PUNCTUATION);
    }
    push_all(&config.additional_chars);

    chars.retain(|c| !config.forbidden_chars.contains(*c));
    chars
}

/// Number of characters in the effective alphabet.
pub fn size(config: &Configuration) -> usize {
    build(config).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(letters: bool, digits: bool, punctuation: bool) -> Configuration {
        Configuration {
            use_letters: letters,
            use_digits: digits,
            use_punctuation: punctuation,
            additional_chars: String::new(),
            forbidden_chars: String::new(),
            ..Configuration::default()
        }
    }

    #[test]
    fn class_sizes() {
        assert_eq!(LETTERS.chars().count(), 52);
        assert_eq!(DIGITS.chars().count(), 10);
        assert_eq!(PUNCTUATION.chars().count(), 32);
        assert_eq!(size(&only(true, true, true)), 94);
    }

    #[test]
    fn classes_appear_in_order() {
        let chars = build(&only(true, true, false));
        assert_eq!(chars.first(), Some(&'a'));
        assert_eq!(chars[26], 'A');
        assert_eq!(chars[52], '0');
        assert_eq!(chars.last(), Some(&'9'));
    }

    #[test]
    fn additional_overlapping_a_class_is_not_duplicated() {
        let mut config = only(false, true, false);
        config.additional_chars = "5x5x".into();
        let chars = build(&config);
        assert_eq!(chars.len(), 11);
        assert_eq!(chars.last(), Some(&'x'));
    }

    #[test]
    fn forbidden_removes_from_base_class_and_additional() {
        let mut config = only(true, false, false);
        config.additional_chars = "a§".into();
        config.forbidden_chars = "a§Z".into();
        let chars = build(&config);
        assert_eq!(chars.len(), 50);
        assert!(!chars.contains(&'a'));
        assert!(!chars.contains(&'§'));
        assert!(!chars.contains(&'Z'));
    }

    #[test]
    fn defaults_drop_forbidden_and_keep_non_ascii_additional() {
        let chars = build(&Configuration::default());
        // 52 letters + 10 digits + "!§$%&?"
        assert_eq!(chars.len(), 68);
        assert!(chars.contains(&'§'));
        assert!(!chars.contains(&'^'));
    }

    #[test]
    fn everything_off_is_empty() {
        assert!(build(&only(false, false, false)).is_empty());

        let mut config = only(false, false, false);
        config.additional_chars = "xyz".into();
        config.forbidden_chars = "zyx".into();
        assert!(build(&config).is_empty());
    }

    #[test]
    fn building_twice_gives_the_same_alphabet() {
        let config = Configuration {
            use_punctuation: true,
            ..Configuration::default()
        };
        assert_eq!(build(&config), build(&config));
    }
}
