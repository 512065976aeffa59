//! Password generation and strength estimation.

pub mod charset;
mod generate;

pub use generate::{generate, generate_batch, generate_with};

use crate::settings::Configuration;

/// Separator placed between segments.
pub const DELIMITER: char = '-';

/// Password entropy in bits for a configuration.
pub fn entropy_bits(config: &Configuration) -> f64 {
    let chars = charset::size(config);
    if chars == 0 {
        return 0.0;
    }
    config.segment_count as f64 * config.segment_length as f64 * (chars as f64).log2()
}

/// Coarse rating of an entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

/// Rate an entropy estimate: Weak up to 35 bits, Fair up to 59, Strong up
/// to 127, Very Strong above.
pub fn strength(bits: f64) -> Strength {
    if bits <= 35.0 {
        Strength::Weak
    } else if bits <= 59.0 {
        Strength::Fair
    } else if bits <= 127.0 {
        Strength::Strong
    } else {
        Strength::VeryStrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only_entropy() {
        let config = Configuration {
            segment_count: 2,
            segment_length: 4,
            use_letters: false,
            use_digits: true,
            use_punctuation: false,
            additional_chars: String::new(),
            forbidden_chars: String::new(),
        };
        let bits = entropy_bits(&config);
        assert!((bits - 8.0 * 10f64.log2()).abs() < 1e-9);
        assert_eq!(strength(bits), Strength::Weak);
    }

    #[test]
    fn empty_alphabet_has_no_entropy() {
        let config = Configuration {
            use_letters: false,
            use_digits: false,
            additional_chars: String::new(),
            ..Configuration::default()
        };
        assert_eq!(entropy_bits(&config), 0.0);
    }

    #[test]
    fn default_is_strong() {
        // 18 chars over 68 symbols
        let bits = entropy_bits(&Configuration::default());
        assert!(bits > 100.0 && bits < 120.0);
        assert_eq!(strength(bits), Strength::Strong);
    }

    #[test]
    fn fractional_bits_are_not_truncated() {
        assert_eq!(strength(35.0), Strength::Weak);
        assert_eq!(strength(35.9), Strength::Fair);
        assert_eq!(strength(59.5), Strength::Strong);
        assert_eq!(strength(127.2), Strength::VeryStrong);
    }

    #[test]
    fn oversized_shape_entropy_is_finite() {
        let config = Configuration {
            segment_count: usize::MAX >> 1,
            segment_length: usize::MAX >> 1,
            ..Configuration::default()
        };
        let bits = entropy_bits(&config);
        assert!(bits.is_finite());
        assert_eq!(strength(bits), Strength::VeryStrong);
    }
}
