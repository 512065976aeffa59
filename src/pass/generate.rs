//! Password generation.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use tracing::debug;
use zeroize::Zeroize;

use super::{DELIMITER, charset};
use crate::error::GenerateError;
use crate::settings::Configuration;

/// Generate a single password using the thread-local CSPRNG.
pub fn generate(config: &Configuration) -> Result<String, GenerateError> {
    generate_with(config, &mut rand::thread_rng())
}

/// Generate a single password drawing randomness from `rng`.
pub fn generate_with<R: Rng + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> Result<String, GenerateError> {
    config.validate()?;

    let mut chars = charset::build(config);
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }
    debug!(alphabet = chars.len(), "building password");

    let pick = Uniform::new(0, chars.len());
    let total = config.segment_count * config.segment_length + config.segment_count - 1;
    let mut pass = String::with_capacity(total * 4);

    for segment in 0..config.segment_count {
        if segment > 0 {
            pass.push(DELIMITER);
        }
        for _ in 0..config.segment_length {
            pass.push(chars[pick.sample(rng)]);
        }
    }

    chars.zeroize();
    Ok(pass)
}

/// Generate `count` passwords, one per line.
pub fn generate_batch(config: &Configuration, count: usize) -> Result<String, GenerateError> {
    let mut rng = rand::thread_rng();
    let mut passwords = String::new();

    for _ in 0..count {
        let mut pass = generate_with(config, &mut rng)?;
        passwords.push_str(&pass);
        passwords.push('\n');
        pass.zeroize();
    }

    Ok(passwords)
}
