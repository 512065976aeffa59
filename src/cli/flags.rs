use crate::settings::Configuration;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub default: bool,
    pub reset: bool,
    pub interactive: bool,
    pub segments: Option<usize>,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub letters: Option<bool>,
    pub digits: Option<bool>,
    pub punctuation: Option<bool>,
    pub additional: Option<String>,
    pub forbidden: Option<String>,
    pub lang: Option<String>,
}

impl CliFlags {
    /// Overwrite the fields given on the command line.
    pub fn apply(&self, config: &mut Configuration) {
        if let Some(n) = self.segments {
            config.segment_count = n;
        }
        if let Some(n) = self.length {
            config.segment_length = n;
        }
        if let Some(b) = self.letters {
            config.use_letters = b;
        }
        if let Some(b) = self.digits {
            config.use_digits = b;
        }
        if let Some(b) = self.punctuation {
            config.use_punctuation = b;
        }
        if let Some(ref s) = self.additional {
            config.additional_chars = s.clone();
        }
        if let Some(ref s) = self.forbidden {
            config.forbidden_chars = s.clone();
        }
    }
}
