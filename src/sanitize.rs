//! Flavor Prep - Flavor text sanitizer
//!
//! Reduces text to ASCII letters, digits and whitespace, then turns each
//! newline into a space.

use std::sync::OnceLock;

use regex::Regex;

/// Compiled patterns for text cleaning.
pub struct Sanitizer {
    disallowed: Regex,
    newline: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        Self {
            // `\s` is Unicode-aware, so every kind of whitespace (including
            // `\n`) survives this pass.
            disallowed: Regex::new(r"[^A-Za-z0-9\s]").expect("valid regex: disallowed chars"),
            newline: Regex::new(r"\n").expect("valid regex: newline"),
        }
    }

    /// Strip disallowed characters, then replace newlines with spaces.
    pub fn clean(&self, text: &str) -> String {
        let stripped = self.disallowed.replace_all(text, "");
        self.newline.replace_all(&stripped, " ").into_owned()
    }
}

fn shared() -> &'static Sanitizer {
    static SANITIZER: OnceLock<Sanitizer> = OnceLock::new();
    SANITIZER.get_or_init(Sanitizer::new)
}

/// Clean `text` with a process-wide [`Sanitizer`].
pub fn sanitize_text(text: &str) -> String {
    shared().clean(text)
}
