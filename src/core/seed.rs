/// Seed derivation — the root digest every selection of a call hangs off.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::schema::mode::Mode;

/// Substituted for prompts that are empty after trimming.
pub const FALLBACK_PROMPT: &str = "Ide Baru";

/// Joins the mode token and the normalized prompt in the seed input.
pub const SEED_SEPARATOR: &str = "::";

/// Whitespace as far as prompts are concerned: Unicode `White_Space` plus
/// the byte order mark, minus NEL (U+0085).
pub fn is_prompt_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing prompt whitespace.
pub fn trim_prompt(prompt: &str) -> &str {
    prompt.trim_matches(is_prompt_whitespace)
}

/// Trim surrounding whitespace, substituting [`FALLBACK_PROMPT`] when
/// nothing is left.
pub fn normalize_prompt(prompt: &str) -> &str {
    let trimmed = trim_prompt(prompt);
    if trimmed.is_empty() {
        FALLBACK_PROMPT
    } else {
        trimmed
    }
}

/// A SHA-256 digest of `"{mode}::{normalized prompt}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Derive the seed for a mode and an already normalized prompt.
    pub fn derive(mode: Mode, normalized_prompt: &str) -> Seed {
        let mut hasher = Sha256::new();
        hasher.update(mode.token().as_bytes());
        hasher.update(SEED_SEPARATOR.as_bytes());
        hasher.update(normalized_prompt.as_bytes());
        Seed(hasher.finalize().into())
    }

    /// Normalize `prompt` and derive its seed.
    pub fn for_prompt(mode: Mode, prompt: &str) -> Seed {
        Self::derive(mode, normalize_prompt(prompt))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Seed {
    fn from(bytes: [u8; 32]) -> Self {
        Seed(bytes)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
