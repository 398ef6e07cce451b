//! Stored credential types.

use serde::{Deserialize, Serialize};

/// A stored password credential in PHC string format
/// (`$argon2id$v=19$m=...$<salt>$<hash>`).
///
/// Records written by older clients may still carry the clear-text password
/// here; the auth service replaces it with a hash on the next successful
/// login. Hashing and verification live in the directory crate's auth
/// service. `Debug` is redacted so the value does not leak into logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already computed PHC string.
    #[must_use]
    pub const fn new(phc: String) -> Self {
        Self(phc)
    }

    /// Get the PHC string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let hash = PasswordHash::new("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned());
        let debug = format!("{hash:?}");
        assert!(!debug.contains("argon2id"));
        assert!(debug.contains("REDACTED"));
    }
}
