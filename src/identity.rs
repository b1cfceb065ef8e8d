//! Structure identity tokens.

use std::fmt;

/// Opaque token naming the structure to load (typically a 4-character
/// accession code such as `2VAA`).
///
/// Used only as a lookup key: for the precomputed transform table, for the
/// identity-derived asset paths, and for the menu item to highlight. The
/// token is compared verbatim, so `2vaa` and `2VAA` are different
/// identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructureIdentity(String);

impl StructureIdentity {
    /// Wrap a token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructureIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StructureIdentity {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}
