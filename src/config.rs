//! Viewer flags parsed from the page query string.
//!
//! Recognized parameters:
//!
//! - `molecule=<identity>` selects the structure; absent ⇒ nothing is loaded
//! - `noball` disables the ball model load
//! - `noribbon` disables the ribbon model load
//!
//! A parameter is recognized when its name directly follows a `?` or `&`.
//! Flag names are matched as prefixes, so `&noballs` also disables the ball
//! load.

use crate::identity::StructureIdentity;

/// Which structure to load and which representations are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfiguration {
    /// Requested structure, if any.
    pub identity: Option<StructureIdentity>,
    /// Whether the ball model should be fetched.
    pub ball_enabled: bool,
    /// Whether the ribbon model should be fetched.
    pub ribbon_enabled: bool,
}

impl Default for ViewerConfiguration {
    fn default() -> Self {
        Self {
            identity: None,
            ball_enabled: true,
            ribbon_enabled: true,
        }
    }
}

impl ViewerConfiguration {
    /// Configuration for `identity` with both representations enabled.
    #[must_use]
    pub fn for_identity(identity: impl Into<StructureIdentity>) -> Self {
        Self {
            identity: Some(identity.into()),
            ..Self::default()
        }
    }

    /// Parse a query string such as `?molecule=2VAA&noribbon`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let identity = parameters(query).find_map(|param| {
            let value = word_prefix(param.strip_prefix("molecule=")?);
            (!value.is_empty()).then(|| StructureIdentity::new(value))
        });

        Self {
            identity,
            ball_enabled: !has_flag(query, "noball"),
            ribbon_enabled: !has_flag(query, "noribbon"),
        }
    }

    /// Whether no representation would be fetched even with an identity.
    #[must_use]
    pub fn loads_nothing(&self) -> bool {
        !self.ball_enabled && !self.ribbon_enabled
    }
}

/// Every suffix of `query` that starts right after a `?` or `&`.
fn parameters(query: &str) -> impl Iterator<Item = &str> {
    query
        .match_indices(['?', '&'])
        .map(move |(i, sep)| &query[i + sep.len()..])
}

fn has_flag(query: &str, flag: &str) -> bool {
    parameters(query).any(|param| param.starts_with(flag))
}

/// Leading run of `[A-Za-z0-9_]`.
fn word_prefix(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    &s[..end]
}
