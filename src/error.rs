//! Crate-level error types.

use std::fmt;

use crate::identity::StructureIdentity;

/// Which of the two representations a load was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Particle/ball model decoded from a coordinate file.
    Ball,
    /// Backbone ribbon model imported from a scene-graph file.
    Ribbon,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ball => f.write_str("ball"),
            Self::Ribbon => f.write_str("ribbon"),
        }
    }
}

/// Errors produced by the protein-stage crate.
#[derive(Debug)]
pub enum StageError {
    /// A required asset could not be fetched or decoded.
    AssetFetch {
        /// Representation that failed.
        asset: AssetKind,
        /// Structure the asset belongs to.
        identity: StructureIdentity,
        /// Loader-provided failure description.
        reason: String,
    },
    /// A mesh leaf carried no vertices.
    EmptyGeometry,
    /// The host rejected the enclosure negotiation.
    HostNegotiation(String),
    /// Render surface acquisition failed.
    SurfaceSetup(String),
    /// A composite is already attached to the root container.
    ModelAlreadyAttached(StructureIdentity),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl StageError {
    /// Shorthand for an [`StageError::AssetFetch`] failure.
    #[must_use]
    pub fn asset_fetch(
        asset: AssetKind,
        identity: &StructureIdentity,
        reason: impl Into<String>,
    ) -> Self {
        Self::AssetFetch {
            asset,
            identity: identity.clone(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetFetch {
                asset,
                identity,
                reason,
            } => {
                write!(f, "failed to load {asset} model for {identity}: {reason}")
            }
            Self::EmptyGeometry => f.write_str("mesh has no vertices"),
            Self::HostNegotiation(msg) => {
                write!(f, "host frame negotiation failed: {msg}")
            }
            Self::SurfaceSetup(msg) => {
                write!(f, "render surface setup failed: {msg}")
            }
            Self::ModelAlreadyAttached(identity) => {
                write!(f, "a model is already attached ({identity})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for StageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
