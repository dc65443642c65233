//! Errors surfaced by the [crate::Detector] for a single game.

use std::fmt;

/// The [DetectorError] enum describes which stage of the detection of a single game failed. None of them are fatal
/// to a detection pass.
#[derive(Debug)]
pub enum DetectorError {
    /// A metadata loader could not be bound to the game's contract.
    ContractCreation(anyhow::Error),
    /// The metadata loader failed to read the game's metadata.
    MetadataFetch(anyhow::Error),
    /// The trusted node failed to serve the canonical output root.
    OutputFetch(anyhow::Error),
}

impl DetectorError {
    /// Returns the underlying error, regardless of the stage that produced it.
    pub fn inner(&self) -> &anyhow::Error {
        match self {
            DetectorError::ContractCreation(e)
            | DetectorError::MetadataFetch(e)
            | DetectorError::OutputFetch(e) => e,
        }
    }
}

impl fmt::Display for DetectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorError::ContractCreation(e) => write!(f, "failed to create contract: {e}"),
            DetectorError::MetadataFetch(e) => write!(f, "failed to fetch game metadata: {e}"),
            DetectorError::OutputFetch(e) => write!(f, "failed to fetch output root: {e}"),
        }
    }
}

impl std::error::Error for DetectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let inner: &(dyn std::error::Error + 'static) = self.inner().as_ref();
        Some(inner)
    }
}
