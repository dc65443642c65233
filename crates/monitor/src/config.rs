//! The `config` module contains the [DetectorConfig].

use std::time::Duration;

/// The [DetectorConfig] struct contains the configuration for the [Detector](crate::Detector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    /// The maximum number of games that are checked concurrently within a single pass.
    pub max_concurrency: usize,
    /// The upper bound on every call made to a metadata loader or the trusted node. `None` disables the bound.
    pub call_timeout: Option<Duration>,
}

impl DetectorConfig {
    /// The default number of games checked concurrently.
    pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
    /// The default upper bound on a single external call.
    pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a new [DetectorConfig] with the given configuration.
    pub fn new(max_concurrency: usize, call_timeout: Option<Duration>) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
            call_timeout,
        }
    }

    /// Sets the maximum number of games checked concurrently. Values below 1 are clamped to 1.
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Sets the upper bound on a single external call.
    pub fn with_call_timeout(mut self, call_timeout: Option<Duration>) -> Self {
        self.call_timeout = call_timeout;
        self
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_CONCURRENCY,
            Some(Self::DEFAULT_CALL_TIMEOUT),
        )
    }
}
