//! Mock implementations of the capabilities consumed by the [crate::Detector], for testing.

mod mock_loader;
pub(crate) use self::mock_loader::{MockMetadataCreator, MockMetadataLoader};

pub(crate) use self::mock_metricer::MockDetectorMetricer;

mod mock_output;
pub(crate) use self::mock_output::{StubRollupClient, MOCK_ROOT_CLAIM};

/// The error returned by every failing mock, so that tests can downcast to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MockError(pub &'static str);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for MockError {}
