//! A stubbed [crate::OutputSource] serving a fixed output root.

use super::MockError;
use crate::OutputSource;
use alloy_primitives::{b256, B256};
use anyhow::Result;
use std::{sync::Mutex, time::Duration};

/// The output root served by [StubRollupClient] unless configured otherwise.
pub(crate) const MOCK_ROOT_CLAIM: B256 =
    b256!("0000000000000000000000000000000000000000000000000000000000000010");

/// The [StubRollupClient] serves the same output root for every block, and records the blocks it was asked for.
pub(crate) struct StubRollupClient {
    pub output_root: B256,
    /// Fails every request when set.
    pub err: Option<MockError>,
    /// Fails only the requests for these blocks.
    pub failing_blocks: Vec<u64>,
    /// Delays every response by this long.
    pub delay: Option<Duration>,
    pub requested: Mutex<Vec<u64>>,
}

impl Default for StubRollupClient {
    fn default() -> Self {
        Self {
            output_root: MOCK_ROOT_CLAIM,
            err: None,
            failing_blocks: Vec::new(),
            delay: None,
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl StubRollupClient {
    pub fn failing(err: MockError) -> Self {
        Self {
            err: Some(err),
            ..Default::default()
        }
    }

    pub fn requested(&self) -> Vec<u64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OutputSource for StubRollupClient {
    async fn output_at_block(&self, block_number: u64) -> Result<B256> {
        self.requested.lock().unwrap().push(block_number);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.err {
            return Err(err.into());
        }
        if self.failing_blocks.contains(&block_number) {
            return Err(MockError("block unavailable").into());
        }
        Ok(self.output_root)
    }
}
