//! Mock [crate::MetadataCreator] and [crate::MetadataLoader] implementations.

use super::MockError;
use crate::{MetadataCreator, MetadataLoader};
use alloy_primitives::{Address, B256};
use anyhow::Result;
use dispute_mon_primitives::{GameHandle, GameMetadata, GameStatus};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

/// The [MockMetadataLoader] returns fixed metadata, and counts how often it was called.
#[derive(Debug, Clone)]
pub(crate) struct MockMetadataLoader {
    pub l2_block_number: u64,
    pub root_claim: B256,
    pub status: GameStatus,
    pub err: Option<MockError>,
    pub delay: Option<Duration>,
    pub calls: Arc<AtomicUsize>,
}

impl Default for MockMetadataLoader {
    fn default() -> Self {
        Self {
            l2_block_number: 0,
            root_claim: B256::ZERO,
            status: GameStatus::InProgress,
            err: None,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MockMetadataLoader {
    pub fn with_status(status: GameStatus) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_claim(status: GameStatus, l2_block_number: u64, root_claim: B256) -> Self {
        Self {
            l2_block_number,
            root_claim,
            status,
            ..Default::default()
        }
    }

    pub fn failing(err: MockError) -> Self {
        Self {
            err: Some(err),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MetadataLoader for MockMetadataLoader {
    async fn game_metadata(&self) -> Result<GameMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.err {
            return Err(err.into());
        }
        Ok(GameMetadata::new(
            self.l2_block_number,
            self.root_claim,
            self.status,
        ))
    }
}

/// The [MockMetadataCreator] hands out the loader registered for a game's proxy address, falling back to a default
/// loader.
#[derive(Debug, Default)]
pub(crate) struct MockMetadataCreator {
    pub loader: MockMetadataLoader,
    pub loaders: HashMap<Address, MockMetadataLoader>,
    pub err: Option<MockError>,
    pub calls: AtomicUsize,
}

impl MockMetadataCreator {
    pub fn with_loader(loader: MockMetadataLoader) -> Self {
        Self {
            loader,
            ..Default::default()
        }
    }

    pub fn failing(err: MockError) -> Self {
        Self {
            err: Some(err),
            ..Default::default()
        }
    }

    /// Registers a loader for the game at `proxy`.
    pub fn insert(mut self, proxy: Address, loader: MockMetadataLoader) -> Self {
        self.loaders.insert(proxy, loader);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MetadataCreator for MockMetadataCreator {
    fn create_contract(&self, game: &GameHandle) -> Result<Box<dyn MetadataLoader>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.err {
            return Err(err.into());
        }
        let loader = self.loaders.get(&game.proxy).unwrap_or(&self.loader);
        Ok(Box::new(loader.clone()))
    }
}
