//! This module holds the capabilities that the [crate::Detector] is built from. Each of them is injected, so that
//! production clients and test doubles are interchangeable.

use alloy_primitives::B256;
use anyhow::Result;
use dispute_mon_primitives::{GameHandle, GameMetadata};

/// A [MetadataLoader] reads the metadata of a single dispute game from its on-chain contract.
#[async_trait::async_trait]
pub trait MetadataLoader: Send + Sync {
    /// Returns the L2 block number, root claim and status of the game that the loader is bound to.
    async fn game_metadata(&self) -> Result<GameMetadata>;
}

/// A [MetadataCreator] binds a [MetadataLoader] to the contract referenced by a [GameHandle].
pub trait MetadataCreator: Send + Sync {
    /// Creates a [MetadataLoader] for the given game.
    ///
    /// ### Takes
    /// - `game`: The [GameHandle] of the game to bind to.
    ///
    /// ### Returns
    /// - A boxed [MetadataLoader], or [Err] if the handle is malformed or the game type is not supported.
    fn create_contract(&self, game: &GameHandle) -> Result<Box<dyn MetadataLoader>>;
}

/// An [OutputSource] serves output roots from a trusted view of the L2 chain.
#[async_trait::async_trait]
pub trait OutputSource: Send + Sync {
    /// Returns the canonical output root at the given L2 block number.
    async fn output_at_block(&self, block_number: u64) -> Result<B256>;
}

/// A [DetectorMetricer] receives the aggregated results of a detection pass.
pub trait DetectorMetricer: Send + Sync {
    /// Records the absolute number of games in each status for the current pass.
    fn record_games_status(&self, in_progress: usize, defender_won: usize, challenger_won: usize);

    /// Records `count` additional games in the given agreement category.
    fn record_game_agreement(&self, category: &str, count: usize);
}
