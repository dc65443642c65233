//! Types describing a dispute game as it is observed by the monitor.

use alloy_primitives::{Address, B256};
use anyhow::{bail, Error, Result};
use std::convert::TryFrom;

/// The [Claim] type is an alias to [B256], used to deliniate a claim hash from a regular hash.
pub type Claim = B256;

/// The [GameType] enum is used to indicate which type of dispute game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameType {
    /// The [GameType::Cannon] variant is used to indicate that the dispute game is being played over a
    /// FaultDisputeGame with the Cannon VM as its backend source of truth.
    Cannon = 0,
    /// The [GameType::PermissionedCannon] variant is a [GameType::Cannon] game where only the allowlisted
    /// proposer and challenger may participate.
    PermissionedCannon = 1,
    /// The [GameType::Alphabet] variant is used to indicate that the dispute game is being played over a
    /// FaultDisputeGame with the mock Alphabet VM as its backend source of truth. This game is used for
    /// testing purposes.
    Alphabet = 255,
}

impl TryFrom<u8> for GameType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameType::Cannon),
            1 => Ok(GameType::PermissionedCannon),
            255 => Ok(GameType::Alphabet),
            _ => bail!("Invalid game type: {value}"),
        }
    }
}

/// The [GameStatus] enum is used to indicate the status of a dispute game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The [GameStatus::InProgress] variant is used to indicate that the dispute game is still in progress.
    InProgress = 0,
    /// The [GameStatus::ChallengerWon] variant is used to indicate that the challenger of the root claim has won the
    /// dispute game.
    ChallengerWon = 1,
    /// The [GameStatus::DefenderWon] variant is used to indicate that the defender of the root claim has won the
    /// dispute game.
    DefenderWon = 2,
}

impl TryFrom<u8> for GameStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameStatus::InProgress),
            1 => Ok(GameStatus::ChallengerWon),
            2 => Ok(GameStatus::DefenderWon),
            _ => bail!("Invalid game status: {value}"),
        }
    }
}

/// The [GameHandle] is the reference to a single dispute game, as emitted by the dispute game factory when the game
/// was created. The monitor never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameHandle {
    /// The raw game type, as stored by the factory.
    pub game_type: u8,
    /// The timestamp at which the game was created.
    pub timestamp: u64,
    /// The address of the game's proxy contract.
    pub proxy: Address,
}

impl GameHandle {
    pub fn new(game_type: u8, timestamp: u64, proxy: Address) -> Self {
        Self {
            game_type,
            timestamp,
            proxy,
        }
    }

    /// Decodes the raw game type of the handle.
    pub fn game_type(&self) -> Result<GameType> {
        GameType::try_from(self.game_type)
    }
}

/// The [GameMetadata] struct is a read-only snapshot of the on-chain state of a game that the monitor needs to
/// check it against the canonical chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMetadata {
    /// The L2 block number that the root claim commits to.
    pub l2_block_number: u64,
    /// The output root claimed by the game's proposer.
    pub root_claim: Claim,
    /// The current status of the game.
    pub status: GameStatus,
}

impl GameMetadata {
    pub fn new(l2_block_number: u64, root_claim: Claim, status: GameStatus) -> Self {
        Self {
            l2_block_number,
            root_claim,
            status,
        }
    }
}
