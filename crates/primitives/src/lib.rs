#![doc = include_str!("../README.md")]

//! Primitives for the dispute game monitor, a service that checks resolved
//! OP Stack dispute games against a trusted rollup node.

mod dispute_game;
pub use dispute_game::{Claim, GameHandle, GameMetadata, GameStatus, GameType};
