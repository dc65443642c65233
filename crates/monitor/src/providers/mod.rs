//! This modules contains the production implementations of the capabilities consumed by the [crate::Detector].

mod output;
pub use self::output::{OutputAtBlockResponse, RollupOutputSource};
