#![doc = include_str!("../README.md")]

//! The monitor checks the root claims of OP Stack dispute games against a trusted rollup node and reports the
//! aggregated results.

extern crate dispute_mon_primitives;

mod config;
pub use config::DetectorConfig;

mod detector;
pub use detector::Detector;

mod errors;
pub use errors::DetectorError;

mod metrics;
pub use metrics::TracingMetricer;

mod traits;
pub use traits::{DetectorMetricer, MetadataCreator, MetadataLoader, OutputSource};

mod types;
pub use types::{AgreementOutcome, DetectionBatch, DetectionSummary, StatusBatch};

pub mod providers;

#[cfg(test)]
mod mocks;
