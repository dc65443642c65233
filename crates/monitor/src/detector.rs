//! This module contains the [Detector], which checks a batch of dispute games against the trusted rollup node and
//! reports the results to a [DetectorMetricer].

use crate::{
    AgreementOutcome, DetectionBatch, DetectionSummary, DetectorConfig, DetectorError,
    DetectorMetricer, MetadataCreator, OutputSource,
};
use alloy_primitives::Address;
use anyhow::{anyhow, Result};
use dispute_mon_primitives::{Claim, GameHandle, GameMetadata, GameStatus};
use futures::{future, stream, FutureExt, StreamExt};
use std::{future::Future, pin::pin, sync::Arc};

const TARGET: &str = "dispute-mon-detector";

/// The result of checking a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GameReport {
    /// The game's metadata could not be fetched. It is invisible to the metrics of this pass.
    MetadataFailed,
    /// The game's status is known, but its root claim could not be checked.
    AgreementFailed(GameStatus),
    /// The game was fully classified.
    Detected(GameStatus, AgreementOutcome),
}

impl DetectionSummary {
    fn add(&mut self, report: GameReport) {
        self.games_examined += 1;
        match report {
            GameReport::MetadataFailed => self.metadata_failures += 1,
            GameReport::AgreementFailed(status) => {
                self.statuses.add(status);
                self.agreement_failures += 1;
            }
            GameReport::Detected(status, outcome) => {
                self.statuses.add(status);
                self.detections.record(outcome);
            }
        }
    }
}

/// The [Detector] compares the root claims of dispute games against the canonical output roots served by a trusted
/// [OutputSource]. Every call to [Detector::detect] is an independent pass: the counters of a pass are built from
/// scratch and reported exactly once at its end.
pub struct Detector {
    config: DetectorConfig,
    metrics: Arc<dyn DetectorMetricer>,
    creator: Arc<dyn MetadataCreator>,
    rollup: Arc<dyn OutputSource>,
}

impl Detector {
    /// Creates a new [Detector] from its configuration and the capabilities it reads from and reports to.
    pub fn new(
        config: DetectorConfig,
        metrics: Arc<dyn DetectorMetricer>,
        creator: Arc<dyn MetadataCreator>,
        rollup: Arc<dyn OutputSource>,
    ) -> Self {
        Self {
            config,
            metrics,
            creator,
            rollup,
        }
    }

    /// Runs a detection pass over `games` to completion. See [Detector::detect_until].
    pub async fn detect(&self, games: &[GameHandle]) -> DetectionSummary {
        self.detect_until(games, future::pending()).await
    }

    /// Runs a detection pass over `games`, stopping early once `cancelled` resolves.
    ///
    /// Cancellation bounds every external call: a call that is still in flight when `cancelled` resolves fails as
    /// that stage's error, so a game whose metadata was already fetched keeps its place in the status tally. Games
    /// that have not started yet are skipped.
    ///
    /// Games are checked concurrently, up to [DetectorConfig::max_concurrency] at a time. A game that fails at any
    /// stage is logged and skipped; it never prevents the other games from being checked. Once the pass is over,
    /// the status tally and then the agreement tally of every game examined so far are reported to the
    /// [DetectorMetricer].
    ///
    /// ### Takes
    /// - `games`: The games to check. May be empty.
    /// - `cancelled`: A future that resolves when the pass should stop early.
    ///
    /// ### Returns
    /// - [DetectionSummary]: What was reported, and how many games failed.
    pub async fn detect_until<F>(&self, games: &[GameHandle], cancelled: F) -> DetectionSummary
    where
        F: Future<Output = ()>,
    {
        tracing::debug!(target: TARGET, "Starting detection pass over {} games", games.len());

        let cancelled = cancelled.shared();
        let mut reports = pin!(stream::iter(games)
            .take_while(|_| future::ready(cancelled.peek().is_none()))
            .map(|game| self.detect_game(game, cancelled.clone()))
            .buffer_unordered(self.config.max_concurrency.max(1)));

        let mut summary = DetectionSummary::default();
        while let Some(report) = reports.next().await {
            summary.add(report);
        }

        // The signal is only polled while calls are in flight, so a pass whose last call returned before the
        // signal fired ran to completion.
        if cancelled.peek().is_some() {
            summary.cancelled = true;
            tracing::warn!(
                target: TARGET,
                "Detection pass cancelled after {} of {} games",
                summary.games_examined,
                games.len()
            );
        }

        let statuses = summary.statuses;
        self.metrics.record_games_status(
            statuses.in_progress,
            statuses.defender_won,
            statuses.challenger_won,
        );
        self.record_batch(&summary.detections);

        tracing::info!(
            target: TARGET,
            "Detection pass complete: {} games examined, {} metadata failures, {} agreement failures",
            summary.games_examined,
            summary.metadata_failures,
            summary.agreement_failures
        );
        summary
    }

    /// Checks a single game. Errors are logged here and folded into the [GameReport].
    async fn detect_game<C>(&self, game: &GameHandle, cancelled: C) -> GameReport
    where
        C: Future<Output = ()> + Clone,
    {
        let metadata = match Self::until_cancelled(
            self.fetch_game_metadata(game),
            cancelled.clone(),
            DetectorError::MetadataFetch,
        )
        .await
        {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::error!(target: TARGET, "Failed to fetch metadata for game {}: {}", game.proxy, e);
                return GameReport::MetadataFailed;
            }
        };

        let agreement = self.check_agreement(
            game.proxy,
            metadata.l2_block_number,
            metadata.root_claim,
            metadata.status,
        );
        match Self::until_cancelled(agreement, cancelled, DetectorError::OutputFetch).await {
            Ok(outcome) => GameReport::Detected(metadata.status, outcome),
            Err(e) => {
                tracing::error!(target: TARGET, "Failed to check agreement for game {}: {}", game.proxy, e);
                GameReport::AgreementFailed(metadata.status)
            }
        }
    }

    /// Binds a loader to the game's contract and fetches its metadata.
    pub(crate) async fn fetch_game_metadata(
        &self,
        game: &GameHandle,
    ) -> Result<GameMetadata, DetectorError> {
        let loader = self
            .creator
            .create_contract(game)
            .map_err(DetectorError::ContractCreation)?;
        self.bounded(loader.game_metadata())
            .await
            .map_err(DetectorError::MetadataFetch)
    }

    /// Classifies a game by its status and by whether the trusted node agrees with its root claim.
    pub(crate) async fn check_agreement(
        &self,
        game: Address,
        l2_block_number: u64,
        root_claim: Claim,
        status: GameStatus,
    ) -> Result<AgreementOutcome, DetectorError> {
        let agree = self
            .check_root_agreement(l2_block_number, root_claim)
            .await?;
        let outcome = AgreementOutcome::classify(status, agree);

        if outcome.is_faulty() {
            tracing::error!(
                target: TARGET,
                "Game {} resolved against the canonical chain: {} (block {}, root claim {})",
                game,
                outcome,
                l2_block_number,
                root_claim
            );
        } else {
            tracing::debug!(target: TARGET, "Game {} classified as {}", game, outcome);
        }
        Ok(outcome)
    }

    /// Returns `true` if the canonical output root at `l2_block_number` is exactly `root_claim`.
    pub(crate) async fn check_root_agreement(
        &self,
        l2_block_number: u64,
        root_claim: Claim,
    ) -> Result<bool, DetectorError> {
        let output_root = self
            .bounded(self.rollup.output_at_block(l2_block_number))
            .await
            .map_err(DetectorError::OutputFetch)?;
        Ok(output_root == root_claim)
    }

    /// Reports every non-zero counter of the batch to the [DetectorMetricer].
    pub(crate) fn record_batch(&self, batch: &DetectionBatch) {
        for outcome in AgreementOutcome::ALL {
            let count = batch.count(outcome);
            if count > 0 {
                self.metrics.record_game_agreement(outcome.as_str(), count);
            }
        }
    }

    /// Races a stage of a game's detection against the cancellation signal. A cancelled stage fails with `stage`.
    async fn until_cancelled<T>(
        call: impl Future<Output = Result<T, DetectorError>>,
        cancelled: impl Future<Output = ()>,
        stage: fn(anyhow::Error) -> DetectorError,
    ) -> Result<T, DetectorError> {
        tokio::select! {
            biased;
            _ = cancelled => Err(stage(anyhow!("detection pass cancelled"))),
            result = call => result,
        }
    }

    /// Bounds an external call by [DetectorConfig::call_timeout].
    async fn bounded<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        match self.config.call_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| anyhow!("timed out after {:?}", limit))?,
            None => call.await,
        }
    }
}
