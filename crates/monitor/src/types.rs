//! The types module holds the outcome and batch types produced by the [crate::Detector].

use dispute_mon_primitives::GameStatus;
use std::ops::AddAssign;

/// The [AgreementOutcome] enum classifies a game by its status and by whether the trusted node agrees with its
/// root claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgreementOutcome {
    /// The game has not resolved yet, so there is nothing to agree or disagree with.
    InProgress,
    /// The defender won and the trusted node agrees with the root claim.
    AgreeDefenderWon,
    /// The defender won, but the trusted node disagrees with the root claim.
    DisagreeDefenderWon,
    /// The challenger won, but the trusted node agrees with the root claim.
    AgreeChallengerWon,
    /// The challenger won and the trusted node disagrees with the root claim.
    DisagreeChallengerWon,
}

impl AgreementOutcome {
    /// All outcomes, in the order they are reported.
    pub const ALL: [AgreementOutcome; 5] = [
        AgreementOutcome::InProgress,
        AgreementOutcome::AgreeDefenderWon,
        AgreementOutcome::DisagreeDefenderWon,
        AgreementOutcome::AgreeChallengerWon,
        AgreementOutcome::DisagreeChallengerWon,
    ];

    /// Classifies a game from its status and the local opinion on its root claim. In progress games carry no
    /// agreement signal, so `agree` is ignored for them.
    pub fn classify(status: GameStatus, agree: bool) -> Self {
        match (status, agree) {
            (GameStatus::InProgress, _) => AgreementOutcome::InProgress,
            (GameStatus::DefenderWon, true) => AgreementOutcome::AgreeDefenderWon,
            (GameStatus::DefenderWon, false) => AgreementOutcome::DisagreeDefenderWon,
            (GameStatus::ChallengerWon, true) => AgreementOutcome::AgreeChallengerWon,
            (GameStatus::ChallengerWon, false) => AgreementOutcome::DisagreeChallengerWon,
        }
    }

    /// Returns the metric category name of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementOutcome::InProgress => "in_progress",
            AgreementOutcome::AgreeDefenderWon => "agree_defender_wins",
            AgreementOutcome::DisagreeDefenderWon => "disagree_defender_wins",
            AgreementOutcome::AgreeChallengerWon => "agree_challenger_wins",
            AgreementOutcome::DisagreeChallengerWon => "disagree_challenger_wins",
        }
    }

    /// Returns `true` if the trusted node contradicts the on-chain resolution of the game.
    pub fn is_faulty(&self) -> bool {
        matches!(
            self,
            AgreementOutcome::DisagreeDefenderWon | AgreementOutcome::AgreeChallengerWon
        )
    }
}

impl std::fmt::Display for AgreementOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The [StatusBatch] tallies games by their on-chain status, regardless of agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBatch {
    pub in_progress: usize,
    pub defender_won: usize,
    pub challenger_won: usize,
}

impl StatusBatch {
    /// Counts one game with the given status.
    pub fn add(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => self.in_progress += 1,
            GameStatus::DefenderWon => self.defender_won += 1,
            GameStatus::ChallengerWon => self.challenger_won += 1,
        }
    }

    /// Adds the counters of `other` to this batch.
    pub fn merge(&mut self, other: &StatusBatch) {
        self.in_progress += other.in_progress;
        self.defender_won += other.defender_won;
        self.challenger_won += other.challenger_won;
    }

    /// Returns the total number of games in the batch.
    pub fn total(&self) -> usize {
        self.in_progress + self.defender_won + self.challenger_won
    }
}

impl From<GameStatus> for StatusBatch {
    fn from(status: GameStatus) -> Self {
        let mut batch = Self::default();
        batch.add(status);
        batch
    }
}

/// The [DetectionBatch] tallies games by their [AgreementOutcome] over a single detection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionBatch {
    pub in_progress: usize,
    pub agree_defender_wins: usize,
    pub disagree_defender_wins: usize,
    pub agree_challenger_wins: usize,
    pub disagree_challenger_wins: usize,
}

impl DetectionBatch {
    /// Counts one game with the given outcome.
    pub fn record(&mut self, outcome: AgreementOutcome) {
        *self.counter_mut(outcome) += 1;
    }

    /// Adds the counters of `other` to this batch.
    pub fn merge(&mut self, other: &DetectionBatch) {
        for outcome in AgreementOutcome::ALL {
            *self.counter_mut(outcome) += other.count(outcome);
        }
    }

    /// Returns the number of games in the batch with the given outcome.
    pub fn count(&self, outcome: AgreementOutcome) -> usize {
        match outcome {
            AgreementOutcome::InProgress => self.in_progress,
            AgreementOutcome::AgreeDefenderWon => self.agree_defender_wins,
            AgreementOutcome::DisagreeDefenderWon => self.disagree_defender_wins,
            AgreementOutcome::AgreeChallengerWon => self.agree_challenger_wins,
            AgreementOutcome::DisagreeChallengerWon => self.disagree_challenger_wins,
        }
    }

    /// Returns the total number of games in the batch.
    pub fn total(&self) -> usize {
        AgreementOutcome::ALL.iter().map(|o| self.count(*o)).sum()
    }

    fn counter_mut(&mut self, outcome: AgreementOutcome) -> &mut usize {
        match outcome {
            AgreementOutcome::InProgress => &mut self.in_progress,
            AgreementOutcome::AgreeDefenderWon => &mut self.agree_defender_wins,
            AgreementOutcome::DisagreeDefenderWon => &mut self.disagree_defender_wins,
            AgreementOutcome::AgreeChallengerWon => &mut self.agree_challenger_wins,
            AgreementOutcome::DisagreeChallengerWon => &mut self.disagree_challenger_wins,
        }
    }
}

impl From<AgreementOutcome> for DetectionBatch {
    fn from(outcome: AgreementOutcome) -> Self {
        let mut batch = Self::default();
        batch.record(outcome);
        batch
    }
}

impl AddAssign for DetectionBatch {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

/// The [DetectionSummary] describes how a detection pass went. The counters it carries have already been reported
/// to the [crate::DetectorMetricer] by the time it is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    /// The number of games that were examined before the pass finished or was cancelled.
    pub games_examined: usize,
    /// The number of games whose metadata could not be fetched.
    pub metadata_failures: usize,
    /// The number of games whose root claim could not be checked against the trusted node.
    pub agreement_failures: usize,
    /// `true` if the pass was cancelled before every game was examined.
    pub cancelled: bool,
    /// The status tally that was reported.
    pub statuses: StatusBatch,
    /// The agreement tally that was reported.
    pub detections: DetectionBatch,
}
