//! Player use cases.
//!
//! Unlike the editor, the player has no safe fallback: a scenario that cannot
//! be loaded is an error the trainee has to see.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tactica_domain::{
    evaluate_selection, DomainError, Scenario, ScoreCard, SelectionVerdict, WrongReasonRule,
};

use crate::infrastructure::ports::{ResultRecord, ResultSink, ScenarioRepo, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub struct OpenForPlay {
    repo: Arc<dyn ScenarioRepo>,
}

impl OpenForPlay {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, path: &Path) -> Result<Scenario, StoreError> {
        let scenario = self.repo.load(path)?.scenario;
        if scenario.correct_team_count() == 0 {
            tracing::warn!(title = scenario.title(), "Scenario has no correct team");
        }
        Ok(scenario)
    }
}

/// The verdict on a choice, and the record published for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: SelectionVerdict,
    pub record: ResultRecord,
}

/// Score the trainee's choice and optionally publish the result.
pub struct EvaluateChoice {
    sink: Arc<dyn ResultSink>,
    rule: WrongReasonRule,
}

impl EvaluateChoice {
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        Self {
            sink,
            rule: WrongReasonRule::default(),
        }
    }

    pub fn with_rule(mut self, rule: WrongReasonRule) -> Self {
        self.rule = rule;
        self
    }

    /// `result_path` set means the record is written there; the verdict is
    /// returned either way.
    pub fn execute(
        &self,
        scenario: &Scenario,
        team_index: usize,
        result_path: Option<&Path>,
    ) -> Result<Evaluation, PlayError> {
        let evaluation = evaluate(scenario, team_index, self.rule)?;
        if let Some(path) = result_path {
            self.sink.publish(&evaluation.record, path)?;
        }
        Ok(evaluation)
    }
}

fn evaluate(
    scenario: &Scenario,
    team_index: usize,
    rule: WrongReasonRule,
) -> Result<Evaluation, DomainError> {
    let verdict = evaluate_selection(scenario, team_index, rule)?;
    let record = ResultRecord {
        title: scenario.title().to_string(),
        selected: scenario.teams()[team_index].color().to_string(),
        correct: verdict.is_correct(),
        message: verdict.message(),
    };
    tracing::info!(
        title = scenario.title(),
        selected = %record.selected,
        correct = record.correct,
        "Choice evaluated"
    );
    Ok(Evaluation { verdict, record })
}

/// Every round of a session and the running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub rounds: Vec<Evaluation>,
    pub score: ScoreCard,
}

/// Play several scenarios in a row and score the trainee across all of them.
pub struct PlaySession {
    repo: Arc<dyn ScenarioRepo>,
    rule: WrongReasonRule,
}

impl PlaySession {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self {
            repo,
            rule: WrongReasonRule::default(),
        }
    }

    pub fn with_rule(mut self, rule: WrongReasonRule) -> Self {
        self.rule = rule;
        self
    }

    /// Stops at the first scenario that cannot be loaded or choice that is
    /// out of range.
    pub fn execute(&self, choices: &[(PathBuf, usize)]) -> Result<SessionReport, PlayError> {
        let mut score = ScoreCard::new();
        let mut rounds = Vec::with_capacity(choices.len());
        for (path, team_index) in choices {
            let scenario = self.repo.load(path)?.scenario;
            let evaluation = evaluate(&scenario, *team_index, self.rule)?;
            score.record(&evaluation.verdict);
            rounds.push(evaluation);
        }
        tracing::info!(
            right = score.right(),
            scored = score.total(),
            percent = score.score_percent(),
            "Session scored"
        );
        Ok(SessionReport { rounds, score })
    }
}
