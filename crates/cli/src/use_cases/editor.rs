//! Editor use cases.
//!
//! The editor always has something to work on: a scenario that fails to load
//! is replaced by a blank one rather than reported as fatal.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tactica_domain::{DomainError, Scenario};
use tactica_shared::{DecodeWarning, Decoded};

use crate::infrastructure::ports::{ClockPort, ScenarioRepo, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Rewriting the file in place would discard what the decoder dropped.
    #[error(
        "Refusing to overwrite {}: it was not read in full ({})",
        .path.display(),
        summarize(.warnings)
    )]
    LossyRewrite {
        path: PathBuf,
        warnings: Vec<DecodeWarning>,
    },
}

fn summarize(warnings: &[DecodeWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Fail before writing over `path` with a scenario that lost data on load.
fn guard_in_place(decoded: &Decoded, path: &Path, force: bool) -> Result<(), EditorError> {
    if decoded.warnings.is_empty() {
        return Ok(());
    }
    if !force {
        return Err(EditorError::LossyRewrite {
            path: path.to_path_buf(),
            warnings: decoded.warnings.clone(),
        });
    }
    tracing::warn!(
        path = %path.display(),
        warnings = decoded.warnings.len(),
        "Overwriting scenario that was not read in full"
    );
    Ok(())
}

/// Open a scenario for editing, falling back to a blank one.
pub struct OpenForEditing {
    repo: Arc<dyn ScenarioRepo>,
    clock: Arc<dyn ClockPort>,
}

impl OpenForEditing {
    pub fn new(repo: Arc<dyn ScenarioRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// With no path, or when loading fails, returns [`Scenario::blank`] dated
    /// today.
    pub fn execute(&self, path: Option<&Path>) -> Scenario {
        let Some(path) = path else {
            return self.blank();
        };
        match self.repo.load(path) {
            Ok(decoded) => decoded.scenario,
            Err(e) if e.is_not_found() => {
                tracing::info!(path = %path.display(), "No scenario yet, starting a new one");
                self.blank()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not open scenario, starting a new one");
                self.blank()
            }
        }
    }

    fn blank(&self) -> Scenario {
        Scenario::blank(self.clock.today())
    }
}

/// Make one team the scenario's only correct answer and save.
pub struct MarkCorrectTeam {
    repo: Arc<dyn ScenarioRepo>,
}

impl MarkCorrectTeam {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    /// Nothing is written if `team_index` is out of range, or if the file
    /// was not read in full and `force` is unset. Returns the saved scenario
    /// with the load warnings.
    pub fn execute(
        &self,
        path: &Path,
        team_index: usize,
        force: bool,
    ) -> Result<Decoded, EditorError> {
        let mut decoded = self.repo.load(path)?;
        decoded.scenario.mark_correct(team_index)?;
        guard_in_place(&decoded, path, force)?;
        self.repo.save(&decoded.scenario, path)?;
        tracing::info!(
            team = team_index,
            color = decoded.scenario.teams()[team_index].color(),
            "Marked correct team"
        );
        Ok(decoded)
    }
}

/// Rewrite a scenario in the canonical layout.
pub struct NormalizeScenario {
    repo: Arc<dyn ScenarioRepo>,
}

impl NormalizeScenario {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    /// Writes to `target`, or over `path` when no target is given. Writing
    /// elsewhere always goes ahead; overwriting a file that was not read in
    /// full needs `force`.
    pub fn execute(
        &self,
        path: &Path,
        target: Option<&Path>,
        force: bool,
    ) -> Result<Decoded, EditorError> {
        let decoded = self.repo.load(path)?;
        let target = target.unwrap_or(path);
        if target == path {
            guard_in_place(&decoded, path, force)?;
        }
        self.repo.save(&decoded.scenario, target)?;
        Ok(decoded)
    }
}

pub struct SaveScenario {
    repo: Arc<dyn ScenarioRepo>,
}

impl SaveScenario {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, scenario: &Scenario, path: &Path) -> Result<(), StoreError> {
        if scenario.correct_team_count() != 1 {
            tracing::warn!(
                correct_teams = scenario.correct_team_count(),
                "Saving scenario without exactly one correct team"
            );
        }
        self.repo.save(scenario, path)
    }
}
