//! Check a scenario file without changing it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tactica_domain::{correct_team_index, Scenario};
use tactica_shared::DecodeWarning;

use crate::infrastructure::ports::{ScenarioRepo, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSummary {
    pub color: String,
    pub squads: usize,
    pub move_points: usize,
    pub correct: bool,
}

/// What a scenario file holds and what the decoder had to gloss over.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub title: String,
    pub teams: Vec<TeamSummary>,
    /// Index of the team the player will treat as correct
    pub correct_team: Option<usize>,
    pub correct_team_count: usize,
    pub warnings: Vec<DecodeWarning>,
}

impl ValidationReport {
    fn from_scenario(scenario: &Scenario, warnings: Vec<DecodeWarning>) -> Self {
        let teams = scenario
            .teams()
            .iter()
            .map(|team| TeamSummary {
                color: team.color().to_string(),
                squads: team.squads().len(),
                move_points: team.squads().iter().map(|s| s.move_points().len()).sum(),
                correct: team.is_correct(),
            })
            .collect();
        Self {
            title: scenario.title().to_string(),
            teams,
            correct_team: correct_team_index(scenario),
            correct_team_count: scenario.correct_team_count(),
            warnings,
        }
    }

    /// Readable in full and has exactly one correct team.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.correct_team_count == 1
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for (i, team) in self.teams.iter().enumerate() {
            let mark = if team.correct { "*" } else { " " };
            writeln!(
                f,
                "  {mark} [{i}] {}: {} squads, {} move points",
                team.color, team.squads, team.move_points
            )?;
        }
        match (self.correct_team_count, self.correct_team) {
            (0, _) | (_, None) => writeln!(f, "  no correct team")?,
            (1, _) => {}
            (n, Some(first)) => {
                writeln!(f, "  {n} teams marked correct; team {first} counts")?
            }
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {warning}")?;
        }
        Ok(())
    }
}

pub struct ValidateScenario {
    repo: Arc<dyn ScenarioRepo>,
}

impl ValidateScenario {
    pub fn new(repo: Arc<dyn ScenarioRepo>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, path: &Path) -> Result<ValidationReport, StoreError> {
        let decoded = self.repo.load(path)?;
        Ok(ValidationReport::from_scenario(
            &decoded.scenario,
            decoded.warnings,
        ))
    }
}
