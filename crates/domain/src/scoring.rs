//! Test-session scoring across several scenarios.

use serde::Serialize;

use crate::resolution::SelectionVerdict;

/// Running tally of a trainee's answers.
///
/// Choices in scenarios without a correct team are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreCard {
    right: u32,
    wrong: u32,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: &SelectionVerdict) {
        match verdict {
            SelectionVerdict::Correct { .. } => self.right += 1,
            SelectionVerdict::Incorrect { .. } => self.wrong += 1,
            SelectionVerdict::NoCorrectAnswer { .. } => {}
        }
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn total(&self) -> u32 {
        self.right + self.wrong
    }

    /// Percentage of right answers, rounded to the nearest whole number.
    /// Zero when nothing has been scored.
    pub fn score_percent(&self) -> u32 {
        if self.total() == 0 {
            return 0;
        }
        let ratio = f64::from(self.right) / f64::from(self.total());
        (ratio * 100.0).round() as u32
    }
}

impl<'a> FromIterator<&'a SelectionVerdict> for ScoreCard {
    fn from_iter<I: IntoIterator<Item = &'a SelectionVerdict>>(iter: I) -> Self {
        let mut card = Self::new();
        for verdict in iter {
            card.record(verdict);
        }
        card
    }
}
