//! Correctness resolution
//!
//! Pure queries over a [`Scenario`] that identify the intended answer and
//! pick the rationale to show a trainee after a choice.

use std::str::FromStr;

use serde::Serialize;

use crate::entities::{Scenario, Team};
use crate::error::DomainError;
use crate::value_objects::DistractorRank;

/// How a wrong choice is mapped to one of the two wrong-choice rationales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrongReasonRule {
    /// `wrong_1` only when team 0 is chosen and team 1 is correct, `wrong_2`
    /// otherwise. Every existing scenario was written against this rule.
    #[default]
    Positional,
    /// Rank of the chosen team among the non-correct teams: the first
    /// distractor gets `wrong_1`, every later one `wrong_2`. Opt-in, since it
    /// shows different text for the "correct team first" layout.
    ByDistractorRank,
}

impl FromStr for WrongReasonRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rank" | "by_distractor_rank" => Ok(Self::ByDistractorRank),
            "positional" => Ok(Self::Positional),
            other => Err(DomainError::constraint(format!(
                "Unknown wrong-reason rule: {other} (expected `rank` or `positional`)"
            ))),
        }
    }
}

/// Outcome of a trainee's choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionVerdict {
    Correct {
        color: String,
        rationale: String,
    },
    Incorrect {
        selected_color: String,
        correct_color: String,
        reason: String,
    },
    /// The scenario has no team flagged correct, so the choice cannot be scored
    NoCorrectAnswer { selected_color: String },
}

impl SelectionVerdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// Text shown to the trainee.
    pub fn message(&self) -> String {
        match self {
            Self::Correct { rationale, .. } => rationale.clone(),
            Self::Incorrect {
                selected_color,
                correct_color,
                reason,
            } => format!(
                "You selected: Team {}\n\nCorrect team was: Team {}\n\nReason: {}",
                selected_color.to_uppercase(),
                correct_color.to_uppercase(),
                reason
            ),
            Self::NoCorrectAnswer { selected_color } => format!(
                "You selected: Team {}\n\nThis scenario has no correct team defined.",
                selected_color.to_uppercase()
            ),
        }
    }
}

/// First team in list order flagged correct, if any.
pub fn resolve_correct_team(scenario: &Scenario) -> Option<&Team> {
    scenario.teams().iter().find(|team| team.is_correct())
}

/// List index of the team [`resolve_correct_team`] returns.
pub fn correct_team_index(scenario: &Scenario) -> Option<usize> {
    scenario.teams().iter().position(Team::is_correct)
}

/// Rationale for choosing team `selected` when team `correct` is the answer.
///
/// The text always comes from the chosen team's explanations. Returns `None`
/// when either index is out of range or the choice was not wrong.
pub fn explain_wrong_choice(
    scenario: &Scenario,
    selected: usize,
    correct: usize,
    rule: WrongReasonRule,
) -> Option<&str> {
    let chosen = scenario.team(selected)?;
    scenario.team(correct)?;
    if selected == correct {
        return None;
    }

    let explanations = chosen.explanations();
    let text = match rule {
        WrongReasonRule::ByDistractorRank => {
            explanations.for_distractor(DistractorRank::among(selected, correct)?)
        }
        WrongReasonRule::Positional => {
            if selected == 0 && correct == 1 {
                explanations.wrong_1()
            } else {
                explanations.wrong_2()
            }
        }
    };
    Some(text)
}

/// Score a trainee's choice of team `selected`.
pub fn evaluate_selection(
    scenario: &Scenario,
    selected: usize,
    rule: WrongReasonRule,
) -> Result<SelectionVerdict, DomainError> {
    let chosen = scenario
        .team(selected)
        .ok_or_else(|| DomainError::not_found("Team", selected))?;

    let Some(correct) = correct_team_index(scenario) else {
        return Ok(SelectionVerdict::NoCorrectAnswer {
            selected_color: chosen.color().to_string(),
        });
    };

    if chosen.is_correct() {
        return Ok(SelectionVerdict::Correct {
            color: chosen.color().to_string(),
            rationale: chosen.explanations().right().to_string(),
        });
    }

    let reason = explain_wrong_choice(scenario, selected, correct, rule).unwrap_or_default();
    Ok(SelectionVerdict::Incorrect {
        selected_color: chosen.color().to_string(),
        correct_color: scenario.teams()[correct].color().to_string(),
        reason: reason.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{CorrectnessMarker, Explanations};

    fn team(color: &str, marker: i64) -> Team {
        Team::new(color)
            .with_right_move(CorrectnessMarker::from_raw(marker))
            .with_explanations(Explanations::new(
                format!("{color} right"),
                format!("{color} wrong 1"),
                format!("{color} wrong 2"),
            ))
    }

    fn scenario(markers: &[i64]) -> Scenario {
        let colors = ["red", "blue", "green", "black"];
        Scenario::new("Crossing", "river.png").with_teams(
            markers
                .iter()
                .zip(colors)
                .map(|(marker, color)| team(color, *marker)),
        )
    }

    #[test]
    fn none_match_yields_none() {
        let s = scenario(&[0, 2, -1]);
        assert!(resolve_correct_team(&s).is_none());
        assert_eq!(correct_team_index(&s), None);
    }

    #[test]
    fn first_match_wins() {
        let s = scenario(&[0, 1, 1]);
        let correct = resolve_correct_team(&s).expect("a correct team");
        assert_eq!(correct.color(), "blue");
        assert_eq!(correct_team_index(&s), Some(1));
    }

    #[test]
    fn empty_scenario_has_no_correct_team() {
        assert!(resolve_correct_team(&Scenario::default()).is_none());
    }

    #[test]
    fn wrong_reason_index_0_vs_correct_1_is_wrong_1() {
        let s = scenario(&[0, 1, 0]);
        for rule in [WrongReasonRule::ByDistractorRank, WrongReasonRule::Positional] {
            assert_eq!(explain_wrong_choice(&s, 0, 1, rule), Some("red wrong 1"));
        }
    }

    #[test]
    fn wrong_reason_index_2_vs_correct_0_is_wrong_2() {
        let s = scenario(&[1, 0, 0]);
        for rule in [WrongReasonRule::ByDistractorRank, WrongReasonRule::Positional] {
            assert_eq!(explain_wrong_choice(&s, 2, 0, rule), Some("green wrong 2"));
        }
    }

    #[test]
    fn rules_differ_for_first_distractor_after_correct() {
        // Correct team first: team 1 is the first distractor
        let s = scenario(&[1, 0, 0]);
        assert_eq!(
            explain_wrong_choice(&s, 1, 0, WrongReasonRule::ByDistractorRank),
            Some("blue wrong 1")
        );
        assert_eq!(
            explain_wrong_choice(&s, 1, 0, WrongReasonRule::Positional),
            Some("blue wrong 2")
        );
    }

    #[test]
    fn default_rule_is_positional() {
        let s = scenario(&[1, 0, 0]);
        assert_eq!(WrongReasonRule::default(), WrongReasonRule::Positional);
        assert_eq!(
            explain_wrong_choice(&s, 1, 0, WrongReasonRule::default()),
            Some("blue wrong 2")
        );
        let verdict = evaluate_selection(&s, 1, WrongReasonRule::default()).expect("verdict");
        assert!(verdict.message().ends_with("Reason: blue wrong 2"));
    }

    #[test]
    fn distractor_rank_handles_four_teams() {
        let s = scenario(&[0, 0, 1, 0]);
        let rule = WrongReasonRule::ByDistractorRank;
        assert_eq!(explain_wrong_choice(&s, 0, 2, rule), Some("red wrong 1"));
        assert_eq!(explain_wrong_choice(&s, 1, 2, rule), Some("blue wrong 2"));
        assert_eq!(explain_wrong_choice(&s, 3, 2, rule), Some("black wrong 2"));
    }

    #[test]
    fn explain_rejects_non_wrong_choices() {
        let s = scenario(&[0, 1, 0]);
        let rule = WrongReasonRule::default();
        assert_eq!(explain_wrong_choice(&s, 1, 1, rule), None);
        assert_eq!(explain_wrong_choice(&s, 7, 1, rule), None);
        assert_eq!(explain_wrong_choice(&s, 0, 7, rule), None);
    }

    #[test]
    fn evaluate_correct_choice() {
        let s = scenario(&[0, 1, 0]);
        let verdict = evaluate_selection(&s, 1, WrongReasonRule::default()).expect("verdict");
        assert!(verdict.is_correct());
        assert_eq!(verdict.message(), "blue right");
    }

    #[test]
    fn evaluate_wrong_choice() {
        let s = scenario(&[0, 1, 0]);
        let verdict = evaluate_selection(&s, 2, WrongReasonRule::default()).expect("verdict");
        assert_eq!(
            verdict,
            SelectionVerdict::Incorrect {
                selected_color: "green".to_string(),
                correct_color: "blue".to_string(),
                reason: "green wrong 2".to_string(),
            }
        );
        assert!(verdict.message().contains("Correct team was: Team BLUE"));
    }

    #[test]
    fn evaluate_without_correct_team() {
        let s = scenario(&[0, 0, 0]);
        let verdict = evaluate_selection(&s, 0, WrongReasonRule::default()).expect("verdict");
        assert!(matches!(verdict, SelectionVerdict::NoCorrectAnswer { .. }));
        assert!(!verdict.is_correct());
    }

    #[test]
    fn evaluate_out_of_range() {
        let s = scenario(&[0, 1, 0]);
        let err = evaluate_selection(&s, 3, WrongReasonRule::default()).expect_err("no team 3");
        assert_eq!(err, DomainError::not_found("Team", 3));
    }

    #[test]
    fn wrong_reason_rule_parses_from_config_names() {
        assert_eq!("rank".parse::<WrongReasonRule>(), Ok(WrongReasonRule::ByDistractorRank));
        assert_eq!(" Positional ".parse::<WrongReasonRule>(), Ok(WrongReasonRule::Positional));
        assert!(matches!(
            "random".parse::<WrongReasonRule>(),
            Err(DomainError::Constraint(_))
        ));
    }
}
