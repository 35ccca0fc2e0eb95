//! Tactica Domain - the scenario value model.
//!
//! A scenario is a background map, a list of candidate teams (courses of
//! action) with their squads' movement paths, and the rationale shown to a
//! trainee after choosing. Exactly one team is meant to be correct; the model
//! records that as a convention and [`resolution`] queries it.

pub mod common;
pub mod entities;
pub mod error;
pub mod resolution;
pub mod scoring;
pub mod value_objects;

pub use entities::{
    Scenario, Squad, Team, DEFAULT_AUTHOR, DEFAULT_BACKGROUND, DEFAULT_TEAM_COLORS, DEFAULT_TITLE,
};
pub use error::DomainError;
pub use resolution::{
    correct_team_index, evaluate_selection, explain_wrong_choice, resolve_correct_team,
    SelectionVerdict, WrongReasonRule,
};
pub use scoring::ScoreCard;
pub use value_objects::{
    CorrectnessMarker, DistractorRank, Explanations, MovePoint, PlacedLogo, TextAnnotation,
};
