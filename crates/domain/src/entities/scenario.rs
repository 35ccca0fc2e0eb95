//! Scenario - the root of a training exercise

use chrono::NaiveDate;

use crate::common::{empty_if_none, none_if_empty};
use crate::entities::Team;
use crate::error::DomainError;
use crate::value_objects::{CorrectnessMarker, PlacedLogo, TextAnnotation};

/// Title given to scenarios created from scratch in the editor
pub const DEFAULT_TITLE: &str = "New Scenario";

/// Background image used until the author picks one
pub const DEFAULT_BACKGROUND: &str = "default_map.png";

/// Author recorded on scenarios created from scratch
pub const DEFAULT_AUTHOR: &str = "editor";

/// Teams every blank scenario starts with, in display order
pub const DEFAULT_TEAM_COLORS: [&str; 3] = ["red", "blue", "green"];

/// A complete training exercise.
///
/// Owns its teams exclusively. Team order is display order and also the
/// order the correctness resolver scans in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scenario {
    title: String,
    /// Image reference (file name), never image bytes
    background: String,
    /// Empty when unset
    created_by: String,
    /// Free-form, not a validated calendar date; empty when unset
    date: String,
    teams: Vec<Team>,
    /// Opaque encoded raster overlay (freehand drawing layer)
    drawing_data: Option<String>,
    logos: Vec<PlacedLogo>,
    annotations: Vec<TextAnnotation>,
}

impl Scenario {
    pub fn new(title: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            background: background.into(),
            ..Self::default()
        }
    }

    /// The editor's starting point: default title and map, three empty teams,
    /// none of them marked correct.
    pub fn blank(created_on: NaiveDate) -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_BACKGROUND)
            .with_created_by(DEFAULT_AUTHOR)
            .with_date(created_on.format("%Y-%m-%d").to_string())
            .with_teams(DEFAULT_TEAM_COLORS.iter().map(|color| Team::new(*color)))
    }

    // Read-only accessors

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn created_by(&self) -> Option<&str> {
        none_if_empty(&self.created_by)
    }

    pub fn date(&self) -> Option<&str> {
        none_if_empty(&self.date)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    pub fn drawing_data(&self) -> Option<&str> {
        self.drawing_data.as_deref()
    }

    pub fn logos(&self) -> &[PlacedLogo] {
        &self.logos
    }

    pub fn annotations(&self) -> &[TextAnnotation] {
        &self.annotations
    }

    // Builder-style methods

    pub fn with_created_by(mut self, author: impl Into<String>) -> Self {
        self.created_by = author.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_teams(mut self, teams: impl IntoIterator<Item = Team>) -> Self {
        self.teams = teams.into_iter().collect();
        self
    }

    pub fn with_drawing_data(mut self, data: impl Into<String>) -> Self {
        self.drawing_data = Some(data.into());
        self
    }

    pub fn with_logos(mut self, logos: impl IntoIterator<Item = PlacedLogo>) -> Self {
        self.logos = logos.into_iter().collect();
        self
    }

    pub fn with_annotations(
        mut self,
        annotations: impl IntoIterator<Item = TextAnnotation>,
    ) -> Self {
        self.annotations = annotations.into_iter().collect();
        self
    }

    // Mutation (editor)

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    pub fn set_created_by(&mut self, author: Option<String>) {
        self.created_by = empty_if_none(author);
    }

    pub fn set_date(&mut self, date: Option<String>) {
        self.date = empty_if_none(date);
    }

    pub fn set_drawing_data(&mut self, data: Option<String>) {
        self.drawing_data = data;
    }

    pub fn add_team(&mut self, team: Team) {
        self.teams.push(team);
    }

    pub fn team_mut(&mut self, index: usize) -> Option<&mut Team> {
        self.teams.get_mut(index)
    }

    pub fn remove_team(&mut self, index: usize) -> Option<Team> {
        if index < self.teams.len() {
            Some(self.teams.remove(index))
        } else {
            None
        }
    }

    pub fn add_logo(&mut self, logo: PlacedLogo) {
        self.logos.push(logo);
    }

    pub fn add_annotation(&mut self, annotation: TextAnnotation) {
        self.annotations.push(annotation);
    }

    pub fn clear_overlays(&mut self) {
        self.drawing_data = None;
        self.logos.clear();
        self.annotations.clear();
    }

    // Correctness bookkeeping

    /// Make the team at `index` the single correct answer.
    ///
    /// Every other team is reset to `NotCorrect`, including teams that carried
    /// an unrecognized marker.
    pub fn mark_correct(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.teams.len() {
            return Err(DomainError::not_found("Team", index));
        }
        for (i, team) in self.teams.iter_mut().enumerate() {
            team.set_right_move(CorrectnessMarker::from(i == index));
        }
        Ok(())
    }

    /// Number of teams flagged correct. Anything other than one is a content
    /// problem the author should fix.
    pub fn correct_team_count(&self) -> usize {
        self.teams.iter().filter(|t| t.is_correct()).count()
    }
}
