//! Team - one candidate course of action in a scenario

use crate::entities::Squad;
use crate::value_objects::{CorrectnessMarker, Explanations};

/// A candidate course of action: its squads, its rationale, and whether it
/// is the intended answer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Team {
    /// Display color; by convention also the team's identity within a scenario
    color: String,
    squads: Vec<Squad>,
    right_move: CorrectnessMarker,
    explanations: Explanations,
}

impl Team {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..Self::default()
        }
    }

    /// Reconstruct from stored data
    pub fn from_parts(
        color: String,
        squads: Vec<Squad>,
        right_move: CorrectnessMarker,
        explanations: Explanations,
    ) -> Self {
        Self {
            color,
            squads,
            right_move,
            explanations,
        }
    }

    // Read-only accessors

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    pub fn right_move(&self) -> CorrectnessMarker {
        self.right_move
    }

    pub fn is_correct(&self) -> bool {
        self.right_move.is_correct()
    }

    pub fn explanations(&self) -> &Explanations {
        &self.explanations
    }

    // Builder-style methods

    pub fn with_squads(mut self, squads: impl IntoIterator<Item = Squad>) -> Self {
        self.squads = squads.into_iter().collect();
        self
    }

    pub fn with_right_move(mut self, marker: CorrectnessMarker) -> Self {
        self.right_move = marker;
        self
    }

    pub fn with_explanations(mut self, explanations: Explanations) -> Self {
        self.explanations = explanations;
        self
    }

    // Mutation (editor)

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_right_move(&mut self, marker: CorrectnessMarker) {
        self.right_move = marker;
    }

    pub fn add_squad(&mut self, squad: Squad) {
        self.squads.push(squad);
    }

    pub fn squad_mut(&mut self, index: usize) -> Option<&mut Squad> {
        self.squads.get_mut(index)
    }

    pub fn remove_squad(&mut self, index: usize) -> Option<Squad> {
        if index < self.squads.len() {
            Some(self.squads.remove(index))
        } else {
            None
        }
    }

    pub fn explanations_mut(&mut self) -> &mut Explanations {
        &mut self.explanations
    }
}
