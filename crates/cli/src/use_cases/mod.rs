//! Use cases - one struct per user-facing operation, wired to ports.

pub mod editor;
pub mod player;
pub mod validate;

pub use editor::{EditorError, MarkCorrectTeam, NormalizeScenario, OpenForEditing, SaveScenario};
pub use player::{EvaluateChoice, Evaluation, OpenForPlay, PlayError, PlaySession};
pub use validate::{TeamSummary, ValidateScenario, ValidationReport};
