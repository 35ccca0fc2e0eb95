//! Application composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    file_store::FileScenarioStore,
    ports::{ClockPort, ResultSink, ScenarioRepo},
    settings::ToolSettings,
};
use crate::use_cases::{
    EvaluateChoice, MarkCorrectTeam, NormalizeScenario, OpenForEditing, OpenForPlay, PlaySession,
    SaveScenario, ValidateScenario,
};

/// All use cases, wired to their adapters.
pub struct App {
    pub use_cases: UseCases,
}

pub struct UseCases {
    pub open_for_editing: OpenForEditing,
    pub open_for_play: OpenForPlay,
    pub mark_correct: MarkCorrectTeam,
    pub normalize: NormalizeScenario,
    pub save: SaveScenario,
    pub evaluate: EvaluateChoice,
    pub session: PlaySession,
    pub validate: ValidateScenario,
}

impl App {
    pub fn new(settings: &ToolSettings) -> Self {
        let store = Arc::new(FileScenarioStore::new(
            settings.decode_options(),
            settings.pretty,
        ));
        let mut app = Self::with_ports(store.clone(), store, Arc::new(SystemClock::new()));
        let rule = settings.wrong_reason_rule;
        app.use_cases.evaluate = app.use_cases.evaluate.with_rule(rule);
        app.use_cases.session = app.use_cases.session.with_rule(rule);
        app
    }

    pub fn with_ports(
        repo: Arc<dyn ScenarioRepo>,
        sink: Arc<dyn ResultSink>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            use_cases: UseCases {
                open_for_editing: OpenForEditing::new(repo.clone(), clock),
                open_for_play: OpenForPlay::new(repo.clone()),
                mark_correct: MarkCorrectTeam::new(repo.clone()),
                normalize: NormalizeScenario::new(repo.clone()),
                save: SaveScenario::new(repo.clone()),
                evaluate: EvaluateChoice::new(sink),
                session: PlaySession::new(repo.clone()),
                validate: ValidateScenario::new(repo),
            },
        }
    }
}
