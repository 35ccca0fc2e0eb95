//! Domain entities - the scenario tree

mod scenario;
mod squad;
mod team;

pub use scenario::{
    Scenario, DEFAULT_AUTHOR, DEFAULT_BACKGROUND, DEFAULT_TEAM_COLORS, DEFAULT_TITLE,
};
pub use squad::Squad;
pub use team::Team;
