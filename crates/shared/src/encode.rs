//! Encoder: scenario value model -> JSON document.
//!
//! Output is deterministic. Fields are written in a fixed order and move
//! points are numbered `move_1..move_n` with no gaps, so any file this writes
//! reads back identically under the default decoder, and under every older
//! decoder generation up to its probe bound. Extension fields are only written when they hold something, which
//! keeps plain scenarios byte-compatible with older editors.

use serde_json::{Map, Value};
use tactica_domain::{Explanations, MovePoint, PlacedLogo, Scenario, Squad, Team, TextAnnotation};

use crate::wire;

pub fn encode(scenario: &Scenario) -> Value {
    let mut root = Map::new();
    root.insert(wire::TITLE.into(), scenario.title().into());
    root.insert(wire::BACKGROUND.into(), scenario.background().into());
    root.insert(
        wire::CREATED_BY.into(),
        scenario.created_by().unwrap_or_default().into(),
    );
    root.insert(wire::DATE.into(), scenario.date().unwrap_or_default().into());
    root.insert(
        wire::TEAMS.into(),
        Value::Array(scenario.teams().iter().map(team).collect()),
    );

    if let Some(data) = scenario.drawing_data() {
        root.insert(wire::DRAWING_DATA.into(), data.into());
    }
    if !scenario.logos().is_empty() {
        root.insert(
            wire::LOGOS.into(),
            Value::Array(scenario.logos().iter().map(logo).collect()),
        );
    }
    if !scenario.annotations().is_empty() {
        root.insert(
            wire::ANNOTATIONS.into(),
            Value::Array(scenario.annotations().iter().map(annotation).collect()),
        );
    }

    Value::Object(root)
}

/// Encode and serialize in one step.
pub fn encode_to_string(scenario: &Scenario, pretty: bool) -> Result<String, serde_json::Error> {
    let document = encode(scenario);
    if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
}

fn team(team: &Team) -> Value {
    let mut obj = Map::new();
    obj.insert(wire::COLOR.into(), team.color().into());
    obj.insert(wire::RIGHT_MOVE.into(), team.right_move().raw().into());
    obj.insert(wire::EXPLANATIONS.into(), explanations(team.explanations()));
    obj.insert(
        wire::SQUADS.into(),
        Value::Array(team.squads().iter().map(squad).collect()),
    );
    Value::Object(obj)
}

fn explanations(explanations: &Explanations) -> Value {
    let mut obj = Map::new();
    obj.insert(wire::RIGHT.into(), explanations.right().into());
    obj.insert(wire::WRONG_1.into(), explanations.wrong_1().into());
    obj.insert(wire::WRONG_2.into(), explanations.wrong_2().into());
    Value::Object(obj)
}

fn squad(squad: &Squad) -> Value {
    let mut obj = Map::new();
    for (i, point) in squad.move_points().iter().enumerate() {
        obj.insert(wire::move_key(i + 1), move_point(point));
    }
    if !squad.members().is_empty() {
        obj.insert(wire::MEMBERS.into(), squad.members().into());
    }
    if let Some(icon) = squad.marker_icon() {
        obj.insert(wire::MARKER_ICON.into(), icon.into());
    }
    Value::Object(obj)
}

fn move_point(point: &MovePoint) -> Value {
    let mut obj = Map::new();
    obj.insert(wire::X.into(), number(point.x()));
    obj.insert(wire::Y.into(), number(point.y()));
    Value::Object(obj)
}

fn logo(logo: &PlacedLogo) -> Value {
    let mut obj = Map::new();
    obj.insert(wire::FILENAME.into(), logo.filename().into());
    obj.insert(wire::X.into(), number(logo.x()));
    obj.insert(wire::Y.into(), number(logo.y()));
    obj.insert(wire::WIDTH.into(), number(logo.width()));
    obj.insert(wire::HEIGHT.into(), number(logo.height()));
    Value::Object(obj)
}

fn annotation(annotation: &TextAnnotation) -> Value {
    let mut obj = Map::new();
    obj.insert(wire::TEXT.into(), annotation.text().into());
    obj.insert(wire::X.into(), number(annotation.x()));
    obj.insert(wire::Y.into(), number(annotation.y()));
    obj.insert(wire::COLOR.into(), annotation.color().into());
    obj.insert(wire::FONT_SIZE.into(), annotation.font_size().into());
    Value::Object(obj)
}

/// JSON has no NaN or infinity; those are written as 0.0.
fn number(value: f64) -> Value {
    match serde_json::Number::from_f64(value) {
        Some(n) => Value::Number(n),
        None => {
            tracing::warn!(value, "Non-finite coordinate written as 0.0");
            Value::from(0.0)
        }
    }
}
