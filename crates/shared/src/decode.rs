//! Decoder: parsed JSON document -> scenario value model.
//!
//! One tolerant reader for every generation of scenario file. Only `title`
//! and `background` are hard requirements; everything else falls back to an
//! empty default. Unknown fields are ignored.
//!
//! Move points are probed as `move_1`, `move_2`, ... Under the default
//! [`GapPolicy::StopAtFirstGap`] the scan ends at the first absent position
//! and later keys are dropped. Older editors read files this way, so a file
//! with `move_1` and `move_3` has a one-point path everywhere. Dropped keys
//! are reported as [`DecodeWarning::TruncatedPath`].

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use tactica_domain::{
    CorrectnessMarker, Explanations, MovePoint, PlacedLogo, Scenario, Squad, Team, TextAnnotation,
};

use crate::error::{SchemaError, UnknownGapPolicy};
use crate::wire;

/// Probe bound of the last editor generation
pub const LEGACY_MAX_MOVE_POINTS: usize = 10;

/// Probe bound used unless configured otherwise: none, so every path the
/// encoder writes reads back in full
pub const DEFAULT_MAX_MOVE_POINTS: usize = usize::MAX;

type Object = Map<String, Value>;

// =============================================================================
// Options
// =============================================================================

/// What the decoder does when a move position is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Stop at the first missing position (compatible with every editor so far)
    #[default]
    StopAtFirstGap,
    /// Skip missing positions and read every present one up to the bound
    SkipMissing,
}

impl fmt::Display for GapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapPolicy::StopAtFirstGap => write!(f, "stop"),
            GapPolicy::SkipMissing => write!(f, "skip"),
        }
    }
}

impl FromStr for GapPolicy {
    type Err = UnknownGapPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stop" | "stop_at_first_gap" => Ok(GapPolicy::StopAtFirstGap),
            "skip" | "skip_missing" => Ok(GapPolicy::SkipMissing),
            _ => Err(UnknownGapPolicy(s.to_string())),
        }
    }
}

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    max_move_points: usize,
    gap_policy: GapPolicy,
    strict: bool,
    normalize_markers: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_move_points: DEFAULT_MAX_MOVE_POINTS,
            gap_policy: GapPolicy::StopAtFirstGap,
            strict: false,
            normalize_markers: false,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest move position probed. Never below [`LEGACY_MAX_MOVE_POINTS`],
    /// so files from the last editor generation always read in full.
    pub fn with_max_move_points(mut self, max: usize) -> Self {
        self.max_move_points = max.max(LEGACY_MAX_MOVE_POINTS);
        self
    }

    pub fn with_gap_policy(mut self, policy: GapPolicy) -> Self {
        self.gap_policy = policy;
        self
    }

    /// Require `color` and `right_move` on every team.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Collapse `right_move` values other than 0/1 to `NotCorrect` instead of
    /// preserving them.
    pub fn with_normalized_markers(mut self, normalize: bool) -> Self {
        self.normalize_markers = normalize;
        self
    }

    pub fn max_move_points(&self) -> usize {
        self.max_move_points
    }

    pub fn gap_policy(&self) -> GapPolicy {
        self.gap_policy
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn normalize_markers(&self) -> bool {
        self.normalize_markers
    }
}

// =============================================================================
// Report
// =============================================================================

/// Something in the document was accepted but not read as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeWarning {
    /// Move keys after a missing position were dropped
    TruncatedPath {
        squad: String,
        kept: usize,
        ignored: Vec<usize>,
    },
    /// Move keys beyond the probe bound were dropped
    ProbeLimitReached {
        squad: String,
        limit: usize,
        ignored: Vec<usize>,
    },
    /// `right_move` is neither 0 nor 1
    UnrecognizedMarker {
        team: String,
        value: i64,
        normalized: bool,
    },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::TruncatedPath {
                squad,
                kept,
                ignored,
            } => write!(
                f,
                "{squad}: path stops after move_{kept}; ignored positions {ignored:?}"
            ),
            DecodeWarning::ProbeLimitReached {
                squad,
                limit,
                ignored,
            } => write!(
                f,
                "{squad}: positions {ignored:?} are past the limit of {limit} move points"
            ),
            DecodeWarning::UnrecognizedMarker {
                team,
                value,
                normalized,
            } => {
                let action = if *normalized { "treated as 0" } else { "kept" };
                write!(f, "{team}: right_move {value} is not 0 or 1 ({action})")
            }
        }
    }
}

/// A decoded scenario and everything the decoder had to gloss over.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub scenario: Scenario,
    pub warnings: Vec<DecodeWarning>,
}

// =============================================================================
// Decoder
// =============================================================================

/// Decode with default options.
pub fn decode(document: &Value) -> Result<Scenario, SchemaError> {
    Decoder::default().decode(document)
}

#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode(&self, document: &Value) -> Result<Scenario, SchemaError> {
        self.decode_with_report(document).map(|decoded| decoded.scenario)
    }

    /// Decode, collecting warnings instead of discarding them.
    ///
    /// Fails without a partial result on the first schema error.
    pub fn decode_with_report(&self, document: &Value) -> Result<Decoded, SchemaError> {
        let mut warnings = Vec::new();
        let scenario = self.scenario(document, &mut warnings)?;
        tracing::debug!(
            title = scenario.title(),
            teams = scenario.teams().len(),
            warnings = warnings.len(),
            "Decoded scenario"
        );
        Ok(Decoded { scenario, warnings })
    }

    fn scenario(
        &self,
        document: &Value,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<Scenario, SchemaError> {
        let root = expect_object(document, "$")?;

        let title = required_str(root, "", wire::TITLE)?;
        let background = required_str(root, "", wire::BACKGROUND)?;
        let mut scenario = Scenario::new(title, background)
            .with_created_by(optional_str(root, "", wire::CREATED_BY)?.unwrap_or_default())
            .with_date(optional_str(root, "", wire::DATE)?.unwrap_or_default());

        if let Some(items) = optional_array(root, "", wire::TEAMS)? {
            for (i, item) in items.iter().enumerate() {
                let team = self.team(item, &format!("{}[{i}]", wire::TEAMS), warnings)?;
                scenario.add_team(team);
            }
        }

        if let Some(data) = optional_str(root, "", wire::DRAWING_DATA)? {
            scenario = scenario.with_drawing_data(data);
        }

        if let Some(items) = optional_array(root, "", wire::LOGOS)? {
            for (i, item) in items.iter().enumerate() {
                scenario.add_logo(placed_logo(item, &format!("{}[{i}]", wire::LOGOS))?);
            }
        }

        if let Some(items) = optional_array(root, "", wire::ANNOTATIONS)? {
            for (i, item) in items.iter().enumerate() {
                let path = format!("{}[{i}]", wire::ANNOTATIONS);
                scenario.add_annotation(text_annotation(item, &path)?);
            }
        }

        Ok(scenario)
    }

    fn team(
        &self,
        value: &Value,
        path: &str,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<Team, SchemaError> {
        let obj = expect_object(value, path)?;

        let (color, raw_marker) = if self.options.strict {
            (
                required_str(obj, path, wire::COLOR)?,
                Some(required_int(obj, path, wire::RIGHT_MOVE)?),
            )
        } else {
            (
                optional_str(obj, path, wire::COLOR)?.unwrap_or_default(),
                optional_int(obj, path, wire::RIGHT_MOVE)?,
            )
        };

        let mut marker = raw_marker
            .map(CorrectnessMarker::from_raw)
            .unwrap_or_default();
        if let CorrectnessMarker::Other(value) = marker {
            let normalized = self.options.normalize_markers;
            if normalized {
                marker = marker.normalized();
            }
            warnings.push(DecodeWarning::UnrecognizedMarker {
                team: path.to_string(),
                value,
                normalized,
            });
        }

        let explanations = match optional_object(obj, path, wire::EXPLANATIONS)? {
            Some(exp) => {
                let exp_path = join(path, wire::EXPLANATIONS);
                Explanations::new(
                    optional_str(exp, &exp_path, wire::RIGHT)?.unwrap_or_default(),
                    optional_str(exp, &exp_path, wire::WRONG_1)?.unwrap_or_default(),
                    optional_str(exp, &exp_path, wire::WRONG_2)?.unwrap_or_default(),
                )
            }
            None => Explanations::default(),
        };

        let mut squads = Vec::new();
        if let Some(items) = optional_array(obj, path, wire::SQUADS)? {
            for (i, item) in items.iter().enumerate() {
                let squad_path = format!("{path}.{}[{i}]", wire::SQUADS);
                squads.push(self.squad(item, &squad_path, warnings)?);
            }
        }

        Ok(Team::from_parts(color, squads, marker, explanations))
    }

    fn squad(
        &self,
        value: &Value,
        path: &str,
        warnings: &mut Vec<DecodeWarning>,
    ) -> Result<Squad, SchemaError> {
        let obj = expect_object(value, path)?;
        let limit = self.options.max_move_points;

        // Only keys actually present are visited, so the bound costs nothing.
        let mut positions: Vec<(usize, &Value)> = obj
            .iter()
            .filter(|(_, v)| !v.is_null())
            .filter_map(|(k, v)| wire::parse_move_key(k).map(|position| (position, v)))
            .collect();
        positions.sort_unstable_by_key(|(position, _)| *position);

        let taken = match self.options.gap_policy {
            GapPolicy::StopAtFirstGap => positions
                .iter()
                .enumerate()
                .take_while(|(i, (position, _))| *position == i + 1 && *position <= limit)
                .count(),
            GapPolicy::SkipMissing => positions
                .iter()
                .take_while(|(position, _)| *position <= limit)
                .count(),
        };

        let mut points = Vec::with_capacity(taken);
        for (position, point) in &positions[..taken] {
            points.push(move_point(point, &join(path, &wire::move_key(*position)))?);
        }

        let ignored: Vec<usize> = positions[taken..].iter().map(|(p, _)| *p).collect();
        if !ignored.is_empty() {
            let stopped_at_gap =
                self.options.gap_policy == GapPolicy::StopAtFirstGap && points.len() < limit;
            let warning = if stopped_at_gap {
                DecodeWarning::TruncatedPath {
                    squad: path.to_string(),
                    kept: points.len(),
                    ignored,
                }
            } else {
                DecodeWarning::ProbeLimitReached {
                    squad: path.to_string(),
                    limit,
                    ignored,
                }
            };
            tracing::debug!(%warning, "Move points dropped");
            warnings.push(warning);
        }

        let mut members = Vec::new();
        if let Some(items) = optional_array(obj, path, wire::MEMBERS)? {
            let members_path = join(path, wire::MEMBERS);
            for (i, item) in items.iter().enumerate() {
                let name = item
                    .as_str()
                    .ok_or_else(|| SchemaError::wrong_shape(format!("{members_path}[{i}]"), "a string"))?;
                members.push(name.to_string());
            }
        }

        let marker_icon = optional_str(obj, path, wire::MARKER_ICON)?;

        Ok(Squad::from_parts(points, members, marker_icon))
    }
}

fn move_point(value: &Value, path: &str) -> Result<MovePoint, SchemaError> {
    let obj = expect_object(value, path)?;
    Ok(MovePoint::new(
        required_f64(obj, path, wire::X)?,
        required_f64(obj, path, wire::Y)?,
    ))
}

fn placed_logo(value: &Value, path: &str) -> Result<PlacedLogo, SchemaError> {
    let obj = expect_object(value, path)?;
    Ok(PlacedLogo::new(
        required_str(obj, path, wire::FILENAME)?,
        required_f64(obj, path, wire::X)?,
        required_f64(obj, path, wire::Y)?,
        required_f64(obj, path, wire::WIDTH)?,
        required_f64(obj, path, wire::HEIGHT)?,
    ))
}

fn text_annotation(value: &Value, path: &str) -> Result<TextAnnotation, SchemaError> {
    let obj = expect_object(value, path)?;
    let font_size = match optional_int(obj, path, wire::FONT_SIZE)? {
        Some(size) => u32::try_from(size).map_err(|_| {
            SchemaError::wrong_shape(join(path, wire::FONT_SIZE), "a non-negative integer")
        })?,
        None => wire::DEFAULT_FONT_SIZE,
    };
    Ok(TextAnnotation::new(
        required_str(obj, path, wire::TEXT)?,
        required_f64(obj, path, wire::X)?,
        required_f64(obj, path, wire::Y)?,
        optional_str(obj, path, wire::COLOR)?.unwrap_or_default(),
        font_size,
    ))
}

// =============================================================================
// Field access helpers
// =============================================================================

fn join(base: &str, field: &str) -> String {
    if base.is_empty() {
        field.to_string()
    } else {
        format!("{base}.{field}")
    }
}

/// Field value, treating an explicit null as absent.
fn present<'a>(obj: &'a Object, field: &str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Object, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_shape(path, "an object"))
}

fn optional_str(obj: &Object, base: &str, field: &str) -> Result<Option<String>, SchemaError> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(SchemaError::wrong_shape(join(base, field), "a string")),
    }
}

fn required_str(obj: &Object, base: &str, field: &str) -> Result<String, SchemaError> {
    optional_str(obj, base, field)?.ok_or_else(|| SchemaError::missing(join(base, field)))
}

fn required_f64(obj: &Object, base: &str, field: &str) -> Result<f64, SchemaError> {
    let value = present(obj, field).ok_or_else(|| SchemaError::missing(join(base, field)))?;
    value
        .as_f64()
        .ok_or_else(|| SchemaError::wrong_shape(join(base, field), "a number"))
}

fn optional_int(obj: &Object, base: &str, field: &str) -> Result<Option<i64>, SchemaError> {
    match present(obj, field) {
        None => Ok(None),
        Some(value) => integral(value)
            .map(Some)
            .ok_or_else(|| SchemaError::wrong_shape(join(base, field), "an integer")),
    }
}

fn required_int(obj: &Object, base: &str, field: &str) -> Result<i64, SchemaError> {
    optional_int(obj, base, field)?.ok_or_else(|| SchemaError::missing(join(base, field)))
}

/// Integer value of a JSON number, accepting whole floats such as `1.0`.
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn optional_array<'a>(
    obj: &'a Object,
    base: &str,
    field: &str,
) -> Result<Option<&'a Vec<Value>>, SchemaError> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(SchemaError::wrong_shape(join(base, field), "an array")),
    }
}

fn optional_object<'a>(
    obj: &'a Object,
    base: &str,
    field: &str,
) -> Result<Option<&'a Object>, SchemaError> {
    match present(obj, field) {
        None => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(_) => Err(SchemaError::wrong_shape(join(base, field), "an object")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn squad_doc(squad: Value) -> Value {
        json!({
            "title": "T",
            "background": "map.png",
            "teams": [{ "color": "red", "right_move": 1, "squads": [squad] }]
        })
    }

    fn only_squad(scenario: &Scenario) -> &Squad {
        &scenario.teams()[0].squads()[0]
    }

    #[test]
    fn minimal_document_decodes_with_defaults() {
        let scenario = decode(&json!({ "title": "T", "background": "map.png" })).expect("decode");
        assert_eq!(scenario.title(), "T");
        assert_eq!(scenario.background(), "map.png");
        assert_eq!(scenario.created_by(), None);
        assert_eq!(scenario.date(), None);
        assert!(scenario.teams().is_empty());
        assert_eq!(scenario.drawing_data(), None);
        assert!(scenario.logos().is_empty());
        assert!(scenario.annotations().is_empty());
    }

    #[test]
    fn missing_background_is_schema_error() {
        let err = decode(&json!({ "title": "T", "teams": [] })).expect_err("must fail");
        assert_eq!(err, SchemaError::missing("background"));
    }

    #[test]
    fn missing_title_is_schema_error() {
        let err = decode(&json!({ "background": "map.png" })).expect_err("must fail");
        assert_eq!(err, SchemaError::missing("title"));
    }

    #[test]
    fn non_object_root_is_schema_error() {
        let err = decode(&json!([1, 2])).expect_err("must fail");
        assert_eq!(err, SchemaError::wrong_shape("$", "an object"));
    }

    #[test]
    fn teams_must_be_an_array() {
        let doc = json!({ "title": "T", "background": "map.png", "teams": { "color": "red" } });
        assert_eq!(
            decode(&doc).expect_err("must fail"),
            SchemaError::wrong_shape("teams", "an array")
        );
    }

    #[test]
    fn gap_stops_the_path() {
        let doc = squad_doc(json!({
            "move_1": { "x": 1, "y": 2 },
            "move_3": { "x": 5, "y": 6 }
        }));
        let decoded = Decoder::default().decode_with_report(&doc).expect("decode");
        let squad = only_squad(&decoded.scenario);
        assert_eq!(squad.move_points(), [MovePoint::new(1.0, 2.0)]);
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::TruncatedPath {
                squad: "teams[0].squads[0]".to_string(),
                kept: 1,
                ignored: vec![3],
            }]
        );
    }

    #[test]
    fn skip_policy_reads_past_gaps() {
        let doc = squad_doc(json!({
            "move_1": { "x": 1, "y": 2 },
            "move_3": { "x": 5, "y": 6 }
        }));
        let decoder = Decoder::new(DecodeOptions::new().with_gap_policy(GapPolicy::SkipMissing));
        let decoded = decoder.decode_with_report(&doc).expect("decode");
        assert_eq!(
            only_squad(&decoded.scenario).move_points(),
            [MovePoint::new(1.0, 2.0), MovePoint::new(5.0, 6.0)]
        );
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn probe_limit_is_reported() {
        let mut squad = Map::new();
        for position in 1..=12 {
            squad.insert(wire::move_key(position), json!({ "x": position, "y": 0 }));
        }
        let doc = squad_doc(Value::Object(squad));
        let decoder = Decoder::new(DecodeOptions::new().with_max_move_points(10));
        let decoded = decoder.decode_with_report(&doc).expect("decode");

        assert_eq!(only_squad(&decoded.scenario).move_points().len(), 10);
        assert!(matches!(
            &decoded.warnings[..],
            [DecodeWarning::ProbeLimitReached { limit: 10, ignored, .. }] if ignored == &vec![11, 12]
        ));
    }

    #[test]
    fn default_bound_reads_long_paths() {
        let mut squad = Map::new();
        for position in 1..=300 {
            squad.insert(wire::move_key(position), json!({ "x": position, "y": 0 }));
        }
        let decoded = Decoder::default()
            .decode_with_report(&squad_doc(Value::Object(squad)))
            .expect("decode");

        let points = only_squad(&decoded.scenario).move_points();
        assert_eq!(points.len(), 300);
        assert_eq!(points[299], MovePoint::new(300.0, 0.0));
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn huge_bound_only_visits_present_keys() {
        let doc = squad_doc(json!({ "move_1": { "x": 1, "y": 2 }, "move_9000": { "x": 3, "y": 4 } }));
        for policy in [GapPolicy::SkipMissing, GapPolicy::StopAtFirstGap] {
            let decoder = Decoder::new(
                DecodeOptions::new()
                    .with_gap_policy(policy)
                    .with_max_move_points(usize::MAX),
            );
            let decoded = decoder.decode_with_report(&doc).expect("decode");
            let expected = match policy {
                GapPolicy::SkipMissing => 2,
                GapPolicy::StopAtFirstGap => 1,
            };
            assert_eq!(only_squad(&decoded.scenario).move_points().len(), expected);
        }
    }

    #[test]
    fn skip_policy_drops_positions_past_bound() {
        let doc = squad_doc(json!({
            "move_2": { "x": 1, "y": 1 },
            "move_10": { "x": 2, "y": 2 },
            "move_40": { "x": 3, "y": 3 }
        }));
        let decoder = Decoder::new(
            DecodeOptions::new()
                .with_gap_policy(GapPolicy::SkipMissing)
                .with_max_move_points(10),
        );
        let decoded = decoder.decode_with_report(&doc).expect("decode");
        assert_eq!(
            only_squad(&decoded.scenario).move_points(),
            [MovePoint::new(1.0, 1.0), MovePoint::new(2.0, 2.0)]
        );
        assert!(matches!(
            &decoded.warnings[..],
            [DecodeWarning::ProbeLimitReached { limit: 10, ignored, .. }] if ignored == &vec![40]
        ));
    }

    #[test]
    fn probe_bound_is_never_below_legacy_limit() {
        let options = DecodeOptions::new().with_max_move_points(3);
        assert_eq!(options.max_move_points(), LEGACY_MAX_MOVE_POINTS);
    }

    #[test]
    fn move_point_requires_numeric_coordinates() {
        let doc = squad_doc(json!({ "move_1": { "x": "left", "y": 2 } }));
        assert_eq!(
            decode(&doc).expect_err("must fail"),
            SchemaError::wrong_shape("teams[0].squads[0].move_1.x", "a number")
        );
    }

    #[test]
    fn members_and_marker_icon_are_optional() {
        let doc = squad_doc(json!({
            "move_1": { "x": 1.5, "y": 2.5 },
            "members": ["Alpha 1", "Alpha 2"],
            "marker_icon": "infantry.png"
        }));
        let scenario = decode(&doc).expect("decode");
        let squad = only_squad(&scenario);
        assert_eq!(squad.members(), ["Alpha 1", "Alpha 2"]);
        assert_eq!(squad.marker_icon(), Some("infantry.png"));

        let bare = decode(&squad_doc(json!({}))).expect("decode");
        assert!(only_squad(&bare).members().is_empty());
        assert_eq!(only_squad(&bare).marker_icon(), None);
        assert!(only_squad(&bare).move_points().is_empty());
    }

    #[test]
    fn absent_explanations_are_blank() {
        let doc = json!({
            "title": "T", "background": "map.png",
            "teams": [
                { "color": "red", "right_move": 0 },
                { "color": "blue", "right_move": 1, "explanations": { "wrong_2": "exposed" } }
            ]
        });
        let scenario = decode(&doc).expect("decode");
        assert!(scenario.teams()[0].explanations().is_blank());
        let partial = scenario.teams()[1].explanations();
        assert_eq!(partial.right(), "");
        assert_eq!(partial.wrong_1(), "");
        assert_eq!(partial.wrong_2(), "exposed");
    }

    #[test]
    fn unrecognized_marker_is_kept_verbatim() {
        let doc = json!({
            "title": "T", "background": "map.png",
            "teams": [{ "color": "red", "right_move": 2 }]
        });
        let decoded = Decoder::default().decode_with_report(&doc).expect("decode");
        assert_eq!(decoded.scenario.teams()[0].right_move(), CorrectnessMarker::Other(2));
        assert_eq!(
            decoded.warnings,
            vec![DecodeWarning::UnrecognizedMarker {
                team: "teams[0]".to_string(),
                value: 2,
                normalized: false,
            }]
        );
    }

    #[test]
    fn unrecognized_marker_can_be_normalized() {
        let doc = json!({
            "title": "T", "background": "map.png",
            "teams": [{ "color": "red", "right_move": -4 }]
        });
        let decoder = Decoder::new(DecodeOptions::new().with_normalized_markers(true));
        let scenario = decoder.decode(&doc).expect("decode");
        assert_eq!(scenario.teams()[0].right_move(), CorrectnessMarker::NotCorrect);
    }

    #[test]
    fn whole_float_marker_is_accepted() {
        let doc = json!({
            "title": "T", "background": "map.png",
            "teams": [{ "color": "red", "right_move": 1.0 }]
        });
        assert!(decode(&doc).expect("decode").teams()[0].is_correct());
    }

    #[test]
    fn tolerant_reader_defaults_team_fields() {
        let doc = json!({ "title": "T", "background": "map.png", "teams": [{}] });
        let scenario = decode(&doc).expect("decode");
        assert_eq!(scenario.teams()[0].color(), "");
        assert_eq!(scenario.teams()[0].right_move(), CorrectnessMarker::NotCorrect);
    }

    #[test]
    fn strict_reader_requires_team_fields() {
        let decoder = Decoder::new(DecodeOptions::new().with_strict(true));
        let doc = json!({ "title": "T", "background": "map.png", "teams": [{ "color": "red" }] });
        assert_eq!(
            decoder.decode(&doc).expect_err("must fail"),
            SchemaError::missing("teams[0].right_move")
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc = json!({
            "title": "T", "background": "map.png", "version": 3,
            "teams": [{ "color": "red", "right_move": 1, "tint": "#f00",
                        "squads": [{ "move_1": { "x": 0, "y": 0, "z": 9 }, "speed": 4 }] }]
        });
        let scenario = decode(&doc).expect("decode");
        assert_eq!(only_squad(&scenario).move_points().len(), 1);
    }

    #[test]
    fn extension_fields_decode() {
        let doc = json!({
            "title": "T", "background": "map.png",
            "drawing_data": "iVBORw0KGgo=",
            "logos": [{ "filename": "hq.png", "x": 10, "y": 20, "width": 32, "height": 48 }],
            "annotations": [
                { "text": "Hill 203", "x": 5, "y": 6, "color": "black", "font_size": 18 },
                { "text": "Ford", "x": 7, "y": 8 }
            ]
        });
        let scenario = decode(&doc).expect("decode");
        assert_eq!(scenario.drawing_data(), Some("iVBORw0KGgo="));
        assert_eq!(
            scenario.logos(),
            [PlacedLogo::new("hq.png", 10.0, 20.0, 32.0, 48.0)]
        );
        assert_eq!(scenario.annotations()[0].font_size(), 18);
        assert_eq!(scenario.annotations()[1].font_size(), wire::DEFAULT_FONT_SIZE);
        assert_eq!(scenario.annotations()[1].color(), "");
    }

    #[test]
    fn negative_font_size_is_rejected() {
        let doc = json!({
            "title": "T", "background": "map.png",
            "annotations": [{ "text": "x", "x": 0, "y": 0, "font_size": -2 }]
        });
        assert_eq!(
            decode(&doc).expect_err("must fail"),
            SchemaError::wrong_shape("annotations[0].font_size", "a non-negative integer")
        );
    }

    #[test]
    fn gap_policy_parses_from_config_names() {
        assert_eq!("stop".parse::<GapPolicy>(), Ok(GapPolicy::StopAtFirstGap));
        assert_eq!(" Skip ".parse::<GapPolicy>(), Ok(GapPolicy::SkipMissing));
        assert_eq!(
            "both".parse::<GapPolicy>(),
            Err(UnknownGapPolicy("both".to_string()))
        );
    }
}
