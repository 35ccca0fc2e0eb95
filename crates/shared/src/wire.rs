//! Field names of the scenario file format.
//!
//! Every generation of the editor has written the same snake_case names.
//! Move points are the one oddity: instead of an array, a squad carries one
//! object per waypoint under `move_1`, `move_2`, ... in path order.

pub const TITLE: &str = "title";
pub const BACKGROUND: &str = "background";
pub const CREATED_BY: &str = "created_by";
pub const DATE: &str = "date";
pub const TEAMS: &str = "teams";
pub const DRAWING_DATA: &str = "drawing_data";
pub const LOGOS: &str = "logos";
pub const ANNOTATIONS: &str = "annotations";

pub const COLOR: &str = "color";
pub const RIGHT_MOVE: &str = "right_move";
pub const EXPLANATIONS: &str = "explanations";
pub const SQUADS: &str = "squads";

pub const RIGHT: &str = "right";
pub const WRONG_1: &str = "wrong_1";
pub const WRONG_2: &str = "wrong_2";

pub const MEMBERS: &str = "members";
pub const MARKER_ICON: &str = "marker_icon";

pub const X: &str = "x";
pub const Y: &str = "y";

pub const FILENAME: &str = "filename";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";

pub const TEXT: &str = "text";
pub const FONT_SIZE: &str = "font_size";

/// Font size assumed for annotations that do not carry one
pub const DEFAULT_FONT_SIZE: u32 = 16;

const MOVE_PREFIX: &str = "move_";

/// Key of the waypoint at 1-based `position`.
pub fn move_key(position: usize) -> String {
    format!("{MOVE_PREFIX}{position}")
}

/// Inverse of [`move_key`]: the 1-based position a key names, if it is a
/// well-formed move key.
pub fn parse_move_key(key: &str) -> Option<usize> {
    let digits = key.strip_prefix(MOVE_PREFIX)?;
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
