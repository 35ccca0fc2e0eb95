//! Tool settings from the environment.

use std::str::FromStr;

use tactica_domain::WrongReasonRule;
use tactica_shared::{DecodeOptions, GapPolicy, DEFAULT_MAX_MOVE_POINTS};

/// Knobs for reading and writing scenario files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSettings {
    /// Highest `move_N` position probed per squad
    pub max_move_points: usize,
    pub gap_policy: GapPolicy,
    /// Require `color` and `right_move` on every team
    pub strict: bool,
    /// Collapse unrecognized `right_move` values to 0 on load
    pub normalize_markers: bool,
    /// Pretty-print written files
    pub pretty: bool,
    /// Which wrong-choice rationale the player shows
    pub wrong_reason_rule: WrongReasonRule,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            max_move_points: DEFAULT_MAX_MOVE_POINTS,
            gap_policy: GapPolicy::default(),
            strict: false,
            normalize_markers: false,
            pretty: true,
            wrong_reason_rule: WrongReasonRule::default(),
        }
    }
}

impl ToolSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            max_move_points: env_or(&lookup, "TACTICA_MAX_MOVE_POINTS", defaults.max_move_points),
            gap_policy: env_or(&lookup, "TACTICA_GAP_POLICY", defaults.gap_policy),
            strict: env_or(&lookup, "TACTICA_STRICT", defaults.strict),
            normalize_markers: env_or(
                &lookup,
                "TACTICA_NORMALIZE_MARKERS",
                defaults.normalize_markers,
            ),
            pretty: env_or(&lookup, "TACTICA_PRETTY", defaults.pretty),
            wrong_reason_rule: env_or(
                &lookup,
                "TACTICA_WRONG_REASON_RULE",
                defaults.wrong_reason_rule,
            ),
        }
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::new()
            .with_max_move_points(self.max_move_points)
            .with_gap_policy(self.gap_policy)
            .with_strict(self.strict)
            .with_normalized_markers(self.normalize_markers)
    }
}

fn env_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable setting");
            default
        }
    }
}
