//! Correctness marker and distractor ranking.
//!
//! Scenario files carry correctness as a bare integer (`right_move`), where
//! `1` marks the intended answer. These types give that convention a name.

use std::fmt;

/// Tagged form of a team's `right_move` integer.
///
/// `1` is `Correct` and `0` is `NotCorrect`. Any other value is kept verbatim
/// in `Other` so it survives a load/save cycle; it is never treated as correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CorrectnessMarker {
    Correct,
    #[default]
    NotCorrect,
    Other(i64),
}

impl CorrectnessMarker {
    pub fn from_raw(value: i64) -> Self {
        match value {
            1 => Self::Correct,
            0 => Self::NotCorrect,
            other => Self::Other(other),
        }
    }

    /// The integer written to the file.
    pub fn raw(self) -> i64 {
        match self {
            Self::Correct => 1,
            Self::NotCorrect => 0,
            Self::Other(value) => value,
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Collapse unrecognized values to `NotCorrect`.
    pub fn normalized(self) -> Self {
        match self {
            Self::Other(_) => Self::NotCorrect,
            known => known,
        }
    }
}

impl From<bool> for CorrectnessMarker {
    fn from(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::NotCorrect
        }
    }
}

impl fmt::Display for CorrectnessMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::NotCorrect => write!(f, "not correct"),
            Self::Other(value) => write!(f, "unrecognized ({})", value),
        }
    }
}

/// Position of a wrongly chosen team among the distractors.
///
/// Distractors are the teams that are not the correct one, counted in list
/// order starting at zero. The rank, not the raw list index, decides which
/// wrong-choice rationale applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DistractorRank(usize);

impl DistractorRank {
    pub fn new(rank: usize) -> Self {
        Self(rank)
    }

    /// Rank of `selected` among the teams other than `correct`.
    ///
    /// Returns `None` when the selection is the correct team itself.
    pub fn among(selected: usize, correct: usize) -> Option<Self> {
        use std::cmp::Ordering;

        match selected.cmp(&correct) {
            Ordering::Less => Some(Self(selected)),
            Ordering::Equal => None,
            Ordering::Greater => Some(Self(selected - 1)),
        }
    }

    pub fn value(self) -> usize {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 0
    }
}
