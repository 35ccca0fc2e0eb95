//! Rationale text attached to each team.

use super::DistractorRank;

/// The three rationale strings shown to a trainee after a choice.
///
/// `right` is shown when this team is picked and it is the correct one.
/// `wrong_1`/`wrong_2` are shown when this team is picked but it is not.
/// Unset fields are empty strings, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Explanations {
    right: String,
    wrong_1: String,
    wrong_2: String,
}

impl Explanations {
    pub fn new(
        right: impl Into<String>,
        wrong_1: impl Into<String>,
        wrong_2: impl Into<String>,
    ) -> Self {
        Self {
            right: right.into(),
            wrong_1: wrong_1.into(),
            wrong_2: wrong_2.into(),
        }
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn wrong_1(&self) -> &str {
        &self.wrong_1
    }

    pub fn wrong_2(&self) -> &str {
        &self.wrong_2
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }

    pub fn set_wrong_1(&mut self, text: impl Into<String>) {
        self.wrong_1 = text.into();
    }

    pub fn set_wrong_2(&mut self, text: impl Into<String>) {
        self.wrong_2 = text.into();
    }

    /// Rationale for picking this team when it is the given distractor.
    ///
    /// Only two wrong-choice texts exist, so every distractor after the
    /// first shares `wrong_2`.
    pub fn for_distractor(&self, rank: DistractorRank) -> &str {
        if rank.is_first() {
            &self.wrong_1
        } else {
            &self.wrong_2
        }
    }

    /// True when no rationale has been written yet.
    pub fn is_blank(&self) -> bool {
        self.right.is_empty() && self.wrong_1.is_empty() && self.wrong_2.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blank() {
        assert!(Explanations::default().is_blank());
    }

    #[test]
    fn distractor_rank_selects_text() {
        let exp = Explanations::new("flank", "too slow", "exposed");
        assert_eq!(exp.for_distractor(DistractorRank::new(0)), "too slow");
        assert_eq!(exp.for_distractor(DistractorRank::new(1)), "exposed");
        assert_eq!(exp.for_distractor(DistractorRank::new(5)), "exposed");
    }

    #[test]
    fn setters_replace_text() {
        let mut exp = Explanations::default();
        exp.set_right("hold the ridge");
        exp.set_wrong_2("no cover");
        assert_eq!(exp.right(), "hold the ridge");
        assert_eq!(exp.wrong_1(), "");
        assert_eq!(exp.wrong_2(), "no cover");
        assert!(!exp.is_blank());
    }
}
