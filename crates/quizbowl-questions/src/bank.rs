//! Read-only lookup over the loaded rounds.

use quizbowl_protocol::Round;

use crate::{QuestionError, builtin_rounds};

/// The question repository: a fixed list of rounds keyed by difficulty
/// id.
///
/// There are no mutation methods. Build one at startup with
/// [`QuestionBank::builtin`] and share it.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    rounds: Vec<Round>,
}

impl QuestionBank {
    /// Creates a bank over the given rounds. Lookup order follows the
    /// order of `rounds`.
    pub fn new(rounds: Vec<Round>) -> Self {
        tracing::debug!(rounds = rounds.len(), "question bank loaded");
        Self { rounds }
    }

    /// Creates a bank with the built-in easy/average/difficult rounds.
    pub fn builtin() -> Self {
        Self::new(builtin_rounds())
    }

    /// Looks up the round for a difficulty id.
    ///
    /// The id is trimmed and compared ASCII-case-insensitively, so
    /// `"Easy"` and `" easy "` both find the easy round.
    ///
    /// # Errors
    /// Returns [`QuestionError::NotFound`] if no round has that id.
    pub fn get(&self, difficulty: &str) -> Result<&Round, QuestionError> {
        let wanted = difficulty.trim();
        self.rounds
            .iter()
            .find(|r| r.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuestionError::NotFound(wanted.to_string()))
    }

    /// All rounds, in difficulty order.
    pub fn all(&self) -> &[Round] {
        &self.rounds
    }

    /// The difficulty ids this bank serves.
    pub fn difficulties(&self) -> impl Iterator<Item = &str> {
        self.rounds.iter().map(|r| r.id.as_str())
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_three_rounds_in_order() {
        let bank = QuestionBank::builtin();
        let ids: Vec<&str> = bank.difficulties().collect();
        assert_eq!(ids, ["easy", "average", "difficult"]);
    }

    #[test]
    fn test_get_easy_returns_ten_questions() {
        let bank = QuestionBank::builtin();
        let easy = bank.get("easy").expect("easy round exists");
        assert_eq!(easy.questions.len(), 10);
        assert_eq!(easy.points, 1);
        assert_eq!(easy.time_limit_seconds, 15);
    }

    #[test]
    fn test_every_question_has_four_options_and_answer_in_range() {
        let bank = QuestionBank::builtin();
        for round in bank.all() {
            assert_eq!(round.questions.len(), 10, "round {}", round.id);
            for q in &round.questions {
                assert_eq!(q.options.len(), 4, "question {}", q.id);
                assert!(q.answer_in_range(), "question {}", q.id);
            }
        }
    }

    #[test]
    fn test_question_ids_are_round_prefixed_and_unique() {
        let bank = QuestionBank::builtin();
        let mut seen = std::collections::HashSet::new();
        for round in bank.all() {
            for (i, q) in round.questions.iter().enumerate() {
                assert_eq!(q.id, format!("{}-{}", round.id, i + 1));
                assert!(seen.insert(q.id.clone()), "duplicate id {}", q.id);
            }
        }
    }

    #[test]
    fn test_get_is_case_insensitive_and_trims() {
        let bank = QuestionBank::builtin();
        assert_eq!(bank.get(" DIFFICULT ").unwrap().id, "difficult");
        assert_eq!(bank.get("Average").unwrap().id, "average");
    }

    #[test]
    fn test_get_unknown_returns_not_found() {
        let bank = QuestionBank::builtin();
        let result = bank.get("impossible");
        assert!(
            matches!(result, Err(QuestionError::NotFound(ref d)) if d == "impossible")
        );
    }

    #[test]
    fn test_get_empty_id_returns_not_found() {
        let bank = QuestionBank::builtin();
        assert!(bank.get("").is_err());
    }
}
