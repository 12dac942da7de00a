//! The round played when the server cannot provide one.

use quizbowl_protocol::{AnswerLetter, Question, Round};

/// A two-question "easy" round bundled with the client so the game
/// stays playable without a server.
///
/// Its questions are the first two of the server's easy round.
pub fn fallback_round() -> Round {
    Round {
        id: "easy".to_string(),
        title: "🟢 EASY".to_string(),
        points: 1,
        time_limit_seconds: 15,
        questions: vec![
            Question {
                id: "easy-1".to_string(),
                prompt: "What does CPU stand for?".to_string(),
                options: vec![
                    "Central Processing Unit".to_string(),
                    "Computer Personal Unit".to_string(),
                    "Central Program Utility".to_string(),
                    "Core Processing User".to_string(),
                ],
                answer: AnswerLetter::A,
            },
            Question {
                id: "easy-2".to_string(),
                prompt: "Which of the following is an input device?".to_string(),
                options: ["Monitor", "Printer", "Keyboard", "Speaker"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                answer: AnswerLetter::C,
            },
        ],
    }
}
