//! Core protocol types for Quiz Bowl's JSON API.
//!
//! Every type in this module travels "on the wire": it is the body of a
//! request or response of the HTTP API, so its serde attributes define
//! the JSON shape clients see.
//!
//! The API uses camelCase field names (`hostTeamName`,
//! `timeLimitSeconds`), so most structs carry
//! `#[serde(rename_all = "camelCase")]`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// AnswerLetter
// ---------------------------------------------------------------------------

/// The letter naming one of a question's four options.
///
/// Letters map to option positions: `A` is position 0, `B` is 1, and so
/// on. Serialized as the bare letter (`"A"`), which is what the unit
/// variants produce by default.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
pub enum AnswerLetter {
    A,
    B,
    C,
    D,
}

impl AnswerLetter {
    /// All letters in option order.
    pub const ALL: [AnswerLetter; 4] =
        [Self::A, Self::B, Self::C, Self::D];

    /// Returns the letter for a 0-based option position, or `None` if
    /// the position is past `D`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The 0-based option position this letter names.
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// The uppercase character for this letter.
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for AnswerLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for AnswerLetter {
    type Error = ProtocolError;

    /// Accepts `A`–`D` in either case.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            _ => Err(ProtocolError::InvalidLetter(c)),
        }
    }
}

impl FromStr for AnswerLetter {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            (Some(c), Some(_)) => Err(ProtocolError::InvalidLetter(c)),
            (None, _) => Err(ProtocolError::InvalidLetter(' ')),
        }
    }
}

// ---------------------------------------------------------------------------
// Question / Round
// ---------------------------------------------------------------------------

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, e.g. `"easy-1"`.
    pub id: String,
    /// The question text shown to players.
    pub prompt: String,
    /// The answer options in display order (four in the built-in bank).
    pub options: Vec<String>,
    /// Which option is correct.
    pub answer: AnswerLetter,
}

impl Question {
    /// Returns the text of the option named by `letter`, if it exists.
    pub fn option(&self, letter: AnswerLetter) -> Option<&str> {
        self.options.get(letter.index()).map(String::as_str)
    }

    /// Returns the text of the correct option.
    ///
    /// `None` only if `answer` points past the end of `options`.
    pub fn correct_option(&self) -> Option<&str> {
        self.option(self.answer)
    }

    /// Returns `true` if `answer` names an existing option.
    pub fn answer_in_range(&self) -> bool {
        self.answer.index() < self.options.len()
    }
}

/// A themed, difficulty-tagged set of questions sharing a point value
/// and a per-question time limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Difficulty id (`"easy"`, `"average"`, `"difficult"`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Points awarded per question (informational; nothing is scored).
    pub points: u32,
    /// Seconds given to answer each question.
    pub time_limit_seconds: u32,
    /// The questions in play order.
    pub questions: Vec<Question>,
}

impl Round {
    /// Returns the question at `index`, if any.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions in the round.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if the round has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Body of `GET /api/questions` when no difficulty is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundList {
    pub rounds: Vec<Round>,
}

/// Query string of `GET /api/questions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsQuery {
    /// Difficulty id to look up. Absent means "all rounds".
    pub difficulty: Option<String>,
}

/// Either shape `GET /api/questions` can answer with.
///
/// `#[serde(untagged)]` means no wrapper is added: a `Single` round is
/// serialized as the round object itself, `All` as `{"rounds": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionsResponse {
    All(RoundList),
    Single(Round),
}

// ---------------------------------------------------------------------------
// Rooms
// ---------------------------------------------------------------------------

/// A server-issued room code: six characters from `A`–`Z` and `0`–`9`.
///
/// Newtype wrapper so a room code can't be confused with a team name or
/// the client's accepted join code. `#[serde(transparent)]` serializes
/// it as the bare string.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct RoomCode(pub String);

impl RoomCode {
    /// Normalizes user input for lookup by uppercasing it. Surrounding
    /// whitespace is kept, so a padded code does not match.
    pub fn normalized(raw: &str) -> Self {
        Self(raw.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A room record, as stored by the registry and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub code: RoomCode,
    /// The creating team's name, already trimmed.
    pub host_team_name: String,
    /// When the room was created (RFC 3339, UTC).
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/rooms`.
///
/// A missing `teamName` deserializes as the empty string, which then
/// fails the length check instead of the JSON parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub team_name: String,
}

/// The `{ "error": "..." }` body of every non-success API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
