//! The room registry: every room created since the process started.
//!
//! # Concurrency note
//!
//! `RoomRegistry` is NOT thread-safe by itself; it is a plain `HashMap`.
//! It is owned by a single task (see [`spawn_registry`](crate::spawn_registry))
//! and reached through a channel, which is what makes the code-collision
//! retry loop race-free.

use std::collections::HashMap;

use chrono::Utc;
use quizbowl_protocol::{Room, RoomCode};

use crate::{CodeSource, RandomCodes, RoomError};

/// Shortest accepted team name, in characters, after trimming.
pub const TEAM_NAME_MIN: usize = 2;

/// Longest accepted team name, in characters, after trimming.
pub const TEAM_NAME_MAX: usize = 20;

/// Trims `raw` and checks its length against
/// [`TEAM_NAME_MIN`]..=[`TEAM_NAME_MAX`].
///
/// Length counts Unicode scalar values, so "Équipe" is six characters.
///
/// # Errors
/// Returns [`RoomError::InvalidTeamName`] when the trimmed name is out of
/// range.
pub fn validate_team_name(raw: &str) -> Result<&str, RoomError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if (TEAM_NAME_MIN..=TEAM_NAME_MAX).contains(&len) {
        Ok(trimmed)
    } else {
        Err(RoomError::InvalidTeamName)
    }
}

/// Stores rooms keyed by their code.
///
/// Rooms are never updated or removed; they live as long as the registry.
///
/// ```text
/// create(team) ──→ validate ──→ draw code ──(taken?)──→ draw again
///                                   │
///                                   ▼ (free)
///                              store + return
/// ```
pub struct RoomRegistry<S: CodeSource = RandomCodes> {
    rooms: HashMap<RoomCode, Room>,
    codes: S,
}

impl RoomRegistry<RandomCodes> {
    /// Creates an empty registry drawing codes from the thread RNG.
    pub fn new() -> Self {
        Self::with_source(RandomCodes)
    }
}

impl Default for RoomRegistry<RandomCodes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CodeSource> RoomRegistry<S> {
    /// Creates an empty registry drawing candidate codes from `codes`.
    pub fn with_source(codes: S) -> Self {
        Self {
            rooms: HashMap::new(),
            codes,
        }
    }

    /// Creates a room hosted by `team_name`.
    ///
    /// The name is stored trimmed. The code is the first candidate from
    /// the code source that no live room already uses; there is no retry
    /// limit.
    ///
    /// # Errors
    /// Returns [`RoomError::InvalidTeamName`] if the trimmed name is not
    /// 2–20 characters. Nothing is stored in that case.
    pub fn create(&mut self, team_name: &str) -> Result<&Room, RoomError> {
        let host_team_name = validate_team_name(team_name)?.to_string();
        let code = self.unused_code();

        let room = Room {
            code: code.clone(),
            host_team_name,
            created_at: Utc::now(),
        };

        tracing::info!(%code, team = %room.host_team_name, "room created");

        Ok(self.rooms.entry(code).or_insert(room))
    }

    /// Looks up a room. `code` is uppercased first, so lookups are
    /// case-insensitive.
    ///
    /// # Errors
    /// Returns [`RoomError::NotFound`] if no room has that code.
    pub fn get(&self, code: &str) -> Result<&Room, RoomError> {
        let code = RoomCode::normalized(code);
        match self.rooms.get(&code) {
            Some(room) => Ok(room),
            None => Err(RoomError::NotFound(code)),
        }
    }

    /// Returns the number of live rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no room has been created.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn unused_code(&mut self) -> RoomCode {
        let mut attempts = 1u32;
        let mut code = self.codes.next_code();
        while self.rooms.contains_key(&code) {
            tracing::debug!(%code, attempts, "room code collision, redrawing");
            attempts += 1;
            code = self.codes.next_code();
        }
        code
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Naming convention: `test_{function}_{scenario}_{expected}`.

    use std::collections::VecDeque;

    use super::*;
    use crate::{CODE_ALPHABET, CODE_LENGTH};

    /// Hands out a fixed list of codes in order; used to force
    /// collisions deterministically.
    struct Scripted(VecDeque<&'static str>);

    impl CodeSource for Scripted {
        fn next_code(&mut self) -> RoomCode {
            RoomCode(self.0.pop_front().expect("script ran out").to_string())
        }
    }

    fn scripted(codes: &[&'static str]) -> RoomRegistry<Scripted> {
        RoomRegistry::with_source(Scripted(codes.iter().copied().collect()))
    }

    // =====================================================================
    // validate_team_name()
    // =====================================================================

    #[test]
    fn test_validate_team_name_bounds() {
        assert!(validate_team_name("ab").is_ok());
        assert!(validate_team_name(&"x".repeat(20)).is_ok());
        assert!(validate_team_name("a").is_err());
        assert!(validate_team_name(&"x".repeat(21)).is_err());
    }

    #[test]
    fn test_validate_team_name_counts_after_trim() {
        assert!(validate_team_name("   a   ").is_err());
        assert_eq!(validate_team_name("  Owls  ").unwrap(), "Owls");
    }

    #[test]
    fn test_validate_team_name_counts_characters_not_bytes() {
        // 20 two-byte characters is 40 bytes but still 20 characters.
        assert!(validate_team_name(&"é".repeat(20)).is_ok());
    }

    // =====================================================================
    // create()
    // =====================================================================

    #[test]
    fn test_create_valid_name_returns_trimmed_room() {
        let mut reg = RoomRegistry::new();

        let room = reg.create("  Night Owls ").expect("should succeed");

        assert_eq!(room.host_team_name, "Night Owls");
        assert_eq!(room.code.as_str().len(), CODE_LENGTH);
        assert!(room.code.as_str().bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_create_invalid_name_stores_nothing() {
        let mut reg = RoomRegistry::new();
        let too_long = "z".repeat(21);

        for bad in ["", " ", "x", "  y  ", too_long.as_str()] {
            let result = reg.create(bad);
            assert!(
                matches!(result, Err(RoomError::InvalidTeamName)),
                "{bad:?} should be rejected"
            );
        }
        assert!(reg.is_empty());
    }

    #[test]
    fn test_create_collision_redraws_until_unused() {
        let mut reg = scripted(&["AAAAAA", "AAAAAA", "AAAAAA", "BBBBBB"]);

        let first = reg.create("Owls").unwrap().code.clone();
        let second = reg.create("Hawks").unwrap().code.clone();

        assert_eq!(first, RoomCode("AAAAAA".into()));
        assert_eq!(second, RoomCode("BBBBBB".into()));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_create_sequential_rooms_get_distinct_codes() {
        let mut reg = RoomRegistry::new();
        let a = reg.create("Owls").unwrap().code.clone();
        let b = reg.create("Hawks").unwrap().code.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_create_collision_keeps_original_room() {
        let mut reg = scripted(&["AAAAAA", "AAAAAA", "CCCCCC"]);
        reg.create("Owls").unwrap();
        reg.create("Hawks").unwrap();

        assert_eq!(reg.get("AAAAAA").unwrap().host_team_name, "Owls");
        assert_eq!(reg.get("CCCCCC").unwrap().host_team_name, "Hawks");
    }

    // =====================================================================
    // get()
    // =====================================================================

    #[test]
    fn test_get_any_case_returns_same_room() {
        let mut reg = scripted(&["AB12CD"]);
        let created = reg.create("Owls").unwrap().clone();

        assert_eq!(reg.get("AB12CD").unwrap(), &created);
        assert_eq!(reg.get("ab12cd").unwrap(), &created);
        assert_eq!(reg.get("aB12cD").unwrap(), &created);
    }

    #[test]
    fn test_get_padded_code_is_not_found() {
        let mut reg = scripted(&["AB12CD"]);
        reg.create("Owls").unwrap();

        assert!(matches!(reg.get(" ab12cd "), Err(RoomError::NotFound(_))));
    }

    #[test]
    fn test_get_unknown_returns_not_found_with_normalized_code() {
        let reg = RoomRegistry::new();

        let result = reg.get("zz99zz");

        assert!(
            matches!(result, Err(RoomError::NotFound(ref c)) if c.as_str() == "ZZ99ZZ")
        );
    }
}
