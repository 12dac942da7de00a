//! Room code generation.
//!
//! A room code is [`CODE_LENGTH`] characters drawn uniformly from
//! [`CODE_ALPHABET`]. With 36^6 ≈ 2.2 billion codes, collisions among
//! live rooms are rare enough that the registry simply retries.

use quizbowl_protocol::RoomCode;
use rand::Rng;

/// Number of characters in a room code.
pub const CODE_LENGTH: usize = 6;

/// Characters a room code is drawn from.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produces candidate room codes.
///
/// The registry asks for candidates until one is unused, so an
/// implementation may repeat itself; tests use that to force collisions.
pub trait CodeSource: Send + 'static {
    fn next_code(&mut self) -> RoomCode;
}

/// The default [`CodeSource`]: uniform draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodes;

impl CodeSource for RandomCodes {
    fn next_code(&mut self) -> RoomCode {
        let mut rng = rand::rng();
        let code = (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CODE_ALPHABET.len());
                char::from(CODE_ALPHABET[idx])
            })
            .collect();
        RoomCode(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_codes_have_length_and_alphabet() {
        let mut source = RandomCodes;
        for _ in 0..200 {
            let code = source.next_code();
            assert_eq!(code.as_str().len(), CODE_LENGTH);
            assert!(
                code.as_str().bytes().all(|b| CODE_ALPHABET.contains(&b)),
                "unexpected character in {code}"
            );
        }
    }

    #[test]
    fn test_random_codes_vary() {
        let mut source = RandomCodes;
        let a = source.next_code();
        let b = source.next_code();
        let c = source.next_code();
        // Three identical draws out of 36^6 would mean the RNG is stuck.
        assert!(a != b || b != c);
    }
}
