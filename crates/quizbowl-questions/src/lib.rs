//! Question repository for Quiz Bowl.
//!
//! Holds a fixed set of difficulty-tiered rounds (easy, average,
//! difficult). The data is built once when the server starts and is
//! never mutated, so a [`QuestionBank`] can be shared behind an `Arc`
//! without locking.
//!
//! # Key types
//!
//! - [`QuestionBank`]: read-only lookup by difficulty id
//! - [`QuestionError`]: the "not found" signal

mod bank;
mod catalog;
mod error;

pub use bank::QuestionBank;
pub use catalog::{average_round, builtin_rounds, difficult_round, easy_round};
pub use error::QuestionError;
