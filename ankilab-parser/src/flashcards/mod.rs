//! Flashcard records, recovery parsing and review helpers

pub mod card;
pub mod parsing;
pub mod review;
pub mod testing;
