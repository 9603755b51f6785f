//! Testing utilities for card recovery
//!
//!     Model output is messy in ways that are easy to get subtly wrong when typed inline in a
//!     test, so tests should prefer the curated samples under `samples/` (via [Sample]) and
//!     check results with the fluent [assert_cards] API rather than ad-hoc field comparisons.
//!
//!     ```rust,ignore
//!     use ankilab_parser::flashcards::testing::{assert_cards, Sample};
//!
//!     let cards = Sample::ClosureAndMemo.parse();
//!     assert_cards(&cards).count(2).card(1, |card| {
//!         card.question("How do you memoize a function in one line?")
//!             .answer_line_count(2);
//!     });
//!     ```

mod assertions;
mod samples;

pub use assertions::{assert_cards, CardAssertion, DeckAssertion};
pub use samples::Sample;
