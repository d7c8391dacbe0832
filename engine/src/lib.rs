//! Podium scoring and reveal engine.
//!
//! This crate contains the deterministic core of the party ranking game: the
//! consensus builder, the two scoring strategies, the reveal walkthrough state
//! machine and the ranking editor. It consumes a read-only
//! [`podium_types::Game`] snapshot and emits plain values; rendering,
//! persistence and share-code encoding live elsewhere.
//!
//! ## Determinism requirements
//! - No wall-clock time and no randomness inside the engine.
//! - No floating point in ordering decisions; average ranks compare by exact
//!   integer cross-multiplication.
//! - Iteration order of hash-based collections must not influence outputs
//!   (score maps and submission tables are `BTreeMap`).
//!
//! ## Failure semantics
//! Engine functions are total and never return `Result`: degenerate input
//! (missing rankings, unknown ids, empty games, out-of-range cursors) degrades
//! to zero-valued, well-typed output instead of erroring.

pub mod consensus;
pub mod ranking;
pub mod reveal;
pub mod scoring;

#[cfg(test)]
mod testutil;


pub use consensus::build_consensus_ranking;
pub use ranking::move_ranking;
pub use reveal::{
    advance_reveal, presenter_for_question, presenter_ranking, reveal_max_steps, reveal_rows,
    rewind_reveal, RevealRow,
};
pub use scoring::{
    max_rank_distance, score_round, score_round_simple, score_round_weighted,
    score_totals_through, sort_scores, ScoreMap, ScoreRow,
};
