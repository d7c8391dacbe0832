//! Common types used throughout podium.
//!
//! Defines the game aggregate (players, questions, submissions, settings), the
//! reveal cursor, and the ingestion-side validation used before a game is
//! handed to the engine. The engine itself (`podium-engine`) only ever reads
//! these types; all mutation lives behind the validated helpers here.

mod game;
mod ids;
mod reveal;
mod scoring;

pub use game::{
    Game, GameSettings, Player, Question, QuestionText, SetupError, Submission, SubmissionError,
};
pub use ids::{PlayerId, QuestionId};
pub use reveal::{RevealCursor, RevealPhase};
pub use scoring::ScoringMode;
