//! Reveal walkthrough cursor.
//!
//! The cursor is owned by the presenter-facing flow and is only ever mutated
//! through `podium_engine::reveal::{advance_reveal, rewind_reveal}`. It is a
//! small `Copy` value so callers can store the returned cursor verbatim after
//! each transition.

use serde::{Deserialize, Serialize};

/// Phase of the presenter-driven reveal walkthrough for the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPhase {
    /// Intro card before the question is shown.
    Prompt,
    /// The question itself is on screen, nothing disclosed yet.
    Question,
    /// Step-by-step disclosure of presenter picks and consensus matches.
    Reveal,
    /// Scores for this round.
    RoundScore,
    /// Running totals; only reachable from the second round onward.
    Totals,
    /// Terminal phase after the last question.
    End,
}

/// Position within the reveal walkthrough.
///
/// Invariants, maintained by the engine's transition functions:
/// - `index < question_count` (except in `End`, where it stays on the last
///   question),
/// - `0 <= step <= 2 * consensus_length` for the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealCursor {
    /// Current phase.
    pub phase: RevealPhase,
    /// Index of the current question.
    pub index: usize,
    /// Disclosure counter within the reveal phase.
    pub step: usize,
}

impl RevealCursor {
    /// Cursor at the very start of the walkthrough: first question's prompt.
    pub fn start() -> Self {
        Self {
            phase: RevealPhase::Prompt,
            index: 0,
            step: 0,
        }
    }
}

impl Default for RevealCursor {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_cursor() {
        let cursor = RevealCursor::start();
        assert_eq!(cursor.phase, RevealPhase::Prompt);
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.step, 0);
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RevealPhase::RoundScore).unwrap(),
            "\"roundscore\""
        );
        let phase: RevealPhase = serde_json::from_str("\"totals\"").unwrap();
        assert_eq!(phase, RevealPhase::Totals);
    }

    #[test]
    fn test_cursor_round_trips_through_json() {
        let cursor = RevealCursor {
            phase: RevealPhase::Reveal,
            index: 2,
            step: 5,
        };
        let encoded = serde_json::to_string(&cursor).unwrap();
        let decoded: RevealCursor = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, cursor);
    }
}
