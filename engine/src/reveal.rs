//! Reveal walkthrough state machine and view model.
//!
//! The presenter walks each question through the phases
//! `prompt → question → reveal → roundscore → [totals]`, then on to the next
//! question's prompt or the terminal `end`. `totals` only appears from the
//! second round onward; there is no running total to show after round 0.
//!
//! Within `reveal`, disclosure advances one step at a time: step `2k+1` shows
//! the presenter's pick for consensus position `k`, step `2k+2` shows whether
//! the group's pick matched it, so a question has `2 * consensus_length`
//! steps.
//!
//! [`advance_reveal`] and [`rewind_reveal`] are exact inverses at every
//! reachable cursor except the two fixed boundaries (`end` forward and the
//! first prompt backward, both no-ops), so the presenter can scrub in either
//! direction without the walkthrough and the scores drifting apart.

use crate::consensus::build_consensus_ranking;
use podium_types::{Game, Player, PlayerId, QuestionId, RevealCursor, RevealPhase};

/// Number of disclosure steps for one question: two per consensus position.
/// `None` (no current question) has zero steps.
pub fn reveal_max_steps(game: &Game, question_id: Option<&QuestionId>) -> usize {
    match question_id {
        Some(question_id) => build_consensus_ranking(game, question_id).len() * 2,
        None => 0,
    }
}

fn max_steps_at(game: &Game, index: usize) -> usize {
    reveal_max_steps(game, game.questions.get(index).map(|question| &question.id))
}

/// Advance the walkthrough by one navigation input. From `End` this is a
/// no-op.
///
/// [`rewind_reveal`] inverts this at every reachable cursor provided the
/// roster is non-empty; with zero players (a setup-invalid game) the reveal
/// collapses to zero steps and the inverse does not hold at the reveal
/// boundary, though the walkthrough still terminates.
pub fn advance_reveal(cursor: &RevealCursor, game: &Game) -> RevealCursor {
    let mut next = *cursor;
    let max_steps = max_steps_at(game, next.index);
    let last_question = next.index + 1 >= game.questions.len();
    match next.phase {
        RevealPhase::Prompt => next.phase = RevealPhase::Question,
        RevealPhase::Question => {
            next.phase = RevealPhase::Reveal;
            next.step = 1;
        }
        RevealPhase::Reveal => {
            if next.step < max_steps {
                next.step += 1;
            } else {
                next.phase = RevealPhase::RoundScore;
            }
        }
        RevealPhase::RoundScore => {
            if next.index >= 1 {
                next.phase = RevealPhase::Totals;
            } else if !last_question {
                next.index += 1;
                next.phase = RevealPhase::Prompt;
                next.step = 0;
            } else {
                next.phase = RevealPhase::End;
            }
        }
        RevealPhase::Totals => {
            if !last_question {
                next.index += 1;
                next.phase = RevealPhase::Prompt;
                next.step = 0;
            } else {
                next.phase = RevealPhase::End;
            }
        }
        RevealPhase::End => {}
    }
    tracing::trace!(
        from = ?cursor.phase,
        to = ?next.phase,
        index = next.index,
        step = next.step,
        "reveal advanced"
    );
    next
}

/// Step the walkthrough backward, recomputing step counts for whichever
/// question becomes current. From the first question's prompt this is a
/// no-op.
pub fn rewind_reveal(cursor: &RevealCursor, game: &Game) -> RevealCursor {
    let mut next = *cursor;
    match next.phase {
        RevealPhase::Prompt => {
            if next.index > 0 {
                next.index -= 1;
                next.phase = if next.index >= 1 {
                    RevealPhase::Totals
                } else {
                    RevealPhase::RoundScore
                };
                next.step = max_steps_at(game, next.index);
            }
        }
        RevealPhase::Question => next.phase = RevealPhase::Prompt,
        RevealPhase::Reveal => {
            // Inverse of question -> reveal(1): one step back from the first
            // disclosure returns to the question card.
            if next.step > 1 {
                next.step -= 1;
            } else {
                next.phase = RevealPhase::Question;
                next.step = 0;
            }
        }
        RevealPhase::RoundScore => {
            next.phase = RevealPhase::Reveal;
            next.step = max_steps_at(game, next.index);
        }
        RevealPhase::Totals => next.phase = RevealPhase::RoundScore,
        RevealPhase::End => {
            next.phase = if next.index >= 1 {
                RevealPhase::Totals
            } else {
                RevealPhase::RoundScore
            };
        }
    }
    tracing::trace!(
        from = ?cursor.phase,
        to = ?next.phase,
        index = next.index,
        step = next.step,
        "reveal rewound"
    );
    next
}

/// Resolve the presenter for the question at `index`, falling back to the
/// roster-rotation default when unset or pointing at a removed player.
pub fn presenter_for_question(game: &Game, index: usize) -> Option<&Player> {
    let question = game.questions.get(index)?;
    question
        .presenter_id
        .as_ref()
        .and_then(|id| game.player(id))
        .or_else(|| {
            if game.players.is_empty() {
                None
            } else {
                Some(&game.players[index % game.players.len()])
            }
        })
}

/// The presenter's own submitted order for `question_id`, or empty when there
/// is no presenter or the presenter never submitted.
pub fn presenter_ranking<'a>(
    game: &'a Game,
    question_id: &QuestionId,
    presenter_id: Option<&PlayerId>,
) -> &'a [PlayerId] {
    let Some(presenter_id) = presenter_id else {
        return &[];
    };
    game.submissions
        .get(presenter_id)
        .and_then(|submission| submission.ranking(question_id))
        .unwrap_or(&[])
}

/// One row of the progressive reveal table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealRow {
    /// 1-based consensus position.
    pub place: usize,
    /// The group's pick at this position.
    pub consensus: PlayerId,
    /// The presenter's pick at this position; `None` when the presenter-side
    /// list is empty or shorter than the consensus.
    pub presenter: Option<PlayerId>,
    /// Whether the presenter pick is disclosed at the cursor's step.
    pub presenter_visible: bool,
    /// Whether the match outcome is disclosed at the cursor's step.
    pub match_visible: bool,
    /// Whether the presenter's pick equals the group's pick.
    pub matched: bool,
}

/// Build the reveal table for the question at `index` under `cursor`.
///
/// Disclosure only counts in the `Reveal`, `RoundScore` and `Totals` phases;
/// earlier phases show a fully hidden table. The step is clamped to the
/// question's maximum so a stale cursor cannot over-disclose.
pub fn reveal_rows(game: &Game, index: usize, cursor: &RevealCursor) -> Vec<RevealRow> {
    let Some(question) = game.questions.get(index) else {
        return Vec::new();
    };
    let consensus = build_consensus_ranking(game, &question.id);
    let presenter = presenter_for_question(game, index);
    let presenter_order = presenter_ranking(game, &question.id, presenter.map(|player| &player.id));

    let active_step = match cursor.phase {
        RevealPhase::Reveal | RevealPhase::RoundScore | RevealPhase::Totals => {
            cursor.step.min(consensus.len() * 2)
        }
        _ => 0,
    };

    consensus
        .iter()
        .enumerate()
        .map(|(position, consensus_pick)| {
            let presenter_pick = presenter_order.get(position).cloned();
            RevealRow {
                place: position + 1,
                matched: presenter_pick.as_ref() == Some(consensus_pick),
                consensus: consensus_pick.clone(),
                presenter: presenter_pick,
                presenter_visible: active_step >= position * 2 + 1,
                match_visible: active_step >= position * 2 + 2,
            }
        })
        .collect()
}
