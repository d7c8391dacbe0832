//! Round scoring strategies and leaderboard ordering.
//!
//! Two interchangeable strategies score how well each submitter's guess
//! matched the group consensus:
//!
//! - **Simple** awards one point per exact positional match, so a round is
//!   worth at most `player_count` points.
//! - **Weighted** awards `max_rank_distance(n) - total displacement`, so a
//!   perfect match earns the maximum and an exact reversal earns zero, with
//!   points degrading linearly in between.
//!
//! Points always go to the submitter, never to the players being ranked. Every
//! score map contains every player in the game, with 0 for players who earned
//! nothing (including players who never submitted). Totals are recomputed from
//! the game snapshot on every call so the reveal can scrub forward and
//! backward and always see identical numbers.

use crate::consensus::build_consensus_ranking;
use podium_types::{Game, Player, PlayerId, QuestionId, ScoringMode};
use std::collections::BTreeMap;

/// Per-round or cumulative points keyed by player. Every player in the game is
/// present, 0 by default.
pub type ScoreMap = BTreeMap<PlayerId, u32>;

/// One leaderboard row produced by [`sort_scores`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRow<'a> {
    pub player: &'a Player,
    pub points: u32,
}

fn zeroed_scores(game: &Game) -> ScoreMap {
    game.players
        .iter()
        .map(|player| (player.id.clone(), 0))
        .collect()
}

fn consensus_positions(consensus: &[PlayerId]) -> BTreeMap<&PlayerId, usize> {
    consensus
        .iter()
        .enumerate()
        .map(|(index, player_id)| (player_id, index))
        .collect()
}

/// Maximum total absolute positional displacement for `n` ranked items, i.e.
/// the distance between an order and its exact reverse.
pub fn max_rank_distance(n: usize) -> u32 {
    let n = n as i64;
    (0..n).map(|i| (i - (n - 1 - i)).unsigned_abs() as u32).sum()
}

/// Score one round in `Simple` mode: one point per slot where the submitted
/// order and the consensus order name the same player.
pub fn score_round_simple(game: &Game, question_id: &QuestionId) -> ScoreMap {
    let mut scores = zeroed_scores(game);
    let consensus = build_consensus_ranking(game, question_id);
    if consensus.is_empty() {
        return scores;
    }
    let positions = consensus_positions(&consensus);

    for submission in game.submissions.values() {
        let Some(ranking) = submission.ranking(question_id) else {
            continue;
        };
        let mut matches = 0u32;
        for (index, player_id) in ranking.iter().enumerate() {
            if positions.get(player_id) == Some(&index) {
                matches += 1;
            }
        }
        if let Some(points) = scores.get_mut(&submission.player_id) {
            *points += matches;
        }
    }
    scores
}

/// Score one round in `Weighted` mode: `max_rank_distance(n)` minus the total
/// absolute displacement between the submitted order and the consensus order,
/// floored at zero.
pub fn score_round_weighted(game: &Game, question_id: &QuestionId) -> ScoreMap {
    let mut scores = zeroed_scores(game);
    let consensus = build_consensus_ranking(game, question_id);
    if consensus.is_empty() {
        return scores;
    }
    let positions = consensus_positions(&consensus);
    let max_distance = max_rank_distance(game.players.len());

    for submission in game.submissions.values() {
        let Some(ranking) = submission.ranking(question_id) else {
            continue;
        };
        let mut distance = 0u32;
        for (index, player_id) in ranking.iter().enumerate() {
            // Ids absent from the consensus index contribute no distance.
            if let Some(consensus_index) = positions.get(player_id) {
                distance += (index as i64 - *consensus_index as i64).unsigned_abs() as u32;
            }
        }
        if let Some(points) = scores.get_mut(&submission.player_id) {
            *points += max_distance.saturating_sub(distance);
        }
    }
    scores
}

/// Score one round in the given mode.
pub fn score_round(game: &Game, question_id: &QuestionId, mode: ScoringMode) -> ScoreMap {
    tracing::debug!(question = %question_id, ?mode, "scoring round");
    match mode {
        ScoringMode::Simple => score_round_simple(game, question_id),
        ScoringMode::Weighted => score_round_weighted(game, question_id),
    }
}

/// Sum round scores for questions 0 through `question_index` inclusive,
/// clamped to the last question. Recomputed from scratch every call; there is
/// no hidden accumulator, so scrubbing backward through rounds gives the same
/// totals as playing forward.
pub fn score_totals_through(game: &Game, question_index: usize, mode: ScoringMode) -> ScoreMap {
    let mut totals = zeroed_scores(game);
    for question in game.questions.iter().take(question_index.saturating_add(1)) {
        for (player_id, points) in score_round(game, &question.id, mode) {
            if let Some(total) = totals.get_mut(&player_id) {
                *total += points;
            }
        }
    }
    totals
}

/// Order a score map for display: descending by points, ties ascending by
/// player name. Players missing from the map show 0 points.
pub fn sort_scores<'a>(game: &'a Game, scores: &ScoreMap) -> Vec<ScoreRow<'a>> {
    let mut rows: Vec<ScoreRow<'a>> = game
        .players
        .iter()
        .map(|player| ScoreRow {
            player,
            points: scores.get(&player.id).copied().unwrap_or(0),
        })
        .collect();
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player.name.cmp(&b.player.name))
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{submit, trio_game, two_player_game};

    fn points(scores: &ScoreMap, id: &str) -> u32 {
        scores[&PlayerId::from(id)]
    }

    #[test]
    fn test_max_rank_distance_values() {
        assert_eq!(max_rank_distance(0), 0);
        assert_eq!(max_rank_distance(1), 0);
        assert_eq!(max_rank_distance(2), 2);
        assert_eq!(max_rank_distance(3), 4);
        assert_eq!(max_rank_distance(4), 8);
        assert_eq!(max_rank_distance(5), 12);
    }

    #[test]
    fn test_simple_scores_exact_matches() {
        let game = trio_game();
        let scores = score_round_simple(&game, &"q1".into());
        // Consensus is [alice, bob, casey]; Alice matches all three slots,
        // Bob only the last, Casey only the first.
        assert_eq!(points(&scores, "alice"), 3);
        assert_eq!(points(&scores, "bob"), 1);
        assert_eq!(points(&scores, "casey"), 1);
    }

    #[test]
    fn test_weighted_scores_closeness() {
        let game = trio_game();
        let scores = score_round_weighted(&game, &"q1".into());
        assert_eq!(points(&scores, "alice"), 4);
        assert_eq!(points(&scores, "bob"), 2);
        assert_eq!(points(&scores, "casey"), 2);
    }

    #[test]
    fn test_perfect_weighted_guess_earns_max_distance() {
        let game = trio_game();
        let scores = score_round_weighted(&game, &"q1".into());
        assert_eq!(points(&scores, "alice"), max_rank_distance(3));
    }

    #[test]
    fn test_full_reversal_earns_zero() {
        let mut game = two_player_game();
        submit(&mut game, "a", "q1", &["a", "b"]);
        // Consensus becomes [a, b]; Ben guesses the exact reverse.
        submit(&mut game, "b", "q1", &["b", "a"]);
        let scores = score_round_weighted(&game, &"q1".into());
        assert_eq!(points(&scores, "b"), 0);
    }

    #[test]
    fn test_no_submissions_scores_all_zero() {
        let game = two_player_game();
        for mode in [ScoringMode::Simple, ScoringMode::Weighted] {
            let scores = score_round(&game, &"q1".into(), mode);
            assert_eq!(scores.len(), 2);
            assert!(scores.values().all(|points| *points == 0));
        }
    }

    #[test]
    fn test_simple_scores_stay_within_player_count() {
        let game = trio_game();
        let scores = score_round_simple(&game, &"q1".into());
        assert!(scores.values().all(|points| *points <= 3));
    }

    #[test]
    fn test_non_submitter_present_with_zero() {
        let mut game = trio_game();
        game.submissions.remove(&PlayerId::from("casey"));
        let scores = score_round_simple(&game, &"q1".into());
        assert_eq!(scores.len(), 3);
        assert_eq!(points(&scores, "casey"), 0);
    }

    #[test]
    fn test_totals_accumulate_per_question() {
        let mut game = trio_game();
        submit(&mut game, "alice", "q2", &["bob", "alice", "casey"]);
        submit(&mut game, "bob", "q2", &["bob", "alice", "casey"]);
        let mode = ScoringMode::Weighted;

        let through_first = score_totals_through(&game, 0, mode);
        let through_second = score_totals_through(&game, 1, mode);
        let second_round = score_round(&game, &"q2".into(), mode);
        for player in &game.players {
            assert_eq!(
                through_second[&player.id],
                through_first[&player.id] + second_round[&player.id],
            );
        }
    }

    #[test]
    fn test_totals_clamp_past_last_question() {
        let game = trio_game();
        let mode = ScoringMode::Simple;
        assert_eq!(
            score_totals_through(&game, 99, mode),
            score_totals_through(&game, 1, mode)
        );
    }

    #[test]
    fn test_totals_with_no_questions() {
        let mut game = trio_game();
        game.questions.clear();
        let totals = score_totals_through(&game, 0, ScoringMode::Weighted);
        assert!(totals.values().all(|points| *points == 0));
    }

    #[test]
    fn test_sort_scores_descending_then_name() {
        let game = trio_game();
        let scores = score_round_weighted(&game, &"q1".into());
        let rows = sort_scores(&game, &scores);
        let names: Vec<&str> = rows.iter().map(|row| row.player.name.as_str()).collect();
        // Alice leads with 4; Bob and Casey tie at 2 and order by name.
        assert_eq!(names, vec!["Alice", "Bob", "Casey"]);
        assert_eq!(rows[0].points, 4);
    }

    #[test]
    fn test_sort_scores_defaults_missing_players_to_zero() {
        let game = trio_game();
        let rows = sort_scores(&game, &ScoreMap::new());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.points == 0));
    }
}
