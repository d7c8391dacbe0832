//! Consensus ranking builder.
//!
//! Reduces all submitted rankings for one question into a single group
//! ordering: every player accumulates the 0-indexed positions they received
//! across counting submissions, and players sort ascending by average
//! position. Ties break ascending by player name.
//!
//! Players nobody ranked keep an average of 0, which places them
//! competitively rather than penalizing the absence of data. That is a
//! deliberate rule, not a zero-divide guard: never-ranked players tie for
//! first, and changing it would change game outcomes.

use podium_types::{Game, PlayerId, QuestionId};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Accumulated rank positions received by one player.
#[derive(Clone, Copy, Debug, Default)]
struct RankTally {
    sum: u64,
    count: u64,
}

impl RankTally {
    /// Compare two tallies by average position (`sum / count`) without leaving
    /// integer arithmetic: `a/b < c/d  <=>  a*d < c*b` for positive divisors.
    /// A zero count divides as 1, so never-ranked players average 0.
    fn cmp_average(&self, other: &RankTally) -> Ordering {
        let left = self.sum * other.count.max(1);
        let right = other.sum * self.count.max(1);
        left.cmp(&right)
    }
}

/// Build the group consensus ranking for `question_id`.
///
/// The output is always a permutation of the full roster, whatever the
/// submission set looks like: submissions missing this question contribute
/// nothing, and with no submissions at all every player ties at average 0 and
/// the name tie-break fully determines the order. An empty roster yields an
/// empty ranking.
pub fn build_consensus_ranking(game: &Game, question_id: &QuestionId) -> Vec<PlayerId> {
    let mut tallies: BTreeMap<&PlayerId, RankTally> = game
        .players
        .iter()
        .map(|player| (&player.id, RankTally::default()))
        .collect();

    for submission in game.submissions.values() {
        let Some(ranking) = submission.ranking(question_id) else {
            continue;
        };
        for (position, player_id) in ranking.iter().enumerate() {
            // Ids not on the roster (stale submissions) are skipped.
            if let Some(tally) = tallies.get_mut(player_id) {
                tally.sum += position as u64;
                tally.count += 1;
            }
        }
    }

    let mut ranked: Vec<_> = game.players.iter().collect();
    ranked.sort_by(|a, b| {
        tallies[&a.id]
            .cmp_average(&tallies[&b.id])
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.into_iter().map(|player| player.id.clone()).collect()
}
