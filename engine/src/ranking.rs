//! Ranking editor primitive.
//!
//! Used while a player is constructing their own ranking. Pure and
//! value-returning: the caller's list is never mutated.

use podium_types::PlayerId;

/// Move `player_id` by `delta` positions, clamping the target to the list
/// bounds. This is a single-element relocation, not a swap: the other entries
/// shift by one to fill the gap. Returns the input order unchanged when the id
/// is absent or the move is a no-op.
pub fn move_ranking(ranking: &[PlayerId], player_id: &PlayerId, delta: isize) -> Vec<PlayerId> {
    let Some(from) = ranking.iter().position(|id| id == player_id) else {
        return ranking.to_vec();
    };
    let last = ranking.len() as isize - 1;
    let to = (from as isize + delta).clamp(0, last) as usize;
    if from == to {
        return ranking.to_vec();
    }
    let mut next = ranking.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<PlayerId> {
        raw.iter().map(|id| PlayerId::from(*id)).collect()
    }

    #[test]
    fn test_move_down_shifts_neighbors() {
        let ranking = ids(&["a", "b", "c"]);
        assert_eq!(move_ranking(&ranking, &"a".into(), 1), ids(&["b", "a", "c"]));
        assert_eq!(move_ranking(&ranking, &"a".into(), 2), ids(&["b", "c", "a"]));
    }

    #[test]
    fn test_move_up() {
        let ranking = ids(&["a", "b", "c"]);
        assert_eq!(move_ranking(&ranking, &"c".into(), -2), ids(&["c", "a", "b"]));
    }

    #[test]
    fn test_move_clamps_to_bounds() {
        let ranking = ids(&["a", "b", "c"]);
        assert_eq!(move_ranking(&ranking, &"b".into(), 10), ids(&["a", "c", "b"]));
        assert_eq!(move_ranking(&ranking, &"b".into(), -10), ids(&["b", "a", "c"]));
    }

    #[test]
    fn test_absent_id_returns_input_order() {
        let ranking = ids(&["a", "b"]);
        assert_eq!(move_ranking(&ranking, &"ghost".into(), 1), ranking);
    }

    #[test]
    fn test_noop_move_returns_input_order() {
        let ranking = ids(&["a", "b"]);
        assert_eq!(move_ranking(&ranking, &"a".into(), 0), ranking);
        // Clamped to its own slot is also a no-op.
        assert_eq!(move_ranking(&ranking, &"a".into(), -3), ranking);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let ranking = ids(&["a", "b", "c"]);
        let before = ranking.clone();
        let _ = move_ranking(&ranking, &"a".into(), 2);
        assert_eq!(ranking, before);
    }
}
