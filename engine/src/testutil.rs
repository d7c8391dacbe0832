//! Helpers for building small games in tests.

use podium_types::{Game, Player, PlayerId, Question, Submission};
use std::collections::BTreeMap;

pub fn player(id: &str, name: &str) -> Player {
    Player {
        id: id.into(),
        name: name.into(),
    }
}

pub fn question(id: &str, text: &str, presenter: Option<&str>) -> Question {
    Question {
        id: id.into(),
        text: text.into(),
        presenter_id: presenter.map(PlayerId::from),
    }
}

/// Record `submitter`'s order for one question, creating the submission on
/// first use. Bypasses ingestion validation on purpose so tests can feed the
/// engine degenerate data.
pub fn submit(game: &mut Game, submitter: &str, question_id: &str, order: &[&str]) {
    let entry = game
        .submissions
        .entry(submitter.into())
        .or_insert_with(|| Submission {
            player_id: submitter.into(),
            by_question: BTreeMap::new(),
        });
    entry.by_question.insert(
        question_id.into(),
        order.iter().map(|id| PlayerId::from(*id)).collect(),
    );
}

/// Two players, one question, no submissions.
pub fn two_player_game() -> Game {
    let mut game = Game::default();
    game.add_player(player("a", "Ava"));
    game.add_player(player("b", "Ben"));
    game.add_question(question("q1", "Who hums while thinking?", Some("a")));
    game
}

/// The three-player reference scenario: Alice, Bob and Casey with submissions
/// for the first of two questions. Consensus for q1 is [alice, bob, casey].
pub fn trio_game() -> Game {
    let mut game = Game::default();
    game.add_player(player("alice", "Alice"));
    game.add_player(player("bob", "Bob"));
    game.add_player(player("casey", "Casey"));
    game.add_question(question("q1", "Who would win a staring contest?", Some("alice")));
    game.add_question(question("q2", "Who plans their meals a week ahead?", Some("bob")));
    submit(&mut game, "alice", "q1", &["alice", "bob", "casey"]);
    submit(&mut game, "bob", "q1", &["bob", "alice", "casey"]);
    submit(&mut game, "casey", "q1", &["alice", "casey", "bob"]);
    game
}
