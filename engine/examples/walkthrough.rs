//! Drive a complete reveal walkthrough for a small three-player game and
//! print what the presenter would see at each navigation input.
//!
//! Run with `cargo run --example walkthrough`.

use podium_engine::{
    advance_reveal, reveal_rows, score_round, score_totals_through, sort_scores,
};
use podium_types::{
    Game, Player, Question, RevealCursor, RevealPhase, Submission,
};
use std::collections::BTreeMap;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let game = build_game();
    let mode = game.settings.scoring;
    let mut cursor = RevealCursor::start();

    loop {
        match cursor.phase {
            RevealPhase::Prompt => println!("--- get ready: question {} ---", cursor.index + 1),
            RevealPhase::Question => {
                let question = &game.questions[cursor.index];
                println!("Q{}: {}", cursor.index + 1, question.text.resolve("en"));
            }
            RevealPhase::Reveal => {
                for row in reveal_rows(&game, cursor.index, &cursor) {
                    let presenter = match (&row.presenter, row.presenter_visible) {
                        (Some(id), true) => name(&game, id.as_str()),
                        _ => "???",
                    };
                    let verdict = if row.match_visible {
                        if row.matched {
                            name(&game, row.consensus.as_str())
                        } else {
                            "nope"
                        }
                    } else {
                        "???"
                    };
                    println!("  {}. presenter: {presenter:<10} group: {verdict}", row.place);
                }
                println!();
            }
            RevealPhase::RoundScore => {
                let question = &game.questions[cursor.index];
                println!("round scores:");
                let scores = score_round(&game, &question.id, mode);
                for row in sort_scores(&game, &scores) {
                    println!("  {:<10} {}", row.player.name, row.points);
                }
            }
            RevealPhase::Totals => {
                println!("totals so far:");
                let totals = score_totals_through(&game, cursor.index, mode);
                for row in sort_scores(&game, &totals) {
                    println!("  {:<10} {}", row.player.name, row.points);
                }
            }
            RevealPhase::End => {
                println!("=== that's the game ===");
                break;
            }
        }
        cursor = advance_reveal(&cursor, &game);
    }
}

fn name<'a>(game: &'a Game, id: &'a str) -> &'a str {
    game.players
        .iter()
        .find(|player| player.id.as_str() == id)
        .map(|player| player.name.as_str())
        .unwrap_or(id)
}

fn build_game() -> Game {
    let mut game = Game::default();
    for (id, player_name) in [("alice", "Alice"), ("bob", "Bob"), ("casey", "Casey")] {
        game.add_player(Player {
            id: id.into(),
            name: player_name.into(),
        });
    }
    game.add_question(Question {
        id: "q1".into(),
        text: "Who would win a staring contest?".into(),
        presenter_id: Some("alice".into()),
    });
    game.add_question(Question {
        id: "q2".into(),
        text: "Who plans their meals a week ahead?".into(),
        presenter_id: Some("bob".into()),
    });

    let orders: [(&str, [&str; 3], [&str; 3]); 3] = [
        ("alice", ["alice", "bob", "casey"], ["bob", "alice", "casey"]),
        ("bob", ["bob", "alice", "casey"], ["bob", "casey", "alice"]),
        ("casey", ["alice", "casey", "bob"], ["casey", "bob", "alice"]),
    ];
    for (submitter, q1, q2) in orders {
        let mut by_question = BTreeMap::new();
        by_question.insert("q1".into(), q1.iter().map(|id| (*id).into()).collect());
        by_question.insert("q2".into(), q2.iter().map(|id| (*id).into()).collect());
        game.insert_submission(Submission {
            player_id: submitter.into(),
            by_question,
        })
        .expect("valid submission");
    }
    game
}
