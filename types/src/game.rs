//! Game aggregate: players, questions, submissions, settings.
//!
//! The aggregate is built and validated here, then handed to the engine as a
//! read-only snapshot. Share-code encoding relies on the serde shape of
//! [`Game`] round-tripping exactly, so field names stay camelCase to match the
//! original payloads.

use crate::{PlayerId, QuestionId, ScoringMode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// A participant in the game. `name` is mutable display text; identity is the
/// id. Names must be unique (trimmed, case-sensitive) for the game to pass
/// setup validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Question text, either a plain string or a per-language table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionText {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl QuestionText {
    /// Resolve the text for `lang`, falling back to `"en"` and then to any
    /// available entry.
    pub fn resolve(&self, lang: &str) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Localized(table) => table
                .get(lang)
                .or_else(|| table.get("en"))
                .or_else(|| table.values().next())
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// True when no language variant has visible text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Plain(text) => text.trim().is_empty(),
            Self::Localized(table) => table.values().all(|text| text.trim().is_empty()),
        }
    }
}

impl From<&str> for QuestionText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_owned())
    }
}

/// One subjective question the group ranks each other against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub text: QuestionText,
    /// Player presenting this question during the reveal. `None` means no
    /// presenter assigned; the reveal degrades to empty presenter-side rows.
    #[serde(default)]
    pub presenter_id: Option<PlayerId>,
}

/// Per-game settings carried through share codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub scoring: ScoringMode,
}

/// One player's complete set of per-question orderings. A submission missing a
/// question is legal; that question simply counts it as absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub player_id: PlayerId,
    #[serde(default)]
    pub by_question: BTreeMap<QuestionId, Vec<PlayerId>>,
}

impl Submission {
    /// The submitted order for `question_id`, if this submission covers it.
    pub fn ranking(&self, question_id: &QuestionId) -> Option<&[PlayerId]> {
        self.by_question.get(question_id).map(Vec::as_slice)
    }

    /// True when every question in `game` has a full-length ranking. Used to
    /// gate export of the submission (players cannot submit partial answers).
    pub fn covers(&self, game: &Game) -> bool {
        game.questions.iter().all(|question| {
            self.ranking(&question.id)
                .is_some_and(|ranking| ranking.len() == game.players.len())
        })
    }
}

/// Setup problems that make a game unplayable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("at least two named players are required")]
    NotEnoughPlayers,
    #[error("duplicate player name: {name}")]
    DuplicatePlayerName { name: String },
    #[error("at least one question with text is required")]
    NoQuestions,
}

/// Rejected submissions. The engine never validates; this is the ingestion
/// gate that keeps misleading data out of the scoring paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("submission from unknown player {player}")]
    UnknownPlayer { player: PlayerId },
    #[error("ranking for question {question} is not a permutation of the roster")]
    NotAPermutation { question: QuestionId },
}

/// The full game aggregate. The engine reads this as an immutable snapshot;
/// all writes go through the helpers below.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Keyed by submitter, at most one submission per player.
    #[serde(default)]
    pub submissions: BTreeMap<PlayerId, Submission>,
    #[serde(default)]
    pub settings: GameSettings,
}

impl Game {
    /// Look up a player by id.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == *id)
    }

    /// Append a player to the roster.
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Append a question.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Check that the game is playable: at least two players with non-blank,
    /// unique names and at least one question with text.
    pub fn validate_setup(&self) -> Result<(), SetupError> {
        let names: Vec<&str> = self
            .players
            .iter()
            .map(|player| player.name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.len() < 2 {
            return Err(SetupError::NotEnoughPlayers);
        }
        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(*name) {
                return Err(SetupError::DuplicatePlayerName {
                    name: (*name).to_owned(),
                });
            }
        }
        if !self.questions.iter().any(|question| !question.text.is_blank()) {
            return Err(SetupError::NoQuestions);
        }
        Ok(())
    }

    /// Insert (or replace) a player's submission after checking that every
    /// present ranking is a permutation of the current roster.
    pub fn insert_submission(&mut self, submission: Submission) -> Result<(), SubmissionError> {
        if self.player(&submission.player_id).is_none() {
            return Err(SubmissionError::UnknownPlayer {
                player: submission.player_id,
            });
        }
        let roster: BTreeSet<&PlayerId> = self.players.iter().map(|player| &player.id).collect();
        for (question_id, ranking) in &submission.by_question {
            let unique: BTreeSet<&PlayerId> = ranking.iter().collect();
            if ranking.len() != roster.len() || unique != roster {
                return Err(SubmissionError::NotAPermutation {
                    question: question_id.clone(),
                });
            }
        }
        self.submissions
            .insert(submission.player_id.clone(), submission);
        Ok(())
    }

    /// Default presenter for the question at `index`: the roster rotated by
    /// question position. `None` on an empty roster.
    pub fn default_presenter_id(&self, index: usize) -> Option<PlayerId> {
        if self.players.is_empty() {
            return None;
        }
        Some(self.players[index % self.players.len()].id.clone())
    }

    /// Repair the presenter of the question at `index` if it is unset or
    /// points at a deleted player. Returns whether anything changed.
    pub fn ensure_presenter(&mut self, index: usize) -> bool {
        let default = self.default_presenter_id(index);
        let valid_ids: BTreeSet<PlayerId> =
            self.players.iter().map(|player| player.id.clone()).collect();
        let Some(question) = self.questions.get_mut(index) else {
            return false;
        };
        match &question.presenter_id {
            Some(id) if valid_ids.contains(id) => false,
            None if default.is_none() => false,
            _ => {
                question.presenter_id = default;
                true
            }
        }
    }

    /// Repair all presenter assignments. Returns whether anything changed.
    pub fn normalize_presenters(&mut self) -> bool {
        let mut changed = false;
        for index in 0..self.questions.len() {
            if self.ensure_presenter(index) {
                changed = true;
            }
        }
        changed
    }

    /// Seed ranking handed to the ranking editor: players in roster order.
    pub fn default_ranking(&self) -> Vec<PlayerId> {
        self.players.iter().map(|player| player.id.clone()).collect()
    }
}
