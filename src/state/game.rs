//! The authoritative in-memory game state: roster, scores, theme, quiz
//! progress, and countdown. One instance lives behind the [`AppState`] lock.
//!
//! [`AppState`]: crate::state::AppState

use indexmap::IndexMap;
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    questions::QuizQuestion,
    state::{countdown::Countdown, quiz::QuizDeck},
};

/// Sentinel theme shown before the roulette has been spun.
pub const DEFAULT_THEME: &str = "Aucun thème sélectionné";

/// Characters used for player identifiers.
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Length of a player identifier (e.g. `ABC123`).
const ID_LENGTH: usize = 6;

/// One of the two fixed teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    /// Team 1.
    One,
    /// Team 2.
    Two,
}

impl TryFrom<u8> for Team {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Team::One),
            2 => Ok(Team::Two),
            other => Err(other),
        }
    }
}

impl From<Team> for u8 {
    fn from(value: Team) -> Self {
        match value {
            Team::One => 1,
            Team::Two => 2,
        }
    }
}

/// Scores of both teams; both entries always exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct TeamScores {
    /// Score of team 1.
    #[serde(rename = "1")]
    pub team1: i64,
    /// Score of team 2.
    #[serde(rename = "2")]
    pub team2: i64,
}

impl TeamScores {
    /// Add a (possibly negative) delta to a team's score.
    pub fn add(&mut self, team: Team, delta: i64) {
        match team {
            Team::One => self.team1 += delta,
            Team::Two => self.team2 += delta,
        }
    }

    /// Current score for a team.
    pub fn get(&self, team: Team) -> i64 {
        match team {
            Team::One => self.team1,
            Team::Two => self.team2,
        }
    }
}

/// A connected player. The id is the only handle ever exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Opaque unique token identifying the player.
    pub id: String,
    /// Display name chosen at join time.
    pub username: String,
    /// Team assignment, `None` until teams have been formed.
    pub team: Option<Team>,
}

/// The single shared source of truth for the running session.
#[derive(Debug, Default)]
pub struct GameState {
    players: IndexMap<String, Player>,
    scores: TeamScores,
    theme: String,
    quiz: QuizDeck,
    countdown: Countdown,
}

impl GameState {
    /// Build the initial state over the question list loaded at startup.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            players: IndexMap::new(),
            scores: TeamScores::default(),
            theme: DEFAULT_THEME.to_string(),
            quiz: QuizDeck::new(questions),
            countdown: Countdown::default(),
        }
    }

    /// Register a new player under a freshly generated unique id.
    ///
    /// Id generation retries on collision, so the returned id is always unique
    /// among currently connected players.
    pub fn add_player(&mut self, username: String) -> &Player {
        let mut rng = rand::rng();
        let id = loop {
            let candidate = generate_player_id(&mut rng);
            if !self.players.contains_key(&candidate) {
                break candidate;
            }
        };

        let player = Player {
            id: id.clone(),
            username,
            team: None,
        };
        self.players.entry(id).or_insert(player)
    }

    /// Remove a player. Unknown ids are a silent no-op (the player may have
    /// already left).
    pub fn remove_player(&mut self, id: &str) -> Option<Player> {
        self.players.shift_remove(id)
    }

    /// Shuffle all players and split them evenly: the first half joins team 1,
    /// the remainder team 2 (team 2 gets the odd player out).
    ///
    /// Assignments are always recomputed from scratch and both scores are
    /// zeroed, so forming teams restarts the match.
    pub fn assign_teams_randomly(&mut self) {
        let mut ids: Vec<String> = self.players.keys().cloned().collect();
        ids.shuffle(&mut rand::rng());

        let half = ids.len() / 2;
        for (position, id) in ids.iter().enumerate() {
            if let Some(player) = self.players.get_mut(id) {
                player.team = Some(if position < half { Team::One } else { Team::Two });
            }
        }

        self.scores = TeamScores::default();
    }

    /// Apply a score delta to a team.
    pub fn update_score(&mut self, team: Team, delta: i64) -> i64 {
        self.scores.add(team, delta);
        self.scores.get(team)
    }

    /// Replace the current theme.
    pub fn set_theme(&mut self, theme: String) {
        self.theme = theme;
    }

    /// Restore every field to its initial default, keeping the loaded
    /// question list. Callers hold the state write guard, so no reader can
    /// observe a partially reset state.
    pub fn reset_all(&mut self) {
        self.players.clear();
        self.scores = TeamScores::default();
        self.theme = DEFAULT_THEME.to_string();
        self.quiz.reset();
        self.countdown.reset();
    }

    /// Connected players in join order, keyed by id.
    pub fn players(&self) -> &IndexMap<String, Player> {
        &self.players
    }

    /// Current team scores.
    pub fn scores(&self) -> TeamScores {
        self.scores
    }

    /// Current theme text.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Quiz progress, read-only.
    pub fn quiz(&self) -> &QuizDeck {
        &self.quiz
    }

    /// Quiz progress, for the next-question command.
    pub fn quiz_mut(&mut self) -> &mut QuizDeck {
        &mut self.quiz
    }

    /// Countdown state, read-only.
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Countdown state, for start/stop commands and the scheduler tick.
    pub fn countdown_mut(&mut self) -> &mut Countdown {
        &mut self.countdown
    }
}

fn generate_player_id(rng: &mut impl Rng) -> String {
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
