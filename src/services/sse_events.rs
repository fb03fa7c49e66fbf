//! Catalog of push events and the helpers that broadcast them.

use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{
        common::roster,
        sse::{
            CountdownStartedEvent, CountdownTickEvent, DiceResultEvent, QuizAnswerEvent,
            QuizQuestionEvent, RouletteResultEvent, ServerEvent, TeamsUpdatedEvent,
        },
    },
    state::{SharedState, game::GameState},
};

const EVENT_TEAMS_UPDATED: &str = "teams_updated";
const EVENT_ROULETTE_RESULT: &str = "roulette_result";
const EVENT_DICE_RESULT: &str = "dice_result";
const EVENT_COUNTDOWN_STARTED: &str = "countdown_started";
const EVENT_COUNTDOWN_TICK: &str = "countdown_tick";
const EVENT_COUNTDOWN_FINISHED: &str = "countdown_finished";
const EVENT_COUNTDOWN_STOPPED: &str = "countdown_stopped";
const EVENT_QUIZ_QUESTION: &str = "quiz_question";
const EVENT_QUIZ_ANSWER: &str = "quiz_answer";

/// Sentinel question text broadcast once the deck is exhausted.
pub const QUIZ_EXHAUSTED_TEXT: &str = "Fin des questions.";

/// Broadcast the full roster and score snapshot.
pub fn broadcast_teams_updated(state: &SharedState, game: &GameState) {
    send_event(state, EVENT_TEAMS_UPDATED, &teams_updated_payload(game));
}

/// Broadcast the theme selected by the roulette (or the reset sentinel).
pub fn broadcast_roulette_result(state: &SharedState, theme: &str) {
    let payload = RouletteResultEvent {
        theme: theme.to_string(),
    };
    send_event(state, EVENT_ROULETTE_RESULT, &payload);
}

/// Broadcast a one-shot dice roll.
pub fn broadcast_dice_result(state: &SharedState, value: u8) {
    send_event(state, EVENT_DICE_RESULT, &DiceResultEvent { value });
}

/// Broadcast that the countdown has been (re)armed.
pub fn broadcast_countdown_started(state: &SharedState, seconds: u64) {
    send_event(
        state,
        EVENT_COUNTDOWN_STARTED,
        &CountdownStartedEvent { seconds },
    );
}

/// Broadcast a one-second countdown decrement.
pub fn broadcast_countdown_tick(state: &SharedState, seconds: u64) {
    send_event(state, EVENT_COUNTDOWN_TICK, &CountdownTickEvent { seconds });
}

/// Broadcast that the countdown reached zero naturally.
pub fn broadcast_countdown_finished(state: &SharedState) {
    send_empty_event(state, EVENT_COUNTDOWN_FINISHED);
}

/// Broadcast that the countdown was halted by the admin.
pub fn broadcast_countdown_stopped(state: &SharedState) {
    send_empty_event(state, EVENT_COUNTDOWN_STOPPED);
}

/// Broadcast the new active quiz question (or a sentinel text).
pub fn broadcast_quiz_question(state: &SharedState, question: &str) {
    let payload = QuizQuestionEvent {
        question: question.to_string(),
    };
    send_event(state, EVENT_QUIZ_QUESTION, &payload);
}

/// Broadcast the revealed answer for the question last sent.
pub fn broadcast_quiz_answer(state: &SharedState, answer: &str) {
    let payload = QuizAnswerEvent {
        answer: answer.to_string(),
    };
    send_event(state, EVENT_QUIZ_ANSWER, &payload);
}

/// Build the snapshot sequence delivered to a freshly connected channel:
/// roster and scores, current theme, the countdown if it is running, and the
/// active question if one is in play.
pub fn snapshot_events(game: &GameState) -> Vec<ServerEvent> {
    let mut events = Vec::with_capacity(4);

    push_event(
        &mut events,
        EVENT_TEAMS_UPDATED,
        &teams_updated_payload(game),
    );
    push_event(
        &mut events,
        EVENT_ROULETTE_RESULT,
        &RouletteResultEvent {
            theme: game.theme().to_string(),
        },
    );

    if game.countdown().is_running() {
        push_event(
            &mut events,
            EVENT_COUNTDOWN_STARTED,
            &CountdownStartedEvent {
                seconds: game.countdown().remaining(),
            },
        );
    }

    if let Some(question) = game.quiz().current() {
        push_event(
            &mut events,
            EVENT_QUIZ_QUESTION,
            &QuizQuestionEvent {
                question: question.question.clone(),
            },
        );
    }

    events
}

fn teams_updated_payload(game: &GameState) -> TeamsUpdatedEvent {
    TeamsUpdatedEvent {
        players: roster(game),
        scores: game.scores(),
    }
}

fn send_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.sse().broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}

fn send_empty_event(state: &SharedState, event: &str) {
    state
        .sse()
        .broadcast(ServerEvent::new(Some(event.to_string()), "{}".to_string()));
}

fn push_event(events: &mut Vec<ServerEvent>, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => events.push(event),
        Err(err) => warn!(event, error = %err, "failed to serialize snapshot payload"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuizQuestion;

    fn event_names(events: &[ServerEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|event| event.event.as_deref())
            .collect()
    }

    #[test]
    fn snapshot_covers_roster_and_theme_by_default() {
        let game = GameState::new(Vec::new());
        let events = snapshot_events(&game);
        assert_eq!(event_names(&events), ["teams_updated", "roulette_result"]);
    }

    #[test]
    fn snapshot_includes_running_countdown_with_current_remaining() {
        let mut game = GameState::new(Vec::new());
        game.countdown_mut().start(30);
        game.countdown_mut().tick();

        let events = snapshot_events(&game);
        let started = events
            .iter()
            .find(|event| event.event.as_deref() == Some("countdown_started"))
            .expect("countdown_started should be in the snapshot");
        let payload: serde_json::Value = serde_json::from_str(&started.data).unwrap();
        assert_eq!(payload["seconds"], 29);
    }

    #[test]
    fn snapshot_skips_stopped_countdown_and_inactive_question() {
        let mut game = GameState::new(vec![QuizQuestion {
            question: "q".into(),
            answer: "a".into(),
        }]);
        game.countdown_mut().start(10);
        game.countdown_mut().stop();

        let events = snapshot_events(&game);
        assert_eq!(event_names(&events), ["teams_updated", "roulette_result"]);
    }

    #[test]
    fn snapshot_includes_active_question() {
        let mut game = GameState::new(vec![QuizQuestion {
            question: "Capitale de la France ?".into(),
            answer: "Paris".into(),
        }]);
        game.quiz_mut().advance();

        let events = snapshot_events(&game);
        let question = events
            .iter()
            .find(|event| event.event.as_deref() == Some("quiz_question"))
            .expect("quiz_question should be in the snapshot");
        let payload: serde_json::Value = serde_json::from_str(&question.data).unwrap();
        assert_eq!(payload["question"], "Capitale de la France ?");
    }
}
