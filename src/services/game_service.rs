//! Business logic behind the command surface. Every command performs one
//! atomic mutation under the game write guard and publishes the resulting
//! events while the guard is still held, so clients observe events in
//! mutation order.

use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, info};

use crate::{
    dto::{
        admin::{
            ActionResponse, DiceResponse, NextQuestionResponse, RevealAnswerResponse,
            RouletteResponse, ScoreUpdateRequest, ScoreUpdateResponse, StartCountdownRequest,
        },
        player::{JoinRequest, JoinResponse},
    },
    error::ServiceError,
    services::sse_events::{self, QUIZ_EXHAUSTED_TEXT},
    state::{SharedState, game::Team},
};

/// Register a new player and announce the updated roster.
pub async fn join_player(
    state: &SharedState,
    request: JoinRequest,
) -> Result<JoinResponse, ServiceError> {
    let mut game = state.game().write().await;
    let player = game.add_player(request.username);
    let response = JoinResponse {
        id: player.id.clone(),
        username: player.username.clone(),
    };

    info!(player = %response.id, "player joined");
    sse_events::broadcast_teams_updated(state, &game);
    Ok(response)
}

/// Remove a player from the roster. An unknown id is a no-op: the player may
/// have already left.
pub async fn leave_player(state: &SharedState, id: &str) -> Result<(), ServiceError> {
    let mut game = state.game().write().await;
    match game.remove_player(id) {
        Some(player) => {
            info!(player = %player.id, "player left");
            sse_events::broadcast_teams_updated(state, &game);
        }
        None => debug!(player = %id, "leave for unknown player id ignored"),
    }
    Ok(())
}

/// Shuffle all players into two even teams and restart the scores.
pub async fn auto_assign_teams(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    let mut game = state.game().write().await;
    game.assign_teams_randomly();
    sse_events::broadcast_teams_updated(state, &game);
    Ok(ActionResponse {
        message: "teams assigned".into(),
    })
}

/// Apply a score delta to a team. An unknown team number is rejected before
/// any mutation and nothing is broadcast.
pub async fn update_score(
    state: &SharedState,
    request: ScoreUpdateRequest,
) -> Result<ScoreUpdateResponse, ServiceError> {
    let team = Team::try_from(request.team)
        .map_err(|other| ServiceError::InvalidInput(format!("unknown team `{other}`")))?;

    let mut game = state.game().write().await;
    let score = game.update_score(team, request.points);
    sse_events::broadcast_teams_updated(state, &game);

    Ok(ScoreUpdateResponse {
        team: request.team,
        score,
    })
}

/// Arm the countdown. The `countdown_started` event is published from the
/// command path; subsequent ticks come from the scheduler.
pub async fn start_countdown(
    state: &SharedState,
    request: StartCountdownRequest,
) -> Result<ActionResponse, ServiceError> {
    let mut game = state.game().write().await;
    game.countdown_mut().start(request.seconds);
    info!(seconds = request.seconds, "countdown started");
    sse_events::broadcast_countdown_started(state, request.seconds);

    Ok(ActionResponse {
        message: format!("countdown started for {} seconds", request.seconds),
    })
}

/// Halt the countdown. Safe to repeat: the state transition is idempotent and
/// a stopped countdown can never emit another tick.
pub async fn stop_countdown(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    let mut game = state.game().write().await;
    game.countdown_mut().stop();
    info!("countdown stopped");
    sse_events::broadcast_countdown_stopped(state);

    Ok(ActionResponse {
        message: "countdown stopped".into(),
    })
}

/// Spin the roulette: pick a theme from the configured wheel, store it, and
/// announce it.
pub async fn spin_roulette(state: &SharedState) -> Result<RouletteResponse, ServiceError> {
    let theme = state
        .config()
        .themes()
        .choose(&mut rand::rng())
        .cloned()
        .ok_or_else(|| ServiceError::InvalidState("theme wheel is empty".into()))?;

    let mut game = state.game().write().await;
    game.set_theme(theme.clone());
    sse_events::broadcast_roulette_result(state, &theme);

    Ok(RouletteResponse { theme })
}

/// Roll a six-sided die and announce the result. No state is persisted.
pub async fn roll_dice(state: &SharedState) -> Result<DiceResponse, ServiceError> {
    let value = rand::rng().random_range(1..=6);
    sse_events::broadcast_dice_result(state, value);
    Ok(DiceResponse { value })
}

/// Advance the quiz to the next question and announce it. Once the deck is
/// exhausted the sentinel text is announced instead, indefinitely.
pub async fn next_question(state: &SharedState) -> Result<NextQuestionResponse, ServiceError> {
    let mut game = state.game().write().await;
    let response = match game.quiz_mut().advance() {
        Some(question) => NextQuestionResponse {
            finished: false,
            question: Some(question.question.clone()),
        },
        None => NextQuestionResponse {
            finished: true,
            question: None,
        },
    };

    let text = response.question.as_deref().unwrap_or(QUIZ_EXHAUSTED_TEXT);
    sse_events::broadcast_quiz_question(state, text);

    Ok(response)
}

/// Reveal the answer of the question last sent. When there is none (no
/// question asked yet, or the deck ran out) nothing is broadcast.
pub async fn reveal_answer(state: &SharedState) -> Result<RevealAnswerResponse, ServiceError> {
    let game = state.game().read().await;
    let answer = game.quiz().last_answer_sent().map(str::to_string);

    if let Some(answer) = &answer {
        sse_events::broadcast_quiz_answer(state, answer);
    }

    Ok(RevealAnswerResponse { answer })
}

/// Reset the whole session to its initial state and publish the compound
/// reset sequence. Holding the write guard across both the mutation and the
/// broadcasts keeps the sequence atomic for every observer.
pub async fn reset_game(state: &SharedState) -> Result<ActionResponse, ServiceError> {
    let mut game = state.game().write().await;
    game.reset_all();

    sse_events::broadcast_teams_updated(state, &game);
    sse_events::broadcast_roulette_result(state, game.theme());
    sse_events::broadcast_quiz_question(state, "");
    sse_events::broadcast_countdown_stopped(state);

    info!("game state reset by admin");
    Ok(ActionResponse {
        message: "game reset".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        questions::QuizQuestion,
        services::scheduler,
        state::{AppState, game::DEFAULT_THEME},
    };
    use tokio::sync::broadcast::error::TryRecvError;

    fn test_state(questions: Vec<QuizQuestion>) -> SharedState {
        AppState::new(AppConfig::default(), questions)
    }

    fn three_questions() -> Vec<QuizQuestion> {
        (0..3)
            .map(|index| QuizQuestion {
                question: format!("question {index}"),
                answer: format!("answer {index}"),
            })
            .collect()
    }

    fn next_event_name(
        receiver: &mut tokio::sync::broadcast::Receiver<crate::dto::sse::ServerEvent>,
    ) -> String {
        receiver
            .try_recv()
            .expect("an event should have been broadcast")
            .event
            .expect("events are always named")
    }

    fn next_event_payload(
        receiver: &mut tokio::sync::broadcast::Receiver<crate::dto::sse::ServerEvent>,
    ) -> serde_json::Value {
        let event = receiver
            .try_recv()
            .expect("an event should have been broadcast");
        serde_json::from_str(&event.data).expect("event payloads are JSON")
    }

    #[tokio::test]
    async fn join_broadcasts_roster_and_issues_unique_ids() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        let first = join_player(
            &state,
            JoinRequest {
                username: "alice".into(),
            },
        )
        .await
        .unwrap();
        let second = join_player(
            &state,
            JoinRequest {
                username: "bob".into(),
            },
        )
        .await
        .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(next_event_name(&mut receiver), "teams_updated");
        let payload = next_event_payload(&mut receiver);
        assert_eq!(payload["players"][first.id.as_str()]["username"], "alice");
        assert_eq!(payload["scores"]["1"], 0);
    }

    #[tokio::test]
    async fn invalid_team_is_rejected_without_broadcast() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        let result = update_score(&state, ScoreUpdateRequest { team: 3, points: 5 }).await;

        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn score_update_broadcasts_new_tally() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        let response = update_score(&state, ScoreUpdateRequest { team: 2, points: 3 })
            .await
            .unwrap();
        assert_eq!(response.score, 3);

        assert_eq!(next_event_name(&mut receiver), "teams_updated");
        let payload = next_event_payload(&mut receiver);
        assert_eq!(payload["scores"]["2"], 3);
    }

    #[tokio::test]
    async fn countdown_start_then_scheduler_run_emits_exact_sequence() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        start_countdown(&state, StartCountdownRequest { seconds: 10 })
            .await
            .unwrap();
        for _ in 0..12 {
            scheduler::tick_once(&state).await;
        }

        assert_eq!(next_event_name(&mut receiver), "countdown_started");
        for _ in 0..9 {
            assert_eq!(next_event_name(&mut receiver), "countdown_tick");
        }
        assert_eq!(next_event_name(&mut receiver), "countdown_finished");
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn countdown_tick_payload_counts_down() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        start_countdown(&state, StartCountdownRequest { seconds: 3 })
            .await
            .unwrap();
        scheduler::tick_once(&state).await;
        scheduler::tick_once(&state).await;

        assert_eq!(next_event_name(&mut receiver), "countdown_started");
        assert_eq!(next_event_payload(&mut receiver)["seconds"], 2);
        assert_eq!(next_event_payload(&mut receiver)["seconds"], 1);
    }

    #[tokio::test]
    async fn stop_halts_ticks_until_next_start() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        start_countdown(&state, StartCountdownRequest { seconds: 10 })
            .await
            .unwrap();
        for _ in 0..3 {
            scheduler::tick_once(&state).await;
        }
        stop_countdown(&state).await.unwrap();
        for _ in 0..5 {
            scheduler::tick_once(&state).await;
        }

        assert_eq!(next_event_name(&mut receiver), "countdown_started");
        for _ in 0..3 {
            assert_eq!(next_event_name(&mut receiver), "countdown_tick");
        }
        assert_eq!(next_event_name(&mut receiver), "countdown_stopped");
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn quiz_flow_over_three_questions() {
        let state = test_state(three_questions());
        let mut receiver = state.sse().subscribe();

        for index in 0..3 {
            let response = next_question(&state).await.unwrap();
            assert!(!response.finished);
            assert_eq!(response.question.as_deref(), Some(&*format!("question {index}")));
            assert_eq!(next_event_name(&mut receiver), "quiz_question");
        }

        let reveal = reveal_answer(&state).await.unwrap();
        assert_eq!(reveal.answer.as_deref(), Some("answer 2"));
        assert_eq!(next_event_name(&mut receiver), "quiz_answer");

        let exhausted = next_question(&state).await.unwrap();
        assert!(exhausted.finished);
        let payload = next_event_payload(&mut receiver);
        assert_eq!(payload["question"], QUIZ_EXHAUSTED_TEXT);

        // Past the end, reveal has nothing to show and stays silent.
        let reveal = reveal_answer(&state).await.unwrap();
        assert!(reveal.answer.is_none());
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn reset_publishes_compound_sequence_and_restores_defaults() {
        let state = test_state(three_questions());
        join_player(
            &state,
            JoinRequest {
                username: "alice".into(),
            },
        )
        .await
        .unwrap();
        update_score(&state, ScoreUpdateRequest { team: 1, points: 2 })
            .await
            .unwrap();
        next_question(&state).await.unwrap();
        start_countdown(&state, StartCountdownRequest { seconds: 30 })
            .await
            .unwrap();

        let mut receiver = state.sse().subscribe();
        reset_game(&state).await.unwrap();

        assert_eq!(next_event_name(&mut receiver), "teams_updated");
        assert_eq!(next_event_name(&mut receiver), "roulette_result");
        assert_eq!(next_event_name(&mut receiver), "quiz_question");
        assert_eq!(next_event_name(&mut receiver), "countdown_stopped");

        let game = state.game().read().await;
        assert!(game.players().is_empty());
        assert_eq!(game.theme(), DEFAULT_THEME);
        assert!(game.quiz().last_answer_sent().is_none());
        assert!(!game.countdown().is_running());
    }

    #[tokio::test]
    async fn dice_roll_stays_in_range() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        for _ in 0..20 {
            let response = roll_dice(&state).await.unwrap();
            assert!((1..=6).contains(&response.value));
            let payload = next_event_payload(&mut receiver);
            assert_eq!(payload["value"], response.value);
        }
    }

    #[tokio::test]
    async fn roulette_picks_from_the_configured_wheel() {
        let state = test_state(Vec::new());
        let response = spin_roulette(&state).await.unwrap();

        assert!(
            state
                .config()
                .themes()
                .contains(&response.theme)
        );
        let game = state.game().read().await;
        assert_eq!(game.theme(), response.theme);
    }

    #[tokio::test]
    async fn leave_for_unknown_player_is_silent() {
        let state = test_state(Vec::new());
        let mut receiver = state.sse().subscribe();

        leave_player(&state, "ABC123").await.unwrap();
        assert!(matches!(receiver.try_recv(), Err(TryRecvError::Empty)));
    }
}
