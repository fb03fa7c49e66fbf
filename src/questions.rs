//! Quiz question provider: loads the ordered question list once at startup.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A single quiz entry: the question read to the room and its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Question text broadcast to every client.
    pub question: String,
    /// Answer text, only revealed on explicit admin command.
    pub answer: String,
}

/// Load the quiz questions from a JSON file.
///
/// A missing or malformed file is not fatal: the game runs with an empty deck
/// and the quiz commands simply report exhaustion.
pub fn load_questions(path: &Path) -> Vec<QuizQuestion> {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Vec<QuizQuestion>>(&contents) {
            Ok(questions) => {
                info!(
                    path = %path.display(),
                    count = questions.len(),
                    "loaded quiz questions"
                );
                questions
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse quiz questions; starting with an empty deck"
                );
                Vec::new()
            }
        },
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to read quiz questions; starting with an empty deck"
            );
            Vec::new()
        }
    }
}
