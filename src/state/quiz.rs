//! Sequential cursor over the immutable quiz question list.

use crate::questions::QuizQuestion;

/// Quiz progress: the question list fixed at load time, the cursor into it,
/// and the answer of the question most recently sent to clients.
///
/// The cursor starts as `None` (no active question). Advancing moves it
/// forward one index per call and never wraps: once past the last question it
/// stays past it, and `current` keeps returning `None`.
#[derive(Debug, Clone, Default)]
pub struct QuizDeck {
    questions: Vec<QuizQuestion>,
    cursor: Option<usize>,
    last_answer_sent: Option<String>,
}

impl QuizDeck {
    /// Build a deck over the question list loaded at startup.
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            cursor: None,
            last_answer_sent: None,
        }
    }

    /// The question under the cursor, or `None` when no question is active or
    /// the deck is exhausted.
    pub fn current(&self) -> Option<&QuizQuestion> {
        self.cursor.and_then(|index| self.questions.get(index))
    }

    /// Move the cursor to the next question and return it.
    ///
    /// Tracks `last_answer_sent` for the reveal command: set when the advance
    /// yields a question, cleared once the deck is exhausted.
    pub fn advance(&mut self) -> Option<&QuizQuestion> {
        let next = self.cursor.map_or(0, |index| index.saturating_add(1));
        self.cursor = Some(next);
        self.last_answer_sent = self
            .questions
            .get(next)
            .map(|question| question.answer.clone());
        self.questions.get(next)
    }

    /// Answer of the question that was last sent, regardless of where the
    /// cursor has moved since.
    pub fn last_answer_sent(&self) -> Option<&str> {
        self.last_answer_sent.as_deref()
    }

    /// Number of questions in the deck.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the deck was loaded empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Clear the cursor and the stored answer, keeping the question list.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.last_answer_sent = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(count: usize) -> QuizDeck {
        let questions = (0..count)
            .map(|index| QuizQuestion {
                question: format!("question {index}"),
                answer: format!("answer {index}"),
            })
            .collect();
        QuizDeck::new(questions)
    }

    #[test]
    fn no_question_active_before_first_advance() {
        let deck = deck_of(3);
        assert!(deck.current().is_none());
        assert!(deck.last_answer_sent().is_none());
    }

    #[test]
    fn advances_through_all_questions_then_exhausts() {
        let mut deck = deck_of(3);

        for index in 0..3 {
            let question = deck.advance().expect("question should be available");
            assert_eq!(question.question, format!("question {index}"));
        }

        assert!(deck.advance().is_none());
        assert!(deck.advance().is_none());
        assert!(deck.current().is_none());
    }

    #[test]
    fn last_answer_survives_until_exhaustion() {
        let mut deck = deck_of(3);
        deck.advance();
        deck.advance();
        deck.advance();
        assert_eq!(deck.last_answer_sent(), Some("answer 2"));

        deck.advance();
        assert!(deck.last_answer_sent().is_none());
    }

    #[test]
    fn empty_deck_exhausts_immediately() {
        let mut deck = deck_of(0);
        assert!(deck.advance().is_none());
        assert!(deck.last_answer_sent().is_none());
    }

    #[test]
    fn reset_clears_cursor_and_answer() {
        let mut deck = deck_of(2);
        deck.advance();
        deck.reset();

        assert!(deck.current().is_none());
        assert!(deck.last_answer_sent().is_none());
        // The list itself stays loaded; the next advance starts over.
        assert_eq!(
            deck.advance().map(|question| question.question.as_str()),
            Some("question 0")
        );
    }
}
