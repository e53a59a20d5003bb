//! Máquina de estados del quiz.
//!
//! Toda la lógica de la ronda vive aquí: `reduce` es una función pura que
//! recibe el estado actual y un [`Event`] y devuelve el siguiente estado, o
//! un [`TransitionError`] si el evento no es válido en ese momento. No hace
//! I/O ni maneja temporizadores; eso es cosa de la capa de presentación.

use crate::model::{Question, Status};
use thiserror::Error;

// Submódulos
pub mod action;
pub mod queries;
pub mod resets;
pub mod transitions;

pub use action::{ActionError, DispatchError};

/// Segundos de cuenta atrás por pregunta.
pub const SECS_PER_QUESTION: u32 = 28;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    questions: Vec<Question>,
    status: Status,
    index: usize,                   // Pregunta mostrada (0-based)
    answer: Option<usize>,          // Opción elegida en la pregunta actual
    points: u32,                    // Puntos de la ronda actual
    highscore: u32,                 // Mejor puntuación de la sesión
    seconds_remaining: Option<u32>, // None = temporizador sin arrancar
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Load,
    LoadSucceeded(Vec<Question>),
    LoadFailed,
    Start,
    Answer(usize),
    Advance,
    Finish,
    /// Avanza si queda otra pregunta y termina si no.
    AdvanceOrFinish,
    Restart,
    Tick,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Load => "load",
            Event::LoadSucceeded(_) => "loadSucceeded",
            Event::LoadFailed => "loadFailed",
            Event::Start => "start",
            Event::Answer(_) => "answer",
            Event::Advance => "advance",
            Event::Finish => "finish",
            Event::AdvanceOrFinish => "advanceOrFinish",
            Event::Restart => "restart",
            Event::Tick => "tick",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("`{event}` is not allowed while the quiz is {status}")]
    InvalidStatus { event: &'static str, status: Status },
    #[error("there is no question at index {index}")]
    NoCurrentQuestion { index: usize },
    #[error("question {index} has already been answered")]
    AlreadyAnswered { index: usize },
    #[error("option {option} is out of range for question {index} ({len} options)")]
    OptionOutOfRange {
        index: usize,
        option: usize,
        len: usize,
    },
    #[error("question {index} has no answer yet")]
    NoAnswer { index: usize },
    #[error("question {index} is the last one, finish instead")]
    NoNextQuestion { index: usize },
    #[error("question {index} is not the last of {total}")]
    NotLastQuestion { index: usize, total: usize },
}

/// Calcula el siguiente estado sin tocar el actual.
pub fn reduce(state: &QuizState, event: Event) -> Result<QuizState, TransitionError> {
    let mut next = state.clone();
    next.apply(event)?;
    Ok(next)
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aplica el evento sobre `self`. Si se rechaza, el estado no cambia.
    pub fn dispatch(&mut self, event: Event) -> Result<(), TransitionError> {
        let name = event.name();
        let before = self.status;
        self.apply(event)?;
        if before != self.status {
            log::debug!("{name}: {before} -> {}", self.status);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn question(points: u32, correct_option: usize) -> Question {
        Question {
            text: format!("Pregunta de {points} puntos"),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option,
            points,
        }
    }

    /// Dos preguntas de 10 y 20 puntos, con la correcta en 0 y 2.
    pub fn two_questions() -> Vec<Question> {
        vec![question(10, 0), question(20, 2)]
    }

    pub fn ready_with(questions: Vec<Question>) -> QuizState {
        let mut state = QuizState::new();
        state.dispatch(Event::Load).unwrap();
        state.dispatch(Event::LoadSucceeded(questions)).unwrap();
        state
    }

    pub fn active_with(questions: Vec<Question>) -> QuizState {
        let mut state = ready_with(questions);
        state.dispatch(Event::Start).unwrap();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = ready_with(two_questions());
        let next = reduce(&state, Event::Start).unwrap();
        assert_eq!(state.status(), Status::Ready);
        assert_eq!(next.status(), Status::Active);
    }

    #[test]
    fn two_question_scenario() {
        let mut state = active_with(two_questions());

        state.dispatch(Event::Answer(0)).unwrap();
        assert_eq!(state.points(), 10);

        state.dispatch(Event::Advance).unwrap();
        assert_eq!(state.index(), 1);
        assert_eq!(state.answer(), None);

        state.dispatch(Event::Answer(1)).unwrap();
        assert_eq!(state.points(), 10);

        state.dispatch(Event::Finish).unwrap();
        assert_eq!(state.status(), Status::Finished);
        assert_eq!(state.points(), 10);
        assert_eq!(state.highscore(), 10);
    }

    #[test]
    fn rejected_event_does_not_mutate() {
        let mut state = ready_with(two_questions());
        let before = state.clone();
        let err = state.dispatch(Event::Answer(0)).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidStatus {
                event: "answer",
                status: Status::Ready
            }
        );
        assert_eq!(state, before);
        assert_eq!(state.points(), 0);
        assert_eq!(state.answer(), None);
    }

    #[test]
    fn index_never_exceeds_question_count() {
        let questions = vec![question(5, 1), question(5, 1), question(5, 1)];
        let total = questions.len();
        let mut state = active_with(questions);
        let mut last_index = 0;
        for _ in 0..10 {
            let _ = state.dispatch(Event::Answer(1));
            let _ = state.dispatch(Event::Advance);
            assert!(state.index() <= total);
            assert!(state.index() >= last_index);
            last_index = state.index();
        }
        assert_eq!(state.index(), total - 1);
        assert_eq!(state.points(), 15);
    }

    #[test]
    fn points_equal_sum_of_correct_answers() {
        let questions = vec![question(3, 0), question(7, 1), question(11, 2), question(13, 3)];
        let picks = [0, 0, 2, 1];
        let expected: u32 = questions
            .iter()
            .zip(picks)
            .filter(|(q, pick)| q.is_correct(*pick))
            .map(|(q, _)| q.points)
            .sum();

        let mut state = active_with(questions);
        for pick in picks {
            state.dispatch(Event::Answer(pick)).unwrap();
            state.dispatch(Event::AdvanceOrFinish).unwrap();
        }
        assert_eq!(state.status(), Status::Finished);
        assert_eq!(state.points(), expected);
        assert_eq!(expected, 14);
    }
}
