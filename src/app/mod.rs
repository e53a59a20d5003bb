use crate::clock::TickClock;
use crate::config::QuizConfig;
use crate::machine::{Event, QuizState};
use crate::model::Status;
use crate::source::LoadResult;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod timer;
pub mod view_models;

pub use view_models::{FinishedSummary, ProgressInfo};

/// Capa de presentación: guarda la máquina de estados, el reloj de ticks y
/// la petición de preguntas en curso. No decide nada por su cuenta; sólo
/// traduce clics y segundos a [`Event`]s.
pub struct QuizApp {
    pub config: QuizConfig,
    pub message: String,
    state: QuizState,
    clock: TickClock,
    pending_load: Option<Receiver<LoadResult>>,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            message: String::new(),
            state: QuizState::new(),
            clock: TickClock::default(),
            pending_load: None,
        }
    }

    /// Crea la app y lanza la carga inicial de preguntas.
    pub fn start(config: QuizConfig) -> Self {
        let mut app = Self::new(config);
        app.solicitar_preguntas();
        app
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }
}
