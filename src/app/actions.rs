use super::*;
use crate::source::request_questions;
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Único punto por el que la UI toca el estado. Los eventos rechazados se
    /// registran y se ignoran: la pantalla sólo ofrece acciones válidas.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let name = event.name();
        match self.state.dispatch(event) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Ignoring {name}: {err}");
                false
            }
        }
    }

    pub fn solicitar_preguntas(&mut self) {
        if self.pending_load.is_some() {
            return;
        }
        self.dispatch(Event::Load);
        self.message.clear();
        let rx = request_questions(self.config.questions_url.clone());
        self.attach_source(rx);
    }

    pub(crate) fn attach_source(&mut self, rx: Receiver<LoadResult>) {
        self.pending_load = Some(rx);
    }

    /// Consulta el canal de la carga; se llama en cada frame.
    pub fn poll_question_source(&mut self) {
        let outcome = match self.pending_load.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => {
                Err(crate::source::SourceError::Fetch("question source went away".into()))
            }
        };
        self.pending_load = None;

        match outcome {
            Ok(questions) => {
                log::info!("Loaded {} questions", questions.len());
                self.dispatch(Event::LoadSucceeded(questions));
            }
            Err(err) => {
                log::error!("Could not load questions: {err}");
                self.message = err.to_string();
                self.dispatch(Event::LoadFailed);
            }
        }
    }

    pub fn empezar(&mut self) {
        self.dispatch(Event::Start);
    }

    pub fn responder(&mut self, option: usize) {
        self.dispatch(Event::Answer(option));
    }

    pub fn siguiente(&mut self) {
        self.dispatch(Event::AdvanceOrFinish);
    }

    pub fn reiniciar(&mut self) {
        self.dispatch(Event::Restart);
    }
}
