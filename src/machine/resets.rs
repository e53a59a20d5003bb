use super::*;

impl QuizState {
    /// Vuelve a `Ready` desde cualquier estado, conservando las preguntas
    /// (vacías si la carga falló) y el récord.
    pub(super) fn restart(&mut self) -> Result<(), TransitionError> {
        self.reset_run();
        self.status = Status::Ready;
        Ok(())
    }

    /// Limpia los campos de la ronda; lo comparten `restart` y una carga nueva.
    pub(super) fn reset_run(&mut self) {
        self.index = 0;
        self.answer = None;
        self.points = 0;
        self.seconds_remaining = Some(Self::countdown_for(&self.questions));
    }
}
