use super::*;

impl QuizState {
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn num_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answer(&self) -> Option<usize> {
        self.answer
    }

    pub fn has_answered(&self) -> bool {
        self.answer.is_some()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn seconds_remaining(&self) -> Option<u32> {
        self.seconds_remaining
    }

    /// Única forma de obtener la pregunta en pantalla.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Sin preguntas también cuenta como "última", para poder cerrar la ronda.
    pub fn is_last_question(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Suma de los puntos de todas las preguntas. No se guarda en el estado.
    pub fn max_possible_points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0u32, |total, q| total.saturating_add(q.points))
    }

    /// Valor de la barra de progreso: la pregunta actual cuenta en cuanto se responde.
    pub fn progress_value(&self) -> usize {
        if self.has_answered() {
            self.index + 1
        } else {
            self.index
        }
    }
}
