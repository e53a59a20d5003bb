use serde::{Deserialize, Serialize};
use std::fmt;

/// Pregunta tal y como la sirve el origen de datos.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(alias = "question")]
    pub text: String, // Enunciado
    pub options: Vec<String>,
    pub correct_option: usize, // Índice dentro de `options`
    pub points: u32,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// Fase del ciclo de vida del quiz.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Active,
    Finished,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Uninitialized => "uninitialized",
            Status::Loading => "loading",
            Status::Ready => "ready",
            Status::Active => "active",
            Status::Finished => "finished",
            Status::Error => "error",
        };
        f.write_str(name)
    }
}
