// src/app/view_models.rs

use super::*;
use crate::clock::format_clock;

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressInfo {
    pub question_number: usize, // 1-based
    pub num_questions: usize,
    pub progress_value: usize,
    pub points: u32,
    pub max_points: u32,
    pub clock: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FinishedSummary {
    pub points: u32,
    pub max_points: u32,
    pub highscore: u32,
}

impl ProgressInfo {
    pub fn fraction(&self) -> f32 {
        if self.num_questions == 0 {
            return 0.0;
        }
        self.progress_value as f32 / self.num_questions as f32
    }

    pub fn question_label(&self) -> String {
        format!("Pregunta {} / {}", self.question_number, self.num_questions)
    }

    pub fn points_label(&self) -> String {
        format!("{} / {} puntos", self.points, self.max_points)
    }
}

impl FinishedSummary {
    pub fn percentage(&self) -> f32 {
        if self.max_points == 0 {
            return 0.0;
        }
        self.points as f32 / self.max_points as f32 * 100.0
    }

    pub fn emoji(&self) -> &'static str {
        let pct = self.percentage();
        if self.max_points > 0 && self.points == self.max_points {
            "🥇"
        } else if pct >= 80.0 {
            "🎉"
        } else if pct >= 50.0 {
            "🙃"
        } else if pct > 0.0 {
            "🤨"
        } else {
            "🤦"
        }
    }

    pub fn label(&self) -> String {
        format!(
            "{} Has sacado {} de {} puntos ({}%)",
            self.emoji(),
            self.points,
            self.max_points,
            self.percentage().ceil()
        )
    }

    pub fn highscore_label(&self) -> String {
        format!("(Récord: {} puntos)", self.highscore)
    }
}

impl QuizApp {
    pub fn progress_info(&self) -> ProgressInfo {
        let state = &self.state;
        ProgressInfo {
            question_number: state.index() + 1,
            num_questions: state.num_questions(),
            progress_value: state.progress_value(),
            points: state.points(),
            max_points: state.max_possible_points(),
            clock: format_clock(state.seconds_remaining().unwrap_or(0)),
        }
    }

    pub fn finished_summary(&self) -> FinishedSummary {
        FinishedSummary {
            points: self.state.points(),
            max_points: self.state.max_possible_points(),
            highscore: self.state.highscore(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(points: u32, max_points: u32) -> FinishedSummary {
        FinishedSummary {
            points,
            max_points,
            highscore: points,
        }
    }

    #[test]
    fn emoji_bands() {
        assert_eq!(summary(30, 30).emoji(), "🥇");
        assert_eq!(summary(25, 30).emoji(), "🎉");
        assert_eq!(summary(15, 30).emoji(), "🙃");
        assert_eq!(summary(5, 30).emoji(), "🤨");
        assert_eq!(summary(0, 30).emoji(), "🤦");
        assert_eq!(summary(0, 0).emoji(), "🤦");
    }

    #[test]
    fn labels() {
        let s = summary(10, 30);
        assert_eq!(s.label(), "🤨 Has sacado 10 de 30 puntos (34%)");
        assert_eq!(s.highscore_label(), "(Récord: 10 puntos)");

        let progress = ProgressInfo {
            question_number: 2,
            num_questions: 4,
            progress_value: 2,
            points: 10,
            max_points: 40,
            clock: "01:30".into(),
        };
        assert_eq!(progress.fraction(), 0.5);
        assert_eq!(progress.question_label(), "Pregunta 2 / 4");
        assert_eq!(progress.points_label(), "10 / 40 puntos");
    }

    #[test]
    fn progress_info_reads_the_machine() {
        let mut app = QuizApp::new(QuizConfig::default());
        app.dispatch(Event::Load);
        app.dispatch(Event::LoadSucceeded(vec![crate::model::Question {
            text: "q".into(),
            options: vec!["a".into(), "b".into()],
            correct_option: 0,
            points: 10,
        }]));
        app.empezar();
        app.responder(0);

        let info = app.progress_info();
        assert_eq!(info.question_number, 1);
        assert_eq!(info.progress_value, 1);
        assert_eq!(info.points, 10);
        assert_eq!(info.max_points, 10);
        assert_eq!(info.clock, "00:28");
    }
}
