use super::*;

impl QuizState {
    /// Comprueba todas las precondiciones antes de mutar nada.
    pub(super) fn apply(&mut self, event: Event) -> Result<(), TransitionError> {
        match event {
            Event::Load => {
                self.status = Status::Loading;
                Ok(())
            }
            Event::LoadSucceeded(questions) => self.load_succeeded(questions),
            Event::LoadFailed => {
                self.require(Status::Loading, "loadFailed")?;
                self.status = Status::Error;
                Ok(())
            }
            Event::Start => {
                self.require(Status::Ready, "start")?;
                self.status = Status::Active;
                Ok(())
            }
            Event::Answer(option) => self.answer_question(option),
            Event::Advance => self.advance(),
            Event::Finish => self.finish(),
            Event::AdvanceOrFinish => self.advance_or_finish(),
            Event::Restart => self.restart(),
            Event::Tick => self.tick(),
        }
    }

    fn require(&self, expected: Status, event: &'static str) -> Result<(), TransitionError> {
        if self.status == expected {
            Ok(())
        } else {
            Err(TransitionError::InvalidStatus {
                event,
                status: self.status,
            })
        }
    }

    fn load_succeeded(&mut self, questions: Vec<Question>) -> Result<(), TransitionError> {
        self.require(Status::Loading, "loadSucceeded")?;
        // Un `Load` a mitad de ronda no puede dejar el índice fuera de rango
        self.questions = questions;
        self.reset_run();
        self.status = Status::Ready;
        Ok(())
    }

    fn answer_question(&mut self, option: usize) -> Result<(), TransitionError> {
        self.require(Status::Active, "answer")?;
        let index = self.index;
        let question = self
            .current_question()
            .ok_or(TransitionError::NoCurrentQuestion { index })?;
        if self.answer.is_some() {
            return Err(TransitionError::AlreadyAnswered { index });
        }
        if option >= question.options.len() {
            return Err(TransitionError::OptionOutOfRange {
                index,
                option,
                len: question.options.len(),
            });
        }

        let earned = if question.is_correct(option) {
            question.points
        } else {
            0
        };
        self.answer = Some(option);
        self.points = self.points.saturating_add(earned);
        Ok(())
    }

    fn advance(&mut self) -> Result<(), TransitionError> {
        self.require(Status::Active, "advance")?;
        self.require_answer()?;
        if self.is_last_question() {
            return Err(TransitionError::NoNextQuestion { index: self.index });
        }
        self.index += 1;
        self.answer = None;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), TransitionError> {
        // Puede llegar un finish justo detrás del tick que ya cerró la ronda
        if self.status == Status::Finished {
            return Ok(());
        }
        self.require(Status::Active, "finish")?;
        if !self.is_last_question() {
            return Err(TransitionError::NotLastQuestion {
                index: self.index,
                total: self.questions.len(),
            });
        }
        self.close_run();
        Ok(())
    }

    fn advance_or_finish(&mut self) -> Result<(), TransitionError> {
        if self.status == Status::Finished {
            return Ok(());
        }
        self.require(Status::Active, "advanceOrFinish")?;
        self.require_answer()?;
        if self.is_last_question() {
            self.finish()
        } else {
            self.advance()
        }
    }

    fn tick(&mut self) -> Result<(), TransitionError> {
        if self.status == Status::Finished {
            return Ok(());
        }
        self.require(Status::Active, "tick")?;
        let remaining = self.seconds_remaining.unwrap_or(0).saturating_sub(1);
        self.seconds_remaining = Some(remaining);
        if remaining == 0 {
            log::info!("Time is up with {} points", self.points);
            self.close_run();
        }
        Ok(())
    }

    fn require_answer(&self) -> Result<(), TransitionError> {
        match self.answer {
            Some(_) => Ok(()),
            None => Err(TransitionError::NoAnswer { index: self.index }),
        }
    }

    /// Efecto terminal común a `finish` y al tick que agota el tiempo.
    fn close_run(&mut self) {
        self.status = Status::Finished;
        self.highscore = self.highscore.max(self.points);
    }

    pub(super) fn countdown_for(questions: &[Question]) -> u32 {
        let count = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        count.saturating_mul(SECS_PER_QUESTION)
    }
}
