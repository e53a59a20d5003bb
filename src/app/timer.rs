use super::*;
use std::time::Duration;

impl QuizApp {
    /// Arma el reloj al entrar en `Active`, lo desarma al salir y despacha un
    /// `Tick` por cada segundo vencido. Devuelve cuándo hay que repintar.
    pub fn drive_timer(&mut self, now: f64) -> Option<Duration> {
        if self.status() != Status::Active {
            self.clock.disarm();
            return None;
        }

        self.clock.arm(now);
        for _ in 0..self.clock.due_ticks(now) {
            self.dispatch(Event::Tick);
            if self.status() != Status::Active {
                self.clock.disarm();
                return None;
            }
        }
        self.clock.until_next_tick(now)
    }

    pub fn timer_running(&self) -> bool {
        self.clock.is_armed()
    }
}
