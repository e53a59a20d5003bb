use std::time::Duration;

pub const TICK_SECONDS: f64 = 1.0;

/// Temporizador de un segundo que mueve la cuenta atrás.
///
/// Se alimenta del reloj de frames de egui (`InputState::time`, en segundos),
/// que funciona igual en escritorio y en wasm. Si se pierden frames, devuelve
/// todos los ticks acumulados para no retrasar la cuenta atrás.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TickClock {
    last_tick: Option<f64>,
}

impl TickClock {
    pub fn is_armed(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Arranca el reloj; si ya estaba armado no hace nada.
    pub fn arm(&mut self, now: f64) {
        if self.last_tick.is_none() {
            self.last_tick = Some(now);
        }
    }

    pub fn disarm(&mut self) {
        self.last_tick = None;
    }

    /// Segundos completos transcurridos desde el último tick.
    pub fn due_ticks(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_tick else {
            return 0;
        };
        let elapsed = now - last;
        if elapsed < TICK_SECONDS {
            return 0;
        }
        let ticks = (elapsed / TICK_SECONDS).floor();
        self.last_tick = Some(last + ticks * TICK_SECONDS);
        ticks as u32
    }

    /// Cuánto falta para el siguiente tick, para pedir el repintado.
    pub fn until_next_tick(&self, now: f64) -> Option<Duration> {
        let last = self.last_tick?;
        let remaining = (last + TICK_SECONDS - now).max(0.0);
        Some(Duration::from_secs_f64(remaining))
    }
}

/// Formatea segundos como `mm:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_clock_never_ticks() {
        let mut clock = TickClock::default();
        assert_eq!(clock.due_ticks(100.0), 0);
        assert_eq!(clock.until_next_tick(100.0), None);
    }

    #[test]
    fn ticks_once_per_whole_second() {
        let mut clock = TickClock::default();
        clock.arm(10.0);
        assert_eq!(clock.due_ticks(10.5), 0);
        assert_eq!(clock.due_ticks(11.0), 1);
        assert_eq!(clock.due_ticks(11.75), 0);
        assert_eq!(clock.due_ticks(12.25), 1);
    }

    #[test]
    fn catches_up_after_missed_frames() {
        let mut clock = TickClock::default();
        clock.arm(0.0);
        assert_eq!(clock.due_ticks(3.5), 3);
        assert_eq!(clock.until_next_tick(3.5), Some(Duration::from_secs_f64(0.5)));
    }

    #[test]
    fn arm_is_idempotent_and_disarm_resets() {
        let mut clock = TickClock::default();
        clock.arm(0.0);
        clock.arm(0.9);
        assert_eq!(clock.due_ticks(1.0), 1);

        clock.disarm();
        assert!(!clock.is_armed());
        clock.arm(5.0);
        assert_eq!(clock.due_ticks(5.5), 0);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_clock(56), "00:56");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(0), "00:00");
    }
}
