//! Temporizador de la sesión de práctica: una cuenta atrás por cada
//! segmento del plan (calentamiento, repertorio, ...).

use crate::model::PracticeSegment;

#[derive(Debug, Clone)]
pub struct PracticeTimer {
    plan: Vec<PracticeSegment>,
    current: usize,
    // Segundos restantes acumulados mientras estaba en pausa
    remaining: f64,
    // `Some(t)` mientras corre: instante en que empezó el tramo actual
    running_since: Option<f64>,
    finished: bool,
}

impl PracticeTimer {
    pub fn new(plan: Vec<PracticeSegment>) -> Self {
        let remaining = plan.first().map(segment_secs).unwrap_or(0.0);
        Self {
            finished: plan.is_empty(),
            plan,
            current: 0,
            remaining,
            running_since: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_segment(&self) -> Option<&PracticeSegment> {
        self.plan.get(self.current)
    }

    pub fn next_segment(&self) -> Option<&PracticeSegment> {
        self.plan.get(self.current + 1)
    }

    pub fn remaining_secs(&self, now: f64) -> f64 {
        match self.running_since {
            Some(since) => (self.remaining - (now - since)).max(0.0),
            None => self.remaining,
        }
    }

    /// Play / pausa.
    pub fn toggle(&mut self, now: f64) {
        if self.finished {
            return;
        }
        match self.running_since.take() {
            Some(since) => {
                self.remaining = (self.remaining - (now - since)).max(0.0);
                log::debug!("Práctica en pausa ({:.0}s restantes)", self.remaining);
            }
            None => self.running_since = Some(now),
        }
    }

    /// Vuelve al principio del segmento actual, en pausa.
    pub fn reset(&mut self) {
        self.running_since = None;
        self.finished = self.plan.is_empty();
        if self.current >= self.plan.len() {
            self.current = 0;
        }
        self.remaining = self.current_segment().map(segment_secs).unwrap_or(0.0);
    }

    /// Salta al siguiente segmento; conserva si estaba corriendo.
    pub fn skip(&mut self, now: f64) {
        if self.finished {
            return;
        }
        let was_running = self.is_running();
        self.enter_segment(self.current + 1);
        if was_running && !self.finished {
            self.running_since = Some(now);
        }
    }

    /// Avanza de segmento cuando la cuenta atrás llega a cero; el siguiente
    /// segmento arranca sin pausa.
    pub fn tick(&mut self, now: f64) {
        let Some(since) = self.running_since else {
            return;
        };
        let mut elapsed = now - since;
        while !self.finished && elapsed >= self.remaining {
            elapsed -= self.remaining;
            self.enter_segment(self.current + 1);
        }
        if self.finished {
            return;
        }
        self.remaining -= elapsed;
        self.running_since = Some(now);
    }

    fn enter_segment(&mut self, index: usize) {
        self.running_since = None;
        match self.plan.get(index) {
            Some(segment) => {
                log::info!("Práctica: empieza \"{}\"", segment.title);
                self.current = index;
                self.remaining = segment_secs(segment);
            }
            None => {
                log::info!("Práctica completada");
                self.current = self.plan.len();
                self.remaining = 0.0;
                self.finished = true;
            }
        }
    }

    /// `MM:SS`
    pub fn remaining_label(&self, now: f64) -> String {
        let secs = self.remaining_secs(now).ceil() as u64;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn next_label(&self) -> Option<String> {
        self.next_segment()
            .map(|s| format!("Siguiente: {} ({} min)", s.title, s.minutes))
    }
}

fn segment_secs(segment: &PracticeSegment) -> f64 {
    segment.minutes as f64 * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> Vec<PracticeSegment> {
        vec![
            PracticeSegment { title: "Calentamiento de Técnica".into(), minutes: 10 },
            PracticeSegment { title: "Repertorio".into(), minutes: 10 },
        ]
    }

    #[test]
    fn starts_paused_at_full_time() {
        let timer = PracticeTimer::new(plan());
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_label(0.0), "10:00");
        assert_eq!(timer.next_label().as_deref(), Some("Siguiente: Repertorio (10 min)"));
    }

    #[test]
    fn counts_down_and_pauses() {
        let mut timer = PracticeTimer::new(plan());
        timer.toggle(100.0);
        assert_eq!(timer.remaining_label(130.0), "09:30");
        timer.toggle(130.0);
        assert_eq!(timer.remaining_label(500.0), "09:30");
        timer.toggle(500.0);
        timer.tick(505.0);
        assert_eq!(timer.remaining_label(505.0), "09:25");
    }

    #[test]
    fn tick_rolls_over_into_next_segment() {
        let mut timer = PracticeTimer::new(plan());
        timer.toggle(0.0);
        timer.tick(600.0);
        assert_eq!(timer.current_segment().map(|s| s.title.as_str()), Some("Repertorio"));
        // Sigue corriendo en el segmento nuevo
        assert!(timer.is_running());
        assert_eq!(timer.remaining_label(600.0), "10:00");
        assert_eq!(timer.next_label(), None);
    }

    #[test]
    fn skip_and_finish() {
        let mut timer = PracticeTimer::new(plan());
        timer.toggle(0.0);
        timer.skip(5.0);
        assert!(timer.is_running());
        assert_eq!(timer.current_segment().map(|s| s.minutes), Some(10));
        timer.skip(6.0);
        assert!(timer.is_finished());
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_label(7.0), "00:00");

        timer.reset();
        assert!(!timer.is_finished());
        assert_eq!(timer.current_segment().map(|s| s.title.as_str()), Some("Calentamiento de Técnica"));
    }

    #[test]
    fn reset_restores_current_segment() {
        let mut timer = PracticeTimer::new(plan());
        timer.toggle(0.0);
        timer.tick(42.0);
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_label(1000.0), "10:00");
    }

    #[test]
    fn empty_plan_is_finished() {
        let mut timer = PracticeTimer::new(Vec::new());
        assert!(timer.is_finished());
        timer.toggle(0.0);
        assert!(!timer.is_running());
    }
}
