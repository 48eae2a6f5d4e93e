use std::time::Duration;

/// Timer périodique piloté par le temps écoulé (horloge murale), indépendant
/// de la cadence de rendu.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    accumulated: Duration,
    max_catch_up: u32,
}

impl IntervalTimer {
    /// `period` nul est ramené à 1 ms.
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn from_millis(ms: u64, max_catch_up: u32) -> Self {
        Self::new(Duration::from_millis(ms), max_catch_up)
    }

    /// Temps restant avant le prochain déclenchement.
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.accumulated)
    }

    /// Avance le timer de `elapsed` et retourne le nombre de déclenchements.
    ///
    /// Après un long blocage (fenêtre déplacée, débogueur...), au plus
    /// `max_catch_up` périodes sont rattrapées ; le reste est abandonné.
    pub fn poll(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut fired = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            fired += 1;
            if fired == self.max_catch_up {
                self.accumulated = self.accumulated.min(self.period - Duration::from_nanos(1));
                break;
            }
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = IntervalTimer::from_millis(800, 4);
        assert_eq!(timer.poll(Duration::from_millis(799)), 0);
        assert_eq!(timer.poll(Duration::from_millis(1)), 1);
        assert_eq!(timer.poll(Duration::from_millis(400)), 0);
        assert_eq!(timer.remaining(), Duration::from_millis(400));
    }

    #[test]
    fn test_catch_up_is_bounded() {
        let mut timer = IntervalTimer::from_millis(100, 3);
        assert_eq!(timer.poll(Duration::from_secs(10)), 3);
        // le retard restant ne déclenche pas une rafale au poll suivant
        assert_eq!(timer.poll(Duration::ZERO), 0);
    }

    #[test]
    fn test_sixty_fps_frames_accumulate() {
        let mut timer = IntervalTimer::from_millis(1200, 4);
        let frame = Duration::from_micros(16_667);
        let fires: u32 = (0..72).map(|_| timer.poll(frame)).sum();
        assert_eq!(fires, 1);
    }
}
