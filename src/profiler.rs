use itertools::{Itertools, MinMaxResult};
use log::info;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::time::Instant;

/// Fenêtre glissante de mesures
#[derive(Debug, Default)]
struct Series {
    values: VecDeque<f64>,
}

impl Series {
    fn push(&mut self, value: f64, max_samples: usize) {
        if self.values.len() >= max_samples {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// (moyenne, min, max)
    fn summary(&self) -> Option<(f64, f64, f64)> {
        let (min, max) = match self.values.iter().copied().minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(v) => (v, v),
            MinMaxResult::MinMax(min, max) => (min, max),
        };
        let avg = self.values.iter().sum::<f64>() / self.values.len() as f64;
        Some((avg, min, max))
    }
}

#[derive(Debug, Default)]
struct ProfilerInner {
    max_samples: usize,
    /// Durées (ms) des blocs profilés
    timings: BTreeMap<String, Series>,
    /// Métriques scalaires (nombre d'entités, ...)
    metrics: BTreeMap<String, Series>,
    frame_times: Series,
}

/// Profiler de la boucle d'animation.
///
/// La boucle étant mono-thread, l'état partagé (avec les `FrameGuard`) est un
/// simple `Rc<RefCell<..>>`.
#[derive(Debug, Clone)]
pub struct Profiler {
    inner: Rc<RefCell<ProfilerInner>>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ProfilerInner {
                max_samples: max_samples.max(1),
                ..Default::default()
            })),
        }
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard {
        FrameGuard {
            profiler: self.clone(),
            start: Instant::now(),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f64() * 1000.0;

        let mut inner = self.inner.borrow_mut();
        let max_samples = inner.max_samples;
        inner
            .timings
            .entry(label.to_string())
            .or_default()
            .push(dt, max_samples);
        result
    }

    /// Enregistre une métrique scalaire
    pub fn record_metric(&self, label: &str, value: impl Into<f64>) {
        let mut inner = self.inner.borrow_mut();
        let max_samples = inner.max_samples;
        inner
            .metrics
            .entry(label.to_string())
            .or_default()
            .push(value.into(), max_samples);
    }

    /// Retourne le FPS moyen sur la fenêtre de mesures
    pub fn fps(&self) -> f64 {
        match self.inner.borrow().frame_times.summary() {
            Some((avg_ms, _, _)) if avg_ms > 0.0 => 1000.0 / avg_ms,
            _ => 0.0,
        }
    }

    pub fn total_frames(&self) -> usize {
        self.inner.borrow().frame_times.values.len()
    }

    pub fn timing_summary(&self, label: &str) -> Option<(f64, f64, f64)> {
        self.inner.borrow().timings.get(label).and_then(Series::summary)
    }

    pub fn metric_summary(&self, label: &str) -> Option<(f64, f64, f64)> {
        self.inner.borrow().metrics.get(label).and_then(Series::summary)
    }

    /// Log toutes les mesures vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        let inner = self.inner.borrow();
        for (label, series) in &inner.timings {
            if let Some((avg, min, max)) = series.summary() {
                info!(
                    target: target,
                    "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                    label, avg, min, max
                );
            }
        }
        for (label, series) in &inner.metrics {
            if let Some((avg, min, max)) = series.summary() {
                info!(target: target, "{label}: avg={avg:.1}, min={min}, max={max}");
            }
        }
    }
}

/// Mesure globale d'une frame
pub struct FrameGuard {
    profiler: Profiler,
    start: Instant,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f64() * 1000.0;
        let mut inner = self.profiler.inner.borrow_mut();
        let max_samples = inner.max_samples;
        inner.frame_times.push(dt, max_samples);
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_window_is_bounded() {
        let profiler = Profiler::new(3);
        for v in [1u32, 2, 3, 4, 5] {
            profiler.record_metric("particles", v);
        }
        assert_eq!(profiler.metric_summary("particles"), Some((4.0, 3.0, 5.0)));
        assert_eq!(profiler.metric_summary("missing"), None);
    }

    #[test]
    fn test_profile_block_returns_value_and_records() {
        let profiler = Profiler::new(10);
        let value = profiler.profile_block("tick", || 40 + 2);
        assert_eq!(value, 42);
        assert!(profiler.timing_summary("tick").is_some());
    }

    #[test]
    fn test_frame_guard_records_frame() {
        let profiler = Profiler::new(10);
        {
            let _guard = profiler.frame();
        }
        assert_eq!(profiler.total_frames(), 1);
        log_metrics_and_fps!(&profiler);
    }
}
