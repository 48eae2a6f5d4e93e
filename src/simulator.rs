use log::{debug, info};
use std::time::{Duration, Instant};

use crate::physic_engine::{config::PhysicConfig, Registry, TickReport};
use crate::renderer_engine::{Canvas, RendererConfig, Surface};
use crate::spawn_scheduler::{SpawnQueue, SpawnScheduler};
use crate::window_engine::{HostEvent, WindowEngine};
use crate::{log_metrics_and_fps, profiler::Profiler};

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Boucle de rendu / mise à jour : un tick par rafraîchissement de l'hôte.
///
/// Un seul état ("running") jusqu'à ce que l'hôte demande la fermeture.
/// Timers, clics et tick s'exécutent sur le même thread, strictement
/// entrelacés : le registre n'a besoin d'aucun verrou.
pub struct Simulator<W>
where
    W: WindowEngine,
{
    window_engine: W,
    canvas: Canvas,
    registry: Registry,
    scheduler: SpawnScheduler,
    queue: SpawnQueue,
    renderer_config: RendererConfig,

    frames: u64,
    last_time: Instant,

    // Loop state
    profiler: Profiler,
    last_log: Instant,
    first_frame: bool,
}

impl<W> Simulator<W>
where
    W: WindowEngine,
{
    pub fn new(window_engine: W, physic_config: &PhysicConfig, renderer_config: RendererConfig) -> Self {
        let (width, height) = window_engine.get_size();
        let registry = Registry::new(physic_config, width, height);
        Self::with_registry(window_engine, registry, renderer_config)
    }

    /// Assemble la boucle autour d'un registre existant (ex: registre seedé).
    pub fn with_registry(window_engine: W, mut registry: Registry, renderer_config: RendererConfig) -> Self {
        let (width, height) = window_engine.get_size();
        registry.set_surface_size(width, height);

        let queue = SpawnQueue::new();
        let scheduler = SpawnScheduler::new(registry.config(), queue.sender());

        Self {
            canvas: Canvas::new(width, height, renderer_config.background_color()),
            window_engine,
            registry,
            scheduler,
            queue,
            renderer_config,
            frames: 0,
            last_time: Instant::now(),
            profiler: Profiler::new(200),
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        info!(
            "🎆 Animation running on a {}x{} surface",
            self.canvas.width(),
            self.canvas.height()
        );
        while self.step() {}
        Ok(())
    }

    /// Une itération, avec le temps mural écoulé depuis la précédente.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_time);
        self.last_time = now;
        self.step_with_elapsed(elapsed)
    }

    /// Une itération de la boucle :
    /// 1. événements hôte (redimensionnement, clic, fermeture) ;
    /// 2. timers de création avec `elapsed`, puis vidage de la file de commandes ;
    /// 3. voile translucide (traînée), tick du registre ;
    /// 4. présentation, qui attend le prochain rafraîchissement.
    ///
    /// Retourne `false` quand l'hôte a demandé la fermeture.
    pub fn step_with_elapsed(&mut self, elapsed: Duration) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        // 🔹 start global frame
        let _frame_guard = self.profiler.frame(); // RAII: mesure totale de la frame

        for event in self.window_engine.poll_events() {
            self.handle_event(event);
        }
        if self.window_engine.should_close() {
            return false;
        }

        self.scheduler.poll(elapsed);
        for command in self.queue.drain() {
            self.registry.apply(command);
        }

        let report = self.profiler.profile_block("physic - tick", || {
            self.canvas
                .fill_with_alpha(self.renderer_config.trail_color());
            self.registry.tick(&mut self.canvas)
        });
        self.record_tick(&report);

        self.profiler.profile_block("present", || {
            self.window_engine.present(&self.canvas);
        });
        self.frames += 1;

        if self.last_log.elapsed() >= LOG_INTERVAL {
            log_metrics_and_fps!(&self.profiler);
            info!(
                "Frame {}: {} rockets, {} particles",
                self.frames,
                self.registry.rockets_count(),
                self.registry.particles_count()
            );
            self.last_log = Instant::now();
        }

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        true
    }

    fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::Resized(w, h) => {
                info!("🖥️ Surface resized: {} x {}", w, h);
                self.canvas.resize(w, h);
                self.registry.set_surface_size(w, h);
            }
            HostEvent::PointerDown(x, y) => {
                self.scheduler.pointer_down(x, y);
            }
            HostEvent::CloseRequested => {
                self.window_engine.set_should_close(true);
            }
        }
    }

    fn record_tick(&self, report: &TickReport) {
        for pos in &report.detonations {
            debug!("💥 Rocket detonated at ({:.1}, {:.1})", pos.x, pos.y);
        }
        self.profiler
            .record_metric("rockets alive", report.rockets_alive as f64);
        self.profiler
            .record_metric("particles alive", report.particles_alive as f64);
    }

    /// Fermeture : timers et file de commandes abandonnés, entités libérées.
    pub fn close(&mut self) {
        let dropped = self.queue.drain().count();
        if dropped > 0 {
            debug!("{} pending spawn commands dropped on close", dropped);
        }
        self.registry.clear();
        self.window_engine.close();
        info!("Simulator closed after {} frames.", self.frames);
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }
}
