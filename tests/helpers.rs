use fireworks_canvas::physic_engine::{config::PhysicConfig, Registry};
use fireworks_canvas::renderer_engine::RendererConfig;
use fireworks_canvas::window_engine::{HeadlessWindowEngine, HostEvent, WindowEngine};
use fireworks_canvas::Simulator;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// Explosions de taille fixe : les comptes d'entités deviennent exacts.
#[allow(dead_code)]
pub fn fixed_explosion_config(particles: usize) -> PhysicConfig {
    PhysicConfig {
        explosion_min_particles: particles,
        explosion_max_particles: particles,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn seeded_registry(config: &PhysicConfig) -> Registry {
    Registry::with_seed(config, WIDTH, HEIGHT, 42)
}

/// Simulateur sans fenêtre, un lot d'événements scripté par frame.
#[allow(dead_code)]
pub fn headless_simulator(
    config: &PhysicConfig,
    events: Vec<Vec<HostEvent>>,
) -> anyhow::Result<Simulator<HeadlessWindowEngine>> {
    let window_engine = HeadlessWindowEngine::init(WIDTH, HEIGHT, "headless")?.with_events(events);
    Ok(Simulator::with_registry(
        window_engine,
        seeded_registry(config),
        RendererConfig::default(),
    ))
}

/// Simulateur dont l'hôte demande la fermeture après `frames` présentations.
#[allow(dead_code)]
pub fn headless_simulator_closing_after(
    config: &PhysicConfig,
    frames: usize,
) -> anyhow::Result<Simulator<HeadlessWindowEngine>> {
    let window_engine = HeadlessWindowEngine::init(WIDTH, HEIGHT, "headless")?.with_close_after(frames);
    Ok(Simulator::with_registry(
        window_engine,
        seeded_registry(config),
        RendererConfig::default(),
    ))
}
