use anyhow::Result;
use log::{info, warn};
use std::path::PathBuf;

use fireworks_canvas::physic_engine::config::PhysicConfig;
use fireworks_canvas::renderer_engine::RendererConfig;
use fireworks_canvas::utils::show_rust_core_dependencies;
use fireworks_canvas::window_engine::{GlfwWindowEngine, WindowEngine};
use fireworks_canvas::Simulator;

const DEFAULT_CONFIG_DIR: &str = "assets/config";

/// Main entry point for the Fireworks animation.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Fireworks...");

    show_rust_core_dependencies();

    // dossier de configuration : argument CLI, sinon celui du dépôt
    let config_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

    let physic_path = config_dir.join("physic.toml");
    let physic_config = PhysicConfig::from_file(&physic_path.to_string_lossy()).unwrap_or_else(|e| {
        warn!("⚠️ {}: {:#}, using default physic config", physic_path.display(), e);
        PhysicConfig::default()
    });
    info!("Physic config loaded:\n{:#?}", physic_config);

    let renderer_path = config_dir.join("renderer.toml");
    let renderer_config =
        RendererConfig::from_file(&renderer_path.to_string_lossy()).unwrap_or_else(|e| {
            warn!("⚠️ {}: {:#}, using default renderer config", renderer_path.display(), e);
            RendererConfig::default()
        });

    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(
        renderer_config.window_width,
        renderer_config.window_height,
        &renderer_config.window_title,
    )?;

    // 2. Init Simulator
    let mut simulator = Simulator::new(window_engine, &physic_config, renderer_config);
    let result = simulator.run();
    simulator.close();

    result
}
