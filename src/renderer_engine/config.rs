use serde::{Deserialize, Serialize};

use crate::renderer_engine::color::Color;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Opacité du voile noir appliqué à chaque frame (effet de traînée)
    pub trail_alpha: f32,
    /// Couleur de fond RGB du canvas au démarrage / après redimensionnement
    pub background: [f32; 3],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 800,
            window_title: "Fireworks".to_string(),
            trail_alpha: 0.1,
            background: [0.0, 0.0, 0.0],
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn trail_color(&self) -> Color {
        Color::new(0.0, 0.0, 0.0, self.trail_alpha.clamp(0.0, 1.0))
    }

    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::new(r, g, b, 1.0)
    }
}
