use anyhow::ensure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Gravité appliquée à la vitesse verticale des fusées, par tick
    pub gravity: f64,
    /// Vitesse d'ascension initiale (valeur absolue), `vy ∈ [-max, -min)`
    pub rocket_min_speed: f64,
    pub rocket_max_speed: f64,
    /// Dérive horizontale, `vx ∈ [-drift, drift)`
    pub rocket_max_drift: f64,

    pub particle_min_speed: f64,
    pub particle_max_speed: f64,
    pub particle_min_radius: f64,
    pub particle_max_radius: f64,
    pub particle_min_decay: f64,
    pub particle_max_decay: f64,

    /// Taille d'une explosion (bornes incluses)
    pub explosion_min_particles: usize,
    pub explosion_max_particles: usize,

    /// Feux d'artifice "ambiants" (hors fusée), en millisecondes
    pub ambient_interval_ms: u64,
    /// Fraction haute de la surface où apparaissent les explosions ambiantes
    pub ambient_height_ratio: f64,
    pub rocket_interval_ms: u64,
    /// Nombre max de déclenchements rattrapés par un timer lors d'un seul poll
    pub max_catch_up: u32,

    /// Aucun plafond d'entités : au-delà de ce seuil on se contente d'un warning
    pub particles_warning_threshold: usize,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            rocket_min_speed: 7.0,
            rocket_max_speed: 10.0,
            rocket_max_drift: 1.0,
            particle_min_speed: 2.0,
            particle_max_speed: 7.0,
            particle_min_radius: 1.0,
            particle_max_radius: 3.0,
            particle_min_decay: 0.007,
            particle_max_decay: 0.022,
            explosion_min_particles: 50,
            explosion_max_particles: 99,
            ambient_interval_ms: 800,
            ambient_height_ratio: 0.5,
            rocket_interval_ms: 1200,
            max_catch_up: 4,
            particles_warning_threshold: 20_000,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Les tirages aléatoires se font sur des intervalles semi-ouverts `[min, max)` :
    /// un intervalle vide ferait paniquer `random_range`.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.gravity > 0.0, "gravity must be positive ({})", self.gravity);
        ensure!(
            0.0 < self.rocket_min_speed && self.rocket_min_speed < self.rocket_max_speed,
            "invalid rocket speed range [{}, {})",
            self.rocket_min_speed,
            self.rocket_max_speed
        );
        ensure!(
            self.rocket_max_drift > 0.0,
            "rocket_max_drift must be positive ({})",
            self.rocket_max_drift
        );
        ensure!(
            self.particle_min_speed < self.particle_max_speed,
            "invalid particle speed range [{}, {})",
            self.particle_min_speed,
            self.particle_max_speed
        );
        ensure!(
            0.0 < self.particle_min_radius && self.particle_min_radius < self.particle_max_radius,
            "invalid particle radius range [{}, {})",
            self.particle_min_radius,
            self.particle_max_radius
        );
        ensure!(
            0.0 < self.particle_min_decay && self.particle_min_decay < self.particle_max_decay,
            "invalid particle decay range [{}, {})",
            self.particle_min_decay,
            self.particle_max_decay
        );
        ensure!(
            self.explosion_min_particles <= self.explosion_max_particles,
            "invalid explosion size range [{}, {}]",
            self.explosion_min_particles,
            self.explosion_max_particles
        );
        ensure!(
            self.ambient_interval_ms > 0 && self.rocket_interval_ms > 0,
            "spawn intervals must be non-zero"
        );
        ensure!(
            (0.0..=1.0).contains(&self.ambient_height_ratio),
            "ambient_height_ratio must be in [0, 1] ({})",
            self.ambient_height_ratio
        );
        Ok(())
    }
}
