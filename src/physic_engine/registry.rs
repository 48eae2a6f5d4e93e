use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{
    config::PhysicConfig,
    explosion::explode,
    particle::Particle,
    r#trait::Movable,
    rocket::Rocket,
    types::{TickReport, Vec2},
};
use crate::renderer_engine::Surface;
use crate::spawn_scheduler::SpawnCommand;

/// Registre de simulation : possède les fusées et les particules vivantes,
/// les avance, les dessine et retire celles qui ont terminé leur cycle de vie.
#[derive(Debug)]
pub struct Registry {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,

    rng: StdRng,
    config: PhysicConfig,
    surface_size: (u32, u32),

    /// Le warning de seuil n'est émis qu'une fois par franchissement
    over_threshold: bool,
}

impl Registry {
    pub fn new(config: &PhysicConfig, width: u32, height: u32) -> Self {
        Self::with_rng(config, width, height, StdRng::from_rng(&mut rand::rng()))
    }

    /// Registre reproductible (tests, benchs).
    pub fn with_seed(config: &PhysicConfig, width: u32, height: u32, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PhysicConfig, width: u32, height: u32, rng: StdRng) -> Self {
        Self {
            rockets: Vec::new(),
            particles: Vec::new(),
            rng,
            config: config.clone(),
            surface_size: (width, height),
            over_threshold: false,
        }
    }

    pub fn config(&self) -> &PhysicConfig {
        &self.config
    }

    /// À appeler quand la surface de l'hôte change de taille.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface_size = (width, height);
    }

    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    pub fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    pub fn particles_count(&self) -> usize {
        self.particles.len()
    }

    pub fn rockets(&self) -> impl Iterator<Item = &Rocket> {
        self.rockets.iter()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn push_rocket(&mut self, rocket: Rocket) {
        self.rockets.push(rocket);
    }

    pub fn push_particles(&mut self, particles: impl IntoIterator<Item = Particle>) {
        self.particles.extend(particles);
    }

    /// Lance une fusée depuis le bas de la surface ; retourne sa position de départ.
    pub fn spawn_rocket(&mut self) -> Vec2 {
        let (w, h) = self.surface_size;
        let rocket = Rocket::new(&mut self.rng, &self.config, w, h);
        let pos = rocket.position();
        self.rockets.push(rocket);
        debug!(
            "🚀 Rocket spawned at ({:.1}, {:.1}), {} in flight",
            pos.x,
            pos.y,
            self.rockets.len()
        );
        pos
    }

    /// Explosion en `pos` ; retourne le nombre de particules créées.
    pub fn spawn_explosion(&mut self, pos: Vec2) -> usize {
        let batch = explode(&mut self.rng, &self.config, pos);
        let count = batch.len();
        debug!(
            "💥 Explosion of {} particles at ({:.1}, {:.1})",
            count, pos.x, pos.y
        );
        self.particles.extend(batch);
        count
    }

    /// Explosion "ambiante" : x sur toute la largeur, y dans la partie haute.
    pub fn spawn_ambient_explosion(&mut self) -> usize {
        let (w, h) = self.surface_size;
        let max_y = h as f64 * self.config.ambient_height_ratio;
        let x = if w > 0 {
            self.rng.random_range(0.0..w as f64)
        } else {
            0.0
        };
        let y = if max_y > 0.0 {
            self.rng.random_range(0.0..max_y)
        } else {
            0.0
        };
        self.spawn_explosion(Vec2::new(x, y))
    }

    pub fn apply(&mut self, command: SpawnCommand) {
        match command {
            SpawnCommand::Rocket => {
                self.spawn_rocket();
            }
            SpawnCommand::Explosion { x, y } => {
                self.spawn_explosion(Vec2::new(x, y));
            }
            SpawnCommand::AmbientExplosion => {
                self.spawn_ambient_explosion();
            }
        }
    }

    /// Un tick de simulation.
    ///
    /// 1. Chaque fusée est avancée une fois ; si elle a explosé elle est retirée
    ///    et son explosion est ajoutée aux particules, sinon elle est dessinée.
    /// 2. Chaque particule (y compris celles nées au pas 1) est avancée une fois ;
    ///    éteinte, elle est retirée dans le même tick, sinon elle est dessinée.
    ///
    /// `retain_mut` visite chaque élément exactement une fois, dans l'ordre,
    /// même quand des éléments sont retirés en cours de route.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickReport {
        let mut report = TickReport::default();
        let Self {
            rockets,
            particles,
            rng,
            config,
            ..
        } = self;

        rockets.retain_mut(|rocket| {
            rocket.advance();
            if rocket.has_detonated() {
                let pos = rocket.position();
                report.detonations.push(pos);
                particles.extend(explode(&mut *rng, config, pos));
                false
            } else {
                rocket.render(surface);
                true
            }
        });

        let before = particles.len();
        particles.retain_mut(|particle| {
            particle.advance();
            if particle.is_expired() {
                false
            } else {
                particle.render(surface);
                true
            }
        });

        report.expired_particles = before - particles.len();
        report.rockets_alive = rockets.len();
        report.particles_alive = particles.len();

        self.check_particles_threshold();
        report
    }

    /// Pas de plafond : la croissance non bornée est un risque accepté, on le signale.
    fn check_particles_threshold(&mut self) {
        let threshold = self.config.particles_warning_threshold;
        let count = self.particles.len();
        if count > threshold && !self.over_threshold {
            warn!(
                "⚠️ {} live particles (warning threshold: {}), frame rate may degrade",
                count, threshold
            );
            self.over_threshold = true;
        } else if count <= threshold / 2 {
            self.over_threshold = false;
        }
    }

    /// Libère toutes les entités (fermeture de la surface).
    pub fn clear(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        debug!("Registry cleared.");
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
impl Registry {
    pub fn is_over_threshold(&self) -> bool {
        self.over_threshold
    }
}
