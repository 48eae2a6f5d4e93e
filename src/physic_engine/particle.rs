use rand::Rng;

use crate::physic_engine::{
    config::PhysicConfig,
    r#trait::Movable,
    types::{Kinematics, Vec2},
};
use crate::renderer_engine::{color::Hsl, Surface};

/// Étincelle d'explosion : couleur fixe, opacité qui décroît à chaque tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    kinematics: Kinematics,
    color: Hsl,
    radius: f64,
    decay: f64,
    alpha: f64,
    /// Nombre de ticks déjà appliqués
    age: u32,
}

impl Particle {
    /// Particule aléatoire (rayon, vitesse, angle et décroissance tirés selon `config`).
    pub fn new(rng: &mut impl Rng, config: &PhysicConfig, pos: Vec2, color: Hsl) -> Self {
        let radius = rng.random_range(config.particle_min_radius..config.particle_max_radius);
        let speed = rng.random_range(config.particle_min_speed..config.particle_max_speed);
        let angle = rng.random_range(0.0..std::f64::consts::TAU);
        let decay = rng.random_range(config.particle_min_decay..config.particle_max_decay);

        Self::with_params(pos, Vec2::from_angle(angle) * speed, radius, decay, color)
    }

    /// Construction déterministe.
    pub fn with_params(pos: Vec2, vel: Vec2, radius: f64, decay: f64, color: Hsl) -> Self {
        Self {
            kinematics: Kinematics::new(pos, vel),
            color,
            radius,
            decay,
            alpha: 1.0,
            age: 0,
        }
    }

    pub fn color(&self) -> Hsl {
        self.color
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Dessine la particule avec l'opacité courante. Ne modifie pas son état.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(
            self.kinematics.pos,
            self.radius,
            self.color.to_color(),
            self.alpha.clamp(0.0, 1.0) as f32,
        );
    }
}

impl Movable for Particle {
    fn position(&self) -> Vec2 {
        self.kinematics.pos
    }

    fn velocity(&self) -> Vec2 {
        self.kinematics.vel
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.kinematics.integrate();
        self.age += 1;
        // alpha = 1 - decay * age : pas d'erreur d'arrondi cumulée sur la date d'extinction
        self.alpha = 1.0 - self.decay * self.age as f64;
    }
}
