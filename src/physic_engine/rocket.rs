use rand::Rng;

use crate::physic_engine::{
    config::PhysicConfig,
    r#trait::Movable,
    types::{Kinematics, Vec2},
};
use crate::renderer_engine::{color::WHITE, Surface};

/// Rayon de la tête de fusée à l'écran
pub const ROCKET_RADIUS: f64 = 3.0;

/// Représentation d’une fusée en ascension.
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    kinematics: Kinematics,
    gravity: f64,

    /// Vitesse verticale au lancement
    launch_vy: f64,
    /// Nombre de ticks déjà appliqués
    age: u32,
}

impl Rocket {
    /// Fusée lancée depuis le bas de la surface, à une abscisse aléatoire.
    pub fn new(rng: &mut impl Rng, config: &PhysicConfig, width: u32, height: u32) -> Self {
        let x = if width > 0 {
            rng.random_range(0.0..width as f64)
        } else {
            0.0
        };
        let vx = rng.random_range(-config.rocket_max_drift..config.rocket_max_drift);
        let vy = rng.random_range(-config.rocket_max_speed..-config.rocket_min_speed);

        Self::with_velocity(
            Vec2::new(x, height as f64),
            Vec2::new(vx, vy),
            config.gravity,
        )
    }

    /// Construction déterministe.
    pub fn with_velocity(pos: Vec2, vel: Vec2, gravity: f64) -> Self {
        Self {
            kinematics: Kinematics::new(pos, vel),
            gravity,
            launch_vy: vel.y,
            age: 0,
        }
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// La fusée explose dès que sa vitesse verticale devient positive ou nulle.
    pub fn has_detonated(&self) -> bool {
        self.kinematics.vel.y >= 0.0
    }

    /// Dessine la tête de fusée (disque blanc). Jamais appelé après la détonation.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.kinematics.pos, ROCKET_RADIUS, WHITE, 1.0);
    }
}

impl Movable for Rocket {
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
        // vy = vy0 + g * age : le tick de détonation ne dérive pas avec les arrondis
        self.kinematics.vel.y = self.launch_vy + self.gravity * self.age as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rocket_spawns_on_bottom_edge() {
        let config = PhysicConfig::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let r = Rocket::new(&mut rng, &config, 800, 600);
            let (pos, vel) = (r.position(), r.velocity());
            assert_eq!(pos.y, 600.0);
            assert!((0.0..800.0).contains(&pos.x));
            assert!((-1.0..1.0).contains(&vel.x));
            assert!((-10.0..-7.0).contains(&vel.y));
            assert_eq!(r.gravity(), 0.05);
            assert!(!r.has_detonated());
        }
    }

    #[test]
    fn test_zero_width_surface_does_not_panic() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let r = Rocket::new(&mut rng, &PhysicConfig::default(), 0, 0);
        assert_eq!(r.position(), Vec2::ZERO);
    }
}
