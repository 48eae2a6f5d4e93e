use rand::Rng;

use crate::physic_engine::{config::PhysicConfig, particle::Particle, types::Vec2};
use crate::renderer_engine::color::Hsl;

/// Teinte tirée uniformément dans [0, 360).
pub fn random_color(rng: &mut impl Rng) -> Hsl {
    Hsl::new(rng.random_range(0..360))
}

/// Taille d'une explosion, tirée uniformément dans les bornes (incluses) de `config`.
pub fn random_count(rng: &mut impl Rng, config: &PhysicConfig) -> usize {
    rng.random_range(config.explosion_min_particles..=config.explosion_max_particles)
}

/// Explosion : un lot de particules partageant une couleur, à cinématique indépendante.
pub fn explode(rng: &mut impl Rng, config: &PhysicConfig, pos: Vec2) -> Vec<Particle> {
    let count = random_count(rng, config);
    let color = random_color(rng);
    explode_with(rng, config, pos, count, color)
}

/// Variante déterministe (taille et couleur imposées).
pub fn explode_with(
    rng: &mut impl Rng,
    config: &PhysicConfig,
    pos: Vec2,
    count: usize,
    color: Hsl,
) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle::new(rng, config, pos, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::Movable;
    use rand::SeedableRng;

    #[test]
    fn test_batch_size_within_bounds_and_single_color() {
        let config = PhysicConfig::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let batch = explode(&mut rng, &config, Vec2::new(5.0, 5.0));
            assert!((50..=99).contains(&batch.len()));
            let color = batch[0].color();
            assert!(batch.iter().all(|p| p.color() == color));
            assert!(color.hue() < 360);
        }
    }

    #[test]
    fn test_explode_with_fixed_count() {
        let config = PhysicConfig::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let batch = explode_with(&mut rng, &config, Vec2::new(100.0, 100.0), 75, Hsl::new(200));
        assert_eq!(batch.len(), 75);
        assert!(batch
            .iter()
            .all(|p| p.position() == Vec2::new(100.0, 100.0)));
    }
}
