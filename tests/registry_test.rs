use fireworks_canvas::physic_engine::{Movable, Rocket, Vec2};
use fireworks_canvas::renderer_engine::color::BLACK;
use fireworks_canvas::renderer_engine::recording::RecordingSurface;
use fireworks_canvas::renderer_engine::Canvas;
use fireworks_canvas::SpawnCommand;
mod helpers;
use helpers::{fixed_explosion_config, seeded_registry, HEIGHT, WIDTH};

#[test]
fn test_rocket_is_replaced_by_its_explosion() {
    let config = fixed_explosion_config(60);
    let mut registry = seeded_registry(&config);
    let mut surface = RecordingSurface::new(WIDTH, HEIGHT);

    registry.push_rocket(Rocket::with_velocity(
        Vec2::new(400.0, HEIGHT as f64),
        Vec2::new(0.0, -8.0),
        config.gravity,
    ));

    for tick in 1..160 {
        let report = registry.tick(&mut surface);
        assert!(report.detonations.is_empty(), "early detonation at tick {}", tick);
        assert_eq!(registry.rockets_count(), 1);
        assert_eq!(registry.particles_count(), 0);
    }

    let report = registry.tick(&mut surface);
    assert_eq!(report.detonations.len(), 1);
    assert_eq!(registry.rockets_count(), 0);
    assert_eq!(registry.particles_count(), 60);

    // nées pendant ce tick, les particules ont déjà été avancées une fois
    let apex = report.detonations[0];
    for particle in registry.particles() {
        assert_eq!(particle.age(), 1);
        assert_eq!(particle.position(), apex + particle.velocity());
    }
}

#[test]
fn test_every_particle_eventually_expires() {
    let config = fixed_explosion_config(75);
    let mut registry = seeded_registry(&config);
    let mut surface = RecordingSurface::new(WIDTH, HEIGHT);

    assert_eq!(registry.spawn_explosion(Vec2::new(100.0, 100.0)), 75);

    // decay >= 0.007 : extinction en au plus 143 ticks
    let mut expired = 0;
    for _ in 0..143 {
        expired += registry.tick(&mut surface).expired_particles;
    }
    assert_eq!(expired, 75);
    assert_eq!(registry.particles_count(), 0);
}

#[test]
fn test_apply_dispatches_spawn_commands() {
    let config = fixed_explosion_config(50);
    let mut registry = seeded_registry(&config);

    registry.apply(SpawnCommand::Rocket);
    registry.apply(SpawnCommand::Explosion { x: 10.0, y: 20.0 });
    registry.apply(SpawnCommand::AmbientExplosion);

    assert_eq!(registry.rockets_count(), 1);
    assert_eq!(registry.particles_count(), 100);

    let rocket = registry.rockets().next().unwrap();
    assert_eq!(rocket.position().y, HEIGHT as f64);
}

#[test]
fn test_tick_draws_live_entities_on_canvas() {
    let config = fixed_explosion_config(80);
    let mut registry = seeded_registry(&config);
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BLACK);

    registry.spawn_explosion(Vec2::new(400.0, 300.0));
    registry.tick(&mut canvas);

    let lit = canvas.pixels().iter().filter(|&&c| c != BLACK).count();
    assert!(lit > 0, "explosion left no trace on the canvas");
    // loin de l'explosion, rien n'est dessiné
    assert_eq!(canvas.pixel(0, 0), Some(BLACK));
}

#[test]
fn test_clear_releases_everything() {
    let config = fixed_explosion_config(50);
    let mut registry = seeded_registry(&config);
    registry.spawn_rocket();
    registry.spawn_explosion(Vec2::new(1.0, 1.0));

    registry.clear();

    assert_eq!(registry.rockets_count(), 0);
    assert_eq!(registry.particles_count(), 0);
    let report = registry.tick(&mut RecordingSurface::new(WIDTH, HEIGHT));
    assert_eq!(report.particles_alive, 0);
}

#[test]
fn test_spawn_rocket_returns_launch_position() {
    let config = fixed_explosion_config(50);
    let mut registry = seeded_registry(&config);

    let first = registry.spawn_rocket();
    let second = registry.spawn_rocket();

    assert_eq!(first.y, HEIGHT as f64);
    assert_eq!(second.y, HEIGHT as f64);
    let launched: Vec<_> = registry.rockets().map(|r| r.position()).collect();
    assert_eq!(launched, vec![first, second]);
}
