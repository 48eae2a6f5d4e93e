use fireworks_canvas::physic_engine::config::PhysicConfig;
use fireworks_canvas::physic_engine::{Movable, Rocket, Vec2};
use fireworks_canvas::renderer_engine::recording::RecordingSurface;
use rand::SeedableRng;

// ==================================
// 1. Lancement
// ==================================

#[test]
fn test_random_launch_respects_config() {
    let config = PhysicConfig::default();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let rocket = Rocket::new(&mut rng, &config, 1920, 1080);
        let pos = rocket.position();
        let vel = rocket.velocity();

        assert!((0.0..1920.0).contains(&pos.x), "x out of surface: {}", pos.x);
        assert_eq!(pos.y, 1080.0, "rocket must start at the bottom edge");
        assert!(
            (-1.0..1.0).contains(&vel.x),
            "horizontal drift out of range: {}",
            vel.x
        );
        assert!(
            (-10.0..-7.0).contains(&vel.y),
            "ascent speed out of range: {}",
            vel.y
        );
        assert_eq!(rocket.age(), 0);
    }
}

// ==================================
// 2. Ascension et détonation
// ==================================

#[test]
fn test_vertical_speed_grows_by_gravity_each_tick() {
    let mut rocket = Rocket::with_velocity(Vec2::new(400.0, 600.0), Vec2::new(0.5, -8.0), 0.05);

    let mut previous = rocket.velocity().y;
    for _ in 0..100 {
        rocket.advance();
        let vy = rocket.velocity().y;
        assert!((vy - previous - 0.05).abs() < 1e-9, "vy {} -> {}", previous, vy);
        assert_eq!(rocket.velocity().x, 0.5, "horizontal speed is constant");
        previous = vy;
    }
}

#[test]
fn test_rocket_detonates_after_160_ticks() {
    let mut rocket = Rocket::with_velocity(Vec2::new(400.0, 800.0), Vec2::new(0.0, -8.0), 0.05);

    let mut ticks = 0;
    while !rocket.has_detonated() {
        rocket.advance();
        ticks += 1;
        assert!(ticks <= 1000, "rocket never detonated");
    }

    assert_eq!(ticks, 160);
    assert_eq!(rocket.age(), 160);
    // apex : 800 - (8 * 160 - 0.05 * (0 + 1 + ... + 159)) = 156
    let y = rocket.position().y;
    assert!((y - 156.0).abs() < 1e-6, "unexpected apex height {}", y);
}

#[test]
fn test_rocket_renders_white_head() {
    let rocket = Rocket::with_velocity(Vec2::new(10.0, 20.0), Vec2::new(0.0, -8.0), 0.05);
    let mut surface = RecordingSurface::new(100, 100);
    rocket.render(&mut surface);
    assert_eq!(surface.circles().count(), 1);
}
