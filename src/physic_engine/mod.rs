pub mod r#trait;
pub use r#trait::Movable;

pub mod types;
pub use self::types::{Kinematics, TickReport, Vec2};

pub mod particle;
pub use self::particle::Particle;

pub mod rocket;
pub use self::rocket::Rocket;

pub mod explosion;
pub use self::explosion::explode;

pub mod config;
pub use self::config::PhysicConfig;

pub mod registry;
pub use self::registry::Registry;
