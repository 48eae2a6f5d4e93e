use log::{debug, warn};
use std::time::Duration;

use crate::physic_engine::config::PhysicConfig;
use crate::spawn_scheduler::{
    command::{SpawnCommand, SpawnSender},
    interval::IntervalTimer,
};

/// Déclencheurs de création : deux timers périodiques (explosions ambiantes,
/// fusées) et le clic pointeur. Ils ne font que pousser des commandes.
#[derive(Debug)]
pub struct SpawnScheduler {
    ambient_timer: IntervalTimer,
    rocket_timer: IntervalTimer,
    sender: SpawnSender,
}

impl SpawnScheduler {
    pub fn new(config: &PhysicConfig, sender: SpawnSender) -> Self {
        Self {
            ambient_timer: IntervalTimer::from_millis(config.ambient_interval_ms, config.max_catch_up),
            rocket_timer: IntervalTimer::from_millis(config.rocket_interval_ms, config.max_catch_up),
            sender,
        }
    }

    /// Avance les deux timers de `elapsed` ; retourne le nombre de commandes émises.
    pub fn poll(&mut self, elapsed: Duration) -> usize {
        let ambient = self.ambient_timer.poll(elapsed);
        let rockets = self.rocket_timer.poll(elapsed);

        for _ in 0..ambient {
            self.emit(SpawnCommand::AmbientExplosion);
        }
        for _ in 0..rockets {
            self.emit(SpawnCommand::Rocket);
        }
        (ambient + rockets) as usize
    }

    /// Clic / tap : explosion centrée sur `(x, y)` en coordonnées surface.
    pub fn pointer_down(&self, x: f64, y: f64) {
        debug!("🖱️ Pointer down at ({:.1}, {:.1})", x, y);
        self.emit(SpawnCommand::Explosion { x, y });
    }

    fn emit(&self, command: SpawnCommand) {
        if self.sender.send(command).is_err() {
            warn!("Spawn queue closed, dropping {:?}", command);
        }
    }
}
