pub use glam::DVec2 as Vec2;

// ------------------------
// Kinematics
// ------------------------
/// Position + vitesse en coordonnées surface (origine en haut à gauche, y vers le bas).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kinematics {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Kinematics {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Un pas d'intégration (pas de temps unitaire, non mis à l'échelle).
    #[inline(always)]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

// ------------------------
// TickReport
// ------------------------
/// Ce qui s'est passé pendant un `Registry::tick`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Positions des fusées qui ont explosé pendant ce tick
    pub detonations: Vec<Vec2>,
    /// Nombre de particules retirées parce qu'éteintes
    pub expired_particles: usize,
    pub rockets_alive: usize,
    pub particles_alive: usize,
}
