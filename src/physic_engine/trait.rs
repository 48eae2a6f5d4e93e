use crate::physic_engine::types::Vec2;

/// 🔧 Trait `Movable`
///
/// Comportement de mouvement partagé par les fusées et les particules :
/// une position, une vitesse et un pas d'intégration par tick.
/// Chaque entité concrète compose une `Kinematics` et y ajoute ses propres
/// champs (décroissance + alpha pour `Particle`, gravité pour `Rocket`).
pub trait Movable {
    fn position(&self) -> Vec2;

    fn velocity(&self) -> Vec2;

    /// Avance l'entité d'un tick.
    fn advance(&mut self);
}
