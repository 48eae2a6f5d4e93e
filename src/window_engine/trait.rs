use anyhow::Result;

use crate::renderer_engine::Canvas;

/// Événements de l'hôte utiles à l'animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Nouvelle taille logique de la surface (pixels)
    Resized(u32, u32),
    /// Clic / tap, en coordonnées surface
    PointerDown(f64, f64),
    CloseRequested,
}

/// Hôte de la surface : fenêtre, boucle d'événements et présentation.
///
/// `present` joue le rôle de "request next frame" : l'implémentation fenêtrée
/// est synchronisée sur le rafraîchissement de l'écran (vsync).
pub trait WindowEngine {
    fn init(width: u32, height: u32, title: &str) -> Result<Self>
    where
        Self: Sized;

    fn poll_events(&mut self) -> Vec<HostEvent>;
    fn present(&mut self, canvas: &Canvas);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn get_size(&self) -> (u32, u32);

    /// Libère les ressources de l'hôte.
    fn close(&mut self) {} // Par défaut, fait rien.
}
