use crate::physic_engine::Vec2;
use crate::renderer_engine::color::Color;

/// Surface de dessin fournie par l'hôte.
///
/// Coordonnées en pixels, origine en haut à gauche. Les primitives composent
/// en mode "source-over" : `dst = src * a + dst * (1 - a)`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Remplit un rectangle ; l'opacité est portée par `color.w`.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    /// Remplit un disque de rayon `radius` centré en `center`, composé avec l'opacité `alpha`.
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color, alpha: f32);

    /// Voile translucide sur toute la surface (effet de traînée).
    fn fill_with_alpha(&mut self, color: Color) {
        let (w, h) = (self.width() as f64, self.height() as f64);
        self.fill_rect(0.0, 0.0, w, h, color);
    }
}
