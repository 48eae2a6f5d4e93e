use log::debug;

use crate::physic_engine::Vec2;
use crate::renderer_engine::color::{to_rgba8, Color};
use crate::renderer_engine::r#trait::Surface;

/// Framebuffer CPU implémentant `Surface`.
///
/// Les pixels sont stockés en flottants (pas de quantification lors des
/// voiles successifs de l'effet de traînée) et convertis en RGBA8 au moment
/// de la présentation.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            pixels: vec![background; (width as usize) * (height as usize)],
        }
    }

    /// Redimensionne la surface ; le contenu est effacé avec la couleur de fond.
    pub fn resize(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        debug!(
            "Canvas resized: {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), self.background);
    }

    pub fn clear(&mut self) {
        self.pixels.fill(self.background);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[self.index(x, y)])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Écrit les pixels en RGBA8 dans `out` (réutilisé d'une frame à l'autre).
    pub fn write_rgba8(&self, out: &mut Vec<[u8; 4]>) {
        out.clear();
        out.extend(self.pixels.iter().map(|&c| to_rgba8(c)));
    }

    pub fn to_rgba8(&self) -> Vec<[u8; 4]> {
        let mut out = Vec::with_capacity(self.pixels.len());
        self.write_rgba8(&mut out);
        out
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline(always)]
    fn blend(&mut self, x: u32, y: u32, color: Color, alpha: f32) {
        let idx = self.index(x, y);
        let dst = self.pixels[idx];
        let rgb = color.truncate() * alpha + dst.truncate() * (1.0 - alpha);
        let a = alpha + dst.w * (1.0 - alpha);
        self.pixels[idx] = rgb.extend(a);
    }

    /// Pixels dont le centre tombe dans `[lo, hi)`, bornés à `[0, max)`.
    #[inline(always)]
    fn covered_span(lo: f64, hi: f64, max: u32) -> (u32, u32) {
        let first = (lo - 0.5).ceil().clamp(0.0, max as f64) as u32;
        let last = (hi - 0.5).ceil().clamp(0.0, max as f64) as u32;
        (first, last)
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        let alpha = color.w.clamp(0.0, 1.0);
        if alpha <= 0.0 || w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x0, x1) = Self::covered_span(x, x + w, self.width);
        let (y0, y1) = Self::covered_span(y, y + h, self.height);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color, alpha);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0) * color.w.clamp(0.0, 1.0);
        if alpha <= 0.0 || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let (x0, x1) = Self::covered_span(center.x - radius, center.x + radius, self.width);
        let (y0, y1) = Self::covered_span(center.y - radius, center.y + radius, self.height);
        for py in y0..y1 {
            let dy = py as f64 + 0.5 - center.y;
            for px in x0..x1 {
                let dx = px as f64 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    self.blend(px, py, color, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer_engine::color::{BLACK, WHITE};

    #[test]
    fn test_circle_is_clipped_to_bounds() {
        let mut canvas = Canvas::new(8, 8, BLACK);
        canvas.fill_circle(Vec2::new(0.0, 0.0), 3.0, WHITE, 1.0);
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(7, 7), Some(BLACK));
    }

    #[test]
    fn test_trail_fill_blends_towards_black() {
        let mut canvas = Canvas::new(4, 4, WHITE);
        canvas.fill_with_alpha(Color::new(0.0, 0.0, 0.0, 0.1));
        let p = canvas.pixel(2, 2).unwrap();
        assert!((p.x - 0.9).abs() < 1e-6);
        assert!((p.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_alpha_draws_nothing() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.fill_circle(Vec2::new(2.0, 2.0), 2.0, WHITE, 0.0);
        assert!(canvas.pixels().iter().all(|&p| p == BLACK));
    }

    #[test]
    fn test_resize_resets_pixels() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.fill_rect(0.0, 0.0, 4.0, 4.0, WHITE);
        canvas.resize(6, 2);
        assert_eq!(canvas.pixels().len(), 12);
        assert_eq!(canvas.pixel(5, 1), Some(BLACK));
        assert_eq!(canvas.pixel(6, 1), None);
    }
}
