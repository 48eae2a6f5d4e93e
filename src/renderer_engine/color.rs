use std::fmt;

/// Couleur RGBA (composantes dans [0, 1]), comme dans le reste du moteur.
pub use glam::Vec4 as Color;

pub const WHITE: Color = Color::ONE;
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Teinte HSL partagée par toutes les particules d'une explosion.
///
/// Saturation et luminosité sont fixes (100 %, 50 %) : seule la teinte varie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    hue: u16,
}

impl Hsl {
    pub const SATURATION: f32 = 1.0;
    pub const LIGHTNESS: f32 = 0.5;

    /// `hue` est ramenée dans [0, 360).
    pub fn new(hue: u16) -> Self {
        Self { hue: hue % 360 }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Conversion HSL → RGB (alpha = 1).
    pub fn to_color(&self) -> Color {
        let (s, l) = (Self::SATURATION, Self::LIGHTNESS);
        let h = self.hue as f32 / 60.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Color::new(r + m, g + m, b + m, 1.0)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue,
            (Self::SATURATION * 100.0) as u32,
            (Self::LIGHTNESS * 100.0) as u32
        )
    }
}

/// Convertit une couleur flottante en RGBA8 (pour l'upload texture).
#[inline]
pub fn to_rgba8(color: Color) -> [u8; 4] {
    let c = color.clamp(Color::ZERO, Color::ONE) * 255.0;
    [
        c.x.round() as u8,
        c.y.round() as u8,
        c.z.round() as u8,
        c.w.round() as u8,
    ]
}
