use serde::Serialize;

/// An sRGB color with a straight (non-premultiplied) unit-interval alpha.
///
/// Scene literals are written the way the artwork specifies them: 8-bit
/// channels for hex colors, an explicit opacity for `rgba(...)`-style
/// values. Construction is the validation; there is no parse step that can
/// fail at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Lowercase hex form of the color channels, alpha excluded (`#0d1117`).
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_alpha_free() {
        assert_eq!(Color::rgb(0x0D, 0x11, 0x17).hex(), "#0d1117");
        assert_eq!(Color::rgba(255, 255, 255, 0.03).hex(), "#ffffff");
    }

    #[test]
    fn opacity_is_carried_separately() {
        assert!(Color::rgb(0, 0, 0).is_opaque());
        assert!(!Color::rgba(25, 25, 30, 0.6).is_opaque());
    }
}
