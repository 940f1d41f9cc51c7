//! RGBA color value and the standard palette

use serde::{Deserialize, Serialize};

/// Four 8-bit channels, stored in the framebuffer in R, G, B, A order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 4]", into = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const RED: Self = Self::opaque(255, 0, 0);
    pub const LIME: Self = Self::opaque(0, 255, 0);
    pub const BLUE: Self = Self::opaque(0, 0, 255);
    pub const YELLOW: Self = Self::opaque(255, 255, 0);
    pub const CYAN: Self = Self::opaque(0, 255, 255);
    pub const MAGENTA: Self = Self::opaque(255, 0, 255);
    pub const SILVER: Self = Self::opaque(192, 192, 192);
    pub const GRAY: Self = Self::opaque(128, 128, 128);
    pub const MAROON: Self = Self::opaque(128, 0, 0);
    pub const OLIVE: Self = Self::opaque(128, 128, 0);
    pub const GREEN: Self = Self::opaque(0, 128, 0);
    pub const PURPLE: Self = Self::opaque(128, 0, 128);
    pub const TEAL: Self = Self::opaque(0, 128, 128);
    pub const NAVY: Self = Self::opaque(0, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color with full alpha
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Framebuffer byte order
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(color: Rgba) -> Self {
        color.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_is_rgba() {
        let c = Rgba::new(1, 2, 3, 4);
        assert_eq!(c.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(Rgba::from_bytes([1, 2, 3, 4]), c);
    }

    #[test]
    fn test_palette_is_opaque() {
        for c in [Rgba::BLACK, Rgba::WHITE, Rgba::MAROON, Rgba::NAVY] {
            assert_eq!(c.a, 255);
        }
        assert_eq!(Rgba::RED, Rgba::new(255, 0, 0, 255));
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Rgba::TEAL).unwrap();
        assert_eq!(json, "[0,128,128,255]");
        let back: Rgba = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgba::TEAL);
    }
}
