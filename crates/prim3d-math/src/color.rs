use bytemuck::{Pod, Zeroable};

use crate::Vec4;

/// Packed straight-alpha RGBA color, 8 bits per channel.
///
/// Layout: R in the most significant byte, A in the least (`0xRRGGBBAA`).
/// Packing from floats truncates; it does not round.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Pod, Zeroable)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x0000_00ff);
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const RED: Color = Color(0xff00_00ff);
    pub const GREEN: Color = Color(0x00ff_00ff);
    pub const BLUE: Color = Color(0x0000_ffff);
    pub const MAGENTA: Color = Color(0xff00_ffff);
    pub const YELLOW: Color = Color(0xffff_00ff);
    pub const CYAN: Color = Color(0x00ff_ffff);

    #[inline]
    pub const fn from_packed(rgba: u32) -> Self {
        Self(rgba)
    }

    /// Packs normalized `[0, 1]` channels.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(pack(r) << 24 | pack(g) << 16 | pack(b) << 8 | pack(a))
    }

    #[inline]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn r(self) -> f32 {
        unpack(self.0 >> 24)
    }

    #[inline]
    pub fn g(self) -> f32 {
        unpack(self.0 >> 16)
    }

    #[inline]
    pub fn b(self) -> f32 {
        unpack(self.0 >> 8)
    }

    #[inline]
    pub fn a(self) -> f32 {
        unpack(self.0)
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self(self.0 & 0xffff_ff00 | pack(a))
    }
}

impl From<Vec4> for Color {
    #[inline]
    fn from(v: Vec4) -> Self {
        Color::new(v.x, v.y, v.z, v.w)
    }
}

// `as` saturates, so out-of-range input clamps to [0, 255].
#[inline]
fn pack(c: f32) -> u32 {
    (c * 255.0) as u8 as u32
}

#[inline]
fn unpack(byte: u32) -> f32 {
    (byte & 0xff) as f32 / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_match_float_constructor() {
        assert_eq!(Color::rgb(1.0, 0.0, 1.0), Color::MAGENTA);
        assert_eq!(Color::rgb(0.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(Color::new(1.0, 1.0, 1.0, 1.0), Color::WHITE);
    }

    #[test]
    fn channel_order_is_rgba_high_to_low() {
        let c = Color::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(c.packed(), 0xff00_0000);
        let c = Color::new(0.0, 0.0, 0.0, 1.0);
        assert_eq!(c.packed(), 0x0000_00ff);
    }

    #[test]
    fn packing_truncates() {
        // 0.999 * 255 = 254.745 -> 254, not 255.
        assert_eq!(Color::new(0.999, 0.0, 0.0, 0.0).packed() >> 24, 254);
        // 0.5 * 255 = 127.5 -> 127.
        assert_eq!(Color::new(0.0, 0.0, 0.0, 0.5).packed() & 0xff, 127);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::CYAN.with_alpha(0.0);
        assert_eq!(c.packed(), 0x00ff_ff00);
        assert_eq!(c.a(), 0.0);
        assert_eq!(c.g(), 1.0);
    }

    #[test]
    fn vec4_conversion_preserves_exact_bytes() {
        let c = Color::from_packed(0x3366_99cc);
        assert_eq!(Color::from(Vec4::from(c)), c);
    }
}
