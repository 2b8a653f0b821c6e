use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Linear RGBA color with `f32` components.
///
/// Components are not clamped: over-bright values are valid HDR input and the
/// oscillator never validates endpoints.
///
/// The default is opaque black, the same alpha a deserialized color gets when
/// `a` is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "Color::default_alpha")]
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Component-wise linear interpolation, exact at `t = 0` and `t = 1`.
    #[must_use]
    pub fn lerp(self, end: Self, t: f32) -> Self {
        Self::from(Vec4::from(self) * (1.0 - t) + Vec4::from(end) * t)
    }

    #[inline]
    #[must_use]
    pub fn rgb_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    fn default_alpha() -> f32 {
        1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
