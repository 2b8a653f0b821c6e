use glam::{Vec3, Vec4};

use crate::resources::Color;

/// Values a channel can sweep between.
///
/// Implementations must return `start` exactly at `t = 0` and `end` exactly at
/// `t = 1`.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for Vec4 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start * (1.0 - t) + end * t
    }
}

impl Interpolatable for Color {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}
