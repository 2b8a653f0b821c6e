use glam::Vec4;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::color::Color;

// ============================================================================
// Material Properties
// ============================================================================

/// A single named material input.
///
/// Only numeric kinds take part in blending. Texture bindings are switched,
/// never interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MaterialProperty {
    Float(f32),
    Color(Color),
    Vector(Vec4),
    Texture(String),
}

impl MaterialProperty {
    /// Blends two properties of the same kind.
    ///
    /// Returns `None` when the kinds differ or the kind cannot be interpolated.
    #[must_use]
    pub fn lerp(&self, end: &Self, t: f32) -> Option<Self> {
        match (self, end) {
            (Self::Float(a), Self::Float(b)) => Some(Self::Float(a * (1.0 - t) + b * t)),
            (Self::Color(a), Self::Color(b)) => Some(Self::Color(a.lerp(*b, t))),
            (Self::Vector(a), Self::Vector(b)) => Some(Self::Vector(*a * (1.0 - t) + *b * t)),
            _ => None,
        }
    }
}

// ============================================================================
// Material
// ============================================================================

/// A named bag of shader inputs, as exposed by the host renderer.
///
/// The base color lives under [`Material::COLOR`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub name: String,
    pub properties: FxHashMap<String, MaterialProperty>,
}

impl Material {
    /// Property key of the base color.
    pub const COLOR: &'static str = "color";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: FxHashMap::default(),
        }
    }

    /// Builder-style property insertion.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: MaterialProperty) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        self.with_property(Self::COLOR, MaterialProperty::Color(color))
    }

    #[must_use]
    pub fn property(&self, key: &str) -> Option<&MaterialProperty> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: MaterialProperty) {
        self.properties.insert(key.into(), value);
    }

    /// Base color, if the material carries one.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self.properties.get(Self::COLOR) {
            Some(MaterialProperty::Color(c)) => Some(*c),
            _ => None,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.set_property(Self::COLOR, MaterialProperty::Color(color));
    }

    #[must_use]
    pub fn float(&self, key: &str) -> Option<f32> {
        match self.properties.get(key) {
            Some(MaterialProperty::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Writes the cross-fade of `from` and `to` into `self`.
    ///
    /// Every property of `from` is written. When `to` has a property of the same
    /// name and kind, the blended value is written instead. Properties that
    /// exist only on `self` or only on `to` are left alone.
    pub fn blend_into(&mut self, from: &Material, to: &Material, t: f32) {
        for (key, start) in &from.properties {
            let value = to
                .properties
                .get(key)
                .and_then(|end| start.lerp(end, t))
                .unwrap_or_else(|| start.clone());

            match self.properties.get_mut(key) {
                Some(slot) => *slot = value,
                None => {
                    self.properties.insert(key.clone(), value);
                }
            }
        }
    }

    /// Returns a new material holding the cross-fade of `from` and `to`.
    ///
    /// The result is named after `from`.
    #[must_use]
    pub fn blend(from: &Material, to: &Material, t: f32) -> Material {
        let mut out = Material::new(from.name.clone());
        out.blend_into(from, to, t);
        out
    }
}
