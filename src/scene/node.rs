use crate::resources::Material;
use crate::scene::entity::EntityHandle;
use crate::scene::transform::Transform;

/// The drawable part of a node: one material slot.
#[derive(Debug, Clone, Default)]
pub struct Renderable {
    pub material: Material,
}

impl Renderable {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self { material }
    }
}

/// A minimal scene node.
///
/// This is the reference [`EntityHandle`] implementation shipped with the crate:
/// a transform plus an optional renderable. Hosts with their own scene storage
/// implement [`EntityHandle`] directly instead.
#[derive(Debug, Clone)]
pub struct Node {
    /// Name used in diagnostics
    pub name: String,
    pub transform: Transform,
    /// Primary renderable (None for empty/grouping nodes)
    pub renderable: Option<Renderable>,
}

impl Node {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
            renderable: None,
        }
    }

    /// Creates a node with a renderable using `material`.
    #[must_use]
    pub fn with_material(name: impl Into<String>, material: Material) -> Self {
        Self {
            renderable: Some(Renderable::new(material)),
            ..Self::new(name)
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("node")
    }
}

impl EntityHandle for Node {
    fn label(&self) -> &str {
        &self.name
    }

    #[inline]
    fn transform(&self) -> &Transform {
        &self.transform
    }

    #[inline]
    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn material(&self) -> Option<&Material> {
        self.renderable.as_ref().map(|r| &r.material)
    }

    fn material_mut(&mut self) -> Option<&mut Material> {
        self.renderable.as_mut().map(|r| &mut r.material)
    }
}
