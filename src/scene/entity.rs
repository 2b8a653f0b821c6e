use crate::resources::Material;
use crate::scene::transform::Transform;

/// Capability interface between the oscillator and the host scene.
///
/// The oscillator only reads and writes host state through this trait.
/// Transform access is mandatory; the renderable material is optional and its
/// absence is reported, not fatal.
pub trait EntityHandle {
    /// Human readable identifier used in diagnostics.
    fn label(&self) -> &str {
        "<unnamed>"
    }

    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    /// Material of the primary renderable, if one is attached.
    fn material(&self) -> Option<&Material>;

    fn material_mut(&mut self) -> Option<&mut Material>;
}
