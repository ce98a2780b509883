use crate::parallax::Parallax;
use crate::particles::{FieldConfig, ParticleField, Surface};
use glam::Vec2;
use rand::Rng;

/// The particle field together with the parallax that shifts it.
///
/// Resizing reseeds the field only; the smoothed pointer offset carries over.
pub struct Backdrop {
    field: ParticleField,
    parallax: Parallax,
}

impl Backdrop {
    pub fn new(config: FieldConfig, bounds: Vec2, rng: &mut impl Rng) -> Self {
        Self::from_field(ParticleField::new(config, bounds, rng))
    }

    pub fn from_field(field: ParticleField) -> Self {
        Self {
            field,
            parallax: Parallax::default(),
        }
    }

    pub fn resize(&mut self, bounds: Vec2, rng: &mut impl Rng) {
        self.field.reseed(bounds, rng);
    }

    /// Pointer position in client pixels; the viewport is the field's bounds.
    pub fn pointer_moved(&mut self, client: Vec2) {
        self.parallax.observe(client, self.field.bounds());
    }

    /// Draw one frame shifted by the damped parallax. Returns the link count.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> usize {
        let offset = self.parallax.render_offset();
        self.field.frame(surface, offset)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn parallax(&self) -> Parallax {
        self.parallax
    }
}
