//! Particle field simulation for the animated background.
//!
//! The field owns a fixed population of drifting points and, once per frame,
//! advances them, reflects them off the surface edges and emits draw calls
//! for each point plus a fading link between every pair closer than
//! [`FieldConfig::link_distance`]. Drawing goes through the [`Surface`] trait
//! so the same loop drives a canvas in the browser and a recorder in tests.

use crate::constants::{
    DEFAULT_PARTICLE_COUNT, LINK_DISTANCE, MAX_PARTICLE_COUNT, MAX_SPEED, PARTICLE_RADIUS,
};
use glam::Vec2;
use rand::Rng;

/// Draw primitives the field needs, in pixel space.
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    fn fill_disc(&mut self, center: Vec2, radius: f32);
    /// `alpha` is in (0, 1]; 1 means the endpoints coincide.
    fn stroke_link(&mut self, from: Vec2, to: Vec2, alpha: f32);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub link_distance: f32,
    pub max_speed: f32,
    pub radius: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            max_speed: MAX_SPEED,
            radius: PARTICLE_RADIUS,
        }
    }
}

impl FieldConfig {
    /// Override the population, clamped to [`MAX_PARTICLE_COUNT`].
    pub fn with_count(mut self, count: usize) -> Self {
        if count > MAX_PARTICLE_COUNT {
            log::warn!(
                "[background] particle count {} clamped to {}",
                count,
                MAX_PARTICLE_COUNT
            );
        }
        self.count = count.min(MAX_PARTICLE_COUNT);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    pub fn random(bounds: Vec2, max_speed: f32, rng: &mut impl Rng) -> Self {
        // gen::<f32>() is [0, 1), so a zero-area surface puts everything at the origin
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
            (rng.gen::<f32>() - 0.5) * 2.0 * max_speed,
        );
        Self { pos, vel }
    }

    /// Advance one frame and reflect velocity on any axis that left `[0, bounds]`.
    #[inline]
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Link opacity for two points `distance` apart, or `None` when too far to link.
#[inline]
pub fn link_alpha(distance: f32, link_distance: f32) -> Option<f32> {
    (distance < link_distance).then(|| 1.0 - distance / link_distance)
}

pub struct ParticleField {
    config: FieldConfig,
    bounds: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            config,
            bounds: Vec2::ZERO,
            particles: Vec::with_capacity(config.count),
        };
        field.reseed(bounds, rng);
        field
    }

    /// Build a field from explicit particles; bounds are taken as given.
    pub fn from_particles(config: FieldConfig, bounds: Vec2, particles: Vec<Particle>) -> Self {
        Self {
            config,
            bounds,
            particles,
        }
    }

    /// Replace the whole population with fresh random particles inside `bounds`.
    pub fn reseed(&mut self, bounds: Vec2, rng: &mut impl Rng) {
        self.bounds = bounds.max(Vec2::ZERO);
        self.particles.clear();
        let (b, speed) = (self.bounds, self.config.max_speed);
        self.particles
            .extend((0..self.config.count).map(|_| Particle::random(b, speed, rng)));
        log::debug!(
            "[background] reseeded {} particles in {:.0}x{:.0}",
            self.particles.len(),
            self.bounds.x,
            self.bounds.y
        );
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle and draw the frame, shifted by `offset`.
    ///
    /// Particles are processed in index order: particle `i` is moved and drawn,
    /// then linked against every `j > i` at that point in the pass (so `j` still
    /// holds its previous-frame position). Returns the number of links drawn.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, offset: Vec2) -> usize {
        let bounds = self.bounds;
        let FieldConfig {
            link_distance,
            radius,
            ..
        } = self.config;
        surface.clear(bounds);

        let mut links = 0;
        for i in 0..self.particles.len() {
            self.particles[i].step(bounds);
            let p = self.particles[i].pos;
            surface.fill_disc(p + offset, radius);

            for other in &self.particles[i + 1..] {
                if let Some(alpha) = link_alpha(p.distance(other.pos), link_distance) {
                    surface.stroke_link(p + offset, other.pos + offset, alpha);
                    links += 1;
                }
            }
        }
        links
    }
}
