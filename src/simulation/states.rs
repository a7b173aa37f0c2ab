//! Core state types for the N-body simulation.
//!
//! Defines the two state-carrying structs:
//! - `Particle` — a point mass with position, velocity, and a display color
//! - `World`    — the particle ensemble plus its gravity settings
//!
//! Vectors are nalgebra `Vector2<f64>`, aliased as `NVec2`.

use nalgebra::Vector2;

use crate::simulation::forces::SoftenedGravity;

pub type NVec2 = Vector2<f64>;

/// Display color `[r, g, b]`. A rendering hint only, no physical meaning.
pub type Rgb = [u8; 3];

pub const WHITE: Rgb = [255, 255, 255];

#[derive(Debug, Clone)]
pub struct Particle {
    pub mass: f64, // physically > 0, not validated
    pub position: NVec2,
    pub velocity: NVec2,
    pub color: Rgb,
}

impl Particle {
    pub fn new(mass: f64, position: NVec2, velocity: NVec2) -> Self {
        Self {
            mass,
            position,
            velocity,
            color: WHITE,
        }
    }

    pub fn with_color(mass: f64, position: NVec2, velocity: NVec2, color: Rgb) -> Self {
        Self {
            mass,
            position,
            velocity,
            color,
        }
    }
}

/// The particle ensemble together with its gravity settings.
///
/// Particles are append-only; insertion order is stable and fixes the
/// floating-point summation order of the force accumulation, so runs with
/// identical inputs are bit-reproducible.
#[derive(Debug, Clone)]
pub struct World {
    pub particles: Vec<Particle>,
    pub gravity: SoftenedGravity,
}

impl World {
    /// Empty world with the default gravity settings.
    pub fn new() -> Self {
        Self::with_gravity(SoftenedGravity::default())
    }

    pub fn with_gravity(gravity: SoftenedGravity) -> Self {
        Self {
            particles: Vec::new(),
            gravity,
        }
    }

    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Absorb `other` into this world.
    ///
    /// Every incoming particle is shifted by `position_offset` and boosted
    /// by `velocity_offset` (added to its velocity, not replacing it), then
    /// appended after the existing particles. The merged ensemble keeps this
    /// world's gravity settings; `other`'s are discarded.
    pub fn merge_with(&mut self, other: World, position_offset: NVec2, velocity_offset: NVec2) {
        for mut particle in other.particles {
            particle.position += position_offset;
            particle.velocity += velocity_offset;
            self.particles.push(particle);
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
