//! The softened-gravity force law and the operations derived from it
//!
//! Defines the pairwise force accumulation over the whole ensemble plus
//! circular-orbit velocity seeding, both driven by [`SoftenedGravity`]

use crate::simulation::states::{NVec2, Particle, World};

/// 2D Newtonian gravity with softening
///
/// The softening length enters the magnitude denominator as its square,
/// keeping the force finite when two particles come arbitrarily close.
/// It doubles as the World's per-run configuration (spec'd at world
/// construction rather than poked in afterwards).
///
/// A negative `strength` inverts attraction into repulsion; that is a
/// supported configuration, not an error.
#[derive(Debug, Clone, Copy)]
pub struct SoftenedGravity {
    pub strength: f64,  // gravitational constant G
    pub softening: f64, // softening length
}

impl Default for SoftenedGravity {
    /// Toy-scale defaults: `strength = 0.1`, `softening = 0.1`.
    fn default() -> Self {
        Self {
            strength: 0.1,
            softening: 0.1,
        }
    }
}

impl SoftenedGravity {
    /// Accumulate the total gravitational force on every particle into `out`
    ///
    /// Runs the full O(n^2) double loop: for each particle i, every other
    /// particle j contributes once, in insertion order. No half-pairwise
    /// shortcut is taken, so the summation order (and hence the bit-level
    /// result) depends only on the particle ordering.
    pub fn accumulate(&self, particles: &[Particle], out: &mut [NVec2]) {
        let soft2 = self.softening * self.softening;

        for (i, pi) in particles.iter().enumerate() {
            let mut force = NVec2::zeros();

            for (j, pj) in particles.iter().enumerate() {
                // Self-exclusion by index, not by position: two distinct
                // particles may coincide.
                if i == j {
                    continue;
                }

                // r points from i toward j; i is pulled along +r.
                let r = pj.position - pi.position;
                let distance = r.norm();

                // The softening enters the magnitude denominator only; the
                // direction divides by the raw distance. This asymmetry is
                // the simulated force law, not a standard Plummer kernel.
                // Coincident particles (distance == 0) therefore yield NaN,
                // which propagates (see the crate's NaN policy).
                let magnitude =
                    self.strength * pi.mass * pj.mass / (distance * distance + soft2);
                force += r / distance * magnitude;
            }

            out[i] = force;
        }
    }
}

impl World {
    /// Compute the force on every particle from the current positions
    ///
    /// `result[i]` is the total force on `self.particles[i]`. Positions are
    /// read as one stable snapshot; nothing moves during the pass.
    pub fn calculate_gravity(&self) -> Vec<NVec2> {
        let mut forces = vec![NVec2::zeros(); self.particles.len()];
        self.gravity.accumulate(&self.particles, &mut forces);
        forces
    }

    /// Overwrite every particle's velocity with the tangential speed of a
    /// circular orbit around `center`
    ///
    /// The speed comes from the centripetal balance `v^2 / r = a`, where `a`
    /// is the magnitude of the particle's current gravitational acceleration:
    /// `v = sqrt(a * r)`. The tangent is the inward direction rotated by 90
    /// degrees, so the whole disk rotates with one fixed sense.
    ///
    /// Call this once, after every particle of the disk has been added and
    /// before any `update`; an earlier call would derive speeds from an
    /// incomplete ensemble. A particle sitting exactly on `center` gets a
    /// NaN velocity (`r == 0`).
    pub fn set_circle_speed(&mut self, center: NVec2) {
        let forces = self.calculate_gravity();

        for (particle, force) in self.particles.iter_mut().zip(&forces) {
            let acceleration = force.norm() / particle.mass;
            let radius = (particle.position - center).norm();
            let orbital_speed = (acceleration * radius).sqrt();

            let to_center = (center - particle.position) / radius;
            let tangent = NVec2::new(-to_center.y, to_center.x);
            particle.velocity = tangent * orbital_speed;
        }
    }
}
