//! Semi-implicit (symplectic) Euler time stepping
//!
//! Velocity is advanced from the current force first, then position is
//! advanced with the already-updated velocity. That ordering is what makes
//! the scheme symplectic (bounded long-run energy drift) and is kept fixed.

use crate::simulation::states::{NVec2, Particle, World};

impl Particle {
    /// Advance this particle by one step under an externally computed force
    ///
    /// `acceleration = force / mass`, then velocity, then position from the
    /// post-update velocity. A non-positive mass silently yields a
    /// degenerate or infinite acceleration; nothing validates it.
    pub fn integrate(&mut self, force: NVec2, dt: f64) {
        let acceleration = force / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

impl World {
    /// Advance the whole ensemble by one step of size `dt`
    ///
    /// All forces are computed once from the positions at the start of the
    /// step, then every particle integrates against its own force. No
    /// particle moves before the force pass is complete and forces are never
    /// recomputed mid-loop, so the step is synchronous rather than a
    /// Gauss–Seidel-style per-particle sweep.
    pub fn update(&mut self, dt: f64) {
        let forces = self.calculate_gravity();

        for (particle, force) in self.particles.iter_mut().zip(&forces) {
            particle.integrate(*force, dt);
        }
    }
}
