//! Timing sweeps for the direct-summation engine
//!
//! The force pass is O(n^2) by design; these sweeps make the scaling visible
//! for a range of particle counts. Output is plain println, one line per N.

use std::time::Instant;

use crate::simulation::forces::SoftenedGravity;
use crate::simulation::states::{NVec2, Particle, World};

/// Build a deterministic n-particle world, no rng needed
fn make_world(n: usize) -> World {
    let mut world = World::new();

    for i in 0..n {
        let i_f = i as f64;
        let position = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);
        world.add_particle(Particle::new(1.0, position, NVec2::zeros()));
    }

    world
}

/// Time a single force-accumulation pass for a range of particle counts
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let world = make_world(n);
        let gravity = SoftenedGravity::default();
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.accumulate(&world.particles, &mut out);

        let t0 = Instant::now();
        gravity.accumulate(&world.particles, &mut out);
        let elapsed = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force pass = {elapsed:8.6} s");
    }
}

/// Time full update steps (force pass + integration) per particle count
pub fn bench_update() {
    let ns = [200, 400, 800, 1600, 3200];
    let steps = 5;

    for n in ns {
        let mut world = make_world(n);

        // Warm up
        world.update(1.0 / 60.0);

        let t0 = Instant::now();
        for _ in 0..steps {
            world.update(1.0 / 60.0);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}
