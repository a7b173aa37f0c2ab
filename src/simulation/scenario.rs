//! Build fully-initialized simulation worlds from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - the populated `World` (particles at t = 0, gravity settings applied)
//! - the per-frame step size `dt`
//! - the display settings for the viewer
//!
//! The bundle is inserted into Bevy as a `Resource` and consumed by the
//! stepping and rendering systems.
//!
//! All preset builders go through the public `World`/`Particle` API only;
//! randomized ones draw from a ChaCha8 generator seeded from the config, so
//! the same file always yields the same world.

use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use crate::configuration::config::{
    CollisionConfig, DisplayConfig, GalaxyConfig, ParticleConfig, PresetConfig, ScenarioConfig,
    SquareConfig,
};
use crate::simulation::forces::SoftenedGravity;
use crate::simulation::states::{NVec2, Particle, World, WHITE};

/// Bevy resource representing a fully-initialized simulation scenario
#[derive(Resource)]
pub struct Scenario {
    pub world: World,
    pub dt: f64,
    pub display: DisplayConfig,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Self {
        let gravity = SoftenedGravity {
            strength: cfg.world.gravity_strength,
            softening: cfg.world.softening_length,
        };

        let world = match cfg.preset {
            PresetConfig::Bodies { bodies } => build_bodies(&bodies, gravity),
            PresetConfig::Square(square) => build_square(&square, gravity),
            PresetConfig::Galaxy(galaxy) => build_galaxy(&galaxy, gravity),
            PresetConfig::Collision(collision) => build_collision(&collision, gravity),
        };

        Self {
            world,
            dt: cfg.dt,
            display: cfg.display,
        }
    }
}

fn vec2(components: &[f64]) -> NVec2 {
    NVec2::new(components[0], components[1])
}

fn build_bodies(bodies: &[ParticleConfig], gravity: SoftenedGravity) -> World {
    let mut world = World::with_gravity(gravity);
    for body in bodies {
        world.add_particle(Particle::with_color(
            body.m,
            vec2(&body.x),
            vec2(&body.v),
            body.color.unwrap_or(WHITE),
        ));
    }
    world
}

fn build_square(cfg: &SquareConfig, gravity: SoftenedGravity) -> World {
    let mut world = World::with_gravity(gravity);
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);
    let mass = cfg.total_mass / cfg.count as f64;

    for _ in 0..cfg.count {
        let position = NVec2::new(
            (rng.gen::<f64>() * 2.0 - 1.0) * cfg.half_extent,
            (rng.gen::<f64>() * 2.0 - 1.0) * cfg.half_extent,
        );
        world.add_particle(Particle::new(mass, position, NVec2::zeros()));
    }

    world
}

/// Rotating disk around the origin
///
/// Without a central mass the placement radius is `u^2 * radius` for a dense
/// core; with one the disk keeps a small clearance around the center and the
/// heavy point sits at the origin. Circular speeds are seeded only once the
/// full ensemble is in place.
pub fn build_galaxy(cfg: &GalaxyConfig, gravity: SoftenedGravity) -> World {
    let mut world = World::with_gravity(gravity);
    let mut rng = ChaCha8Rng::seed_from_u64(cfg.seed);

    let mass = cfg.disk_mass / cfg.particles as f64;
    for _ in 0..cfg.particles {
        let u = rng.gen::<f64>();
        let distance = match cfg.central_mass {
            Some(_) => u * cfg.radius + 0.02 * cfg.radius,
            None => u * u * cfg.radius,
        };
        let angle = rng.gen::<f64>() * TAU;
        let position = NVec2::new(distance * angle.cos(), distance * angle.sin());
        world.add_particle(Particle::with_color(mass, position, NVec2::zeros(), cfg.color));
    }

    if let Some(central_mass) = cfg.central_mass {
        world.add_particle(Particle::with_color(
            central_mass,
            NVec2::zeros(),
            NVec2::zeros(),
            cfg.color,
        ));
    }

    world.set_circle_speed(NVec2::zeros());

    // The central particle sits on the orbit center itself, where the
    // circular speed is undefined (NaN). It stays at rest instead.
    if cfg.central_mass.is_some() {
        if let Some(central) = world.particles.last_mut() {
            central.velocity = NVec2::zeros();
        }
    }

    world
}

fn build_collision(cfg: &CollisionConfig, gravity: SoftenedGravity) -> World {
    let position_offset = vec2(&cfg.position_offset);
    let velocity_offset = vec2(&cfg.velocity_offset);

    // Each disk is built (and circle-speed seeded) in isolation, then both
    // are shifted onto mirrored trajectories around the origin.
    let mut world = World::with_gravity(gravity);
    world.merge_with(
        build_galaxy(&cfg.first, gravity),
        -position_offset,
        -velocity_offset,
    );
    world.merge_with(
        build_galaxy(&cfg.second, gravity),
        position_offset,
        velocity_offset,
    );
    world
}
