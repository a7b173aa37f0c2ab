//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`WorldConfig`]    – gravity settings for the whole run
//! - [`DisplayConfig`]  – camera zoom and drawn particle size
//! - [`PresetConfig`]   – how the initial particle set is generated
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An explicit two-body scenario matching these types:
//!
//! ```yaml
//! world:
//!   gravity_strength: 0.1   # gravitational constant G
//!   softening_length: 0.1   # keeps close-encounter forces finite
//!
//! dt: 0.0166666667          # simulated time per frame
//!
//! display:
//!   zoom: 0.0               # log2 offset on the pixels-per-unit scale
//!   particle_size: 0.05     # drawn radius, world units
//!
//! preset:
//!   kind: bodies
//!   bodies:
//!     - m: 2.0
//!       x: [-1.0, 0.0]
//!       v: [0.0, 0.1]
//!     - m: 1.0
//!       x: [1.0, 0.0]
//!       v: [0.0, -0.1]
//! ```
//!
//! Generated presets (`square`, `galaxy`, `collision`) carry an explicit
//! `seed`, so re-loading the same file reproduces the same world bit for bit.

use serde::Deserialize;

fn default_strength() -> f64 {
    0.1
}

fn default_softening() -> f64 {
    0.1
}

fn default_particle_size() -> f64 {
    0.05
}

/// Gravity settings applied to the whole world
#[derive(Deserialize, Debug, Clone)]
pub struct WorldConfig {
    #[serde(default = "default_strength")]
    pub gravity_strength: f64, // gravitational constant G
    #[serde(default = "default_softening")]
    pub softening_length: f64, // softening length
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_strength: default_strength(),
            softening_length: default_softening(),
        }
    }
}

/// Viewer settings; astronomical scenarios need very different length scales
#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    #[serde(default)]
    pub zoom: f64, // log2 offset on the pixels-per-world-unit scale
    #[serde(default = "default_particle_size")]
    pub particle_size: f64, // drawn particle radius in world units
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom: 0.0,
            particle_size: default_particle_size(),
        }
    }
}

/// Initial state for a single explicitly-listed particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub m: f64,                 // mass
    pub x: Vec<f64>,            // initial position [x, y]
    pub v: Vec<f64>,            // initial velocity [x, y]
    pub color: Option<[u8; 3]>, // display color, white when omitted
}

/// Equal-mass particles at rest, uniformly placed in a centered square
#[derive(Deserialize, Debug, Clone)]
pub struct SquareConfig {
    pub count: u32,      // number of particles
    pub half_extent: f64, // square spans [-half_extent, half_extent] on both axes
    pub total_mass: f64, // shared equally across the particles
    pub seed: u64,       // placement seed
}

/// A rotating disk around the origin
#[derive(Deserialize, Debug, Clone)]
pub struct GalaxyConfig {
    pub particles: u32,           // disk members
    pub radius: f64,              // disk radius
    pub disk_mass: f64,           // shared equally across the disk members
    pub central_mass: Option<f64>, // optional heavy point at the origin
    pub color: [u8; 3],           // display color for the whole disk
    pub seed: u64,                // placement seed
}

/// Two galaxies on a collision course, mirrored around the origin
#[derive(Deserialize, Debug, Clone)]
pub struct CollisionConfig {
    pub first: GalaxyConfig,      // placed at -position_offset
    pub second: GalaxyConfig,     // placed at +position_offset
    pub position_offset: Vec<f64>, // [x, y]
    pub velocity_offset: Vec<f64>, // [x, y], boost given to the second galaxy
}

/// How the initial particle set is generated
/// Selected by the `kind` tag in YAML
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind")]
pub enum PresetConfig {
    #[serde(rename = "bodies")] // explicit particle list (two-body test, solar system)
    Bodies { bodies: Vec<ParticleConfig> },

    #[serde(rename = "square")] // random square of particles at rest
    Square(SquareConfig),

    #[serde(rename = "galaxy")] // single rotating disk
    Galaxy(GalaxyConfig),

    #[serde(rename = "collision")] // two disks merged with opposite offsets
    Collision(CollisionConfig),
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub world: WorldConfig, // gravity settings
    pub dt: f64, // simulated time advanced per frame
    #[serde(default)]
    pub display: DisplayConfig, // viewer settings
    pub preset: PresetConfig, // initial particle set
}
