pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, Particle, Rgb, World, WHITE};
pub use simulation::forces::SoftenedGravity;
pub use simulation::scenario::{build_galaxy, Scenario};

pub use configuration::config::{
    CollisionConfig, DisplayConfig, GalaxyConfig, ParticleConfig, PresetConfig, ScenarioConfig,
    SquareConfig, WorldConfig,
};

pub use visualization::viewer::run as run_viewer;

pub use benchmark::benchmark::{bench_gravity, bench_update};
