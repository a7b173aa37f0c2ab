pub mod states;
pub mod forces;
pub mod integrator;
pub mod scenario;
