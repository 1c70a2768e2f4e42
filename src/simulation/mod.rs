pub mod states;
pub mod params;
pub mod engine;
pub mod clock;
pub mod trail;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod frames;
pub mod catalog;
pub mod scenario;
