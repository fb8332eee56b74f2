//! Core engine plumbing: configuration and RNG.

pub mod config;
pub mod rng;

pub use config::GameConfig;
pub use rng::{GameRng, GameRngState};
