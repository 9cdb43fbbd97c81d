//! Core engine types: seats, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, PolicyKind, RefillOrder, RegistryConfig, DEFAULT_HAND_SIZE};
pub use player::{Seat, SeatMap};
pub use rng::{GameRng, GameRngState};
