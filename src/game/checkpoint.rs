//! Binary checkpoints.
//!
//! A checkpoint captures config, state and RNG position. Restoring it gives
//! an engine that plays on exactly as the original would have.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, GameRngState};
use crate::error::Result;

use super::engine::GameEngine;
use super::state::GameState;

#[derive(Serialize, Deserialize)]
struct Checkpoint {
    config: GameConfig,
    state: GameState,
    rng: GameRngState,
}

impl GameEngine {
    /// Encode the whole game with bincode.
    pub fn checkpoint(&self) -> Result<Vec<u8>> {
        let checkpoint = Checkpoint {
            config: self.config().clone(),
            state: self.state().clone(),
            rng: self.rng().state(),
        };
        Ok(bincode::serialize(&checkpoint)?)
    }

    /// Rebuild an engine from `checkpoint` output.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        checkpoint.config.validate()?;
        Ok(Self::assemble(
            checkpoint.config,
            checkpoint.state,
            GameRng::from_state(&checkpoint.rng),
        ))
    }
}
