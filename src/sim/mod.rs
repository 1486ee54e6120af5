//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per display tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::boxes_overlap;
pub use input::{InputState, Key};
pub use state::{
    Axis, GameEvent, GamePhase, GameState, Obstacle, Pickup, Player, Snapshot, end_of_run_message,
};
pub use tick::tick;
