//! Arena Dash - a bounded-arena dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `app`: Host-facing shell (commands, frame stepping, render snapshot)
//! - `platform`: Browser/native storage abstraction
//! - `highscores`: Persisted best score

pub mod app;
pub mod highscores;
pub mod platform;
pub mod sim;

pub use app::App;
pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Side length of the square arena
    pub const SQUARE_SIZE: f32 = 500.0;
    /// Side length of every entity's square collision box
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Per-tick step distance for the player and every obstacle
    pub const MAX_SPEED: f32 = 3.0;
    /// Points awarded per pickup capture
    pub const PICKUP_SCORE: u32 = 5;

    /// Largest coordinate an entity's top-left corner may take
    pub const ARENA_MAX: f32 = SQUARE_SIZE - PLAYER_SIZE;
}
