//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here. The loop is the sole
//! writer; hosts only read through [`GameState::snapshot`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first Play action
    NotStarted,
    /// Frame loop active
    Running,
    /// Run ended by an obstacle hit; terminal until Restart
    GameOver,
}

/// Movement axis for an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The controllable avatar
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub pos: Vec2,
    /// Unit direction, or zero when no key is held
    pub dir: Vec2,
    /// 0 or `MAX_SPEED`; binary, never accelerated
    pub speed: f32,
}

impl Player {
    /// Player starts centered with no motion
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::splat(SQUARE_SIZE / 2.0),
            dir: Vec2::ZERO,
            speed: 0.0,
        }
    }
}

/// The scoring pickup
#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub pos: Vec2,
}

impl Pickup {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            pos: random_pos(rng),
        }
    }
}

/// A moving obstacle.
///
/// Obstacles travel along a single axis chosen 50/50 at spawn time. Only the
/// sign ever changes afterwards, when the obstacle bounces off an arena wall.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub pos: Vec2,
    pub axis: Axis,
    /// +1 or -1 along `axis`
    pub sign: f32,
}

impl Obstacle {
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let axis = if rng.random_bool(0.5) {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        Self {
            pos: random_pos(rng),
            axis,
            sign: 1.0,
        }
    }

    /// Full direction vector; exactly one component is non-zero
    pub fn direction(&self) -> Vec2 {
        match self.axis {
            Axis::Horizontal => Vec2::new(self.sign, 0.0),
            Axis::Vertical => Vec2::new(0.0, self.sign),
        }
    }

    /// Coordinate on the moving axis
    pub fn moving_coord(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.pos.x,
            Axis::Vertical => self.pos.y,
        }
    }
}

/// Uniform random spawn position within the arena bounds
fn random_pos(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..ARENA_MAX),
        rng.random_range(0.0..ARENA_MAX),
    )
}

/// Events produced by a single tick, for the host shell to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player reached the pickup; score already includes the award
    PickupCollected { score: u32 },
    /// Progression appended one new obstacle
    ObstacleSpawned,
    /// Player hit an obstacle; the run is over
    GameOver { score: u32, new_high_score: bool },
}

/// Complete simulation state.
///
/// Single-writer: only the frame loop mutates this between snapshots.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub pickup: Pickup,
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Best score across runs; updated at the GameOver transition
    pub high_score: u32,
}

impl GameState {
    /// Create state in `NotStarted` with the given seed and stored best.
    ///
    /// Entities are placed immediately so a snapshot is valid before the
    /// first Play action.
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pickup = Pickup::spawn(&mut rng);
        let obstacle = Obstacle::spawn(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::NotStarted,
            player: Player::spawn(),
            pickup,
            obstacles: vec![obstacle],
            score: 0,
            high_score,
        }
    }

    /// Reinitialize the run and enter `Running`.
    ///
    /// Shared by Play and Restart: player centered, pickup re-rolled,
    /// obstacle list reset to one, score zeroed. The high score carries over.
    pub fn start_run(&mut self) {
        self.player = Player::spawn();
        self.pickup = Pickup::spawn(&mut self.rng);
        self.obstacles.clear();
        let obstacle = Obstacle::spawn(&mut self.rng);
        self.obstacles.push(obstacle);
        self.score = 0;
        self.phase = GamePhase::Running;
    }

    /// Per-frame view handed across the render boundary
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: self.player.pos,
            pickup: self.pickup.pos,
            obstacles: self.obstacles.iter().map(|o| o.pos).collect(),
            score: self.score,
            high_score: self.high_score,
            message: (self.phase == GamePhase::GameOver)
                .then(|| end_of_run_message(self.score)),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: Vec2,
    pub pickup: Vec2,
    /// Obstacle positions in spawn order
    pub obstacles: Vec<Vec2>,
    pub score: u32,
    pub high_score: u32,
    /// End-of-run tier message, present only in `GameOver`
    pub message: Option<&'static str>,
}

/// Score threshold for the second message tier
const TIER_TWO: u32 = 50;
/// Score threshold for the third message tier
const TIER_THREE: u32 = 100;

/// End-of-run flavor message, fixed thresholds on the final score
pub fn end_of_run_message(score: u32) -> &'static str {
    if score < TIER_TWO {
        "Squashed! Better luck next time."
    } else if score < TIER_THREE {
        "Not bad at all!"
    } else {
        "Untouchable! The arena bows to you."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_started() {
        let state = GameState::new(7, 40);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 40);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn start_run_resets_entities() {
        let mut state = GameState::new(7, 40);
        state.start_run();
        state.score = 25;
        state.obstacles.push(Obstacle {
            pos: Vec2::new(1.0, 1.0),
            axis: Axis::Horizontal,
            sign: -1.0,
        });

        state.start_run();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.player.pos, Vec2::splat(SQUARE_SIZE / 2.0));
        assert_eq!(state.player.dir, Vec2::ZERO);
        assert_eq!(state.high_score, 40);
    }

    #[test]
    fn spawns_are_deterministic_for_a_seed() {
        let a = GameState::new(1234, 0);
        let b = GameState::new(1234, 0);
        assert_eq!(a.pickup.pos, b.pickup.pos);
        assert_eq!(a.obstacles[0].pos, b.obstacles[0].pos);
        assert_eq!(a.obstacles[0].axis, b.obstacles[0].axis);
    }

    #[test]
    fn spawns_stay_within_bounds() {
        let mut rng = rand_pcg::Pcg32::seed_from_u64(99);
        for _ in 0..500 {
            let pos = random_pos(&mut rng);
            assert!((0.0..crate::consts::ARENA_MAX).contains(&pos.x));
            assert!((0.0..crate::consts::ARENA_MAX).contains(&pos.y));
        }
    }

    #[test]
    fn message_tiers_use_fixed_thresholds() {
        assert_eq!(end_of_run_message(0), end_of_run_message(49));
        assert_ne!(end_of_run_message(49), end_of_run_message(50));
        assert_eq!(end_of_run_message(50), end_of_run_message(99));
        assert_ne!(end_of_run_message(99), end_of_run_message(100));
        assert_eq!(end_of_run_message(100), end_of_run_message(5000));
    }

    #[test]
    fn snapshot_message_only_in_game_over() {
        let mut state = GameState::new(3, 0);
        assert!(state.snapshot().message.is_none());
        state.start_run();
        assert!(state.snapshot().message.is_none());
        state.phase = GamePhase::GameOver;
        assert_eq!(
            state.snapshot().message,
            Some(end_of_run_message(state.score))
        );
    }
}
