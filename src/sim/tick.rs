//! Per-tick simulation step
//!
//! Advances one display tick: player first, then every obstacle, then the
//! collision checks against the post-update positions. Runs only while the
//! phase is `Running`.

use glam::Vec2;

use super::collision::boxes_overlap;
use super::input::InputState;
use super::state::{GameEvent, GamePhase, GameState, Obstacle, Pickup};
use crate::consts::*;

/// Advance the simulation by one tick.
///
/// Within the tick: player update, obstacle update, lethal obstacle check,
/// pickup check. Returns the events the host shell reacts to (persistence,
/// HUD).
pub fn tick(state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    step_player(state, input);
    step_obstacles(state);

    // Lethal check before the pickup check: a tick that would both capture
    // and collide is a death.
    let player_pos = state.player.pos;
    if state
        .obstacles
        .iter()
        .any(|o| boxes_overlap(player_pos, o.pos, PLAYER_SIZE))
    {
        state.phase = GamePhase::GameOver;
        let new_high_score = state.score > state.high_score;
        if new_high_score {
            state.high_score = state.score;
        }
        log::info!(
            "run over at score {} (best {})",
            state.score,
            state.high_score
        );
        events.push(GameEvent::GameOver {
            score: state.score,
            new_high_score,
        });
        return events;
    }

    if boxes_overlap(player_pos, state.pickup.pos, PLAYER_SIZE) {
        capture_pickup(state, &mut events);
    }

    events
}

/// Derive direction and speed from the held keys, integrate, clamp both
/// axes to the arena (hard wall, no bounce for the player).
fn step_player(state: &mut GameState, input: &InputState) {
    let player = &mut state.player;
    player.dir = input.direction();
    player.speed = if input.any_held() { MAX_SPEED } else { 0.0 };
    player.pos =
        (player.pos + player.dir * player.speed).clamp(Vec2::ZERO, Vec2::splat(ARENA_MAX));
}

/// Advance each obstacle along its fixed axis, reversing at the arena walls.
///
/// The position is not clamped on a bounce; the reversed sign walks the
/// obstacle back inside on the following ticks.
fn step_obstacles(state: &mut GameState) {
    for obstacle in &mut state.obstacles {
        obstacle.pos += obstacle.direction() * MAX_SPEED;
        if !(0.0..=ARENA_MAX).contains(&obstacle.moving_coord()) {
            obstacle.sign = -obstacle.sign;
        }
    }
}

/// Progression policy: award points, relocate the pickup, grow the field by
/// one freshly randomized obstacle.
fn capture_pickup(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += PICKUP_SCORE;
    state.pickup = Pickup::spawn(&mut state.rng);
    let obstacle = Obstacle::spawn(&mut state.rng);
    state.obstacles.push(obstacle);
    log::debug!(
        "pickup captured: score {}, {} obstacles",
        state.score,
        state.obstacles.len()
    );
    events.push(GameEvent::PickupCollected { score: state.score });
    events.push(GameEvent::ObstacleSpawned);
}
