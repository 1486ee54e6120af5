//! Host-facing shell
//!
//! Owns the simulation state, the held-key map and the persistence store,
//! and exposes exactly the command surface a UI needs: Play, Restart, key
//! events, one `frame()` per display tick and a render snapshot.

use crate::highscores::HighScore;
use crate::platform::KeyValueStore;
use crate::sim::{GameEvent, GamePhase, GameState, InputState, Key, Snapshot, tick};

pub struct App {
    state: GameState,
    input: InputState,
    high_score: HighScore,
    store: Box<dyn KeyValueStore>,
}

impl App {
    /// Build the shell: load the persisted best score, seed the run RNG
    pub fn new(seed: u64, store: Box<dyn KeyValueStore>) -> Self {
        let high_score = HighScore::load(store.as_ref());
        let state = GameState::new(seed, high_score.best());
        log::info!(
            "initialized with seed {seed}, stored best {}",
            high_score.best()
        );
        Self {
            state,
            input: InputState::new(),
            high_score,
            store,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Start the first run. Valid only from `NotStarted`; otherwise a no-op.
    ///
    /// Returns true only when the command actually entered `Running`, so the
    /// scheduler arms exactly one frame loop per transition.
    pub fn play(&mut self) -> bool {
        if self.state.phase != GamePhase::NotStarted {
            log::debug!("play ignored in {:?}", self.state.phase);
            return false;
        }
        self.state.start_run();
        log::info!("run started");
        true
    }

    /// Start a fresh run after a game over. Valid only from `GameOver`.
    ///
    /// Returns true only when the command actually entered `Running`.
    pub fn restart(&mut self) -> bool {
        if self.state.phase != GamePhase::GameOver {
            log::debug!("restart ignored in {:?}", self.state.phase);
            return false;
        }
        self.state.start_run();
        log::info!("run restarted");
        true
    }

    /// Key pressed; identifiers that are not directional keys are ignored
    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.input.key_down(key);
        }
    }

    /// Key released
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.input.key_up(key);
        }
    }

    /// Release every held key (listener teardown, window blur)
    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Run one simulation tick if a run is active.
    ///
    /// Persists the high score the moment a run ends with a new best. The
    /// returned phase tells the scheduler whether to arm the next tick.
    pub fn frame(&mut self) -> GamePhase {
        for event in tick(&mut self.state, &self.input) {
            if let GameEvent::GameOver {
                score,
                new_high_score: true,
            } = event
            {
                self.high_score.record(score, self.store.as_mut());
            }
        }
        self.state.phase
    }

    /// Per-frame view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    #[cfg(test)]
    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
