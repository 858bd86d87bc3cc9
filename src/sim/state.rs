//! Game state and level/game transitions
//!
//! Everything the simulation mutates lives in [`GameState`]; hosts hold one
//! and pass it to [`tick`](super::tick::tick) once per frame.

use serde::{Deserialize, Serialize};

use super::collision::DeathCause;
use super::player::{Physics, Player};
use super::world::{LevelData, LevelTemplate};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// A level attempt is running
    Playing,
    /// Goal reached; resolved within the same tick into the next level or
    /// game completion
    LevelComplete,
    /// Final level cleared; the simulation is frozen until restart
    GameComplete,
}

/// Something the host should react to (sound, network, logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A jump started
    Jumped,
    /// A coin was picked up; `score` is the new total
    CoinCollected { index: usize, score: u32 },
    /// The level attempt ended and the level was reset
    Died { cause: DeathCause },
    /// Moved on to a new level
    LevelAdvanced { level: u32 },
    /// The last level was cleared; carries the final report fields
    GameCompleted { score: u32, level: u32 },
    /// The whole game was restarted from level 1
    Restarted,
}

/// Visible area of the world
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Mobile canvas: capped, and shrunk to fit the window
    pub fn mobile(window_width: f32, window_height: f32) -> Self {
        Self {
            width: MOBILE_MAX_WIDTH.min(window_width * 0.95),
            height: MOBILE_MAX_HEIGHT.min(window_height * 0.7),
        }
    }

    /// Y coordinate of the ground surface
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_HEIGHT
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub physics: Physics,
    /// Current level (1..=MAX_LEVEL)
    pub level: u32,
    /// Coins collected this game
    pub score: u32,
    pub phase: GamePhase,
    pub player: Player,
    /// Layout of the current level
    pub template: LevelTemplate,
    /// Runtime copy of the current level
    pub world: LevelData,
    /// Horizontal scroll offset
    pub camera_x: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl GameState {
    /// Fresh game at level 1 with score 0
    pub fn new(viewport: Viewport) -> Self {
        let ground_y = viewport.ground_y();
        let template = LevelTemplate::for_level(1, ground_y);
        let world = template.instantiate();

        Self {
            viewport,
            physics: Physics::default(),
            level: 1,
            score: 0,
            phase: GamePhase::Playing,
            player: Player::spawned(ground_y),
            template,
            world,
            camera_x: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn ground_y(&self) -> f32 {
        self.viewport.ground_y()
    }

    pub fn level_complete(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn game_complete(&self) -> bool {
        self.phase == GamePhase::GameComplete
    }

    /// Player is standing on the ground or a platform
    pub fn can_jump(&self) -> bool {
        self.player.can_jump(self.ground_y(), &self.world.platforms)
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start the current level over
    ///
    /// Clears completion flags, respawns the player, recenters the camera
    /// and rebuilds the level from its template. Level and score are kept.
    pub fn reset_level_state(&mut self) {
        let ground_y = self.ground_y();
        self.phase = GamePhase::Playing;
        self.player.respawn(ground_y);
        self.camera_x = 0.0;
        self.template = LevelTemplate::for_level(self.level, ground_y);
        self.world = self.template.instantiate();
    }

    /// Move on after the goal is reached
    ///
    /// Below the last level this starts the next one with the score carried
    /// over. On the last level it completes the game instead.
    pub fn advance_to_next_level(&mut self) {
        if self.level < MAX_LEVEL {
            self.level += 1;
            self.reset_level_state();
            log::info!("Advanced to level {} (score {})", self.level, self.score);
            self.events.push(GameEvent::LevelAdvanced { level: self.level });
        } else {
            self.phase = GamePhase::GameComplete;
            log::info!("Game complete with score {}", self.score);
            self.events.push(GameEvent::GameCompleted {
                score: self.score,
                level: self.level,
            });
        }
    }

    /// Back to level 1 with no score
    pub fn restart_game(&mut self) {
        self.level = 1;
        self.score = 0;
        self.reset_level_state();
        log::info!("Game restarted");
        self.events.push(GameEvent::Restarted);
    }
}
