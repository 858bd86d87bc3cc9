//! Coin Dash - A side-scrolling coin collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level state)
//! - `input`: Merges keyboard/touch/swipe sources into one input intent
//! - `renderer`: Frame snapshot, draw list and canvas painter
//! - `audio`: Sound effects triggered by simulation events
//! - `report`: Final score reporting to the high score backend

pub mod audio;
pub mod highscores;
pub mod input;
pub mod renderer;
pub mod report;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
///
/// Physics values are per tick; the game assumes a fixed display refresh
/// of [`TICK_RATE`](consts::TICK_RATE) and never scales by frame time.
pub mod consts {
    /// Nominal display refresh (one simulation tick per frame)
    pub const TICK_RATE: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 2000.0;
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Default viewport (desktop canvas)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 400.0;
    /// Mobile canvas caps
    pub const MOBILE_MAX_WIDTH: f32 = 400.0;
    pub const MOBILE_MAX_HEIGHT: f32 = 300.0;

    /// Physics (units per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_POWER: f32 = -12.0; // Negative is up
    pub const MOVE_SPEED: f32 = 4.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const SPAWN_X: f32 = 50.0;

    /// Contact tolerances used by the jump check
    pub const GROUND_TOLERANCE: f32 = 0.5;
    pub const PLATFORM_TOLERANCE: f32 = 1.0;

    /// Fall distance below the viewport that counts as death
    pub const VOID_MARGIN: f32 = 200.0;

    /// Levels per game
    pub const MAX_LEVEL: u32 = 10;

    /// Name sent with the final score
    pub const DEFAULT_PLAYER_NAME: &str = "Player1";
}
