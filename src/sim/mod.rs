//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, no frame-time scaling
//! - Stable iteration order (template order)
//! - No rendering, audio or network dependencies; side effects leave as
//!   [`GameEvent`]s for the host to drain

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod player;
pub mod state;
pub mod tick;
pub mod world;

pub use camera::camera_offset;
pub use collision::{DeathCause, Resolution, resolve};
pub use geometry::{Rect, overlaps};
pub use player::{Physics, Player};
pub use state::{GameEvent, GamePhase, GameState, Viewport};
pub use tick::{TickInput, tick};
pub use world::{Coin, CoinTemplate, LevelData, LevelTemplate};
