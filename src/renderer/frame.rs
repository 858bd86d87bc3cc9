//! Read-only view of the simulation for one rendered frame

use crate::sim::{Coin, GameState, Rect, Viewport};

/// Everything a renderer may look at after a tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub viewport: Viewport,
    pub camera_x: f32,
    pub ground_y: f32,
    pub player: Rect,
    pub platforms: &'a [Rect],
    pub hazards: &'a [Rect],
    /// All coins; inactive ones are skipped when drawing
    pub coins: &'a [Coin],
    pub goal: Rect,
    pub score: u32,
    pub level: u32,
    pub level_complete: bool,
    pub game_complete: bool,
}

impl<'a> Frame<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        Self {
            viewport: state.viewport,
            camera_x: state.camera_x,
            ground_y: state.ground_y(),
            player: state.player.rect(),
            platforms: &state.world.platforms,
            hazards: &state.world.hazards,
            coins: &state.world.coins,
            goal: state.template.goal,
            score: state.score,
            level: state.level,
            level_complete: state.level_complete(),
            game_complete: state.game_complete(),
        }
    }

    /// Coins still to be collected
    pub fn active_coins(&self) -> impl Iterator<Item = &'a Coin> + 'a {
        self.coins.iter().filter(|c| c.active)
    }
}
