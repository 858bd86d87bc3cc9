//! Per-frame simulation tick
//!
//! One call advances the game by exactly one display frame: integrate,
//! resolve collisions, apply transitions, then follow with the camera.

use serde::{Deserialize, Serialize};

use super::camera::camera_offset;
use super::collision::{Resolution, resolve};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input intent for a single tick
///
/// Sources write it between ticks; the simulation only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the game state by one tick
///
/// A no-op once the game is complete; only `restart_game` leaves that state.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameComplete {
        return;
    }

    state.time_ticks += 1;

    let previous_y = state.player.pos.y;
    let can_jump = state.can_jump();
    if state.player.integrate(input, &state.physics, can_jump) {
        state.events.push(GameEvent::Jumped);
    }

    let ground_y = state.ground_y();
    let resolution = resolve(
        &mut state.player,
        previous_y,
        &mut state.world,
        &state.template.goal,
        ground_y,
        state.viewport.height,
    );

    match resolution {
        Resolution::Died(cause) => {
            log::debug!("Died ({:?}) on level {}", cause, state.level);
            state.events.push(GameEvent::Died { cause });
            state.reset_level_state();
            return;
        }
        Resolution::Alive {
            coins,
            reached_goal,
        } => {
            for index in coins {
                state.score += 1;
                state.events.push(GameEvent::CoinCollected {
                    index,
                    score: state.score,
                });
            }

            if reached_goal {
                state.phase = GamePhase::LevelComplete;
                state.advance_to_next_level();
            }
        }
    }

    state.camera_x = camera_offset(state.player.pos.x, state.viewport.width, WORLD_WIDTH);
}
