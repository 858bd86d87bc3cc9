//! The player entity and its per-tick integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Physics tuning applied during integration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Vertical velocity assigned on jump (negative is up)
    pub jump_power: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_power: JUMP_POWER,
        }
    }
}

/// The player-controlled rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
}

impl Player {
    /// Player standing on the ground at the spawn point
    pub fn spawned(ground_y: f32) -> Self {
        let mut player = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Vec2::splat(PLAYER_SIZE),
        };
        player.respawn(ground_y);
        player
    }

    /// Move back to the spawn point and stop
    pub fn respawn(&mut self, ground_y: f32) {
        self.pos = Vec2::new(SPAWN_X, ground_y - self.size.y);
        self.vel = Vec2::ZERO;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Y coordinate of the feet
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Feet at or within a small tolerance above the ground line
    pub fn on_ground(&self, ground_y: f32) -> bool {
        self.bottom() >= ground_y - GROUND_TOLERANCE
    }

    /// Feet resting (within tolerance) on top of any platform
    pub fn on_platform(&self, platforms: &[Rect]) -> bool {
        let body = self.rect();
        let feet = self.bottom();
        platforms
            .iter()
            .any(|plat| body.overlaps_x(plat) && (feet - plat.top()).abs() < PLATFORM_TOLERANCE)
    }

    pub fn can_jump(&self, ground_y: f32, platforms: &[Rect]) -> bool {
        self.on_ground(ground_y) || self.on_platform(platforms)
    }

    /// One explicit Euler step
    ///
    /// Left wins over right when both are held. A jump replaces vertical
    /// velocity outright and is only honoured when `can_jump` is true.
    /// Returns true if a jump started this tick.
    pub fn integrate(&mut self, input: &TickInput, physics: &Physics, can_jump: bool) -> bool {
        self.vel.x = if input.left {
            -physics.move_speed
        } else if input.right {
            physics.move_speed
        } else {
            0.0
        };

        let jumped = input.jump && can_jump;
        if jumped {
            self.vel.y = physics.jump_power;
        }

        self.vel.y += physics.gravity;
        self.pos += self.vel;

        jumped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUND: f32 = 360.0;

    fn input(left: bool, right: bool, jump: bool) -> TickInput {
        TickInput { left, right, jump }
    }

    #[test]
    fn test_spawn_is_grounded() {
        let player = Player::spawned(GROUND);
        assert_eq!(player.bottom(), GROUND);
        assert!(player.on_ground(GROUND));
        assert!(player.can_jump(GROUND, &[]));
    }

    #[test]
    fn test_horizontal_velocity_from_input() {
        let physics = Physics::default();
        let mut player = Player::spawned(GROUND);

        player.integrate(&input(false, true, false), &physics, true);
        assert_eq!(player.vel.x, MOVE_SPEED);

        player.integrate(&input(true, false, false), &physics, true);
        assert_eq!(player.vel.x, -MOVE_SPEED);

        player.integrate(&input(false, false, false), &physics, true);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut player = Player::spawned(GROUND);
        player.integrate(&input(true, true, false), &Physics::default(), true);
        assert_eq!(player.vel.x, -MOVE_SPEED);
    }

    #[test]
    fn test_jump_assigns_then_gravity() {
        let mut player = Player::spawned(GROUND);
        let start_y = player.pos.y;
        let jumped = player.integrate(&input(false, false, true), &Physics::default(), true);
        assert!(jumped);
        assert_eq!(player.vel.y, JUMP_POWER + GRAVITY);
        assert_eq!(player.vel.y, -11.5);
        assert_eq!(player.pos.y, start_y - 11.5);
    }

    #[test]
    fn test_jump_ignored_when_airborne() {
        let mut player = Player::spawned(GROUND);
        player.vel.y = 3.0;
        let jumped = player.integrate(&input(false, false, true), &Physics::default(), false);
        assert!(!jumped);
        assert_eq!(player.vel.y, 3.5);
    }

    #[test]
    fn test_on_ground_tolerance() {
        let mut player = Player::spawned(GROUND);
        player.pos.y -= 0.4;
        assert!(player.on_ground(GROUND));
        player.pos.y -= 0.2;
        assert!(!player.on_ground(GROUND));
    }

    #[test]
    fn test_on_platform_tolerance() {
        let plat = Rect::new(100.0, 200.0, 100.0, 15.0);
        let mut player = Player::spawned(GROUND);
        player.pos = Vec2::new(120.0, 200.0 - PLAYER_SIZE + 0.5);
        assert!(player.on_platform(&[plat]));

        player.pos.y = 200.0 - PLAYER_SIZE - 1.5;
        assert!(!player.on_platform(&[plat]));

        // Beside the platform: no horizontal overlap
        player.pos = Vec2::new(200.0, 200.0 - PLAYER_SIZE);
        assert!(!player.on_platform(&[plat]));
    }
}
