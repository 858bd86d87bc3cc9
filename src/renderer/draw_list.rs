//! Screen-space draw list built from a [`Frame`]

use bytemuck::{Pod, Zeroable};

use super::frame::Frame;
use crate::consts::{GROUND_HEIGHT, MAX_LEVEL, WORLD_WIDTH};
use crate::sim::Rect;

/// Controls line shown at the top of the screen
pub const CONTROLS_HINT: &str = "Arrows / A-D: Move | Space / W / Up: Jump";
/// Banner shown once the last level is cleared
pub const GAME_COMPLETE_BANNER: &str = "Game Complete! Press R to Play Again";

/// A filled rectangle in screen space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Quad {
    /// x, y, width, height
    pub rect: [f32; 4],
    pub color: [f32; 4],
}

impl Quad {
    pub const fn new(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            rect: [x, y, width, height],
            color,
        }
    }

    /// World rectangle shifted by the camera
    fn world(rect: &Rect, camera_x: f32, color: [f32; 4]) -> Self {
        Self::new(rect.x - camera_x, rect.y, rect.width, rect.height, color)
    }
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size_px: u32,
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.125, 0.125, 0.125, 1.0]; // #202020
    pub const GROUND: [f32; 4] = [0.267, 0.267, 0.267, 1.0]; // #444
    pub const PLATFORM: [f32; 4] = [0.533, 0.533, 0.533, 1.0]; // #888
    pub const HAZARD: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const COIN: [f32; 4] = [1.0, 0.843, 0.0, 1.0]; // gold
    pub const GOAL: [f32; 4] = [0.565, 0.933, 0.565, 1.0]; // lightgreen
    pub const PLAYER: [f32; 4] = [1.0, 0.647, 0.0, 1.0]; // orange
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// CSS `rgba()` string for canvas fill styles
    pub fn css(color: [f32; 4]) -> String {
        let [r, g, b, a] = color;
        format!(
            "rgba({}, {}, {}, {})",
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            a
        )
    }
}

/// Everything to paint for one frame, in paint order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub quads: Vec<Quad>,
    pub text: Vec<HudText>,
}

impl DrawList {
    pub fn build(frame: &Frame, show_controls_hint: bool) -> Self {
        let cam = frame.camera_x;
        let mut quads = Vec::with_capacity(
            4 + frame.platforms.len() + frame.hazards.len() + frame.coins.len(),
        );

        quads.push(Quad::new(
            0.0,
            0.0,
            frame.viewport.width,
            frame.viewport.height,
            colors::BACKGROUND,
        ));
        quads.push(Quad::new(
            -cam,
            frame.ground_y,
            WORLD_WIDTH,
            GROUND_HEIGHT,
            colors::GROUND,
        ));
        quads.extend(
            frame
                .platforms
                .iter()
                .map(|p| Quad::world(p, cam, colors::PLATFORM)),
        );
        quads.extend(
            frame
                .hazards
                .iter()
                .map(|h| Quad::world(h, cam, colors::HAZARD)),
        );
        quads.extend(
            frame
                .active_coins()
                .map(|c| Quad::world(&c.rect(), cam, colors::COIN)),
        );
        quads.push(Quad::world(&frame.goal, cam, colors::GOAL));
        quads.push(Quad::world(&frame.player, cam, colors::PLAYER));

        let mut text = Vec::new();
        let line = |text: String, y: f32| HudText {
            text,
            x: 10.0,
            y,
            size_px: 16,
        };
        if show_controls_hint {
            text.push(line(CONTROLS_HINT.to_string(), 20.0));
        }
        text.push(line(format!("Score: {}", frame.score), 40.0));
        text.push(line(format!("Level: {} / {}", frame.level, MAX_LEVEL), 60.0));
        if frame.game_complete {
            text.push(HudText {
                text: GAME_COMPLETE_BANNER.to_string(),
                x: 20.0,
                y: 100.0,
                size_px: 24,
            });
        }

        Self { quads, text }
    }

    /// Raw quad data, ready for a GPU instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }
}
