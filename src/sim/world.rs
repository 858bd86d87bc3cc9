//! Level templates and per-attempt level instances
//!
//! Templates are immutable descriptions of a layout. Every level (re)start
//! instantiates a fresh [`LevelData`] from them, which is the only place
//! runtime state (collected coins) lives.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Height of every platform slab
const PLATFORM_THICKNESS: f32 = 15.0;
/// Spike strip dimensions
const HAZARD_WIDTH: f32 = 40.0;
const HAZARD_HEIGHT: f32 = 20.0;
/// Coin edge length
const COIN_SIZE: f32 = 14.0;
/// Goal flag dimensions and distance from the world's right edge
const GOAL_WIDTH: f32 = 30.0;
const GOAL_HEIGHT: f32 = 80.0;
const GOAL_INSET: f32 = 80.0;

/// Platform layout: (x, top, width)
const PLATFORM_LAYOUT: [(f32, f32, f32); 9] = [
    (140.0, 220.0, 120.0),
    (320.0, 190.0, 120.0),
    (550.0, 210.0, 100.0),
    (720.0, 170.0, 110.0),
    (900.0, 200.0, 130.0),
    (1150.0, 190.0, 100.0),
    (1350.0, 160.0, 100.0),
    (1550.0, 210.0, 120.0),
    (1750.0, 180.0, 120.0),
];

/// Hazard x positions; all hazards sit on the ground line
const HAZARD_LAYOUT: [f32; 4] = [260.0, 630.0, 980.0, 1500.0];

/// Coin centers
const COIN_LAYOUT: [(f32, f32); 6] = [
    (220.0, 180.0),
    (360.0, 150.0),
    (720.0, 130.0),
    (950.0, 160.0),
    (1320.0, 130.0),
    (1720.0, 140.0),
];

/// A coin as described by a template (center + edge length)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinTemplate {
    pub center: Vec2,
    pub size: f32,
}

/// A coin in a running level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub center: Vec2,
    pub size: f32,
    /// True until collected during this level attempt
    pub active: bool,
}

impl Coin {
    /// Collision box: a square centered on the coin
    pub fn rect(&self) -> Rect {
        Rect::centered_square(self.center, self.size)
    }
}

/// Static description of one level layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTemplate {
    pub platforms: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub coins: Vec<CoinTemplate>,
    pub goal: Rect,
}

impl LevelTemplate {
    /// The built-in layout, anchored to the given ground line
    pub fn standard(ground_y: f32) -> Self {
        let platforms = PLATFORM_LAYOUT
            .iter()
            .map(|&(x, y, w)| Rect::new(x, y, w, PLATFORM_THICKNESS))
            .collect();

        let hazards = HAZARD_LAYOUT
            .iter()
            .map(|&x| Rect::new(x, ground_y - HAZARD_HEIGHT, HAZARD_WIDTH, HAZARD_HEIGHT))
            .collect();

        let coins = COIN_LAYOUT
            .iter()
            .map(|&(x, y)| CoinTemplate {
                center: Vec2::new(x, y),
                size: COIN_SIZE,
            })
            .collect();

        let goal = Rect::new(
            WORLD_WIDTH - GOAL_INSET,
            ground_y - GOAL_HEIGHT,
            GOAL_WIDTH,
            GOAL_HEIGHT,
        );

        Self {
            platforms,
            hazards,
            coins,
            goal,
        }
    }

    /// Template for a given level number (1-based)
    ///
    /// Every level currently shares the standard layout.
    pub fn for_level(_level: u32, ground_y: f32) -> Self {
        Self::standard(ground_y)
    }

    /// Build a fresh runtime instance with every coin active
    pub fn instantiate(&self) -> LevelData {
        LevelData {
            platforms: self.platforms.clone(),
            hazards: self.hazards.clone(),
            coins: self
                .coins
                .iter()
                .map(|c| Coin {
                    center: c.center,
                    size: c.size,
                    active: true,
                })
                .collect(),
        }
    }
}

/// Mutable per-attempt copy of a level's contents
///
/// The goal is not part of this: it never changes and is read straight from
/// the template.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelData {
    pub platforms: Vec<Rect>,
    pub hazards: Vec<Rect>,
    pub coins: Vec<Coin>,
}

impl LevelData {
    /// Number of coins not yet collected
    pub fn active_coins(&self) -> usize {
        self.coins.iter().filter(|c| c.active).count()
    }
}
