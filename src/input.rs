//! Input adapter
//!
//! Keyboard keys, on-screen touch buttons and swipe gestures all drive the
//! same three intents. Held sources are tracked separately so releasing a key
//! does not cancel a button that is still pressed; swipes become short
//! pulses that expire on their own.

use crate::consts::TICK_RATE;
use crate::sim::TickInput;

/// Swipe pulse length: 100 ms at the nominal tick rate
pub const SWIPE_PULSE_TICKS: u32 = TICK_RATE / 10;

/// Minimum swipe travel (CSS pixels) along the dominant axis
pub const MIN_SWIPE_DISTANCE: f32 = 30.0;

/// A player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

impl Action {
    const ALL: [Action; 3] = [Action::Left, Action::Right, Action::Jump];

    fn index(self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
            Action::Jump => 2,
        }
    }

    /// Map a DOM `KeyboardEvent` key/code pair to an action
    pub fn from_key(key: &str, code: &str) -> Option<Self> {
        if code == "Space" {
            return Some(Action::Jump);
        }
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "ArrowUp" | "w" | "W" => Some(Action::Jump),
            _ => None,
        }
    }
}

/// True for the restart key
pub fn is_restart_key(key: &str) -> bool {
    matches!(key, "r" | "R")
}

/// A device that can hold actions down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    TouchButton,
}

impl InputSource {
    fn bit(self) -> u8 {
        match self {
            InputSource::Keyboard => 1 << 0,
            InputSource::TouchButton => 1 << 1,
        }
    }
}

/// Swipe gesture classification
pub struct Swipe;

impl Swipe {
    /// Turn a touch start→end delta into an action
    ///
    /// The dominant axis must travel more than [`MIN_SWIPE_DISTANCE`].
    /// Only upward vertical swipes count (as a jump).
    pub fn classify(dx: f32, dy: f32) -> Option<Action> {
        if dx.abs() > dy.abs() && dx.abs() > MIN_SWIPE_DISTANCE {
            return Some(if dx > 0.0 { Action::Right } else { Action::Left });
        }
        if dy.abs() > dx.abs() && dy.abs() > MIN_SWIPE_DISTANCE && dy < 0.0 {
            return Some(Action::Jump);
        }
        None
    }
}

/// Merged input intent from every source
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Per action: bitmask of sources holding it
    held: [u8; 3],
    /// Per action: ticks of pulse remaining
    pulses: [u32; 3],
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, source: InputSource, action: Action) {
        self.held[action.index()] |= source.bit();
    }

    pub fn release(&mut self, source: InputSource, action: Action) {
        self.held[action.index()] &= !source.bit();
    }

    /// Release everything a source holds (e.g. on window blur)
    pub fn release_all(&mut self, source: InputSource) {
        for action in Action::ALL {
            self.release(source, action);
        }
    }

    /// Activate an action for a fixed number of ticks
    pub fn pulse(&mut self, action: Action, ticks: u32) {
        let slot = &mut self.pulses[action.index()];
        *slot = (*slot).max(ticks);
    }

    pub fn is_active(&self, action: Action) -> bool {
        let i = action.index();
        self.held[i] != 0 || self.pulses[i] > 0
    }

    /// Intent for the coming tick
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_active(Action::Left),
            right: self.is_active(Action::Right),
            jump: self.is_active(Action::Jump),
        }
    }

    /// Age pulses by one tick
    pub fn end_tick(&mut self) {
        for slot in &mut self.pulses {
            *slot = slot.saturating_sub(1);
        }
    }
}
