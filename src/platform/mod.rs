//! Platform abstraction layer
//!
//! What the core needs from its host each frame:
//! - Frame timing and pause state
//! - Key state for the fixed key set
//! - Viewport size

use serde::{Deserialize, Serialize};

/// The keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Paddle 1 up (W)
    Paddle1Up,
    /// Paddle 1 down (S)
    Paddle1Down,
    /// Paddle 2 up (Up arrow)
    Paddle2Up,
    /// Paddle 2 down (Down arrow)
    Paddle2Down,
    /// Release the ball (Enter)
    Start,
}

impl Key {
    pub const ALL: [Key; 5] = [
        Key::Paddle1Up,
        Key::Paddle1Down,
        Key::Paddle2Up,
        Key::Paddle2Down,
        Key::Start,
    ];

    fn bit(self) -> u8 {
        match self {
            Key::Paddle1Up => 1 << 0,
            Key::Paddle1Down => 1 << 1,
            Key::Paddle2Up => 1 << 2,
            Key::Paddle2Down => 1 << 3,
            Key::Start => 1 << 4,
        }
    }
}

/// Anything that can answer "is this key held right now?"
pub trait KeySource {
    fn is_down(&self, key: Key) -> bool;
}

/// Snapshot of held keys, for hosts that poll into a plain value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressedKeys(u8);

impl PressedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.0 |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.0 &= !key.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Key> for PressedKeys {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), PressedKeys::with)
    }
}

impl KeySource for PressedKeys {
    fn is_down(&self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }
}

/// Per-frame signal from the host loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous frame
    pub elapsed: f32,
    /// False while paused or covered by another screen
    pub active: bool,
}

impl FrameTick {
    pub fn active(elapsed: f32) -> Self {
        Self {
            elapsed,
            active: true,
        }
    }

    pub fn paused(elapsed: f32) -> Self {
        Self {
            elapsed,
            active: false,
        }
    }
}

/// Drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Centre point, using integer halves
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}
