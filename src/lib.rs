//! Amazing Pong - two-player paddle game core
//!
//! Core modules:
//! - `sim`: Ball state machine, collision zones, match state
//! - `game`: Frame orchestrator driven by the host loop
//! - `renderer`: Draw pass over a host-provided canvas
//! - `audio`: Sound effect dispatch to a host backend
//! - `platform`: Host input, frame and viewport types
//! - `settings`: Audio preferences and gameplay tuning

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::{FixedStep, Game};
pub use settings::{Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per host frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest wall-clock delta accepted in one frame (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball speed on both axes after every serve (pixels per tick)
    pub const STARTING_SPEED: i32 = 7;
    /// Paddle movement per tick while a key is held
    pub const PADDLE_SPEED: f32 = 9.0;
    /// Points needed to win the match
    pub const WIN_SCORE: u32 = 7;
    /// Every Nth paddle hit speeds the ball up by one
    pub const SPEED_UP_INTERVAL: u32 = 5;

    /// First placement of the ball is this far right of centre
    pub const BALL_START_OFFSET_X: i32 = 8;
    /// Paddle zones are cut in sevenths: 3 top, 1 mid, 3 bottom
    pub const ZONE_DIVISIONS: i32 = 7;
}
