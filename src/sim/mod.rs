//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, integer ball speed
//! - No rendering, audio or platform calls (effects go out as `GameEvent`s)

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{Collision, CollisionZones, PaddleZones, detect};
pub use rect::Rect;
pub use state::{
    Ball, BallState, Border, GameEvent, Heading, MatchState, Paddle, Player, Sprite, Sprites,
    TextureId, Zone,
};
pub use tick::{TickInput, tick};
