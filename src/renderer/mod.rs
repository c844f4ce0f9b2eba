//! Draw pass
//!
//! The host owns the GPU and the sprite batch. This module only decides what
//! goes where, through the [`Canvas`] trait.

pub mod hud;

pub use hud::{Draw, draw_match};

use glam::Vec2;

use crate::sim::TextureId;

/// RGBA color, 0.0 - 1.0 per channel
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const SPRITE_TINT: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SCORE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const WIN_BANNER: Color = [0.855, 0.439, 0.839, 1.0]; // Orchid
    pub const PROMPT: Color = [0.0, 1.0, 1.0, 1.0]; // Aqua
}

/// Opaque handle to a host font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontId(pub u32);

/// A loaded sprite font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub id: FontId,
    /// Vertical distance between lines of text, in pixels
    pub line_spacing: i32,
}

/// Primitive draw calls the host provides
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_sprite(&mut self, texture: TextureId, pos: Vec2);
    fn draw_text(&mut self, font: FontId, text: &str, pos: Vec2, color: Color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Sprite { texture: TextureId, pos: Vec2 },
    Text {
        font: FontId,
        text: String,
        pos: Vec2,
        color: Color,
    },
}

/// Canvas that records calls, for hosts that submit a batch per frame
#[derive(Debug, Clone, Default)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// All text drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for CommandList {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_sprite(&mut self, texture: TextureId, pos: Vec2) {
        self.commands.push(DrawCommand::Sprite { texture, pos });
    }

    fn draw_text(&mut self, font: FontId, text: &str, pos: Vec2, color: Color) {
        self.commands.push(DrawCommand::Text {
            font,
            text: text.to_string(),
            pos,
            color,
        });
    }
}
