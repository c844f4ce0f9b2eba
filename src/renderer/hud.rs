//! Playfield and scoreboard layout

use glam::Vec2;

use super::{Canvas, Font, colors};
use crate::platform::Viewport;
use crate::sim::{Ball, MatchState, Paddle, Player};

/// Entities that put themselves on the canvas
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}

impl Draw for Paddle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.active {
            canvas.draw_sprite(self.sprite.texture, self.pos);
        }
    }
}

impl Draw for Ball {
    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.active {
            canvas.draw_sprite(self.sprite.texture, self.pos);
        }
    }
}

/// Draw one frame: paddles, ball, scores, borders, banners
pub fn draw_match(state: &MatchState, font: &Font, viewport: Viewport, canvas: &mut dyn Canvas) {
    let (w, h) = (viewport.width, viewport.height);

    canvas.clear(colors::BACKGROUND);

    state.paddle1.draw(canvas);
    state.paddle2.draw(canvas);
    state.ball.draw(canvas);

    let score1_pos = Vec2::new((w / 3) as f32, 0.0);
    let score2_pos = Vec2::new((w * 2 / 3 - 15) as f32, 0.0);
    canvas.draw_text(font.id, &state.paddle1.score.to_string(), score1_pos, colors::SCORE);
    canvas.draw_text(font.id, &state.paddle2.score.to_string(), score2_pos, colors::SCORE);

    let border = state.border;
    canvas.draw_sprite(border.texture, Vec2::ZERO);
    canvas.draw_sprite(border.texture, Vec2::new(0.0, (h - border.height) as f32));

    if let Some(winner) = state.winner() {
        let banner = match winner {
            Player::One => "Player1 Wins!",
            Player::Two => "Player2 Wins!",
        };
        let pos = Vec2::new((w / 5) as f32, (h / 2 + font.line_spacing) as f32);
        canvas.draw_text(font.id, banner, pos, colors::WIN_BANNER);
    }

    if !state.started {
        let pos = Vec2::new((w / 4) as f32, (h - font.line_spacing) as f32);
        canvas.draw_text(font.id, "Press Enter", pos, colors::PROMPT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{CommandList, DrawCommand, FontId};
    use crate::settings::Tuning;
    use crate::sim::test_support::{sprites, viewport};
    use crate::sim::TextureId;

    const FONT: Font = Font {
        id: FontId(9),
        line_spacing: 30,
    };

    fn state() -> MatchState {
        MatchState::new(&sprites(), viewport(), Tuning::default())
    }

    #[test]
    fn test_fresh_match_frame() {
        let mut canvas = CommandList::new();
        draw_match(&state(), &FONT, viewport(), &mut canvas);

        let c = &canvas.commands;
        assert_eq!(c[0], DrawCommand::Clear(colors::BACKGROUND));
        assert_eq!(
            c[1],
            DrawCommand::Sprite {
                texture: TextureId(1),
                pos: Vec2::new(16.0, 205.0)
            }
        );
        assert_eq!(
            c[3],
            DrawCommand::Sprite {
                texture: TextureId(2),
                pos: Vec2::new(408.0, 240.0)
            }
        );
        assert_eq!(
            c[4],
            DrawCommand::Text {
                font: FontId(9),
                text: "0".into(),
                pos: Vec2::new(266.0, 0.0),
                color: colors::SCORE
            }
        );
        assert_eq!(
            c[5],
            DrawCommand::Text {
                font: FontId(9),
                text: "0".into(),
                pos: Vec2::new(518.0, 0.0),
                color: colors::SCORE
            }
        );
        assert_eq!(
            c[7],
            DrawCommand::Sprite {
                texture: TextureId(3),
                pos: Vec2::new(0.0, 472.0)
            }
        );
        assert_eq!(
            c[8],
            DrawCommand::Text {
                font: FontId(9),
                text: "Press Enter".into(),
                pos: Vec2::new(200.0, 450.0),
                color: colors::PROMPT
            }
        );
        assert_eq!(c.len(), 9);
    }

    #[test]
    fn test_win_banner_and_no_prompt_while_started() {
        let mut state = state();
        state.paddle2.score = 7;
        state.started = true;

        let mut canvas = CommandList::new();
        draw_match(&state, &FONT, viewport(), &mut canvas);

        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(texts, vec!["0", "7", "Player2 Wins!"]);
        assert!(canvas.commands.contains(&DrawCommand::Text {
            font: FontId(9),
            text: "Player2 Wins!".into(),
            pos: Vec2::new(160.0, 270.0),
            color: colors::WIN_BANNER
        }));
    }

    #[test]
    fn test_inactive_entities_are_skipped() {
        let mut state = state();
        state.ball.active = false;
        state.paddle2.active = false;

        let mut canvas = CommandList::new();
        draw_match(&state, &FONT, viewport(), &mut canvas);

        let sprites = canvas
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count();
        // paddle 1 plus two borders
        assert_eq!(sprites, 3);
    }
}
