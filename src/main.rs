//! Amazing Pong entry point
//!
//! Native builds run a headless demo match between two scripted players,
//! driving the same frame loop a graphical host would.
//!
//! Usage: `amazing-pong [settings.json]`

use amazing_pong::consts::SIM_DT;
use amazing_pong::platform::{FrameTick, Key, PressedKeys, Viewport};
use amazing_pong::renderer::{CommandList, Font, FontId};
use amazing_pong::sim::{GameEvent, MatchState, Player, Sprite, Sprites, TextureId};
use amazing_pong::{FixedStep, Game, Settings};

/// Give up on a rally-only match after ten minutes of play
const MAX_TICKS: u64 = 60 * 60 * 10;
/// Player 2 ignores the ball until it is this close
const PLAYER2_REACTION_PX: f32 = 260.0;

/// Scripted keyboard: both paddles chase the ball, player 2 lazily
fn autopilot(state: &MatchState) -> PressedKeys {
    let mut keys = PressedKeys::new();
    if !state.started {
        keys.press(Key::Start);
    }

    let ball_y = state.ball.pos.y + state.ball.height() as f32 / 2.0;
    let dead_zone = state.tuning.paddle_speed;

    let chase = |paddle_center: f32, up: Key, down: Key, keys: &mut PressedKeys| {
        if ball_y < paddle_center - dead_zone {
            keys.press(up);
        } else if ball_y > paddle_center + dead_zone {
            keys.press(down);
        }
    };

    let p1 = &state.paddle1;
    chase(
        p1.pos.y + p1.height() as f32 / 2.0,
        Key::Paddle1Up,
        Key::Paddle1Down,
        &mut keys,
    );

    let p2 = &state.paddle2;
    if p2.pos.x - state.ball.pos.x < PLAYER2_REACTION_PX {
        chase(
            p2.pos.y + p2.height() as f32 / 2.0,
            Key::Paddle2Up,
            Key::Paddle2Down,
            &mut keys,
        );
    }

    keys
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Amazing Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let viewport = Viewport::new(800, 480);
    let sprites = Sprites {
        paddle: Sprite::new(TextureId(1), 16, 112),
        ball: Sprite::new(TextureId(2), 16, 16),
        border: Sprite::new(TextureId(3), viewport.width, 8),
    };
    let font = Font {
        id: FontId(1),
        line_spacing: 32,
    };

    let mut game = Game::new(&sprites, font, viewport, settings);
    let mut clock = FixedStep::new();
    let mut canvas = CommandList::new();
    let mut rallies = 0u32;

    while game.state().time_ticks < MAX_TICKS && game.state().winner().is_none() {
        for _ in 0..clock.advance(SIM_DT) {
            let keys = autopilot(game.state());
            let events = match game.update(FrameTick::active(SIM_DT), Some(&keys), viewport) {
                Ok(events) => events,
                Err(e) => {
                    log::error!("Frame failed: {}", e);
                    return;
                }
            };
            rallies += events
                .iter()
                .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
                .count() as u32;
        }
        game.draw(&mut canvas);
    }

    let state = game.state();
    let (p1, p2) = state.scores();
    match state.winner() {
        Some(Player::One) => println!("Player 1 wins {p1}-{p2}"),
        Some(Player::Two) => println!("Player 2 wins {p2}-{p1}"),
        None => println!("No winner after {} ticks: {p1}-{p2}", state.time_ticks),
    }
    println!("{rallies} paddle hits");
    log::info!("Last frame drew {} commands", canvas.commands.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Game` directly
}
