//! Fixed timestep simulation tick
//!
//! One call advances the match by one host frame: input, zones, collision,
//! then ball movement and bookkeeping.

use glam::IVec2;

use super::collision::{Collision, CollisionZones, detect};
use super::state::{BallState, GameEvent, Heading, MatchState, Player, Zone};
use crate::platform::{Key, KeySource, Viewport};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub paddle1_up: bool,
    pub paddle1_down: bool,
    pub paddle2_up: bool,
    pub paddle2_down: bool,
    /// Release the ball; also clears the scores after a win
    pub start: bool,
}

impl TickInput {
    /// Sample the fixed key set
    pub fn from_keys(keys: &dyn KeySource) -> Self {
        Self {
            paddle1_up: keys.is_down(Key::Paddle1Up),
            paddle1_down: keys.is_down(Key::Paddle1Down),
            paddle2_up: keys.is_down(Key::Paddle2Up),
            paddle2_down: keys.is_down(Key::Paddle2Down),
            start: keys.is_down(Key::Start),
        }
    }
}

/// Advance the match by one tick.
///
/// Events left over from the previous tick are dropped; drain them with
/// [`MatchState::take_events`] after each call.
pub fn tick(state: &mut MatchState, input: &TickInput, viewport: Viewport) {
    state.events.clear();
    state.time_ticks += 1;

    apply_input(state, input, viewport);

    let zones = CollisionZones::build(state, viewport);
    update_collision(state, &zones, viewport);
    update_ball(state, viewport);
}

/// Move paddles and handle the start key
pub fn apply_input(state: &mut MatchState, input: &TickInput, viewport: Viewport) {
    let speed = state.tuning.paddle_speed;
    let dy1 = axis(input.paddle1_up, input.paddle1_down) * speed;
    let dy2 = axis(input.paddle2_up, input.paddle2_down) * speed;
    state.paddle1.move_by(dy1, viewport);
    state.paddle2.move_by(dy2, viewport);

    if input.start {
        state.started = true;

        if let Some(winner) = state.winner() {
            log::info!("New match after {:?} won {:?}", winner, state.scores());
            state.reset_scores();
        }
    }
}

fn axis(up: bool, down: bool) -> f32 {
    match (up, down) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Pick this tick's ball state from the collision zones
pub fn update_collision(state: &mut MatchState, zones: &CollisionZones, viewport: Viewport) {
    let Some(collision) = detect(zones, state.ball.pos.x, state.heading, viewport) else {
        return;
    };

    match collision {
        Collision::Paddle { player, zone } => {
            state.collision_count += 1;
            state.emit(GameEvent::PaddleHit { player, zone });
        }
        Collision::Border { border, .. } => {
            state.emit(GameEvent::BorderHit { border });
        }
        Collision::OutOfBounds => {}
    }

    let next = collision.next_state();
    if next != state.current {
        log::debug!("Ball state {:?} -> {:?}", state.current, next);
    }
    state.current = next;
}

/// Move the ball (or re-serve it), then refresh heading and speed
pub fn update_ball(state: &mut MatchState, viewport: Viewport) {
    if state.started {
        match state.current {
            BallState::Disabled => serve(state, viewport),
            moving => state.ball.pos += moving.step(state.speed).as_vec2(),
        }
        state.previous = Some(state.current);
    }

    match state.current.paddle() {
        Some(Player::One) => state.heading = Heading::Forward,
        Some(Player::Two) => state.heading = Heading::Backward,
        None => {}
    }

    let interval = state.tuning.speed_up_interval;
    if interval > 1 && state.collision_count % interval == 0 {
        state.speed = state.speed.saturating_add(IVec2::ONE);
        state.collision_count = 1;
        log::debug!("Ball speed up to {:?}", state.speed);
        state.emit(GameEvent::SpeedUp { speed: state.speed });
    }
}

/// Score the point the ball just left and put it back in the centre.
///
/// Reads `previous` before the caller overwrites it. The point goes to the
/// paddle that last drove the ball, and the serve goes back out along that
/// same paddle's mid stroke.
fn serve(state: &mut MatchState, viewport: Viewport) {
    let next = match state.previous {
        None => Some(BallState::HitMidPaddle1),
        Some(previous) => previous.driven_by().map(|player| {
            state.paddle_mut(player).score += 1;
            log::info!("Point to {:?}, score {:?}", player, state.scores());
            state.emit(GameEvent::PointScored { player });
            if let Some(winner) = state.winner() {
                log::info!("{:?} wins the match", winner);
            }
            BallState::paddle_hit(player, Zone::Mid)
        }),
    };

    if let Some(next) = next {
        state.current = next;
        if let Some(player) = next.paddle() {
            state.emit(GameEvent::Served {
                toward: player.opponent(),
            });
        }
    }

    state.started = false;
    state.ball.pos = viewport.center();
    state.speed = IVec2::splat(state.tuning.starting_speed);
    state.collision_count = 1;
}
