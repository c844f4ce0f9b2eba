//! Match state and core simulation types
//!
//! Everything one tick reads or writes lives in [`MatchState`].

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::Viewport;
use crate::settings::Tuning;

/// Opaque handle to a host texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// A loaded sprite: texture handle plus pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub texture: TextureId,
    pub width: i32,
    pub height: i32,
}

impl Sprite {
    pub fn new(texture: TextureId, width: i32, height: i32) -> Self {
        Self {
            texture,
            width,
            height,
        }
    }
}

/// The sprites a match is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub paddle: Sprite,
    pub ball: Sprite,
    pub border: Sprite,
}

/// Which side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Left paddle, serves toward the right
    One,
    /// Right paddle
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Slice of a paddle the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Top,
    Mid,
    Bottom,
}

/// Horizontal strip at the top or bottom of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Border {
    Top,
    Bottom,
}

/// Which paddle last drove the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heading {
    /// Nobody has hit the ball yet; border bounces are ignored
    #[default]
    Unset,
    /// Driven by paddle 1, travelling right
    Forward,
    /// Driven by paddle 2, travelling left
    Backward,
}

impl Heading {
    pub fn is_forward(self) -> bool {
        self == Heading::Forward
    }

    pub fn is_backward(self) -> bool {
        self == Heading::Backward
    }
}

/// Discrete ball state; each variant fixes the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallState {
    HitTopPaddle1,
    HitMidPaddle1,
    HitBottomPaddle1,
    HitTopPaddle2,
    HitMidPaddle2,
    HitBottomPaddle2,
    HitTopBorderForward,
    HitTopBorderBackward,
    HitBottomBorderForward,
    HitBottomBorderBackward,
    /// Out of play: the next started tick scores and re-serves
    Disabled,
}

impl BallState {
    /// State for a hit on the given paddle zone
    pub fn paddle_hit(player: Player, zone: Zone) -> Self {
        match (player, zone) {
            (Player::One, Zone::Top) => BallState::HitTopPaddle1,
            (Player::One, Zone::Mid) => BallState::HitMidPaddle1,
            (Player::One, Zone::Bottom) => BallState::HitBottomPaddle1,
            (Player::Two, Zone::Top) => BallState::HitTopPaddle2,
            (Player::Two, Zone::Mid) => BallState::HitMidPaddle2,
            (Player::Two, Zone::Bottom) => BallState::HitBottomPaddle2,
        }
    }

    /// State for a border bounce given the current heading
    pub fn border_hit(border: Border, heading: Heading) -> Option<Self> {
        match (border, heading) {
            (Border::Top, Heading::Forward) => Some(BallState::HitTopBorderForward),
            (Border::Top, Heading::Backward) => Some(BallState::HitTopBorderBackward),
            (Border::Bottom, Heading::Forward) => Some(BallState::HitBottomBorderForward),
            (Border::Bottom, Heading::Backward) => Some(BallState::HitBottomBorderBackward),
            (_, Heading::Unset) => None,
        }
    }

    /// The paddle whose stroke this state continues.
    ///
    /// Forward border bounces belong to paddle 1, backward ones to paddle 2.
    pub fn driven_by(self) -> Option<Player> {
        match self {
            BallState::HitTopPaddle1
            | BallState::HitMidPaddle1
            | BallState::HitBottomPaddle1
            | BallState::HitTopBorderForward
            | BallState::HitBottomBorderForward => Some(Player::One),
            BallState::HitTopPaddle2
            | BallState::HitMidPaddle2
            | BallState::HitBottomPaddle2
            | BallState::HitTopBorderBackward
            | BallState::HitBottomBorderBackward => Some(Player::Two),
            BallState::Disabled => None,
        }
    }

    /// The paddle struck, if this is a paddle state
    pub fn paddle(self) -> Option<Player> {
        match self {
            BallState::HitTopPaddle1 | BallState::HitMidPaddle1 | BallState::HitBottomPaddle1 => {
                Some(Player::One)
            }
            BallState::HitTopPaddle2 | BallState::HitMidPaddle2 | BallState::HitBottomPaddle2 => {
                Some(Player::Two)
            }
            _ => None,
        }
    }

    /// Per-tick displacement at the given speed
    pub fn step(self, speed: IVec2) -> IVec2 {
        let (sx, sy) = (speed.x, speed.y);
        match self {
            BallState::HitTopPaddle1 => IVec2::new(sx, -sy),
            BallState::HitMidPaddle1 => IVec2::new(sx, 0),
            BallState::HitBottomPaddle1 => IVec2::new(sx, sy),
            BallState::HitTopPaddle2 => IVec2::new(-sx, -sy),
            BallState::HitMidPaddle2 => IVec2::new(-sx, 0),
            BallState::HitBottomPaddle2 => IVec2::new(-sx, sy),
            BallState::HitTopBorderForward => IVec2::new(sx, sy),
            BallState::HitTopBorderBackward => IVec2::new(-sx, sy),
            BallState::HitBottomBorderForward => IVec2::new(sx, -sy),
            BallState::HitBottomBorderBackward => IVec2::new(-sx, -sy),
            BallState::Disabled => IVec2::ZERO,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub sprite: Sprite,
    pub pos: Vec2,
    pub active: bool,
    pub score: u32,
}

impl Paddle {
    pub fn new(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            active: true,
            score: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.sprite.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.sprite.height
    }

    /// Move vertically, keeping at least half the paddle on screen
    pub fn move_by(&mut self, dy: f32, viewport: Viewport) {
        let half = (self.height() / 2) as f32;
        self.pos.y = (self.pos.y + dy)
            .max(-half)
            .min(viewport.height as f32 - half);
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub sprite: Sprite,
    pub pos: Vec2,
    pub active: bool,
}

impl Ball {
    pub fn new(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            active: true,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.sprite.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.sprite.height
    }
}

/// Something that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit { player: Player, zone: Zone },
    BorderHit { border: Border },
    PointScored { player: Player },
    /// Ball placed at centre, waiting for the start key
    Served { toward: Player },
    SpeedUp { speed: IVec2 },
}

/// Complete match state (serializable for debugging snapshots)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub paddle1: Paddle,
    pub paddle2: Paddle,
    pub ball: Ball,
    pub border: Sprite,
    /// State driving this tick's movement
    pub current: BallState,
    /// State at the end of the last started tick; `None` before the first
    pub previous: Option<BallState>,
    pub heading: Heading,
    /// Set by the start key, cleared whenever the ball is re-served
    pub started: bool,
    /// Paddle hits since the last speed-up or serve
    pub collision_count: u32,
    /// Ball speed in pixels per tick
    pub speed: IVec2,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the latest tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Lay out paddles and ball for a fresh match
    pub fn new(sprites: &Sprites, viewport: Viewport, tuning: Tuning) -> Self {
        let pw = sprites.paddle.width;
        let paddle_y = (viewport.height * 3 / ZONE_DIVISIONS) as f32;
        let paddle1 = Paddle::new(sprites.paddle, Vec2::new(pw as f32, paddle_y));
        let paddle2 = Paddle::new(
            sprites.paddle,
            Vec2::new((viewport.width - pw * 2) as f32, paddle_y),
        );
        let ball = Ball::new(
            sprites.ball,
            Vec2::new(
                (viewport.width / 2 + BALL_START_OFFSET_X) as f32,
                (viewport.height / 2) as f32,
            ),
        );

        Self {
            paddle1,
            paddle2,
            ball,
            border: sprites.border,
            current: BallState::Disabled,
            previous: None,
            heading: Heading::Unset,
            started: false,
            collision_count: 1,
            speed: IVec2::splat(tuning.starting_speed),
            tuning,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::One => &self.paddle1,
            Player::Two => &self.paddle2,
        }
    }

    pub fn paddle_mut(&mut self, player: Player) -> &mut Paddle {
        match player {
            Player::One => &mut self.paddle1,
            Player::Two => &mut self.paddle2,
        }
    }

    /// Scores as (paddle 1, paddle 2)
    pub fn scores(&self) -> (u32, u32) {
        (self.paddle1.score, self.paddle2.score)
    }

    /// The player sitting exactly on the winning score, paddle 1 first
    pub fn winner(&self) -> Option<Player> {
        if self.paddle1.score == self.tuning.win_score {
            Some(Player::One)
        } else if self.paddle2.score == self.tuning.win_score {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn reset_scores(&mut self) {
        self.paddle1.score = 0;
        self.paddle2.score = 0;
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand over the events gathered so far
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
