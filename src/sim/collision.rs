//! Collision zones and per-tick hit detection
//!
//! Each paddle is cut into three stacked zones (3/7 top, 1/7 mid, 3/7 bottom)
//! and the zone the ball touches picks the bounce angle. Tests run in a fixed
//! priority order and the first match wins, so a ball overlapping several
//! zones at once resolves deterministically.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{BallState, Border, Heading, MatchState, Paddle, Player, Zone};
use crate::consts::ZONE_DIVISIONS;
use crate::platform::Viewport;

/// The three hit zones of one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleZones {
    pub top: Rect,
    pub mid: Rect,
    pub bottom: Rect,
}

impl PaddleZones {
    /// Cut a paddle into zones at the given horizontal offset.
    ///
    /// The offset is fixed per side rather than read from the paddle.
    pub fn new(paddle: &Paddle, x: i32) -> Self {
        let y = paddle.pos.y as i32;
        let w = paddle.width();
        let h = paddle.height();
        Self {
            top: Rect::new(x, y, w, h * 3 / ZONE_DIVISIONS),
            mid: Rect::new(x, y + h * 3 / ZONE_DIVISIONS, w, h / ZONE_DIVISIONS),
            bottom: Rect::new(x, y + h * 4 / ZONE_DIVISIONS, w, h * 3 / ZONE_DIVISIONS),
        }
    }

    /// Zones in test order: mid first, then top, then bottom
    pub fn in_priority_order(&self) -> [(Zone, Rect); 3] {
        [
            (Zone::Mid, self.mid),
            (Zone::Top, self.top),
            (Zone::Bottom, self.bottom),
        ]
    }
}

/// Every rectangle tested in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionZones {
    pub paddle1: PaddleZones,
    pub paddle2: PaddleZones,
    pub ball: Rect,
    pub top_border: Rect,
    /// Starts at the viewport's bottom edge, so it only catches a ball that
    /// has already crossed it
    pub bottom_border: Rect,
}

impl CollisionZones {
    /// Rebuild all zones from current positions
    pub fn build(state: &MatchState, viewport: Viewport) -> Self {
        let p1_x = state.paddle1.width();
        let p2_x = viewport.width - state.paddle2.width() * 2;
        let border_h = state.border.height;

        Self {
            paddle1: PaddleZones::new(&state.paddle1, p1_x),
            paddle2: PaddleZones::new(&state.paddle2, p2_x),
            ball: Rect::at(state.ball.pos, state.ball.width(), state.ball.height()),
            top_border: Rect::new(0, 0, viewport.width, border_h),
            bottom_border: Rect::new(0, viewport.height, viewport.width, border_h),
        }
    }

    pub fn paddle(&self, player: Player) -> &PaddleZones {
        match player {
            Player::One => &self.paddle1,
            Player::Two => &self.paddle2,
        }
    }

    pub fn border(&self, border: Border) -> &Rect {
        match border {
            Border::Top => &self.top_border,
            Border::Bottom => &self.bottom_border,
        }
    }
}

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Paddle { player: Player, zone: Zone },
    Border { border: Border, state: BallState },
    /// Ball left the field horizontally
    OutOfBounds,
}

impl Collision {
    /// Ball state this collision switches to
    pub fn next_state(self) -> BallState {
        match self {
            Collision::Paddle { player, zone } => BallState::paddle_hit(player, zone),
            Collision::Border { state, .. } => state,
            Collision::OutOfBounds => BallState::Disabled,
        }
    }
}

/// Find the highest-priority collision for this tick, if any.
///
/// Border hits only register once the ball has a heading; before that the
/// ball falls through to the bounds checks.
pub fn detect(
    zones: &CollisionZones,
    ball_x: f32,
    heading: Heading,
    viewport: Viewport,
) -> Option<Collision> {
    for player in [Player::One, Player::Two] {
        for (zone, rect) in zones.paddle(player).in_priority_order() {
            if zones.ball.intersects(&rect) {
                return Some(Collision::Paddle { player, zone });
            }
        }
    }

    for border in [Border::Top, Border::Bottom] {
        let Some(state) = BallState::border_hit(border, heading) else {
            continue;
        };
        if zones.ball.intersects(zones.border(border)) {
            return Some(Collision::Border { border, state });
        }
    }

    if ball_x > viewport.width as f32 || ball_x < 0.0 {
        return Some(Collision::OutOfBounds);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Tuning;
    use crate::sim::test_support::{sprites, viewport};
    use glam::Vec2;

    fn state() -> MatchState {
        MatchState::new(&sprites(), viewport(), Tuning::default())
    }

    #[test]
    fn test_paddle_zones_split_in_sevenths() {
        let state = state();
        let zones = CollisionZones::build(&state, viewport());
        // paddle 16x112 at y = 205
        assert_eq!(zones.paddle1.top, Rect::new(16, 205, 16, 48));
        assert_eq!(zones.paddle1.mid, Rect::new(16, 253, 16, 16));
        assert_eq!(zones.paddle1.bottom, Rect::new(16, 269, 16, 48));
        assert_eq!(zones.paddle2.top.x, 800 - 32);
    }

    #[test]
    fn test_border_rects() {
        let zones = CollisionZones::build(&state(), viewport());
        assert_eq!(zones.top_border, Rect::new(0, 0, 800, 8));
        // Bottom band sits below the visible field
        assert_eq!(zones.bottom_border, Rect::new(0, 480, 800, 8));
    }

    #[test]
    fn test_ball_rect_truncates_position() {
        let mut state = state();
        state.ball.pos = Vec2::new(100.9, 50.2);
        let zones = CollisionZones::build(&state, viewport());
        assert_eq!(zones.ball, Rect::new(100, 50, 16, 16));
    }

    #[test]
    fn test_mid_zone_beats_top_zone() {
        let mut state = state();
        // Straddles the top/mid boundary of paddle 1 (mid starts at y = 253)
        state.ball.pos = Vec2::new(20.0, 245.0);
        let zones = CollisionZones::build(&state, viewport());
        assert!(zones.ball.intersects(&zones.paddle1.top));
        assert!(zones.ball.intersects(&zones.paddle1.mid));
        assert_eq!(
            detect(&zones, state.ball.pos.x, Heading::Forward, viewport()),
            Some(Collision::Paddle {
                player: Player::One,
                zone: Zone::Mid
            })
        );
    }

    #[test]
    fn test_paddle_zone_beats_border() {
        let mut state = state();
        // Paddle pushed up against the top border
        state.paddle1.pos.y = 0.0;
        state.ball.pos = Vec2::new(20.0, 2.0);
        let zones = CollisionZones::build(&state, viewport());
        assert!(zones.ball.intersects(&zones.top_border));
        assert_eq!(
            detect(&zones, state.ball.pos.x, Heading::Forward, viewport()),
            Some(Collision::Paddle {
                player: Player::One,
                zone: Zone::Top
            })
        );
    }

    #[test]
    fn test_paddle1_beats_paddle2() {
        let mut state = state();
        let narrow = Viewport::new(48, 480);
        // Both paddles share x = 16..32 on a 48 px wide field
        state.paddle1.pos.y = 0.0;
        state.paddle2.pos.y = 0.0;
        state.ball.pos = Vec2::new(20.0, 100.0);
        let zones = CollisionZones::build(&state, narrow);
        assert!(zones.ball.intersects(&zones.paddle2.bottom));
        assert_eq!(
            detect(&zones, state.ball.pos.x, Heading::Backward, narrow),
            Some(Collision::Paddle {
                player: Player::One,
                zone: Zone::Bottom
            })
        );
    }

    #[test]
    fn test_border_ignored_without_heading() {
        let mut state = state();
        state.ball.pos = Vec2::new(400.0, 2.0);
        let zones = CollisionZones::build(&state, viewport());
        assert_eq!(detect(&zones, 400.0, Heading::Unset, viewport()), None);
        assert_eq!(
            detect(&zones, 400.0, Heading::Backward, viewport()),
            Some(Collision::Border {
                border: Border::Top,
                state: BallState::HitTopBorderBackward,
            })
        );
    }

    #[test]
    fn test_bottom_border_only_below_viewport() {
        let mut state = state();
        // Fully visible at the bottom edge: no hit yet
        state.ball.pos = Vec2::new(400.0, 464.0);
        let zones = CollisionZones::build(&state, viewport());
        assert_eq!(detect(&zones, 400.0, Heading::Forward, viewport()), None);

        state.ball.pos = Vec2::new(400.0, 465.0);
        let zones = CollisionZones::build(&state, viewport());
        assert_eq!(
            detect(&zones, 400.0, Heading::Forward, viewport()),
            Some(Collision::Border {
                border: Border::Bottom,
                state: BallState::HitBottomBorderForward,
            })
        );
    }

    #[test]
    fn test_out_of_bounds_both_sides() {
        let mut state = state();
        state.ball.pos = Vec2::new(-1.0, 240.0);
        let zones = CollisionZones::build(&state, viewport());
        assert_eq!(
            detect(&zones, -1.0, Heading::Backward, viewport()),
            Some(Collision::OutOfBounds)
        );

        state.ball.pos = Vec2::new(801.0, 240.0);
        let zones = CollisionZones::build(&state, viewport());
        assert_eq!(
            detect(&zones, 801.0, Heading::Forward, viewport()),
            Some(Collision::OutOfBounds)
        );

        // Exactly on the edge is still in play
        assert_eq!(detect(&zones, 800.0, Heading::Forward, viewport()), None);
    }
}
