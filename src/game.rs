//! Frame orchestrator
//!
//! Owns the match and everything a host frame touches. The host calls
//! [`Game::update`] once per frame and [`Game::draw`] once per frame.

use crate::audio::AudioManager;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::GameError;
use crate::platform::{FrameTick, KeySource, Viewport};
use crate::renderer::{Canvas, Font, draw_match};
use crate::settings::Settings;
use crate::sim::{GameEvent, MatchState, Sprites, TickInput, tick};

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    state: MatchState,
    settings: Settings,
    audio: AudioManager,
    font: Font,
    viewport: Viewport,
}

impl Game {
    pub fn new(sprites: &Sprites, font: Font, viewport: Viewport, settings: Settings) -> Self {
        let mut audio = AudioManager::default();
        audio.apply_settings(&settings);
        log::info!(
            "New match on {}x{}, first to {}",
            viewport.width,
            viewport.height,
            settings.tuning.win_score
        );
        Self {
            state: MatchState::new(sprites, viewport, settings.tuning),
            settings,
            audio,
            font,
            viewport,
        }
    }

    /// Route sound cues to a host backend
    pub fn with_audio(mut self, mut audio: AudioManager) -> Self {
        audio.apply_settings(&self.settings);
        self.audio = audio;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run one frame.
    ///
    /// Paused frames only pick up the viewport; they neither tick nor read
    /// input. An active frame without
    /// key state is a host bug and is reported as [`GameError::MissingInput`].
    pub fn update(
        &mut self,
        frame: FrameTick,
        keys: Option<&dyn KeySource>,
        viewport: Viewport,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.viewport = viewport;
        if !frame.active {
            return Ok(Vec::new());
        }
        let keys = keys.ok_or(GameError::MissingInput)?;

        let input = TickInput::from_keys(keys);
        tick(&mut self.state, &input, viewport);

        let events = self.state.take_events();
        self.audio.play_events(&events);
        Ok(events)
    }

    /// Draw the current frame; reads state only
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        draw_match(&self.state, &self.font, self.viewport, canvas);
    }
}

/// Turns variable frame times into a bounded number of fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add elapsed wall time and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Fraction of a tick left over, for interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / SIM_DT).clamp(0.0, 1.0)
    }
}
