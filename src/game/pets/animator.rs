// Sprite animator: picks the frame sequence for the current action and facing
// and steps through it on a fixed wall-clock cadence.

use crate::core::time::{elapsed_nanos, millis_to_nanos, NANOS_PER_MILLI};
use crate::engine::assets::{Frame, SpriteSheet};

use super::animation::{Action, AnimationKey, AnimationTable, ColorVariant, Direction};

/// Default time each frame stays on screen
pub const DEFAULT_FRAME_DURATION_MS: u64 = 200;

const STARTING_KEY: AnimationKey = AnimationKey::new(Action::Idle, Direction::Right);

/// Errors raised while configuring an animator
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AnimationError {
    #[error("Frame size must be non-zero, got {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("Frame duration must be a positive number of milliseconds, got {0}")]
    InvalidFrameDuration(f64),
}

/// Drives one pet's sprite frames
#[derive(Debug)]
pub struct SpriteAnimator {
    sheet: SpriteSheet,
    frame_width: u32,
    frame_height: u32,
    color: ColorVariant,
    table: AnimationTable,
    /// Always a key present in `table` when set
    current: Option<AnimationKey>,
    current_frame: usize,
    last_frame_time: u64,
    frame_duration_nanos: u64,
}

impl SpriteAnimator {
    /// Slice all animations for `color` out of `sheet`.
    ///
    /// Starts on the right-facing idle animation when the sheet provides it.
    pub fn new(
        sheet: SpriteSheet,
        frame_width: u32,
        frame_height: u32,
        color: ColorVariant,
    ) -> Result<Self, AnimationError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(AnimationError::InvalidFrameSize {
                width: frame_width,
                height: frame_height,
            });
        }

        let table = AnimationTable::from_sheet(&sheet, frame_width, frame_height, color);
        let current = table.contains(STARTING_KEY).then_some(STARTING_KEY);
        if current.is_none() {
            log::warn!("Sprite sheet has no {} animation, nothing will be drawn", STARTING_KEY);
        }

        Ok(Self {
            sheet,
            frame_width,
            frame_height,
            color,
            table,
            current,
            current_frame: 0,
            last_frame_time: 0,
            frame_duration_nanos: DEFAULT_FRAME_DURATION_MS * NANOS_PER_MILLI,
        })
    }

    /// Switch to the animation for `action` facing `direction`.
    ///
    /// Unknown keys and the already playing key are ignored. Returns whether
    /// the animation changed; a change restarts from the first frame.
    pub fn set_animation(&mut self, action: Action, direction: Direction) -> bool {
        let key = AnimationKey::new(action, direction);
        if !self.table.contains(key) || self.current == Some(key) {
            return false;
        }

        log::debug!("Animation {} -> {}", self.describe_current(), key);
        self.current = Some(key);
        self.current_frame = 0;
        true
    }

    /// Set how long each frame is shown, in milliseconds
    pub fn set_frame_duration(&mut self, millis: f64) -> Result<(), AnimationError> {
        let nanos = millis_to_nanos(millis).ok_or(AnimationError::InvalidFrameDuration(millis))?;
        self.frame_duration_nanos = nanos;
        Ok(())
    }

    /// Advance the animation to timestamp `now` (nanoseconds, monotonic) and
    /// return the frame to draw.
    ///
    /// Advances at most one frame per call, once a full frame duration has
    /// passed since the last advance. Repeated calls with the same `now` are
    /// no-ops.
    pub fn update(&mut self, now: u64) -> Option<&Frame> {
        let key = self.current?;
        let count = self.table.get(key)?.len();

        if elapsed_nanos(now, self.last_frame_time) >= self.frame_duration_nanos {
            self.current_frame = (self.current_frame + 1) % count;
            self.last_frame_time = now;
        }

        self.current_frame()
    }

    /// The frame to draw, without touching the timing
    pub fn current_frame(&self) -> Option<&Frame> {
        let frames = self.table.get(self.current?)?;
        frames.get(self.current_frame)
    }

    /// Swap fur colour, re-slicing every animation from the sheet
    pub fn set_color_variant(&mut self, color: ColorVariant) {
        if self.color == color {
            return;
        }

        self.color = color;
        self.table = AnimationTable::from_sheet(&self.sheet, self.frame_width, self.frame_height, color);

        // Rebuilt table may be missing keys or have shorter strips
        match self.current {
            Some(key) if self.table.contains(key) => {
                let count = self.table.get(key).map_or(1, <[Frame]>::len);
                self.current_frame %= count;
            }
            _ => {
                self.current = self.table.contains(STARTING_KEY).then_some(STARTING_KEY);
                self.current_frame = 0;
            }
        }
        log::debug!("Colour variant set to {:?}", color);
    }

    pub fn current_animation(&self) -> Option<AnimationKey> {
        self.current
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn color_variant(&self) -> ColorVariant {
        self.color
    }

    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    pub fn frame_duration_nanos(&self) -> u64 {
        self.frame_duration_nanos
    }

    pub fn table(&self) -> &AnimationTable {
        &self.table
    }

    fn describe_current(&self) -> String {
        self.current.map_or_else(|| "none".to_string(), |k| k.to_string())
    }
}
