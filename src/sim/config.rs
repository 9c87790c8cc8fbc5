//! Simulation tunables, validated once at startup
//!
//! The gap range, gap size and playfield bounds interlock: a gate's gap must
//! always lie fully inside the visible playfield. That is a configuration
//! invariant, checked here once before the loop begins, never per spawn.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gap center range [{min}, {max}) is empty or negative")]
    GapRange { min: i32, max: i32 },
    #[error("gap bottom can reach {reach} which is below the ground at {ground_y}")]
    GapBelowGround { reach: f32, ground_y: f32 },
    #[error("scroll velocity must be positive, got {0}")]
    ScrollVelocity(f32),
    #[error("ground at {ground_y} lies outside the playfield height {height}")]
    GroundOutsideField { ground_y: f32, height: f32 },
    #[error("spawn x {spawn_x} is inside the visible playfield (width {width})")]
    SpawnInsideField { spawn_x: f32, width: f32 },
}

/// Simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    /// Gap center is drawn uniformly from [gap_min, gap_max)
    pub gap_min: i32,
    pub gap_max: i32,
    /// Vertical distance between a gate's top and bottom obstacles
    pub gap_size: f32,
    /// Horizontal scroll speed shared by gates and ground (pixels per tick)
    pub scroll_vel: f32,
    /// X coordinate where new gates appear
    pub spawn_x: f32,
    pub flyer_x: f32,
    pub flyer_start_y: f32,
    /// Top edge of the ground strip
    pub ground_y: f32,
    pub ground_segment_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            gap_size: GAP_SIZE,
            scroll_vel: SCROLL_VEL,
            spawn_x: GATE_SPAWN_X,
            flyer_x: FLYER_X,
            flyer_start_y: FLYER_START_Y,
            ground_y: GROUND_Y,
            ground_segment_width: GROUND_SEGMENT_WIDTH,
        }
    }
}

impl Config {
    /// Check the startup invariants. Fatal if violated; the loop must not run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gap_min < 0 || self.gap_min >= self.gap_max {
            return Err(ConfigError::GapRange {
                min: self.gap_min,
                max: self.gap_max,
            });
        }
        let reach = (self.gap_max - 1) as f32 + self.gap_size;
        if reach > self.ground_y {
            return Err(ConfigError::GapBelowGround {
                reach,
                ground_y: self.ground_y,
            });
        }
        if self.scroll_vel <= 0.0 {
            return Err(ConfigError::ScrollVelocity(self.scroll_vel));
        }
        if self.ground_y > self.playfield_height {
            return Err(ConfigError::GroundOutsideField {
                ground_y: self.ground_y,
                height: self.playfield_height,
            });
        }
        if self.spawn_x < self.playfield_width {
            return Err(ConfigError::SpawnInsideField {
                spawn_x: self.spawn_x,
                width: self.playfield_width,
            });
        }
        Ok(())
    }
}
