//! Glide Gate - a side-scrolling gate-dodging arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gate lifecycle, collisions)
//!
//! Rendering, asset loading and input polling are external collaborators;
//! the simulation only exposes state snapshots and collision masks.

pub mod sim;

pub use sim::config::{Config, ConfigError};
pub use sim::state::GameState;
pub use sim::tick::{TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz, one tick per nominal frame)
    pub const SIM_DT: f32 = 1.0 / 30.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 800.0;

    /// Flyer defaults
    pub const FLYER_X: f32 = 200.0;
    pub const FLYER_START_Y: f32 = 200.0;
    /// Upward impulse applied on a flap (y grows downward)
    pub const FLAP_IMPULSE: f32 = -10.5;
    /// Terminal per-tick fall displacement
    pub const TERMINAL_DISPLACEMENT: f32 = 16.0;
    /// Extra displacement applied while climbing, for snappier ascents
    pub const CLIMB_BONUS: f32 = 2.0;
    /// Tilt snaps here the moment the flyer climbs
    pub const MAX_TILT: f32 = 25.0;
    /// Nose-dive floor
    pub const MIN_TILT: f32 = -90.0;
    /// Tilt lost per tick while falling
    pub const TILT_STEP: f32 = 20.0;
    /// At or below this tilt the mid wing frame is forced
    pub const DIVE_TILT: f32 = -80.0;
    /// Ticks per wing animation step
    pub const FRAME_TICKS: u32 = 5;

    /// Gate defaults
    pub const GAP_MIN: i32 = 50;
    pub const GAP_MAX: i32 = 450;
    pub const GAP_SIZE: f32 = 200.0;
    pub const GATE_SPAWN_X: f32 = 600.0;

    /// Uniform scroll speed for gates and ground (pixels per tick)
    pub const SCROLL_VEL: f32 = 5.0;

    /// Top edge of the ground strip
    pub const GROUND_Y: f32 = 730.0;
    /// Width of one ground segment
    pub const GROUND_SEGMENT_WIDTH: f32 = 672.0;
}
