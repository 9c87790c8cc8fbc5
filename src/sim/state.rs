//! Game state and core simulation types
//!
//! Everything needed to reproduce a run lives here; the state is fully
//! serializable so a renderer (or a test) can take an immutable snapshot
//! after any tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::Config;
use super::gate::{GapSource, Gate};
use super::ground::GroundScroller;
use super::mask::MaskProvider;
use crate::consts::*;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Hit a gate edge, the ground, or the ceiling
    Collision,
    /// External quit request
    Quit,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    Terminated(EndReason),
}

/// The single actor: falls under gravity, climbs on discrete flap impulses.
///
/// X is fixed for the whole session; the world scrolls past instead.
/// Y grows downward, so the flap impulse is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flyer {
    pub pos: Vec2,
    /// Vertical velocity set by the last flap
    pub vel: f32,
    /// Ticks elapsed since the last flap
    pub ticks_since_flap: u32,
    /// Visual rotation in degrees, [-90, 25]
    pub tilt: f32,
    /// Height recorded at the last flap, drives the tilt-up window
    pub flap_ref_y: f32,
    /// Monotonic counter driving wing animation
    pub anim_counter: u32,
}

impl Flyer {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: 0.0,
            ticks_since_flap: 0,
            tilt: 0.0,
            flap_ref_y: pos.y,
            anim_counter: 0,
        }
    }

    /// Apply the upward impulse. Always succeeds.
    pub fn flap(&mut self) {
        self.vel = FLAP_IMPULSE;
        self.ticks_since_flap = 0;
        self.flap_ref_y = self.pos.y;
    }

    /// Advance one tick of discrete kinematics.
    ///
    /// Displacement is `d = vel * t + 1.5 * t^2` with t the ticks since the
    /// last flap, clamped to the terminal fall speed, and exaggerated while
    /// climbing so flaps read instantly.
    pub fn advance(&mut self) {
        self.ticks_since_flap += 1;
        let t = self.ticks_since_flap as f32;

        let mut d = self.vel * t + 1.5 * t * t;
        if d >= TERMINAL_DISPLACEMENT {
            d = TERMINAL_DISPLACEMENT;
        }
        if d < 0.0 {
            d -= CLIMB_BONUS;
        }
        self.pos.y += d;

        // Snap nose-up while climbing or still near the flap height,
        // otherwise rotate gradually into a dive.
        if d < 0.0 || self.pos.y < self.flap_ref_y + 50.0 {
            self.tilt = MAX_TILT;
        } else if self.tilt > MIN_TILT {
            self.tilt = (self.tilt - TILT_STEP).max(MIN_TILT);
        }

        self.anim_counter = self.anim_counter.wrapping_add(1);
    }

    /// Sprite/mask frame for the current tick. Cosmetic for physics, but it
    /// selects which mask the collision test runs against.
    pub fn frame_index(&self) -> usize {
        if self.tilt <= DIVE_TILT {
            // Wings held flat during a nose dive
            return 1;
        }
        animation_frame(self.anim_counter)
    }
}

/// Wing frame as a pure function of a monotonic counter: 0,1,2,1 repeating,
/// holding each for [`FRAME_TICKS`] ticks.
pub fn animation_frame(counter: u32) -> usize {
    match (counter % (4 * FRAME_TICKS)) / FRAME_TICKS {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => 1,
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub flyer: Flyer,
    /// Active gates in spawn order (equivalently by descending x)
    pub gates: Vec<Gate>,
    pub ground: GroundScroller,
    /// Gates passed so far
    pub score: u32,
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh run: flyer at the start position, one gate queued at the spawn
    /// edge, ground seamless from x = 0.
    pub fn new(
        seed: u64,
        config: &Config,
        masks: &dyn MaskProvider,
        gaps: &mut dyn GapSource,
    ) -> Self {
        let first_gate = Gate::spawn(
            config.spawn_x,
            masks.gate_top_mask().height(),
            config.gap_size,
            gaps,
        );
        Self {
            seed,
            flyer: Flyer::new(Vec2::new(config.flyer_x, config.flyer_start_y)),
            gates: vec![first_gate],
            ground: GroundScroller::new(config.ground_segment_width),
            score: 0,
            phase: Phase::Running,
            time_ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
}
