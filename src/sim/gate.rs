//! Gate generation and lifecycle
//!
//! A gate is a paired top/bottom obstacle with a vertical gap. The gap's top
//! edge is drawn uniformly from the configured range; the top obstacle hangs
//! down to it and the bottom obstacle starts one gap-size below it. Gates
//! scroll left at the uniform world speed and are pruned once fully off the
//! left edge of the playfield.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Supplies gap-center heights. Must be seedable for deterministic runs.
pub trait GapSource {
    fn next_gap_center(&mut self) -> i32;
}

/// PCG-backed uniform gap source over [lo, hi)
#[derive(Debug, Clone)]
pub struct PcgGapSource {
    rng: Pcg32,
    lo: i32,
    hi: i32,
}

impl PcgGapSource {
    pub fn new(seed: u64, lo: i32, hi: i32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            lo,
            hi,
        }
    }
}

impl GapSource for PcgGapSource {
    fn next_gap_center(&mut self) -> i32 {
        self.rng.random_range(self.lo..self.hi)
    }
}

/// A scrolling gated obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// Left edge; monotonically decreasing over the gate's lifetime
    pub x: f32,
    /// Top edge of the gap, fixed at spawn
    pub gap_center: i32,
    /// Y where the top obstacle's mask is anchored (its lower edge ends at
    /// the gap; may be negative when the mask is taller than the headroom)
    pub top: f32,
    /// Y where the bottom obstacle begins
    pub bottom: f32,
    /// Set exactly once, when the flyer's leading edge clears the gate
    pub passed: bool,
}

impl Gate {
    /// Spawn a gate at `x` with a freshly drawn gap.
    pub fn spawn(x: f32, top_mask_height: u32, gap_size: f32, gaps: &mut dyn GapSource) -> Self {
        let gap_center = gaps.next_gap_center();
        Self {
            x,
            gap_center,
            top: gap_center as f32 - top_mask_height as f32,
            bottom: gap_center as f32 + gap_size,
            passed: false,
        }
    }

    /// Scroll left by the uniform world speed.
    pub fn advance(&mut self, scroll_vel: f32) {
        self.x -= scroll_vel;
    }

    /// True once the gate's right edge has left the playfield.
    pub fn is_off_screen(&self, gate_width: u32) -> bool {
        self.x + (gate_width as f32) < 0.0
    }

    /// Latch `passed` the first time the flyer's leading edge moves beyond
    /// the gate. Returns true only on the latching tick.
    pub fn mark_passed_if_crossed(&mut self, flyer_x: f32, flyer_width: u32) -> bool {
        if !self.passed && self.x < flyer_x - flyer_width as f32 {
            self.passed = true;
            return true;
        }
        false
    }
}
