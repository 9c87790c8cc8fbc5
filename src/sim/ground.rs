//! Infinite scrolling ground
//!
//! Two segments of equal width leapfrog each other: both scroll left, and
//! whichever slides fully off the left edge is repositioned flush against the
//! other's right edge. The segments stay exactly one width apart, so the pair
//! tiles the playfield seamlessly forever.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundScroller {
    pub x1: f32,
    pub x2: f32,
    /// Width of one segment
    pub width: f32,
}

impl GroundScroller {
    pub fn new(width: f32) -> Self {
        Self {
            x1: 0.0,
            x2: width,
            width,
        }
    }

    /// Scroll both segments, wrapping at most one of them. The segments are
    /// always one width apart, so both can never wrap in the same tick.
    pub fn advance(&mut self, scroll_vel: f32) {
        self.x1 -= scroll_vel;
        self.x2 -= scroll_vel;

        if self.x1 + self.width < 0.0 {
            self.x1 = self.x2 + self.width;
        } else if self.x2 + self.width < 0.0 {
            self.x2 = self.x1 + self.width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{GROUND_SEGMENT_WIDTH, SCROLL_VEL};

    #[test]
    fn test_wrap_after_one_segment_width() {
        let mut ground = GroundScroller::new(GROUND_SEGMENT_WIDTH);
        // 672 / 5 = 134.4, so the first segment wraps on tick 135
        let ticks_to_wrap = (GROUND_SEGMENT_WIDTH / SCROLL_VEL).floor() as u32 + 1;
        for _ in 0..ticks_to_wrap - 1 {
            ground.advance(SCROLL_VEL);
        }
        assert!(ground.x1 + ground.width >= 0.0);
        ground.advance(SCROLL_VEL);
        // Repositioned exactly one width right of its partner
        assert_eq!(ground.x1, ground.x2 + ground.width);
    }

    #[test]
    fn test_tiling_stays_seamless() {
        let mut ground = GroundScroller::new(GROUND_SEGMENT_WIDTH);
        for _ in 0..2000 {
            ground.advance(SCROLL_VEL);
            let spacing = (ground.x1 - ground.x2).abs();
            assert_eq!(spacing, ground.width, "gap or overlap between segments");
            // The playfield origin is always covered by one of the segments
            let left = ground.x1.min(ground.x2);
            assert!(left <= 0.0);
            assert!(left + 2.0 * ground.width > 0.0);
        }
    }

    #[test]
    fn test_only_one_segment_wraps_per_tick() {
        let mut ground = GroundScroller::new(GROUND_SEGMENT_WIDTH);
        for _ in 0..2000 {
            let (px1, px2) = (ground.x1, ground.x2);
            ground.advance(SCROLL_VEL);
            let wrapped = u32::from(ground.x1 > px1) + u32::from(ground.x2 > px2);
            assert!(wrapped <= 1);
        }
    }
}
