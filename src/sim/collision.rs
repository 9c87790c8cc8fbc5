//! Collision detection for the flyer
//!
//! Gate collisions are pixel-accurate: the flyer's current wing-frame mask is
//! tested against each gate half's mask, offset by the relative position
//! difference. Ground and ceiling contact are plain bounds checks, and both
//! are terminal here (the reference behavior computed ground contact and then
//! ignored it; that read as a bug, not a rule).

use glam::IVec2;

use super::gate::Gate;
use super::mask::MaskProvider;
use super::state::Flyer;

/// True iff the flyer's mask intersects either of the gate's obstacle masks.
pub fn gate_collision(flyer: &Flyer, gate: &Gate, masks: &dyn MaskProvider) -> bool {
    let flyer_mask = masks.flyer_mask(flyer.frame_index());

    // Gate-half origins relative to the flyer's mask origin
    let dx = (gate.x - flyer.pos.x).round() as i32;
    let flyer_y = flyer.pos.y.round() as i32;
    let top_offset = IVec2::new(dx, gate.top.round() as i32 - flyer_y);
    let bottom_offset = IVec2::new(dx, gate.bottom.round() as i32 - flyer_y);

    flyer_mask.overlap(masks.gate_top_mask(), top_offset)
        || flyer_mask.overlap(masks.gate_bottom_mask(), bottom_offset)
}

/// True iff the flyer's lower edge is below the ground line or its upper edge
/// is above the ceiling.
pub fn out_of_bounds(flyer: &Flyer, flyer_height: u32, ground_y: f32) -> bool {
    flyer.pos.y + flyer_height as f32 > ground_y || flyer.pos.y < 0.0
}
