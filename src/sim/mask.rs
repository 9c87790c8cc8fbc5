//! Pixel occupancy masks for exact-shape collision testing
//!
//! A mask is the 2D silhouette of a sprite: set bits where the sprite has
//! opaque pixels, clear bits in the transparent surround. Two sprites collide
//! iff their masks intersect once offset by their relative positions.
//!
//! Asset loading is out of scope, so masks arrive through the [`MaskProvider`]
//! capability. [`ProceduralMasks`] builds usable silhouettes without any image
//! files and is what the tests and the demo binary run against.

use glam::IVec2;

/// A 2D bit-occupancy shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    /// Fully opaque rectangle
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    /// Build from rows of `#` (set) and `.` (clear). Rows must be equal length.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut bits = Vec::with_capacity((width * height) as usize);
        for row in rows {
            debug_assert_eq!(row.len() as u32, width, "ragged mask rows");
            bits.extend(row.chars().map(|c| c == '#'));
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// Filled ellipse inscribed in a width x height box
    pub fn ellipse(width: u32, height: u32) -> Self {
        let rx = width as f32 / 2.0;
        let ry = height as f32 / 2.0;
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let dx = (x as f32 + 0.5 - rx) / rx;
                let dy = (y as f32 + 0.5 - ry) / ry;
                bits.push(dx * dx + dy * dy <= 1.0);
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    /// Exact overlap test against `other`, whose origin sits at `offset`
    /// relative to this mask's origin. True iff any pixel is set in both.
    pub fn overlap(&self, other: &Mask, offset: IVec2) -> bool {
        // Intersection of the two bounding boxes in self's coordinates
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as u32, y as u32)
                    && other.get((x - offset.x) as u32, (y - offset.y) as u32)
                {
                    return true;
                }
            }
        }
        false
    }
}

/// Supplies collision masks for the flyer's animation frames and the two
/// halves of a gate. Sprite assets live outside the core; this is the seam.
pub trait MaskProvider {
    fn flyer_mask(&self, frame: usize) -> &Mask;
    fn gate_top_mask(&self) -> &Mask;
    fn gate_bottom_mask(&self) -> &Mask;
}

/// Image-free mask set: an elliptical flyer silhouette (one per wing frame)
/// and solid rectangular gate obstacles.
#[derive(Debug, Clone)]
pub struct ProceduralMasks {
    flyer: [Mask; 3],
    gate_top: Mask,
    gate_bottom: Mask,
}

impl ProceduralMasks {
    pub const FLYER_WIDTH: u32 = 68;
    pub const FLYER_HEIGHT: u32 = 48;
    pub const GATE_WIDTH: u32 = 104;
    pub const GATE_HEIGHT: u32 = 640;

    pub fn new() -> Self {
        let body = Mask::ellipse(Self::FLYER_WIDTH, Self::FLYER_HEIGHT);
        Self {
            // Identical silhouettes per frame; a real sprite sheet would
            // differ in wing position only.
            flyer: [body.clone(), body.clone(), body],
            gate_top: Mask::solid(Self::GATE_WIDTH, Self::GATE_HEIGHT),
            gate_bottom: Mask::solid(Self::GATE_WIDTH, Self::GATE_HEIGHT),
        }
    }
}

impl Default for ProceduralMasks {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskProvider for ProceduralMasks {
    fn flyer_mask(&self, frame: usize) -> &Mask {
        &self.flyer[frame % self.flyer.len()]
    }

    fn gate_top_mask(&self) -> &Mask {
        &self.gate_top
    }

    fn gate_bottom_mask(&self) -> &Mask {
        &self.gate_bottom
    }
}
