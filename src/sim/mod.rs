//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod gate;
pub mod ground;
pub mod mask;
pub mod policy;
pub mod state;
pub mod tick;

pub use collision::{gate_collision, out_of_bounds};
pub use config::{Config, ConfigError};
pub use gate::{GapSource, Gate, PcgGapSource};
pub use ground::GroundScroller;
pub use mask::{Mask, MaskProvider, ProceduralMasks};
pub use policy::{InputPolicy, JumpPolicy, ScriptedPolicy};
pub use state::{EndReason, Flyer, GameState, Phase};
pub use tick::{TickInput, tick};
