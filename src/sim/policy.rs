//! Flap decision policies
//!
//! The controller never decides to flap on its own; it asks an injected
//! [`JumpPolicy`] each tick, before physics advance. The default policy just
//! relays the external "flap pressed" input; the scripted one drives
//! deterministic runs for the demo binary and the tests. A learned policy
//! would slot in behind the same trait.

use super::gate::Gate;
use super::state::Flyer;
use super::tick::TickInput;

/// Decides, once per tick, whether the flyer flaps this tick.
pub trait JumpPolicy {
    fn decide(&mut self, input: &TickInput, flyer: &Flyer, gates: &[Gate]) -> bool;
}

/// Default policy: flap exactly when the external input says so.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputPolicy;

impl JumpPolicy for InputPolicy {
    fn decide(&mut self, input: &TickInput, _flyer: &Flyer, _gates: &[Gate]) -> bool {
        input.flap
    }
}

/// Deterministic policy: flaps on a fixed tick cadence, ignoring input.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    period: u32,
    countdown: u32,
}

impl ScriptedPolicy {
    /// Flap every `period` ticks, starting on the first tick.
    pub fn every(period: u32) -> Self {
        Self {
            period: period.max(1),
            countdown: 0,
        }
    }
}

impl JumpPolicy for ScriptedPolicy {
    fn decide(&mut self, _input: &TickInput, _flyer: &Flyer, _gates: &[Gate]) -> bool {
        if self.countdown == 0 {
            self.countdown = self.period - 1;
            true
        } else {
            self.countdown -= 1;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn flyer() -> Flyer {
        Flyer::new(Vec2::new(200.0, 200.0))
    }

    #[test]
    fn test_input_policy_relays_flap() {
        let mut policy = InputPolicy;
        let pressed = TickInput {
            flap: true,
            ..TickInput::default()
        };
        assert!(policy.decide(&pressed, &flyer(), &[]));
        assert!(!policy.decide(&TickInput::default(), &flyer(), &[]));
    }

    #[test]
    fn test_scripted_policy_cadence() {
        let mut policy = ScriptedPolicy::every(3);
        let input = TickInput::default();
        let decisions: Vec<bool> = (0..7)
            .map(|_| policy.decide(&input, &flyer(), &[]))
            .collect();
        assert_eq!(
            decisions,
            vec![true, false, false, true, false, false, true]
        );
    }
}
