//! Headless demo runner
//!
//! Drives the simulation with a scripted flap policy at a fixed timestep,
//! paced against wall-clock time with an accumulator so gameplay is identical
//! regardless of how fast the host loop spins. Rendering is out of scope;
//! progress goes to the log.
//!
//! Usage: `glide-gate [seed]`

use std::time::Instant;

use glide_gate::consts::{MAX_SUBSTEPS, SIM_DT};
use glide_gate::sim::{GameState, PcgGapSource, Phase, ProceduralMasks, ScriptedPolicy, TickInput, tick};
use glide_gate::Config;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);

    let config = Config::default();
    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    let masks = ProceduralMasks::new();
    let mut gaps = PcgGapSource::new(seed, config.gap_min, config.gap_max);
    let mut state = GameState::new(seed, &config, &masks, &mut gaps);
    let mut policy = ScriptedPolicy::every(15);

    log::info!("Glide Gate starting with seed {seed}");

    let mut last_time = Instant::now();
    let mut accumulator = 0.0f32;
    let mut last_score = 0;

    let reason = loop {
        let now = Instant::now();
        let frame_dt = (now - last_time).as_secs_f32().min(0.1);
        last_time = now;
        accumulator += frame_dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(
                &mut state,
                &TickInput::default(),
                &mut policy,
                &mut gaps,
                &masks,
                &config,
            );
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if state.score > last_score {
            last_score = state.score;
            log::info!("Score: {last_score}");
        }

        if let Phase::Terminated(reason) = state.phase {
            break reason;
        }

        // A renderer would present the frame here; sleep instead
        std::thread::sleep(std::time::Duration::from_millis(2));
    };

    log::info!(
        "Run ended after {} ticks ({:?}), final score {}",
        state.time_ticks,
        reason,
        state.score
    );

    match serde_json::to_string(&state) {
        Ok(json) => log::debug!("Final state: {json}"),
        Err(e) => log::warn!("Failed to serialize final state: {e}"),
    }
}
