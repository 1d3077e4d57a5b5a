//! Replays a synthetic episode and writes the action comparison to TensorBoard.
//!
//! The policy replays the ground truth delayed by one step, so the predicted
//! curves trail the ground-truth curves.
use anyhow::Result;
use clap::Parser;
use ndarray::{ArrayD, IxDyn};
use rtx_core::{
    action::{to_model_action, ModelAction, RawAction},
    export::{filmstrip, save_gif, save_image},
    policy::ReplayPolicy,
    Episode, InferenceRunner, InferenceRunnerConfig, Observation, Step,
};
use rtx_tensorboard::TensorboardRecorder;
use std::f32::consts::PI;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of steps in the episode
    #[arg(short, long, default_value_t = 30)]
    steps: usize,

    /// Directory of TensorBoard logs
    #[arg(short, long, default_value = "runs/replay_synthetic")]
    logdir: String,

    /// Runner configuration in YAML; defaults are used if omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Save the preprocessed frames as a GIF
    #[arg(long)]
    gif: Option<String>,

    /// Save every third preprocessed frame side by side as a PNG
    #[arg(long)]
    strip: Option<String>,
}

/// A 480x640 frame with a square moving from left to right.
fn frame(t: usize, n: usize) -> ArrayD<u8> {
    let mut img = ArrayD::from_elem(IxDyn(&[480, 640, 3]), 40u8);
    let x0 = (t * (640 - 80)) / n.max(1);
    for y in 200..280 {
        for x in x0..x0 + 80 {
            img[[y, x, 0]] = 220;
            img[[y, x, 1]] = 120;
        }
    }
    img
}

fn synthetic_episode(n: usize) -> Episode {
    let steps = (0..n)
        .map(|t| {
            let phase = 2.0 * PI * t as f32 / n as f32;
            let act = RawAction::new(
                [0.06 * phase.sin(), 0.03 * phase.cos(), 0.0],
                [0.0, 0.0, 0.3 * phase.sin()],
                t < n / 2,
                if t + 1 == n { 1.0 } else { 0.0 },
            );
            Step::new(frame(t, n), act)
        })
        .collect();
    Episode::new(steps)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InferenceRunnerConfig::load(path)?,
        None => InferenceRunnerConfig::default(),
    };
    let template = Observation::zeros(config.preprocessor.height, config.preprocessor.width)
        .instruction("push the red block to the right", vec![0.0; Observation::EMBEDDING_DIM]);
    let runner = InferenceRunner::build(&config, template)?;

    let episode = synthetic_episode(args.steps);
    let mut delayed = vec![ModelAction::default()];
    for step in episode.iter().take(episode.len().saturating_sub(1)) {
        delayed.push(to_model_action(&step.action)?);
    }
    let mut policy = ReplayPolicy::new(delayed);

    let mut recorder = TensorboardRecorder::new(&args.logdir);
    let rollout = runner.run_episode_with_recorder(&mut policy, &episode, &mut recorder)?;

    let mae = rollout.comparison()?.mean_abs_error();
    for (k, v) in mae.iter() {
        println!("{:<40} {:?}", k, v);
    }

    if let Some(path) = &args.gif {
        save_gif(&rollout.images, path, 1000)?;
    }
    if let Some(path) = &args.strip {
        save_image(&filmstrip(&rollout.images, 3)?, path)?;
    }

    Ok(())
}
