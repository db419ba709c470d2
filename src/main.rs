//! voxelgrove - a deterministic voxel terrain sandbox engine
//!
//! Headless executable: generates the open world, runs a few demo ticks of
//! the motion controllers and exercises the modeling grid's save/load path.
//! Rendering, windowing and raw input capture belong to external
//! collaborators; this binary drives the engine through the same interfaces
//! they would use.

mod config;
mod input;
mod session;

use anyhow::{Context, Result};
use config::SessionConfig;
use input::{apply_editor_input, EditorInput, FrameInput};
use session::{load_templates, WorldSession};
use std::{env, fs, path::Path, path::PathBuf};
use tracing::info;
use voxelgrove_editor::{saved_records, EditorGrid};
use voxelgrove_physics::MotionState;

/// Fixed demo tick rate, in seconds.
const TICK_SECONDS: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting voxelgrove v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let mut config = match &cli.config {
        Some(path) => SessionConfig::load_from_path(path),
        None => SessionConfig::load(),
    };
    if let Some(density) = cli.tree_density {
        config.trees.density = density;
    }

    // Templates must have resolved before generation starts; missing slots
    // degrade to the surviving template per tree.
    let templates = load_templates(&config);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let world = WorldSession::generate(&config, seed, &templates);
    for batch in world.batches() {
        info!(
            voxel_type = ?batch.voxel_type,
            instances = batch.placements.len(),
            "instance batch"
        );
    }
    info!(
        seed = world.seed(),
        trees = world.placed_trees(),
        "open world ready"
    );

    run_motion_demo(&world, &config, cli.ticks);
    run_editor_demo(&world, cli.save_editor.as_deref(), cli.load_editor.as_deref())?;

    Ok(())
}

/// Walk a grounded character forward for `ticks`, jumping once.
fn run_motion_demo(world: &WorldSession, config: &SessionConfig, ticks: u64) {
    let motion = config.motion_params();
    let mut walker = world.spawn_walker(motion);

    for tick in 0..ticks {
        let frame = FrameInput {
            forward: true,
            jump: tick == ticks / 2,
            ..Default::default()
        };
        let intent = frame.horizontal_intent(config.motion.walk_speed, TICK_SECONDS);
        walker.tick(TICK_SECONDS, intent, frame.jump, world.map());
    }

    let position = walker.position();
    info!(
        x = position.x,
        y = position.y,
        z = position.z,
        grounded = walker.state() == MotionState::Grounded,
        "walker demo finished"
    );
}

/// Build a small structure on the modeling grid, then save and/or load it.
fn run_editor_demo(
    world: &WorldSession,
    save_path: Option<&Path>,
    load_path: Option<&Path>,
) -> Result<()> {
    let mut grid = EditorGrid::new(world.catalog().clone());

    if let Some(path) = load_path {
        let document = fs::read_to_string(path)
            .with_context(|| format!("failed to read editor document {}", path.display()))?;
        let loaded = voxelgrove_editor::load_document(&mut grid, &document)
            .with_context(|| format!("failed to load editor document {}", path.display()))?;
        info!(loaded, path = %path.display(), "editor document loaded");
    } else {
        // A two-block column with a leaf on top.
        apply_editor_input(
            &mut grid,
            &EditorInput {
                insert: true,
                ..Default::default()
            },
        );
        apply_editor_input(
            &mut grid,
            &EditorInput {
                move_up: true,
                insert: true,
                ..Default::default()
            },
        );
        // Type cycling applies after the insert within one frame, so the
        // leaf cap needs its own frame before the final insert.
        apply_editor_input(
            &mut grid,
            &EditorInput {
                move_up: true,
                next_type: true,
                ..Default::default()
            },
        );
        apply_editor_input(
            &mut grid,
            &EditorInput {
                insert: true,
                ..Default::default()
            },
        );
    }

    info!(voxels = grid.voxel_count(), "editor grid ready");

    if let Some(path) = save_path {
        // Pretty-printed on the CLI path; the in-engine blob stays compact.
        let document = serde_json::to_string_pretty(&saved_records(&grid))?;
        fs::write(path, document)
            .with_context(|| format!("failed to write editor document {}", path.display()))?;
        info!(path = %path.display(), "editor document saved");
    }

    Ok(())
}

struct CliOptions {
    seed: Option<u64>,
    ticks: u64,
    tree_density: Option<f64>,
    config: Option<PathBuf>,
    save_editor: Option<PathBuf>,
    load_editor: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            seed: None,
            ticks: 240,
            tree_density: None,
            config: None,
            save_editor: None,
            load_editor: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--world-seed" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.seed = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--world-seed must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--world-seed requires an integer");
                    }
                }
                "--ticks" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.ticks = value,
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--ticks must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--ticks requires an integer");
                    }
                }
                "--tree-density" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<f64>() {
                            Ok(value) => opts.tree_density = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--tree-density must be a number");
                            }
                        }
                    } else {
                        tracing::error!("--tree-density requires a number");
                    }
                }
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--save-editor" => {
                    if let Some(path) = args.next() {
                        opts.save_editor = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--save-editor requires a file path");
                    }
                }
                "--load-editor" => {
                    if let Some(path) = args.next() {
                        opts.load_editor = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--load-editor requires a file path");
                    }
                }
                other => {
                    tracing::error!(argument = %other, "unknown command line argument");
                }
            }
        }

        opts
    }
}
