use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use opengl_playground::cli::Cli;
use opengl_playground::config::AppConfig;
use opengl_playground::core::Frames;
use opengl_playground::demo::{run_scenario, CountingRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.scenario.configure(&mut config);

    let mut app = cli
        .scenario
        .build(&config)
        .context("Failed to set up the scenario camera")?;
    info!(
        "Running {:?} for {} frames of {} ms",
        cli.scenario, cli.frames, cli.frame_time
    );

    let mut renderer = CountingRenderer::default();
    let frames = if cli.realtime {
        Frames::realtime(cli.frames)
    } else {
        Frames::fixed(cli.frame_time, cli.frames)
    };
    let simulated = run_scenario(&mut app, cli.scenario, frames, cli.frames, &mut renderer);

    info!(
        "{} frames: {} triangle draws ({} vertices), {} mesh draws ({} vertices), {} point draws ({} points)",
        simulated,
        renderer.triangle_calls,
        renderer.triangle_vertices,
        renderer.mesh_calls,
        renderer.mesh_vertices,
        renderer.point_calls,
        renderer.points
    );
    if let Some(camera) = app.camera() {
        info!("Final camera:\n{}", camera.log());
        info!("View matrix:\n{}", camera.view_matrix());
        info!("Projection matrix:\n{}", camera.projection_matrix());
    }
    Ok(())
}
