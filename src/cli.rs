// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Scripted input sequence driven by the headless runner
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Fly camera walking over the triangle grid
    Walk,
    /// Target camera orbiting the rectangles
    Orbit,
    /// Points placed with the middle mouse button
    Points,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "opengl-playground")]
#[command(about = "Camera and geometry playground", long_about = None)]
pub struct Cli {
    /// JSON config file, defaults are used when absent
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Milliseconds per simulated frame
    #[arg(long, default_value_t = 16.0)]
    pub frame_time: f64,

    /// Measure frame time with the wall clock instead of --frame-time
    #[arg(long, default_value = "false")]
    pub realtime: bool,

    #[arg(long, value_enum, default_value_t = Scenario::Walk)]
    pub scenario: Scenario,

    /// Only log warnings and errors
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["opengl-playground"]);
        assert_eq!(cli.frames, 120);
        assert_eq!(cli.scenario, Scenario::Walk);
        assert!(cli.config.is_none());
        assert!(!cli.quiet);
        assert!(!cli.realtime);
    }

    #[test]
    fn test_arguments() {
        let cli = Cli::parse_from([
            "opengl-playground",
            "--config",
            "scene.json",
            "--frames",
            "10",
            "--scenario",
            "orbit",
            "--quiet",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("scene.json")));
        assert_eq!(cli.frames, 10);
        assert_eq!(cli.scenario, Scenario::Orbit);
        assert!(cli.quiet);
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
