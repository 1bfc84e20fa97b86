// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

use crate::controller::{Key, SceneController, SceneRequest};
use crate::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One-line description of the generated buffer
    Summary,
    /// Topology, positions and colours as JSON
    Json,
    /// Interleaved `x y r g b` f32 vertices in native byte order
    Raw,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fractal-geometry")]
#[command(about = "Recursive 2D fractal geometry generator", long_about = None)]
pub struct Cli {
    /// Scene to generate
    #[arg(long, value_enum, default_value_t = Scene::Triangle)]
    pub scene: Scene,

    /// Recursion depth; selects the point count for the fern
    #[arg(long, default_value_t = 1)]
    pub level: u32,

    /// Key presses replayed through the scene controller, e.g. "k4" (overrides --scene/--level)
    #[arg(long)]
    pub keys: Option<String>,

    /// Seed for the fern's branch draws; OS entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Output file; stdout when absent (not allowed for raw output)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Resolves the scene and level to generate
    pub fn request(&self) -> Result<SceneRequest> {
        let Some(keys) = &self.keys else {
            return Ok(SceneRequest {
                scene: self.scene,
                level: self.level,
            });
        };

        let mut controller = SceneController::new();
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            let Some(key) = Key::from_char(c) else {
                bail!("unknown key {:?} in --keys", c);
            };
            controller.handle_key(key);
        }
        Ok(controller.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fractal-geometry"]).unwrap();
        assert_eq!(cli.scene, Scene::Triangle);
        assert_eq!(cli.level, 1);
        assert_eq!(cli.format, OutputFormat::Summary);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_scene_and_level() {
        let cli = Cli::try_parse_from(["fractal-geometry", "--scene", "koch", "--level", "3"]).unwrap();
        let request = cli.request().unwrap();
        assert_eq!(request.scene, Scene::Koch);
        assert_eq!(request.level, 3);
    }

    #[test]
    fn test_keys_override_scene() {
        let cli = Cli::try_parse_from(["fractal-geometry", "--scene", "koch", "--keys", "s 5"]).unwrap();
        let request = cli.request().unwrap();
        assert_eq!(request.scene, Scene::Square);
        assert_eq!(request.level, 5);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let cli = Cli::try_parse_from(["fractal-geometry", "--keys", "kz"]).unwrap();
        assert!(cli.request().is_err());
    }

    #[test]
    fn test_unknown_scene_rejected() {
        assert!(Cli::try_parse_from(["fractal-geometry", "--scene", "mandelbrot"]).is_err());
    }
}
