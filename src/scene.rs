use serde::Serialize;

use crate::generators::{effective_level, fern, koch, spiral, square, triangle, DrawSource};
use crate::types::{GeometryBuffer, Topology};

/// Fern space to normalized device coordinates
const FERN_X_SCALE: f32 = 2.6558;
const FERN_Y_SCALE: f32 = 5.0;
const FERN_Y_OFFSET: f32 = 1.0;

/// The selectable fractal scenes
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    Square,
    Spiral,
    #[default]
    Triangle,
    Koch,
    Fern,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Square,
        Scene::Spiral,
        Scene::Triangle,
        Scene::Koch,
        Scene::Fern,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Square => "Squares and Diamonds",
            Scene::Spiral => "Parametric Spiral",
            Scene::Triangle => "Sierpinski Triangle",
            Scene::Koch => "Koch Snowflake",
            Scene::Fern => "Barnsley Fern",
        }
    }

    /// Primitive the renderer draws this scene's buffer with
    pub fn topology(self) -> Topology {
        match self {
            Scene::Square | Scene::Koch => Topology::Lines,
            Scene::Spiral => Topology::LineStrip,
            Scene::Triangle => Topology::Triangles,
            Scene::Fern => Topology::Points,
        }
    }

    /// Point count the fern is sampled with at `level`: 2500, 5000, then +10000 per level
    pub fn fern_iterations(level: u32) -> u32 {
        match effective_level(level) {
            1 => 2_500,
            2 => 5_000,
            n => (n - 2).saturating_mul(10_000),
        }
    }

    /// Generates the scene at `level`, ready for upload.
    ///
    /// Only the fern consumes `draws`; its cloud is also mapped onto the display.
    pub fn build<D: DrawSource + ?Sized>(self, level: u32, draws: &mut D) -> GeometryBuffer {
        let buffer = match self {
            Scene::Square => square::generate(level),
            Scene::Spiral => spiral::generate(level),
            Scene::Triangle => triangle::generate(level),
            Scene::Koch => koch::generate(level),
            Scene::Fern => {
                let mut buffer = fern::generate(Self::fern_iterations(level), draws);
                fit_to_display(&mut buffer);
                buffer
            }
        };
        log::info!(
            "{} level {}: {} vertices",
            self.name(),
            effective_level(level),
            buffer.vertex_count()
        );
        buffer
    }
}

/// Maps a fern point cloud onto [-1, 1]: `x / 2.6558`, `y / 5 - 1`
pub fn fit_to_display(buffer: &mut GeometryBuffer) {
    for [x, y] in buffer.positions_mut() {
        *x /= FERN_X_SCALE;
        *y = *y / FERN_Y_SCALE - FERN_Y_OFFSET;
    }
}
