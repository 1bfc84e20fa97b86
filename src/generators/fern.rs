use glam::{DAffine2, DVec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::math::GREEN;
use crate::types::{GeometryBuffer, Topology};

pub const SEED_POINT: [f32; 2] = [0.0, 0.0];

/// Source of the per-point branch draws
pub trait DrawSource {
    /// Uniform integer in `1..=100`
    fn draw_percent(&mut self) -> u32;
}

/// Draws from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDraws<R>(pub R);

impl RngDraws<StdRng> {
    /// Reproducible draws for tests and scripted runs
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Fresh OS-seeded draws for interactive use
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl<R: Rng> DrawSource for RngDraws<R> {
    fn draw_percent(&mut self) -> u32 {
        self.0.gen_range(1..=100)
    }
}

/// Replays a fixed draw sequence, cycling when it runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraws {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl DrawSource for ScriptedDraws {
    fn draw_percent(&mut self) -> u32 {
        // An empty script always takes the most common branch.
        let Some(&draw) = self.draws.get(self.cursor % self.draws.len().max(1)) else {
            return 50;
        };
        self.cursor += 1;
        draw
    }
}

/// Wraps another source and keeps every draw it hands out
#[derive(Debug, Clone)]
pub struct RecordingDraws<D> {
    inner: D,
    recorded: Vec<u32>,
}

impl<D: DrawSource> RecordingDraws<D> {
    pub fn new(inner: D) -> Self {
        Self { inner, recorded: Vec::new() }
    }

    pub fn recorded(&self) -> &[u32] {
        &self.recorded
    }

    pub fn into_script(self) -> ScriptedDraws {
        ScriptedDraws::new(self.recorded)
    }
}

impl<D: DrawSource> DrawSource for RecordingDraws<D> {
    fn draw_percent(&mut self) -> u32 {
        let draw = self.inner.draw_percent();
        self.recorded.push(draw);
        draw
    }
}

/// The four affine maps of the Barnsley fern
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FernBranch {
    Stem,
    Leaflet,
    LeftLeaflet,
    RightLeaflet,
}

impl FernBranch {
    pub const ALL: [FernBranch; 4] = [
        FernBranch::Stem,
        FernBranch::Leaflet,
        FernBranch::LeftLeaflet,
        FernBranch::RightLeaflet,
    ];

    /// Buckets a `1..=100` draw: 1% stem, 85% leaflet, 7% each side leaflet
    pub fn from_draw(draw: u32) -> Self {
        match draw {
            0..=1 => FernBranch::Stem,
            2..=86 => FernBranch::Leaflet,
            87..=93 => FernBranch::LeftLeaflet,
            _ => FernBranch::RightLeaflet,
        }
    }

    pub fn transform(self) -> DAffine2 {
        // Columns: x axis, y axis, translation.
        let cols = match self {
            FernBranch::Stem => [0.0, 0.0, 0.0, 0.16, 0.0, 0.0],
            FernBranch::Leaflet => [0.85, -0.04, 0.04, 0.85, 0.0, 1.6],
            FernBranch::LeftLeaflet => [0.2, 0.23, -0.26, 0.22, 0.0, 1.6],
            FernBranch::RightLeaflet => [-0.15, 0.26, 0.28, 0.24, 0.0, 0.44],
        };
        DAffine2::from_cols_array(&cols)
    }

    /// Maps `point` in double precision, storing the result as f32
    pub fn apply(self, point: [f32; 2]) -> [f32; 2] {
        let p = DVec2::new(f64::from(point[0]), f64::from(point[1]));
        self.transform().transform_point2(p).as_vec2().to_array()
    }
}

/// Barnsley fern point cloud: the seed plus `iterations - 1` mapped points, all green.
///
/// Coordinates are in fern space (x roughly [-2.7, 2.7], y in [0, 10]); see
/// [`crate::scene::fit_to_display`] for the display mapping.
pub fn generate<D: DrawSource + ?Sized>(iterations: u32, draws: &mut D) -> GeometryBuffer {
    let count = iterations.max(1) as usize;
    let mut buffer = GeometryBuffer::with_capacity(Topology::Points, count);

    let mut point = SEED_POINT;
    buffer.push(point, GREEN);
    for _ in 1..count {
        point = FernBranch::from_draw(draws.draw_percent()).apply(point);
        buffer.push(point, GREEN);
    }

    log::debug!("Fern: {} points", buffer.vertex_count());
    buffer
}
