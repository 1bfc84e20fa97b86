use std::f32::consts::TAU;

use glam::Vec2;

use super::common::{effective_level, BORDER};
use crate::types::{GeometryBuffer, Topology};

/// Archimedean spiral of `level` turns sampled once per degree, as a single line strip.
///
/// Radius grows linearly with the angle and is scaled so the final sample lands on `BORDER`.
/// Colour runs from blue at the centre to green at the rim.
pub fn generate(level: u32) -> GeometryBuffer {
    let level = effective_level(level);
    let samples = 360 * level;
    let radius_scale = BORDER / (level as f32 * TAU);

    let mut buffer = GeometryBuffer::with_capacity(Topology::LineStrip, samples as usize + 1);
    for i in 0..=samples {
        let angle = (i as f32).to_radians();
        let t = i as f32 / samples as f32;
        buffer.push_point(radius_scale * angle * Vec2::from_angle(angle), [0.0, t, 1.0 - t]);
    }

    log::debug!("Spiral level {}: {} samples", level, buffer.vertex_count());
    buffer
}
