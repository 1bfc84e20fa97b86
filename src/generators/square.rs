use glam::Vec2;

use super::common::{refinement_passes, BORDER};
use crate::math::{grey, Colour, BLACK, RED};
use crate::types::{GeometryBuffer, Topology};

/// Per-level lightening of the nested outlines
pub const GREY_STEP: f64 = 0.12;

/// Vertices emitted per level: 4 square sides and 4 diamond sides, two vertices each
pub const LEVEL_VERTICES: usize = 16;

fn push_loop(buffer: &mut GeometryBuffer, corners: [Vec2; 4], colour: Colour) {
    for (i, &corner) in corners.iter().enumerate() {
        buffer.push_segment((corner, colour), (corners[(i + 1) % 4], colour));
    }
}

/// Appends a square of half-side `distance` centred at the origin, then its inscribed diamond.
fn push_level(buffer: &mut GeometryBuffer, distance: f32, outline: Colour, diamond: Colour) {
    let d = distance;
    push_loop(
        buffer,
        [Vec2::new(-d, -d), Vec2::new(-d, d), Vec2::new(d, d), Vec2::new(d, -d)],
        outline,
    );
    push_loop(
        buffer,
        [Vec2::new(-d, 0.0), Vec2::new(0.0, d), Vec2::new(d, 0.0), Vec2::new(0.0, -d)],
        diamond,
    );
}

/// Black square over the full drawing area with a red diamond through its side midpoints
pub fn base() -> GeometryBuffer {
    let mut buffer = GeometryBuffer::with_capacity(Topology::Lines, LEVEL_VERTICES);
    push_level(&mut buffer, BORDER, BLACK, RED);
    buffer
}

/// Half-side of the innermost square, read from the last level in the buffer.
pub fn innermost_distance(buffer: &GeometryBuffer) -> Option<f32> {
    let start = buffer.vertex_count().checked_sub(LEVEL_VERTICES)?;
    let left_side = &buffer.positions()[start..start + 2];
    Some((left_side[1][1] - left_side[0][1]) / 2.0)
}

/// Appends the next nested square and diamond, inscribed in the innermost diamond.
///
/// The new square's half-side is a quarter of the innermost square's side, so its corners touch
/// the innermost diamond's sides. Its outline is grey at `shade * GREY_STEP`; the diamond keeps
/// full red with the same grey on green and blue.
pub fn nest(mut buffer: GeometryBuffer, shade: u32) -> GeometryBuffer {
    let Some(outer) = innermost_distance(&buffer) else {
        log::warn!("square nest called on a buffer without a complete level");
        return buffer;
    };

    let distance = outer / 2.0;
    let value = f64::from(shade) * GREY_STEP;
    let mut diamond = grey(value);
    diamond[0] = 1.0;

    push_level(&mut buffer, distance, grey(value), diamond);
    buffer
}

/// `level` nested squares with diamonds (`8 * level` segments)
pub fn generate(level: u32) -> GeometryBuffer {
    let buffer = (1..=refinement_passes(level)).fold(base(), nest);
    log::debug!("Nested squares level {}: {} segments", level, buffer.shape_count());
    buffer
}
