use glam::Vec2;

use super::common::{refinement_passes, BORDER, TRIANGLE_HEIGHT};
use crate::math::{shade_offset, Colour, BLUE, GREEN, RED};
use crate::types::{GeometryBuffer, Topology};

/// Per-level colour drift of the left and right children
pub const SHADE_STEP: f64 = 0.04;

/// Equilateral base triangle: red apex, green left corner, blue right corner
pub fn base() -> GeometryBuffer {
    let mut buffer = GeometryBuffer::with_capacity(Topology::Triangles, 3);
    buffer.push([0.0, TRIANGLE_HEIGHT], RED);
    buffer.push([-BORDER, -TRIANGLE_HEIGHT], GREEN);
    buffer.push([BORDER, -TRIANGLE_HEIGHT], BLUE);
    buffer
}

fn push_triangle(buffer: &mut GeometryBuffer, corners: [Vec2; 3], colour: Colour) {
    for corner in corners {
        buffer.push_point(corner, colour);
    }
}

/// One Sierpinski pass: every triangle becomes its three corner triangles, the centre is dropped.
///
/// Triangles are upright with a flat base (`v1.y == v2.y`, apex above the base midpoint), which
/// every pass preserves. The top child takes the apex colour, the left child the left colour
/// darkened by `shade * SHADE_STEP`, the right child the right colour lightened by the same amount.
pub fn subdivide(buffer: GeometryBuffer, shade: u32) -> GeometryBuffer {
    let mut next = GeometryBuffer::with_capacity(Topology::Triangles, buffer.vertex_count() * 3);

    for (corners, colours) in buffer.shapes() {
        let [apex, left, right] = [corners[0], corners[1], corners[2]].map(Vec2::from_array);

        let left_mid = (left + apex) / 2.0;
        let right_mid = Vec2::new((right.x + apex.x) / 2.0, left_mid.y);
        let base_mid = Vec2::new(apex.x, left.y);

        push_triangle(&mut next, [apex, left_mid, right_mid], colours[0]);
        push_triangle(
            &mut next,
            [left_mid, left, base_mid],
            shade_offset(colours[1], shade, -SHADE_STEP),
        );
        push_triangle(
            &mut next,
            [right_mid, base_mid, right],
            shade_offset(colours[2], shade, SHADE_STEP),
        );
    }

    next
}

/// Sierpinski triangle with `level - 1` refinement passes (`3^(level - 1)` triangles)
pub fn generate(level: u32) -> GeometryBuffer {
    let buffer = (1..=refinement_passes(level)).fold(base(), subdivide);
    log::debug!("Sierpinski triangle level {}: {} triangles", level, buffer.shape_count());
    buffer
}
