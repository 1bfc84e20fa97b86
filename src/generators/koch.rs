use std::f32::consts::FRAC_PI_3;

use glam::Vec2;

use super::common::{refinement_passes, BORDER, TRIANGLE_HEIGHT, TRIANGLE_HEIGHT_F64};
use crate::math::{blend, BLUE, GREEN, RED};
use crate::types::{GeometryBuffer, Topology};

/// The snowflake's base triangle is pulled in from the border so the bumps stay on screen.
const INSET: f32 = 0.2;
const BASE_Y: f32 = (-TRIANGLE_HEIGHT_F64 + 0.34641) as f32;

/// Three independent segments: apex to left, left to right, right to apex.
/// Endpoints carry the colour of the corner they sit on.
pub fn base() -> GeometryBuffer {
    let apex = (Vec2::new(0.0, TRIANGLE_HEIGHT), RED);
    let left = (Vec2::new(-(BORDER - INSET), BASE_Y), GREEN);
    let right = (Vec2::new(BORDER - INSET, BASE_Y), BLUE);

    let mut buffer = GeometryBuffer::with_capacity(Topology::Lines, 6);
    buffer.push_segment(apex, left);
    buffer.push_segment(left, right);
    buffer.push_segment(right, apex);
    buffer
}

/// One Koch pass. Each segment `a -> b` becomes `a, p1, peak, p2, b`, where `p1`/`p2` sit at
/// one and two thirds and `peak` rises from `p1` at -60 degrees to the segment's heading.
/// Inserted points blend the endpoint colours 2:1, 1:1 and 1:2.
pub fn subdivide(buffer: GeometryBuffer) -> GeometryBuffer {
    let mut next = GeometryBuffer::with_capacity(Topology::Lines, buffer.vertex_count() * 4);

    for (points, colours) in buffer.shapes() {
        let a = Vec2::from_array(points[0]);
        let b = Vec2::from_array(points[1]);
        let (ca, cb) = (colours[0], colours[1]);

        let delta = b - a;
        let distance = delta.length();
        let angle = delta.y.atan2(delta.x);

        let p1 = (2.0 * a + b) / 3.0;
        let p2 = (2.0 * b + a) / 3.0;
        let peak = p1 + distance / 3.0 * Vec2::from_angle(angle - FRAC_PI_3);

        let c1 = blend(ca, cb, 2.0 / 3.0, 1.0 / 3.0);
        let c_peak = blend(ca, cb, 0.5, 0.5);
        let c2 = blend(ca, cb, 1.0 / 3.0, 2.0 / 3.0);

        next.push_segment((a, ca), (p1, c1));
        next.push_segment((p1, c1), (peak, c_peak));
        next.push_segment((peak, c_peak), (p2, c2));
        next.push_segment((p2, c2), (b, cb));
    }

    next
}

/// Koch snowflake outline with `level - 1` passes (`3 * 4^(level - 1)` segments)
pub fn generate(level: u32) -> GeometryBuffer {
    let buffer = (0..refinement_passes(level)).fold(base(), |buffer, _| subdivide(buffer));
    log::debug!("Koch snowflake level {}: {} segments", level, buffer.shape_count());
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_is_closed_triangle() {
        let buffer = base();
        let p = buffer.positions();
        assert_eq!(buffer.shape_count(), 3);
        assert_eq!(p[1], p[2]);
        assert_eq!(p[3], p[4]);
        assert_eq!(p[5], p[0]);
    }

    #[test]
    fn test_base_is_equilateral() {
        let p: Vec<Vec2> = base().positions().iter().copied().map(Vec2::from_array).collect();
        let sides = [p[0].distance(p[1]), p[2].distance(p[3]), p[4].distance(p[5])];
        for side in sides {
            assert!((side - 1.4).abs() < 1e-4, "side {}", side);
        }
    }

    #[test]
    fn test_peak_points_outward() {
        // The base edge runs left to right along the bottom, so its bump points down.
        let buffer = subdivide(base());
        let peak = buffer.positions()[11];
        assert!(peak[1] < BASE_Y);
        assert!(peak[0].abs() < 1e-5);
    }

    #[test]
    fn test_subdivide_endpoint_colours() {
        let buffer = subdivide(base());
        let c = buffer.colours();
        assert_eq!(c[0], RED);
        assert_eq!(c[7], GREEN);
        assert_eq!(c[1], c[2]);
        assert_eq!(c[3], c[4]);
        assert_eq!(c[5], c[6]);
        assert_eq!(c[3], [0.5, 0.5, 0.0]);
    }
}
