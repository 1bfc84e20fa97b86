use fractal_geometry::generators::koch;
use glam::Vec2;

fn segments(buffer: &fractal_geometry::GeometryBuffer) -> Vec<(Vec2, Vec2)> {
    buffer
        .shapes()
        .map(|(points, _)| (Vec2::from_array(points[0]), Vec2::from_array(points[1])))
        .collect()
}

#[cfg(test)]
mod koch_tests {
    use super::*;

    #[test]
    fn test_koch_segment_count() {
        for depth in 1..=8u32 {
            let buffer = koch::generate(depth);
            assert_eq!(buffer.shape_count(), 3 * 4usize.pow(depth - 1), "depth {}", depth);
        }
    }

    #[test]
    fn test_koch_each_pass_multiplies_segments() {
        let mut previous = koch::generate(1).shape_count();
        for depth in 2..=7 {
            let current = koch::generate(depth).shape_count();
            assert_eq!(current, previous * 4);
            previous = current;
        }
    }

    #[test]
    fn test_koch_colour_ratio() {
        for depth in 1..=8 {
            let buffer = koch::generate(depth);
            assert_eq!(buffer.positions().len(), buffer.colours().len());
            assert_eq!(buffer.flat_positions().len() * 3, buffer.flat_colours().len() * 2);
            assert_eq!(buffer.vertex_count() % 2, 0);
        }
    }

    #[test]
    fn test_koch_outline_is_closed_polyline() {
        for depth in 1..=5 {
            let segs = segments(&koch::generate(depth));
            for pair in segs.windows(2) {
                assert_eq!(pair[0].1, pair[1].0);
            }
            assert_eq!(segs.last().unwrap().1, segs[0].0);
        }
    }

    #[test]
    fn test_koch_sub_segments_equal_thirds() {
        let base = segments(&koch::base());
        let refined = segments(&koch::generate(2));

        for (i, (a, b)) in base.iter().enumerate() {
            let third = a.distance(*b) / 3.0;
            for (from, to) in &refined[i * 4..i * 4 + 4] {
                assert!((from.distance(*to) - third).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_koch_keeps_original_endpoints() {
        let base = segments(&koch::base());
        let refined = segments(&koch::generate(2));

        for (i, (a, b)) in base.iter().enumerate() {
            assert_eq!(refined[i * 4].0, *a);
            assert_eq!(refined[i * 4 + 3].1, *b);
        }
    }

    #[test]
    fn test_koch_blend_ratios() {
        let buffer = koch::generate(2);
        // Left-to-right base edge: green to blue.
        let c = &buffer.colours()[8..16];
        assert_eq!(c[0], [0.0, 1.0, 0.0]);
        assert!((c[1][1] - 2.0 / 3.0).abs() < 1e-6 && (c[1][2] - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(c[3], [0.0, 0.5, 0.5]);
        assert!((c[5][1] - 1.0 / 3.0).abs() < 1e-6 && (c[5][2] - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(c[7], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_koch_stays_on_screen() {
        for &[x, y] in koch::generate(6).positions() {
            assert!(x.abs() < 1.0 && y.abs() < 1.0, "({}, {})", x, y);
        }
    }

    #[test]
    fn test_koch_low_levels_are_base() {
        assert_eq!(koch::generate(0), koch::base());
        assert_eq!(koch::generate(1), koch::base());
    }

    #[test]
    fn test_koch_deterministic() {
        assert_eq!(koch::generate(5), koch::generate(5));
    }
}
