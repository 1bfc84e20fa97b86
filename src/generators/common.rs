/// Half-extent of the drawing area; leaves a small border inside [-1, 1].
pub const BORDER: f32 = 0.9;

/// Half-height of the equilateral base triangle with side `2 * BORDER`: `sqrt(1.8^2 - 0.9^2) / 2`.
pub const TRIANGLE_HEIGHT_F64: f64 = 0.779_422_863_405_994_8;
pub const TRIANGLE_HEIGHT: f32 = TRIANGLE_HEIGHT_F64 as f32;

/// Levels below 1 behave as level 1.
pub fn effective_level(level: u32) -> u32 {
    level.max(1)
}

/// Number of refinement passes applied on top of the base shape.
pub fn refinement_passes(level: u32) -> u32 {
    effective_level(level) - 1
}
