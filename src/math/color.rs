pub type Colour = [f32; 3];

pub const BLACK: Colour = [0.0, 0.0, 0.0];
pub const RED: Colour = [1.0, 0.0, 0.0];
pub const GREEN: Colour = [0.0, 1.0, 0.0];
pub const BLUE: Colour = [0.0, 0.0, 1.0];

/// Adds `shade * step` to every channel. Not clamped: deep levels leave [0, 1].
pub fn shade_offset(colour: Colour, shade: u32, step: f64) -> Colour {
    let offset = f64::from(shade) * step;
    colour.map(|channel| (f64::from(channel) + offset) as f32)
}

/// Weighted per-channel blend `a * wa + b * wb`
pub fn blend(a: Colour, b: Colour, wa: f64, wb: f64) -> Colour {
    [0usize, 1, 2].map(|i| (f64::from(a[i]) * wa + f64::from(b[i]) * wb) as f32)
}

pub fn grey(value: f64) -> Colour {
    [value as f32; 3]
}
