mod color;

pub use color::{blend, grey, shade_offset, Colour, BLACK, BLUE, GREEN, RED};
