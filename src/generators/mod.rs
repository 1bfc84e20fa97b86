mod common;
pub mod fern;
pub mod koch;
pub mod spiral;
pub mod square;
pub mod triangle;

pub use common::{effective_level, refinement_passes, BORDER, TRIANGLE_HEIGHT};
pub use fern::{DrawSource, FernBranch, RecordingDraws, RngDraws, ScriptedDraws};
