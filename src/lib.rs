pub mod cli;
pub mod controller;
pub mod export;
pub mod generators;
pub mod math;
pub mod scene;
pub mod types;

pub use controller::{Key, SceneController, SceneRequest};
pub use scene::{fit_to_display, Scene};
pub use types::{GeometryBuffer, Topology, Vertex};
