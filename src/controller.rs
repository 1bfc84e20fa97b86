use crate::generators::DrawSource;
use crate::scene::Scene;
use crate::types::GeometryBuffer;

/// Highest level reachable from the digit keys
pub const MAX_LEVEL: u8 = 8;

/// Abstract key identifier, decoupled from any windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    S,
    P,
    T,
    K,
    F,
    Digit(u8),
    Escape,
}

impl Key {
    /// Case-insensitive letters and the digits `0`-`9`
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            's' => Some(Key::S),
            'p' => Some(Key::P),
            't' => Some(Key::T),
            'k' => Some(Key::K),
            'f' => Some(Key::F),
            d => d.to_digit(10).map(|n| Key::Digit(n as u8)),
        }
    }

    pub fn scene(self) -> Option<Scene> {
        match self {
            Key::S => Some(Scene::Square),
            Key::P => Some(Scene::Spiral),
            Key::T => Some(Scene::Triangle),
            Key::K => Some(Scene::Koch),
            Key::F => Some(Scene::Fern),
            Key::Digit(_) | Key::Escape => None,
        }
    }
}

/// A scene at a level, to be generated and uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneRequest {
    pub scene: Scene,
    pub level: u32,
}

impl SceneRequest {
    pub fn build<D: DrawSource + ?Sized>(&self, draws: &mut D) -> GeometryBuffer {
        self.scene.build(self.level, draws)
    }
}

/// Tracks the active scene and level across key presses
#[derive(Debug, Clone)]
pub struct SceneController {
    scene: Scene,
    level: u32,
    quit: bool,
}

impl SceneController {
    pub fn new() -> Self {
        Self {
            scene: Scene::default(),
            level: 1,
            quit: false,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn current(&self) -> SceneRequest {
        SceneRequest {
            scene: self.scene,
            level: self.level,
        }
    }

    /// Applies a key press. Returns the scene to regenerate, or `None` if nothing changed.
    pub fn handle_key(&mut self, key: Key) -> Option<SceneRequest> {
        match key {
            Key::Escape => {
                self.quit = true;
                None
            }
            Key::Digit(n) if (1..=MAX_LEVEL).contains(&n) => {
                self.level = u32::from(n);
                log::debug!("{} level {}", self.scene.name(), self.level);
                Some(self.current())
            }
            Key::Digit(_) => None,
            _ => {
                let scene = key.scene()?;
                self.scene = scene;
                self.level = 1;
                log::debug!("Switched to {}", scene.name());
                Some(self.current())
            }
        }
    }
}

impl Default for SceneController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from_char('k'), Some(Key::K));
        assert_eq!(Key::from_char('F'), Some(Key::F));
        assert_eq!(Key::from_char('4'), Some(Key::Digit(4)));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn test_scene_keys_unique() {
        let keys = [Key::S, Key::P, Key::T, Key::K, Key::F];
        let scenes: HashSet<_> = keys.iter().filter_map(|k| k.scene()).collect();
        assert_eq!(scenes.len(), Scene::ALL.len());
    }

    #[test]
    fn test_starts_on_triangle() {
        let controller = SceneController::new();
        assert_eq!(controller.scene(), Scene::Triangle);
        assert_eq!(controller.level(), 1);
        assert!(!controller.should_quit());
    }

    #[test]
    fn test_escape_quits() {
        let mut controller = SceneController::new();
        assert_eq!(controller.handle_key(Key::Escape), None);
        assert!(controller.should_quit());
    }
}
