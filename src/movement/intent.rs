//! Movement domain: held keys, intent vector and edge detection.

use bevy::prelude::*;

/// Logical controls the physics core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Up,
    Down,
    Left,
    Right,
    Boost,
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: ControlKey,
    pub action: KeyAction,
}

impl InputEvent {
    pub fn pressed(key: ControlKey) -> Self {
        Self {
            key,
            action: KeyAction::Pressed,
        }
    }

    pub fn released(key: ControlKey) -> Self {
        Self {
            key,
            action: KeyAction::Released,
        }
    }
}

/// One-shot triggers produced from press events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEvent {
    /// Boost key went down.
    Boost,
    /// A direction key went down while boost was held.
    Sprint,
    /// Halt key went down.
    Halt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
    pub halt: bool,
}

impl HeldKeys {
    pub fn is_held(&self, key: ControlKey) -> bool {
        match key {
            ControlKey::Up => self.up,
            ControlKey::Down => self.down,
            ControlKey::Left => self.left,
            ControlKey::Right => self.right,
            ControlKey::Boost => self.boost,
            ControlKey::Halt => self.halt,
        }
    }

    pub fn set(&mut self, key: ControlKey, held: bool) {
        match key {
            ControlKey::Up => self.up = held,
            ControlKey::Down => self.down = held,
            ControlKey::Left => self.left = held,
            ControlKey::Right => self.right = held,
            ControlKey::Boost => self.boost = held,
            ControlKey::Halt => self.halt = held,
        }
    }
}

/// Normalized movement direction (y-down) plus the raw direction flags.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intent {
    pub dir: Vec2,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Intent {
    pub fn from_held(held: &HeldKeys) -> Self {
        let mut raw = Vec2::ZERO;
        if held.left {
            raw.x -= 1.0;
        }
        if held.right {
            raw.x += 1.0;
        }
        if held.up {
            raw.y -= 1.0;
        }
        if held.down {
            raw.y += 1.0;
        }

        let magnitude = raw.length();
        let magnitude = if magnitude > 0.0 { magnitude } else { 1.0 };

        Self {
            dir: raw / magnitude,
            left: held.left,
            right: held.right,
            up: held.up,
            down: held.down,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dir == Vec2::ZERO
    }

    pub fn horizontal(&self) -> bool {
        self.left || self.right
    }

    pub fn diagonal(&self) -> bool {
        self.horizontal() && (self.up || self.down)
    }
}

/// Re-arm latch for one trigger class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Latch {
    armed: bool,
}

impl Default for Latch {
    fn default() -> Self {
        Self { armed: true }
    }
}

impl Latch {
    fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    fn rearm(&mut self) {
        self.armed = true;
    }
}

/// Tracks the held set and turns press/release events into edges.
///
/// A press of a key that is already held is an auto-repeat and ignored.
/// The sprint latch re-arms once boost and the direction that fired it are
/// both up again.
#[derive(Debug, Clone)]
pub struct InputTracker {
    held: HeldKeys,
    boost_latch: Latch,
    halt_latch: Latch,
    sprint_fired_by: Option<ControlKey>,
    last_move_dir: Vec2,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self {
            held: HeldKeys::default(),
            boost_latch: Latch::default(),
            halt_latch: Latch::default(),
            sprint_fired_by: None,
            last_move_dir: Vec2::X,
        }
    }
}

impl InputTracker {
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn intent(&self) -> Intent {
        Intent::from_held(&self.held)
    }

    /// Last non-zero direction the player asked for.
    pub fn last_move_dir(&self) -> Vec2 {
        self.last_move_dir
    }

    pub fn sprint_armed(&self) -> bool {
        self.sprint_fired_by.is_none()
    }

    pub fn apply(&mut self, event: InputEvent) -> Option<EdgeEvent> {
        match event.action {
            KeyAction::Pressed => self.press(event.key),
            KeyAction::Released => {
                self.release(event.key);
                None
            }
        }
    }

    fn press(&mut self, key: ControlKey) -> Option<EdgeEvent> {
        if self.held.is_held(key) {
            return None;
        }
        self.held.set(key, true);

        match key {
            ControlKey::Boost => self.boost_latch.fire().then_some(EdgeEvent::Boost),
            ControlKey::Halt => self.halt_latch.fire().then_some(EdgeEvent::Halt),
            direction => {
                let intent = self.intent();
                if !intent.is_zero() {
                    self.last_move_dir = intent.dir;
                }
                if self.held.boost && self.sprint_armed() {
                    self.sprint_fired_by = Some(direction);
                    Some(EdgeEvent::Sprint)
                } else {
                    None
                }
            }
        }
    }

    fn release(&mut self, key: ControlKey) {
        self.held.set(key, false);

        match key {
            ControlKey::Boost => self.boost_latch.rearm(),
            ControlKey::Halt => self.halt_latch.rearm(),
            _ => {}
        }

        if let Some(direction) = self.sprint_fired_by {
            if !self.held.boost && !self.held.is_held(direction) {
                self.sprint_fired_by = None;
            }
        }
    }
}
