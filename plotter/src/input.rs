//! Input model: buttons, named keys, per-tick snapshots, and the gesture state.
//!
//! The input source (a window toolkit, a replay script, a test) translates its
//! raw events into an [`InputSnapshot`] once per frame. Keys arrive as named
//! [`Key`] symbols; which symbol triggers which action is decided by
//! [`KeyBindings`], never by raw key codes. [`GestureState`] is the active
//! gesture tracked by the engine between button-down and button-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::viewport::{PixelPoint, Point, ZoomDirection};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button. The only button that starts a gesture.
    Primary,
    /// Middle mouse button (wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// A named key symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    /// A printable character key, lowercase.
    Char(char),
    Control,
    Shift,
    Alt,
    Escape,
}

/// Scroll wheel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelDirection {
    Up,
    Down,
}

impl From<WheelDirection> for ZoomDirection {
    fn from(direction: WheelDirection) -> Self {
        match direction {
            WheelDirection::Up => ZoomDirection::In,
            WheelDirection::Down => ZoomDirection::Out,
        }
    }
}

/// A discrete input event delivered during one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    ButtonDown(Button),
    ButtonUp(Button),
    KeyDown(Key),
    Wheel(WheelDirection),
}

/// A press or release of one button, as seen in a tick's event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Down,
    Up,
}

/// Everything the engine sees of the input source for one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Discrete events since the previous tick, in arrival order.
    #[serde(default)]
    pub events: Vec<InputEvent>,
    /// Current pointer position in pixels.
    #[serde(default)]
    pub pointer: PixelPoint,
    /// Buttons currently held down.
    #[serde(default)]
    pub held_buttons: BTreeSet<Button>,
    /// Keys currently held down.
    #[serde(default)]
    pub held_keys: BTreeSet<Key>,
}

impl InputSnapshot {
    /// An empty snapshot with the pointer at `(x, y)`.
    #[must_use]
    pub fn at(x: i32, y: i32) -> Self {
        Self { pointer: PixelPoint::new(x, y), ..Self::default() }
    }

    #[must_use]
    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    #[must_use]
    pub fn holding(mut self, button: Button) -> Self {
        self.held_buttons.insert(button);
        self
    }

    #[must_use]
    pub fn holding_key(mut self, key: Key) -> Self {
        self.held_keys.insert(key);
        self
    }

    /// Down and up edges for `button`, in arrival order.
    pub fn button_edges(&self, button: Button) -> impl Iterator<Item = ButtonEdge> + '_ {
        self.events.iter().filter_map(move |e| match e {
            InputEvent::ButtonDown(b) if *b == button => Some(ButtonEdge::Down),
            InputEvent::ButtonUp(b) if *b == button => Some(ButtonEdge::Up),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_held(&self, button: Button) -> bool {
        self.held_buttons.contains(&button)
    }

    /// A key-down event for `key` arrived this tick.
    #[must_use]
    pub fn key_pressed(&self, key: &Key) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::KeyDown(k) if k == key))
    }

    /// `key` is held, or went down during this tick.
    #[must_use]
    pub fn key_down(&self, key: &Key) -> bool {
        self.held_keys.contains(key) || self.key_pressed(key)
    }

}

/// Maps named keys to engine actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Flips draw mode on each key-down.
    pub toggle_draw: Key,
    /// Held modifier half of the undo chord.
    pub undo_modifier: Key,
    /// Key half of the undo chord.
    pub undo_key: Key,
    /// Surfaces a quit command.
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_draw: Key::Char('d'),
            undo_modifier: Key::Control,
            undo_key: Key::Char('z'),
            quit: Key::Escape,
        }
    }
}

/// The gesture in progress between a primary button-down and button-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture; waiting for the next button-down.
    #[default]
    Idle,
    /// Dragging the view.
    Panning {
        /// Data-space pointer position at the previous tick, under the limits
        /// in effect after that tick's pan.
        last_pointer: Point,
    },
    /// Laying down a freehand stroke.
    Drawing,
}
