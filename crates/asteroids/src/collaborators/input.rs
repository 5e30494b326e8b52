//! Keyboard and touch input
//!
//! Key names from [`ControlsConfig`] are parsed once into [`KeyBindings`];
//! the held-key state lives in the engine [`InputManager`]. On-screen touch
//! buttons map straight onto intents and combine with the keyboard.

use rust_engine::input::{InputManager, KeyCode, KeyParseError};

use super::{InputSource, Intents};
use crate::config::ControlsConfig;

/// Keys bound to each intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    /// Thrust keys
    pub thrust: Vec<KeyCode>,
    /// Left turn keys
    pub turn_left: Vec<KeyCode>,
    /// Right turn keys
    pub turn_right: Vec<KeyCode>,
    /// Fire keys
    pub fire: Vec<KeyCode>,
}

impl KeyBindings {
    /// Parse bindings from configuration
    pub fn from_config(controls: &ControlsConfig) -> Result<Self, KeyParseError> {
        fn parse(names: &[String]) -> Result<Vec<KeyCode>, KeyParseError> {
            names.iter().map(|name| name.parse()).collect()
        }

        Ok(Self {
            thrust: parse(&controls.thrust)?,
            turn_left: parse(&controls.turn_left)?,
            turn_right: parse(&controls.turn_right)?,
            fire: parse(&controls.fire)?,
        })
    }

    /// Keys bound to a single intent flag
    pub fn keys_for(&self, intent: Intents) -> &[KeyCode] {
        if intent == Intents::THRUST {
            &self.thrust
        } else if intent == Intents::TURN_LEFT {
            &self.turn_left
        } else if intent == Intents::TURN_RIGHT {
            &self.turn_right
        } else if intent == Intents::FIRE {
            &self.fire
        } else {
            &[]
        }
    }
}

/// On-screen buttons of the touch layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    /// Rotate left
    Left,
    /// Rotate right
    Right,
    /// Thrust
    Up,
    /// Fire
    Shoot,
}

impl TouchButton {
    /// Intent triggered by the button
    pub fn intent(self) -> Intents {
        match self {
            TouchButton::Left => Intents::TURN_LEFT,
            TouchButton::Right => Intents::TURN_RIGHT,
            TouchButton::Up => Intents::THRUST,
            TouchButton::Shoot => Intents::FIRE,
        }
    }
}

/// Input source combining bound keys and touch buttons
#[derive(Debug)]
pub struct KeyboardInput {
    bindings: KeyBindings,
    keys: InputManager,
    touch: Intents,
}

impl KeyboardInput {
    /// Create an input source with the given bindings
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys: InputManager::new(),
            touch: Intents::empty(),
        }
    }

    /// Create an input source from configuration
    pub fn from_config(controls: &ControlsConfig) -> Result<Self, KeyParseError> {
        Ok(Self::new(KeyBindings::from_config(controls)?))
    }

    /// Active bindings
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Record a key press or release
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        self.keys.handle_key_input(key, pressed);
    }

    /// Record a touch start or end
    pub fn handle_touch(&mut self, button: TouchButton, pressed: bool) {
        self.touch.set(button.intent(), pressed);
    }

    /// Release every key and touch, e.g. on focus loss
    pub fn release_all(&mut self) {
        self.keys.release_all();
        self.touch = Intents::empty();
    }
}

impl InputSource for KeyboardInput {
    fn intents(&self) -> Intents {
        let mut intents = self.touch;
        for intent in [Intents::TURN_LEFT, Intents::TURN_RIGHT, Intents::THRUST, Intents::FIRE] {
            if self.keys.any_down(self.bindings.keys_for(intent)) {
                intents |= intent;
            }
        }
        intents
    }
}
