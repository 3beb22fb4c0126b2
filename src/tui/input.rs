// Key debounce for action keys
//
// Many terminals only report key presses, never releases, and auto-repeat a
// held key as a stream of presses. Action keys (summarize, copy, quit) must
// fire once per physical press; scroll keys may repeat after a delay.
// Text typed into the composer bypasses this handler entirely.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of the same action key
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Press events closer together than this are terminal auto-repeat; a longer
/// gap means the key was let go and pressed again
const TAP_GAP: Duration = Duration::from_millis(100);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger once per press; repeats inside the debounce window are dropped
    Action,

    /// Trigger on press, then repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Line-by-line scrolling
    pub fn scroll() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// Page-wise scrolling
    pub fn page() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
    last_seen: Option<Instant>,
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Action);
        let state = self.key_states.entry(key).or_default();
        let previous = state.last_seen.replace(now);

        let (Some(press_started), Some(last), Some(previous)) =
            (state.press_started, state.last_triggered, previous)
        else {
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        };

        let fire = match behavior {
            KeyBehavior::Action => now.duration_since(last) >= ACTION_DEBOUNCE,
            // Without release events a fresh tap only shows up as a gap
            KeyBehavior::Repeatable { .. } if now.duration_since(previous) > TAP_GAP => {
                state.press_started = Some(now);
                true
            }
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_started) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };

        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.key_states.remove(&key);
    }

    /// Default configuration for precis' key map
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
            ],
            KeyBehavior::scroll(),
        );

        handler.configure_keys(
            &[
                KeyCode::PageUp,
                KeyCode::PageDown,
                KeyCode::Home,
                KeyCode::End,
            ],
            KeyBehavior::page(),
        );

        // Everything else defaults to Action; listed for clarity
        handler.configure_keys(
            &[
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::F(1),
                KeyCode::F(5),
                KeyCode::Char('s'),
                KeyCode::Char('y'),
                KeyCode::Char('l'),
                KeyCode::Char('q'),
                KeyCode::Char('c'),
            ],
            KeyBehavior::Action,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
