use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 1;
pub(super) const MOD_ALT: u8 = 1 << 1;
pub(super) const MOD_SHIFT: u8 = 1 << 2;
pub(super) const MOD_SUPER: u8 = 1 << 3;

/// Bit for each modifier, in display order.
const MODIFIER_BITS: [(Modifier, u8); 4] = [
    (Modifier::Ctrl, MOD_CTRL),
    (Modifier::Alt, MOD_ALT),
    (Modifier::Shift, MOD_SHIFT),
    (Modifier::Super, MOD_SUPER),
];

fn bit(modifier: &Modifier) -> u8 {
    MODIFIER_BITS
        .iter()
        .find(|(m, _)| m == modifier)
        .map_or(0, |(_, b)| *b)
}

/// Lookup key for the shortcut table: a modifier bitmask plus the
/// normalized key name, so configured bindings and live key presses
/// compare equal without sorting modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub mods: u8,
    /// e.g. "T", "Left", "F11".
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().fold(0, |acc, m| acc | bit(m)),
            key: kb.key.clone(),
        }
    }

    /// A key press from the window or from page and chrome content.
    ///
    /// `key` may be a raw DOM or winit key name; it is normalized here.
    /// `super_key` is Cmd on macOS and the DOM `metaKey` elsewhere.
    pub fn from_event(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: &str) -> Self {
        let held = [ctrl, alt, shift, super_key];
        let mods = MODIFIER_BITS
            .iter()
            .zip(held)
            .filter(|(_, down)| *down)
            .fold(0, |acc, ((_, b), _)| acc | b);
        Self {
            mods,
            key: crate::keys::normalize_event_key(key),
        }
    }

    pub(super) fn to_keybind(&self) -> KeyBind {
        KeyBind {
            modifiers: MODIFIER_BITS
                .iter()
                .filter(|(_, b)| self.mods & b != 0)
                .map(|(m, _)| *m)
                .collect(),
            key: self.key.clone(),
        }
    }
}
