//! Keyboard shortcuts.
//!
//! Bindings are written as strings like `"ctrl+shift+s"` so the table
//! reads the same as the accelerators shown in the menu.

use std::collections::HashMap;
use std::fmt;

/// Something a shortcut can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    New,
    Open,
    Save,
    SaveAs,
    Undo,
    Redo,
}

/// A Ctrl-chord on a single character key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub ctrl: bool,
    pub shift: bool,
    /// Always stored lowercase.
    pub key: char,
}

impl Shortcut {
    pub fn new(ctrl: bool, shift: bool, key: char) -> Self {
        Self {
            ctrl,
            shift,
            key: key.to_ascii_lowercase(),
        }
    }

    /// Parses `"ctrl+s"`, `"Ctrl+Shift+S"` and the like.
    pub fn parse(s: &str) -> Option<Self> {
        let mut ctrl = false;
        let mut shift = false;
        let mut key = None;

        for part in s.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if key.is_none() => key = Some(c),
                        _ => return None,
                    }
                }
            }
        }

        key.map(|k| Self::new(ctrl, shift, k))
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

/// Maps shortcuts to commands.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Shortcut, EditorCommand>,
}

impl Keymap {
    /// An empty keymap.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Adds a binding. Unparsable shortcuts are ignored.
    pub fn bind(&mut self, shortcut: &str, command: EditorCommand) {
        match Shortcut::parse(shortcut) {
            Some(s) => {
                self.bindings.insert(s, command);
            }
            None => tracing::warn!("Ignoring invalid shortcut: {}", shortcut),
        }
    }

    pub fn lookup(&self, shortcut: Shortcut) -> Option<EditorCommand> {
        self.bindings.get(&shortcut).copied()
    }

    /// The shortcut bound to `command`, for menu accelerators.
    pub fn shortcut_for(&self, command: EditorCommand) -> Option<Shortcut> {
        self.bindings
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(s, _)| *s)
            .min_by_key(|s| (s.shift, s.key))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind("ctrl+n", EditorCommand::New);
        keymap.bind("ctrl+o", EditorCommand::Open);
        keymap.bind("ctrl+s", EditorCommand::Save);
        keymap.bind("ctrl+shift+s", EditorCommand::SaveAs);
        keymap.bind("ctrl+z", EditorCommand::Undo);
        keymap.bind("ctrl+y", EditorCommand::Redo);
        keymap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_parse() {
        let s = Shortcut::parse("Ctrl+Shift+S").unwrap();
        assert!(s.ctrl);
        assert!(s.shift);
        assert_eq!(s.key, 's');
        assert_eq!(s.to_string(), "Ctrl+Shift+S");

        assert!(Shortcut::parse("ctrl+").is_none());
        assert!(Shortcut::parse("ctrl+ab").is_none());
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.lookup(Shortcut::new(true, false, 'N')),
            Some(EditorCommand::New)
        );
        assert_eq!(
            keymap.lookup(Shortcut::new(true, true, 's')),
            Some(EditorCommand::SaveAs)
        );
        assert_eq!(
            keymap.lookup(Shortcut::new(true, false, 's')),
            Some(EditorCommand::Save)
        );
        assert_eq!(keymap.lookup(Shortcut::new(false, false, 's')), None);
    }

    #[test]
    fn test_accelerator_text() {
        let keymap = Keymap::default();
        let accel = keymap.shortcut_for(EditorCommand::Open).unwrap();
        assert_eq!(accel.to_string(), "Ctrl+O");
    }
}
