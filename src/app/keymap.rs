//! Keybinding configuration: defaults, optional `keybinds.conf` overrides, and
//! key-to-action resolution for normal mode.
//!
//! Search input and the add-user form consume raw keys; only normal mode goes
//! through the keymap.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Semantic actions available in normal mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Show the keybindings reference.
    OpenHelp,
    /// Focus the search input.
    StartSearch,
    /// Open the add-user form.
    NewUser,
    /// Re-fetch the users list.
    Reload,
    /// Switch between dark and light palettes.
    ToggleTheme,
    /// Hide the toast, or clear the search when no toast is shown.
    Dismiss,
    MoveUp,
    MoveDown,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    Ignore,
}

#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let mut bindings = HashMap::new();
        bindings.insert((M::NONE, Char('q')), KeyAction::Quit);
        bindings.insert((M::CONTROL, Char('c')), KeyAction::Quit);
        bindings.insert((M::NONE, Char('?')), KeyAction::OpenHelp);
        bindings.insert((M::NONE, Char('/')), KeyAction::StartSearch);
        bindings.insert((M::NONE, Char('n')), KeyAction::NewUser);
        bindings.insert((M::NONE, Char('a')), KeyAction::NewUser);
        bindings.insert((M::NONE, Char('r')), KeyAction::Reload);
        bindings.insert((M::NONE, Char('t')), KeyAction::ToggleTheme);
        bindings.insert((M::NONE, Esc), KeyAction::Dismiss);

        bindings.insert((M::NONE, Up), KeyAction::MoveUp);
        bindings.insert((M::NONE, Down), KeyAction::MoveDown);
        bindings.insert((M::NONE, Char('k')), KeyAction::MoveUp);
        bindings.insert((M::NONE, Char('j')), KeyAction::MoveDown);
        bindings.insert((M::NONE, Left), KeyAction::PrevPage);
        bindings.insert((M::NONE, Right), KeyAction::NextPage);
        bindings.insert((M::NONE, Char('h')), KeyAction::PrevPage);
        bindings.insert((M::NONE, Char('l')), KeyAction::NextPage);
        bindings.insert((M::NONE, PageUp), KeyAction::PrevPage);
        bindings.insert((M::NONE, PageDown), KeyAction::NextPage);
        bindings.insert((M::NONE, Home), KeyAction::FirstPage);
        bindings.insert((M::NONE, End), KeyAction::LastPage);
        Self { bindings }
    }

    /// Load overrides from `path` on top of the defaults.
    ///
    /// Lines are `<Action> = <KeySpec>`; blank lines, `#` comments and
    /// unparseable entries are skipped. Returns `None` if the file cannot be read.
    pub fn from_file(path: &str) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::from_str_overrides(&contents))
    }

    pub fn from_str_overrides(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let lhs = parts.next().map(|s| s.trim()).unwrap_or("");
            let rhs = parts.next().map(|s| s.trim()).unwrap_or("");
            if let (Some(action), Some(key)) = (parse_action(lhs), parse_key(rhs)) {
                map.bindings.insert(key, action);
            }
        }
        map
    }

    /// Some terminals report shifted characters such as `?` with SHIFT set;
    /// those fall back to the unmodified binding.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        if let Some(a) = self.bindings.get(&(key.modifiers, key.code)) {
            return Some(*a);
        }
        match key.code {
            KeyCode::Char(_) if key.modifiers == KeyModifiers::SHIFT => {
                self.bindings.get(&(KeyModifiers::NONE, key.code)).copied()
            }
            _ => None,
        }
    }

    pub fn all_bindings(&self) -> Vec<((KeyModifiers, KeyCode), KeyAction)> {
        self.bindings.iter().map(|(k, v)| (*k, *v)).collect()
    }

    /// Human-readable key spec such as "Ctrl+c", "PageDown" or "/".
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Enter => "Enter".to_string(),
            Esc => "Esc".to_string(),
            Tab => "Tab".to_string(),
            Up => "Up".to_string(),
            Down => "Down".to_string(),
            Left => "Left".to_string(),
            Right => "Right".to_string(),
            PageUp => "PageUp".to_string(),
            PageDown => "PageDown".to_string(),
            Home => "Home".to_string(),
            End => "End".to_string(),
            Char(c) => c.to_string(),
            _ => format!("{:?}", code),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", base)
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let mut rest = spec.trim();
    let mut mods = KeyModifiers::NONE;
    if let Some(after) = rest.strip_prefix("Ctrl+") {
        mods |= KeyModifiers::CONTROL;
        rest = after;
    }
    let code = match rest {
        "Enter" => Enter,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        "Home" => Home,
        "End" => End,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

fn parse_action(s: &str) -> Option<KeyAction> {
    match s.trim() {
        "Quit" => Some(KeyAction::Quit),
        "OpenHelp" => Some(KeyAction::OpenHelp),
        "StartSearch" => Some(KeyAction::StartSearch),
        "NewUser" => Some(KeyAction::NewUser),
        "Reload" => Some(KeyAction::Reload),
        "ToggleTheme" => Some(KeyAction::ToggleTheme),
        "Dismiss" => Some(KeyAction::Dismiss),
        "MoveUp" => Some(KeyAction::MoveUp),
        "MoveDown" => Some(KeyAction::MoveDown),
        "PrevPage" => Some(KeyAction::PrevPage),
        "NextPage" => Some(KeyAction::NextPage),
        "FirstPage" => Some(KeyAction::FirstPage),
        "LastPage" => Some(KeyAction::LastPage),
        "Ignore" => Some(KeyAction::Ignore),
        _ => None,
    }
}

pub fn format_action(a: KeyAction) -> &'static str {
    match a {
        KeyAction::Quit => "Quit",
        KeyAction::OpenHelp => "Help",
        KeyAction::StartSearch => "Search",
        KeyAction::NewUser => "Add new user",
        KeyAction::Reload => "Reload",
        KeyAction::ToggleTheme => "Toggle theme",
        KeyAction::Dismiss => "Dismiss / clear search",
        KeyAction::MoveUp => "Move up",
        KeyAction::MoveDown => "Move down",
        KeyAction::PrevPage => "Previous page",
        KeyAction::NextPage => "Next page",
        KeyAction::FirstPage => "First page",
        KeyAction::LastPage => "Last page",
        KeyAction::Ignore => "Ignore",
    }
}
