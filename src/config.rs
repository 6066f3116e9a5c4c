//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

use crate::api::DEFAULT_BASE_URL;
use crate::app::Theme;
use crate::app::keymap::Keymap;

#[derive(Parser, Debug, Clone)]
#[command(name = "user-admin-tui", version, about = "Browse, search and add users of a REST users endpoint")]
pub struct Cli {
    /// Base URL of the users API.
    #[arg(long, env = "USER_ADMIN_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Optional key=value theme file applied on top of the dark palette.
    #[arg(long, env = "USER_ADMIN_THEME")]
    pub theme: Option<PathBuf>,

    /// Optional `Action = KeySpec` keybindings file.
    #[arg(long, env = "USER_ADMIN_KEYBINDS")]
    pub keybinds: Option<PathBuf>,

    /// Where to write logs; the terminal itself belongs to the UI.
    #[arg(long, env = "USER_ADMIN_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Start with the light palette.
    #[arg(long)]
    pub light: bool,
}

impl Cli {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("user-admin-tui.log"))
    }

    /// Dark palette, with overrides from `--theme` when the file is readable.
    pub fn dark_theme(&self) -> Theme {
        let base = Theme::dark();
        match &self.theme {
            Some(path) => Theme::from_file(&path.to_string_lossy(), base).unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "theme file unreadable; using defaults");
                base
            }),
            None => base,
        }
    }

    pub fn keymap(&self) -> Keymap {
        match &self.keybinds {
            Some(path) => Keymap::from_file(&path.to_string_lossy()).unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "keybinds file unreadable; using defaults");
                Keymap::default()
            }),
            None => Keymap::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_placeholder_api() {
        let cli = Cli::try_parse_from(["user-admin-tui"]).unwrap();
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert!(!cli.light);
        assert!(cli.log_path().ends_with("user-admin-tui.log"));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "user-admin-tui",
            "--base-url",
            "http://localhost:9000",
            "--light",
            "--log-file",
            "/tmp/x.log",
        ])
        .unwrap();
        assert_eq!(cli.base_url, "http://localhost:9000");
        assert!(cli.light);
        assert_eq!(cli.log_path(), PathBuf::from("/tmp/x.log"));
    }

    #[test]
    fn missing_theme_file_falls_back() {
        let cli = Cli::try_parse_from(["user-admin-tui", "--theme", "/nonexistent/theme.conf"]).unwrap();
        assert_eq!(cli.dark_theme().title, Theme::dark().title);
    }
}
