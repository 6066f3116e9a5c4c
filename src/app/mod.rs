//! Application state types and entry glue.
//!
//! Defines enums and structs that model the TUI state, the commands the state
//! asks the runtime to perform, and the events that come back from the API.
//!
pub mod keymap;
pub mod paging;
pub mod tasks;
pub mod toast;
pub mod update;

use ratatui::style::Color;

use crate::api::{Company, NewUser, User};
use crate::error::FetchError;
use keymap::Keymap;
use paging::Pagination;
use toast::ToastState;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Modal,
}

/// Color palette for theming the TUI.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub error: Color,
}

impl Theme {
    /// Catppuccin Mocha.
    pub fn dark() -> Self {
        // Palette reference: https://github.com/catppuccin/catppuccin
        Self {
            text: Color::Rgb(0xcd, 0xd6, 0xf4),         // text
            muted: Color::Rgb(0x7f, 0x84, 0x9c),        // overlay1
            title: Color::Rgb(0xcb, 0xa6, 0xf7),        // mauve
            border: Color::Rgb(0x58, 0x5b, 0x70),       // surface2
            header_bg: Color::Rgb(0x31, 0x32, 0x44),    // surface0
            header_fg: Color::Rgb(0xb4, 0xbe, 0xfe),    // lavender
            status_bg: Color::Rgb(0x45, 0x47, 0x5a),    // surface1
            status_fg: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            highlight_fg: Color::Rgb(0xf9, 0xe2, 0xaf), // yellow
            highlight_bg: Color::Rgb(0x45, 0x47, 0x5a), // surface1
            success: Color::Rgb(0xa6, 0xe3, 0xa1),      // green
            error: Color::Rgb(0xf3, 0x8b, 0xa8),        // red
        }
    }

    /// Catppuccin Latte.
    pub fn light() -> Self {
        Self {
            text: Color::Rgb(0x4c, 0x4f, 0x69),         // text
            muted: Color::Rgb(0x8c, 0x8f, 0xa1),        // overlay1
            title: Color::Rgb(0x88, 0x39, 0xef),        // mauve
            border: Color::Rgb(0xac, 0xb0, 0xbe),       // surface2
            header_bg: Color::Rgb(0xcc, 0xd0, 0xda),    // surface0
            header_fg: Color::Rgb(0x72, 0x87, 0xfd),    // lavender
            status_bg: Color::Rgb(0xbc, 0xc0, 0xcc),    // surface1
            status_fg: Color::Rgb(0x4c, 0x4f, 0x69),    // text
            highlight_fg: Color::Rgb(0xdf, 0x8e, 0x1d), // yellow
            highlight_bg: Color::Rgb(0xbc, 0xc0, 0xcc), // surface1
            success: Color::Rgb(0x40, 0xa0, 0x2b),      // green
            error: Color::Rgb(0xd2, 0x0f, 0x39),        // red
        }
    }

    /// Load a palette from a key=value file on top of `base`.
    ///
    /// Unknown keys and unparseable colors are skipped. Returns `None` if the
    /// file cannot be read.
    pub fn from_file(path: &str, base: Theme) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::from_str_overrides(&contents, base))
    }

    pub fn from_str_overrides(contents: &str, base: Theme) -> Self {
        let mut theme = base;
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut parts = line.splitn(2, '=');
            let key = parts.next().map(|s| s.trim()).unwrap_or("");
            let val = parts.next().map(|s| s.trim()).unwrap_or("");
            let Some(color) = Self::parse_color(val) else { continue };
            match key {
                "text" => theme.text = color,
                "muted" => theme.muted = color,
                "title" => theme.title = color,
                "border" => theme.border = color,
                "header_bg" => theme.header_bg = color,
                "header_fg" => theme.header_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "highlight_fg" => theme.highlight_fg = color,
                "highlight_bg" => theme.highlight_bg = color,
                "success" => theme.success = color,
                "error" => theme.error = color,
                _ => {}
            }
        }
        theme
    }

    /// Parse a color from hex ("#RRGGBB" or "RRGGBB") or "reset".
    fn parse_color(s: &str) -> Option<Color> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "reset" {
            return Some(Color::Reset);
        }
        let hex = lower.strip_prefix('#').unwrap_or(lower.as_str());
        if !hex.is_ascii() || hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }
}

/// Status of the users list as a whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The last fetch failed; the message is shown in a full-page panel.
    Failed(String),
}

/// Field focused in the add-user form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Company,
            FormField::Company => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Company,
            FormField::Email => FormField::Name,
            FormField::Company => FormField::Email,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AddUserForm {
    pub field: FormField,
    pub name: String,
    pub email: String,
    pub company: String,
    pub error: Option<String>,
}

impl Default for AddUserForm {
    fn default() -> Self {
        Self {
            field: FormField::Name,
            name: String::new(),
            email: String::new(),
            company: String::new(),
            error: None,
        }
    }
}

impl AddUserForm {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
        }
    }

    /// Validate and build the request input. Name and email must be non-blank;
    /// a blank company is left out so the client default applies.
    pub fn submit(&self) -> Result<NewUser, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err("Name is required");
        }
        if email.is_empty() {
            return Err("Email is required");
        }
        let company = self.company.trim();
        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            company: (!company.is_empty()).then(|| Company::new(company)),
        })
    }
}

/// Modal dialogs layered over the users screen.
#[derive(Clone, Debug)]
pub enum ModalState {
    AddUser(AddUserForm),
    Help,
}

/// Side effects requested by the state layer; executed by [`tasks::Dispatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    FetchUsers,
    CreateUser(NewUser),
}

/// Results delivered back from background requests.
#[derive(Debug)]
pub enum ApiEvent {
    UsersLoaded(Result<Vec<User>, FetchError>),
    UserCreated(Result<User, FetchError>),
}

pub struct AppState {
    /// Cached list: last fetch plus optimistic inserts.
    pub users_all: Vec<User>,
    /// `users_all` filtered by `search_query`.
    pub users: Vec<User>,
    pub search_query: String,
    pub paging: Pagination,
    /// Highlighted row within the current page.
    pub selected_row: usize,
    pub load: LoadState,
    pub input_mode: InputMode,
    pub modal: Option<ModalState>,
    pub toast: ToastState,
    pub pending_creates: usize,
    pub dark_mode: bool,
    pub dark_theme: Theme,
    pub light_theme: Theme,
    pub keymap: Keymap,
}

impl AppState {
    /// Fresh state waiting for the first fetch.
    pub fn new(keymap: Keymap, dark_theme: Theme, dark_mode: bool) -> Self {
        Self {
            users_all: Vec::new(),
            users: Vec::new(),
            search_query: String::new(),
            paging: Pagination::default(),
            selected_row: 0,
            load: LoadState::Loading,
            input_mode: InputMode::Normal,
            modal: None,
            toast: ToastState::default(),
            pending_creates: 0,
            dark_mode,
            dark_theme,
            light_theme: Theme::light(),
            keymap,
        }
    }

    pub fn theme(&self) -> &Theme {
        if self.dark_mode { &self.dark_theme } else { &self.light_theme }
    }

    /// Users on the current page.
    pub fn page_users(&self) -> &[User] {
        self.paging.slice(&self.users)
    }

    pub fn total_pages(&self) -> usize {
        self.paging.total_pages(self.users.len())
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.page_users().get(self.selected_row)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Keymap::default(), Theme::dark(), true)
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_trims_and_defaults_company() {
        let form = AddUserForm {
            name: "  Ada ".into(),
            email: "ada@x.com ".into(),
            company: "   ".into(),
            ..Default::default()
        };
        let user = form.submit().unwrap();
        assert_eq!(user, NewUser::new("Ada", "ada@x.com"));
    }

    #[test]
    fn form_requires_name_and_email() {
        let mut form = AddUserForm { name: " ".into(), email: "a@b".into(), ..Default::default() };
        assert_eq!(form.submit(), Err("Name is required"));
        form.name = "A".into();
        form.email.clear();
        assert_eq!(form.submit(), Err("Email is required"));
    }

    #[test]
    fn theme_overrides_known_keys_only() {
        let t = Theme::from_str_overrides("title = #010203\nbogus = #ffffff\nborder = nothex\n", Theme::dark());
        assert_eq!(t.title, Color::Rgb(1, 2, 3));
        assert_eq!(t.border, Theme::dark().border);
    }

    #[test]
    fn theme_skips_non_ascii_hex_values() {
        let t = Theme::from_str_overrides("title = aé123\nborder = #ééé\ntext = #a0b0c0\n", Theme::dark());
        assert_eq!(t.title, Theme::dark().title);
        assert_eq!(t.border, Theme::dark().border);
        assert_eq!(t.text, Color::Rgb(0xa0, 0xb0, 0xc0));
    }
}
