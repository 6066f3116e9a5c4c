use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::app::keymap::KeyAction;
use crate::app::tasks::Dispatcher;
use crate::app::{AddUserForm, ApiEvent, AppState, Command, InputMode, LoadState, ModalState};
use crate::search::{apply_search, refresh_filtered};
use crate::ui;

pub const CREATE_SUCCESS: &str = "User added successfully!";
pub const CREATE_FAILURE: &str = "Failed to add user. Please try again.";

/// Drive the TUI until the user quits.
///
/// Kicks off the initial fetch, then on every tick applies finished API
/// results, expires the toast, redraws and handles at most one key press.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    dispatcher: &Dispatcher,
    events: &mut UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    dispatcher.dispatch(Command::FetchUsers);

    loop {
        while let Ok(ev) = events.try_recv() {
            if let Some(cmd) = apply_event(app, ev) {
                dispatcher.dispatch(cmd);
            }
        }
        app.toast.tick(Instant::now());

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match handle_key(app, key) {
                        Some(Command::Quit) => break,
                        Some(cmd) => dispatcher.dispatch(cmd),
                        None => {}
                    }
                }
            }
        }
    }
    info!("quit requested");
    Ok(())
}

/// Reconcile a finished request with local state.
///
/// A successful create is appended to the cache; a failed one leaves the
/// cache untouched and asks for a full refetch.
pub fn apply_event(app: &mut AppState, ev: ApiEvent) -> Option<Command> {
    match ev {
        ApiEvent::UsersLoaded(Ok(users)) => {
            info!(count = users.len(), "users loaded");
            app.users_all = users;
            app.load = LoadState::Ready;
            refresh_filtered(app);
            None
        }
        ApiEvent::UsersLoaded(Err(e)) => {
            warn!(error = %e, status = ?e.status(), "users fetch failed");
            app.load = LoadState::Failed(e.to_string());
            None
        }
        ApiEvent::UserCreated(Ok(user)) => {
            app.pending_creates = app.pending_creates.saturating_sub(1);
            info!(id = user.id, name = %user.name, "user created");
            app.users_all.push(user);
            refresh_filtered(app);
            app.toast.success(CREATE_SUCCESS);
            None
        }
        ApiEvent::UserCreated(Err(e)) => {
            app.pending_creates = app.pending_creates.saturating_sub(1);
            warn!(error = %e, status = ?e.status(), "user create failed; refetching");
            app.toast.error(CREATE_FAILURE);
            Some(Command::FetchUsers)
        }
    }
}

/// Apply a key press to state; returns the command it triggers, if any.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if let LoadState::Failed(_) = app.load {
        if app.modal.is_none() {
            return handle_error_screen_key(app, key);
        }
    }
    match app.input_mode {
        InputMode::Search => {
            handle_search_key(app, key);
            None
        }
        InputMode::Modal => handle_modal_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_error_screen_key(app: &mut AppState, key: KeyEvent) -> Option<Command> {
    match app.keymap.resolve(&key) {
        Some(KeyAction::Quit) => Some(Command::Quit),
        Some(KeyAction::Reload) => {
            app.load = LoadState::Loading;
            Some(Command::FetchUsers)
        }
        Some(KeyAction::ToggleTheme) => {
            app.dark_mode = !app.dark_mode;
            None
        }
        _ => None,
    }
}

fn handle_normal_key(app: &mut AppState, key: KeyEvent) -> Option<Command> {
    let action = app.keymap.resolve(&key)?;
    let len = app.users.len();
    match action {
        KeyAction::Quit => return Some(Command::Quit),
        KeyAction::OpenHelp => {
            app.modal = Some(ModalState::Help);
            app.input_mode = InputMode::Modal;
        }
        KeyAction::StartSearch => app.input_mode = InputMode::Search,
        KeyAction::NewUser => {
            if app.pending_creates > 0 {
                debug!(pending = app.pending_creates, "add user ignored while a create is pending");
            } else {
                app.modal = Some(ModalState::AddUser(AddUserForm::default()));
                app.input_mode = InputMode::Modal;
            }
        }
        KeyAction::Reload => {
            if app.load != LoadState::Ready {
                app.load = LoadState::Loading;
            }
            return Some(Command::FetchUsers);
        }
        KeyAction::ToggleTheme => app.dark_mode = !app.dark_mode,
        KeyAction::Dismiss => {
            if app.toast.visible {
                app.toast.dismiss();
            } else if !app.search_query.is_empty() {
                app.search_query.clear();
                apply_search(app);
            }
        }
        KeyAction::MoveUp => app.selected_row = app.selected_row.saturating_sub(1),
        KeyAction::MoveDown => {
            let on_page = app.page_users().len();
            if app.selected_row + 1 < on_page {
                app.selected_row += 1;
            }
        }
        KeyAction::PrevPage => {
            app.paging.prev(len);
            app.selected_row = 0;
        }
        KeyAction::NextPage => {
            app.paging.next(len);
            app.selected_row = 0;
        }
        KeyAction::FirstPage => {
            app.paging.first();
            app.selected_row = 0;
        }
        KeyAction::LastPage => {
            app.paging.last(len);
            app.selected_row = 0;
        }
        KeyAction::Ignore => {}
    }
    None
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_query.clear();
            apply_search(app);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            if app.search_query.pop().is_some() {
                apply_search(app);
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_query.push(c);
            apply_search(app);
        }
        _ => {}
    }
}

fn handle_modal_key(app: &mut AppState, key: KeyEvent) -> Option<Command> {
    let mut submitted = None;
    match app.modal.as_mut() {
        Some(ModalState::Help) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                close_modal(app)
            }
            _ => {}
        },
        Some(ModalState::AddUser(form)) => match key.code {
            KeyCode::Esc => close_modal(app),
            KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
            KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
            KeyCode::Backspace => {
                form.focused_mut().pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.focused_mut().push(c);
                form.error = None;
            }
            KeyCode::Enter => match form.submit() {
                Ok(new) => submitted = Some(new),
                Err(msg) => form.error = Some(msg.to_string()),
            },
            _ => {}
        },
        None => app.input_mode = InputMode::Normal,
    }

    let new = submitted?;
    close_modal(app);
    app.pending_creates += 1;
    debug!(name = %new.name, email = %new.email, "submitting new user");
    Some(Command::CreateUser(new))
}

fn close_modal(app: &mut AppState) {
    app.modal = None;
    app.input_mode = InputMode::Normal;
}
