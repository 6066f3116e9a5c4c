pub mod components;
pub mod users;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, InputMode, LoadState, ModalState};

pub fn render(f: &mut Frame, app: &AppState) {
    let theme = *app.theme();
    f.render_widget(Block::default().style(Style::default().bg(theme.header_bg)), f.area());

    if let LoadState::Failed(message) = &app.load {
        components::render_error_panel(f, f.area(), app, message);
        if app.modal.is_some() {
            render_modal(f, app);
        }
        return;
    }

    let footer_height = if users::show_pagination(app) { 3 } else { 0 };
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(footer_height),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
        .split(root[2]);

    let prompt = match app.input_mode {
        InputMode::Search => format!("  Search: {}_", app.search_query),
        _ if !app.search_query.is_empty() => format!("  Search: {}", app.search_query),
        _ => String::new(),
    };
    let p = Paragraph::new(format!(
        "User Management{prompt}  | /: search; n: add user; \u{2190}/\u{2192}: page; t: theme; ?: help; q: quit"
    ))
    .block(
        Block::default()
            .title("user-admin")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    )
    .style(Style::default().fg(theme.header_fg).bg(theme.header_bg));
    f.render_widget(p, root[0]);

    users::render_stats(f, root[1], app);
    users::render_users_table(f, body[0], app);
    users::render_user_details(f, body[1], app);
    if footer_height > 0 {
        users::render_pagination(f, root[3], app);
    }
    components::render_status_bar(f, root[4], app);

    if app.modal.is_some() {
        render_modal(f, app);
    }
    if app.toast.visible {
        components::render_toast(f, f.area(), app);
    }
}

fn render_modal(f: &mut Frame, app: &AppState) {
    let area = f.area();
    match &app.modal {
        Some(ModalState::AddUser(form)) => users::render_add_user_modal(f, area, app, form),
        Some(ModalState::Help) => components::render_help_modal(f, area, app),
        None => {}
    }
}
