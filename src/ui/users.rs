use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use crate::app::paging::PageItem;
use crate::app::{AddUserForm, AppState, FormField, LoadState};

/// The footer only appears once the filtered list spans more than one page.
pub fn show_pagination(app: &AppState) -> bool {
    app.users.len() > app.paging.page_size
}

pub fn render_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)].as_ref())
        .split(area);
    let pages = app.total_pages().max(1);
    let cards = [
        ("Total Users", app.users_all.len().to_string()),
        ("Filtered Results", app.users.len().to_string()),
        ("Current Page", format!("{} / {}", app.paging.page, pages)),
    ];
    for ((title, value), rect) in cards.into_iter().zip(cols.iter()) {
        let p = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
        f.render_widget(p, *rect);
    }
}

pub fn render_users_table(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let block = Block::default()
        .title("Users")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    if app.load == LoadState::Loading && app.users_all.is_empty() {
        let p = Paragraph::new("Loading users...").style(Style::default().fg(theme.muted)).block(block);
        f.render_widget(p, area);
        return;
    }

    if app.users.is_empty() {
        let (headline, hint) = if app.search_query.is_empty() {
            ("No users available", "Add some users to get started.")
        } else {
            ("No users found", "Try adjusting your search terms.")
        };
        let p = Paragraph::new(vec![
            Line::from(Span::styled(headline, Style::default().fg(theme.text).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(hint, Style::default().fg(theme.muted))),
        ])
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let rows = app.page_users().iter().enumerate().map(|(i, u)| {
        let style = if i == app.selected_row {
            Style::default().fg(theme.highlight_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Row::new(vec![
            Cell::from(u.id.to_string()),
            Cell::from(u.name.clone()),
            Cell::from(u.email.clone()),
            Cell::from(u.company.name.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(14),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(30),
    ];
    let header = Row::new(vec!["ID", "NAME", "EMAIL", "COMPANY"])
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, widths).header(header).block(block).column_spacing(1);
    f.render_widget(table, area);
}

pub fn render_user_details(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let text = match app.selected_user() {
        Some(u) => format!("ID: {}\nName: {}\nEmail: {}\nCompany: {}", u.id, u.name, u.email, u.company.name),
        None => String::new(),
    };
    let p = Paragraph::new(text).style(Style::default().fg(theme.text)).block(
        Block::default().title("Details").borders(Borders::ALL).border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, area);
}

pub fn render_pagination(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let (first, last, total) = app.paging.showing(app.users.len());
    let accent = Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::raw("Showing "),
        Span::styled(first.to_string(), accent),
        Span::raw(" to "),
        Span::styled(last.to_string(), accent),
        Span::raw(" of "),
        Span::styled(total.to_string(), accent),
        Span::raw(" results    "),
    ];
    for item in app.paging.window(app.users.len()) {
        match item {
            PageItem::Page(n) if n == app.paging.page => {
                spans.push(Span::styled(
                    format!("[{n}]"),
                    Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD),
                ));
            }
            PageItem::Page(n) => spans.push(Span::raw(format!(" {n} "))),
            PageItem::Gap => spans.push(Span::styled(" ... ", Style::default().fg(theme.muted))),
        }
    }

    let p = Paragraph::new(Line::from(spans)).style(Style::default().fg(theme.text)).block(
        Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, area);
}

pub fn render_add_user_modal(f: &mut Frame, area: Rect, app: &AppState, form: &AddUserForm) {
    let theme = app.theme();
    let rect = crate::ui::components::centered_rect(60, 10, area);
    let marker = |field: FormField| if form.field == field { "\u{25b6}" } else { " " };
    let mut lines = vec![
        Line::from(format!("{} Name:    {}", marker(FormField::Name), form.name)),
        Line::from(format!("{} Email:   {}", marker(FormField::Email), form.email)),
        Line::from(format!("{} Company: {}", marker(FormField::Company), form.company)),
        Line::from(Span::styled(
            "  (optional, defaults to New Company)",
            Style::default().fg(theme.muted),
        )),
        Line::from(""),
    ];
    match &form.error {
        Some(err) => lines.push(Line::from(Span::styled(err.clone(), Style::default().fg(theme.error)))),
        None => lines.push(Line::from(Span::styled(
            "Tab: next field  Enter: add user  Esc: cancel",
            Style::default().fg(theme.muted),
        ))),
    }
    let p = Paragraph::new(lines).style(Style::default().fg(theme.text)).block(
        Block::default()
            .title("Add New User")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
