//! Shared UI components (status bar, overlays, modal helpers).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use std::collections::{BTreeMap, BTreeSet};

use crate::app::keymap::{KeyAction, Keymap, format_action};
use crate::app::toast::ToastKind;
use crate::app::{AppState, InputMode, LoadState};

/// Render the bottom status bar with mode, load state and counts.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "MODAL",
    };
    let load = match app.load {
        LoadState::Loading => "loading",
        LoadState::Ready => "ready",
        LoadState::Failed(_) => "error",
    };
    let pending = if app.pending_creates > 0 {
        format!("  creating:{}", app.pending_creates)
    } else {
        String::new()
    };
    let msg = format!(
        "mode: {mode}  data:{load}  users:{}  shown:{}  rows/page:{}{pending}",
        app.users_all.len(),
        app.users.len(),
        app.paging.page_size,
    );
    let p = Paragraph::new(msg).style(Style::default().fg(theme.status_fg).bg(theme.status_bg));
    f.render_widget(p, area);
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Bottom-right notification box.
pub fn render_toast(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let (title, color) = match app.toast.kind {
        ToastKind::Success => ("Success", theme.success),
        ToastKind::Error => ("Error", theme.error),
    };
    let cols = u16::try_from(app.toast.message.chars().count()).unwrap_or(u16::MAX);
    let width = cols.saturating_add(4).max(24).min(area.width);
    let height = 3u16.min(area.height);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };
    let p = Paragraph::new(app.toast.message.clone())
        .style(Style::default().fg(color))
        .block(Block::default().title(title).borders(Borders::ALL).border_style(Style::default().fg(color)));
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Full-page panel shown when the users list could not be loaded.
pub fn render_error_panel(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let theme = app.theme();
    let width = 50u16.min(area.width);
    let rect = centered_rect(width, 8, area);
    let lines = vec![
        Line::from(Span::styled(
            "Error Loading Data",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled("r: retry  q: quit", Style::default().fg(theme.muted))),
    ];
    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.error)));
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Keybindings reference built from the active keymap.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let mut by_action: BTreeMap<&'static str, BTreeSet<String>> = BTreeMap::new();
    for ((mods, code), action) in app.keymap.all_bindings() {
        if action == KeyAction::Ignore {
            continue;
        }
        by_action
            .entry(format_action(action))
            .or_default()
            .insert(Keymap::format_key(mods, code));
    }

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled("Keybindings", Style::default().fg(theme.title).add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for (label, keys) in by_action {
        let keys = keys.into_iter().collect::<Vec<_>>().join(", ");
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<24}"), Style::default().fg(theme.text)),
            Span::styled(keys, Style::default().fg(theme.highlight_fg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Search: type to filter, Enter to keep, Esc to clear",
        Style::default().fg(theme.muted),
    )));

    let width = 64u16.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = centered_rect(width, height, area);
    let p = Paragraph::new(lines).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
