//! Terminal rendering: the shell layout, screens and shared components.

pub mod components;
pub mod keymap;
pub mod screens;
mod terminal;
mod theme;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

use crate::app::{AppState, Section};
use components::{centered_rect, filter_drawer, tabs, toast};

/// Renders one full frame from the current state.
pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // info bar
            Constraint::Length(2), // nav tabs
            Constraint::Min(8),    // section content
            Constraint::Length(1), // key hints
        ])
        .split(area);

    render_info_bar(frame, rows[0], state, &theme);
    tabs::render_tabs(frame, rows[1], state.section, &theme);

    match state.section {
        Section::Revenue => screens::revenue::render(frame, rows[2], state, &theme),
        section => screens::placeholder::render(frame, rows[2], section, &theme),
    }

    render_key_hints(frame, rows[3], state, &theme);

    // Overlays, back to front.
    if state.is_loading(Instant::now()) {
        render_loading_overlay(frame, area, state, &theme);
    }
    filter_drawer::render(frame, area, state, &theme);
    toast::render(frame, area, state.toast.as_ref(), &theme);
}

/// Top line: account identity on the left, refresh time and connection
/// status on the right.
fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let (initials_text, name) = match &state.data.user {
        Some(user) => (
            initials(&user.first_name, &user.last_name),
            format!("{} {}", user.first_name, user.last_name),
        ),
        None => ("--".to_string(), state.base_url.clone()),
    };

    let left = Line::from(vec![
        Span::styled(
            format!(" ({initials_text}) "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(name, Style::default().fg(theme.text)),
    ]);

    let refreshed = state
        .last_refresh
        .map_or_else(|| "--:--:--".to_string(), |at| at.format("%H:%M:%S").to_string());
    let (status, status_color) = if state.connection_ok {
        ("OK", theme.positive)
    } else {
        ("ERR", theme.error)
    };
    let mut right_spans = Vec::new();
    if state.is_loading(Instant::now()) {
        right_spans.push(Span::styled(
            format!("{} ", state.spinner_glyph()),
            Style::default().fg(theme.accent),
        ));
    }
    right_spans.push(Span::styled(
        format!("Refreshed {refreshed} "),
        Style::default().fg(theme.text_muted),
    ));
    right_spans.push(Span::styled(status, Style::default().fg(status_color)));
    right_spans.push(Span::raw(" "));

    frame.render_widget(Paragraph::new(left), area);
    frame.render_widget(
        Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right),
        area,
    );
}

fn render_key_hints(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let hints = if state.panel.open {
        " Tab next field | Space toggle | Enter apply | Esc close"
    } else if state.section == Section::Revenue {
        " / filter | c clear filters | r refresh | j/k select | Tab section | q quit"
    } else {
        " r refresh | Tab section | q quit"
    };

    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(theme.text_muted))),
        area,
    );
}

fn render_loading_overlay(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let rect = centered_rect(30, 20, area);
    frame.render_widget(Clear, rect);

    let card = components::card::Card::new("Loading", theme).focused(true);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let line = Line::from(vec![
        Span::styled(state.spinner_glyph(), Style::default().fg(theme.accent)),
        Span::styled(" Fetching dashboard data", Style::default().fg(theme.text)),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        inner,
    );
}

/// Uppercase initials of the account holder, for the avatar chip.
fn initials(first: &str, last: &str) -> String {
    [first, last]
        .iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
