use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::{
    app::{AppState, PanelField},
    filters::{FilterDimension, QuickRange},
    ui::{
        components::{card::Card, drawer_rect, multi_select},
        theme::Theme,
    },
};

const DRAWER_WIDTH: u16 = 46;

/// Renders the slide-out filter drawer over the right edge of the screen.
/// Everything shown comes from the edit buffer; nothing is committed until
/// Apply.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    if !state.panel.open {
        return;
    }

    let rect = drawer_rect(area, DRAWER_WIDTH);
    frame.render_widget(Clear, rect);

    let card = Card::new("Filter", theme).focused(true);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // presets
            Constraint::Length(1),
            Constraint::Length(4), // date range
            Constraint::Length(1), // date error
            Constraint::Min(5),    // type select
            Constraint::Min(5),    // status select
            Constraint::Length(1), // footer
        ])
        .split(inner);

    render_presets(frame, rows[0], state, theme);
    render_date_range(frame, rows[2], state, theme);
    if let Some(error) = &state.panel.date_error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(theme.error),
            )),
            rows[3],
        );
    }

    multi_select::render(
        frame,
        rows[4],
        "Transaction Type",
        multi_select::TYPE_OPTIONS,
        state.effective_selection(FilterDimension::TransactionType),
        state.panel.type_cursor,
        state.panel.focus == PanelField::TypeSelect,
        theme,
    );
    multi_select::render(
        frame,
        rows[5],
        "Transaction Status",
        multi_select::STATUS_OPTIONS,
        state.effective_selection(FilterDimension::TransactionStatus),
        state.panel.status_cursor,
        state.panel.focus == PanelField::StatusSelect,
        theme,
    );

    render_footer(frame, rows[6], state, theme);
}

fn render_presets(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let focused = state.panel.focus == PanelField::Presets;
    let today = Local::now().date_naive();
    let staged = state.panel.draft.date_range;

    let mut spans = Vec::new();
    for (i, preset) in QuickRange::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let active = staged == Some(preset.date_range(today));
        let mut style = if active {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        if focused && i == state.panel.preset_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(preset.label(), style));
    }

    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let lines = vec![
        Line::from(Span::styled("Quick Ranges", label_style)),
        Line::from(spans),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_date_range(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Date Range",
            Style::default().fg(theme.text_muted),
        )),
        date_input_line(
            "From",
            &state.panel.start_input,
            state.panel.focus == PanelField::StartDate,
            theme,
        ),
        date_input_line(
            "To  ",
            &state.panel.end_input,
            state.panel.focus == PanelField::EndDate,
            theme,
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn date_input_line<'a>(label: &'a str, input: &'a str, focused: bool, theme: &Theme) -> Line<'a> {
    let (text, text_style) = if input.is_empty() {
        ("YYYY-MM-DD", Style::default().fg(theme.dim))
    } else {
        (input, Style::default().fg(theme.text))
    };
    let frame_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let mut spans = vec![
        Span::styled(label, frame_style),
        Span::raw(" "),
        Span::styled("[ ", frame_style),
        Span::styled(text, text_style),
    ];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme.accent)));
    }
    spans.push(Span::styled(" ]", frame_style));
    Line::from(spans)
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let button = |label: &'static str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        button("[ Clear ]", state.panel.focus == PanelField::ClearButton),
        Span::raw("  "),
        button("[ Apply ]", state.panel.focus == PanelField::ApplyButton),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
