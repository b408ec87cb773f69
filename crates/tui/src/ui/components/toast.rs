use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{ToastLevel, ToastState},
    ui::theme::Theme,
};

/// Renders the transient notice in the bottom-right corner, above the key
/// hints. Expiry is handled by the app tick, not here.
pub fn render(frame: &mut Frame<'_>, area: Rect, toast: Option<&ToastState>, theme: &Theme) {
    let Some(toast) = toast else {
        return;
    };

    let (glyph, color) = match toast.level {
        ToastLevel::Info => ("i", theme.text),
        ToastLevel::Success => ("+", theme.positive),
        ToastLevel::Error => ("!", theme.error),
    };

    let text = format!("{glyph} {}", toast.message);
    let width = (text.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(4),
        width,
        height: 3,
    };

    let style = Style::default().fg(color);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, style))).block(block),
        rect,
    );
}
