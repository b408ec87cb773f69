use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::Section,
    ui::{
        components::{card::Card, centered_rect},
        theme::Theme,
    },
};

/// Stand-in content for the nav sections that have no screen yet.
pub fn render(frame: &mut Frame<'_>, area: Rect, section: Section, theme: &Theme) {
    let rect = centered_rect(50, 30, area);
    let card = Card::new(section.label(), theme);
    let inner = card.inner(rect);
    card.render_frame(frame, rect);

    let lines = vec![
        Line::from(Span::styled(
            "Nothing here yet.",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "Press Tab until Revenue for the dashboard.",
            Style::default().fg(theme.text_muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
