use ratatui::{Frame, layout::Rect, style::Style, widgets::Sparkline};

use crate::ui::theme::Theme;

/// Converts chart values into sparkline samples. The widget only takes
/// unsigned samples, so negative amounts clamp to zero.
#[must_use]
pub fn sparkline_values(values: &[f64]) -> Vec<u64> {
    values
        .iter()
        .map(|&value| if value.is_finite() { value.max(0.0).round() as u64 } else { 0 })
        .collect()
}

/// Renders an inline sparkline without borders (for embedding in cards).
pub fn render_inline_sparkline(frame: &mut Frame<'_>, area: Rect, data: &[u64], theme: &Theme) {
    let sparkline = Sparkline::default()
        .data(data)
        .style(Style::default().fg(theme.accent));

    frame.render_widget(sparkline, area);
}
