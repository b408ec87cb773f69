//! The revenue dashboard: balance and trend, wallet stat cards and the
//! filterable transaction list.

use api_types::transaction::Transaction;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::{
    app::AppState,
    format::{format_date, format_money},
    ui::{
        components::{card::Card, charts},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .split(area);

    render_balance_panel(frame, rows[0], state, theme);
    render_stat_cards(frame, rows[1], state, theme);
    render_transactions(frame, rows[2], state, theme);
}

fn render_balance_panel(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let visible = state.visible();
    let card = Card::new("Available Balance", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let balance = state.data.wallet.map_or(0.0, |wallet| wallet.balance);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format_money(balance),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );

    let points = chart_points(&visible);
    let samples = charts::sparkline_values(
        &points.iter().map(|(_, value)| *value).collect::<Vec<_>>(),
    );
    charts::render_inline_sparkline(frame, rows[1], &samples, theme);

    if let (Some((first, _)), Some((last, _))) = (points.first(), points.last()) {
        let axis = Line::from(vec![
            Span::styled(first.clone(), Style::default().fg(theme.text_muted)),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(axis), rows[2]);
        frame.render_widget(
            Paragraph::new(Span::styled(
                last.clone(),
                Style::default().fg(theme.text_muted),
            ))
            .alignment(Alignment::Right),
            rows[2],
        );
    }
}

/// Chart points for the balance trend, oldest first, over the same filtered
/// list the table shows. The fetched list comes newest-first, so it is
/// walked in reverse.
fn chart_points(transactions: &[&Transaction]) -> Vec<(String, f64)> {
    transactions
        .iter()
        .rev()
        .map(|tx| (format_date(&tx.date), tx.amount))
        .collect()
}

fn render_stat_cards(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let wallet = state.data.wallet.unwrap_or_default();
    let stats = [
        ("Ledger Balance", wallet.ledger_balance),
        ("Total Payout", wallet.total_payout),
        ("Total Revenue", wallet.total_revenue),
        ("Pending Payout", wallet.pending_payout),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    for (column, (title, value)) in columns.iter().zip(stats) {
        let card = Card::new(title, theme);
        let inner = card.inner(*column);
        card.render_frame(frame, *column);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format_money(value),
                Style::default().fg(theme.text),
            )),
            inner,
        );
    }
}

fn render_transactions(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let visible = state.visible();

    let card = Card::new("Transactions", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    render_transactions_header(frame, rows[0], state, visible.len(), theme);

    if visible.is_empty() {
        render_empty_state(frame, rows[1], theme);
        return;
    }

    let items: Vec<ListItem<'_>> = visible
        .iter()
        .enumerate()
        .map(|(i, tx)| transaction_item(tx, i == state.selected, rows[1].width, theme))
        .collect();
    frame.render_widget(List::new(items), rows[1]);
}

fn render_transactions_header(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    count: usize,
    theme: &Theme,
) {
    let title = Line::from(Span::styled(
        format!("{count} Transactions"),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    ));
    let subtitle = Line::from(Span::styled(
        "Your transactions for the last 7 days",
        Style::default().fg(theme.text_muted),
    ));
    frame.render_widget(Paragraph::new(vec![title, subtitle]), area);

    let badge = state.filters.active_dimensions();
    let filter_label = if badge > 0 {
        format!("Filter ({badge}) ")
    } else {
        "Filter ".to_string()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            filter_label,
            Style::default().fg(theme.accent),
        ))
        .alignment(Alignment::Right),
        area,
    );
}

fn render_empty_state(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "No matching transaction found for the selected filter",
            Style::default().fg(theme.text),
        )),
        Line::from(Span::styled(
            "Change your filters to see more results, or press 'c' to clear them",
            Style::default().fg(theme.text_muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn transaction_item<'a>(
    tx: &'a Transaction,
    selected: bool,
    width: u16,
    theme: &Theme,
) -> ListItem<'a> {
    let marker = if selected { "> " } else { "  " };
    let title = row_title(tx);
    let amount = format_money(tx.amount);
    let date = format_date(&tx.date);

    let left_width = 2 + title.chars().count();
    let right_width = amount.chars().count() + 2 + date.chars().count() + 1;
    let pad = (width as usize).saturating_sub(left_width + right_width).max(1);

    let title_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let first = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(title, title_style),
        Span::raw(" ".repeat(pad)),
        Span::styled(amount, Style::default().fg(theme.text)),
        Span::raw("  "),
        Span::styled(date, Style::default().fg(theme.text_muted)),
    ]);

    let subtitle_color = if tx.kind.eq_ignore_ascii_case("withdrawal") {
        status_color(&tx.status, theme)
    } else {
        theme.text_muted
    };
    let second = Line::from(vec![
        Span::raw("  "),
        Span::styled(row_subtitle(tx), Style::default().fg(subtitle_color)),
    ]);

    ListItem::new(vec![first, second])
}

fn status_color(status: &str, theme: &Theme) -> ratatui::style::Color {
    if status.eq_ignore_ascii_case("successful") {
        theme.positive
    } else if status.eq_ignore_ascii_case("pending") {
        theme.warning
    } else {
        theme.error
    }
}

/// First row label. Withdrawals are all labelled the same; anything else
/// shows its product name when present.
fn row_title(tx: &Transaction) -> String {
    if tx.kind.eq_ignore_ascii_case("withdrawal") {
        return "Cash withdrawal".to_string();
    }
    tx.metadata
        .as_ref()
        .and_then(|metadata| metadata.product_name.clone())
        .unwrap_or_else(|| "Deposit".to_string())
}

/// Second row label: the withdrawal's status, or the counterparty name with
/// the dashboard's stock fallback.
fn row_subtitle(tx: &Transaction) -> String {
    if tx.kind.eq_ignore_ascii_case("withdrawal") {
        return tx.status.clone();
    }
    tx.metadata
        .as_ref()
        .and_then(|metadata| metadata.name.clone())
        .unwrap_or_else(|| "Roy Cash".to_string())
}

#[cfg(test)]
mod tests {
    use api_types::transaction::TransactionMetadata;

    use super::*;

    fn tx(kind: &str, status: &str, metadata: Option<TransactionMetadata>) -> Transaction {
        Transaction {
            amount: 100.0,
            date: "2022-03-03T00:00:00.000Z".to_string(),
            kind: kind.to_string(),
            status: status.to_string(),
            payment_reference: None,
            metadata,
        }
    }

    #[test]
    fn withdrawal_rows_use_the_fixed_label_and_status() {
        let row = tx("withdrawal", "pending", None);
        assert_eq!(row_title(&row), "Cash withdrawal");
        assert_eq!(row_subtitle(&row), "pending");
    }

    #[test]
    fn deposit_rows_show_product_and_counterparty() {
        let row = tx(
            "deposit",
            "successful",
            Some(TransactionMetadata {
                name: Some("Ada Lovelace".to_string()),
                product_name: Some("Rich Dad Poor Dad".to_string()),
                ..Default::default()
            }),
        );
        assert_eq!(row_title(&row), "Rich Dad Poor Dad");
        assert_eq!(row_subtitle(&row), "Ada Lovelace");
    }

    #[test]
    fn deposit_rows_fall_back_when_metadata_is_missing() {
        let row = tx("deposit", "successful", None);
        assert_eq!(row_title(&row), "Deposit");
        assert_eq!(row_subtitle(&row), "Roy Cash");
    }

    #[test]
    fn chart_points_run_oldest_first() {
        let txs = vec![
            Transaction {
                date: "2022-03-03T00:00:00.000Z".to_string(),
                ..tx("deposit", "successful", None)
            },
            Transaction {
                date: "2022-03-01T00:00:00.000Z".to_string(),
                ..tx("deposit", "successful", None)
            },
        ];
        let refs: Vec<&Transaction> = txs.iter().collect();
        let points = chart_points(&refs);
        assert_eq!(points[0].0, "Mar 1, 2022");
        assert_eq!(points[1].0, "Mar 3, 2022");
    }
}
