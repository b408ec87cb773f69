use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// One entry of a multi-select control: a display label and the value that
/// is matched against the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Transaction categories offered in the filter drawer. Values line up with
/// the `type` labels the API actually emits, not the display labels.
pub const TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption {
        label: "Store Transactions",
        value: "store-transactions",
    },
    SelectOption {
        label: "Get Tipped",
        value: "get-tipped",
    },
    SelectOption {
        label: "Deposits",
        value: "deposit",
    },
    SelectOption {
        label: "Withdrawals",
        value: "withdrawal",
    },
    SelectOption {
        label: "Chargebacks",
        value: "chargeback",
    },
    SelectOption {
        label: "Cashbacks",
        value: "cashback",
    },
    SelectOption {
        label: "Refer & Earn",
        value: "refer-and-earn",
    },
];

pub const STATUS_OPTIONS: &[SelectOption] = &[
    SelectOption {
        label: "Successful",
        value: "successful",
    },
    SelectOption {
        label: "Pending",
        value: "pending",
    },
    SelectOption {
        label: "Failed",
        value: "failed",
    },
];

/// Returns the selection with `value` toggled in or out. The caller stages
/// the result wholesale; individual entries are never merged.
#[must_use]
pub fn toggle_value(current: &[String], value: &str) -> Vec<String> {
    let mut next: Vec<String> = current
        .iter()
        .filter(|selected| !selected.eq_ignore_ascii_case(value))
        .cloned()
        .collect();
    if next.len() == current.len() {
        next.push(value.to_string());
    }
    next
}

/// Short summary of the current selection for the collapsed control.
#[must_use]
pub fn summary(options: &[SelectOption], selected: &[String], placeholder: &str) -> String {
    if selected.is_empty() {
        return placeholder.to_string();
    }
    let labels: Vec<&str> = options
        .iter()
        .filter(|option| {
            selected
                .iter()
                .any(|value| value.eq_ignore_ascii_case(option.value))
        })
        .map(|option| option.label)
        .collect();
    labels.join(", ")
}

/// Renders the control: a label line, the selection summary, then one
/// checkbox row per option. The cursor row is highlighted when focused.
#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    options: &[SelectOption],
    selected: &[String],
    cursor: usize,
    focused: bool,
    theme: &Theme,
) {
    let mut lines = Vec::with_capacity(options.len() + 2);

    let label_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    lines.push(Line::from(Span::styled(label.to_string(), label_style)));
    lines.push(Line::from(Span::styled(
        summary(options, selected, "All"),
        Style::default().fg(theme.dim),
    )));

    for (i, option) in options.iter().enumerate() {
        let checked = selected
            .iter()
            .any(|value| value.eq_ignore_ascii_case(option.value));
        let marker = if checked { "[x]" } else { "[ ]" };
        let style = if focused && i == cursor {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else if checked {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.dim)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", option.label),
            style,
        )));
    }

    lines.truncate(area.height as usize);
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn toggle_adds_missing_value() {
        assert_eq!(
            toggle_value(&selection(&["deposit"]), "withdrawal"),
            selection(&["deposit", "withdrawal"])
        );
    }

    #[test]
    fn toggle_removes_present_value_case_insensitively() {
        assert_eq!(
            toggle_value(&selection(&["Deposit", "withdrawal"]), "deposit"),
            selection(&["withdrawal"])
        );
    }

    #[test]
    fn summary_lists_selected_labels() {
        assert_eq!(
            summary(TYPE_OPTIONS, &selection(&["deposit", "withdrawal"]), "All"),
            "Deposits, Withdrawals"
        );
        assert_eq!(summary(TYPE_OPTIONS, &[], "All"), "All");
    }
}
