//! Committed filter, edit buffer and the transaction filter predicate.
//!
//! The committed [`FilterSpec`] is owned by the top-level app state and only
//! ever rewritten through the drawer's apply/clear actions. The [`FilterDraft`]
//! is the drawer's in-progress edit buffer: staging never touches the
//! committed spec until it is merged on apply.

use chrono::{Days, Months, NaiveDate};

use api_types::transaction::Transaction;

use crate::format::parse_date;

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The committed filter. An absent field means "no constraint on that
/// dimension".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub date_range: Option<DateRange>,
    pub transaction_type: Option<Vec<String>>,
    pub transaction_status: Option<Vec<String>>,
}

impl FilterSpec {
    /// Number of dimensions with an effective constraint; shown on the
    /// filter button badge.
    #[must_use]
    pub fn active_dimensions(&self) -> usize {
        let non_empty = |values: &Option<Vec<String>>| {
            values.as_ref().is_some_and(|values| !values.is_empty())
        };
        usize::from(self.date_range.is_some())
            + usize::from(non_empty(&self.transaction_type))
            + usize::from(non_empty(&self.transaction_status))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_dimensions() == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Decides whether one transaction matches the committed filter.
///
/// The dimensions are not AND-combined: the first constrained dimension
/// decides alone, in the order date range, then type, then status. The web
/// dashboard ships this early-return behavior and downstream users depend on
/// it (a date range suppresses any staged type/status constraint), so it is
/// preserved here rather than converted to a conjunction.
#[must_use]
pub fn matches(tx: &Transaction, spec: &FilterSpec) -> bool {
    if let Some(range) = spec.date_range {
        // Containment in [start 00:00:00, end 23:59:59.999], i.e. inclusive
        // by calendar day. Unparseable transaction dates never match.
        let Some(when) = parse_date(&tx.date) else {
            return false;
        };
        let day = when.date_naive();
        return range.start <= day && day <= range.end;
    }

    if let Some(types) = &spec.transaction_type
        && !types.is_empty()
    {
        return types
            .iter()
            .any(|value| value.eq_ignore_ascii_case(&tx.kind));
    }

    if let Some(statuses) = &spec.transaction_status
        && !statuses.is_empty()
    {
        return statuses
            .iter()
            .any(|value| value.eq_ignore_ascii_case(&tx.status));
    }

    true
}

/// Derives the currently visible list from the full set and the committed
/// spec. Recomputed on every render pass; never cached across changes to
/// either input.
#[must_use]
pub fn visible_transactions<'a>(
    transactions: &'a [Transaction],
    spec: &FilterSpec,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|tx| matches(tx, spec)).collect()
}

/// Named quick ranges offered at the top of the filter drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Today,
    Last7Days,
    LastMonth,
    Last3Months,
}

impl QuickRange {
    pub const ALL: [QuickRange; 4] = [
        Self::Today,
        Self::Last7Days,
        Self::LastMonth,
        Self::Last3Months,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::LastMonth => "Last month",
            Self::Last3Months => "Last 3 months",
        }
    }

    /// Concrete date range for this preset relative to `today`.
    #[must_use]
    pub fn date_range(self, today: NaiveDate) -> DateRange {
        let start = match self {
            Self::Today => today,
            Self::Last7Days => today.checked_sub_days(Days::new(6)).unwrap_or(today),
            Self::LastMonth => today.checked_sub_months(Months::new(1)).unwrap_or(today),
            Self::Last3Months => today.checked_sub_months(Months::new(3)).unwrap_or(today),
        };
        DateRange { start, end: today }
    }
}

/// Which bound of the buffered date range an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// Multi-select dimensions of the filter drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    TransactionType,
    TransactionStatus,
}

/// The drawer's uncommitted edit buffer.
///
/// A `None` field means "not staged": on apply the committed value for that
/// dimension is retained. Staged fields overwrite wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    pub date_range: Option<DateRange>,
    pub transaction_type: Option<Vec<String>>,
    pub transaction_status: Option<Vec<String>>,
}

impl FilterDraft {
    /// Stages a quick range computed relative to `today`.
    pub fn stage_preset(&mut self, preset: QuickRange, today: NaiveDate) {
        self.date_range = Some(preset.date_range(today));
    }

    /// Overwrites one bound of the buffered range. The other bound is kept
    /// from the buffer, else from the committed spec, else mirrors the staged
    /// date.
    pub fn stage_date_bound(&mut self, bound: DateBound, date: NaiveDate, committed: &FilterSpec) {
        let current = self.date_range.or(committed.date_range);
        self.date_range = Some(match bound {
            DateBound::Start => DateRange {
                start: date,
                end: current.map_or(date, |range| range.end),
            },
            DateBound::End => DateRange {
                start: current.map_or(date, |range| range.start),
                end: date,
            },
        });
    }

    /// Overwrites the buffered set for one dimension wholesale.
    pub fn stage_multi_select(&mut self, dimension: FilterDimension, values: Vec<String>) {
        match dimension {
            FilterDimension::TransactionType => self.transaction_type = Some(values),
            FilterDimension::TransactionStatus => self.transaction_status = Some(values),
        }
    }

    /// Field-by-field merge into the committed spec: staged fields overwrite,
    /// unstaged fields retain the committed values.
    pub fn merge_into(&self, spec: &mut FilterSpec) {
        if let Some(range) = self.date_range {
            spec.date_range = Some(range);
        }
        if let Some(types) = &self.transaction_type {
            spec.transaction_type = Some(types.clone());
        }
        if let Some(statuses) = &self.transaction_status {
            spec.transaction_status = Some(statuses.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: &str, status: &str, date: &str, amount: f64) -> Transaction {
        Transaction {
            amount,
            date: date.to_string(),
            kind: kind.to_string(),
            status: status.to_string(),
            payment_reference: None,
            metadata: None,
        }
    }

    fn sample_set() -> Vec<Transaction> {
        vec![
            tx("deposit", "successful", "2024-01-15T00:00:00.000Z", 1000.0),
            tx("withdrawal", "pending", "2024-01-14T00:00:00.000Z", 500.0),
        ]
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_spec_matches_everything() {
        let set = sample_set();
        let spec = FilterSpec::default();
        assert_eq!(visible_transactions(&set, &spec).len(), set.len());
    }

    #[test]
    fn date_range_is_inclusive_by_calendar_day() {
        let spec = FilterSpec {
            date_range: Some(DateRange {
                start: date("2024-01-14"),
                end: date("2024-01-14"),
            }),
            ..Default::default()
        };

        assert!(matches(
            &tx("deposit", "successful", "2024-01-14T00:00:00.000Z", 1.0),
            &spec
        ));
        // Late in the end day still matches (end-of-day clamp).
        assert!(matches(
            &tx("deposit", "successful", "2024-01-14T23:59:59.000Z", 1.0),
            &spec
        ));
        assert!(!matches(
            &tx("deposit", "successful", "2024-01-15T00:00:00.000Z", 1.0),
            &spec
        ));
        assert!(!matches(
            &tx("deposit", "successful", "2024-01-13T12:00:00.000Z", 1.0),
            &spec
        ));
    }

    #[test]
    fn date_range_excludes_unparseable_dates() {
        let spec = FilterSpec {
            date_range: Some(DateRange {
                start: date("2024-01-01"),
                end: date("2024-12-31"),
            }),
            ..Default::default()
        };
        assert!(!matches(&tx("deposit", "successful", "", 1.0), &spec));
    }

    #[test]
    fn date_range_suppresses_type_and_status() {
        // Observed web-client precedence: the date range decides alone even
        // when a type constraint is also set.
        let spec = FilterSpec {
            date_range: Some(DateRange {
                start: date("2024-01-14"),
                end: date("2024-01-14"),
            }),
            transaction_type: Some(vec!["deposit".to_string()]),
            transaction_status: Some(vec!["failed".to_string()]),
        };

        let set = sample_set();
        let visible = visible_transactions(&set, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, "withdrawal");
    }

    #[test]
    fn type_filter_is_case_insensitive_membership() {
        let spec = FilterSpec {
            transaction_type: Some(vec!["Withdrawal".to_string()]),
            ..Default::default()
        };

        let set = sample_set();
        let visible = visible_transactions(&set, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].kind, "withdrawal");
    }

    #[test]
    fn status_filter_applies_when_nothing_else_is_set() {
        let spec = FilterSpec {
            transaction_status: Some(vec!["PENDING".to_string()]),
            ..Default::default()
        };

        let set = sample_set();
        let visible = visible_transactions(&set, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].status, "pending");
    }

    #[test]
    fn empty_selected_sets_impose_no_constraint() {
        let spec = FilterSpec {
            transaction_type: Some(Vec::new()),
            transaction_status: Some(Vec::new()),
            ..Default::default()
        };
        let set = sample_set();
        assert_eq!(visible_transactions(&set, &spec).len(), set.len());
        assert_eq!(spec.active_dimensions(), 0);
    }

    #[test]
    fn clearing_restores_the_full_list() {
        let set = sample_set();
        let mut spec = FilterSpec {
            transaction_type: Some(vec!["withdrawal".to_string()]),
            ..Default::default()
        };
        assert_eq!(visible_transactions(&set, &spec).len(), 1);

        spec.clear();
        assert_eq!(visible_transactions(&set, &spec).len(), set.len());
    }

    #[test]
    fn active_dimensions_counts_non_empty_fields() {
        let spec = FilterSpec {
            date_range: Some(DateRange {
                start: date("2024-01-01"),
                end: date("2024-01-31"),
            }),
            transaction_type: Some(vec!["deposit".to_string()]),
            transaction_status: None,
        };
        assert_eq!(spec.active_dimensions(), 2);
    }

    #[test]
    fn quick_ranges_are_relative_to_today() {
        let today = date("2024-03-15");

        assert_eq!(
            QuickRange::Today.date_range(today),
            DateRange {
                start: today,
                end: today
            }
        );
        assert_eq!(
            QuickRange::Last7Days.date_range(today),
            DateRange {
                start: date("2024-03-09"),
                end: today
            }
        );
        assert_eq!(
            QuickRange::LastMonth.date_range(today),
            DateRange {
                start: date("2024-02-15"),
                end: today
            }
        );
        assert_eq!(
            QuickRange::Last3Months.date_range(today),
            DateRange {
                start: date("2023-12-15"),
                end: today
            }
        );
    }

    #[test]
    fn stage_date_bound_preserves_the_other_bound() {
        let committed = FilterSpec {
            date_range: Some(DateRange {
                start: date("2024-01-01"),
                end: date("2024-01-31"),
            }),
            ..Default::default()
        };

        // Other bound taken from the committed spec when not yet staged.
        let mut draft = FilterDraft::default();
        draft.stage_date_bound(DateBound::Start, date("2024-01-10"), &committed);
        assert_eq!(
            draft.date_range,
            Some(DateRange {
                start: date("2024-01-10"),
                end: date("2024-01-31"),
            })
        );

        // Once staged, the buffer wins over the committed spec.
        draft.stage_date_bound(DateBound::End, date("2024-01-20"), &committed);
        assert_eq!(
            draft.date_range,
            Some(DateRange {
                start: date("2024-01-10"),
                end: date("2024-01-20"),
            })
        );

        // With no prior bound anywhere, the staged date mirrors to both.
        let mut fresh = FilterDraft::default();
        fresh.stage_date_bound(DateBound::End, date("2024-02-02"), &FilterSpec::default());
        assert_eq!(
            fresh.date_range,
            Some(DateRange {
                start: date("2024-02-02"),
                end: date("2024-02-02"),
            })
        );
    }

    #[test]
    fn stage_multi_select_overwrites_wholesale() {
        let mut draft = FilterDraft::default();
        draft.stage_multi_select(
            FilterDimension::TransactionType,
            vec!["deposit".to_string(), "withdrawal".to_string()],
        );
        draft.stage_multi_select(
            FilterDimension::TransactionType,
            vec!["withdrawal".to_string()],
        );
        assert_eq!(
            draft.transaction_type,
            Some(vec!["withdrawal".to_string()])
        );
    }

    #[test]
    fn merge_keeps_unstaged_committed_fields() {
        let mut committed = FilterSpec {
            transaction_status: Some(vec!["pending".to_string()]),
            ..Default::default()
        };

        let mut draft = FilterDraft::default();
        draft.stage_multi_select(
            FilterDimension::TransactionType,
            vec!["deposit".to_string()],
        );
        draft.merge_into(&mut committed);

        assert_eq!(committed.transaction_type, Some(vec!["deposit".to_string()]));
        assert_eq!(
            committed.transaction_status,
            Some(vec!["pending".to_string()])
        );
    }
}
