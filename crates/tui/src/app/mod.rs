use std::time::{Duration, Instant};

use chrono::{DateTime, Local, NaiveDate};
use crossterm::event::{self, Event, KeyEvent};

use api_types::transaction::Transaction;

use crate::{
    client::Client,
    config::AppConfig,
    error::Result,
    filters::{DateBound, FilterDimension, FilterDraft, FilterSpec, QuickRange, visible_transactions},
    loader::{self, DashboardData, DashboardLoad},
    ui::{
        self,
        components::multi_select::{STATUS_OPTIONS, TYPE_OPTIONS, toggle_value},
        keymap::{AppAction, map_key},
    },
};

/// How long the simulated loading cycle after a filter change lasts. Matches
/// the web client's fixed feedback delay.
const FILTER_FEEDBACK: Duration = Duration::from_millis(1000);

const TOAST_TTL: Duration = Duration::from_secs(4);

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Top-level navigation sections. Only Revenue is implemented; the rest
/// render a placeholder, mirroring the dashboard's nav links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Analytics,
    Revenue,
    Crm,
    Apps,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::Home,
        Self::Analytics,
        Self::Revenue,
        Self::Crm,
        Self::Apps,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Analytics => "Analytics",
            Self::Revenue => "Revenue",
            Self::Crm => "CRM",
            Self::Apps => "Apps",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Home => Self::Analytics,
            Self::Analytics => Self::Revenue,
            Self::Revenue => Self::Crm,
            Self::Crm => Self::Apps,
            Self::Apps => Self::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A transient notice rendered in the bottom-right corner; expired on tick.
#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    pub raised_at: Instant,
}

/// Focus targets inside the filter drawer, cycled with Tab in the order they
/// appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Presets,
    StartDate,
    EndDate,
    TypeSelect,
    StatusSelect,
    ClearButton,
    ApplyButton,
}

impl PanelField {
    fn next(self) -> Self {
        match self {
            Self::Presets => Self::StartDate,
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::TypeSelect,
            Self::TypeSelect => Self::StatusSelect,
            Self::StatusSelect => Self::ClearButton,
            Self::ClearButton => Self::ApplyButton,
            Self::ApplyButton => Self::Presets,
        }
    }
}

/// The slide-out filter drawer: open/closed flag, the uncommitted edit
/// buffer and purely local widget state (focus, cursors, raw date text).
///
/// Nothing here touches the committed [`FilterSpec`]; only the apply and
/// clear actions on [`AppState`] do.
#[derive(Debug)]
pub struct FilterPanel {
    pub open: bool,
    pub draft: FilterDraft,
    pub focus: PanelField,
    pub preset_cursor: usize,
    pub start_input: String,
    pub end_input: String,
    pub date_error: Option<String>,
    pub type_cursor: usize,
    pub status_cursor: usize,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self {
            open: false,
            draft: FilterDraft::default(),
            focus: PanelField::Presets,
            preset_cursor: 0,
            start_input: String::new(),
            end_input: String::new(),
            date_error: None,
            type_cursor: 0,
            status_cursor: 0,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub data: DashboardData,
    /// The committed filter; rewritten only through apply/clear.
    pub filters: FilterSpec,
    pub panel: FilterPanel,
    pub selected: usize,
    /// True while a load batch is in flight.
    pub loading: bool,
    /// Deadline of the simulated loading cycle after a filter change.
    pub loading_until: Option<Instant>,
    pub toast: Option<ToastState>,
    pub last_refresh: Option<DateTime<Local>>,
    pub connection_ok: bool,
    pub spinner_frame: usize,
    pub base_url: String,
}

impl AppState {
    pub fn new(base_url: String) -> Self {
        Self {
            section: Section::Revenue,
            data: DashboardData::default(),
            filters: FilterSpec::default(),
            panel: FilterPanel::default(),
            selected: 0,
            loading: true,
            loading_until: None,
            toast: None,
            last_refresh: None,
            connection_ok: true,
            spinner_frame: 0,
            base_url,
        }
    }

    /// The derived list: the full set filtered through the committed spec.
    /// Recomputed on every call, never cached.
    pub fn visible(&self) -> Vec<&Transaction> {
        visible_transactions(&self.data.transactions, &self.filters)
    }

    pub fn is_loading(&self, now: Instant) -> bool {
        self.loading || self.loading_until.is_some_and(|deadline| now < deadline)
    }

    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Advances animation state and expires the filter-feedback deadline and
    /// any stale toast.
    pub fn tick(&mut self, now: Instant) {
        if self.is_loading(now) {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        if self.loading_until.is_some_and(|deadline| now >= deadline) {
            self.loading_until = None;
        }
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now.duration_since(toast.raised_at) >= TOAST_TTL)
        {
            self.toast = None;
        }
    }

    pub fn raise_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(ToastState {
            message: message.into(),
            level,
            raised_at: Instant::now(),
        });
    }

    /// Folds a settled load batch into the state. Failed reads were already
    /// reported as notices; their slots stay unset.
    pub fn apply_load(&mut self, load: DashboardLoad, at: DateTime<Local>) {
        self.connection_ok = load.failures.is_empty();
        if !load.failures.is_empty() {
            self.raise_toast(ToastLevel::Error, load.failures.join(", "));
        }
        self.data = load.data;
        self.last_refresh = Some(at);
        self.loading = false;
        self.selected = 0;
    }

    /// Starts the fixed loading cycle shown after every committed-filter
    /// change, independent of network state.
    pub fn begin_filter_feedback(&mut self, now: Instant) {
        self.loading_until = Some(now + FILTER_FEEDBACK);
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    // ---- filter drawer ----

    /// Opens the drawer with a fresh edit buffer; the date inputs show the
    /// committed range so edits start from what is applied.
    pub fn open_filter_panel(&mut self) {
        let mut panel = FilterPanel::default();
        if let Some(range) = self.filters.date_range {
            panel.start_input = range.start.to_string();
            panel.end_input = range.end.to_string();
        }
        panel.open = true;
        self.panel = panel;
    }

    /// Closes the drawer and discards the edit buffer; the committed spec is
    /// untouched.
    pub fn cancel_filter_panel(&mut self) {
        self.panel = FilterPanel::default();
    }

    pub fn panel_focus_next(&mut self) {
        // Leaving a date field stages its text; an invalid date keeps focus
        // on the field with the error shown.
        let bound = match self.panel.focus {
            PanelField::StartDate => Some(DateBound::Start),
            PanelField::EndDate => Some(DateBound::End),
            _ => None,
        };
        if let Some(bound) = bound
            && !self.commit_date_input(bound)
        {
            return;
        }
        self.panel.focus = self.panel.focus.next();
    }

    /// Parses one date field and stages it into the edit buffer. Empty text
    /// is a no-op; invalid text sets a field error and returns false.
    pub fn commit_date_input(&mut self, bound: DateBound) -> bool {
        let input = match bound {
            DateBound::Start => self.panel.start_input.trim(),
            DateBound::End => self.panel.end_input.trim(),
        };
        if input.is_empty() {
            return true;
        }
        match input.parse::<NaiveDate>() {
            Ok(date) => {
                self.panel.draft.stage_date_bound(bound, date, &self.filters);
                self.panel.date_error = None;
                true
            }
            Err(_) => {
                self.panel.date_error = Some("Dates must be YYYY-MM-DD".to_string());
                false
            }
        }
    }

    pub fn panel_left(&mut self) {
        if self.panel.focus == PanelField::Presets {
            self.panel.preset_cursor = self.panel.preset_cursor.saturating_sub(1);
        }
    }

    pub fn panel_right(&mut self) {
        if self.panel.focus == PanelField::Presets {
            self.panel.preset_cursor = (self.panel.preset_cursor + 1).min(QuickRange::ALL.len() - 1);
        }
    }

    pub fn panel_up(&mut self) {
        match self.panel.focus {
            PanelField::TypeSelect => {
                self.panel.type_cursor = self.panel.type_cursor.saturating_sub(1);
            }
            PanelField::StatusSelect => {
                self.panel.status_cursor = self.panel.status_cursor.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn panel_down(&mut self) {
        match self.panel.focus {
            PanelField::TypeSelect => {
                self.panel.type_cursor = (self.panel.type_cursor + 1).min(TYPE_OPTIONS.len() - 1);
            }
            PanelField::StatusSelect => {
                self.panel.status_cursor =
                    (self.panel.status_cursor + 1).min(STATUS_OPTIONS.len() - 1);
            }
            _ => {}
        }
    }

    /// Character input while the drawer is open: digits and dashes feed the
    /// focused date field, space activates the focused control.
    pub fn panel_input(&mut self, ch: char, today: NaiveDate) {
        if ch == ' ' {
            self.panel_activate(today);
            return;
        }
        if !(ch.is_ascii_digit() || ch == '-') {
            return;
        }
        match self.panel.focus {
            PanelField::StartDate => self.panel.start_input.push(ch),
            PanelField::EndDate => self.panel.end_input.push(ch),
            _ => {}
        }
    }

    pub fn panel_backspace(&mut self) {
        match self.panel.focus {
            PanelField::StartDate => {
                self.panel.start_input.pop();
            }
            PanelField::EndDate => {
                self.panel.end_input.pop();
            }
            _ => {}
        }
    }

    fn panel_activate(&mut self, today: NaiveDate) {
        match self.panel.focus {
            PanelField::Presets => {
                let preset = QuickRange::ALL[self.panel.preset_cursor];
                self.panel.draft.stage_preset(preset, today);
                if let Some(range) = self.panel.draft.date_range {
                    self.panel.start_input = range.start.to_string();
                    self.panel.end_input = range.end.to_string();
                }
                self.panel.date_error = None;
            }
            PanelField::TypeSelect => {
                let value = TYPE_OPTIONS[self.panel.type_cursor].value;
                self.toggle_option(FilterDimension::TransactionType, value);
            }
            PanelField::StatusSelect => {
                let value = STATUS_OPTIONS[self.panel.status_cursor].value;
                self.toggle_option(FilterDimension::TransactionStatus, value);
            }
            _ => {}
        }
    }

    /// The selection the drawer shows for a dimension: staged if present,
    /// else committed, else empty.
    pub fn effective_selection(&self, dimension: FilterDimension) -> &[String] {
        let (draft, committed) = match dimension {
            FilterDimension::TransactionType => {
                (&self.panel.draft.transaction_type, &self.filters.transaction_type)
            }
            FilterDimension::TransactionStatus => (
                &self.panel.draft.transaction_status,
                &self.filters.transaction_status,
            ),
        };
        draft
            .as_deref()
            .or(committed.as_deref())
            .unwrap_or_default()
    }

    /// Toggles one option and stages the resulting selection wholesale.
    pub fn toggle_option(&mut self, dimension: FilterDimension, value: &str) {
        let next = toggle_value(self.effective_selection(dimension), value);
        self.panel.draft.stage_multi_select(dimension, next);
    }

    /// Enter inside the drawer: the Clear button clears, everything else
    /// applies.
    pub fn panel_submit(&mut self, now: Instant) {
        if self.panel.focus == PanelField::ClearButton {
            self.clear_filters(now);
            return;
        }
        self.apply_panel(now);
    }

    /// Merges the edit buffer into the committed spec and closes the drawer.
    /// A pending invalid date keeps the drawer open with the error shown.
    pub fn apply_panel(&mut self, now: Instant) {
        if !self.commit_date_input(DateBound::Start) || !self.commit_date_input(DateBound::End) {
            return;
        }
        let draft = std::mem::take(&mut self.panel.draft);
        draft.merge_into(&mut self.filters);
        self.panel = FilterPanel::default();
        self.begin_filter_feedback(now);
        self.selected = 0;
    }

    /// Resets the committed spec to empty, discards any edit buffer, closes
    /// the drawer and raises a confirmation notice.
    pub fn clear_filters(&mut self, now: Instant) {
        self.filters.clear();
        self.panel = FilterPanel::default();
        self.raise_toast(ToastLevel::Success, "Filters cleared");
        self.begin_filter_feedback(now);
        self.selected = 0;
    }
}

pub struct App {
    client: Client,
    pub state: AppState,
    should_quit: bool,
    bootstrapped: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let state = AppState::new(config.base_url);

        Ok(Self {
            client,
            state,
            should_quit: false,
            bootstrapped: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.state.tick(Instant::now());
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| crate::error::AppError::Terminal(err.to_string()))?;

            // Draw the loading overlay once before the initial batch.
            if !self.bootstrapped {
                self.bootstrapped = true;
                self.refresh().await;
                continue;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn refresh(&mut self) {
        self.state.loading = true;
        let load = loader::load_dashboard(&self.client).await;
        self.state.apply_load(load, Local::now());
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        let today = Local::now().date_naive();
        let panel_open = self.state.panel.open;

        match map_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => {
                if panel_open {
                    self.state.cancel_filter_panel();
                }
            }
            AppAction::NextField => {
                if panel_open {
                    self.state.panel_focus_next();
                } else {
                    self.state.section = self.state.section.next();
                }
            }
            AppAction::Submit => {
                if panel_open {
                    self.state.panel_submit(now);
                }
            }
            AppAction::Backspace => {
                if panel_open {
                    self.state.panel_backspace();
                }
            }
            AppAction::Up => {
                if panel_open {
                    self.state.panel_up();
                } else {
                    self.state.select_prev();
                }
            }
            AppAction::Down => {
                if panel_open {
                    self.state.panel_down();
                } else {
                    self.state.select_next();
                }
            }
            AppAction::Left => {
                if panel_open {
                    self.state.panel_left();
                }
            }
            AppAction::Right => {
                if panel_open {
                    self.state.panel_right();
                }
            }
            AppAction::Input(ch) => {
                if panel_open {
                    self.state.panel_input(ch, today);
                } else {
                    self.handle_browse_key(ch, now).await;
                }
            }
            AppAction::None => {}
        }
    }

    async fn handle_browse_key(&mut self, ch: char, now: Instant) {
        match ch {
            '/' => {
                if self.state.section == Section::Revenue {
                    self.state.open_filter_panel();
                }
            }
            'c' | 'C' => {
                if self.state.section == Section::Revenue && !self.state.filters.is_empty() {
                    self.state.clear_filters(now);
                }
            }
            'r' | 'R' => {
                self.refresh().await;
            }
            'j' | 'J' => {
                if self.state.section == Section::Revenue {
                    self.state.select_next();
                }
            }
            'k' | 'K' => {
                if self.state.section == Section::Revenue {
                    self.state.select_prev();
                }
            }
            _ => {}
        }
    }
}
