use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use sharkdeal_core::display::DealRow;
use sharkdeal_core::models::Deal;
use sharkdeal_core::thumbnail::ThumbnailCache;
use sharkdeal_core::view::DealsView;

use crate::config::Config;

// ── Enums ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Browse,
    Keybinds,
    Quit,
}

impl MenuItem {
    pub const ALL: &'static [MenuItem] = &[MenuItem::Browse, MenuItem::Keybinds, MenuItem::Quit];

    pub fn name(&self) -> &str {
        match self {
            MenuItem::Browse => "BROWSE DEALS",
            MenuItem::Keybinds => "KEYBINDS",
            MenuItem::Quit => "QUIT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Keybinds,
    UpperPrice,
}

// ── Sub-states ──────────────────────────────────────────────────────────────

/// Search field. `text` is what the user typed; the view only catches up
/// once the debounce delay has passed since `last_edit`.
#[derive(Debug, Default)]
pub struct FilterState {
    pub active: bool,
    pub text: String,
    pub text_before: String,
    pub last_edit: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct UpperPriceState {
    pub input: String,
}

impl UpperPriceState {
    pub const MAX_LEN: usize = 8;

    /// Parsed input, if it is a usable positive price
    pub fn parsed(&self) -> Option<f64> {
        self.input
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    }
}

#[derive(Default)]
pub struct LoadingState {
    pub deals: bool,
    pub fetched_once: bool,
}

pub struct UiState {
    pub show_menu: bool,
    pub menu_selected: usize,
    pub popup: Popup,
    pub table_state: TableState,
    pub spinner_frame: usize,
}

impl Default for UiState {
    fn default() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            show_menu: false,
            menu_selected: 0,
            popup: Popup::None,
            table_state,
            spinner_frame: 0,
        }
    }
}

// ── Model ───────────────────────────────────────────────────────────────────

pub struct Model {
    // Data
    pub view: DealsView,
    pub thumbnails: ThumbnailCache,

    // UI
    pub ui: UiState,

    // Filters
    pub filter: FilterState,
    pub upper_price_input: UpperPriceState,

    // Loading
    pub loading: LoadingState,

    // Config
    pub config: Config,

    // Control
    pub should_quit: bool,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            view: DealsView::default(),
            thumbnails: ThumbnailCache::new(),
            ui: UiState::default(),
            filter: FilterState::default(),
            upper_price_input: UpperPriceState::default(),
            loading: LoadingState::default(),
            config,
            should_quit: false,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading.deals = loading;
        if loading {
            self.ui.spinner_frame = 0;
        }
    }

    pub fn upper_price(&self) -> f64 {
        self.config.upper_price
    }

    /// Replace the view with freshly fetched deals
    pub fn replace_view(&mut self, view: DealsView) {
        self.view = view;
        self.select(Some(0));
    }

    /// Rebuild the view from the search field right away
    pub fn apply_filter(&mut self) {
        self.filter.last_edit = None;
        if self.view.search_keyword() != self.filter.text {
            let view = self.view.with_keyword(&self.filter.text);
            self.replace_view(view);
        }
    }

    /// True once the search field has been quiet for the debounce delay
    pub fn filter_due(&self, now: Instant) -> bool {
        self.filter
            .last_edit
            .is_some_and(|edited| now.saturating_duration_since(edited) >= self.filter_debounce())
    }

    fn filter_debounce(&self) -> Duration {
        self.config.filter_debounce()
    }

    // ── Query methods ───────────────────────────────────────────────────

    pub fn visible_deals(&self) -> &[Deal] {
        self.view.visible_deals()
    }

    pub fn selected_deal(&self) -> Option<&Deal> {
        self.ui
            .table_state
            .selected()
            .and_then(|i| self.visible_deals().get(i))
    }

    pub fn row_for(&self, deal: &Deal) -> DealRow {
        DealRow::new(deal, self.view.stores(), self.thumbnails.resolve(deal))
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        SPINNER_FRAMES[self.ui.spinner_frame]
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.ui.table_state.select(index);
    }
}
