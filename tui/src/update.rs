use std::time::Instant;

use sharkdeal_core::view::DealsView;
use tracing::{info, warn};

use crate::message::Message;
use crate::model::{MenuItem, Model, Popup, UpperPriceState};

/// Flags returned by update to signal side effects needed
#[derive(Debug)]
pub struct UpdateResult {
    pub msg: Option<Message>,
    pub needs_reload: bool,
    pub needs_save: bool,
}

impl UpdateResult {
    fn none() -> Self {
        Self {
            msg: None,
            needs_reload: false,
            needs_save: false,
        }
    }

    fn with_reload() -> Self {
        Self {
            msg: None,
            needs_reload: true,
            needs_save: false,
        }
    }

    fn with_msg(msg: Message) -> Self {
        Self {
            msg: Some(msg),
            needs_reload: false,
            needs_save: false,
        }
    }
}

pub fn update(model: &mut Model, msg: Message) -> UpdateResult {
    match msg {
        // ── Navigation ──────────────────────────────────────────────────
        Message::SelectNext => {
            let count = model.visible_deals().len();
            if count > 0 {
                let i = match model.ui.table_state.selected() {
                    Some(i) if i + 1 < count => i + 1,
                    _ => 0,
                };
                model.select(Some(i));
            }
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            let count = model.visible_deals().len();
            if count > 0 {
                let i = match model.ui.table_state.selected() {
                    Some(0) | None => count - 1,
                    Some(i) => (i - 1).min(count - 1),
                };
                model.select(Some(i));
            }
            UpdateResult::none()
        }
        Message::SelectFirst => {
            model.select(Some(0));
            UpdateResult::none()
        }
        Message::SelectLast => {
            let count = model.visible_deals().len();
            model.select(Some(count.saturating_sub(1)));
            UpdateResult::none()
        }
        Message::OpenSelectedDeal => {
            if let Some(url) = model.selected_deal().and_then(|deal| deal.url()) {
                if let Err(e) = webbrowser::open(&url) {
                    warn!(url, error = %e, "could not open browser");
                }
            }
            UpdateResult::none()
        }

        // ── Menu ────────────────────────────────────────────────────────
        Message::ToggleMenu => {
            model.ui.show_menu = !model.ui.show_menu;
            if model.ui.show_menu {
                model.ui.menu_selected = 0;
            }
            UpdateResult::none()
        }
        Message::MenuNext => {
            model.ui.menu_selected = (model.ui.menu_selected + 1) % MenuItem::ALL.len();
            UpdateResult::none()
        }
        Message::MenuPrevious => {
            if model.ui.menu_selected == 0 {
                model.ui.menu_selected = MenuItem::ALL.len() - 1;
            } else {
                model.ui.menu_selected -= 1;
            }
            UpdateResult::none()
        }
        Message::MenuSelect => {
            match MenuItem::ALL[model.ui.menu_selected] {
                MenuItem::Browse => {
                    model.ui.show_menu = false;
                }
                MenuItem::Keybinds => {
                    model.ui.popup = Popup::Keybinds;
                }
                MenuItem::Quit => {
                    return UpdateResult::with_msg(Message::Quit);
                }
            }
            UpdateResult::none()
        }

        // ── Filtering ───────────────────────────────────────────────────
        Message::StartFilter => {
            model.filter.active = true;
            model.filter.text = model.view.search_keyword().to_string();
            model.filter.text_before = model.filter.text.clone();
            UpdateResult::none()
        }
        Message::CancelFilter => {
            model.filter.active = false;
            model.filter.text = std::mem::take(&mut model.filter.text_before);
            model.apply_filter();
            UpdateResult::none()
        }
        Message::ConfirmFilter => {
            model.filter.active = false;
            model.filter.text_before.clear();
            model.apply_filter();
            UpdateResult::none()
        }
        Message::FilterPush(c) => {
            model.filter.text.push(c);
            model.filter.last_edit = Some(Instant::now());
            UpdateResult::none()
        }
        Message::FilterPop => {
            model.filter.text.pop();
            model.filter.last_edit = Some(Instant::now());
            UpdateResult::none()
        }
        Message::ClearFilter => {
            model.filter.text.clear();
            model.filter.active = false;
            model.apply_filter();
            UpdateResult::none()
        }

        // ── Upper price ─────────────────────────────────────────────────
        Message::OpenUpperPrice => {
            model.upper_price_input.input = model.upper_price().to_string();
            model.ui.popup = Popup::UpperPrice;
            UpdateResult::none()
        }
        Message::UpperPricePush(c) => {
            let input = &mut model.upper_price_input.input;
            let is_second_dot = c == '.' && input.contains('.');
            if (c.is_ascii_digit() || c == '.') && !is_second_dot && input.len() < UpperPriceState::MAX_LEN {
                input.push(c);
            }
            UpdateResult::none()
        }
        Message::UpperPricePop => {
            model.upper_price_input.input.pop();
            UpdateResult::none()
        }
        Message::UpperPriceApply => {
            model.ui.popup = Popup::None;
            match model.upper_price_input.parsed() {
                Some(price) if price != model.config.upper_price => {
                    info!(from = model.config.upper_price, to = price, "upper price changed");
                    model.config.upper_price = price;
                    UpdateResult {
                        msg: None,
                        needs_reload: true,
                        needs_save: true,
                    }
                }
                _ => UpdateResult::none(),
            }
        }

        // ── Popups ──────────────────────────────────────────────────────
        Message::ClosePopup => {
            model.ui.popup = Popup::None;
            UpdateResult::none()
        }

        // ── Data loading results ────────────────────────────────────────
        Message::DealsRefreshed { deals, stores } => {
            model.filter.active = false;
            model.filter.text.clear();
            model.filter.text_before.clear();
            model.filter.last_edit = None;
            model.replace_view(DealsView::fresh(deals, stores));
            model.set_loading(false);
            model.loading.fetched_once = true;
            UpdateResult::none()
        }
        Message::ThumbnailProbed { url, reachable } => {
            model.thumbnails.record(url, reachable);
            UpdateResult::none()
        }

        // ── System ──────────────────────────────────────────────────────
        Message::RequestRefresh => UpdateResult::with_reload(),

        Message::Tick => {
            if model.loading.deals {
                model.ui.spinner_frame = (model.ui.spinner_frame + 1) % 10;
            }
            if model.filter_due(Instant::now()) {
                model.apply_filter();
            }
            UpdateResult::none()
        }

        Message::Quit => {
            model.should_quit = true;
            UpdateResult::none()
        }
    }
}
