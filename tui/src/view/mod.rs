pub mod deal_details;
pub mod deals_list;
pub mod popups;
pub mod styles;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::model::{Model, Popup};
use styles::BG_DARK;

pub fn view(frame: &mut Frame, model: &mut Model) {
    let bg_block = Block::default().style(Style::default().bg(BG_DARK));
    frame.render_widget(bg_block, frame.area());

    let dimmed = model.ui.show_menu;
    render_main(frame, model, dimmed);

    if model.ui.show_menu {
        popups::render_menu_overlay(frame, model);
    }

    match model.ui.popup {
        Popup::None => {}
        Popup::Keybinds => popups::render_keybinds_popup(frame),
        Popup::UpperPrice => popups::render_upper_price_popup(frame, model),
    }
}

fn render_main(frame: &mut Frame, model: &mut Model, dimmed: bool) {
    // 60% deals table, 40% details of the selected deal
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(frame.area());

    deals_list::render_deals_list(frame, model, chunks[0], dimmed);
    deal_details::render_deal_details(frame, model, chunks[1], dimmed);
}
