use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::styles::*;
use crate::model::{MenuItem, Model};

pub fn render_menu_overlay(frame: &mut Frame, model: &Model) {
    let area = frame.area();

    let logo_width = LOGO.chars().count() as u16;
    let menu_width = 18u16;
    let menu_height = MenuItem::ALL.len() as u16 + 2;
    let total_height = 1 + 1 + menu_height;

    let start_y = area.height.saturating_sub(total_height) / 2;

    let logo_x = area.width.saturating_sub(logo_width) / 2;
    let logo_area = Rect::new(logo_x, start_y, logo_width.min(area.width), 1);

    frame.render_widget(Clear, logo_area);
    let logo = Paragraph::new(Line::from(Span::styled(
        LOGO,
        Style::default()
            .fg(TEAL_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    let menu_x = area.width.saturating_sub(menu_width) / 2;
    let menu_y = start_y + 2;
    let menu_area = Rect::new(menu_x, menu_y, menu_width.min(area.width), menu_height);

    frame.render_widget(Clear, menu_area);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == model.ui.menu_selected {
                Style::default()
                    .bg(BG_HIGHLIGHT)
                    .fg(TEAL_LIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            let prefix = if i == model.ui.menu_selected {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{}{}", prefix, item.name())).style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEAL_LIGHT)),
    );

    frame.render_widget(menu, menu_area);
}

pub fn render_keybinds_popup(frame: &mut Frame) {
    let area = frame.area();
    let popup_width = 45u16;
    let popup_height = 14u16;
    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    frame.render_widget(Clear, popup_area);

    let content = [
        "",
        "  [Up/Down] or [j/k]  Navigate",
        "  [Home/End] or [g/G] First/Last deal",
        "  [Enter]             Open deal",
        "  [f] or [/]          Filter by title",
        "  [c]                 Clear filter",
        "  [$]                 Maximum price",
        "  [r]                 Refresh deals",
        "  [Esc]               Menu / Close popup",
        "  [q]                 Quit (from menu)",
        "",
        "  [Esc] Close",
    ];

    let popup = Paragraph::new(content.join("\n"))
        .style(Style::default().fg(TEXT_PRIMARY))
        .block(
            Block::default()
                .title(Span::styled(" Keybinds ", Style::default().fg(TEAL_LIGHT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEAL_PRIMARY)),
        );

    frame.render_widget(popup, popup_area);
}

pub fn render_upper_price_popup(frame: &mut Frame, model: &Model) {
    let area = frame.area();
    let popup_width = 32u16;
    let popup_height = 9u16;
    let popup_x = area.width.saturating_sub(popup_width) / 2;
    let popup_y = area.height.saturating_sub(popup_height) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height).intersection(area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(" Maximum Price ", Style::default().fg(TEAL_LIGHT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEAL_ACCENT));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let input_style = if model.upper_price_input.parsed().is_some() {
        Style::default().fg(TEXT_PRIMARY).bg(TEAL_ACCENT)
    } else {
        Style::default().fg(ERROR_RED).bg(BG_HIGHLIGHT)
    };
    let display = format!("{}▋", model.upper_price_input.input);

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Max $: ", Style::default().fg(TEAL_LIGHT)),
            Span::styled(format!("{:<10}", display), input_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " [Enter] Apply  [Esc] Cancel",
            Style::default().fg(TEXT_SECONDARY),
        )),
    ];

    frame.render_widget(Paragraph::new(content), inner);
}
