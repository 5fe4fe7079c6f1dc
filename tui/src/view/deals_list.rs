use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState,
        Table,
    },
    Frame,
};
use sharkdeal_core::display::EMPTY_LIST_MESSAGE;
use sharkdeal_core::thumbnail::Thumbnail;

use super::styles::*;
use crate::model::Model;

pub fn render_deals_list(frame: &mut Frame, model: &mut Model, area: Rect, dimmed: bool) {
    let text_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let border_color = if dimmed { TEXT_DIMMED } else { TEAL_ACCENT };
    let title_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };

    let title_text = format!("Deals [under ${}]", model.upper_price());
    let title = build_title(&title_text, border_color, title_color);

    let status_line = build_status_line(model, dimmed);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_bottom(status_line);

    if model.loading.deals && !model.loading.fetched_once {
        let spinner = model.spinner_char();
        let padding = vertical_padding(area.height, 1);
        let loading = Paragraph::new(format!("{}{} Loading deals...", padding, spinner))
            .alignment(Alignment::Center)
            .style(Style::default().fg(text_color))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if model.visible_deals().is_empty() {
        let padding = vertical_padding(area.height, 1);
        let empty = Paragraph::new(format!("{}{}", padding, EMPTY_LIST_MESSAGE))
            .alignment(Alignment::Center)
            .style(Style::default().fg(text_color))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Title").style(Style::default().fg(header_color)),
        Cell::from("Sale").style(Style::default().fg(header_color)),
        Cell::from("Normal").style(Style::default().fg(header_color)),
        Cell::from("Store").style(Style::default().fg(header_color)),
    ]);

    let rows: Vec<Row> = model
        .visible_deals()
        .iter()
        .map(|deal| {
            let row = model.row_for(deal);
            let secondary = if dimmed { TEXT_DIMMED } else { TEXT_SECONDARY };
            let price_color = grade_color(deal.discount(), dimmed);

            let thumb_marker = match row.thumbnail {
                Thumbnail::Image(_) => "▣",
                Thumbnail::Placeholder => "□",
                Thumbnail::Pending => "·",
            };

            Row::new(vec![
                Cell::from(thumb_marker).style(Style::default().fg(secondary)),
                Cell::from(row.title).style(Style::default().fg(secondary)),
                Cell::from(format!("${}", row.sale_price)).style(Style::default().fg(price_color)),
                Cell::from(format!("${}", row.normal_price)).style(
                    Style::default()
                        .fg(secondary)
                        .add_modifier(Modifier::CROSSED_OUT),
                ),
                Cell::from(row.store_name).style(Style::default().fg(secondary)),
            ])
        })
        .collect();

    let highlight_style = if dimmed {
        Style::default().fg(TEXT_DIMMED)
    } else {
        Style::default().bg(BG_HIGHLIGHT)
    };

    let total_items = model.visible_deals().len();
    let selected = model.ui.table_state.selected().unwrap_or(0);

    // Spinner in place of the trailing space so the width stays put
    let counter_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let suffix = if model.loading.deals {
        model.spinner_char().to_string()
    } else {
        " ".to_string()
    };
    let counter = Span::styled(
        format!(" {}/{} {} ", selected + 1, total_items, suffix),
        Style::default()
            .fg(counter_color)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(1),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title_bottom(Line::from(counter).alignment(Alignment::Right)))
        .row_highlight_style(highlight_style)
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut model.ui.table_state);

    let scrollbar_track_color = if dimmed { TEXT_DIMMED } else { TEAL_ACCENT };
    let scrollbar_arrow_color = if dimmed { TEXT_DIMMED } else { SHORTCUT_KEY };

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("█")
        .style(Style::default().fg(scrollbar_track_color))
        .begin_style(Style::default().fg(scrollbar_arrow_color))
        .end_style(Style::default().fg(scrollbar_arrow_color));

    let mut scrollbar_state = ScrollbarState::new(total_items).position(selected);

    let scrollbar_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

/// Build status bar line with btop-style highlighted shortcut keys and separators
fn build_status_line(model: &Model, dimmed: bool) -> Line<'static> {
    let text_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let shortcut_color = if dimmed { TEXT_DIMMED } else { SHORTCUT_KEY };
    let value_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let border_color = if dimmed { TEXT_DIMMED } else { TEAL_ACCENT };

    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled("┘", Style::default().fg(border_color)));

    // Filter
    if model.filter.active {
        spans.push(Span::styled("f ", Style::default().fg(shortcut_color)));
        spans.push(Span::styled(
            model.filter.text.clone(),
            Style::default().fg(text_color),
        ));
        spans.push(Span::styled("_", Style::default().fg(text_color)));
        spans.push(Span::styled(" ⏎", Style::default().fg(shortcut_color)));
    } else if !model.view.search_keyword().is_empty() {
        spans.push(Span::styled("f", Style::default().fg(shortcut_color)));
        spans.push(Span::styled(
            format!("[{}] ", model.view.search_keyword()),
            Style::default().fg(value_color),
        ));
        spans.push(Span::styled("c", Style::default().fg(shortcut_color)));
        spans.push(Span::styled("lear", Style::default().fg(text_color)));
    } else {
        spans.push(Span::styled("f", Style::default().fg(shortcut_color)));
        spans.push(Span::styled("ilter", Style::default().fg(text_color)));
    }

    spans.push(Span::styled("└┘", Style::default().fg(border_color)));

    // Upper price
    spans.push(Span::styled("$", Style::default().fg(shortcut_color)));
    spans.push(Span::styled(
        format!("[{}]", model.upper_price()),
        Style::default().fg(value_color),
    ));

    spans.push(Span::styled("└┘", Style::default().fg(border_color)));

    // Refresh
    spans.push(Span::styled("r", Style::default().fg(shortcut_color)));
    spans.push(Span::styled("efresh", Style::default().fg(text_color)));

    spans.push(Span::styled("└", Style::default().fg(border_color)));

    Line::from(spans)
}
