use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use sharkdeal_core::thumbnail::Thumbnail;

use super::styles::*;
use crate::model::Model;

pub fn render_deal_details(frame: &mut Frame, model: &Model, area: Rect, dimmed: bool) {
    let text_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let label_color = if dimmed { TEXT_DIMMED } else { TEAL_LIGHT };
    let border_color = if dimmed { TEXT_DIMMED } else { TEAL_ACCENT };
    let title_color = if dimmed { TEXT_DIMMED } else { TEXT_PRIMARY };
    let secondary_color = if dimmed { TEXT_DIMMED } else { TEXT_SECONDARY };

    let title = build_title("Deal Details", border_color, title_color);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let Some(deal) = model.selected_deal() else {
        let padding = vertical_padding(area.height, 1);
        let empty = Paragraph::new(format!("{}Select a deal to view details", padding))
            .alignment(Alignment::Center)
            .style(Style::default().fg(secondary_color))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let row = model.row_for(deal);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![Span::styled(
        row.title.clone(),
        Style::default().fg(text_color).add_modifier(Modifier::BOLD),
    )]));
    if let Some(date) = deal.release_date {
        lines.push(Line::from(vec![
            Span::styled("Released: ", Style::default().fg(label_color)),
            Span::styled(date.format("%Y-%m-%d").to_string(), Style::default().fg(secondary_color)),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Sale Price: ", Style::default().fg(label_color)),
        Span::styled(
            format!("{} USD", row.sale_price),
            Style::default()
                .fg(grade_color(deal.discount(), dimmed))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" (Normal: {} USD, -{}%)", row.normal_price, deal.discount()),
            Style::default().fg(secondary_color),
        ),
    ]));

    let score_color = match deal.metacritic_score {
        Some(score) => grade_color(score, dimmed),
        None => secondary_color,
    };
    lines.push(Line::from(vec![
        Span::styled("Metacritic: ", Style::default().fg(label_color)),
        Span::styled(row.metacritic.clone(), Style::default().fg(score_color)),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Store: ", Style::default().fg(label_color)),
        Span::styled(row.store_name.clone(), Style::default().fg(text_color)),
    ]));

    let thumbnail = match &row.thumbnail {
        Thumbnail::Image(url) => url.clone(),
        Thumbnail::Placeholder => "[placeholder]".to_string(),
        Thumbnail::Pending => "checking...".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Thumbnail: ", Style::default().fg(label_color)),
        Span::styled(thumbnail, Style::default().fg(secondary_color)),
    ]));

    if deal.url().is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(if dimmed { TEXT_DIMMED } else { SHORTCUT_KEY })),
            Span::styled(" open in browser", Style::default().fg(secondary_color)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
