use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::message::Message;
use crate::model::{Model, Popup};

pub fn handle_event(model: &Model, poll_duration: std::time::Duration) -> Result<Option<Message>> {
    if !event::poll(poll_duration)? {
        return Ok(Some(Message::Tick));
    }
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            return Ok(handle_key(model, key.code));
        }
    }
    Ok(None)
}

fn handle_key(model: &Model, code: KeyCode) -> Option<Message> {
    match model.ui.popup {
        Popup::Keybinds => handle_keybinds_key(code),
        Popup::UpperPrice => handle_upper_price_key(code),
        Popup::None if model.ui.show_menu => handle_menu_key(code),
        Popup::None if model.filter.active => handle_filter_key(code),
        Popup::None => handle_main_key(code),
    }
}

fn handle_keybinds_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc => Some(Message::ClosePopup),
        _ => None,
    }
}

fn handle_upper_price_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc => Some(Message::ClosePopup),
        KeyCode::Enter => Some(Message::UpperPriceApply),
        KeyCode::Backspace => Some(Message::UpperPricePop),
        KeyCode::Char(c) => Some(Message::UpperPricePush(c)),
        _ => None,
    }
}

fn handle_menu_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc => Some(Message::ToggleMenu),
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::MenuNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::MenuPrevious),
        KeyCode::Enter => Some(Message::MenuSelect),
        _ => None,
    }
}

fn handle_filter_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc => Some(Message::CancelFilter),
        KeyCode::Enter => Some(Message::ConfirmFilter),
        KeyCode::Backspace => Some(Message::FilterPop),
        KeyCode::Char(c) => Some(Message::FilterPush(c)),
        _ => None,
    }
}

fn handle_main_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::ToggleMenu),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::SelectPrevious),
        KeyCode::Home | KeyCode::Char('g') => Some(Message::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => Some(Message::SelectLast),
        KeyCode::Char('f') | KeyCode::Char('/') => Some(Message::StartFilter),
        KeyCode::Enter => Some(Message::OpenSelectedDeal),
        KeyCode::Char('r') => Some(Message::RequestRefresh),
        KeyCode::Char('c') => Some(Message::ClearFilter),
        KeyCode::Char('$') => Some(Message::OpenUpperPrice),
        _ => None,
    }
}
