//! Semantic input events so the event loop does not depend on raw key codes.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use respondee::dashboard::FocusMove;
use respondee::screen::ScreenCommand;
use respondee::ui::{HitTarget, ScreenLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    Quit,
    Command(ScreenCommand),
    Redraw,
    Ignored,
}

/// Decode `event`; clicks resolve against the layout of the last drawn frame.
pub(crate) fn map_event(event: &Event, layout: &ScreenLayout) -> InputEvent {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => layout
            .hit_test(mouse.column, mouse.row)
            .and_then(HitTarget::command)
            .map_or(InputEvent::Ignored, InputEvent::Command),
        Event::Resize(..) => InputEvent::Redraw,
        _ => InputEvent::Ignored,
    }
}

pub(crate) fn map_key(key: &KeyEvent) -> InputEvent {
    if key.kind != KeyEventKind::Press {
        return InputEvent::Ignored;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => InputEvent::Quit,
            _ => InputEvent::Ignored,
        };
    }
    let command = match key.code {
        KeyCode::Char('q') => return InputEvent::Quit,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => ScreenCommand::Focus(FocusMove::Next),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            ScreenCommand::Focus(FocusMove::Previous)
        }
        KeyCode::Up | KeyCode::Char('k') => ScreenCommand::Focus(FocusMove::Up),
        KeyCode::Down | KeyCode::Char('j') => ScreenCommand::Focus(FocusMove::Down),
        KeyCode::Enter | KeyCode::Char(' ') => ScreenCommand::ActivateFocused,
        KeyCode::Char(digit @ '1'..='8') => {
            let Some(number) = digit.to_digit(10) else {
                return InputEvent::Ignored;
            };
            ScreenCommand::ActivateShortcut(number as usize - 1)
        }
        KeyCode::Char('x') | KeyCode::Esc => ScreenCommand::DismissBanner,
        KeyCode::Char('b') => ScreenCommand::RestoreBanner,
        KeyCode::Char('v') => ScreenCommand::VerifyNow,
        _ => return InputEvent::Ignored,
    };
    InputEvent::Command(command)
}
