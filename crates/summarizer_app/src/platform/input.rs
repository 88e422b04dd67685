use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use summarizer_core::{AppViewModel, Msg};

const PAGE_LINES: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    /// Scroll the result panel by this many lines (negative is up).
    Scroll(i32),
    Quit,
    Ignore,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => edit(view, String::new()),
        KeyCode::Enter if view.submit_enabled => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::Backspace => {
            let mut text = view.input.clone();
            text.pop();
            edit(view, text)
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut text = view.input.clone();
            text.push(ch);
            edit(view, text)
        }
        KeyCode::Up => KeyAction::Scroll(-1),
        KeyCode::Down => KeyAction::Scroll(1),
        KeyCode::PageUp => KeyAction::Scroll(-PAGE_LINES),
        KeyCode::PageDown => KeyAction::Scroll(PAGE_LINES),
        _ => KeyAction::Ignore,
    }
}

/// Bracketed paste; line breaks are dropped since the input is one line.
pub fn map_paste(pasted: &str, view: &AppViewModel) -> KeyAction {
    let mut text = view.input.clone();
    text.extend(pasted.chars().filter(|ch| !matches!(ch, '\r' | '\n')));
    edit(view, text)
}

fn edit(view: &AppViewModel, text: String) -> KeyAction {
    if view.input_enabled {
        KeyAction::Dispatch(Msg::InputChanged(text))
    } else {
        KeyAction::Ignore
    }
}
