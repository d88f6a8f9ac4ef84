use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    CursorLeft,
    CursorRight,
    NextFocus,
    PrevFocus,
    Select,
    EditQuery,
    EditStats,
    InputChar(char),
    InputBackspace,
    InputSwitch,
    InputConfirm,
    InputCancel,
    Help,
    ClosePopup,
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Query,
    Owner,
    Repo,
}

impl InputMode {
    pub fn is_editing(self) -> bool {
        self != InputMode::Normal
    }
}

pub fn map_key(key: KeyEvent, mode: InputMode) -> Action {
    if mode.is_editing() {
        return match key.code {
            KeyCode::Esc => Action::InputCancel,
            KeyCode::Enter => Action::InputConfirm,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Tab | KeyCode::BackTab => Action::InputSwitch,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char(c) => Action::InputChar(c),
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::Char('h') | KeyCode::Left => Action::CursorLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::CursorRight,
        KeyCode::Tab => Action::NextFocus,
        KeyCode::BackTab => Action::PrevFocus,
        KeyCode::Enter => Action::Select,
        KeyCode::Char('/') | KeyCode::Char('s') => Action::EditQuery,
        KeyCode::Char('o') => Action::EditStats,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc => Action::ClosePopup,
        _ => Action::None,
    }
}
