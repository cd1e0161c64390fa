use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Submit,
    Insert(char),
    Backspace,
    ScrollUp,
    ScrollDown,
    Close,
}

pub fn action_for_key(key: KeyEvent) -> Option<PanelAction> {
    // Windows reports releases too.
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => Some(PanelAction::Close),

        // Enter is the primary submission key; Ctrl+S is the explicit send action.
        (_, KeyCode::Enter) | (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
            Some(PanelAction::Submit)
        }

        (_, KeyCode::Backspace) => Some(PanelAction::Backspace),
        (_, KeyCode::PageUp) | (_, KeyCode::Up) => Some(PanelAction::ScrollUp),
        (_, KeyCode::PageDown) | (_, KeyCode::Down) => Some(PanelAction::ScrollDown),

        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Some(PanelAction::Insert(c))
        }

        _ => None,
    }
}
