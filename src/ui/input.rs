use crate::ui::app::App;
use crate::ui::browse::ViewIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key bindings. The search field always has focus, so printable
/// characters go to the search term and commands use Ctrl or non-text keys.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') || key.code == KeyCode::F(5) {
        app.request_refresh();
        return;
    }

    let intent = match key.code {
        KeyCode::Esc => ViewIntent::SearchCleared,
        KeyCode::Backspace => ViewIntent::SearchBackspace,
        KeyCode::Left | KeyCode::PageUp => ViewIntent::PrevPage,
        KeyCode::Right | KeyCode::PageDown => ViewIntent::NextPage,
        KeyCode::Home => ViewIntent::FirstPage,
        KeyCode::End => ViewIntent::LastPage,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            ViewIntent::SearchInput(ch)
        }
        _ => return,
    };
    app.dispatch_view(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
