use futures::StreamExt;
use tokio::sync::mpsc;

use super::actions::*;
use super::*;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl App {
    /// Forward terminal input to the main loop until the app's token is
    /// cancelled or the loop stops listening.
    pub fn handle_events(&self, tx: mpsc::UnboundedSender<Action>) -> tokio::task::JoinHandle<()> {
        let token = self.token.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                let action = tokio::select! {
                    _ = token.cancelled() => break,
                    event = reader.next() => match event {
                        Some(Ok(Event::Key(key))) => handle_key_event(key),
                        Some(Ok(Event::Resize(_, _))) => Some(Action::Render),
                        Some(Ok(_)) => None,
                        Some(Err(err)) => {
                            tracing::error!(%err, "reading terminal events failed");
                            break;
                        }
                        None => break,
                    },
                };
                if let Some(action) = action {
                    if tx.send(action).is_err() {
                        break;
                    }
                }
            }
        })
    }
}

fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let action = match key.code {
        KeyCode::Esc => Action::Exit,
        // raw mode swallows the signal
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Exit,

        KeyCode::Char(x) if x.is_ascii_alphabetic() => Action::Guess(x.to_ascii_lowercase()),
        KeyCode::Enter => Action::NewGame,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Option<Action> {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn letters_become_guesses() {
        assert_eq!(press(KeyCode::Char('q')), Some(Action::Guess('q')));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(Action::Guess('q'))
        );
    }

    #[test]
    fn control_keys() {
        assert_eq!(press(KeyCode::Esc), Some(Action::Exit));
        assert_eq!(press(KeyCode::Enter), Some(Action::NewGame));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Exit)
        );
        assert_eq!(press(KeyCode::Char('7')), None);
        assert_eq!(press(KeyCode::Tab), None);
    }

    #[test]
    fn releases_are_ignored() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(key), None);
    }
}
