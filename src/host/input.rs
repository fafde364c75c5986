//! Line-based input mapped onto click and key press events

use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Events the host delivers to the stopwatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Click on the display surface
    Click,
    /// Key press, identified by its physical key code (`Space`, `KeyP`, ...)
    KeyPress(String),
    /// The host is going away
    Unload,
}

/// Map a typed character onto a physical key code
pub fn key_code(c: char) -> Option<String> {
    match c {
        ' ' => Some("Space".to_string()),
        '\n' | '\r' => Some("Enter".to_string()),
        c if c.is_ascii_alphabetic() => Some(format!("Key{}", c.to_ascii_uppercase())),
        c if c.is_ascii_digit() => Some(format!("Digit{}", c)),
        _ => None,
    }
}

/// Events for one input line: an empty line is a click, otherwise one key
/// press per recognised character
pub fn parse_line(line: &str) -> Vec<InputEvent> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return vec![InputEvent::Click];
    }
    line.chars()
        .filter_map(key_code)
        .map(InputEvent::KeyPress)
        .collect()
}

/// Forward input from `reader` until EOF or until the receiver is gone.
///
/// Blocks the calling thread; run it on a dedicated thread so a pending read
/// never holds up runtime shutdown.
pub fn read_input<R: BufRead>(reader: R, tx: mpsc::Sender<InputEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                return;
            }
        };
        for event in parse_line(&line) {
            debug!("Input event: {:?}", event);
            if tx.blocking_send(event).is_err() {
                return;
            }
        }
    }
    info!("Input closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_browser_key_codes() {
        assert_eq!(key_code(' ').as_deref(), Some("Space"));
        assert_eq!(key_code('p').as_deref(), Some("KeyP"));
        assert_eq!(key_code('R').as_deref(), Some("KeyR"));
        assert_eq!(key_code('7').as_deref(), Some("Digit7"));
        assert_eq!(key_code('#'), None);
    }

    #[test]
    fn empty_line_is_click() {
        assert_eq!(parse_line(""), vec![InputEvent::Click]);
        assert_eq!(parse_line("\r\n"), vec![InputEvent::Click]);
    }

    #[test]
    fn each_character_is_a_key_press() {
        assert_eq!(
            parse_line("p r"),
            vec![
                InputEvent::KeyPress("KeyP".into()),
                InputEvent::KeyPress("Space".into()),
                InputEvent::KeyPress("KeyR".into()),
            ]
        );
    }

    #[test]
    fn reads_until_eof() {
        let (tx, mut rx) = mpsc::channel(8);
        let input: &[u8] = b"p\n\nr\n";
        read_input(input, tx);

        let mut events = Vec::new();
        while let Some(event) = rx.blocking_recv() {
            events.push(event);
        }
        assert_eq!(
            events,
            vec![
                InputEvent::KeyPress("KeyP".into()),
                InputEvent::Click,
                InputEvent::KeyPress("KeyR".into()),
            ]
        );
    }
}
