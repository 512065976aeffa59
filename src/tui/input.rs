use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line buffer edited in raw mode. Positions count chars, not bytes, so
/// non-ASCII input like `§` or `ä` edits correctly.
#[derive(Debug, Default)]
struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

enum Outcome {
    Editing,
    Submit,
    Cancel,
}

impl LineBuffer {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn apply(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Outcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors, restore the terminal first
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => return Outcome::Cancel,
            KeyCode::Esc => return Outcome::Cancel,
            KeyCode::Enter => return Outcome::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left if self.cursor > 0 => self.cursor -= 1,
            KeyCode::Right if self.cursor < self.chars.len() => self.cursor += 1,
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Outcome::Editing
    }
}

fn read_line(prompt: &str, initial: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let mut buf = LineBuffer::new(initial);

    // Can't enable raw mode (not a terminal): keep the current value
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    let prompt_width = prompt.chars().count() + 2;
    let mut drawn = buf.chars.len();
    print!("{}: {}", prompt, buf.text());
    flush();

    let submitted = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match buf.apply(key, &accept) {
                    Outcome::Editing => {}
                    Outcome::Submit => break true,
                    Outcome::Cancel => break false,
                }

                print!("\r{}: {}", prompt, " ".repeat(drawn + 1));
                print!("\r{}: {}", prompt, buf.text());
                print!("\x1b[{}G", prompt_width + buf.cursor + 1);
                flush();
                drawn = buf.chars.len();
            }
            Ok(_) => {}
            Err(_) => break false,
        }
    };

    // Leave raw mode before println so the newline is translated
    drop(guard);
    println!();

    submitted.then(|| buf.text())
}

/// Free text input. `None` when cancelled with Esc.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    read_line(prompt, initial_value, |_| true)
}

/// Digits-only input. `None` when cancelled or left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = initial_value.to_string();
    read_line(prompt, &initial, |c| c.is_ascii_digit())?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn edits_multibyte_text_by_char() {
        let mut buf = LineBuffer::new("!§$");
        buf.apply(key(KeyCode::Left), |_| true);
        buf.apply(key(KeyCode::Backspace), |_| true);
        assert_eq!(buf.text(), "!$");
        buf.apply(key(KeyCode::Char('ä')), |_| true);
        assert_eq!(buf.text(), "!ä$");
        assert_eq!(buf.cursor, 2);
    }

    #[test]
    fn home_end_delete() {
        let mut buf = LineBuffer::new("abc");
        buf.apply(key(KeyCode::Home), |_| true);
        buf.apply(key(KeyCode::Delete), |_| true);
        assert_eq!(buf.text(), "bc");
        buf.apply(key(KeyCode::End), |_| true);
        buf.apply(key(KeyCode::Delete), |_| true);
        assert_eq!(buf.text(), "bc");
    }

    #[test]
    fn filter_rejects_chars() {
        let mut buf = LineBuffer::new("1");
        buf.apply(key(KeyCode::Char('x')), |c| c.is_ascii_digit());
        buf.apply(key(KeyCode::Char('2')), |c| c.is_ascii_digit());
        assert_eq!(buf.text(), "12");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut buf = LineBuffer::new("secret");
        buf.apply(
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
            |_| true,
        );
        assert_eq!(buf.text(), "");
        assert_eq!(buf.cursor, 0);
    }

    #[test]
    fn enter_and_escape() {
        let mut buf = LineBuffer::new("");
        assert!(matches!(buf.apply(key(KeyCode::Enter), |_| true), Outcome::Submit));
        assert!(matches!(buf.apply(key(KeyCode::Esc), |_| true), Outcome::Cancel));
    }
}
