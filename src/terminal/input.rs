// ABOUTME: Line input controller with the Waiting/Ready state machine
// Enables input on a server prompt, edits the line, and produces the submission on Enter

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::view::escape_line;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// Input disabled, no prompt shown
    #[default]
    Waiting,
    /// Input enabled, prompt shown
    Ready,
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Input is disabled or the key has no meaning here
    Ignored,
    /// The line or cursor changed
    Edited,
    /// Enter was pressed while Ready
    Submitted(Submission),
}

/// A submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// `prompt + value + "\n"`, for the terminal view
    pub echo: String,
    /// The entered value, for the server
    pub data: String,
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    state: InputState,
    prompt: String,
    value: String,
    /// Cursor position in chars
    cursor: usize,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == InputState::Ready
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Waiting → Ready. A repeated request replaces the prompt and keeps the line.
    ///
    /// The prompt is server text, so it is stored escaped; the label and the
    /// echo both show it that way.
    pub fn request_input(&mut self, prompt: &str) {
        self.prompt = escape_line(prompt);
        self.state = InputState::Ready;
    }

    /// Force Waiting from any state. The typed line is kept.
    pub fn disconnect(&mut self) {
        self.state = InputState::Waiting;
        self.prompt.clear();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if self.state != InputState::Ready {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Enter => KeyOutcome::Submitted(self.submit()),
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let at = self.byte_index();
                self.value.insert(at, c);
                self.cursor += 1;
                KeyOutcome::Edited
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index();
                self.value.remove(at);
                KeyOutcome::Edited
            }
            KeyCode::Delete if self.cursor < self.char_count() => {
                let at = self.byte_index();
                self.value.remove(at);
                KeyOutcome::Edited
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                KeyOutcome::Edited
            }
            KeyCode::Right if self.cursor < self.char_count() => {
                self.cursor += 1;
                KeyOutcome::Edited
            }
            KeyCode::Home => {
                self.cursor = 0;
                KeyOutcome::Edited
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                KeyOutcome::Edited
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Ready → Waiting: capture the echo, clear and disable the field, clear the prompt
    fn submit(&mut self) -> Submission {
        let data = std::mem::take(&mut self.value);
        let echo = format!("{}{}\n", self.prompt, data);

        self.cursor = 0;
        self.state = InputState::Waiting;
        self.prompt.clear();

        Submission { echo, data }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
