//! Single-line text prompt dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use super::common::{draw_overlay, hint_line, input_box, CANCEL, SUBMIT};
use crate::constants::{DIALOG_TEXT_PROMPT_PLACEHOLDER, DIALOG_TEXT_PROMPT_TITLE};
use crate::ui::core::{CompletionSignal, Dialog, View, ViewAction};

/// Asks for a line of text; the result is `None` when cancelled
pub struct TextPromptDialog {
    title: String,
    label: String,
    input_buffer: String,
    submitted: Option<String>,
    completion: Option<CompletionSignal>,
}

impl TextPromptDialog {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            title: DIALOG_TEXT_PROMPT_TITLE.to_string(),
            label: label.into(),
            input_buffer: String::new(),
            submitted: None,
            completion: None,
        }
    }

    /// Start with text already in the input
    pub fn with_initial(mut self, text: impl Into<String>) -> Self {
        self.input_buffer = text.into();
        self
    }

    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    fn finish(&mut self, submitted: Option<String>) -> ViewAction {
        self.submitted = submitted;
        if let Some(signal) = self.completion.take() {
            signal.complete();
        }
        ViewAction::Close
    }
}

impl Default for TextPromptDialog {
    fn default() -> Self {
        Self::new(DIALOG_TEXT_PROMPT_PLACEHOLDER)
    }
}

impl View for TextPromptDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> ViewAction {
        match key.code {
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                ViewAction::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                ViewAction::None
            }
            KeyCode::Enter => {
                let value = self.input_buffer.trim();
                if value.is_empty() {
                    ViewAction::None
                } else {
                    let value = value.to_string();
                    self.finish(Some(value))
                }
            }
            KeyCode::Esc => self.finish(None),
            _ => ViewAction::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let inner = draw_overlay(f, rect, (60, 30), &self.title, Color::Cyan);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        f.render_widget(input_box(&self.label, &self.input_buffer), chunks[0]);
        f.render_widget(hint_line(&[SUBMIT, CANCEL]), chunks[2]);
    }
}

impl Dialog for TextPromptDialog {
    type Output = Option<String>;

    fn bind_completion(&mut self, signal: CompletionSignal) {
        self.completion = Some(signal);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn take_result(&mut self) -> Option<String> {
        self.submitted.take()
    }
}
