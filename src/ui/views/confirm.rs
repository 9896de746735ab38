//! Yes/no confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::{draw_overlay, hint_line, CONFIRM, DECLINE};
use crate::constants::{DIALOG_CONFIRM_PROMPT, DIALOG_CONFIRM_TITLE};
use crate::ui::core::{CompletionSignal, Dialog, View, ViewAction};

/// Asks a yes/no question; the result is `true` when confirmed
pub struct ConfirmDialog {
    title: String,
    prompt: String,
    confirmed: bool,
    completion: Option<CompletionSignal>,
}

impl ConfirmDialog {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            title: DIALOG_CONFIRM_TITLE.to_string(),
            prompt: prompt.into(),
            confirmed: false,
            completion: None,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn finish(&mut self, confirmed: bool) -> ViewAction {
        self.confirmed = confirmed;
        if let Some(signal) = self.completion.take() {
            signal.complete();
        }
        ViewAction::Close
    }
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self::new(DIALOG_CONFIRM_PROMPT)
    }
}

impl View for ConfirmDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> ViewAction {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.finish(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.finish(false),
            _ => ViewAction::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let inner = draw_overlay(f, rect, (60, 25), &self.title, Color::Yellow);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let prompt = Paragraph::new(self.prompt.as_str())
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(prompt, chunks[0]);

        f.render_widget(hint_line(&[CONFIRM, DECLINE]), chunks[1]);
    }
}

impl Dialog for ConfirmDialog {
    type Output = bool;

    fn bind_completion(&mut self, signal: CompletionSignal) {
        self.completion = Some(signal);
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn take_result(&mut self) -> bool {
        self.confirmed
    }
}
