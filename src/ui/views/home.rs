//! Home page view

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::panel;
use crate::constants::{HOME_TITLE, HOME_WELCOME};
use crate::ui::core::View;

/// Landing page shown before an actor is selected
#[derive(Debug, Default)]
pub struct HomeView;

impl View for HomeView {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let paragraph = Paragraph::new(HOME_WELCOME)
            .block(panel(HOME_TITLE, Color::Cyan))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }
}
