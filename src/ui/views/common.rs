//! Rendering shared by the built-in views

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::LayoutManager;

/// A key and what pressing it does, shown in a dialog footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
    pub color: Color,
}

pub const SUBMIT: KeyHint = KeyHint {
    key: "Enter",
    action: "submit",
    color: Color::Green,
};
pub const CANCEL: KeyHint = KeyHint {
    key: "Esc",
    action: "cancel",
    color: Color::Red,
};
pub const CONFIRM: KeyHint = KeyHint {
    key: "y",
    action: "yes",
    color: Color::Green,
};
pub const DECLINE: KeyHint = KeyHint {
    key: "n",
    action: "no",
    color: Color::Red,
};

/// Rounded panel titled with the page or dialog title
pub fn panel(title: &str, accent: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Line::from(format!(" {} ", title)).centered())
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
}

/// Clear a centered overlay over `rect`, frame it with a panel and return the area inside
pub fn draw_overlay(f: &mut Frame, rect: Rect, size: (u16, u16), title: &str, accent: Color) -> Rect {
    let (percent_x, percent_y) = size;
    let area = LayoutManager::centered_rect(percent_x, percent_y, rect);
    f.render_widget(Clear, area);

    let block = panel(title, accent);
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Footer line: `key action · key action`
pub fn hint_line(hints: &[KeyHint]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            hint.key,
            Style::default().fg(hint.color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", hint.action), Style::default().fg(Color::Gray)));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Single-line input box ending in a block cursor
pub fn input_box<'a>(label: &'a str, value: &str) -> Paragraph<'a> {
    Paragraph::new(format!("{}█", value))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::Gray))
                .title(label),
        )
}
