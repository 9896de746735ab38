//! Layout calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout calculations shared by views and hosts
pub struct LayoutManager;

impl LayoutManager {
    /// Helper function to create a centered rectangle
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Area a drawer occupies when sliding in from `direction`
    #[must_use]
    pub fn drawer_rect(direction: crate::ui::core::DrawerDirection, percent: u16, r: Rect) -> Rect {
        use crate::ui::core::DrawerDirection;

        let percent = percent.min(100);
        let width = (u32::from(r.width) * u32::from(percent) / 100) as u16;
        let height = (u32::from(r.height) * u32::from(percent) / 100) as u16;

        match direction {
            DrawerDirection::Left => Rect::new(r.x, r.y, width, r.height),
            DrawerDirection::Right => Rect::new(r.x + r.width - width, r.y, width, r.height),
            DrawerDirection::Top => Rect::new(r.x, r.y, r.width, height),
            DrawerDirection::Bottom => Rect::new(r.x, r.y + r.height - height, r.width, height),
        }
    }
}
