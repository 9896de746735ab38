use crossterm::event::{Event, KeyEvent};
use ratatui::{layout::Rect, Frame};
use std::any::Any;

/// Key of the view factory table
pub type ViewId = String;

/// What a view asks its host to do after handling input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Navigate to a registered page by name
    Navigate(String),
    /// Close the drawer or dialog hosting this view
    Close,
    None,
}

/// Downcasting support for content built behind trait objects
pub trait AsAny: Any + Send {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<T: Any + Send> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

/// Renderable view: anything usable as the body of a page, drawer or dialog.
pub trait View: AsAny {
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> ViewAction {
        if let Some(Event::Key(key)) = event {
            self.handle_key_events(key)
        } else {
            ViewAction::None
        }
    }

    fn handle_key_events(&mut self, _key: KeyEvent) -> ViewAction {
        ViewAction::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional lifecycle methods
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}

/// A constructed content instance.
///
/// Only the `View` variant satisfies the renderable-view capability; `Opaque`
/// content was built successfully but cannot be shown.
pub enum ViewContent {
    View(Box<dyn View>),
    Opaque(Box<dyn Any + Send>),
}

impl ViewContent {
    pub fn is_renderable(&self) -> bool {
        matches!(self, ViewContent::View(_))
    }

    pub fn into_view(self) -> Option<Box<dyn View>> {
        match self {
            ViewContent::View(view) => Some(view),
            ViewContent::Opaque(_) => None,
        }
    }
}

impl From<Box<dyn View>> for ViewContent {
    fn from(view: Box<dyn View>) -> Self {
        ViewContent::View(view)
    }
}

impl std::fmt::Debug for ViewContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewContent::View(_) => f.write_str("ViewContent::View"),
            ViewContent::Opaque(_) => f.write_str("ViewContent::Opaque"),
        }
    }
}
