//! Icon service for resolving page icon labels
//!
//! Pages are registered with a plain icon label ("Home", "Pose", ...). The icon
//! service turns that label into a glyph for the active theme, falling back to
//! the label itself when no glyph is known.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Glyphs for one icon label in every theme
struct PageIcon {
    label: &'static str,
    emoji: &'static str,
    unicode: &'static str,
    ascii: &'static str,
}

const PAGE_ICONS: &[PageIcon] = &[
    PageIcon { label: "Home", emoji: "🏠", unicode: "⌂", ascii: "~" },
    PageIcon { label: "Appearance", emoji: "👤", unicode: "☺", ascii: "@" },
    PageIcon { label: "Equipment", emoji: "🛡️", unicode: "⛨", ascii: "#" },
    PageIcon { label: "Pose", emoji: "🏃", unicode: "⚲", ascii: "&" },
    PageIcon { label: "Camera", emoji: "📷", unicode: "◎", ascii: "o" },
    PageIcon { label: "Scene", emoji: "🌄", unicode: "☀", ascii: "*" },
    PageIcon { label: "Settings", emoji: "⚙️", unicode: "⚙", ascii: "=" },
];

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Resolve a page icon label to a glyph for the current theme
    #[must_use]
    pub fn page_icon<'a>(&self, label: &'a str) -> &'a str {
        match PAGE_ICONS.iter().find(|icon| icon.label.eq_ignore_ascii_case(label)) {
            Some(icon) => match self.current_theme {
                IconTheme::Emoji => icon.emoji,
                IconTheme::Unicode => icon.unicode,
                IconTheme::Ascii => icon.ascii,
            },
            None => label,
        }
    }
}
