//! Colors and sizes for rendering
//!
//! Built once from configuration and passed to the renderer; nothing here
//! changes at runtime.

use libflashcards::config::UiConfig;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Card border
    pub highlight: Color,
    /// Background filler
    pub subtle: Color,
    /// Help line
    pub help: Color,
    /// Error indicator
    pub error: Color,
    /// Status messages
    pub status: Color,
    /// Inner width of the card box
    pub box_width: u16,
    /// Inner height of the card box
    pub box_height: u16,
    /// Character repeated around the card
    pub fill: char,
    pub colors_enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            highlight: Color::Rgb(0x7D, 0x56, 0xF4),
            subtle: Color::Rgb(0x38, 0x38, 0x38),
            help: Color::Indexed(241),
            error: Color::Red,
            status: Color::Green,
            box_width: 16,
            box_height: 5,
            fill: '·',
            colors_enabled: true,
        }
    }
}

impl Theme {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            box_width: ui.box_width.max(1),
            colors_enabled: ui.colors,
            ..Self::default()
        }
    }

    /// Foreground style, or plain when colors are off
    pub fn fg(&self, color: Color) -> Style {
        if self.colors_enabled {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    pub fn border_style(&self) -> Style {
        self.fg(self.highlight)
    }

    pub fn fill_style(&self) -> Style {
        self.fg(self.subtle)
    }

    pub fn help_style(&self) -> Style {
        self.fg(self.help)
    }

    pub fn status_style(&self) -> Style {
        self.fg(self.status)
    }

    pub fn error_style(&self) -> Style {
        self.fg(self.error).add_modifier(Modifier::BOLD)
    }
}
