// Theme support for the TUI
//
// Named color palettes selected via config or PRECIS_THEME.
// "default" uses the terminal's ANSI palette, named themes use true color (RGB).

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};

/// Names accepted by `Theme::by_name`
pub const THEME_NAMES: &[&str] = &["default", "nord", "gruvbox", "light"];

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Base
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // Chrome
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Result panel
    pub summary: Color,
    pub error: Color,
    pub toast: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Theme {
    /// Load theme by name, falling back to the default palette
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            "light" => Self::light(),
            _ => Self::ansi(),
        }
    }

    /// Default theme - uses terminal's ANSI palette
    pub fn ansi() -> Self {
        Self {
            name: "default",
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            summary: Color::White,
            error: Color::Red,
            toast: Color::Green,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            name: "nord",
            bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208), // Frost
            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140), // Green
            highlight: Color::Rgb(235, 203, 139),  // Yellow
            summary: Color::Rgb(229, 233, 240),
            error: Color::Rgb(191, 97, 106),
            toast: Color::Rgb(163, 190, 140),
            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox",
            bg: Color::Rgb(40, 40, 40),
            fg: Color::Rgb(235, 219, 178),
            muted: Color::Rgb(146, 131, 116),
            border: Color::Rgb(102, 92, 84),
            border_focused: Color::Rgb(250, 189, 47), // Yellow
            title: Color::Rgb(131, 165, 152),         // Aqua
            status_bar: Color::Rgb(184, 187, 38),     // Green
            highlight: Color::Rgb(254, 128, 25),      // Orange
            summary: Color::Rgb(235, 219, 178),
            error: Color::Rgb(251, 73, 52),
            toast: Color::Rgb(184, 187, 38),
            log_error: Color::Rgb(251, 73, 52),
            log_warn: Color::Rgb(250, 189, 47),
            log_info: Color::Rgb(131, 165, 152),
            log_debug: Color::Rgb(146, 131, 116),
            log_trace: Color::Rgb(102, 92, 84),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::White,
            fg: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            highlight: Color::Magenta,
            summary: Color::Black,
            error: Color::Red,
            toast: Color::Rgb(0, 128, 0),
            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Base style with theme colors
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Border style for a panel
    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused {
            self.border_focused
        } else {
            self.border
        };
        Style::default().fg(color)
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Color for a log level
    pub fn log_level_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("Nord").name, "nord");
        assert_eq!(Theme::by_name(" GRUVBOX ").name, "gruvbox");
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(Theme::by_name("solarized").name, "default");
        assert_eq!(Theme::by_name("").name, "default");
    }

    #[test]
    fn test_every_listed_name_resolves_to_itself() {
        for name in THEME_NAMES {
            assert_eq!(Theme::by_name(name).name, *name);
        }
    }
}
