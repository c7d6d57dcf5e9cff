use ratatui::style::Color;
use std::str::FromStr;

/// Which palette to draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeKind::Dark => &DARK_THEME,
            ThemeKind::Light => &LIGHT_THEME,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

impl FromStr for ThemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeKind::Dark),
            "light" => Ok(ThemeKind::Light),
            _ => Err(format!("unknown theme '{}' (expected dark or light)", s)),
        }
    }
}

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub bar: Color,           // Unhighlighted bars
    pub primary_bar: Color,   // Current index
    pub secondary_bar: Color, // Minimum / partner index
    pub accent: Color,        // Blue
    pub warning: Color,       // Orange
    pub comment: Color,       // Grey
    pub success: Color,       // Green
    pub error: Color,         // Red
    pub border: Color,
    pub status_bg: Color,
    pub key_bg: Color,
    pub key_fg: Color,
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(137, 220, 235),           // Cyan
    primary_bar: Color::Rgb(255, 255, 255),   // White
    secondary_bar: Color::Rgb(166, 227, 161), // Green
    accent: Color::Rgb(137, 180, 250),
    warning: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    key_bg: Color::Rgb(108, 112, 134),
    key_fg: Color::Black,
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    bar: Color::Rgb(4, 165, 229),           // Cyan
    primary_bar: Color::Rgb(223, 142, 29),  // Yellow
    secondary_bar: Color::Rgb(64, 160, 43), // Green
    accent: Color::Rgb(30, 102, 245),
    warning: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    border: Color::Rgb(156, 160, 176),
    status_bg: Color::Rgb(220, 224, 232),
    key_bg: Color::Rgb(156, 160, 176),
    key_fg: Color::White,
};
