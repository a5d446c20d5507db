use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Theme preference implied by the `COLORFGBG` terminal convention
/// (`"fg;bg"` or `"fg;other;bg"`, ANSI colour indices).
/// Backgrounds 7 and 9-15 are light; everything else numeric is dark.
pub fn system_theme(colorfgbg: Option<&str>) -> Option<ThemeMode> {
    let bg: u8 = colorfgbg?.rsplit(';').next()?.trim().parse().ok()?;
    match bg {
        7 | 9..=15 => Some(ThemeMode::Light),
        _ => Some(ThemeMode::Dark),
    }
}

/// Current theme plus whether the user picked it rather than inheriting the
/// terminal's preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub current: ThemeMode,
    pub explicit: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            current: ThemeMode::Dark,
            explicit: false,
        }
    }
}

impl ThemeState {
    /// Explicit choice wins, then system preference, then dark.
    pub fn resolve(explicit: Option<ThemeMode>, system: Option<ThemeMode>) -> Self {
        match (explicit, system) {
            (Some(mode), _) => Self {
                current: mode,
                explicit: true,
            },
            (None, Some(mode)) => Self {
                current: mode,
                explicit: false,
            },
            (None, None) => Self::default(),
        }
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.current = mode;
        self.explicit = true;
    }

    /// Flip the theme and return the announcement text for it.
    pub fn toggle(&mut self) -> String {
        self.set_theme(self.current.toggled());
        announcement(self.current)
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_mode(self.current)
    }
}

pub fn announcement(mode: ThemeMode) -> String {
    format!("Theme changed to {} mode", mode)
}

/// Every colour the views draw with, one instance per theme mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    // ── Base ────────────────────────────────────────────────────
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted_text: Color,
    pub separator: Color,

    // ── Accents ─────────────────────────────────────────────────
    pub accent: Color,
    pub accent_warm: Color,
    pub heading: Color,

    // ── Semantic ────────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // ── UI chrome ───────────────────────────────────────────────
    pub header_bg: Color,
    pub footer_bg: Color,
    pub panel_border: Color,
    pub active_border: Color,
    pub selection_bg: Color,
    pub gauge: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(18, 18, 24),
        surface: Color::Rgb(28, 28, 38),
        text: Color::Rgb(225, 225, 235),
        muted_text: Color::Rgb(100, 105, 120),
        separator: Color::Rgb(45, 45, 58),
        accent: Color::Rgb(80, 200, 200),
        accent_warm: Color::Rgb(230, 160, 60),
        heading: Color::Rgb(170, 130, 255),
        success: Color::Rgb(80, 210, 120),
        warning: Color::Rgb(230, 180, 60),
        error: Color::Rgb(230, 80, 80),
        info: Color::Rgb(80, 180, 220),
        header_bg: Color::Rgb(24, 24, 32),
        footer_bg: Color::Rgb(24, 24, 32),
        panel_border: Color::Rgb(50, 50, 65),
        active_border: Color::Rgb(80, 200, 200),
        selection_bg: Color::Rgb(40, 55, 75),
        gauge: Color::Rgb(80, 200, 200),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 250, 247),
        surface: Color::Rgb(240, 240, 236),
        text: Color::Rgb(30, 32, 40),
        muted_text: Color::Rgb(110, 115, 128),
        separator: Color::Rgb(214, 214, 208),
        accent: Color::Rgb(0, 122, 130),
        accent_warm: Color::Rgb(185, 105, 0),
        heading: Color::Rgb(98, 60, 190),
        success: Color::Rgb(30, 140, 70),
        warning: Color::Rgb(170, 120, 0),
        error: Color::Rgb(190, 40, 40),
        info: Color::Rgb(20, 110, 170),
        header_bg: Color::Rgb(232, 232, 226),
        footer_bg: Color::Rgb(232, 232, 226),
        panel_border: Color::Rgb(196, 196, 190),
        active_border: Color::Rgb(0, 122, 130),
        selection_bg: Color::Rgb(206, 226, 236),
        gauge: Color::Rgb(0, 122, 130),
    };

    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &Self::LIGHT,
            ThemeMode::Dark => &Self::DARK,
        }
    }
}
