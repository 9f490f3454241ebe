//! Theme definitions for the finder window.

use iced::Color;

/// A color theme.
#[derive(Debug, Clone)]
pub struct FinderTheme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub border: Color,
}

impl FinderTheme {
    /// Parse a hex color string like "#f472b6" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() >= 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(128) as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(128) as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(128) as f32 / 255.0;
            Color::from_rgb(r, g, b)
        } else {
            Color::from_rgb(0.5, 0.5, 0.5)
        }
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    /// Get theme by name.
    pub fn by_name(name: &str) -> Self {
        match name {
            "slate" => Self::slate(),
            "catppuccin-mocha" => Self::catppuccin_mocha(),
            "nord" => Self::nord(),
            "light" => Self::light(),
            _ => Self::slate(), // Default
        }
    }

    /// Slate with pink accents (default).
    pub fn slate() -> Self {
        Self {
            name: "slate",
            background: Self::from_hex("#0f172a"),
            surface: Self::from_hex("#1e293b"),
            text: Self::from_hex("#f1f5f9"),
            subtext: Self::from_hex("#94a3b8"),
            accent: Self::from_hex("#f472b6"),
            border: Self::from_hex("#334155"),
        }
    }

    /// Catppuccin Mocha theme.
    pub fn catppuccin_mocha() -> Self {
        Self {
            name: "catppuccin-mocha",
            background: Self::from_hex("#1e1e2e"),
            surface: Self::from_hex("#313244"),
            text: Self::from_hex("#cdd6f4"),
            subtext: Self::from_hex("#6c7086"),
            accent: Self::from_hex("#cba6f7"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        }
    }

    /// Nord theme.
    pub fn nord() -> Self {
        Self {
            name: "nord",
            background: Self::from_hex("#2e3440"),
            surface: Self::from_hex("#3b4252"),
            text: Self::from_hex("#eceff4"),
            subtext: Self::from_hex("#4c566a"),
            accent: Self::from_hex("#88c0d0"),
            border: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        }
    }

    /// Light slate theme.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Self::from_hex("#f8fafc"),
            surface: Self::from_hex("#ffffff"),
            text: Self::from_hex("#0f172a"),
            subtext: Self::from_hex("#64748b"),
            accent: Self::from_hex("#db2777"),
            border: Self::from_hex("#e2e8f0"),
        }
    }
}

/// Get list of available theme names.
pub fn available_themes() -> &'static [&'static str] {
    &["slate", "catppuccin-mocha", "nord", "light"]
}
