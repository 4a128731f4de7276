use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub progress: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,
    /// Nav bar background once the deck has been scrolled
    pub elevated: Color,
    pub busy: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Gruvbox-style dark palette
    pub fn dark() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            progress: Color::Rgb(0xd8, 0xa6, 0x57),
            dot_active: Color::Rgb(0xd8, 0xa6, 0x57),
            dot_inactive: Color::Rgb(0x7c, 0x6f, 0x64),
            elevated: Color::Rgb(0x50, 0x49, 0x45),
            busy: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }

    pub fn light() -> Self {
        Self {
            bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
            bg1: Color::Rgb(0xf2, 0xe5, 0xbc),
            bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
            fg0: Color::Rgb(0x65, 0x47, 0x35),
            fg1: Color::Rgb(0x4f, 0x38, 0x29),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x6c, 0x78, 0x2e),
            progress: Color::Rgb(0xb4, 0x71, 0x09),
            dot_active: Color::Rgb(0xb4, 0x71, 0x09),
            dot_inactive: Color::Rgb(0xa8, 0x99, 0x84),
            elevated: Color::Rgb(0xd5, 0xc4, 0xa1),
            busy: Color::Rgb(0xc3, 0x5e, 0x0a),
        }
    }

    /// Theme by config name; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" | "gruvbox-light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
