use ratatui::style::Color;

/// Board color palette
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

    // Palette colors
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,

    // Semantic colors
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            red: Color::Rgb(0xea, 0x69, 0x62),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            green: Color::Rgb(0xa9, 0xb6, 0x65),
            blue: Color::Rgb(0x7d, 0xae, 0xa3),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            error: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}
