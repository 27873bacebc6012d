use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Light board squares
    pub light_square: Color,
    /// Dark board squares
    pub dark_square: Color,
    /// Label text on light squares
    pub light_label: Color,
    /// Label text on dark squares
    pub dark_label: Color,
    /// Square the knight stands on
    pub knight_bg: Color,
    /// Square that was just reverted
    pub reverted_bg: Color,
    /// Error/cancel color
    pub error: Color,
    /// Success/complete color
    pub success: Color,
    /// Info panel text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            light_square: Color::Rgb { r: 200, g: 200, b: 210 },
            dark_square: Color::Rgb { r: 45, g: 50, b: 65 },
            light_label: Color::Rgb { r: 20, g: 22, b: 30 },
            dark_label: Color::Rgb { r: 230, g: 230, b: 240 },
            knight_bg: Color::Rgb { r: 80, g: 180, b: 255 },
            reverted_bg: Color::Rgb { r: 200, g: 80, b: 80 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            light_square: Color::Rgb { r: 255, g: 255, b: 255 },
            dark_square: Color::Rgb { r: 0, g: 0, b: 0 },
            light_label: Color::Rgb { r: 0, g: 0, b: 0 },
            dark_label: Color::Rgb { r: 255, g: 255, b: 255 },
            knight_bg: Color::Rgb { r: 30, g: 100, b: 200 },
            reverted_bg: Color::Rgb { r: 220, g: 50, b: 50 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            light_square: Color::White,
            dark_square: Color::Black,
            light_label: Color::Black,
            dark_label: Color::Yellow,
            knight_bg: Color::Blue,
            reverted_bg: Color::Red,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Background and label color of a square
    pub fn square_colors(&self, x: usize, y: usize) -> (Color, Color) {
        if (x + y) % 2 == 0 {
            (self.light_square, self.light_label)
        } else {
            (self.dark_square, self.dark_label)
        }
    }
}
