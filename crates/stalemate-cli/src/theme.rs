use crossterm::style::Color;

/// Color theme for board output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Light board squares
    pub light_square: Color,
    /// Dark board squares
    pub dark_square: Color,
    /// Neighbourhood squares still open to the king
    pub escape_bg: Color,
    /// Attacking pieces
    pub attacker: Color,
    /// The defending king
    pub defender: Color,
    /// Coordinates and labels
    pub border: Color,
    /// Summary text
    pub info: Color,
    /// Stalemate reached
    pub success: Color,
    /// No stalemate, or king in check
    pub error: Color,
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
            light_square: Color::Rgb { r: 70, g: 75, b: 90 },
            dark_square: Color::Rgb { r: 35, g: 40, b: 55 },
            escape_bg: Color::Rgb { r: 120, g: 40, b: 40 },
            attacker: Color::Rgb { r: 80, g: 180, b: 255 },
            defender: Color::Rgb { r: 255, g: 210, b: 100 },
            border: Color::Rgb { r: 130, g: 140, b: 170 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            light_square: Color::Rgb { r: 240, g: 240, b: 248 },
            dark_square: Color::Rgb { r: 200, g: 202, b: 218 },
            escape_bg: Color::Rgb { r: 255, g: 190, b: 190 },
            attacker: Color::Rgb { r: 30, g: 100, b: 200 },
            defender: Color::Rgb { r: 200, g: 120, b: 20 },
            border: Color::Rgb { r: 60, g: 60, b: 80 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
        }
    }

    pub fn from_flag(light: bool) -> Self {
        if light {
            Self::light()
        } else {
            Self::dark()
        }
    }
}
