//! Theme and bird-skin palettes.
//!
//! Pure lookup tables parameterizing the renderer; the simulation never
//! reads a color.

use ratatui::style::Color;

/// Visual theme for the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
    Neon,
}

impl Theme {
    /// Cycle order: Day -> Night -> Neon -> Day.
    pub fn next(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Neon,
            Self::Neon => Self::Day,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Night => "Night",
            Self::Neon => "Neon",
        }
    }
}

/// Color scheme for the bird sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirdSkin {
    #[default]
    Classic,
    Blue,
    Red,
    Neon,
}

impl BirdSkin {
    /// Cycle order: Classic -> Blue -> Red -> Neon -> Classic.
    pub fn next(self) -> Self {
        match self {
            Self::Classic => Self::Blue,
            Self::Blue => Self::Red,
            Self::Red => Self::Neon,
            Self::Neon => Self::Classic,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Blue => "Blue",
            Self::Red => "Red",
            Self::Neon => "Neon",
        }
    }
}

/// Colors a theme contributes to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: Color,
    /// Darker stop of the pipe gradient.
    pub pipe_dark: Color,
    /// Lighter stop of the pipe gradient (used for the caps).
    pub pipe_light: Color,
    pub pipe_border: Color,
    pub text: Color,
}

/// Palette lookup. Total over `Theme`; `Theme::default()` is Day.
pub fn palette(theme: Theme) -> ThemePalette {
    match theme {
        Theme::Night => ThemePalette {
            background: Color::Rgb(15, 20, 35),
            pipe_dark: Color::Rgb(30, 60, 80),
            pipe_light: Color::Rgb(40, 90, 120),
            pipe_border: Color::Rgb(10, 30, 45),
            text: Color::White,
        },
        Theme::Neon => ThemePalette {
            background: Color::Rgb(10, 10, 10),
            pipe_dark: Color::Rgb(0, 255, 170),
            pipe_light: Color::Rgb(0, 200, 255),
            pipe_border: Color::Rgb(0, 140, 180),
            text: Color::Rgb(255, 255, 255),
        },
        Theme::Day => ThemePalette {
            background: Color::Rgb(135, 206, 235), // sky blue
            pipe_dark: Color::Rgb(46, 125, 50),
            pipe_light: Color::Rgb(34, 139, 34),
            pipe_border: Color::Rgb(0, 100, 0),
            text: Color::White,
        },
    }
}

/// Body and wing gradient stops for a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirdPalette {
    pub body_start: Color,
    pub body_end: Color,
    pub wing_start: Color,
    pub wing_end: Color,
}

/// Skin lookup. Total over `BirdSkin`; `BirdSkin::default()` is Classic.
pub fn skin_palette(skin: BirdSkin) -> BirdPalette {
    match skin {
        BirdSkin::Blue => BirdPalette {
            body_start: Color::Rgb(0, 170, 255),
            body_end: Color::Rgb(0, 120, 220),
            wing_start: Color::Rgb(0, 140, 255),
            wing_end: Color::Rgb(0, 200, 255),
        },
        BirdSkin::Red => BirdPalette {
            body_start: Color::Rgb(255, 80, 80),
            body_end: Color::Rgb(220, 40, 40),
            wing_start: Color::Rgb(255, 100, 100),
            wing_end: Color::Rgb(255, 160, 160),
        },
        BirdSkin::Neon => BirdPalette {
            body_start: Color::Rgb(0, 255, 170),
            body_end: Color::Rgb(0, 200, 255),
            wing_start: Color::Rgb(255, 0, 200),
            wing_end: Color::Rgb(0, 255, 255),
        },
        BirdSkin::Classic => BirdPalette {
            body_start: Color::Rgb(255, 165, 0),
            body_end: Color::Rgb(255, 140, 0),
            wing_start: Color::Rgb(255, 69, 0),
            wing_end: Color::Rgb(255, 140, 0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_covers_all() {
        assert_eq!(Theme::Day.next(), Theme::Night);
        assert_eq!(Theme::Night.next(), Theme::Neon);
        assert_eq!(Theme::Neon.next(), Theme::Day);
    }

    #[test]
    fn test_skin_cycle_covers_all() {
        assert_eq!(BirdSkin::Classic.next(), BirdSkin::Blue);
        assert_eq!(BirdSkin::Blue.next(), BirdSkin::Red);
        assert_eq!(BirdSkin::Red.next(), BirdSkin::Neon);
        assert_eq!(BirdSkin::Neon.next(), BirdSkin::Classic);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Theme::default(), Theme::Day);
        assert_eq!(BirdSkin::default(), BirdSkin::Classic);
    }

    #[test]
    fn test_palettes_are_distinct() {
        let day = palette(Theme::Day);
        let night = palette(Theme::Night);
        let neon = palette(Theme::Neon);
        assert_ne!(day.background, night.background);
        assert_ne!(night.background, neon.background);
        assert_ne!(day.pipe_dark, neon.pipe_dark);
    }

    #[test]
    fn test_day_palette_values() {
        let day = palette(Theme::Day);
        assert_eq!(day.background, Color::Rgb(135, 206, 235));
        assert_eq!(day.pipe_border, Color::Rgb(0, 100, 0));
        assert_eq!(day.text, Color::White);
    }

    #[test]
    fn test_classic_skin_values() {
        let classic = skin_palette(BirdSkin::Classic);
        assert_eq!(classic.body_start, Color::Rgb(255, 165, 0));
        assert_eq!(classic.wing_start, Color::Rgb(255, 69, 0));
    }

    #[test]
    fn test_names() {
        assert_eq!(Theme::Day.name(), "Day");
        assert_eq!(Theme::Neon.name(), "Neon");
        assert_eq!(BirdSkin::Classic.name(), "Classic");
        assert_eq!(BirdSkin::Blue.name(), "Blue");
    }
}
