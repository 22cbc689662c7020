use clap::ValueEnum;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Glyph colour of a canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Foreground {
    #[default]
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
}

/// Cell colour behind the glyphs of a canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    White,
    Black,
    #[default]
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Grey,
}

impl Foreground {
    pub fn color(self) -> Color {
        match self {
            // plain white text is rendered as bold grey (SGR 37;1)
            Foreground::White => Color::Grey,
            Foreground::Black => Color::Black,
            Foreground::Red => Color::DarkRed,
            Foreground::Green => Color::DarkGreen,
            Foreground::Blue => Color::DarkBlue,
            Foreground::Yellow => Color::DarkYellow,
            Foreground::Magenta => Color::DarkMagenta,
            Foreground::Cyan => Color::DarkCyan,
        }
    }

    pub fn is_bold(self) -> bool {
        self == Foreground::White
    }
}

impl Background {
    pub fn color(self) -> Color {
        match self {
            Background::White => Color::White,
            Background::Black => Color::Black,
            Background::Red => Color::DarkRed,
            Background::Green => Color::DarkGreen,
            Background::Blue => Color::DarkBlue,
            Background::Yellow => Color::DarkYellow,
            Background::Magenta => Color::DarkMagenta,
            Background::Cyan => Color::DarkCyan,
            Background::Grey => Color::Grey,
        }
    }
}

impl std::str::FromStr for Foreground {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("unknown foreground colour '{}'", s))
    }
}

impl std::str::FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("unknown background colour '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_white_on_red() {
        assert_eq!(Foreground::default(), Foreground::White);
        assert_eq!(Background::default(), Background::Red);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Foreground::from_str("Cyan", true), Ok(Foreground::Cyan));
        assert_eq!(Background::from_str("grey", false), Ok(Background::Grey));
        assert!(Foreground::from_str("grey", false).is_err());
    }

    #[test]
    fn parse_accepts_theme_names() {
        assert_eq!("magenta".parse::<Foreground>(), Ok(Foreground::Magenta));
        assert_eq!(" Grey ".parse::<Background>(), Ok(Background::Grey));
        assert_eq!(
            "purple".parse::<Background>(),
            Err("unknown background colour 'purple'".to_string())
        );
    }

    #[test]
    fn only_white_text_is_bold() {
        assert!(Foreground::White.is_bold());
        assert!(!Foreground::Red.is_bold());
    }
}
