//! Display colors and the depth palette
//!
//! The palette maps a nesting depth onto one of its colors by modulo, so
//! depths beyond the palette size cycle back to the first color.

use crate::error::{RainbowError, Result};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name as written in the config file
    ///
    /// Accepts `bright-red`, `bright_red` and `brightred` in any case.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();
        let color = match normalized.as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "brightblack" | "gray" | "grey" => Color::BrightBlack,
            "brightred" => Color::BrightRed,
            "brightgreen" => Color::BrightGreen,
            "brightyellow" => Color::BrightYellow,
            "brightblue" => Color::BrightBlue,
            "brightmagenta" => Color::BrightMagenta,
            "brightcyan" => Color::BrightCyan,
            "brightwhite" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Reduce a color bucket to a palette slot
pub fn bucket_index(value: usize, palette_size: usize) -> Result<usize> {
    if palette_size == 0 {
        return Err(RainbowError::EmptyPalette);
    }
    Ok(value % palette_size)
}

/// Ordered display colors, one per depth bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette; at least one color is required
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(RainbowError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Parse a palette from color names
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let colors = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                Color::from_name(name).ok_or_else(|| RainbowError::UnknownColor(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(colors)
    }

    /// Number of buckets
    pub fn size(&self) -> usize {
        self.colors.len()
    }

    /// Color of a bucket, wrapping past the end
    pub fn color(&self, bucket: usize) -> Color {
        self.colors[bucket % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![Color::Yellow, Color::Magenta, Color::Cyan],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index() {
        assert_eq!(bucket_index(0, 3).unwrap(), 0);
        assert_eq!(bucket_index(4, 3).unwrap(), 1);
        assert_eq!(bucket_index(7, 1).unwrap(), 0);
        assert!(matches!(bucket_index(1, 0), Err(RainbowError::EmptyPalette)));
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::from_name("Yellow"), Some(Color::Yellow));
        assert_eq!(Color::from_name("bright-red"), Some(Color::BrightRed));
        assert_eq!(Color::from_name(" bright_blue "), Some(Color::BrightBlue));
        assert_eq!(Color::from_name("grey"), Some(Color::BrightBlack));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn test_palette() {
        let palette = Palette::default();
        assert_eq!(palette.size(), 3);
        assert_eq!(palette.color(3), Color::Yellow);

        let custom = Palette::from_names(&["red", "green"]).unwrap();
        assert_eq!(custom.colors(), &[Color::Red, Color::Green]);
    }

    #[test]
    fn test_palette_errors() {
        assert!(matches!(Palette::new(Vec::new()), Err(RainbowError::EmptyPalette)));
        let err = Palette::from_names(&["red", "mauve"]).unwrap_err();
        assert!(err.is_configuration());
        assert!(matches!(err, RainbowError::UnknownColor(ref name) if name == "mauve"));
    }
}
