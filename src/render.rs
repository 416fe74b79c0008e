//! Terminal rendering using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Print, ResetColor, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, ColorAssignment, Palette, Range};

impl From<Color> for style::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => style::Color::Reset,
            Color::Black => style::Color::Black,
            Color::Red => style::Color::DarkRed,
            Color::Green => style::Color::DarkGreen,
            Color::Yellow => style::Color::DarkYellow,
            Color::Blue => style::Color::DarkBlue,
            Color::Magenta => style::Color::DarkMagenta,
            Color::Cyan => style::Color::DarkCyan,
            Color::White => style::Color::Grey,
            Color::BrightBlack => style::Color::DarkGrey,
            Color::BrightRed => style::Color::Red,
            Color::BrightGreen => style::Color::Green,
            Color::BrightYellow => style::Color::Yellow,
            Color::BrightBlue => style::Color::Blue,
            Color::BrightMagenta => style::Color::Magenta,
            Color::BrightCyan => style::Color::Cyan,
            Color::BrightWhite => style::Color::White,
        }
    }
}

/// Write `text` with every assigned keyword in its bucket's color
///
/// Assignments must be in stream order; a span overlapping the previous
/// one is written uncolored.
pub fn write_colored<W: Write>(
    out: &mut W,
    text: &str,
    assignments: &[ColorAssignment],
    palette: &Palette,
) -> Result<()> {
    let mut pos = 0;
    for assignment in assignments {
        let end = assignment.start + assignment.length;
        if assignment.start < pos || end > text.len() {
            continue;
        }
        queue!(
            out,
            Print(&text[pos..assignment.start]),
            SetForegroundColor(palette.color(assignment.bucket).into()),
            Print(&text[assignment.start..end]),
            ResetColor
        )?;
        pos = end;
    }
    queue!(out, Print(&text[pos..]))?;
    out.flush()?;
    Ok(())
}

/// Write one `bucket: line:col-line:col ...` line per palette bucket
///
/// Lines and columns are printed one-based.
pub fn write_ranges<W: Write>(out: &mut W, buckets: &[Vec<Range>]) -> Result<()> {
    for (bucket, ranges) in buckets.iter().enumerate() {
        write!(out, "{}:", bucket)?;
        for range in ranges {
            write!(
                out,
                " {}:{}-{}:{}",
                range.start.line + 1,
                range.start.column + 1,
                range.end.line + 1,
                range.end.column + 1
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Position;

    #[test]
    fn test_color_conversion() {
        assert_eq!(style::Color::from(Color::Default), style::Color::Reset);
        assert_eq!(style::Color::from(Color::BrightRed), style::Color::Red);
        assert_eq!(style::Color::from(Color::Red), style::Color::DarkRed);
    }

    #[test]
    fn test_write_colored_keeps_text() {
        let text = "if x\nend";
        let assignments = [
            ColorAssignment { start: 0, length: 2, bucket: 0 },
            ColorAssignment { start: 5, length: 3, bucket: 0 },
        ];
        let mut out = Vec::new();
        write_colored(&mut out, text, &assignments, &Palette::default()).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("if"));
        assert!(rendered.contains(" x\n"));
        assert!(rendered.contains("\x1b["));
        assert!(rendered.len() > text.len());
    }

    #[test]
    fn test_write_ranges() {
        let range = Range {
            start: Position::new(0, 0),
            end: Position::new(0, 2),
        };
        let mut out = Vec::new();
        write_ranges(&mut out, &[vec![range], Vec::new()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0: 1:1-1:3\n1:\n");
    }
}
