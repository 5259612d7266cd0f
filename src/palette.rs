//! Month background colors.

use crate::error::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color written as six hex digits, e.g. `DCE9F5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const RED: Color = Color(0xFF0000);

    pub const fn rgb(value: u32) -> Color {
        Color(value & 0xFF_FFFF)
    }

    /// Upper case hex form used by the document writer.
    pub fn hex(&self) -> String {
        format!("{:06X}", self.0)
    }
}

impl FromStr for Color {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CalendarError::InvalidColor {
                value: s.to_string(),
            });
        }
        u32::from_str_radix(digits, 16)
            .map(Color)
            .map_err(|_| CalendarError::InvalidColor {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for Color {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}

/// One background color per month, January first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette([Color; 12]);

impl Palette {
    /// Color of `month` (1..=12).
    pub fn for_month(&self, month: u32) -> Result<Color, CalendarError> {
        match month {
            1..=12 => Ok(self.0[(month - 1) as usize]),
            _ => Err(CalendarError::InvalidMonth { month }),
        }
    }
}

/// Very light pastels, one per month.
impl Default for Palette {
    fn default() -> Self {
        Palette([
            Color::rgb(0xDCE9F5), // Jan, blue
            Color::rgb(0xE0F5D3), // Feb, green
            Color::rgb(0xFAD0D4), // Mar, pink
            Color::rgb(0xF9F2D0), // Apr, yellow
            Color::rgb(0xD5E8E5), // May, teal
            Color::rgb(0xF7E5D3), // Jun, peach
            Color::rgb(0xE0F5D3), // Jul, green
            Color::rgb(0xD4E9F7), // Aug, sky blue
            Color::rgb(0xFAD0D4), // Sep, pink
            Color::rgb(0xF9F2D0), // Oct, yellow
            Color::rgb(0xD5E8E5), // Nov, teal
            Color::rgb(0xE0C2CD), // Dec, purple
        ])
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = CalendarError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        let len = colors.len();
        let colors: [Color; 12] = colors
            .try_into()
            .map_err(|_| CalendarError::InvalidPalette { len })?;
        Ok(Palette(colors))
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Vec<Color> {
        palette.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color() {
        assert_eq!("DCE9F5".parse::<Color>().unwrap(), Color::rgb(0xDCE9F5));
        assert_eq!("#e0c2cd".parse::<Color>().unwrap(), Color::rgb(0xE0C2CD));
        assert_eq!(Color::rgb(0xe0c2cd).hex(), "E0C2CD");
        assert_eq!(Color::RED.to_string(), "FF0000");
    }

    #[test]
    fn reject_bad_color() {
        assert!("DCE9F".parse::<Color>().is_err());
        assert!("GGGGGG".parse::<Color>().is_err());
        assert!("+CE9F5".parse::<Color>().is_err());
    }

    #[test]
    fn palette_by_month() {
        let palette = Palette::default();
        assert_eq!(palette.for_month(1).unwrap(), Color::rgb(0xDCE9F5));
        assert_eq!(palette.for_month(12).unwrap(), Color::rgb(0xE0C2CD));
        assert!(palette.for_month(0).is_err());
        assert!(palette.for_month(13).is_err());
    }

    #[test]
    fn palette_requires_twelve_colors() {
        let err = Palette::try_from(vec![Color::rgb(0); 11]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidPalette { len: 11 }));
        assert!(Palette::try_from(vec![Color::rgb(0); 12]).is_ok());
    }

    #[test]
    fn palette_from_json() {
        let json = serde_json::to_string(&Palette::default()).unwrap();
        assert!(json.starts_with("[\"DCE9F5\",\"E0F5D3\""));
        let short = r#"["DCE9F5"]"#;
        assert!(serde_json::from_str::<Palette>(short).is_err());
    }
}
