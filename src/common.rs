use std::fmt;

use serde::{Deserialize, Serialize};

pub type TileValue = u64; // Number shown on a tile (2, 4, 8, ...)
pub type ColorValue = u8; // Color channel value (0-255)
pub type ColorRGB = [ColorValue; 3];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ColorRGB", into = "ColorRGB")]
pub struct Color {
    pub red: ColorValue,
    pub green: ColorValue,
    pub blue: ColorValue,
}

impl Color {
    pub const fn new(red: ColorValue, green: ColorValue, blue: ColorValue) -> Self {
        Color { red, green, blue }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl From<ColorRGB> for Color {
    fn from(c: ColorRGB) -> Self {
        Color::new(c[0], c[1], c[2])
    }
}

impl From<Color> for ColorRGB {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}

impl From<Color> for iced::Color {
    fn from(c: Color) -> Self {
        iced::Color::from_rgb8(c.red, c.green, c.blue)
    }
}

// Same notation a browser reports for an inline background color.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_css_rgb() {
        assert_eq!(Color::new(241, 101, 40).to_string(), "rgb(241, 101, 40)");
        assert_eq!(Color::new(0, 0, 0).to_string(), "rgb(0, 0, 0)");
    }

    #[test]
    fn formats_as_lowercase_hex() {
        assert_eq!(Color::new(241, 101, 40).to_hex(), "#f16528");
        assert_eq!(Color::new(0, 10, 255).to_hex(), "#000aff");
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, "[1,2,3]");
        let c: Color = serde_json::from_str("[241, 101, 40]").unwrap();
        assert_eq!(c, Color::new(241, 101, 40));
    }

    #[test]
    fn converts_to_iced_color() {
        let c: iced::Color = Color::new(255, 0, 0).into();
        assert_eq!(c, iced::Color::from_rgb8(255, 0, 0));
    }
}
