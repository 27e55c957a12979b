use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::{AppError, Result};

/// Font families offered by the font picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    System,
    Courier,
    Helvetica,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
}

impl FontFamily {
    /// Name shown in the picker and stored in settings
    pub fn name(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Courier => "Courier",
            Self::Helvetica => "Helvetica",
            Self::TimesNewRoman => "Times New Roman",
        }
    }

    /// Get all available families, in picker order
    pub fn all() -> &'static [FontFamily] {
        &[
            Self::System,
            Self::Courier,
            Self::Helvetica,
            Self::TimesNewRoman,
        ]
    }

    /// Look up a family by its display name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|family| family.name() == name)
            .ok_or_else(|| AppError::UnsupportedFont(name.to_string()))
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Sizes offered by the font picker.
pub const FONT_SIZES: &[u32] = &[12, 14, 16, 18, 20, 24, 32];

/// Rendering attributes of the text view. Never affects the stored text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFont {
    family: FontFamily,
    size: u32,
}

impl DisplayFont {
    pub fn new(family: FontFamily, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(AppError::InvalidFontSize(size));
        }
        Ok(Self { family, size })
    }

    pub fn family(&self) -> FontFamily {
        self.family
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for DisplayFont {
    fn default() -> Self {
        Self {
            family: FontFamily::default(),
            size: DEFAULT_FONT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrips_every_family() {
        for family in FontFamily::all() {
            assert_eq!(FontFamily::from_name(family.name()).unwrap(), *family);
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        let err = FontFamily::from_name("Comic Sans").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFont(ref name) if name == "Comic Sans"));
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert!("courier".parse::<FontFamily>().is_err());
        assert_eq!("Courier".parse::<FontFamily>().unwrap(), FontFamily::Courier);
    }

    #[test]
    fn test_times_serializes_with_display_name() {
        let json = serde_json::to_string(&FontFamily::TimesNewRoman).unwrap();
        assert_eq!(json, "\"Times New Roman\"");
    }

    #[test]
    fn test_display_font_default() {
        let font = DisplayFont::default();
        assert_eq!(font.family(), FontFamily::System);
        assert_eq!(font.size(), 16);
    }

    #[test]
    fn test_display_font_rejects_zero_size() {
        assert!(matches!(
            DisplayFont::new(FontFamily::Courier, 0),
            Err(AppError::InvalidFontSize(0))
        ));
        assert!(DisplayFont::new(FontFamily::Courier, 1).is_ok());
    }

    #[test]
    fn test_picker_sizes_include_default() {
        assert!(FONT_SIZES.contains(&DEFAULT_FONT_SIZE));
    }
}
