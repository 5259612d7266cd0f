use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::calendar::Holiday;
use crate::error::CalendarError;
use crate::grid::GridStyle;
use crate::palette::{Color, Palette};

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "yearcal.toml";

/// Twips in one centimeter.
pub const TWIPS_PER_CM: f64 = 566.93;

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Calendar year; the current year when unset.
    #[serde(default)]
    pub year: Option<i32>,

    /// Directory the document is written to.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Cell sizes and colors.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Holiday source settings.
    #[serde(default)]
    pub holidays: HolidayConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub row_height_cm: f64,
    pub cell_padding_cm: f64,
    pub font_size_pt: f64,
    pub holiday_text_color: Color,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            row_height_cm: 2.25,
            cell_padding_cm: 0.08,
            font_size_pt: 10.0,
            holiday_text_color: Color::RED,
            palette: Palette::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HolidayConfig {
    pub include_sundays: bool,
    pub extra_rules: Vec<Holiday>,
}

impl Config {
    /// Parse a configuration file.
    pub fn load(path: &Path) -> Result<Config, CalendarError> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `explicit` when given, else [`DEFAULT_CONFIG_FILE`] when it
    /// exists in the working directory, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Config, CalendarError> {
        match explicit {
            Some(path) => Config::load(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    Config::load(local)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }
}

impl LayoutConfig {
    /// Validate and convert to renderer units.
    pub fn to_style(&self) -> Result<GridStyle, CalendarError> {
        if !self.row_height_cm.is_finite() || self.row_height_cm <= 0.0 {
            return Err(CalendarError::InvalidLayout {
                field: "row_height_cm",
                reason: format!("{} (must be finite and > 0)", self.row_height_cm),
            });
        }
        if !self.cell_padding_cm.is_finite() || self.cell_padding_cm < 0.0 {
            return Err(CalendarError::InvalidLayout {
                field: "cell_padding_cm",
                reason: format!("{} (must be finite and >= 0)", self.cell_padding_cm),
            });
        }
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(CalendarError::InvalidLayout {
                field: "font_size_pt",
                reason: format!("{} (must be finite and > 0)", self.font_size_pt),
            });
        }
        Ok(GridStyle {
            row_height_twips: cm_to_twips(self.row_height_cm),
            cell_padding_twips: cm_to_twips(self.cell_padding_cm),
            font_half_points: (self.font_size_pt * 2.0).round() as usize,
            holiday_text_color: self.holiday_text_color,
            palette: self.palette.clone(),
        })
    }
}

/// Truncating conversion, the way word processors store lengths.
pub fn cm_to_twips(cm: f64) -> u32 {
    (cm * TWIPS_PER_CM) as u32
}
