use serde::Deserialize;

use crate::dims::FlagDimensions;
use crate::error::FlagError;

/// Serde-driven flag configuration matching the TOML format.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagConfig {
    pub height: u32,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Presentation settings, all optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Pixels per cell in PNG output.
    pub scale: usize,
    /// Millimetres per cell in PDF output.
    pub cell_mm: f32,
    /// Text glyph for a circle cell.
    pub circle: String,
    /// Text glyph for a blank cell.
    pub blank: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            scale: 10,
            cell_mm: 2.0,
            circle: "#".to_string(),
            blank: ".".to_string(),
        }
    }
}

impl FlagConfig {
    /// Parse a TOML config string.
    pub fn from_toml(toml_str: &str) -> Result<FlagConfig, FlagError> {
        let config: FlagConfig =
            toml::from_str(toml_str).map_err(|e| FlagError::Config(e.to_string()))?;
        if config.height == 0 {
            return Err(FlagError::ZeroHeight);
        }
        Ok(config)
    }

    pub fn dimensions(&self) -> Result<FlagDimensions, FlagError> {
        FlagDimensions::from_height(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let config = FlagConfig::from_toml("height = 120").unwrap();
        assert_eq!(config.height, 120);
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.dimensions().unwrap().padding, 30);
    }

    #[test]
    fn parse_render_section() {
        let toml = r#"
            height = 40

            [render]
            scale = 4
            circle = "o"
        "#;
        let config = FlagConfig::from_toml(toml).unwrap();
        assert_eq!(config.render.scale, 4);
        assert_eq!(config.render.circle, "o");
        assert_eq!(config.render.blank, ".");
        assert_eq!(config.render.cell_mm, 2.0);
    }

    #[test]
    fn parse_zero_height() {
        let result = FlagConfig::from_toml("height = 0");
        assert!(matches!(result, Err(FlagError::ZeroHeight)));
    }

    #[test]
    fn parse_missing_height() {
        let result = FlagConfig::from_toml("[render]\nscale = 2");
        assert!(matches!(result, Err(FlagError::Config(_))));
    }

    #[test]
    fn parse_unknown_field() {
        let result = FlagConfig::from_toml("height = 10\nwidth = 15");
        assert!(matches!(result, Err(FlagError::Config(_))));
    }
}
