use serde::{Deserialize, Serialize};

use crate::factory::Tool;
use crate::shape::{FillStyle, StrokeWidth, Style, DEFAULT_COLOR};

/// Board settings. Every field is optional in JSON overrides.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    pub storage_key: String,
    pub export_file_name: String,
    pub background: String,
    /// Pixels subtracted from the viewport when sizing the canvas.
    pub viewport_margin: f64,
    pub default_tool: Tool,
    pub default_color: String,
    pub default_fill: FillStyle,
    pub default_stroke_width: StrokeWidth,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "elements".to_string(),
            export_file_name: "whiteBoard.json".to_string(),
            background: "black".to_string(),
            viewport_margin: 5.0,
            default_tool: Tool::Line,
            default_color: DEFAULT_COLOR.to_string(),
            default_fill: FillStyle::Stroke,
            default_stroke_width: StrokeWidth::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn default_style(&self) -> Style {
        Style::new(
            self.default_color.clone(),
            self.default_fill,
            self.default_stroke_width,
        )
    }

    /// Canvas size for a viewport, never negative.
    pub fn canvas_size(&self, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
        (
            (viewport_width - self.viewport_margin).max(0.0),
            (viewport_height - self.viewport_margin).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_overrides_keep_defaults() {
        let config = BoardConfig::from_json(
            r##"{"background":"#202020","defaultTool":"draw","defaultStrokeWidth":12}"##,
        )
        .unwrap();
        assert_eq!(config.background, "#202020");
        assert_eq!(config.default_tool, Tool::Freehand);
        assert_eq!(config.default_stroke_width.get(), 10);
        assert_eq!(config.storage_key, "elements");
        assert_eq!(config.export_file_name, "whiteBoard.json");
    }

    #[test]
    fn malformed_overrides_are_rejected() {
        assert!(BoardConfig::from_json(r#"{"defaultFill":"dotted"}"#).is_err());
    }

    #[test]
    fn canvas_size_subtracts_margin() {
        let config = BoardConfig::default();
        assert_eq!(config.canvas_size(800.0, 600.0), (795.0, 595.0));
        assert_eq!(config.canvas_size(2.0, 2.0), (0.0, 0.0));
    }
}
