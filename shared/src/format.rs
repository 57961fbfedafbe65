use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::shape::{FillStyle, Geometry, Shape, ShapeKind, StrokeWidth, Style};
use crate::Point;

pub const EXPORT_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array of shapes, found {0}")]
    NotAnArray(&'static str),
}

pub type FormatResult<T> = Result<T, FormatError>;

/// Persisted form of a shape. Geometry fields that do not apply to the kind
/// are written as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub points: Option<Vec<[f64; 2]>>,
    pub color: String,
    pub style: FillStyle,
    pub stroke_width: StrokeWidth,
}

impl ShapeRecord {
    pub fn from_shape<D>(shape: &Shape<D>) -> Self {
        Self::from_parts(shape.geometry(), shape.style())
    }

    pub fn from_parts(geometry: &Geometry, style: &Style) -> Self {
        let mut record = Self {
            kind: geometry.kind(),
            x1: None,
            y1: None,
            x2: None,
            y2: None,
            points: None,
            color: style.color.clone(),
            style: style.fill,
            stroke_width: style.stroke_width,
        };
        if let Some((from, to)) = geometry.corners() {
            record.x1 = Some(from.x);
            record.y1 = Some(from.y);
            record.x2 = Some(to.x);
            record.y2 = Some(to.y);
        }
        if let Some(points) = geometry.points() {
            record.points = Some(points.iter().map(|point| [point.x, point.y]).collect());
        }
        record
    }

    /// Geometry and style described by this record, or `None` when the
    /// geometry the kind needs is missing or not finite.
    pub fn into_parts(self) -> Option<(Geometry, Style)> {
        let geometry = match self.kind {
            ShapeKind::Freehand => {
                let points = self
                    .points?
                    .into_iter()
                    .map(|[x, y]| Point::new(x, y).finite())
                    .collect::<Option<Vec<_>>>()?;
                if points.is_empty() {
                    return None;
                }
                Geometry::Freehand { points }
            }
            kind => {
                let from = Point::new(self.x1?, self.y1?).finite()?;
                let to = Point::new(self.x2?, self.y2?).finite()?;
                Geometry::from_corners(kind, from, to)
            }
        };
        let style = Style::new(self.color, self.style, self.stroke_width);
        Some((geometry, style))
    }
}

/// Lenient view of one entry. Style fields may be absent or of any JSON type
/// in hand-edited or foreign files; anything unusable falls back to defaults.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LooseRecord {
    x1: Option<f64>,
    y1: Option<f64>,
    x2: Option<f64>,
    y2: Option<f64>,
    points: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    color: Value,
    #[serde(default)]
    style: Value,
    #[serde(default)]
    stroke_width: Value,
}

impl LooseRecord {
    fn color(&self) -> String {
        self.color.as_str().unwrap_or_default().to_string()
    }

    fn fill(&self) -> FillStyle {
        self.style
            .as_str()
            .and_then(FillStyle::from_name)
            .unwrap_or_default()
    }

    /// Numbers are taken as they are; numeric strings such as `"4"` are
    /// parsed, since range inputs hand their value over as text.
    fn stroke_width(&self) -> StrokeWidth {
        let width = match &self.stroke_width {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        width.map(StrokeWidth::from).unwrap_or_default()
    }
}

pub fn encode_document(records: &[ShapeRecord]) -> FormatResult<String> {
    Ok(serde_json::to_string(records)?)
}

/// Parses a JSON array of shapes. Entries that are not objects or whose
/// `type` is not a known kind are dropped; so are entries whose geometry is
/// unusable. The returned records are all convertible to shapes.
pub fn decode_document(text: &str) -> FormatResult<Vec<ShapeRecord>> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => return Err(FormatError::NotAnArray(json_kind(&other))),
    };
    let total = entries.len();
    let mut records = Vec::with_capacity(total);
    for (index, entry) in entries.into_iter().enumerate() {
        let Some(kind) = entry
            .get("type")
            .and_then(Value::as_str)
            .and_then(ShapeKind::from_name)
        else {
            continue;
        };
        let loose = match serde_json::from_value::<LooseRecord>(entry) {
            Ok(loose) => loose,
            Err(error) => {
                log::warn!("dropping {} entry #{index}: {error}", kind.as_str());
                continue;
            }
        };
        let record = ShapeRecord {
            kind,
            color: loose.color(),
            style: loose.fill(),
            stroke_width: loose.stroke_width(),
            x1: loose.x1,
            y1: loose.y1,
            x2: loose.x2,
            y2: loose.y2,
            points: loose.points,
        };
        match record.into_parts() {
            Some((geometry, style)) => records.push(ShapeRecord::from_parts(&geometry, &style)),
            None => log::warn!(
                "dropping {} entry #{index}: missing or invalid geometry",
                kind.as_str()
            ),
        }
    }
    if records.len() < total {
        log::debug!("decoded {} of {total} entries", records.len());
    }
    Ok(records)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
