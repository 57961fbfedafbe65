use serde::{Deserialize, Serialize};

use crate::Point;

pub const DEFAULT_COLOR: &str = "#ffffff";
const MAX_COLOR_LEN: usize = 32;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
    #[serde(alias = "draw")]
    Freehand,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Freehand => "freehand",
        }
    }

    /// Parses a wire name. `draw` is the legacy name for freehand strokes.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "line" => Some(ShapeKind::Line),
            "rectangle" => Some(ShapeKind::Rectangle),
            "ellipse" => Some(ShapeKind::Ellipse),
            "freehand" | "draw" => Some(ShapeKind::Freehand),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FillStyle {
    #[default]
    Stroke,
    Fill,
}

impl FillStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stroke" => Some(FillStyle::Stroke),
            "fill" => Some(FillStyle::Fill),
            _ => None,
        }
    }
}

/// Stroke width in pixels, always within `MIN..=MAX`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(from = "f64", into = "u8")]
pub struct StrokeWidth(u8);

impl StrokeWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self(2)
    }
}

impl From<f64> for StrokeWidth {
    fn from(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        let clamped = value.round().clamp(Self::MIN as f64, Self::MAX as f64);
        Self(clamped as u8)
    }
}

impl From<StrokeWidth> for u8 {
    fn from(width: StrokeWidth) -> Self {
        width.0
    }
}

pub fn sanitize_color(color: String) -> String {
    let mut color = color.trim().to_string();
    if color.is_empty() {
        return DEFAULT_COLOR.to_string();
    }
    if color.len() > MAX_COLOR_LEN {
        let mut end = MAX_COLOR_LEN;
        while !color.is_char_boundary(end) {
            end -= 1;
        }
        color.truncate(end);
    }
    color
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub color: String,
    pub fill: FillStyle,
    pub stroke_width: StrokeWidth,
}

impl Style {
    pub fn new(color: impl Into<String>, fill: FillStyle, stroke_width: StrokeWidth) -> Self {
        Self {
            color: sanitize_color(color.into()),
            fill,
            stroke_width,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            fill: FillStyle::Stroke,
            stroke_width: StrokeWidth::default(),
        }
    }
}

/// Raw geometry as the user dragged it. Corner shapes keep both drag corners
/// un-normalized; normalization happens when the drawable is generated.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Line { from: Point, to: Point },
    Rectangle { from: Point, to: Point },
    Ellipse { from: Point, to: Point },
    Freehand { points: Vec<Point> },
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Line { .. } => ShapeKind::Line,
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Ellipse { .. } => ShapeKind::Ellipse,
            Geometry::Freehand { .. } => ShapeKind::Freehand,
        }
    }

    /// Builds corner geometry for `kind`. Freehand has no corners, so it
    /// becomes a two-point path.
    pub fn from_corners(kind: ShapeKind, from: Point, to: Point) -> Self {
        match kind {
            ShapeKind::Line => Geometry::Line { from, to },
            ShapeKind::Rectangle => Geometry::Rectangle { from, to },
            ShapeKind::Ellipse => Geometry::Ellipse { from, to },
            ShapeKind::Freehand => Geometry::Freehand {
                points: vec![from, to],
            },
        }
    }

    pub fn corners(&self) -> Option<(Point, Point)> {
        match self {
            Geometry::Line { from, to }
            | Geometry::Rectangle { from, to }
            | Geometry::Ellipse { from, to } => Some((*from, *to)),
            Geometry::Freehand { .. } => None,
        }
    }

    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Geometry::Freehand { points } => Some(points),
            _ => None,
        }
    }
}

/// Axis-aligned box with non-negative extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseFrame {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl EllipseFrame {
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            center: a.midpoint(b),
            radius_x: (b.x - a.x).abs() / 2.0,
            radius_y: (b.y - a.y).abs() / 2.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.radius_x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.radius_y * 2.0
    }
}

/// One drawn object. The handle is produced by the factory from the geometry
/// and style and is never patched afterwards; changing a shape means building
/// a new one.
#[derive(Clone, Debug)]
pub struct Shape<D> {
    geometry: Geometry,
    style: Style,
    handle: D,
}

impl<D> Shape<D> {
    pub(crate) fn new(geometry: Geometry, style: Style, handle: D) -> Self {
        Self {
            geometry,
            style,
            handle,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn handle(&self) -> &D {
        &self.handle
    }
}
