use serde::{Deserialize, Serialize};

use crate::generator::{Generator, RoughOptions};
use crate::shape::{sanitize_color, EllipseFrame, Frame, Geometry, Shape, ShapeKind, Style};
use crate::Point;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Line,
    Rectangle,
    Ellipse,
    #[serde(alias = "draw")]
    Freehand,
    /// Kept for saved settings from older builds; draws nothing.
    Erase,
}

impl Tool {
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
            Tool::Freehand => Some(ShapeKind::Freehand),
            Tool::Erase => None,
        }
    }
}

/// Builds shapes and their drawables through an explicitly supplied generator.
pub struct ShapeFactory<G> {
    generator: G,
}

impl<G: Generator> ShapeFactory<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generates the drawable for `geometry`. The color is sanitized here so
    /// every shape holds the color it will be saved with.
    pub fn build(&self, geometry: Geometry, style: Style) -> Shape<G::Drawable> {
        let style = Style {
            color: sanitize_color(style.color),
            ..style
        };
        let options = RoughOptions::for_shape(geometry.kind(), &style);
        let handle = match &geometry {
            Geometry::Line { from, to } => self.generator.line(*from, *to, &options),
            Geometry::Rectangle { from, to } => self
                .generator
                .rectangle(Frame::from_corners(*from, *to), &options),
            Geometry::Ellipse { from, to } => self
                .generator
                .ellipse(EllipseFrame::from_corners(*from, *to), &options),
            Geometry::Freehand { points } => self.generator.linear_path(points, &options),
        };
        Shape::new(geometry, style, handle)
    }

    /// The shape a gesture starts with: zero-length for corner tools, a
    /// single point for freehand. `None` when the tool draws nothing.
    pub fn start(&self, tool: Tool, at: Point, style: &Style) -> Option<Shape<G::Drawable>> {
        let geometry = match tool.shape_kind()? {
            ShapeKind::Freehand => Geometry::Freehand { points: vec![at] },
            kind => Geometry::from_corners(kind, at, at),
        };
        Some(self.build(geometry, style.clone()))
    }

    /// Rebuilds `shape` for a new pointer position. Corner shapes span
    /// `anchor`..`at`; freehand paths gain `at` and are regenerated whole.
    pub fn extend(&self, shape: &Shape<G::Drawable>, anchor: Point, at: Point) -> Shape<G::Drawable> {
        let geometry = match shape.geometry() {
            Geometry::Freehand { points } => {
                let mut points = points.clone();
                points.push(at);
                Geometry::Freehand { points }
            }
            other => Geometry::from_corners(other.kind(), anchor, at),
        };
        self.build(geometry, shape.style().clone())
    }
}
