mod board;
mod config;
mod controller;
mod document;
mod factory;
mod format;
mod generator;
mod shape;
mod storage;

use serde::{Deserialize, Serialize};

pub use board::{Board, ToolSettings};
pub use config::BoardConfig;
pub use controller::{to_canvas_local, Change, Controller};
pub use document::Document;
pub use factory::{ShapeFactory, Tool};
pub use format::{
    decode_document, encode_document, FormatError, ShapeRecord, EXPORT_MIME_TYPE,
};
pub use generator::{Generator, RoughOptions, Surface, HACHURE_FILL};
pub use shape::{
    sanitize_color, EllipseFrame, FillStyle, Frame, Geometry, Shape, ShapeKind, StrokeWidth,
    Style, DEFAULT_COLOR,
};
pub use storage::{Autosave, MemoryStorage, Storage, StorageError};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point unchanged when both coordinates are finite.
    pub fn finite(self) -> Option<Self> {
        if self.x.is_finite() && self.y.is_finite() {
            Some(self)
        } else {
            None
        }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}
