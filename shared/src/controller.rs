use crate::document::Document;
use crate::factory::{ShapeFactory, Tool};
use crate::generator::Generator;
use crate::shape::Style;
use crate::Point;

pub const DRAWING_CURSOR: &str = "crosshair";
pub const IDLE_CURSOR: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq)]
enum DrawMode {
    Idle,
    Drawing { anchor: Point },
}

/// What an input event did to the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Change {
    None,
    Document,
}

impl Change {
    pub fn is_document(self) -> bool {
        self == Change::Document
    }
}

/// Converts a pointer position in client coordinates into canvas-local ones.
pub fn to_canvas_local(client: Point, canvas_origin: Point) -> Point {
    Point {
        x: client.x - canvas_origin.x,
        y: client.y - canvas_origin.y,
    }
}

/// Pointer gesture state machine. Only the most recently appended shape is
/// ever touched while drawing.
#[derive(Debug)]
pub struct Controller {
    mode: DrawMode,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            mode: DrawMode::Idle,
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.mode, DrawMode::Drawing { .. })
    }

    pub fn cursor(&self) -> &'static str {
        if self.is_drawing() {
            DRAWING_CURSOR
        } else {
            IDLE_CURSOR
        }
    }

    pub fn pointer_down<G: Generator>(
        &mut self,
        at: Point,
        tool: Tool,
        style: &Style,
        factory: &ShapeFactory<G>,
        document: &mut Document<G::Drawable>,
    ) -> Change {
        self.mode = DrawMode::Idle;
        let Some(at) = at.finite() else {
            return Change::None;
        };
        let Some(shape) = factory.start(tool, at, style) else {
            log::debug!("tool {tool:?} draws nothing");
            return Change::None;
        };
        document.push(shape);
        self.mode = DrawMode::Drawing { anchor: at };
        log::debug!("gesture started at ({}, {}) with {tool:?}", at.x, at.y);
        Change::Document
    }

    pub fn pointer_move<G: Generator>(
        &mut self,
        at: Point,
        factory: &ShapeFactory<G>,
        document: &mut Document<G::Drawable>,
    ) -> Change {
        let DrawMode::Drawing { anchor } = self.mode else {
            return Change::None;
        };
        let Some(at) = at.finite() else {
            return Change::None;
        };
        let Some(last) = document.last() else {
            self.mode = DrawMode::Idle;
            return Change::None;
        };
        let shape = factory.extend(last, anchor, at);
        if document.replace_last(shape) {
            Change::Document
        } else {
            Change::None
        }
    }

    pub fn pointer_up(&mut self) -> Change {
        if self.is_drawing() {
            log::debug!("gesture finished");
        }
        self.mode = DrawMode::Idle;
        Change::None
    }
}
