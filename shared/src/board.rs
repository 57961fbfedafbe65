use crate::config::BoardConfig;
use crate::controller::{Change, Controller};
use crate::document::Document;
use crate::factory::{ShapeFactory, Tool};
use crate::format::{decode_document, encode_document, FormatResult, ShapeRecord};
use crate::generator::{Generator, Surface};
use crate::shape::{FillStyle, Shape, StrokeWidth, Style};
use crate::storage::{Autosave, Storage};
use crate::Point;

/// Tool and style applied to the next gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolSettings {
    pub tool: Tool,
    pub style: Style,
}

/// The whiteboard: document, gesture state and autosave in one place.
/// Every operation that changes the document writes it back to storage
/// before returning.
pub struct Board<G: Generator, S> {
    factory: ShapeFactory<G>,
    document: Document<G::Drawable>,
    controller: Controller,
    autosave: Autosave<S>,
    settings: ToolSettings,
    background: String,
}

impl<G: Generator, S: Storage> Board<G, S> {
    /// Creates a board and restores whatever the storage holds.
    pub fn open(generator: G, storage: S, config: &BoardConfig) -> Self {
        let mut board = Self {
            factory: ShapeFactory::new(generator),
            document: Document::new(),
            controller: Controller::new(),
            autosave: Autosave::new(storage, config.storage_key.clone()),
            settings: ToolSettings {
                tool: config.default_tool,
                style: config.default_style(),
            },
            background: config.background.clone(),
        };
        let records = board.autosave.load();
        let shapes = board.rebuild(records);
        board.document.replace_all(shapes);
        board
    }

    pub fn document(&self) -> &Document<G::Drawable> {
        &self.document
    }

    pub fn storage(&self) -> &S {
        self.autosave.storage()
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn cursor(&self) -> &'static str {
        self.controller.cursor()
    }

    pub fn is_drawing(&self) -> bool {
        self.controller.is_drawing()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.settings.tool = tool;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.settings.style.color = crate::shape::sanitize_color(color.into());
    }

    pub fn set_fill(&mut self, fill: FillStyle) {
        self.settings.style.fill = fill;
    }

    pub fn set_stroke_width(&mut self, width: StrokeWidth) {
        self.settings.style.stroke_width = width;
    }

    pub fn pointer_down(&mut self, at: Point) -> Change {
        let change = self.controller.pointer_down(
            at,
            self.settings.tool,
            &self.settings.style,
            &self.factory,
            &mut self.document,
        );
        self.persist(change)
    }

    pub fn pointer_move(&mut self, at: Point) -> Change {
        let change = self
            .controller
            .pointer_move(at, &self.factory, &mut self.document);
        self.persist(change)
    }

    pub fn pointer_up(&mut self) -> Change {
        self.controller.pointer_up()
    }

    /// Drops the most recent shape. A no-op on an empty board.
    pub fn undo(&mut self) -> Change {
        let _ = self.controller.pointer_up();
        if self.document.pop().is_none() {
            return Change::None;
        }
        self.persist(Change::Document)
    }

    /// Empties the board and deletes the saved copy.
    pub fn clear(&mut self) -> Change {
        let _ = self.controller.pointer_up();
        self.document.clear();
        self.autosave.remove();
        Change::Document
    }

    pub fn export_json(&self) -> FormatResult<String> {
        encode_document(&self.document.records())
    }

    /// Replaces the whole document with the shapes in `text`. On error the
    /// document is left as it was.
    pub fn import_json(&mut self, text: &str) -> FormatResult<Change> {
        let records = decode_document(text)?;
        let shapes = self.rebuild(records);
        log::info!("imported {} shapes", shapes.len());
        let _ = self.controller.pointer_up();
        self.document.replace_all(shapes);
        Ok(self.persist(Change::Document))
    }

    /// Clears the surface and paints every shape in document order, so later
    /// shapes cover earlier ones.
    pub fn render<P: Surface<G::Drawable>>(&self, surface: &mut P) {
        surface.clear(&self.background);
        for shape in self.document.iter() {
            surface.draw(shape.handle());
        }
    }

    fn rebuild(&self, records: Vec<ShapeRecord>) -> Vec<Shape<G::Drawable>> {
        records
            .into_iter()
            .filter_map(ShapeRecord::into_parts)
            .map(|(geometry, style)| self.factory.build(geometry, style))
            .collect()
    }

    fn persist(&mut self, change: Change) -> Change {
        if change.is_document() {
            self.autosave.save(&self.document.records());
        }
        change
    }
}
